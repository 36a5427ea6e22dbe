/// The companies the prediction service ships models for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Company {
    Apple,
    Amazon,
    MetaPlatforms,
    Google,
    Microsoft,
    Netflix,
    Nvidia,
    TataConsultancy,
}

const ALL_COMPANIES: [Company; 8] = [
    Company::Apple,
    Company::Amazon,
    Company::MetaPlatforms,
    Company::Google,
    Company::Microsoft,
    Company::Netflix,
    Company::Nvidia,
    Company::TataConsultancy,
];

impl Company {
    pub fn all() -> &'static [Company] {
        &ALL_COMPANIES
    }

    pub fn ticker(&self) -> &'static str {
        match self {
            Company::Apple => "AAPL",
            Company::Amazon => "AMZN",
            Company::MetaPlatforms => "META",
            Company::Google => "GOOG",
            Company::Microsoft => "MSFT",
            Company::Netflix => "NFLX",
            Company::Nvidia => "NVDA",
            Company::TataConsultancy => "TCS",
        }
    }
}

impl std::fmt::Display for Company {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Company::Apple => "Apple",
            Company::Amazon => "Amazon",
            Company::MetaPlatforms => "Meta Platforms",
            Company::Google => "Google",
            Company::Microsoft => "Microsoft",
            Company::Netflix => "Netflix",
            Company::Nvidia => "Nvidia",
            Company::TataConsultancy => "Tata Consultancy Services (TCS)",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_company_has_a_ticker_and_label() {
        assert_eq!(Company::all().len(), 8);
        for company in Company::all() {
            assert!(!company.ticker().is_empty());
            assert!(!company.to_string().is_empty());
        }
        assert_eq!(Company::MetaPlatforms.to_string(), "Meta Platforms");
        assert_eq!(Company::MetaPlatforms.ticker(), "META");
    }
}
