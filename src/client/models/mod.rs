pub mod app_state;
pub mod company;
pub mod messages;
pub mod prediction;
