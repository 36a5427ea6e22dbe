pub mod result_panel;
