pub mod commands;
pub mod web_app_data;

pub enum HandleStatus {
    Handled,
    Skipped,
}
