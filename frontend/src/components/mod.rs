pub mod history_list;
pub mod reel_display;
pub mod reset_control;

pub use history_list::HistoryList;
pub use reel_display::ReelDisplay;
pub use reset_control::ResetControl;
