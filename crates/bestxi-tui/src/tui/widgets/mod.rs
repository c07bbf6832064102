// TUI widget modules for each dashboard panel.

pub mod bench;
pub mod modules;
pub mod pitch;
pub mod player_detail;
pub mod status_bar;
