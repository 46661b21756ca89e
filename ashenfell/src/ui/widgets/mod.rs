//! TUI widgets for the Ashenfell game.

pub mod battle_log;
pub mod menu;
pub mod stat_panel;

pub use battle_log::BattleLogWidget;
pub use menu::MenuWidget;
pub use stat_panel::StatPanelWidget;
