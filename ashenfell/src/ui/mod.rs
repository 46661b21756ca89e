//! UI module for the Ashenfell TUI.

pub mod art;
pub mod layout;
pub mod render;
pub mod theme;
pub mod widgets;
