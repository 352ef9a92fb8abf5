//! UI panels for the ruler demo.

pub mod header;
pub mod media_panel;
pub mod status_bar;
pub mod timeline_panel;
