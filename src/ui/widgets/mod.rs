pub mod content;
pub mod footer;
pub mod header;
pub mod sidebar;
