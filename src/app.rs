pub mod core;
pub mod settings;
pub mod types;

pub use core::App;
pub use types::{Document, Section, SectionId, SidebarLink};
