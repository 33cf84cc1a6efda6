pub mod app;
pub mod doc;
pub mod input;
pub mod runner;
pub mod ui;

pub use crate::app::{App, Document, Section, SectionId, SidebarLink};
