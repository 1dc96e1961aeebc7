//! Collaborators around the sheet engine: finding photos and printing sheets.

pub mod discovery;
pub mod printing;

pub use discovery::{DirectorySource, ImageSource};
