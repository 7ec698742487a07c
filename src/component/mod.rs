//! 功能元件模組

pub mod batch_organizer;

pub use batch_organizer::BatchOrganizer;
