//! Helpers shared by the text formats

pub mod english;
pub mod provenance;

pub use english::join_list;
pub use provenance::{annotation, provenance_line};
