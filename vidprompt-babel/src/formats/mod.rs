//! Format implementations
//!
//! This module contains all format implementations that render builder state as text.

pub mod json;
pub mod markdown;
pub mod natural;
pub mod yaml;

pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
pub use natural::{NaturalFormat, NaturalOptions, TimeZoneMode};
pub use yaml::YamlFormat;
