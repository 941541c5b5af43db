//! # vidprompt-core
//!
//! Builder state for video generation prompts.
//!
//!     A builder state is an immutable snapshot of everything the user has configured: the prompt
//!     text, the target model, an open set of parameters, and a provenance side-table recording
//!     where each parameter value came from (user input, a preset, an intent, or generated
//!     defaults). Every user action produces a fresh snapshot; nothing here mutates a snapshot in
//!     place.
//!
//! File Layout
//!
//!     .
//!     ├── error.rs          # Error enum for the crate
//!     ├── params.rs         # ParamValue and the ordered Parameters map
//!     ├── provenance.rs     # Source, ProvenanceEntry and the Provenance side-table
//!     ├── state.rs          # BuilderState, Metadata and the create_builder_state constructor
//!     ├── transitions.rs    # Snapshot-to-snapshot edits (apply preset, edit field, ...)
//!     └── catalog           # Embedded preset and intent catalogs
//!
//!     Serialization of a snapshot into output formats lives in `vidprompt-babel`; this crate only
//!     owns the data model and its JSON round-trip.

pub mod catalog;
pub mod error;
pub mod params;
pub mod provenance;
pub mod state;
pub mod transitions;

pub use catalog::{PresetCategory, PromptIntent, VideoPreset};
pub use error::Error;
pub use params::{ParamValue, Parameters};
pub use provenance::{Provenance, ProvenanceEntry, Source};
pub use state::{create_builder_state, BuilderState, BuilderStateBuilder, Metadata, STATE_VERSION};
pub use transitions::{parse_assignment, parse_assignments, state_from_defaults, state_from_preset};

pub type Result<T> = std::result::Result<T, Error>;
