//! schemadump : reflection scopes to json
//!
//! Turns the classes, enums and type trees of a host's reflection system into one json document
//! per scope, ordered so that a single-pass code generator sees dependencies first.

// crate-specific lint exceptions:
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

mod classes;
pub mod config;
pub mod document;
pub mod enums;
pub mod error;
pub mod layout;
pub mod metadata;
pub mod ordering;
pub mod scope;
pub mod type_json;
pub mod visibility;

pub use config::DumpConfig;
pub use error::DumpError;
pub use scope::{DumpSummary, dump_all_scopes, dump_scope, render_scope};
