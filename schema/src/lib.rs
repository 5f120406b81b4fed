//! schemadump schema model
//! read-only view of a host's reflection tables: scopes, classes, fields, type trees, enums and annotations

// crate-specific lint exceptions:
#![allow(clippy::missing_errors_doc)]

mod binding;
mod metadata;
mod snapshot;
mod system;
mod types;

pub use binding::*;
pub use metadata::*;
pub use snapshot::*;
pub use system::*;
pub use types::*;
