use crate::TypeScope;
use anyhow::Result;

/// Seam to whatever owns the reflection tables.
///
/// Implementations locate the scopes in the host; the dumper only borrows them for one pass.
/// An error from either accessor means the reflection system itself is unavailable.
pub trait SchemaSystem {
    fn type_scopes(&self) -> Result<Vec<&TypeScope>>;

    /// Scope holding the types that belong to no module.
    fn global_scope(&self) -> Result<&TypeScope>;
}
