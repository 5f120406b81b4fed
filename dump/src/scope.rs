//! One document per type scope
use crate::classes::write_classes;
use crate::config::DumpConfig;
use crate::document::DocumentBuilder;
use crate::enums::write_enums;
use crate::error::DumpError;
use crate::layout::ScopeIndex;
use crate::ordering::order_classes;
use anyhow::{Context, Result};
use log::info;
use schemadump_schema::{SchemaSystem, TypeScope};
use std::path::{Path, PathBuf};

/// Files written by a dump pass, in processing order.
#[derive(Debug, Default)]
pub struct DumpSummary {
    pub written: Vec<PathBuf>,
}

/// Renders the document of one scope: `{"enums": {...}, "classes": {...}}`.
pub fn render_scope(scope: &TypeScope, config: &DumpConfig) -> Result<String> {
    let index = ScopeIndex::new(scope, config.max_type_depth);
    let ordered_classes = order_classes(&scope.classes);

    let mut builder = DocumentBuilder::new();
    builder.begin_object();
    write_enums(&mut builder, &scope.enums);
    write_classes(&mut builder, &ordered_classes, &index, config)?;
    builder.end_object();
    Ok(builder.serialize())
}

/// Path of the document written for a scope.
pub fn scope_output_path(scope_name: &str, out_dir: &Path, config: &DumpConfig) -> PathBuf {
    out_dir.join(format!("{}.{}", config.file_stem(scope_name), config.extension))
}

/// Writes `<out_dir>/<stem>.<ext>` for one scope, replacing any previous file.
pub fn dump_scope(scope: &TypeScope, out_dir: &Path, config: &DumpConfig) -> Result<PathBuf> {
    let document = render_scope(scope, config)
        .with_context(|| format!("rendering scope {}", scope.name))?;
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;
    let path = scope_output_path(&scope.name, out_dir, config);
    std::fs::write(&path, document).with_context(|| format!("writing {}", path.display()))?;
    info!(
        "wrote {} ({} classes, {} enums) to {}",
        scope.name,
        scope.classes.len(),
        scope.enums.len(),
        path.display()
    );
    Ok(path)
}

/// Dumps every type scope of the system, then its global scope.
///
/// Stops at the first failure; documents already written stay in place.
pub fn dump_all_scopes(
    system: &dyn SchemaSystem,
    out_dir: &Path,
    config: &DumpConfig,
) -> Result<DumpSummary> {
    let scopes = system
        .type_scopes()
        .map_err(|e| DumpError::SchemaUnavailable(format!("{e:#}")))?;
    let global = system
        .global_scope()
        .map_err(|e| DumpError::SchemaUnavailable(format!("{e:#}")))?;

    let mut summary = DumpSummary::default();
    for scope in scopes.into_iter().chain(std::iter::once(global)) {
        summary.written.push(dump_scope(scope, out_dir, config)?);
    }
    Ok(summary)
}
