use crate::document::DocumentBuilder;
use crate::error::DumpError;
use anyhow::Result;
use schemadump_schema::{AtomicKind, TypeDescriptor, TypeKind};

/// Writes a type tree as nested objects.
///
/// Declared classes and enums are written by name only. Fails when the tree is deeper than
/// `max_depth`.
pub fn write_type(
    builder: &mut DocumentBuilder,
    type_desc: &TypeDescriptor,
    max_depth: usize,
) -> Result<()> {
    write_type_at_depth(builder, type_desc, 0, max_depth)
}

fn write_type_at_depth(
    builder: &mut DocumentBuilder,
    type_desc: &TypeDescriptor,
    depth: usize,
    max_depth: usize,
) -> Result<()> {
    if depth >= max_depth {
        return Err(DumpError::TypeTooDeep {
            type_name: type_desc.name.clone(),
            limit: max_depth,
        }
        .into());
    }
    builder
        .begin_object()
        .key("name")
        .string_value(&type_desc.name)
        .key("category")
        .literal_value(type_desc.category().code());

    match &type_desc.kind {
        TypeKind::Atomic { atomic } => {
            builder.key("atomic").literal_value(atomic.code());
            match atomic {
                AtomicKind::T { inner, outer } => {
                    if let Some(outer) = outer {
                        builder.key("outer").string_value(outer);
                    }
                    builder.key("inner");
                    write_type_at_depth(builder, inner, depth + 1, max_depth)?;
                }
                AtomicKind::CollectionOfT { inner } => {
                    builder.key("inner");
                    write_type_at_depth(builder, inner, depth + 1, max_depth)?;
                }
                AtomicKind::Basic | AtomicKind::TT | AtomicKind::None => {}
            }
        }
        TypeKind::FixedArray { count, inner } => {
            builder.key("arraySize").literal_value(count);
            builder.key("inner");
            write_type_at_depth(builder, inner, depth + 1, max_depth)?;
        }
        TypeKind::Pointer { inner } => {
            builder.key("inner");
            write_type_at_depth(builder, inner, depth + 1, max_depth)?;
        }
        TypeKind::Builtin
        | TypeKind::Bitfield
        | TypeKind::DeclaredClass { .. }
        | TypeKind::DeclaredEnum { .. }
        | TypeKind::None => {}
    }

    builder.end_object();
    Ok(())
}
