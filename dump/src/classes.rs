use crate::config::DumpConfig;
use crate::document::DocumentBuilder;
use crate::layout::ScopeIndex;
use crate::metadata::{ClassifiedMetadata, FIELD_ENABLE, NETWORK_VAR_NAMES, classify_all};
use crate::type_json::write_type;
use crate::visibility::ClassVisibility;
use anyhow::{Context, Result};
use schemadump_schema::{ClassBinding, FieldDescriptor};

/// Writes the `classes` member of a scope document, in the given order.
pub fn write_classes(
    builder: &mut DocumentBuilder,
    ordered_classes: &[&ClassBinding],
    index: &ScopeIndex<'_>,
    config: &DumpConfig,
) -> Result<()> {
    builder.key("classes").begin_object();
    for class in ordered_classes {
        write_class(builder, class, index, config)
            .with_context(|| format!("writing class {}", class.name))?;
    }
    builder.end_object();
    Ok(())
}

fn write_class(
    builder: &mut DocumentBuilder,
    class: &ClassBinding,
    index: &ScopeIndex<'_>,
    config: &DumpConfig,
) -> Result<()> {
    let class_metadata = classify_all(&class.metadata);
    let visibility = ClassVisibility::new(&class.name, &class_metadata, config);

    builder.key(&class.name).begin_object();
    if let Some(parent) = &class.parent {
        builder.key("parent").string_value(parent);
    }
    builder
        .key("size")
        .literal_value(class.size)
        .key("align")
        .literal_value(class.align);

    builder.key("metadata").begin_array();
    for entry in class_metadata.iter().filter(|m| m.name != NETWORK_VAR_NAMES) {
        entry.write_json(builder);
    }
    builder.end_array();

    builder.key("fields").begin_array();
    for field in &class.fields {
        let field_metadata = classify_all(&field.metadata);
        if !visibility.is_visible(&field.name, &field_metadata) {
            continue;
        }
        write_field(builder, field, &field_metadata, index, config)
            .with_context(|| format!("writing field {}", field.name))?;
    }
    builder.end_array();

    builder.end_object();
    Ok(())
}

fn write_field(
    builder: &mut DocumentBuilder,
    field: &FieldDescriptor,
    field_metadata: &[ClassifiedMetadata],
    index: &ScopeIndex<'_>,
    config: &DumpConfig,
) -> Result<()> {
    // bitfields and atomics have no computable size
    let size = index.type_size(&field.type_desc).unwrap_or(0);
    builder
        .begin_object()
        .key("name")
        .string_value(&field.name)
        .key("offset")
        .literal_value(field.offset)
        .key("size")
        .literal_value(size);

    builder.key("type");
    write_type(builder, &field.type_desc, config.max_type_depth)?;

    builder.key("metadata").begin_array();
    for entry in field_metadata.iter().filter(|m| m.name != FIELD_ENABLE) {
        entry.write_json(builder);
    }
    builder.end_array();

    builder.end_object();
    Ok(())
}
