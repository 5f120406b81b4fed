use crate::document::DocumentBuilder;
use schemadump_schema::EnumBinding;

/// Unsigned storage type implied by an enum's alignment.
pub fn storage_type_name(align: u8) -> &'static str {
    match align {
        1 => "uint8",
        2 => "uint16",
        4 => "uint32",
        8 => "uint64",
        _ => "invalid",
    }
}

/// Writes the `enums` member of a scope document.
pub fn write_enums(builder: &mut DocumentBuilder, enums: &[EnumBinding]) {
    builder.key("enums").begin_object();
    for binding in enums {
        builder
            .key(&binding.name)
            .begin_object()
            .key("align")
            .literal_value(binding.align)
            .key("type")
            .string_value(storage_type_name(binding.align));

        builder.key("items").begin_array();
        for enumerator in &binding.enumerators {
            builder
                .begin_object()
                .key("name")
                .string_value(&enumerator.name)
                .key("value");
            // the host stores -1 as u64::MAX
            if enumerator.value == u64::MAX {
                builder.literal_value(-1);
            } else {
                builder.literal_value(enumerator.value);
            }
            builder.end_object();
        }
        builder.end_array();

        builder.end_object();
    }
    builder.end_object();
}
