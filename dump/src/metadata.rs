//! Classification of untyped annotation payloads
//!
//! The host never tags annotation values with their kind; the kind is implied by the annotation's
//! name. Entries are classified once, when a class is picked up, and every later step works on
//! [`ClassifiedMetadata`].
use crate::document::DocumentBuilder;
use lazy_static::lazy_static;
use schemadump_schema::MetadataEntry;
use std::collections::HashMap;
use xxhash_rust::xxh32::xxh32;

/// Class-level marker: every field of the class is visible.
pub const ATOMIC_MARKER: &str = "MNetworkVarsAtomic";
/// Class-level entries naming visible fields. Consumed by the visibility filter, never rendered.
pub const NETWORK_VAR_NAMES: &str = "MNetworkVarNames";
pub const FIELD_ENABLE: &str = "MNetworkEnable";
pub const FIELD_DISABLE: &str = "MNetworkDisable";

/// Present on some types but pointing at data that cannot be reproduced outside the host.
const SUPPRESSED_ENTRY: &str = "MPulseCellOutflowHookInfo";

const NAME_PAIR_ENTRIES: &[&str] = &[NETWORK_VAR_NAMES, "MNetworkVarTypeOverride"];

const OPAQUE_STRING_ENTRIES: &[&str] = &[
    "MResourceTypeForInfoType",
    "MScriptDescription",
    "MPropertyCustomFGDType",
    SUPPRESSED_ENTRY,
];

const STRING_ENTRIES: &[&str] = &[
    "MNetworkChangeCallback",
    "MPropertyFriendlyName",
    "MPropertyDescription",
    "MPropertyAttributeRange",
    "MPropertyStartGroup",
    "MPropertyAttributeChoiceName",
    "MPropertyGroupName",
    "MNetworkUserGroup",
    "MNetworkAlias",
    "MNetworkTypeAlias",
    "MNetworkSerializer",
    "MPropertyAttributeEditor",
    "MPropertySuppressExpr",
    "MKV3TransferName",
    "MNetworkEncoder",
    "MNetworkSendProxyRecipientsFilter",
    "MFieldVerificationName",
    "MVDataUniqueMonotonicInt",
    "MNetworkIncludeByName",
    "MNetworkExcludeByName",
    "MNetworkIncludeByUserGroup",
    "MNetworkExcludeByUserGroup",
    "MNetworkOverride",
];

const INTEGER_ENTRIES: &[&str] = &[
    "MNetworkVarEmbeddedFieldOffsetDelta",
    "MNetworkBitCount",
    "MNetworkPriority",
    "MPropertySortPriority",
    "MNetworkEncodeFlags",
    "MParticleMinVersion",
    "MParticleMaxVersion",
];

const FLOAT_ENTRIES: &[&str] = &["MNetworkMinValue", "MNetworkMaxValue"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MetadataKind {
    NamePair,
    OpaqueString,
    String,
    Integer,
    Float,
}

fn hash_name(name: &str) -> u32 {
    xxh32(name.as_bytes(), 0)
}

fn make_kind_table() -> HashMap<u32, MetadataKind> {
    let tables = [
        (NAME_PAIR_ENTRIES, MetadataKind::NamePair),
        (OPAQUE_STRING_ENTRIES, MetadataKind::OpaqueString),
        (STRING_ENTRIES, MetadataKind::String),
        (INTEGER_ENTRIES, MetadataKind::Integer),
        (FLOAT_ENTRIES, MetadataKind::Float),
    ];
    let mut kinds = HashMap::new();
    for (names, kind) in tables {
        for name in names {
            let previous = kinds.insert(hash_name(name), kind);
            debug_assert!(previous.is_none(), "{name} listed twice");
        }
    }
    kinds
}

lazy_static! {
    static ref METADATA_KINDS: HashMap<u32, MetadataKind> = make_kind_table();
    static ref SUPPRESSED_HASH: u32 = hash_name(SUPPRESSED_ENTRY);
}

/// Kind implied by an annotation name, `None` for names outside the tables.
fn metadata_kind(name: &str) -> Option<MetadataKind> {
    METADATA_KINDS.get(&hash_name(name)).copied()
}

#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    /// acknowledged by name only
    None,
    String(String),
    Integer(i64),
    Float(f32),
    NamePair {
        type_name: String,
        field_name: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedMetadata {
    pub name: String,
    pub value: MetadataValue,
}

impl ClassifiedMetadata {
    pub fn write_json(&self, builder: &mut DocumentBuilder) {
        builder.begin_object().key("name").string_value(&self.name);
        match &self.value {
            MetadataValue::None => {}
            MetadataValue::String(value) => {
                builder.key("value").string_value(value);
            }
            MetadataValue::Integer(value) => {
                builder.key("value").literal_value(value);
            }
            MetadataValue::Float(value) if value.is_finite() => {
                builder.key("value").literal_value(value);
            }
            MetadataValue::Float(_) => {
                builder.key("value").raw_line("null");
            }
            MetadataValue::NamePair {
                type_name,
                field_name,
            } => {
                builder.key("value").begin_object();
                if !type_name.is_empty() {
                    builder.key("type").string_value(type_name);
                }
                if !field_name.is_empty() {
                    builder.key("name").string_value(field_name);
                }
                builder.end_object();
            }
        }
        builder.end_object();
    }
}

/// Interprets an entry's payload according to its name; `None` means the entry must not be emitted.
pub fn classify(entry: &MetadataEntry) -> Option<ClassifiedMetadata> {
    if hash_name(&entry.name) == *SUPPRESSED_HASH {
        log::debug!("suppressing metadata {}", entry.name);
        return None;
    }
    let raw = &entry.value;
    let value = match metadata_kind(&entry.name) {
        None => Some(MetadataValue::None),
        Some(MetadataKind::NamePair) => {
            raw.as_name_pair()
                .map(|(type_name, field_name)| MetadataValue::NamePair {
                    type_name: type_name.to_owned(),
                    field_name: field_name.to_owned(),
                })
        }
        Some(MetadataKind::OpaqueString) => raw.as_buffer_str().map(MetadataValue::String),
        Some(MetadataKind::String) => raw.as_str().map(|s| MetadataValue::String(s.to_owned())),
        Some(MetadataKind::Integer) => raw.as_int().map(MetadataValue::Integer),
        Some(MetadataKind::Float) => raw.as_float().map(MetadataValue::Float),
    };
    let value = value.unwrap_or_else(|| {
        log::debug!("metadata {} holds {:?}, rendering it by name", entry.name, raw);
        MetadataValue::None
    });
    Some(ClassifiedMetadata {
        name: entry.name.clone(),
        value,
    })
}

pub fn classify_all(entries: &[MetadataEntry]) -> Vec<ClassifiedMetadata> {
    entries.iter().filter_map(classify).collect()
}
