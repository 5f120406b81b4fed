use crate::{MetadataEntry, TypeDescriptor};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_desc: TypeDescriptor,
    pub offset: u32,
    #[serde(default)]
    pub metadata: Vec<MetadataEntry>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, type_desc: TypeDescriptor, offset: u32) -> Self {
        Self {
            name: name.into(),
            type_desc,
            offset,
            metadata: vec![],
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, entry: MetadataEntry) -> Self {
        self.metadata.push(entry);
        self
    }
}

/// A reflected class. Fields keep their declaration order.
/// The base class is referenced by name: single inheritance only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassBinding {
    pub name: String,
    pub size: u32,
    #[serde(default)]
    pub align: u32,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default)]
    pub metadata: Vec<MetadataEntry>,
}

impl ClassBinding {
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        Self {
            name: name.into(),
            size,
            align: 0,
            fields: vec![],
            parent: None,
            metadata: vec![],
        }
    }

    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, entry: MetadataEntry) -> Self {
        self.metadata.push(entry);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumeratorValue {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumBinding {
    pub name: String,
    /// storage width in bytes: 1, 2, 4 or 8
    pub align: u8,
    #[serde(default)]
    pub enumerators: Vec<EnumeratorValue>,
}

impl EnumBinding {
    pub fn new(name: impl Into<String>, align: u8) -> Self {
        Self {
            name: name.into(),
            align,
            enumerators: vec![],
        }
    }

    #[must_use]
    pub fn with_enumerator(mut self, name: impl Into<String>, value: u64) -> Self {
        self.enumerators.push(EnumeratorValue {
            name: name.into(),
            value,
        });
        self
    }
}

/// Named grouping of classes and enums, typically one per host module.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TypeScope {
    pub name: String,
    #[serde(default)]
    pub classes: Vec<ClassBinding>,
    #[serde(default)]
    pub enums: Vec<EnumBinding>,
}

impl TypeScope {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classes: vec![],
            enums: vec![],
        }
    }
}
