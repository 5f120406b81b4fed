use serde::{Deserialize, Serialize};

/// Raw annotation payload, as read from the host.
///
/// The host stores every annotation value in the same untyped slot and never says which form it
/// holds. The collaborator hands over whichever raw form it read; deciding how to interpret it is
/// left to the dumper's name table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawValue {
    #[default]
    Empty,
    /// narrow string pointer, `None` when the pointer was null
    Str(Option<String>),
    /// fixed-capacity, nul-padded character buffer
    Buffer(Vec<u8>),
    Int(i64),
    Float(f32),
    NamePair {
        #[serde(default)]
        type_name: String,
        #[serde(default)]
        field_name: String,
    },
}

impl RawValue {
    pub fn as_str(&self) -> Option<&str> {
        if let RawValue::Str(Some(s)) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    /// Decodes a character buffer up to its first nul byte.
    pub fn as_buffer_str(&self) -> Option<String> {
        if let RawValue::Buffer(bytes) = self {
            let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
            Some(String::from_utf8_lossy(&bytes[..end]).into_owned())
        } else {
            None
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        if let RawValue::Int(val) = self {
            Some(*val)
        } else {
            None
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        if let RawValue::Float(val) = self {
            Some(*val)
        } else {
            None
        }
    }

    /// Returns `(type_name, field_name)`.
    pub fn as_name_pair(&self) -> Option<(&str, &str)> {
        if let RawValue::NamePair {
            type_name,
            field_name,
        } = self
        {
            Some((type_name.as_str(), field_name.as_str()))
        } else {
            None
        }
    }
}

/// A named annotation attached to a class or a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataEntry {
    pub name: String,
    #[serde(default)]
    pub value: RawValue,
}

impl MetadataEntry {
    pub fn new(name: impl Into<String>, value: RawValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Annotation whose presence is its only information.
    pub fn marker(name: impl Into<String>) -> Self {
        Self::new(name, RawValue::Empty)
    }
}
