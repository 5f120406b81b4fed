//! Per-field inclusion rules
use crate::config::DumpConfig;
use crate::metadata::{
    ATOMIC_MARKER, ClassifiedMetadata, FIELD_DISABLE, FIELD_ENABLE, MetadataValue,
    NETWORK_VAR_NAMES,
};
use std::collections::HashSet;

/// Class-level evidence gathered once, then queried for each field.
#[derive(Debug)]
pub struct ClassVisibility {
    all_fields: bool,
    network_var_names: HashSet<String>,
}

impl ClassVisibility {
    pub fn new(
        class_name: &str,
        class_metadata: &[ClassifiedMetadata],
        config: &DumpConfig,
    ) -> Self {
        let atomic = class_metadata.iter().any(|m| m.name == ATOMIC_MARKER);
        let network_var_names = if atomic {
            HashSet::new()
        } else {
            class_metadata
                .iter()
                .filter(|m| m.name == NETWORK_VAR_NAMES)
                .filter_map(|m| match &m.value {
                    MetadataValue::NamePair { field_name, .. } if !field_name.is_empty() => {
                        Some(field_name.clone())
                    }
                    _ => None,
                })
                .collect()
        };
        Self {
            all_fields: atomic || config.is_always_visible(class_name),
            network_var_names,
        }
    }

    /// An explicit disable wins over every other rule.
    pub fn is_visible(&self, field_name: &str, field_metadata: &[ClassifiedMetadata]) -> bool {
        if field_metadata.iter().any(|m| m.name == FIELD_DISABLE) {
            return false;
        }
        self.all_fields
            || self.network_var_names.contains(field_name)
            || field_metadata.iter().any(|m| m.name == FIELD_ENABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(name: &str) -> ClassifiedMetadata {
        ClassifiedMetadata {
            name: name.to_string(),
            value: MetadataValue::None,
        }
    }

    fn var_name(field_name: &str) -> ClassifiedMetadata {
        ClassifiedMetadata {
            name: NETWORK_VAR_NAMES.to_string(),
            value: MetadataValue::NamePair {
                type_name: "int32".to_string(),
                field_name: field_name.to_string(),
            },
        }
    }

    #[test]
    fn test_default_is_hidden() {
        let visibility = ClassVisibility::new("CFoo", &[], &DumpConfig::default());
        assert!(!visibility.is_visible("m_nCount", &[]));
        assert!(!visibility.is_visible("m_nCount", &[marker("MPropertyFriendlyName")]));
    }

    #[test]
    fn test_network_var_names() {
        let visibility = ClassVisibility::new(
            "CFoo",
            &[var_name("m_iHealth"), var_name("m_iArmor")],
            &DumpConfig::default(),
        );
        assert!(visibility.is_visible("m_iHealth", &[]));
        assert!(visibility.is_visible("m_iArmor", &[]));
        assert!(!visibility.is_visible("m_iMana", &[]));
        assert!(!visibility.is_visible("m_iHealth", &[marker(FIELD_DISABLE)]));
    }

    #[test]
    fn test_field_enable() {
        let visibility = ClassVisibility::new("CFoo", &[], &DumpConfig::default());
        assert!(visibility.is_visible("m_flSpeed", &[marker(FIELD_ENABLE)]));
        assert!(!visibility.is_visible(
            "m_flSpeed",
            &[marker(FIELD_ENABLE), marker(FIELD_DISABLE)]
        ));
    }

    #[test]
    fn test_atomic_class() {
        let visibility =
            ClassVisibility::new("CFoo", &[marker(ATOMIC_MARKER)], &DumpConfig::default());
        assert!(visibility.is_visible("anything", &[]));
        assert!(!visibility.is_visible("anything", &[marker(FIELD_DISABLE)]));
    }

    #[test]
    fn test_always_visible_classes() {
        let config = DumpConfig::default();
        let visibility = ClassVisibility::new("ServerAuthoritativeWeaponSlot_t", &[], &config);
        assert!(visibility.is_visible("m_unClass", &[]));

        let config = DumpConfig {
            always_visible_classes: vec![],
            ..DumpConfig::default()
        };
        let visibility = ClassVisibility::new("ServerAuthoritativeWeaponSlot_t", &[], &config);
        assert!(!visibility.is_visible("m_unClass", &[]));
    }
}
