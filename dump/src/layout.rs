use schemadump_schema::{ClassBinding, EnumBinding, TypeDescriptor, TypeKind, TypeScope};
use std::collections::HashMap;

const POINTER_SIZE: u32 = 8;

const BUILTIN_SIZES: &[(&str, u32)] = &[
    ("bool", 1),
    ("char", 1),
    ("int8", 1),
    ("uint8", 1),
    ("int16", 2),
    ("uint16", 2),
    ("int32", 4),
    ("uint32", 4),
    ("float32", 4),
    ("int64", 8),
    ("uint64", 8),
    ("float64", 8),
];

/// Name lookups into one scope, built once per pass.
#[derive(Debug)]
pub struct ScopeIndex<'a> {
    classes: HashMap<&'a str, &'a ClassBinding>,
    enums: HashMap<&'a str, &'a EnumBinding>,
    max_depth: usize,
}

impl<'a> ScopeIndex<'a> {
    pub fn new(scope: &'a TypeScope, max_depth: usize) -> Self {
        Self {
            classes: scope.classes.iter().map(|c| (c.name.as_str(), c)).collect(),
            enums: scope.enums.iter().map(|e| (e.name.as_str(), e)).collect(),
            max_depth,
        }
    }

    /// Size in bytes of a value of this type, `None` when it cannot be computed (bitfields,
    /// atomics, references out of the scope).
    pub fn type_size(&self, type_desc: &TypeDescriptor) -> Option<u32> {
        self.type_size_at_depth(type_desc, 0)
    }

    fn type_size_at_depth(&self, type_desc: &TypeDescriptor, depth: usize) -> Option<u32> {
        if depth >= self.max_depth {
            return None;
        }
        match &type_desc.kind {
            TypeKind::Builtin => BUILTIN_SIZES
                .iter()
                .find(|(name, _)| *name == type_desc.name)
                .map(|(_, size)| *size),
            TypeKind::Pointer { .. } => Some(POINTER_SIZE),
            TypeKind::FixedArray { count, inner } => self
                .type_size_at_depth(inner, depth + 1)
                .and_then(|element_size| element_size.checked_mul(*count)),
            TypeKind::DeclaredClass { class } => self.classes.get(class.as_str()).map(|c| c.size),
            TypeKind::DeclaredEnum { enum_name } => self
                .enums
                .get(enum_name.as_str())
                .map(|e| u32::from(e.align)),
            TypeKind::Bitfield | TypeKind::Atomic { .. } | TypeKind::None => None,
        }
    }
}
