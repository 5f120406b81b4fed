use serde::{Deserialize, Serialize};

/// Category codes as exposed by the host's type system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TypeCategory {
    Builtin = 0,
    Pointer = 1,
    Bitfield = 2,
    FixedArray = 3,
    Atomic = 4,
    DeclaredClass = 5,
    DeclaredEnum = 6,
    None = 7,
}

impl TypeCategory {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Template-like wrapper kinds. `T` and `CollectionOfT` wrap an inner type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AtomicKind {
    Basic,
    T {
        inner: Box<TypeDescriptor>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        outer: Option<String>,
    },
    #[serde(rename = "tt")]
    TT,
    CollectionOfT {
        inner: Box<TypeDescriptor>,
    },
    None,
}

impl AtomicKind {
    pub fn code(&self) -> u8 {
        match self {
            AtomicKind::Basic => 0,
            AtomicKind::T { .. } => 1,
            AtomicKind::TT => 2,
            AtomicKind::CollectionOfT { .. } => 3,
            AtomicKind::None => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum TypeKind {
    Builtin,
    Pointer {
        inner: Box<TypeDescriptor>,
    },
    Bitfield,
    FixedArray {
        count: u32,
        inner: Box<TypeDescriptor>,
    },
    Atomic {
        atomic: AtomicKind,
    },
    // declared entities are named, never embedded: this is what keeps the tree acyclic
    DeclaredClass {
        class: String,
    },
    DeclaredEnum {
        #[serde(rename = "enum")]
        enum_name: String,
    },
    None,
}

/// A node of a field's type tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    #[serde(flatten)]
    pub kind: TypeKind,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn builtin(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Builtin)
    }

    pub fn pointer(pointee: TypeDescriptor) -> Self {
        Self::new(
            format!("{}*", pointee.name),
            TypeKind::Pointer {
                inner: Box::new(pointee),
            },
        )
    }

    pub fn fixed_array(element: TypeDescriptor, count: u32) -> Self {
        Self::new(
            format!("{}[{count}]", element.name),
            TypeKind::FixedArray {
                count,
                inner: Box::new(element),
            },
        )
    }

    pub fn declared_class(class_name: impl Into<String>) -> Self {
        let class_name = class_name.into();
        Self::new(class_name.clone(), TypeKind::DeclaredClass { class: class_name })
    }

    pub fn declared_enum(enum_name: impl Into<String>) -> Self {
        let enum_name = enum_name.into();
        Self::new(enum_name.clone(), TypeKind::DeclaredEnum { enum_name })
    }

    pub fn category(&self) -> TypeCategory {
        match &self.kind {
            TypeKind::Builtin => TypeCategory::Builtin,
            TypeKind::Pointer { .. } => TypeCategory::Pointer,
            TypeKind::Bitfield => TypeCategory::Bitfield,
            TypeKind::FixedArray { .. } => TypeCategory::FixedArray,
            TypeKind::Atomic { .. } => TypeCategory::Atomic,
            TypeKind::DeclaredClass { .. } => TypeCategory::DeclaredClass,
            TypeKind::DeclaredEnum { .. } => TypeCategory::DeclaredEnum,
            TypeKind::None => TypeCategory::None,
        }
    }

    /// Name of the class this node refers to, only when the node itself is a declared class.
    /// Pointers and arrays are not unwrapped.
    pub fn declared_class_name(&self) -> Option<&str> {
        if let TypeKind::DeclaredClass { class } = &self.kind {
            Some(class.as_str())
        } else {
            None
        }
    }
}
