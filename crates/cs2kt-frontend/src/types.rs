//! Resolved types and type syntax.
//!
//! [`ResolvedType`] is what the semantic model hands back for a type
//! reference. [`TypeSyntax`] is the reference as written in the source,
//! before resolution.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The declaration kind behind a named (non-enum, non-delegate) type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclKind {
    Class,
    Struct,
    Interface,
}

/// A type as resolved by the front-end.
///
/// Names are source-language metadata names (`Int32`, not `int`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolvedType {
    /// A built-in type such as `Int32`, `Boolean`, `String` or `Void`.
    Primitive { name: String },
    /// A non-generic class, struct or interface.
    Named { name: String, kind: DeclKind },
    /// A constructed generic type, e.g. `List<Int32>`.
    Generic {
        name: String,
        kind: DeclKind,
        args: Vec<ResolvedType>,
    },
    /// A delegate type, described by its invoke signature.
    Delegate {
        name: String,
        params: Vec<ResolvedType>,
        ret: Box<ResolvedType>,
    },
    /// A single-dimensional array.
    Array { element: Box<ResolvedType> },
    /// An enum; `members` are in declaration order.
    Enum { name: String, members: Vec<String> },
    /// The front-end flagged the type as erroneous.
    Error,
    /// Nothing could be resolved.
    Unknown,
}

impl ResolvedType {
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::Primitive { name: name.into() }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            kind: DeclKind::Class,
        }
    }

    pub fn structure(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            kind: DeclKind::Struct,
        }
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            kind: DeclKind::Interface,
        }
    }

    pub fn generic(name: impl Into<String>, args: Vec<ResolvedType>) -> Self {
        Self::Generic {
            name: name.into(),
            kind: DeclKind::Class,
            args,
        }
    }

    pub fn delegate(name: impl Into<String>, params: Vec<ResolvedType>, ret: ResolvedType) -> Self {
        Self::Delegate {
            name: name.into(),
            params,
            ret: Box::new(ret),
        }
    }

    pub fn array(element: ResolvedType) -> Self {
        Self::Array {
            element: Box::new(element),
        }
    }

    pub fn enumeration<S: Into<String>>(
        name: impl Into<String>,
        members: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::Enum {
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// The metadata name, if the type has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Primitive { name }
            | Self::Named { name, .. }
            | Self::Generic { name, .. }
            | Self::Delegate { name, .. }
            | Self::Enum { name, .. } => Some(name),
            Self::Array { .. } | Self::Error | Self::Unknown => None,
        }
    }

    /// The declaration kind, for class/struct/interface types.
    pub fn decl_kind(&self) -> Option<DeclKind> {
        match self {
            Self::Named { kind, .. } | Self::Generic { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn is_struct(&self) -> bool {
        self.decl_kind() == Some(DeclKind::Struct)
    }
}

/// A type reference as it appears in source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeSyntax {
    /// `T[]`
    Array(Box<TypeSyntax>),
    /// `Name` or `Name<A, B>`; keywords such as `int` are names too.
    Named { name: String, args: Vec<TypeSyntax> },
}

impl TypeSyntax {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeSyntax>) -> Self {
        Self::Named {
            name: name.into(),
            args,
        }
    }

    pub fn array(element: TypeSyntax) -> Self {
        Self::Array(Box::new(element))
    }
}

impl fmt::Display for TypeSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Array(element) => write!(f, "{element}[]"),
            Self::Named { name, args } => {
                f.write_str(name)?;
                if !args.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
        }
    }
}
