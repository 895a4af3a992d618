//! Declaration-level syntax tree.
//!
//! This is the shape a front-end hands over after parsing and binding:
//! declarations carry their type references as [`TypeSyntax`] and, where
//! the binder found one, the handle of their declared symbol.
//!
//! Statement and expression bodies are not modelled. Method bodies arrive
//! as lines that were already translated by whoever owns statements.

use crate::symbols::{MemberId, TypeId};
use crate::types::TypeSyntax;
use serde::{Deserialize, Serialize};

/// A source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationUnit {
    pub namespace: Option<String>,
    pub types: Vec<TypeDecl>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeDeclKind {
    Class,
    Struct,
    Interface,
    Enum,
}

/// A type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    pub kind: TypeDeclKind,
    /// Base class and implemented interfaces, in source order.
    #[serde(default)]
    pub bases: Vec<TypeSyntax>,
    #[serde(default)]
    pub members: Vec<MemberDecl>,
    /// Enum member names in declaration order. Empty for non-enums.
    #[serde(default)]
    pub enum_members: Vec<String>,
    #[serde(default)]
    pub symbol: Option<TypeId>,
}

impl TypeDecl {
    pub fn new(name: impl Into<String>, kind: TypeDeclKind) -> Self {
        Self {
            name: name.into(),
            kind,
            bases: Vec::new(),
            members: Vec::new(),
            enum_members: Vec::new(),
            symbol: None,
        }
    }

    pub fn with_bases(mut self, bases: Vec<TypeSyntax>) -> Self {
        self.bases = bases;
        self
    }

    pub fn with_members(mut self, members: Vec<MemberDecl>) -> Self {
        self.members = members;
        self
    }

    pub fn with_enum_members<S: Into<String>>(mut self, members: impl IntoIterator<Item = S>) -> Self {
        self.enum_members = members.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_symbol(mut self, symbol: TypeId) -> Self {
        self.symbol = Some(symbol);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberDecl {
    Field(FieldDecl),
    Property(PropertyDecl),
    Method(MethodDecl),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    pub ty: TypeSyntax,
    /// Source modifiers (`private`, `readonly`, `const`, ...).
    #[serde(default)]
    pub modifiers: Vec<String>,
    /// Initializer, already translated.
    #[serde(default)]
    pub initializer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDecl {
    pub name: String,
    pub ty: TypeSyntax,
    #[serde(default)]
    pub symbol: Option<MemberId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    #[serde(default)]
    pub params: Vec<Parameter>,
    pub return_type: TypeSyntax,
    /// Body lines, already translated, without indentation.
    #[serde(default)]
    pub body: Vec<String>,
    #[serde(default)]
    pub symbol: Option<MemberId>,
}

/// A parameter; lambda parameters may omit the type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub identifier: String,
    #[serde(default)]
    pub ty: Option<TypeSyntax>,
}

impl Parameter {
    pub fn typed(identifier: impl Into<String>, ty: TypeSyntax) -> Self {
        Self {
            identifier: identifier.into(),
            ty: Some(ty),
        }
    }

    pub fn untyped(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ty: None,
        }
    }
}
