//! Front-end boundary for the cs2kt translator.
//!
//! The translation core never parses C#. It consumes what a front-end
//! produces: a declaration tree ([`syntax`]), type references
//! ([`TypeSyntax`]), and a read-only [`SemanticModel`] that resolves those
//! references to [`ResolvedType`]s and answers interface questions.
//!
//! ```text
//! Front-end                Boundary (this crate)          Core (cs2kt)
//! ─────────────     ───────────────────────────────     ──────────────
//! parser/binder ──> CompilationUnit + SemanticModel ──> Kotlin text
//!                   (SymbolGraph: in-memory model)
//! ```

pub mod graph;
pub mod model;
pub mod symbols;
pub mod syntax;
pub mod types;

pub use graph::{GraphError, SymbolGraph};
pub use model::SemanticModel;
pub use symbols::{MemberId, MemberKind, MemberSymbol, TypeId};
pub use syntax::{
    CompilationUnit, FieldDecl, MemberDecl, MethodDecl, Parameter, PropertyDecl, TypeDecl,
    TypeDeclKind,
};
pub use types::{DeclKind, ResolvedType, TypeSyntax};
