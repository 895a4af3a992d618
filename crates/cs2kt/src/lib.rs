//! C#-to-Kotlin type and symbol translation.
//!
//! `cs2kt` is the core of a C# to Kotlin translator. It takes declarations
//! and type references from a front-end ([`cs2kt_frontend`]) and produces
//! Kotlin text: type expressions, default values, parameter lists and
//! `override` markers, written through an indentation-aware emitter.
//!
//! # Architecture
//!
//! ```text
//! Front-end                    Core                         Output
//! ──────────────    ─────────────────────────────    ────────────────
//! CompilationUnit ─┐  TypeTables ─> TypeTranslator ─┐
//! SemanticModel   ─┼─> MemberClassifier             ├─> IndentedEmitter ─> String
//!                  └─> TranslationContext ──────────┘   (+ Diagnostics)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use cs2kt::{KotlinWriter, SymbolGraph};
//!
//! let graph = SymbolGraph::with_core_library();
//! let kotlin = KotlinWriter::emit(&graph, &unit)?;
//! ```
//!
//! # Sentinels
//!
//! Translation never fails on a type it cannot map. References the
//! front-end reports as erroneous become [`ERROR_TYPE`], references that
//! resolve to nothing become [`UNKNOWN_TYPE`], and both are recorded as
//! [`Diagnostic`]s so callers can find them without scanning the output.

pub mod config;
pub mod defaults;
pub mod diagnostics;
pub mod driver;
pub mod emitter;
pub mod members;
pub mod naming;
pub mod output;
pub mod params;
pub mod tables;
pub mod traits;
pub mod types;

// Re-exports: front-end boundary
pub use cs2kt_frontend::{
    CompilationUnit, DeclKind, MemberId, MemberKind, Parameter, ResolvedType, SemanticModel,
    SymbolGraph, TypeDecl, TypeId, TypeSyntax,
};

// Re-exports: core
pub use config::{ConfigError, TablesConfig};
pub use defaults::{default_value_of, default_value_of_syntax};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use driver::{Translation, TranslationContext, TranslationDriver};
pub use emitter::IndentedEmitter;
pub use members::MemberClassifier;
pub use params::format_parameters;
pub use tables::{MappingTable, TypeTables};
pub use traits::{TranslateError, Walker};
pub use types::{ERROR_TYPE, Resolution, TypeTranslator, UNKNOWN_TYPE};

// Re-exports: built-in writers
#[cfg(feature = "write-kotlin")]
pub use output::KotlinWriter;
