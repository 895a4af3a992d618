//! Type translation.
//!
//! [`TypeTranslator`] turns a [`ResolvedType`] (or a type reference that
//! still has to be resolved) into a Kotlin type expression. It is total:
//! anything it cannot map becomes one of the sentinels
//! [`ERROR_TYPE`] / [`UNKNOWN_TYPE`], never a panic.

use crate::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::tables::TypeTables;
use cs2kt_frontend::{ResolvedType, SemanticModel, TypeSyntax};

/// Output for a reference the front-end reports as erroneous.
pub const ERROR_TYPE: &str = "**error type**";

/// Output for a reference that resolves to nothing at all.
pub const UNKNOWN_TYPE: &str = "**unknown type**";

/// Outcome of resolving a type reference through the semantic model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(ResolvedType),
    ErrorType,
    NoSymbol,
}

/// Translates C# types into Kotlin type expressions.
pub struct TypeTranslator<'a, M: ?Sized> {
    tables: &'a TypeTables,
    model: &'a M,
}

impl<M: ?Sized> Clone for TypeTranslator<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: ?Sized> Copy for TypeTranslator<'_, M> {}

impl<'a, M: SemanticModel + ?Sized> TypeTranslator<'a, M> {
    /// A translator using the built-in tables.
    pub fn new(model: &'a M) -> Self {
        Self::with_tables(model, TypeTables::builtin())
    }

    pub fn with_tables(model: &'a M, tables: &'a TypeTables) -> Self {
        Self { tables, model }
    }

    pub fn tables(&self) -> &'a TypeTables {
        self.tables
    }

    pub fn model(&self) -> &'a M {
        self.model
    }

    /// Resolve a type reference, telling "error type" apart from "nothing".
    pub fn resolve(&self, syntax: &TypeSyntax) -> Resolution {
        match self.model.resolve_type(syntax) {
            Some(ty) => Resolution::Resolved(ty),
            None if self.model.is_error_type(syntax) => Resolution::ErrorType,
            None => Resolution::NoSymbol,
        }
    }

    /// Translate a resolved type.
    pub fn translate(&self, ty: &ResolvedType) -> String {
        match ty {
            ResolvedType::Array { element } => format!("Array<{}>", self.translate(element)),
            ResolvedType::Delegate { params, ret, .. } => {
                format!("({}) -> {}", self.translate_list(params), self.translate(ret))
            }
            ResolvedType::Generic { name, args, .. } => {
                let container = self.name_or_unknown(self.tables.translate_generic_container(name));
                if args.is_empty() {
                    container.to_string()
                } else {
                    format!("{container}<{}>", self.translate_list(args))
                }
            }
            ResolvedType::Primitive { name }
            | ResolvedType::Named { name, .. }
            | ResolvedType::Enum { name, .. } => {
                self.name_or_unknown(self.tables.translate_name(name)).to_string()
            }
            ResolvedType::Error => ERROR_TYPE.to_string(),
            ResolvedType::Unknown => UNKNOWN_TYPE.to_string(),
        }
    }

    /// Translate a type reference, discarding diagnostics.
    pub fn translate_syntax(&self, syntax: &TypeSyntax) -> String {
        self.translate_syntax_reporting(syntax, None, &mut Diagnostics::new())
    }

    /// Translate a type reference, recording a diagnostic for every part
    /// that falls back to a sentinel. A generic whose container resolves
    /// keeps its container; only the failing arguments become sentinels.
    ///
    /// Array syntax renders in constructor form (`arrayOf<T>`); resolved
    /// array types render as `Array<T>`.
    pub fn translate_syntax_reporting(
        &self,
        syntax: &TypeSyntax,
        scope: Option<&str>,
        diagnostics: &mut Diagnostics,
    ) -> String {
        if let TypeSyntax::Array(element) = syntax {
            let element = self.translate_syntax_reporting(element, scope, diagnostics);
            return format!("arrayOf<{element}>");
        }

        let (kind, sentinel) = match self.resolve(syntax) {
            Resolution::Resolved(ty) => {
                if let TypeSyntax::Named { args, .. } = syntax {
                    for arg in args {
                        self.translate_syntax_reporting(arg, scope, diagnostics);
                    }
                }
                return self.translate(&ty);
            }
            Resolution::ErrorType => (DiagnosticKind::ErrorType, ERROR_TYPE),
            Resolution::NoSymbol => (DiagnosticKind::UnmappedType, UNKNOWN_TYPE),
        };
        tracing::debug!(reference = %syntax, ?kind, scope, "type reference falls back to sentinel");
        diagnostics.push(Diagnostic {
            kind,
            reference: syntax.to_string(),
            scope: scope.map(str::to_string),
        });
        sentinel.to_string()
    }

    fn translate_list(&self, types: &[ResolvedType]) -> String {
        types
            .iter()
            .map(|t| self.translate(t))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn name_or_unknown<'n>(&self, name: &'n str) -> &'n str {
        if name.is_empty() { UNKNOWN_TYPE } else { name }
    }
}
