//! Default values.
//!
//! Kotlin properties need an initializer where C# relies on zeroed
//! memory. [`default_value_of`] covers the types whose default is a
//! literal or a nullary construction and returns `None` for the rest;
//! the caller then omits the initializer.

use crate::types::{Resolution, TypeTranslator};
use cs2kt_frontend::{ResolvedType, SemanticModel, TypeSyntax};

/// Kotlin default-value expression for `ty`, if it has a trivial one.
///
/// Structs default to `Type()`. That assumes a nullary constructor that
/// zeroes every field, which is an approximation for structs with
/// non-trivial constructors.
pub fn default_value_of<M: SemanticModel + ?Sized>(
    translator: &TypeTranslator<'_, M>,
    ty: &ResolvedType,
) -> Option<String> {
    match ty.name() {
        Some("Int32" | "Int64") => return Some("0".to_string()),
        Some("Boolean") => return Some("false".to_string()),
        Some("String") => return Some("\"\"".to_string()),
        _ => {}
    }

    match ty {
        ResolvedType::Enum { members, .. } => {
            let first = members.first()?;
            Some(format!("{}.{first}", translator.translate(ty)))
        }
        ResolvedType::Named { .. } | ResolvedType::Generic { .. } if ty.is_struct() => {
            Some(format!("{}()", translator.translate(ty)))
        }
        _ => None,
    }
}

/// Default value for a type reference; `None` when it does not resolve.
pub fn default_value_of_syntax<M: SemanticModel + ?Sized>(
    translator: &TypeTranslator<'_, M>,
    syntax: &TypeSyntax,
) -> Option<String> {
    match translator.resolve(syntax) {
        Resolution::Resolved(ty) => default_value_of(translator, &ty),
        Resolution::ErrorType | Resolution::NoSymbol => None,
    }
}
