//! Parameter lists.

use crate::diagnostics::Diagnostics;
use crate::types::TypeTranslator;
use cs2kt_frontend::{Parameter, SemanticModel};

/// Format parameters as `a : Int, b`, in declaration order.
///
/// Untyped parameters (lambda parameters) keep the bare identifier so the
/// target infers the type from context.
pub fn format_parameters<M: SemanticModel + ?Sized>(
    translator: &TypeTranslator<'_, M>,
    parameters: &[Parameter],
) -> String {
    format_parameters_reporting(translator, parameters, None, &mut Diagnostics::new())
}

/// [`format_parameters`], recording diagnostics for untranslatable types.
pub fn format_parameters_reporting<M: SemanticModel + ?Sized>(
    translator: &TypeTranslator<'_, M>,
    parameters: &[Parameter],
    scope: Option<&str>,
    diagnostics: &mut Diagnostics,
) -> String {
    parameters
        .iter()
        .map(|p| match &p.ty {
            None => p.identifier.clone(),
            Some(ty) => format!(
                "{} : {}",
                p.identifier,
                translator.translate_syntax_reporting(ty, scope, diagnostics)
            ),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
