//! Traits for tree walkers.

use crate::driver::TranslationContext;
use cs2kt_frontend::{MemberId, SemanticModel};

/// Error that stops a translation run.
///
/// Untranslatable types are not errors (they become sentinels). These are
/// tree shapes the walker cannot handle at all.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("malformed {context}: {reason}")]
    MalformedInput { context: String, reason: String },

    #[error("declaration refers to {0}, which the semantic model does not know")]
    UnknownMember(MemberId),
}

impl TranslateError {
    pub fn malformed(context: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            context: context.into(),
            reason: reason.into(),
        }
    }
}

/// A walker drives translation of a tree, writing through the context.
pub trait Walker<M: SemanticModel + ?Sized> {
    /// Root node type the walker starts from.
    type Root: ?Sized;

    /// Target language identifier (e.g., "kotlin").
    fn language(&self) -> &'static str;

    /// Walk `root`, emitting into `cx`.
    fn walk(
        &mut self,
        root: &Self::Root,
        cx: &mut TranslationContext<'_, M>,
    ) -> Result<(), TranslateError>;
}
