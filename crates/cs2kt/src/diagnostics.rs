//! Diagnostics for type references that could not be translated.
//!
//! Untranslatable references never stop a run. They are rendered as a
//! sentinel in the output and recorded here, so callers can report them
//! without scanning the text.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// No symbol, and the front-end reported no error either.
    UnmappedType,
    /// The front-end flagged the reference as an error type.
    ErrorType,
}

/// One untranslatable type reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// The reference as written in source.
    pub reference: String,
    /// Enclosing declaration path (`Namespace.Type.Member`), when known.
    pub scope: Option<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            DiagnosticKind::UnmappedType => "unresolved type",
            DiagnosticKind::ErrorType => "error type",
        };
        match &self.scope {
            Some(scope) => write!(f, "{what} `{}` in {scope}", self.reference),
            None => write!(f, "{what} `{}`", self.reference),
        }
    }
}

/// Collector owned by a single translation run.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
