//! Translation driver and the per-run context.

use crate::defaults;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::emitter::IndentedEmitter;
use crate::members::MemberClassifier;
use crate::params;
use crate::tables::TypeTables;
use crate::traits::{TranslateError, Walker};
use crate::types::TypeTranslator;
use cs2kt_frontend::{MemberId, Parameter, ResolvedType, SemanticModel, TypeSyntax};

/// State of one translation run: the emitter, the diagnostics collected so
/// far, and the translation components a walker calls into.
///
/// Created fresh by [`TranslationDriver`] for every run and dropped when
/// the run ends.
pub struct TranslationContext<'a, M: ?Sized> {
    pub emitter: IndentedEmitter,
    translator: TypeTranslator<'a, M>,
    classifier: MemberClassifier<'a, M>,
    diagnostics: Diagnostics,
    scope: Vec<String>,
}

impl<'a, M: SemanticModel + ?Sized> TranslationContext<'a, M> {
    pub fn new(model: &'a M, tables: &'a TypeTables) -> Self {
        Self {
            emitter: IndentedEmitter::new(),
            translator: TypeTranslator::with_tables(model, tables),
            classifier: MemberClassifier::new(model),
            diagnostics: Diagnostics::new(),
            scope: Vec::new(),
        }
    }

    pub fn model(&self) -> &'a M {
        self.translator.model()
    }

    pub fn translator(&self) -> TypeTranslator<'a, M> {
        self.translator
    }

    /// Enter a named declaration; diagnostics record the enclosing path.
    pub fn enter_scope(&mut self, name: impl Into<String>) {
        self.scope.push(name.into());
    }

    pub fn exit_scope(&mut self) {
        self.scope.pop();
    }

    fn scope_path(&self) -> Option<String> {
        (!self.scope.is_empty()).then(|| self.scope.join("."))
    }

    pub fn translate(&self, ty: &ResolvedType) -> String {
        self.translator.translate(ty)
    }

    /// Translate a type reference, recording a diagnostic on fallback.
    pub fn translate_syntax(&mut self, syntax: &TypeSyntax) -> String {
        let scope = self.scope_path();
        self.translator
            .translate_syntax_reporting(syntax, scope.as_deref(), &mut self.diagnostics)
    }

    pub fn resolve(&self, syntax: &TypeSyntax) -> Option<ResolvedType> {
        self.model().resolve_type(syntax)
    }

    pub fn default_value_of(&self, ty: &ResolvedType) -> Option<String> {
        defaults::default_value_of(&self.translator, ty)
    }

    pub fn default_value_of_syntax(&self, syntax: &TypeSyntax) -> Option<String> {
        defaults::default_value_of_syntax(&self.translator, syntax)
    }

    pub fn format_parameters(&mut self, parameters: &[Parameter]) -> String {
        let scope = self.scope_path();
        params::format_parameters_reporting(
            &self.translator,
            parameters,
            scope.as_deref(),
            &mut self.diagnostics,
        )
    }

    pub fn is_interface_implementation(&self, member: MemberId) -> bool {
        self.classifier.is_interface_implementation(member)
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    fn finish(self) -> Translation {
        Translation {
            output: self.emitter.into_output(),
            diagnostics: self.diagnostics.into_vec(),
        }
    }
}

/// Output of a run together with its diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub output: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Entry point: runs a walker over a tree with fresh state.
pub struct TranslationDriver<'a, M: ?Sized> {
    model: &'a M,
    tables: &'a TypeTables,
}

impl<'a, M: SemanticModel + ?Sized> TranslationDriver<'a, M> {
    /// A driver using the built-in tables.
    pub fn new(model: &'a M) -> Self {
        Self::with_tables(model, TypeTables::builtin())
    }

    pub fn with_tables(model: &'a M, tables: &'a TypeTables) -> Self {
        Self { model, tables }
    }

    /// Walk `root` and return the translated document.
    ///
    /// Walker errors propagate unchanged; nothing is kept between runs.
    pub fn run<W: Walker<M>>(&self, walker: &mut W, root: &W::Root) -> Result<String, TranslateError> {
        self.run_with_diagnostics(walker, root)
            .map(|translation| translation.output)
    }

    /// Like [`Self::run`], also returning the collected diagnostics.
    pub fn run_with_diagnostics<W: Walker<M>>(
        &self,
        walker: &mut W,
        root: &W::Root,
    ) -> Result<Translation, TranslateError> {
        let mut cx = TranslationContext::new(self.model, self.tables);
        walker.walk(root, &mut cx)?;
        let translation = cx.finish();
        tracing::debug!(
            language = walker.language(),
            bytes = translation.output.len(),
            diagnostics = translation.diagnostics.len(),
            "translation finished"
        );
        Ok(translation)
    }
}
