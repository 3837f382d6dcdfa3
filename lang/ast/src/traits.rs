use codespan::Span;

/// Trait for syntactic entities which have a source-code span.
///
/// The function `span()` returns `Some(span)` for entities handed over by a
/// parser that tracks byte offsets, and `None` for trees which only carry
/// line numbers.
pub trait HasSpan {
    /// Return the source code span of the entity.
    fn span(&self) -> Option<Span>;
}

/// Trait for declarations which are introduced at a particular source line.
pub trait HasLine {
    fn line(&self) -> usize;
}
