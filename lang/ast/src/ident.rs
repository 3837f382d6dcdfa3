use std::fmt;

use codespan::Span;
use derivative::Derivative;
use serde::de::{Deserialize, Deserializer, Error};
use serde_derive::{Deserialize, Serialize};

use crate::HasSpan;

/// An identifier as written in the source.
///
/// Identifiers compare by their exact spelling. Name analysis folds case on
/// top of this; the spelling itself is kept for diagnostics.
#[derive(Debug, Clone, Derivative, Serialize, Deserialize)]
#[derivative(Eq, PartialEq, Hash)]
pub struct Ident {
    pub id: String,
    /// The source line on which the identifier occurs
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub line: usize,
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    #[serde(
        default,
        deserialize_with = "deserialize_span",
        skip_serializing_if = "Option::is_none"
    )]
    pub span: Option<Span>,
}

impl Ident {
    pub fn new(id: &str, line: usize) -> Self {
        Ident { id: id.to_owned(), line, span: None }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl HasSpan for Ident {
    fn span(&self) -> Option<Span> {
        self.span
    }
}

/// Spans coming from the parser must not end before they start.
fn deserialize_span<'de, D>(deserializer: D) -> Result<Option<Span>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Span>::deserialize(deserializer)? {
        Some(span) if span.end() < span.start() => {
            Err(D::Error::custom(format!("span {span} ends before it starts")))
        }
        span => Ok(span),
    }
}
