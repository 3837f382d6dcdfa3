use codespan::{ByteIndex, Span};

pub trait ToMiette {
    type Target;

    fn to_miette(self) -> Self::Target;
}

impl ToMiette for ByteIndex {
    type Target = miette::SourceOffset;

    fn to_miette(self) -> Self::Target {
        self.to_usize().into()
    }
}

impl ToMiette for Span {
    type Target = miette::SourceSpan;

    fn to_miette(self) -> Self::Target {
        let length = self.end() - self.start();
        miette::SourceSpan::new(self.start().to_miette(), length.to_usize())
    }
}

impl<T: ToMiette> ToMiette for Option<T> {
    type Target = Option<T::Target>;

    fn to_miette(self) -> Self::Target {
        self.map(ToMiette::to_miette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_to_source_span() {
        let source_span = Span::new(3u32, 11u32).to_miette();
        assert_eq!(source_span.offset(), 3);
        assert_eq!(source_span.len(), 8);
    }

    #[test]
    fn missing_span_stays_missing() {
        let span: Option<Span> = None;
        assert!(span.to_miette().is_none());
    }
}
