use std::io;

/// A sink for line-tagged diagnostics.
///
/// Reporting never fails and never influences the analysis that emits the
/// diagnostic.
pub trait Reporter {
    fn report(&mut self, line: usize, message: &str);
}

/// Writes each diagnostic as `<line>: <message>` on its own line.
pub struct StreamReporter<W: io::Write> {
    out: W,
}

impl<W: io::Write> StreamReporter<W> {
    pub fn new(out: W) -> Self {
        StreamReporter { out }
    }
}

impl StreamReporter<io::Stderr> {
    pub fn stderr() -> Self {
        StreamReporter::new(io::stderr())
    }
}

impl<W: io::Write> Reporter for StreamReporter<W> {
    fn report(&mut self, line: usize, message: &str) {
        if let Err(err) = writeln!(self.out, "{line}: {message}") {
            log::warn!("Failed to write diagnostic for line {line}: {err}");
        }
    }
}

/// Collects the formatted diagnostics.
impl Reporter for Vec<String> {
    fn report(&mut self, line: usize, message: &str) {
        self.push(format!("{line}: {message}"));
    }
}
