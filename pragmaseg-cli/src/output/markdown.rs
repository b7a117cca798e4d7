//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs sentences as a numbered list, with a
/// heading per input when there is more than one
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    sentence_count: usize,
    with_headings: bool,
    current_source: Option<String>,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, with_headings: bool) -> Self {
        Self {
            writer,
            sentence_count: 0,
            with_headings,
            current_source: None,
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_sentence(&mut self, sentence: &str, source: &str) -> Result<()> {
        if self.with_headings && self.current_source.as_deref() != Some(source) {
            if self.current_source.is_some() {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "## {}", source)?;
            writeln!(self.writer)?;
            self.current_source = Some(source.to_string());
        }
        self.sentence_count += 1;
        writeln!(self.writer, "{}. {}", self.sentence_count, sentence)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total sentences: {}*", self.sentence_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_list() {
        let mut formatter = MarkdownFormatter::new(Vec::new(), false);
        formatter.format_sentence("One.", "a.txt").unwrap();
        formatter.format_sentence("Two.", "a.txt").unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(out, "1. One.\n2. Two.\n\n---\n*Total sentences: 2*\n");
    }

    #[test]
    fn test_headings_per_source() {
        let mut formatter = MarkdownFormatter::new(Vec::new(), true);
        formatter.format_sentence("One.", "a.txt").unwrap();
        formatter.format_sentence("Two.", "b.txt").unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.into_inner()).unwrap();
        assert!(out.starts_with("## a.txt\n\n1. One.\n\n## b.txt\n\n2. Two.\n"));
        assert!(out.ends_with("*Total sentences: 2*\n"));
    }
}
