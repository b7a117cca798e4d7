//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs sentences as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    sentences: Vec<SentenceData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SentenceData {
    /// The sentence text
    pub text: String,
    /// Input the sentence came from
    pub source: String,
    /// Position of the sentence within its input
    pub index: usize,
    /// Length of the sentence in characters
    pub length: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            sentences: Vec::new(),
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_sentence(&mut self, sentence: &str, source: &str) -> Result<()> {
        let index = match self.sentences.last() {
            Some(last) if last.source == source => last.index + 1,
            _ => 0,
        };
        self.sentences.push(SentenceData {
            text: sentence.to_string(),
            source: source.to_string(),
            index,
            length: sentence.chars().count(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.sentences)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.sentences)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter.format_sentence("Héllo.", "a.txt").unwrap();
        formatter.format_sentence("Bye.", "a.txt").unwrap();
        formatter.format_sentence("Next.", "b.txt").unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.into_inner()).unwrap();
        let parsed: Vec<SentenceData> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].length, 6);
        assert_eq!(parsed[1].index, 1);
        assert_eq!(parsed[2].source, "b.txt");
        assert_eq!(parsed[2].index, 0);
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.finish().unwrap();
        let out = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(out.trim(), "[]");
    }
}
