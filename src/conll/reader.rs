//! Blank-line-delimited record reading.
//!
//! Blocks are accumulated line by line and cut at empty lines, so that
//! runs of consecutive blank lines act as a single separator.
use std::fs;
use std::path::Path;

use crate::conll::{Document, SentenceRecord};
use crate::error::Error;

/// Parses a whole annotated file into a [Document].
///
/// Each non-blank line must carry at least a token and a label
/// (whitespace-separated); extra fields are ignored.
/// Fails with [Error::Format] on a line with fewer than 2 fields,
/// or if the content holds no sentence at all.
pub fn parse(content: &str) -> Result<Document, Error> {
    let mut sentences = Vec::new();
    let mut tokens: Vec<String> = Vec::new();
    let mut labels: Vec<String> = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            // close eventual open block
            if !tokens.is_empty() {
                sentences.push(SentenceRecord::new(
                    std::mem::take(&mut tokens),
                    std::mem::take(&mut labels),
                )?);
            }
            continue;
        }

        let mut fields = line.split_whitespace();
        let token = fields.next();
        let label = fields.next();
        match (token, label) {
            (Some(token), Some(label)) => {
                tokens.push(token.to_string());
                labels.push(label.to_string());
            }
            _ => {
                return Err(Error::Format(format!(
                    "expected at least 2 fields, got line {:?}",
                    line
                )))
            }
        }
    }

    // close eventual last block
    if !tokens.is_empty() {
        sentences.push(SentenceRecord::new(tokens, labels)?);
    }

    if sentences.is_empty() {
        return Err(Error::Format("no sentence records in document".to_string()));
    }

    Ok(Document::new(sentences))
}

/// Reads and parses the file at `path`.
pub fn from_path(path: &Path) -> Result<Document, Error> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}
