/*! CoNLL data model and IO

An annotated file is a sequence of sentence blocks separated by a blank line.
A block is one line per token, the token itself in the first
whitespace-separated field and its label in the second.

- [reader] parses a file into a [Document] of [SentenceRecord]s.
- [writer] serializes [MergedSentence]s back to the same block format, so a
  written file parses again with [reader].

!*/
mod document;
pub mod reader;
pub mod writer;

pub use document::Document;
pub use document::MergedSentence;
pub use document::SentenceRecord;
