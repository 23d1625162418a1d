//! Sentence records and documents.
use itertools::Itertools;

use crate::error::Error;

/// One annotated sentence: parallel token and label sequences.
///
/// Invariant: `tokens` and `labels` have the same nonzero length,
/// `labels[i]` annotating `tokens[i]`. Enforced at construction,
/// records are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceRecord {
    tokens: Vec<String>,
    labels: Vec<String>,
}

impl SentenceRecord {
    pub fn new(tokens: Vec<String>, labels: Vec<String>) -> Result<Self, Error> {
        if tokens.is_empty() {
            return Err(Error::Format("empty sentence record".to_string()));
        }
        if tokens.len() != labels.len() {
            return Err(Error::Format(format!(
                "token/label count mismatch: {} tokens, {} labels",
                tokens.len(),
                labels.len()
            )));
        }
        Ok(Self { tokens, labels })
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// number of tokens (== number of labels).
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Plain-text form: tokens joined with single spaces.
    pub fn text(&self) -> String {
        self.tokens.iter().join(" ")
    }

    /// Iterates over (token, label) pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&String, &String)> {
        self.tokens.iter().zip(self.labels.iter())
    }
}

/// One language side of an input file: the ordered sentence records.
///
/// The position of a record is the sentence index the aligner refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    sentences: Vec<SentenceRecord>,
}

impl Document {
    pub fn new(sentences: Vec<SentenceRecord>) -> Self {
        Self { sentences }
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SentenceRecord> {
        self.sentences.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SentenceRecord> {
        self.sentences.iter()
    }

    /// Plain-text projection for the external aligner,
    /// one string per sentence, in document order.
    pub fn sentence_texts(&self) -> Vec<String> {
        self.sentences.iter().map(SentenceRecord::text).collect()
    }

    /// total token count over all sentences.
    pub fn nb_tokens(&self) -> usize {
        self.sentences.iter().map(SentenceRecord::len).sum()
    }
}

/// Output sentence: (token, label) pairs concatenated from one
/// alignment group, in group order.
///
/// May be empty when the group was empty on this side (pure
/// insertion/deletion emitted by the aligner).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedSentence {
    pairs: Vec<(String, String)>,
}

impl MergedSentence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every (token, label) pair of `record`.
    pub fn push_record(&mut self, record: &SentenceRecord) {
        self.pairs
            .extend(record.pairs().map(|(t, l)| (t.clone(), l.clone())));
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl From<Vec<(String, String)>> for MergedSentence {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }
}
