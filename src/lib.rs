//! # conll-align
//!
//! Sentence-level realignment of parallel CoNLL annotation files.
//!
//! Source and target transcripts of the same material are often segmented
//! independently, leaving their sentence boundaries out of sync. This crate
//! regroups both sides along a sentence alignment (computed by an external
//! aligner) and writes boundary-consistent output files, ready for
//! downstream use such as training parallel taggers.
//!
//! It can be used as a command-line tool or as a lib, through
//! [pipelines::AlignConll] or the individual [conll] and [align] building
//! blocks.
pub mod align;
pub mod conll;
pub mod error;
pub mod pipelines;
