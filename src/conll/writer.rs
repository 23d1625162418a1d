//! Block-format writing of merged sentences.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};

use crate::conll::MergedSentence;
use crate::error::Error;

/// Writes `sentences` to `path`, one `token\tlabel` line per pair and a
/// blank line after every sentence, so the output parses again with
/// [crate::conll::reader].
///
/// The parent directory is created if missing. Zero-length merged
/// sentences are skipped: an empty block has no line to carry.
pub fn write(sentences: &[MergedSentence], path: &Path) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    info!("writing {} sentences to {:?}", sentences.len(), path);
    let mut out = BufWriter::new(File::create(path)?);

    for sentence in sentences {
        if sentence.is_empty() {
            debug!("skipping empty merged sentence");
            continue;
        }
        for (token, label) in sentence.pairs() {
            writeln!(out, "{}\t{}", token, label)?;
        }
        out.write_all(b"\n")?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conll::reader;

    fn merged(pairs: &[(&str, &str)]) -> MergedSentence {
        pairs
            .iter()
            .map(|(t, l)| (t.to_string(), l.to_string()))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn write_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.conll");
        write(
            &[
                merged(&[("A", "O"), ("B", "O")]),
                merged(&[("C", "B-PER")]),
            ],
            &path,
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "A\tO\nB\tO\n\nC\tB-PER\n\n");
    }

    #[test]
    fn write_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep/nested/out.conll");
        write(&[merged(&[("A", "O")])], &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn write_skips_empty_sentences() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.conll");
        write(
            &[merged(&[("A", "O")]), MergedSentence::new()],
            &path,
        )
        .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "A\tO\n\n");
    }

    #[test]
    fn write_then_parse_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.conll");
        write(
            &[
                merged(&[("Hello", "O"), (",", "O"), ("world", "B-LOC")]),
                merged(&[("Bye", "O")]),
            ],
            &path,
        )
        .unwrap();

        let doc = reader::from_path(&path).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get(0).unwrap().tokens(), ["Hello", ",", "world"]);
        assert_eq!(doc.get(0).unwrap().labels(), ["O", "O", "B-LOC"]);
        assert_eq!(doc.get(1).unwrap().tokens(), ["Bye"]);
    }
}
