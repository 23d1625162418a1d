//! Group merging: rebuilding one output sentence per alignment group.
use crate::conll::{Document, MergedSentence};
use crate::error::Error;

/// Concatenates the (token, label) pairs of every sentence of `doc` listed
/// in `group`, in group order.
///
/// A singleton group degenerates to a copy of that sentence; an empty group
/// yields an empty [MergedSentence] (pure insertion/deletion on this side).
/// An out-of-bounds index is an aligner/data mismatch and fails with
/// [Error::IndexOutOfBounds], never clamped.
pub fn merge(doc: &Document, group: &[usize]) -> Result<MergedSentence, Error> {
    let mut merged = MergedSentence::new();
    for &index in group {
        let record = doc.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: doc.len(),
        })?;
        merged.push_record(record);
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conll::reader;

    fn doc() -> Document {
        reader::parse("A\tO\nB\tO\n\nC\tB-PER\n\nD\tO\n").unwrap()
    }

    #[test]
    fn merge_group() {
        let merged = merge(&doc(), &[0, 1]).unwrap();
        assert_eq!(
            merged.pairs(),
            [
                ("A".to_string(), "O".to_string()),
                ("B".to_string(), "O".to_string()),
                ("C".to_string(), "B-PER".to_string()),
            ]
        );
    }

    #[test]
    fn merge_singleton_copies() {
        let merged = merge(&doc(), &[1]).unwrap();
        assert_eq!(merged.pairs(), [("C".to_string(), "B-PER".to_string())]);
    }

    #[test]
    fn merge_keeps_group_order() {
        // the aligner's order is kept verbatim, even if decreasing
        let merged = merge(&doc(), &[2, 0]).unwrap();
        let tokens: Vec<&str> = merged.pairs().iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(tokens, vec!["D", "A", "B"]);
    }

    #[test]
    fn merge_empty_group() {
        let merged = merge(&doc(), &[]).unwrap();
        assert!(merged.is_empty());
    }

    #[test]
    fn merge_out_of_bounds() {
        let res = merge(&doc(), &[0, 3]);
        assert!(matches!(
            res,
            Err(Error::IndexOutOfBounds { index: 3, len: 3 })
        ));
    }
}
