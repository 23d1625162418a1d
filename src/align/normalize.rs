//! Normalization of raw aligner output into plain integer index groups.
use serde_json::Value;

use crate::error::Error;

/// Alignment pairs as decoded from the external aligner, indices still in
/// their JSON representation.
pub type RawAlignment = Vec<(Vec<Value>, Vec<Value>)>;

/// One alignment unit: the source sentences at `source` correspond to the
/// target sentences at `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentPair {
    pub source: Vec<usize>,
    pub target: Vec<usize>,
}

/// Ordered sequence of [AlignmentPair], covering every sentence index of
/// both sides exactly once (the aligner's contract, not re-checked here).
pub type Alignment = Vec<AlignmentPair>;

/// Converts every raw index to a plain `usize`, preserving pair order,
/// group order and group membership verbatim.
///
/// Floats are accepted when integral and non-negative (numpy int64/float64
/// both end up as JSON floats depending on the serializer). Anything else
/// is an [Error::Aligner]: a contract violation is surfaced, not repaired.
pub fn normalize(raw: RawAlignment) -> Result<Alignment, Error> {
    raw.into_iter()
        .map(|(src, tgt)| {
            Ok(AlignmentPair {
                source: to_indices(&src)?,
                target: to_indices(&tgt)?,
            })
        })
        .collect()
}

fn to_indices(values: &[Value]) -> Result<Vec<usize>, Error> {
    values.iter().map(to_index).collect()
}

fn to_index(value: &Value) -> Result<usize, Error> {
    if let Some(n) = value.as_u64() {
        return Ok(n as usize);
    }
    if let Some(f) = value.as_f64() {
        if f >= 0.0 && f.fract() == 0.0 {
            return Ok(f as usize);
        }
    }
    Err(Error::Aligner(format!(
        "non-integer alignment index: {}",
        value
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(v: serde_json::Value) -> RawAlignment {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn normalize_integers() {
        let alignment = normalize(raw(json!([[[0, 1], [0]], [[2], [1, 2]]]))).unwrap();
        assert_eq!(
            alignment,
            vec![
                AlignmentPair {
                    source: vec![0, 1],
                    target: vec![0],
                },
                AlignmentPair {
                    source: vec![2],
                    target: vec![1, 2],
                },
            ]
        );
    }

    #[test]
    fn normalize_floats() {
        let alignment = normalize(raw(json!([[[0.0, 1.0], [2.0]]]))).unwrap();
        assert_eq!(alignment[0].source, vec![0, 1]);
        assert_eq!(alignment[0].target, vec![2]);
    }

    #[test]
    fn normalize_rejects_fractional() {
        let res = normalize(raw(json!([[[0.5], [0]]])));
        assert!(matches!(res, Err(Error::Aligner(_))));
    }

    #[test]
    fn normalize_rejects_negative() {
        let res = normalize(raw(json!([[[-1.0], [0]]])));
        assert!(matches!(res, Err(Error::Aligner(_))));
    }

    #[test]
    fn normalize_rejects_non_numeric() {
        let res = normalize(raw(json!([[["0"], [0]]])));
        assert!(matches!(res, Err(Error::Aligner(_))));
    }

    #[test]
    fn normalize_keeps_order_and_duplicates() {
        // broken coverage is propagated, not repaired
        let alignment = normalize(raw(json!([[[1, 0, 1], []]]))).unwrap();
        assert_eq!(alignment[0].source, vec![1, 0, 1]);
        assert!(alignment[0].target.is_empty());
    }
}
