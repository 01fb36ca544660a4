//! Byte-offset differ for equal-length buffers.
//!
//! A single linear pass over two byte slices that are already known to have
//! the same length, collecting maximal runs of differing positions. This is
//! a positional comparison, not a general diff: the caller guarantees equal
//! lengths, so no alignment or edit-distance search is needed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, Result};

/// One maximal contiguous run of differing byte positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRange {
    /// Index of the first differing byte in the run.
    pub start: usize,
    /// Number of consecutive differing bytes.
    pub len: usize,
}

impl fmt::Display for DiffRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.len)
    }
}

/// Ordered list of differing runs between two equal-length buffers.
///
/// An empty summary means the buffers were byte-identical. Ranges are
/// sorted by start index and never touch or overlap: a matching byte always
/// separates two runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    ranges: Vec<DiffRange>,
}

impl DiffSummary {
    /// True when the compared buffers were identical.
    pub fn is_equal(&self) -> bool {
        self.ranges.is_empty()
    }

    /// The differing runs, in encounter order.
    pub fn ranges(&self) -> &[DiffRange] {
        &self.ranges
    }
}

impl fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ranges.is_empty() {
            return f.write_str("buffers are identical");
        }
        f.write_str("offsets [(index, length), ..]: [")?;
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{range}")?;
        }
        f.write_str("]")
    }
}

/// Compare two equal-length, non-empty buffers position by position.
///
/// Returns the maximal runs of differing indices, in encounter order. A run
/// opens at the first differing index after a match (or at index 0) and
/// closes at the next matching index or end of input. O(n) time, O(k) space
/// for k runs.
///
/// # Errors
///
/// [`CoreError::InvalidInput`] if either buffer is empty or the lengths
/// differ. These are contract violations; callers are expected to check
/// before calling.
pub fn diff_offsets(left: &[u8], right: &[u8]) -> Result<DiffSummary> {
    if left.is_empty() || right.is_empty() {
        return Err(CoreError::InvalidInput("buffers must be non-empty"));
    }
    if left.len() != right.len() {
        return Err(CoreError::InvalidInput("buffers must have equal length"));
    }

    let mut ranges = Vec::new();
    let mut run_start: Option<usize> = None;

    for (i, (l, r)) in left.iter().zip(right).enumerate() {
        match (run_start, l != r) {
            (None, true) => run_start = Some(i),
            (Some(start), false) => {
                ranges.push(DiffRange {
                    start,
                    len: i - start,
                });
                run_start = None;
            }
            _ => {}
        }
    }

    // A run still open at end of input closes there.
    if let Some(start) = run_start {
        ranges.push(DiffRange {
            start,
            len: left.len() - start,
        });
    }

    Ok(DiffSummary { ranges })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn offsets(left: &str, right: &str) -> Vec<(usize, usize)> {
        diff_offsets(left.as_bytes(), right.as_bytes())
            .unwrap()
            .ranges()
            .iter()
            .map(|r| (r.start, r.len))
            .collect()
    }

    #[test]
    fn rejects_empty_left() {
        let err = diff_offsets(b"", b"a").unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn rejects_empty_right() {
        let err = diff_offsets(b"a", b"").unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = diff_offsets(b"a", b"ab").unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn identical_buffers_have_no_ranges() {
        let summary = diff_offsets(b"equals", b"equals").unwrap();
        assert!(summary.is_equal());
        assert!(summary.ranges().is_empty());
    }

    #[test]
    fn two_interior_runs() {
        assert_eq!(offsets("12as34as56", "12er34er56"), vec![(2, 2), (6, 2)]);
    }

    #[test]
    fn run_reaching_end_of_input_is_closed() {
        assert_eq!(
            offsets("12as34as56as", "12er34er56er"),
            vec![(2, 2), (6, 2), (10, 2)]
        );
    }

    #[test]
    fn run_at_index_zero() {
        assert_eq!(offsets("e1", "s1"), vec![(0, 1)]);
    }

    #[test]
    fn runs_at_both_ends() {
        assert_eq!(offsets("e1e", "s1s"), vec![(0, 1), (2, 1)]);
    }

    #[test]
    fn single_trailing_difference() {
        assert_eq!(offsets("1e", "1s"), vec![(1, 1)]);
    }

    #[test]
    fn trailing_run_of_two() {
        assert_eq!(offsets("1ee", "1ss"), vec![(1, 2)]);
    }

    #[test]
    fn everything_differs() {
        assert_eq!(offsets("123456", "abcdef"), vec![(0, 6)]);
    }

    #[test]
    fn adjacent_differences_merge_into_one_run() {
        assert_eq!(offsets("12asas56", "12erer56"), vec![(2, 4)]);
    }

    #[test]
    fn display_lists_ranges_in_order() {
        let summary = diff_offsets(b"12as34as56", b"12er34er56").unwrap();
        assert_eq!(
            summary.to_string(),
            "offsets [(index, length), ..]: [(2, 2),(6, 2)]"
        );
    }

    #[test]
    fn display_for_equal_buffers() {
        let summary = diff_offsets(b"same", b"same").unwrap();
        assert_eq!(summary.to_string(), "buffers are identical");
    }

    /// Pairs drawn from a small alphabet so matches and mismatches both
    /// occur often.
    fn equal_length_pairs() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
        (1usize..128).prop_flat_map(|len| {
            (
                proptest::collection::vec(0u8..4, len),
                proptest::collection::vec(0u8..4, len),
            )
        })
    }

    proptest! {
        #[test]
        fn ranges_cover_exactly_the_differing_indices(
            (left, right) in equal_length_pairs()
        ) {
            let summary = diff_offsets(&left, &right).unwrap();

            let mut covered = vec![false; left.len()];
            let mut prev_end: Option<usize> = None;
            for range in summary.ranges() {
                prop_assert!(range.len > 0);
                prop_assert!(range.start + range.len <= left.len());
                if let Some(end) = prev_end {
                    // sorted, and separated by at least one matching byte
                    prop_assert!(range.start > end);
                }
                for flag in &mut covered[range.start..range.start + range.len] {
                    *flag = true;
                }
                prev_end = Some(range.start + range.len);
            }

            for i in 0..left.len() {
                prop_assert_eq!(covered[i], left[i] != right[i]);
            }
        }

        #[test]
        fn buffer_never_differs_from_itself(
            buf in proptest::collection::vec(any::<u8>(), 1..256)
        ) {
            prop_assert!(diff_offsets(&buf, &buf).unwrap().is_equal());
        }
    }
}
