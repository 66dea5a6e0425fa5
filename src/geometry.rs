//! Proportional sweep-angle computation for pie slices.
//!
//! Angles use the screen convention: 0° points at 3-o'clock, positive
//! angles proceed clockwise (y grows downward). Slices start at the
//! 12-o'clock position (−90°) and are laid out in caller order with no
//! gaps: each slice starts exactly where the previous one ended.

use crate::color::Rgba;
use crate::request::Slice;

/// The 12-o'clock starting angle, in the 0°-at-3-o'clock convention.
pub const TOP_ANGLE: f64 = -90.0;

/// One resolved arc of the chart: a start angle, a sweep and a fill color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpan {
    /// Start angle in degrees.
    pub start: f64,
    /// Angular extent in degrees. Zero for slices with a zero count or a
    /// zero total.
    pub sweep: f64,
    /// Fill color, taken from the slice.
    pub color: Rgba,
}

impl ArcSpan {
    /// End angle of this arc (`start + sweep`).
    pub fn end(&self) -> f64 {
        self.start + self.sweep
    }
}

/// Resolves a slice list into concrete arcs.
///
/// Each sweep is `count / total * 360`. A zero total yields all-zero
/// sweeps, which renders as a blank chart; that degenerate-but-valid case
/// is deliberate and matches the documented behavior of the zero-unread
/// edge case.
pub fn slice_arcs(slices: &[Slice]) -> Vec<ArcSpan> {
    let total: u64 = slices.iter().map(|s| s.count as u64).sum();

    let mut start = TOP_ANGLE;
    slices
        .iter()
        .map(|slice| {
            let sweep = if total == 0 {
                0.0
            } else {
                (slice.count as f64 / total as f64) * 360.0
            };
            let arc = ArcSpan {
                start,
                sweep,
                color: slice.color,
            };
            start += sweep;
            arc
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn slices(counts: &[u32]) -> Vec<Slice> {
        counts
            .iter()
            .map(|&c| Slice::new(c, Rgba::BLACK))
            .collect()
    }

    #[test]
    fn sweeps_are_proportional() {
        // 4/9, 3/9 and 2/9 of the circle
        let arcs = slice_arcs(&slices(&[4, 3, 2]));

        assert_eq!(arcs.len(), 3);
        assert!((arcs[0].sweep - 160.0).abs() < EPSILON);
        assert!((arcs[1].sweep - 120.0).abs() < EPSILON);
        assert!((arcs[2].sweep - 80.0).abs() < EPSILON);
    }

    #[test]
    fn sweeps_sum_to_full_circle() {
        let arcs = slice_arcs(&slices(&[7, 13, 1, 29, 3]));
        let sum: f64 = arcs.iter().map(|a| a.sweep).sum();
        assert!((sum - 360.0).abs() < EPSILON, "sum was {sum}");
    }

    #[test]
    fn arcs_are_gapless_and_non_overlapping() {
        let arcs = slice_arcs(&slices(&[5, 1, 8, 2]));
        assert!((arcs[0].start - TOP_ANGLE).abs() < EPSILON);
        for pair in arcs.windows(2) {
            assert!(
                (pair[1].start - pair[0].end()).abs() < EPSILON,
                "slice at {} does not start where the previous ended at {}",
                pair[1].start,
                pair[0].end()
            );
        }
    }

    #[test]
    fn single_slice_spans_full_circle() {
        let arcs = slice_arcs(&slices(&[1]));
        assert_eq!(arcs.len(), 1);
        assert!((arcs[0].start - TOP_ANGLE).abs() < EPSILON);
        assert!((arcs[0].sweep - 360.0).abs() < EPSILON);
    }

    #[test]
    fn zero_count_slice_has_zero_sweep() {
        let arcs = slice_arcs(&slices(&[3, 0, 1]));
        assert!((arcs[1].sweep - 0.0).abs() < EPSILON);
        // The zero slice passes its start angle straight through
        assert!((arcs[2].start - arcs[1].start).abs() < EPSILON);
    }

    #[test]
    fn zero_total_yields_all_zero_sweeps() {
        // Degenerate but valid: renders a blank chart, not an error
        let arcs = slice_arcs(&slices(&[0, 0, 0]));
        assert_eq!(arcs.len(), 3);
        for arc in &arcs {
            assert_eq!(arc.sweep, 0.0);
            assert_eq!(arc.start, TOP_ANGLE);
        }
    }

    #[test]
    fn empty_slice_list_yields_no_arcs() {
        assert!(slice_arcs(&[]).is_empty());
    }

    #[test]
    fn order_is_caller_supplied() {
        let list = vec![
            Slice::new(1, Rgba::rgb(255, 0, 0)),
            Slice::new(1, Rgba::rgb(0, 255, 0)),
        ];
        let arcs = slice_arcs(&list);
        assert_eq!(arcs[0].color, Rgba::rgb(255, 0, 0));
        assert_eq!(arcs[1].color, Rgba::rgb(0, 255, 0));
        assert!(arcs[0].start < arcs[1].start);
    }

    #[test]
    fn large_counts_keep_precision() {
        let arcs = slice_arcs(&slices(&[1_000_000, 2_000_000, 1_000_000]));
        let sum: f64 = arcs.iter().map(|a| a.sweep).sum();
        assert!((sum - 360.0).abs() < EPSILON);
        assert!((arcs[1].sweep - 180.0).abs() < EPSILON);
    }
}
