//! Greedy row packing.
//!
//! Walks the ordered ratio list once, growing a row until the next item
//! would overflow the container, then decides whether that item belongs to
//! the current row or starts the next one by comparing how far each choice
//! lands from the container width.
//!
//! ```text
//!   container_width ─────────────────────────────┐
//!   [ a ][ b ][ c ]                  under ──────┤   reject d: close [a b c]
//!   [ a ][ b ][ c ][    d    ]       over  ─────────┤ accept d: close [a b c d]
//! ```
//!
//! Ties go to the shorter row (reject).

use alloc::vec::Vec;
use core::ops::Range;

use crate::config::JustifyConfig;

/// A run of consecutive input items that will become one row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowGroup {
    /// Index of the first item.
    pub start: usize,
    /// One past the last item.
    pub end: usize,
    /// Sum of the items' aspect ratios.
    pub ratio_sum: f64,
    /// Set on the final group of the layout only.
    pub is_last: bool,
}

impl RowGroup {
    /// Number of items in the group.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the group holds no items. Packing never produces one.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Input indices covered by the group.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Width of the group at the target row height.
    pub fn natural_width(&self, config: &JustifyConfig) -> f64 {
        config.natural_width(self.ratio_sum, self.len())
    }
}

/// Partition `ratios` into row groups, in order.
///
/// Returns no groups for empty input or a container without usable width.
pub fn pack_rows(ratios: &[f64], config: &JustifyConfig) -> Vec<RowGroup> {
    let mut rows = Vec::new();
    if ratios.is_empty() || !config.has_usable_width() {
        return rows;
    }

    let width = config.container_width;
    let mut start = 0;
    let mut sum = 0.0;

    for (i, &ratio) in ratios.iter().enumerate() {
        let count = i - start;
        if count == 0 {
            sum = ratio;
            continue;
        }

        let with_item = config.natural_width(sum + ratio, count + 1);
        if with_item <= width {
            sum += ratio;
            continue;
        }

        let without_item = config.natural_width(sum, count);
        let under = width - without_item;
        let over = with_item - width;
        // Over-filling is only an option while the row's gaps leave room for
        // its items.
        let gaps_fit = config.gap * (count as f64) < width;

        if under <= over || !gaps_fit {
            rows.push(RowGroup {
                start,
                end: i,
                ratio_sum: sum,
                is_last: false,
            });
            start = i;
            sum = ratio;
        } else {
            rows.push(RowGroup {
                start,
                end: i + 1,
                ratio_sum: sum + ratio,
                is_last: false,
            });
            start = i + 1;
            sum = 0.0;
        }
    }

    if start < ratios.len() {
        rows.push(RowGroup {
            start,
            end: ratios.len(),
            ratio_sum: sum,
            is_last: false,
        });
    }
    if let Some(last) = rows.last_mut() {
        last.is_last = true;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        items = ratios.len(),
        rows = rows.len(),
        container_width = width,
        target_row_height = config.target_row_height,
        "packed rows"
    );

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    const LANDSCAPE: f64 = 800.0 / 600.0;

    fn sizes(rows: &[RowGroup]) -> Vec<usize> {
        rows.iter().map(RowGroup::len).collect()
    }

    #[test]
    fn empty_input() {
        let config = JustifyConfig::new(1200.0, 300.0);
        assert!(pack_rows(&[], &config).is_empty());
    }

    #[test]
    fn unmeasured_container() {
        let config = JustifyConfig::new(0.0, 300.0);
        assert!(pack_rows(&[1.0, 1.0], &config).is_empty());
    }

    #[test]
    fn over_fill_closer_than_under_fill_accepts() {
        // 808 fits; 1216 overshoots by 16, leaving 392 unused is worse.
        let config = JustifyConfig::new(1200.0, 300.0).gap(8.0);
        let rows = pack_rows(&[LANDSCAPE; 3], &config);
        assert_eq!(sizes(&rows), [3]);
        assert!(rows[0].is_last);
        assert!((rows[0].natural_width(&config) - 1216.0).abs() < 1e-9);
    }

    #[test]
    fn under_fill_closer_than_over_fill_rejects() {
        // Two squares at 300 = 600 in a 700 container: under 100, over 200.
        let config = JustifyConfig::new(700.0, 300.0);
        let rows = pack_rows(&[1.0, 1.0, 1.0], &config);
        assert_eq!(sizes(&rows), [2, 1]);
        assert_eq!(rows[1].range(), 2..3);
    }

    #[test]
    fn tie_rejects() {
        // Two squares = 600 in a 750 container: under 150, over 150.
        let config = JustifyConfig::new(750.0, 300.0);
        let rows = pack_rows(&[1.0, 1.0, 1.0], &config);
        assert_eq!(sizes(&rows), [2, 1]);
    }

    #[test]
    fn accepted_over_fill_closes_the_row() {
        // 800 container: [a b] over-fills by 8 and closes; c starts fresh.
        let config = JustifyConfig::new(800.0, 300.0).gap(8.0);
        let rows = pack_rows(&[LANDSCAPE; 3], &config);
        assert_eq!(sizes(&rows), [2, 1]);
        assert!(!rows[0].is_last);
        assert!(rows[1].is_last);
    }

    #[test]
    fn oversized_first_item_forms_its_own_row() {
        let config = JustifyConfig::new(1200.0, 300.0);
        let rows = pack_rows(&[5.0, 1.0, 1.0], &config);
        assert_eq!(sizes(&rows), [1, 2]);
        assert_eq!(rows[0].ratio_sum, 5.0);
    }

    #[test]
    fn groups_are_contiguous_and_cover_input() {
        let ratios = [1.5, 0.66, 1.0, 2.4, 0.75, 1.33, 1.78, 0.5, 1.0, 3.0];
        let config = JustifyConfig::new(1000.0, 220.0).gap(4.0);
        let rows = pack_rows(&ratios, &config);
        assert_eq!(rows.first().map(|r| r.start), Some(0));
        assert_eq!(rows.last().map(|r| r.end), Some(ratios.len()));
        for pair in rows.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert!(rows.iter().all(|r| !r.is_empty()));
        assert_eq!(rows.iter().filter(|r| r.is_last).count(), 1);
    }

    #[test]
    fn ratio_sums_match_members() {
        let ratios = [1.5, 0.66, 1.0, 2.4, 0.75, 1.33];
        let config = JustifyConfig::new(900.0, 200.0).gap(6.0);
        for row in pack_rows(&ratios, &config) {
            let expected: f64 = ratios[row.range()].iter().sum();
            assert!((row.ratio_sum - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn gaps_wider_than_container_never_over_fill() {
        // Over-filling [a b] would leave 0px for the items once the gap is
        // taken out, even though it lands closer to the width.
        let config = JustifyConfig::new(20.0, 10.0).gap(20.0);
        let rows = pack_rows(&[0.1, 0.1, 0.1], &config);
        assert_eq!(sizes(&rows), [1, 1, 1]);
        for row in &rows {
            let gaps = config.gap * (row.len() - 1) as f64;
            assert!(gaps < config.container_width, "{row:?}");
        }
    }
}
