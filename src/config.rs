//! Layout parameters and contract validation.
//!
//! # Example
//!
//! ```
//! use zenjustify::{JustifyConfig, LastRow};
//!
//! let config = JustifyConfig::new(1200.0, 300.0)
//!     .gap(8.0)
//!     .last_row(LastRow::AlignLeft);
//! assert!(config.validate().is_ok());
//!
//! assert!(JustifyConfig::new(1200.0, 0.0).validate().is_err());
//! ```

use core::fmt;

use crate::last_row::LastRow;

/// Parameters of one justified layout computation.
///
/// All lengths are in CSS pixels. A container width that is zero, negative
/// or non-finite is not an error: it means the container has not been
/// measured yet and yields an empty layout.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct JustifyConfig {
    /// Width every filled row must span.
    pub container_width: f64,
    /// Height rows are packed towards.
    pub target_row_height: f64,
    /// Space between items in a row, and between rows.
    pub gap: f64,
    /// How the trailing row is treated when it cannot fill the width.
    pub last_row: LastRow,
}

impl JustifyConfig {
    /// Config with no gap and the default last-row policy.
    pub fn new(container_width: f64, target_row_height: f64) -> Self {
        Self {
            container_width,
            target_row_height,
            gap: 0.0,
            last_row: LastRow::default(),
        }
    }

    /// Set the gap between items and rows.
    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Set the trailing-row policy.
    pub fn last_row(mut self, policy: LastRow) -> Self {
        self.last_row = policy;
        self
    }

    /// Replace the container width, keeping everything else.
    pub fn container_width(mut self, width: f64) -> Self {
        self.container_width = width;
        self
    }

    /// Reject row heights and gaps that can only come from a caller bug.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let h = self.target_row_height;
        if !(h.is_finite() && h > 0.0) {
            return Err(LayoutError::InvalidRowHeight(h));
        }
        let g = self.gap;
        if !(g.is_finite() && g >= 0.0) {
            return Err(LayoutError::InvalidGap(g));
        }
        Ok(())
    }

    /// Whether the container has a width rows can be laid out in.
    pub fn has_usable_width(&self) -> bool {
        self.container_width.is_finite() && self.container_width > 0.0
    }

    /// Width a run of items would take at the target row height.
    ///
    /// `ratio_sum` is the sum of the items' aspect ratios.
    pub fn natural_width(&self, ratio_sum: f64, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        self.target_row_height * ratio_sum + self.gap * (count - 1) as f64
    }
}

/// Layout computation error. Only raised for contract violations.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LayoutError {
    /// Target row height is zero, negative or non-finite.
    InvalidRowHeight(f64),
    /// Gap is negative or non-finite.
    InvalidGap(f64),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRowHeight(h) => {
                write!(f, "target row height must be a positive finite length, got {h}")
            }
            Self::InvalidGap(g) => {
                write!(f, "gap must be a non-negative finite length, got {g}")
            }
        }
    }
}

impl core::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn builder_sets_fields() {
        let c = JustifyConfig::new(1000.0, 250.0)
            .gap(4.0)
            .last_row(LastRow::Justify)
            .container_width(900.0);
        assert_eq!(c.container_width, 900.0);
        assert_eq!(c.target_row_height, 250.0);
        assert_eq!(c.gap, 4.0);
        assert_eq!(c.last_row, LastRow::Justify);
    }

    #[test]
    fn defaults() {
        let c = JustifyConfig::new(1000.0, 250.0);
        assert_eq!(c.gap, 0.0);
        assert_eq!(c.last_row, LastRow::AlignLeft);
    }

    #[test]
    fn rejects_bad_row_height() {
        for h in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = JustifyConfig::new(1000.0, h).validate().unwrap_err();
            assert!(matches!(err, LayoutError::InvalidRowHeight(_)), "{h}");
        }
    }

    #[test]
    fn rejects_bad_gap() {
        for g in [-0.5, f64::NAN, f64::INFINITY] {
            let err = JustifyConfig::new(1000.0, 300.0).gap(g).validate().unwrap_err();
            assert!(matches!(err, LayoutError::InvalidGap(_)), "{g}");
        }
        assert!(JustifyConfig::new(1000.0, 300.0).gap(0.0).validate().is_ok());
    }

    #[test]
    fn unmeasured_width_is_not_an_error() {
        let c = JustifyConfig::new(0.0, 300.0);
        assert!(c.validate().is_ok());
        assert!(!c.has_usable_width());
        assert!(!JustifyConfig::new(-5.0, 300.0).has_usable_width());
        assert!(!JustifyConfig::new(f64::NAN, 300.0).has_usable_width());
    }

    #[test]
    fn natural_width_counts_gaps_between_items() {
        let c = JustifyConfig::new(1200.0, 300.0).gap(8.0);
        assert_eq!(c.natural_width(0.0, 0), 0.0);
        assert_eq!(c.natural_width(2.0, 1), 600.0);
        assert_eq!(c.natural_width(3.0, 3), 916.0);
    }

    #[test]
    fn error_messages_name_the_value() {
        let msg = LayoutError::InvalidRowHeight(-3.0).to_string();
        assert!(msg.contains("row height") && msg.contains("-3"), "{msg}");
        let msg = LayoutError::InvalidGap(-1.5).to_string();
        assert!(msg.contains("gap") && msg.contains("-1.5"), "{msg}");
    }
}
