//! Trailing-row policy.
//!
//! The final group of a layout usually holds whatever items were left over.
//! Stretching one or two leftovers across a wide container would render them
//! far larger than everything above, so by default an under-filled trailing
//! row keeps the target height and stays left-aligned.

use crate::config::JustifyConfig;
use crate::scaler::{self, RowScale};

/// What to do with a trailing row whose natural width is below the container.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LastRow {
    /// Render at the target row height, left-aligned, narrower than the
    /// container.
    #[default]
    AlignLeft,
    /// Stretch to fill the width like every other row.
    Justify,
}

/// Whether a row spans the container width.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RowFill {
    /// Scaled so the row spans exactly the container width.
    Filled,
    /// Trailing row left at the target height, narrower than the container.
    UnderFilled,
}

/// Whether the trailing group is too short to fill the container at the
/// target height.
pub fn is_under_filled(ratio_sum: f64, count: usize, config: &JustifyConfig) -> bool {
    config.natural_width(ratio_sum, count) < config.container_width
}

/// Scale for the trailing group.
///
/// Falls through to [`scaler::fill_width`] when the group already meets the
/// container width or the policy is [`LastRow::Justify`].
pub fn scale_last_row(ratio_sum: f64, count: usize, config: &JustifyConfig) -> (RowScale, RowFill) {
    match config.last_row {
        LastRow::AlignLeft if is_under_filled(ratio_sum, count, config) => {
            (RowScale::unscaled(config), RowFill::UnderFilled)
        }
        _ => (scaler::fill_width(ratio_sum, count, config), RowFill::Filled),
    }
}
