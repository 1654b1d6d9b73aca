//! Aspect ratio normalization.
//!
//! Every item entering the layout is reduced to one number, `width / height`.
//! Declared dimensions come from content editors and are frequently missing
//! or zero; those items fall back to a square instead of failing the layout.
//!
//! # Example
//!
//! ```
//! use zenjustify::ratio::{Dimensions, aspect_ratio};
//!
//! assert_eq!(aspect_ratio(Some(800.0), Some(400.0)), 2.0);
//! assert_eq!(aspect_ratio(Some(800.0), None), 1.0);
//! assert_eq!(Dimensions::new(0.0, 600.0).aspect_ratio(), 1.0);
//! ```

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Ratio substituted for items whose dimensions cannot produce one.
pub const DEFAULT_ASPECT_RATIO: f64 = 1.0;

/// Narrowest ratio an item can have after normalization.
pub const MIN_ASPECT_RATIO: f64 = 1.0 / 1000.0;

/// Widest ratio an item can have after normalization.
pub const MAX_ASPECT_RATIO: f64 = 1000.0;

/// Declared dimensions of an item. Either axis may be unknown.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Dimensions {
    /// Declared width, in any unit shared with `height`.
    pub width: Option<f64>,
    /// Declared height.
    pub height: Option<f64>,
}

impl Dimensions {
    /// Both axes unknown. Normalizes to [`DEFAULT_ASPECT_RATIO`].
    pub const UNKNOWN: Self = Self {
        width: None,
        height: None,
    };

    /// Create from known width and height.
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Create from integer pixel dimensions.
    pub const fn pixels(width: u32, height: u32) -> Self {
        Self::new(width as f64, height as f64)
    }

    /// Normalized aspect ratio. See [`aspect_ratio`].
    pub fn aspect_ratio(self) -> f64 {
        aspect_ratio(self.width, self.height)
    }

    /// Whether the dimensions produce a ratio of their own, without falling
    /// back to [`DEFAULT_ASPECT_RATIO`].
    pub fn is_usable(self) -> bool {
        usable_ratio(self.width, self.height).is_some()
    }
}

/// Something that can be placed in a justified layout.
///
/// The implementing value is the caller's payload; the layout only records
/// its key and its position in the input slice.
pub trait LayoutItem {
    /// Stable identity, unique within one layout call.
    type Key: Clone + PartialEq;

    /// Identity of this item.
    fn key(&self) -> Self::Key;

    /// Declared dimensions.
    fn dimensions(&self) -> Dimensions;

    /// Normalized aspect ratio.
    fn aspect_ratio(&self) -> f64 {
        self.dimensions().aspect_ratio()
    }
}

/// Minimal [`LayoutItem`]: a key and declared dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct Item<K> {
    pub key: K,
    pub dimensions: Dimensions,
}

impl<K> Item<K> {
    /// Item with known dimensions.
    pub fn new(key: K, width: f64, height: f64) -> Self {
        Self {
            key,
            dimensions: Dimensions::new(width, height),
        }
    }

    /// Item whose dimensions are not known; lays out as a square.
    pub fn unknown(key: K) -> Self {
        Self {
            key,
            dimensions: Dimensions::UNKNOWN,
        }
    }

    /// Item with a known ratio and no meaningful dimensions.
    pub fn with_ratio(key: K, ratio: f64) -> Self {
        Self::new(key, ratio, 1.0)
    }
}

impl<K: Clone + PartialEq> LayoutItem for Item<K> {
    type Key = K;

    fn key(&self) -> K {
        self.key.clone()
    }

    fn dimensions(&self) -> Dimensions {
        self.dimensions
    }
}

/// Compute `width / height`, substituting [`DEFAULT_ASPECT_RATIO`] when
/// either side is missing, zero, negative or non-finite.
///
/// Finite ratios are clamped to [`MIN_ASPECT_RATIO`]..=[`MAX_ASPECT_RATIO`].
pub fn aspect_ratio(width: Option<f64>, height: Option<f64>) -> f64 {
    usable_ratio(width, height).unwrap_or(DEFAULT_ASPECT_RATIO)
}

/// Clamped `width / height`, or `None` when [`aspect_ratio`] would have to
/// substitute the default.
pub fn usable_ratio(width: Option<f64>, height: Option<f64>) -> Option<f64> {
    let (w, h) = (width?, height?);
    if !is_positive(w) || !is_positive(h) {
        return None;
    }
    let ratio = w / h;
    // 1e308 / 1e-308 overflows; subnormal quotients underflow to zero.
    if !is_positive(ratio) {
        return None;
    }
    Some(ratio.clamp(MIN_ASPECT_RATIO, MAX_ASPECT_RATIO))
}

/// Normalize every item of a slice, preserving order.
#[cfg(feature = "alloc")]
pub fn normalize<T: LayoutItem>(items: &[T]) -> Vec<f64> {
    items
        .iter()
        .map(|item| {
            let ratio = item.aspect_ratio();
            #[cfg(feature = "tracing")]
            {
                let dims = item.dimensions();
                if !dims.is_usable() {
                    tracing::trace!(
                        width = ?dims.width,
                        height = ?dims.height,
                        "unusable item dimensions, laying out as square"
                    );
                }
            }
            ratio
        })
        .collect()
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_and_portrait() {
        assert_eq!(aspect_ratio(Some(800.0), Some(600.0)), 800.0 / 600.0);
        assert_eq!(aspect_ratio(Some(600.0), Some(1200.0)), 0.5);
    }

    #[test]
    fn missing_axis_is_square() {
        assert_eq!(aspect_ratio(None, Some(600.0)), 1.0);
        assert_eq!(aspect_ratio(Some(800.0), None), 1.0);
        assert_eq!(aspect_ratio(None, None), 1.0);
    }

    #[test]
    fn zero_and_negative_are_square() {
        assert_eq!(aspect_ratio(Some(0.0), Some(600.0)), 1.0);
        assert_eq!(aspect_ratio(Some(800.0), Some(0.0)), 1.0);
        assert_eq!(aspect_ratio(Some(-800.0), Some(600.0)), 1.0);
        assert_eq!(aspect_ratio(Some(800.0), Some(-600.0)), 1.0);
    }

    #[test]
    fn non_finite_is_square() {
        assert_eq!(aspect_ratio(Some(f64::NAN), Some(600.0)), 1.0);
        assert_eq!(aspect_ratio(Some(f64::INFINITY), Some(600.0)), 1.0);
        assert_eq!(aspect_ratio(Some(800.0), Some(f64::NEG_INFINITY)), 1.0);
    }

    #[test]
    fn overflowing_quotient_is_square() {
        assert_eq!(aspect_ratio(Some(1e308), Some(1e-308)), 1.0);
    }

    #[test]
    fn extreme_ratios_are_clamped() {
        assert_eq!(aspect_ratio(Some(1e6), Some(1.0)), MAX_ASPECT_RATIO);
        assert_eq!(aspect_ratio(Some(1.0), Some(1e6)), MIN_ASPECT_RATIO);
        // A wide panorama stays untouched.
        assert_eq!(aspect_ratio(Some(5000.0), Some(1000.0)), 5.0);
    }

    #[test]
    fn item_helpers() {
        assert_eq!(Item::new("a", 300.0, 200.0).aspect_ratio(), 1.5);
        assert_eq!(Item::unknown("b").aspect_ratio(), 1.0);
        assert_eq!(Item::with_ratio("c", 2.5).aspect_ratio(), 2.5);
        assert_eq!(Item::new(7u32, 10.0, 10.0).key(), 7);
    }

    #[test]
    fn pixel_dimensions() {
        assert_eq!(Dimensions::pixels(1920, 1080).aspect_ratio(), 1920.0 / 1080.0);
        assert_eq!(Dimensions::pixels(0, 1080).aspect_ratio(), 1.0);
    }

    #[test]
    fn fallback_is_detectable() {
        assert!(!Dimensions::UNKNOWN.is_usable());
        assert!(!Dimensions::new(0.0, 0.0).is_usable());
        assert!(!Dimensions::new(800.0, f64::NAN).is_usable());
        assert!(!Dimensions::new(1e308, 1e-308).is_usable());
        assert_eq!(usable_ratio(Some(800.0), None), None);
        // A genuine square is not a fallback.
        assert!(Dimensions::new(500.0, 500.0).is_usable());
        assert_eq!(usable_ratio(Some(500.0), Some(500.0)), Some(1.0));
        assert_eq!(usable_ratio(Some(1e6), Some(1.0)), Some(MAX_ASPECT_RATIO));
    }

    #[test]
    fn normalize_preserves_order() {
        let items = [
            Item::new(0, 400.0, 200.0),
            Item::unknown(1),
            Item::new(2, 100.0, 400.0),
        ];
        assert_eq!(normalize(&items), [2.0, 1.0, 0.25]);
    }
}
