//! Justified layout assembly.
//!
//! Runs normalization, packing and scaling over a slice of items and
//! produces positioned rows. Pure geometry: nothing here knows how an item
//! is drawn. Callers map each [`Tile`] back to their own item through
//! [`Layout::render`].
//!
//! # Example
//!
//! ```
//! use zenjustify::{Item, JustifyConfig, RowFill};
//!
//! let photos = [
//!     Item::new("a", 800.0, 600.0),
//!     Item::new("b", 800.0, 600.0),
//!     Item::new("c", 800.0, 600.0),
//! ];
//! let layout = JustifyConfig::new(800.0, 300.0)
//!     .gap(8.0)
//!     .compute(&photos)
//!     .unwrap();
//!
//! assert_eq!(layout.rows().len(), 2);
//! assert_eq!(layout.rows()[0].fill, RowFill::Filled);
//! assert_eq!(layout.rows()[1].fill, RowFill::UnderFilled);
//!
//! let html: Vec<String> = layout.render(&photos, |photo, tile| {
//!     format!("<img src={}.jpg width={}>", photo.key, tile.pixels.width)
//! });
//! assert_eq!(html.len(), 3);
//! ```

use alloc::vec::Vec;

use num_traits::Float;

use crate::config::{JustifyConfig, LayoutError};
use crate::last_row::{self, RowFill};
use crate::packer::{self, RowGroup};
use crate::ratio::{self, LayoutItem};
use crate::scaler::{self, RowScale};

/// Width × height in whole pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Placement of one input item.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile<K> {
    /// Key of the item this tile belongs to.
    pub key: K,
    /// Position of the item in the input slice.
    pub index: usize,
    /// Normalized aspect ratio the tile was sized with.
    pub aspect_ratio: f64,
    /// Left edge, relative to the container.
    pub x: f64,
    /// Top edge, relative to the container.
    pub y: f64,
    /// Exact rendered width, `aspect_ratio * height`.
    pub width: f64,
    /// Exact rendered height, shared by the whole row.
    pub height: f64,
    /// Rendered size snapped to whole pixels, within 1px of the exact width.
    /// The widths of a filled row still sum to the container minus gaps.
    pub pixels: Size,
}

/// One row of tiles.
#[derive(Clone, Debug, PartialEq)]
pub struct Row<K> {
    /// Tiles in input order.
    pub tiles: Vec<Tile<K>>,
    /// Top edge of the row.
    pub y: f64,
    /// Height shared by every tile.
    pub height: f64,
    /// Scale relative to the target row height.
    pub scale: f64,
    /// Whether the row spans the container.
    pub fill: RowFill,
}

impl<K> Row<K> {
    /// Number of tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the row has no tiles. Layouts never contain one.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Horizontal extent: tile widths plus the gaps between them.
    pub fn width(&self) -> f64 {
        match (self.tiles.first(), self.tiles.last()) {
            (Some(first), Some(last)) => last.x + last.width - first.x,
            _ => 0.0,
        }
    }

    /// Whether the row spans the container width.
    pub fn is_filled(&self) -> bool {
        self.fill == RowFill::Filled
    }
}

/// Rows produced by one layout computation.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout<K> {
    rows: Vec<Row<K>>,
    container_width: f64,
    gap: f64,
}

impl<K> Layout<K> {
    /// Layout with no rows, for the given container.
    pub fn empty(config: &JustifyConfig) -> Self {
        Self {
            rows: Vec::new(),
            container_width: config.container_width,
            gap: config.gap,
        }
    }

    /// Rows, top to bottom.
    pub fn rows(&self) -> &[Row<K>] {
        &self.rows
    }

    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Container width the layout was computed for.
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Gap between items and between rows.
    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Total stacked height, rows separated by the gap.
    pub fn height(&self) -> f64 {
        self.rows.last().map_or(0.0, |row| row.y + row.height)
    }

    /// Number of tiles across all rows.
    pub fn tile_count(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    /// All tiles in input order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile<K>> {
        self.rows.iter().flat_map(|row| row.tiles.iter())
    }

    /// Invoke `render` once per tile, in input order, with the item the tile
    /// was computed for.
    ///
    /// `items` must be the slice the layout was computed from; tiles whose
    /// index falls outside it are skipped.
    pub fn render<'a, T, R>(
        &self,
        items: &'a [T],
        mut render: impl FnMut(&'a T, &Tile<K>) -> R,
    ) -> Vec<R> {
        self.tiles()
            .filter_map(|tile| items.get(tile.index).map(|item| render(item, tile)))
            .collect()
    }
}

impl JustifyConfig {
    /// Compute the justified layout of `items`.
    pub fn compute<T: LayoutItem>(&self, items: &[T]) -> Result<Layout<T::Key>, LayoutError> {
        justify(items, self)
    }
}

/// Compute the justified layout of `items` under `config`.
///
/// Fails only for contract violations (see [`JustifyConfig::validate`]).
/// Empty input and unmeasured containers produce an empty layout.
pub fn justify<T: LayoutItem>(
    items: &[T],
    config: &JustifyConfig,
) -> Result<Layout<T::Key>, LayoutError> {
    config.validate()?;
    if items.is_empty() || !config.has_usable_width() {
        return Ok(Layout::empty(config));
    }

    let ratios = ratio::normalize(items);
    let groups = packer::pack_rows(&ratios, config);

    let mut rows = Vec::with_capacity(groups.len());
    let mut y = 0.0;
    for group in &groups {
        let (scale, fill) = scale_group(group, config);
        let row = place_row(items, &ratios, group, scale, fill, y, config);
        y += row.height + config.gap;
        rows.push(row);
    }

    Ok(Layout {
        rows,
        container_width: config.container_width,
        gap: config.gap,
    })
}

fn scale_group(group: &RowGroup, config: &JustifyConfig) -> (RowScale, RowFill) {
    if group.is_last {
        last_row::scale_last_row(group.ratio_sum, group.len(), config)
    } else {
        (
            scaler::fill_width(group.ratio_sum, group.len(), config),
            RowFill::Filled,
        )
    }
}

fn place_row<T: LayoutItem>(
    items: &[T],
    ratios: &[f64],
    group: &RowGroup,
    scale: RowScale,
    fill: RowFill,
    y: f64,
    config: &JustifyConfig,
) -> Row<T::Key> {
    let pixel_height = to_pixels(scale.height);
    // Pixel budget for tile widths in a filled row: the container minus gaps.
    let gaps = config.gap * (group.len() - 1) as f64;
    let pixel_budget = to_pixels(config.container_width - gaps);

    // Tile edges are snapped along the gap-free run of widths, so each tile is
    // within 1px of its exact width and the rounding never accumulates.
    let mut tiles = Vec::with_capacity(group.len());
    let mut x = 0.0;
    let mut run = 0.0;
    let mut left_edge: u32 = 0;
    for index in group.range() {
        let aspect_ratio = ratios[index];
        let width = scale.item_width(aspect_ratio);
        run += width;
        let right_edge = if fill == RowFill::Filled && index + 1 == group.end {
            pixel_budget
        } else {
            to_pixels(run)
        };
        let pixel_width = right_edge.saturating_sub(left_edge);
        left_edge = left_edge.max(right_edge);

        tiles.push(Tile {
            key: items[index].key(),
            index,
            aspect_ratio,
            x,
            y,
            width,
            height: scale.height,
            pixels: Size::new(pixel_width, pixel_height),
        });
        x += width + config.gap;
    }

    Row {
        tiles,
        y,
        height: scale.height,
        scale: scale.scale,
        fill,
    }
}

fn to_pixels(v: f64) -> u32 {
    let rounded = Float::round(v);
    if rounded <= 0.0 {
        0
    } else if rounded >= u32::MAX as f64 {
        u32::MAX
    } else {
        rounded as u32
    }
}
