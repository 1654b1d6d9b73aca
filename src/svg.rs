//! SVG visualization of a computed layout.
//!
//! Draws the container, every tile at its exact position, and marks
//! under-filled trailing rows with a dashed outline of the width they leave
//! unused. Labels come from the caller through the same render contract a
//! real view would use.
//!
//! # Example
//!
//! ```
//! use zenjustify::{Item, JustifyConfig, svg::render_layout_svg};
//!
//! let photos = [Item::new("dune", 1600.0, 900.0), Item::new("pier", 600.0, 900.0)];
//! let layout = JustifyConfig::new(960.0, 240.0).gap(4.0).compute(&photos).unwrap();
//!
//! let svg = render_layout_svg(&layout, &photos, |photo, _| photo.key.to_string());
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("dune"));
//! ```

use crate::justify::{Layout, Tile};

/// Margin around the container.
const MARGIN: f64 = 20.0;
/// Height of the caption line above the container.
const CAPTION_H: f64 = 22.0;

/// Render a complete SVG document of `layout`.
///
/// `label` is called once per item, in input order, with the item and its
/// tile; its result is drawn inside the tile.
pub fn render_layout_svg<T, K>(
    layout: &Layout<K>,
    items: &[T],
    mut label: impl FnMut(&T, &Tile<K>) -> String,
) -> String {
    let container_w = layout.container_width().max(0.0);
    let container_h = layout.height();
    let total_w = container_w + 2.0 * MARGIN;
    let total_h = container_h + 2.0 * MARGIN + CAPTION_H;
    let origin_y = MARGIN + CAPTION_H;

    let mut svg = String::with_capacity(1024 + 256 * layout.tile_count());

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {:.1} {:.1}">"#,
        total_w.ceil() as u32,
        total_h.ceil() as u32,
        total_w,
        total_h
    ));
    svg.push('\n');

    // Light/dark mode via prefers-color-scheme
    svg.push_str(r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .caption { font-size: 13px; font-weight: bold; fill: #333; }
  .label { font-size: 11px; fill: #fff; }
  .container { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .tile { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1; }
  .tile-under { fill: #b8d4ee; stroke: #7baed0; stroke-width: 1; }
  .unused { fill: none; stroke: #7baed0; stroke-width: 1; stroke-dasharray: 4,2; }
  @media (prefers-color-scheme: dark) {
    .caption { fill: #e0e0e0; }
    .container { fill: #2d2d2d; stroke: #555; }
    .tile { fill: #3a72a4; stroke: #5a9fd4; }
    .tile-under { fill: #2a4a65; stroke: #4a7a9e; }
    .unused { stroke: #4a7a9e; }
  }
</style>
"##);

    svg.push_str(&format!(
        r#"<text x="{MARGIN}" y="{:.1}" class="caption">{}</text>"#,
        MARGIN + 14.0,
        escape_xml(&format!(
            "{} rows, {} items, {:.0}px wide, gap {}",
            layout.rows().len(),
            layout.tile_count(),
            layout.container_width(),
            layout.gap()
        ))
    ));
    svg.push('\n');

    svg.push_str(&format!(
        r#"<rect x="{MARGIN}" y="{origin_y:.1}" width="{container_w:.1}" height="{container_h:.1}" class="container"/>"#
    ));
    svg.push('\n');

    for row in layout.rows().iter().filter(|row| !row.is_filled()) {
        let unused_x = row.width() + layout.gap();
        if unused_x < container_w {
            svg.push_str(&format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="unused"/>"#,
                MARGIN + unused_x,
                origin_y + row.y,
                container_w - unused_x,
                row.height
            ));
            svg.push('\n');
        }
    }

    let rows = layout.rows();
    let tiles = layout.render(items, |item, tile| {
        let under_filled = rows
            .iter()
            .filter(|row| !row.is_filled())
            .any(|row| row.tiles.iter().any(|t| t.index == tile.index));
        let class = if under_filled { "tile-under" } else { "tile" };
        let x = MARGIN + tile.x;
        let y = origin_y + tile.y;
        format!(
            "<rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{:.1}\" height=\"{:.1}\" class=\"{class}\"/>\n\
             <text x=\"{:.1}\" y=\"{:.1}\" class=\"label\">{} {}\u{d7}{}</text>\n",
            tile.width,
            tile.height,
            x + 4.0,
            y + 14.0,
            escape_xml(&label(item, tile)),
            tile.pixels.width,
            tile.pixels.height,
        )
    });
    for tile in tiles {
        svg.push_str(&tile);
    }

    svg.push_str("</svg>\n");
    svg
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
