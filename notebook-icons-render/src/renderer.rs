use std::time::Instant;

use tracing::debug;

use notebook_icons_core::color::{BACKGROUND, GLYPH, MARGIN_RULE, PAPER, RULED_LINE, WHITE};
use notebook_icons_core::IconLayout;

use crate::canvas::Canvas;

/// Draw the notebook icon at `size × size` pixels.
///
/// Layers, bottom to top: indigo background, paper, red margin rule,
/// ruled lines, indigo diamond, white dot. The output depends only on
/// `size`.
pub fn render(size: u32) -> crate::Result<Canvas> {
    let start = Instant::now();
    let layout = IconLayout::new(size)?;
    let canvas = render_layout(&layout);
    debug!(
        size,
        margin = layout.margin(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "Rendered icon"
    );
    Ok(canvas)
}

/// Draw a precomputed layout onto a fresh canvas.
fn render_layout(layout: &IconLayout) -> Canvas {
    let mut canvas = Canvas::new(layout.size(), BACKGROUND);

    canvas.fill_rect(layout.paper(), PAPER);
    canvas.draw_line(layout.divider(), MARGIN_RULE);
    for line in layout.ruled_lines() {
        canvas.draw_line(line, RULED_LINE);
    }

    let center = layout.glyph_center();
    canvas.fill_diamond(center, layout.diamond_radius(), GLYPH);
    canvas.fill_circle(center, layout.circle_radius(), WHITE);

    canvas
}
