use image::RgbImage;
use notebook_icons_core::{Point, Rect, Rgb, Segment};

/// A square RGB raster the icon is drawn into.
///
/// All drawing operations clip to the canvas bounds: any part of a shape
/// that falls outside is skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a `size × size` canvas filled with `background`.
    pub fn new(size: u32, background: Rgb) -> Self {
        Self {
            image: RgbImage::from_pixel(size, size, image::Rgb(background.to_array())),
        }
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// Color at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.image.get_pixel_checked(x, y).map(|p| Rgb::from(p.0))
    }

    /// RGB pixel data, 3 bytes per pixel, row-major order.
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    // -----------------------------------------------------------------------
    // Primitives
    // -----------------------------------------------------------------------

    /// Fill an inclusive box.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        for y in rect.y0 as i64..=rect.y1 as i64 {
            self.fill_span(rect.x0 as i64, rect.x1 as i64, y, color);
        }
    }

    /// Stroke a segment `segment.width` pixels wide.
    ///
    /// Across the line the stroke covers `floor((w-1)/2)` pixels on the
    /// low side of the spine and `ceil((w-1)/2)` on the high side, so even
    /// widths lean right/down. Both endpoints are included.
    pub fn draw_line(&mut self, segment: Segment, color: Rgb) {
        let width = segment.width.max(1) as i64;
        let lo = (width - 1) / 2;
        let hi = width - 1 - lo;

        let (x0, y0) = (segment.from.x as i64, segment.from.y as i64);
        let (x1, y1) = (segment.to.x as i64, segment.to.y as i64);

        if x0 == x1 {
            for y in y0.min(y1)..=y0.max(y1) {
                self.fill_span(x0 - lo, x0 + hi, y, color);
            }
            return;
        }
        if y0 == y1 {
            for y in y0 - lo..=y0 + hi {
                self.fill_span(x0.min(x1), x0.max(x1), y, color);
            }
            return;
        }

        // Diagonal: walk a Bresenham spine and widen each step across the
        // minor axis.
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mostly_horizontal = dx >= -dy;
        let (mut x, mut y) = (x0, y0);
        let mut err = dx + dy;
        loop {
            if mostly_horizontal {
                for yy in y - lo..=y + hi {
                    self.put(x, yy, color);
                }
            } else {
                self.fill_span(x - lo, x + hi, y, color);
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Fill the diamond whose vertices lie `radius` pixels from `center`
    /// along each axis (`|dx| + |dy| <= radius`).
    pub fn fill_diamond(&mut self, center: Point, radius: u32, color: Rgb) {
        let (cx, cy, r) = (center.x as i64, center.y as i64, radius as i64);
        for dy in -r..=r {
            let half = r - dy.abs();
            self.fill_span(cx - half, cx + half, cy + dy, color);
        }
    }

    /// Fill the disc inscribed in the inclusive box `[center - radius, center + radius]`.
    pub fn fill_circle(&mut self, center: Point, radius: u32, color: Rgb) {
        let (cx, cy, r) = (center.x as i64, center.y as i64, radius as i64);
        // 4(dx² + dy²) <= (2r + 1)² keeps the test in integers.
        let limit = (2 * r + 1) * (2 * r + 1);
        for dy in -r..=r {
            let mut half = r;
            while half > 0 && 4 * (half * half + dy * dy) > limit {
                half -= 1;
            }
            self.fill_span(cx - half, cx + half, cy + dy, color);
        }
    }

    // -----------------------------------------------------------------------
    // Clipped writes
    // -----------------------------------------------------------------------

    fn put(&mut self, x: i64, y: i64, color: Rgb) {
        let size = self.size() as i64;
        if (0..size).contains(&x) && (0..size).contains(&y) {
            self.image
                .put_pixel(x as u32, y as u32, image::Rgb(color.to_array()));
        }
    }

    /// Fill `x0..=x1` on row `y`, clipped to the canvas.
    fn fill_span(&mut self, x0: i64, x1: i64, y: i64, color: Rgb) {
        let size = self.size() as i64;
        if !(0..size).contains(&y) {
            return;
        }
        let start = x0.max(0);
        let end = x1.min(size - 1);
        if start > end {
            return;
        }
        let stride = size as usize * 3;
        let pixels: &mut [u8] = &mut self.image;
        let row = &mut pixels[y as usize * stride..(y as usize + 1) * stride];
        let px = color.to_array();
        for chunk in row[start as usize * 3..=end as usize * 3 + 2].chunks_exact_mut(3) {
            chunk.copy_from_slice(&px);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb = Rgb::new(0, 0, 0);
    const RED: Rgb = Rgb::new(255, 0, 0);

    fn count(canvas: &Canvas, color: Rgb) -> usize {
        canvas
            .as_raw()
            .chunks_exact(3)
            .filter(|px| *px == color.to_array())
            .count()
    }

    #[test]
    fn new_canvas_is_filled() {
        let canvas = Canvas::new(4, RED);
        assert_eq!(canvas.size(), 4);
        assert_eq!(canvas.as_raw().len(), 4 * 4 * 3);
        assert_eq!(count(&canvas, RED), 16);
    }

    #[test]
    fn fill_rect_is_inclusive() {
        let mut canvas = Canvas::new(8, BLACK);
        canvas.fill_rect(
            Rect {
                x0: 2,
                y0: 1,
                x1: 4,
                y1: 2,
            },
            RED,
        );
        assert_eq!(count(&canvas, RED), 3 * 2);
        assert_eq!(canvas.pixel(2, 1), Some(RED));
        assert_eq!(canvas.pixel(4, 2), Some(RED));
        assert_eq!(canvas.pixel(5, 2), Some(BLACK));
        assert_eq!(canvas.pixel(0, 0), Some(BLACK));
    }

    #[test]
    fn fill_rect_clips_to_canvas() {
        let mut canvas = Canvas::new(4, BLACK);
        canvas.fill_rect(
            Rect {
                x0: 0,
                y0: 0,
                x1: 4,
                y1: 4,
            },
            RED,
        );
        assert_eq!(count(&canvas, RED), 16);
    }

    #[test]
    fn vertical_line_width_leans_right() {
        let mut canvas = Canvas::new(10, BLACK);
        canvas.draw_line(
            Segment {
                from: Point::new(5, 2),
                to: Point::new(5, 7),
                width: 2,
            },
            RED,
        );
        assert_eq!(canvas.pixel(5, 2), Some(RED));
        assert_eq!(canvas.pixel(6, 7), Some(RED));
        assert_eq!(canvas.pixel(4, 4), Some(BLACK));
        assert_eq!(canvas.pixel(5, 8), Some(BLACK));
        assert_eq!(count(&canvas, RED), 2 * 6);
    }

    #[test]
    fn horizontal_odd_width_is_centered() {
        let mut canvas = Canvas::new(10, BLACK);
        canvas.draw_line(
            Segment {
                from: Point::new(1, 5),
                to: Point::new(8, 5),
                width: 3,
            },
            RED,
        );
        for y in 4..=6 {
            assert_eq!(canvas.pixel(1, y), Some(RED));
        }
        assert_eq!(canvas.pixel(1, 3), Some(BLACK));
        assert_eq!(canvas.pixel(1, 7), Some(BLACK));
        assert_eq!(count(&canvas, RED), 8 * 3);
    }

    #[test]
    fn diagonal_line_hits_both_endpoints() {
        let mut canvas = Canvas::new(10, BLACK);
        canvas.draw_line(
            Segment {
                from: Point::new(0, 0),
                to: Point::new(9, 9),
                width: 1,
            },
            RED,
        );
        assert_eq!(canvas.pixel(0, 0), Some(RED));
        assert_eq!(canvas.pixel(9, 9), Some(RED));
        assert_eq!(count(&canvas, RED), 10);
    }

    #[test]
    fn diamond_counts_manhattan_ball() {
        let mut canvas = Canvas::new(11, BLACK);
        canvas.fill_diamond(Point::new(5, 5), 2, RED);
        // 1 + 3 + 5 + 3 + 1
        assert_eq!(count(&canvas, RED), 13);
        assert_eq!(canvas.pixel(5, 3), Some(RED));
        assert_eq!(canvas.pixel(7, 5), Some(RED));
        assert_eq!(canvas.pixel(6, 4), Some(RED));
        assert_eq!(canvas.pixel(7, 4), Some(BLACK));
    }

    #[test]
    fn circle_fits_its_box() {
        let mut canvas = Canvas::new(21, BLACK);
        canvas.fill_circle(Point::new(10, 10), 4, RED);
        for (x, y) in [(6, 10), (14, 10), (10, 6), (10, 14)] {
            assert_eq!(canvas.pixel(x, y), Some(RED), "({x}, {y})");
        }
        assert_eq!(canvas.pixel(5, 10), Some(BLACK));
        // Corners of the bounding box are outside the disc.
        assert_eq!(canvas.pixel(6, 6), Some(BLACK));
        assert_eq!(canvas.pixel(14, 14), Some(BLACK));
    }

    #[test]
    fn zero_radius_circle_is_one_pixel() {
        let mut canvas = Canvas::new(3, BLACK);
        canvas.fill_circle(Point::new(1, 1), 0, RED);
        assert_eq!(count(&canvas, RED), 1);
        assert_eq!(canvas.pixel(1, 1), Some(RED));
    }

    #[test]
    fn shapes_clip_at_edges() {
        let mut canvas = Canvas::new(4, BLACK);
        canvas.fill_diamond(Point::new(0, 0), 3, RED);
        canvas.fill_circle(Point::new(3, 3), 5, RED);
        canvas.draw_line(
            Segment {
                from: Point::new(0, 3),
                to: Point::new(3, 3),
                width: 9,
            },
            RED,
        );
        assert_eq!(canvas.pixel(4, 4), None);
        assert_eq!(canvas.size(), 4);
    }
}
