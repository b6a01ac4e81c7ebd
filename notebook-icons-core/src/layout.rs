use crate::error::CoreError;

/// A pixel coordinate on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned box, inclusive on all four edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

/// A stroked line segment. Both endpoints are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    /// Stroke width in pixels, measured across the line.
    pub width: u32,
}

/// Geometry of the notebook icon at one pixel size.
///
/// Every measurement is derived from `size` with unsigned (floor) integer
/// division, so two layouts of the same size are identical down to the
/// pixel. Small sizes are accepted; below 10 px the margin collapses to 0
/// and the page covers the whole canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconLayout {
    size: u32,
    margin: u32,
}

impl IconLayout {
    /// Number of horizontal ruled lines on the page.
    pub const RULED_LINE_COUNT: u32 = 6;

    pub fn new(size: u32) -> crate::Result<Self> {
        if size == 0 {
            return Err(CoreError::InvalidSize(size));
        }
        Ok(Self {
            size,
            margin: size / 10,
        })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Inset between the canvas edge and the page.
    pub fn margin(&self) -> u32 {
        self.margin
    }

    /// The page region.
    pub fn paper(&self) -> Rect {
        let far = self.size - self.margin;
        Rect {
            x0: self.margin,
            y0: self.margin,
            x1: far,
            y1: far,
        }
    }

    /// The red vertical margin rule.
    pub fn divider(&self) -> Segment {
        let x = self.margin + self.size / 6;
        Segment {
            from: Point::new(x, self.margin),
            to: Point::new(x, self.size - self.margin),
            width: (self.size / 96).max(2),
        }
    }

    /// Distance between consecutive ruled lines.
    pub fn ruled_spacing(&self) -> u32 {
        (self.size - 2 * self.margin) / (Self::RULED_LINE_COUNT + 1)
    }

    /// The horizontal ruled lines, top to bottom.
    pub fn ruled_lines(&self) -> impl Iterator<Item = Segment> {
        let margin = self.margin;
        let far = self.size - self.margin;
        let spacing = self.ruled_spacing();
        let width = (self.size / 192).max(1);
        (1..=Self::RULED_LINE_COUNT).map(move |i| {
            let y = margin + i * spacing;
            Segment {
                from: Point::new(margin, y),
                to: Point::new(far, y),
                width,
            }
        })
    }

    pub fn glyph_center(&self) -> Point {
        Point::new(self.size / 2, self.size / 2)
    }

    /// Distance from the glyph center to each diamond vertex.
    pub fn diamond_radius(&self) -> u32 {
        self.size / 8
    }

    /// Radius of the white dot inside the diamond.
    pub fn circle_radius(&self) -> u32 {
        self.diamond_radius() / 2
    }
}
