// File: crates/chart-core/src/geometry.rs
// Summary: Default surface size, plot margins and pixel rectangles for plot areas and dashboard cells.

pub const WIDTH: i32 = 1024;
pub const HEIGHT: i32 = 640;

/// Plot-area margins in pixels: value ticks on the left, category labels below, title on top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn hsum(&self) -> u32 { self.left + self.right }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(84, 24, 48, 64)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Shrink by `insets`; never inverts (collapses to a zero-size rect instead).
    pub fn inset(&self, insets: &Insets) -> Self {
        let left = self.left + insets.left as i32;
        let top = self.top + insets.top as i32;
        let right = (self.right - insets.right as i32).max(left);
        let bottom = (self.bottom - insets.bottom as i32).max(top);
        Self { left, top, right, bottom }
    }

    /// Split into a `rows` x `cols` grid, row-major, separated by `gap` pixels.
    pub fn grid(&self, rows: usize, cols: usize, gap: i32) -> Vec<RectI32> {
        if rows == 0 || cols == 0 { return Vec::new(); }
        let cw = ((self.width() - gap * (cols as i32 - 1)) / cols as i32).max(0);
        let ch = ((self.height() - gap * (rows as i32 - 1)) / rows as i32).max(0);
        let mut cells = Vec::with_capacity(rows * cols);
        for r in 0..rows as i32 {
            for c in 0..cols as i32 {
                cells.push(Self::from_ltwh(self.left + c * (cw + gap), self.top + r * (ch + gap), cw, ch));
            }
        }
        cells
    }

    pub fn to_skia(&self) -> skia_safe::Rect {
        skia_safe::Rect::from_ltrb(self.left as f32, self.top as f32, self.right as f32, self.bottom as f32)
    }
}
