/// Axis-aligned integer bounding box, `min` inclusive and `max` exclusive.
///
/// Coordinates are signed because an output rectangle grows outward from the
/// source bounds and so starts at negative coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl Rect {
    pub fn new(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Bounds of a `width` x `height` image anchored at the origin.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i64, height as i64)
    }

    pub fn width(&self) -> i64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> i64 {
        self.max_y - self.min_y
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    pub fn contains_point(&self, x: i64, y: i64) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }

    /// True when `other` lies entirely within `self`.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.min_x >= self.min_x
            && other.min_y >= self.min_y
            && other.max_x <= self.max_x
            && other.max_y <= self.max_y
    }

    /// The same box expressed relative to `origin`'s top-left corner.
    pub fn relative_to(&self, origin: &Rect) -> Rect {
        Rect::new(
            self.min_x - origin.min_x,
            self.min_y - origin.min_y,
            self.max_x - origin.min_x,
            self.max_y - origin.min_y,
        )
    }
}
