//! Pixel coordinates and bounding boxes
//!
//! Coordinates follow matrix convention: `row` grows downward, `col` grows
//! to the right, both zero-based.

/// Integer pixel coordinate in `(row, col)` order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    /// Row index (y)
    pub row: u32,
    /// Column index (x)
    pub col: u32,
}

impl Coord {
    /// Create a coordinate from row and column
    #[inline]
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Coordinate as a floating-point `(row, col)` pair
    #[inline]
    pub fn to_f64(self) -> (f64, f64) {
        (self.row as f64, self.col as f64)
    }
}

impl From<(u32, u32)> for Coord {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

/// Axis-aligned rectangle in pixel units
///
/// `min_row`/`min_col` are inclusive; `height`/`width` are always >= 1 for
/// boxes produced from pixel sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub min_row: u32,
    pub min_col: u32,
    pub height: u32,
    pub width: u32,
}

impl BoundingBox {
    /// Create a new bounding box
    pub fn new(min_row: u32, min_col: u32, height: u32, width: u32) -> Self {
        Self {
            min_row,
            min_col,
            height,
            width,
        }
    }

    /// Smallest box enclosing every coordinate, or `None` for an empty set
    pub fn enclosing<I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut iter = coords.into_iter();
        let first = iter.next()?;
        let (mut r0, mut c0, mut r1, mut c1) = (first.row, first.col, first.row, first.col);
        for c in iter {
            r0 = r0.min(c.row);
            c0 = c0.min(c.col);
            r1 = r1.max(c.row);
            c1 = c1.max(c.col);
        }
        Some(Self::new(r0, c0, r1 - r0 + 1, c1 - c0 + 1))
    }

    /// Exclusive end row
    #[inline]
    pub fn max_row(&self) -> u32 {
        self.min_row + self.height
    }

    /// Exclusive end column
    #[inline]
    pub fn max_col(&self) -> u32 {
        self.min_col + self.width
    }

    /// Check whether a coordinate lies inside the box
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= self.min_row
            && c.row < self.max_row()
            && c.col >= self.min_col
            && c.col < self.max_col()
    }

    /// Pixel area of the box
    pub fn area(&self) -> usize {
        self.height as usize * self.width as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enclosing_box() {
        let coords = [Coord::new(3, 7), Coord::new(5, 2), Coord::new(4, 4)];
        let b = BoundingBox::enclosing(coords).unwrap();
        assert_eq!(b, BoundingBox::new(3, 2, 3, 6));
        assert!(b.contains(Coord::new(5, 7)));
        assert!(!b.contains(Coord::new(6, 7)));
        assert_eq!(b.area(), 18);
    }

    #[test]
    fn test_enclosing_empty() {
        assert!(BoundingBox::enclosing(std::iter::empty()).is_none());
    }

    #[test]
    fn test_coord_ordering_is_raster() {
        let mut coords = vec![Coord::new(1, 0), Coord::new(0, 5), Coord::new(0, 1)];
        coords.sort();
        assert_eq!(
            coords,
            vec![Coord::new(0, 1), Coord::new(0, 5), Coord::new(1, 0)]
        );
    }
}
