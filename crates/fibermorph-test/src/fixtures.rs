//! Synthetic skeleton fixtures
//!
//! Generators for the one-pixel-wide shapes the regression suites run
//! through the pipeline. Pixels falling outside the canvas are clipped, so
//! callers can place shapes near the border without bookkeeping.
//!
//! All generators panic if the canvas has a zero dimension.

use fibermorph_core::{BinaryImage, Coord};

fn canvas(width: u32, height: u32) -> BinaryImage {
    BinaryImage::new(width, height).expect("fixture canvas must be non-empty")
}

fn plot(image: &mut BinaryImage, row: i64, col: i64) {
    let inside = row >= 0
        && col >= 0
        && row < image.height() as i64
        && col < image.width() as i64;
    if inside {
        let _ = image.set(row as u32, col as u32, true);
    }
}

/// Horizontal segment of `len` pixels starting at `(row, col)`
pub fn horizontal_line(width: u32, height: u32, row: u32, col: u32, len: u32) -> BinaryImage {
    let mut img = canvas(width, height);
    for i in 0..len as i64 {
        plot(&mut img, row as i64, col as i64 + i);
    }
    img
}

/// Vertical segment of `len` pixels starting at `(row, col)`
pub fn vertical_line(width: u32, height: u32, row: u32, col: u32, len: u32) -> BinaryImage {
    let mut img = canvas(width, height);
    for i in 0..len as i64 {
        plot(&mut img, row as i64 + i, col as i64);
    }
    img
}

/// 45° segment of `len` pixels running down and to the right from `(row, col)`
pub fn diagonal_line(width: u32, height: u32, row: u32, col: u32, len: u32) -> BinaryImage {
    let mut img = canvas(width, height);
    for i in 0..len as i64 {
        plot(&mut img, row as i64 + i, col as i64 + i);
    }
    img
}

/// Plus-shaped skeleton: a horizontal and a vertical segment of `2 * arm + 1`
/// pixels crossing at `(center_row, center_col)`
///
/// The result has `4 * arm + 1` foreground pixels when fully inside the
/// canvas.
pub fn cross(width: u32, height: u32, center_row: u32, center_col: u32, arm: u32) -> BinaryImage {
    let mut img = canvas(width, height);
    let (r, c, a) = (center_row as i64, center_col as i64, arm as i64);
    for d in -a..=a {
        plot(&mut img, r, c + d);
        plot(&mut img, r + d, c);
    }
    img
}

/// Pixel path of a circular arc, thinned to 8-connectivity
///
/// Angles are in degrees, measured counterclockwise from the +col axis with
/// rows growing downward. The returned coordinates follow the arc from
/// `start_deg` to `end_deg`; no pixel is repeated and no pixel has both of its
/// path neighbors adjacent to each other.
pub fn arc_coords(
    center_row: f64,
    center_col: f64,
    radius: f64,
    start_deg: f64,
    end_deg: f64,
) -> Vec<(i64, i64)> {
    let sweep = (end_deg - start_deg).to_radians();
    // Step well below one pixel of arc length
    let steps = ((sweep.abs() * radius * 4.0).ceil() as usize).max(1);
    let mut path: Vec<(i64, i64)> = Vec::with_capacity(steps);

    for i in 0..=steps {
        let t = start_deg.to_radians() + sweep * i as f64 / steps as f64;
        let p = (
            (center_row - radius * t.sin()).round() as i64,
            (center_col + radius * t.cos()).round() as i64,
        );
        if path.last() == Some(&p) || path.contains(&p) {
            continue;
        }
        // Drop staircase corners: the previous pixel is redundant when the
        // one before it already touches the new pixel
        while path.len() >= 2 {
            let before = path[path.len() - 2];
            if (before.0 - p.0).abs() > 1 || (before.1 - p.1).abs() > 1 {
                break;
            }
            path.pop();
        }
        path.push(p);
    }
    path
}

/// Circular arc skeleton rendered from [`arc_coords`]
pub fn arc(
    width: u32,
    height: u32,
    center_row: f64,
    center_col: f64,
    radius: f64,
    start_deg: f64,
    end_deg: f64,
) -> BinaryImage {
    let mut img = canvas(width, height);
    for (r, c) in arc_coords(center_row, center_col, radius, start_deg, end_deg) {
        plot(&mut img, r, c);
    }
    img
}

/// Exact points on a circle of `radius` around `(cx, cy)`, evenly spaced
/// over `sweep_deg` degrees
pub fn circle_points(cx: f64, cy: f64, radius: f64, n: usize, sweep_deg: f64) -> Vec<[f64; 2]> {
    let sweep = sweep_deg.to_radians();
    (0..n)
        .map(|i| {
            let t = sweep * i as f64 / n as f64;
            [cx + radius * t.cos(), cy + radius * t.sin()]
        })
        .collect()
}

/// Image with each pixel set independently with probability `density`
pub fn noise(width: u32, height: u32, density: f64, seed: u64) -> BinaryImage {
    let mut img = canvas(width, height);
    let mut rng = Lcg::new(seed);
    for row in 0..height {
        for col in 0..width {
            if rng.next_f64() < density {
                let _ = img.set(row, col, true);
            }
        }
    }
    img
}

/// Overlay several fixtures of the same size
///
/// # Panics
///
/// Panics if the images differ in size or `parts` is empty.
pub fn union(parts: &[BinaryImage]) -> BinaryImage {
    let (first, rest) = parts.split_first().expect("union needs at least one image");
    rest.iter().fold(first.clone(), |acc, img| {
        acc.or(img).expect("union parts must share dimensions")
    })
}

/// Coordinates of every set pixel, in raster order
pub fn coords_of(image: &BinaryImage) -> Vec<Coord> {
    image.foreground_coords().collect()
}

/// Linear congruential generator for reproducible noise
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    /// Uniform value in `[0, 1]`
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() as f64) / (u64::MAX as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_pixel_count() {
        let img = cross(41, 41, 20, 20, 15);
        assert_eq!(img.count_foreground(), 61);
        assert!(img.get(20, 20).unwrap());
    }

    #[test]
    fn test_lines_clip_at_border() {
        let img = horizontal_line(10, 5, 2, 5, 20);
        assert_eq!(img.count_foreground(), 5);
        let img = diagonal_line(10, 10, 0, 0, 40);
        assert_eq!(img.count_foreground(), 10);
    }

    #[test]
    fn test_arc_is_thin() {
        let path = arc_coords(50.0, 50.0, 30.0, 0.0, 180.0);
        assert!(path.len() > 60);
        for w in path.windows(2) {
            assert!((w[0].0 - w[1].0).abs() <= 1 && (w[0].1 - w[1].1).abs() <= 1);
        }
        for w in path.windows(3) {
            let touching = (w[0].0 - w[2].0).abs() <= 1 && (w[0].1 - w[2].1).abs() <= 1;
            assert!(!touching);
        }
    }

    #[test]
    fn test_lcg_reproducible() {
        let mut a = Lcg::new(7);
        let mut b = Lcg::new(7);
        for _ in 0..10 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
        assert_eq!(noise(20, 20, 0.3, 11), noise(20, 20, 0.3, 11));
    }

    #[test]
    fn test_circle_points_on_radius() {
        for [x, y] in circle_points(3.0, -2.0, 5.0, 12, 360.0) {
            let r = ((x - 3.0).powi(2) + (y + 2.0).powi(2)).sqrt();
            assert!((r - 5.0).abs() < 1e-9);
        }
    }
}
