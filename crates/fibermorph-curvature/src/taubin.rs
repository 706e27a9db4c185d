//! Algebraic circle fit (Taubin)
//!
//! G. Taubin, "Estimation of Planar Curves, Surfaces and Nonplanar Space
//! Curves Defined by Implicit Equations, with Applications to Edge and Range
//! Image Segmentation", IEEE Trans. PAMI 13 (1991) 1115-1138.
//!
//! Points are centered, the lifted coordinate `z = x² + y²` is normalized,
//! and the circle parameters are taken from the right singular vector of
//! `[z0, x, y]` with the smallest singular value.

use fibermorph_core::Coord;
use nalgebra::DMatrix;

/// Curvatures below this value are reported as 0
pub const MIN_CURVATURE: f64 = 1e-5;

/// A point in the plane
pub trait PlanarPoint {
    /// `(x, y)` coordinates
    fn xy(&self) -> (f64, f64);
}

impl PlanarPoint for Coord {
    /// Row is taken as `x` and column as `y`
    fn xy(&self) -> (f64, f64) {
        self.to_f64()
    }
}

impl PlanarPoint for [f64; 2] {
    fn xy(&self) -> (f64, f64) {
        (self[0], self[1])
    }
}

impl PlanarPoint for (f64, f64) {
    fn xy(&self) -> (f64, f64) {
        *self
    }
}

/// Fitted circle in the input coordinate frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleFit {
    /// Center `(x, y)`
    pub center: (f64, f64),
    /// Radius in input units
    pub radius: f64,
}

/// Fit a circle to a set of points
///
/// Returns `None` for fewer than three points, when the points coincide, when
/// the SVD fails, or when the points are collinear (infinite radius).
pub fn fit_circle<P: PlanarPoint>(points: &[P]) -> Option<CircleFit> {
    let n = points.len();
    if n < 3 {
        return None;
    }

    let (sx, sy) = points.iter().fold((0.0, 0.0), |(ax, ay), p| {
        let (x, y) = p.xy();
        (ax + x, ay + y)
    });
    let (mx, my) = (sx / n as f64, sy / n as f64);

    let centered: Vec<(f64, f64)> = points
        .iter()
        .map(|p| {
            let (x, y) = p.xy();
            (x - mx, y - my)
        })
        .collect();
    let zmean = centered.iter().map(|(x, y)| x * x + y * y).sum::<f64>() / n as f64;
    if zmean.is_nan() || zmean <= 0.0 {
        return None;
    }
    let norm = 2.0 * zmean.sqrt();

    let zxy = DMatrix::from_fn(n, 3, |i, j| {
        let (x, y) = centered[i];
        match j {
            0 => (x * x + y * y - zmean) / norm,
            1 => x,
            _ => y,
        }
    });

    let svd = zxy.svd(false, true);
    let v_t = svd.v_t?;
    let s = svd.singular_values;
    let min_i = (0..s.len()).min_by(|&a, &b| s[a].total_cmp(&s[b]))?;
    let row = v_t.row(min_i);

    let a0 = row[0] / norm;
    let (a1, a2) = (row[1], row[2]);
    let a3 = -zmean * a0;

    let radius = (a1 * a1 + a2 * a2 - 4.0 * a0 * a3).sqrt() / a0.abs() / 2.0;
    if !radius.is_finite() {
        return None;
    }

    Some(CircleFit {
        center: (mx - a1 / (2.0 * a0), my - a2 / (2.0 * a0)),
        radius,
    })
}

/// Curvature (1 / radius in physical units) of the circle through `points`
///
/// `resolution` is in pixels per physical unit. Degenerate fits (too few
/// points, collinear points, non-finite results) and curvatures below
/// [`MIN_CURVATURE`] give 0.
pub fn taubin_curvature<P: PlanarPoint>(points: &[P], resolution: f64) -> f64 {
    let Some(fit) = fit_circle(points) else {
        return 0.0;
    };
    let curvature = resolution / fit.radius;
    if curvature.is_finite() && curvature >= MIN_CURVATURE {
        curvature
    } else {
        0.0
    }
}
