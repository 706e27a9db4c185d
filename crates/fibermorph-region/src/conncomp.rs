//! Connected component analysis
//!
//! This module provides functions for finding and labeling connected components
//! in binary images. It uses a Union-Find (disjoint set) data structure for
//! two-pass labeling.
//!
//! Labels are 1-based and assigned in raster order of each component's first
//! pixel, so label 1 is always the component containing the top-most,
//! left-most foreground pixel.

use crate::error::{RegionError, RegionResult};
use fibermorph_core::{BinaryImage, BoundingBox, Coord, check_binary};

/// Connectivity type for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

impl ConnectivityType {
    /// Offsets of the already-visited neighbors in a raster scan
    fn causal_offsets(self) -> &'static [(i64, i64)] {
        match self {
            ConnectivityType::FourWay => &[(-1, 0), (0, -1)],
            ConnectivityType::EightWay => &[(-1, -1), (-1, 0), (-1, 1), (0, -1)],
        }
    }
}

/// Disjoint set over provisional labels
struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    fn new() -> Self {
        // Index 0 is the background and never joined
        Self { parent: vec![0] }
    }

    fn make_set(&mut self) -> u32 {
        let id = self.parent.len() as u32;
        self.parent.push(id);
        id
    }

    fn find(&mut self, mut x: u32) -> u32 {
        while self.parent[x as usize] != x {
            let grand = self.parent[self.parent[x as usize] as usize];
            self.parent[x as usize] = grand;
            x = grand;
        }
        x
    }

    fn union(&mut self, a: u32, b: u32) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[hi as usize] = lo;
        }
    }
}

/// Per-pixel component labels of a binary image
///
/// Background pixels hold 0; foreground pixels hold their component label
/// in `1..=num_components()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    width: u32,
    height: u32,
    labels: Vec<u32>,
    count: u32,
}

impl LabelMap {
    /// Map width
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Map height
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of labeled components
    pub fn num_components(&self) -> u32 {
        self.count
    }

    /// Label at `(row, col)`, or `None` outside the map
    pub fn get(&self, row: u32, col: u32) -> Option<u32> {
        if row < self.height && col < self.width {
            Some(self.labels[(row * self.width + col) as usize])
        } else {
            None
        }
    }

    /// Raw row-major label buffer
    pub fn as_slice(&self) -> &[u32] {
        &self.labels
    }

    /// Pixel count of each component, indexed by `label - 1`
    pub fn component_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.count as usize];
        for &l in &self.labels {
            if l > 0 {
                sizes[l as usize - 1] += 1;
            }
        }
        sizes
    }

    /// Coordinates of each component in raster order, indexed by `label - 1`
    pub fn component_coords(&self) -> Vec<Vec<Coord>> {
        let mut coords = vec![Vec::new(); self.count as usize];
        for (i, &l) in self.labels.iter().enumerate() {
            if l > 0 {
                let i = i as u32;
                coords[l as usize - 1].push(Coord::new(i / self.width, i % self.width));
            }
        }
        coords
    }

    /// Binary mask of a single component, at full image size
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidLabel`] if `label` is 0 or larger than
    /// the number of components.
    pub fn extract_component(&self, label: u32) -> RegionResult<BinaryImage> {
        if label == 0 || label > self.count {
            return Err(RegionError::InvalidLabel {
                label,
                count: self.count,
            });
        }
        let data = self.labels.iter().map(|&l| l == label).collect();
        Ok(BinaryImage::from_vec(self.width, self.height, data)?)
    }
}

/// Label all connected components in a binary image
pub fn label_connected_components(image: &BinaryImage, connectivity: ConnectivityType) -> LabelMap {
    let width = image.width();
    let height = image.height();
    let offsets = connectivity.causal_offsets();
    let pixels = image.as_slice();
    let mut provisional = vec![0u32; image.len()];
    let mut sets = UnionFind::new();

    // First pass: provisional labels and equivalences
    for row in 0..height {
        for col in 0..width {
            if !pixels[(row * width + col) as usize] {
                continue;
            }
            let mut current = 0u32;
            for &(dr, dc) in offsets {
                let (r, c) = (row as i64 + dr, col as i64 + dc);
                if r < 0 || c < 0 || c >= width as i64 {
                    continue;
                }
                let neighbor = provisional[(r as u32 * width + c as u32) as usize];
                if neighbor == 0 {
                    continue;
                }
                if current == 0 {
                    current = neighbor;
                } else {
                    sets.union(current, neighbor);
                }
            }
            if current == 0 {
                current = sets.make_set();
            }
            provisional[(row * width + col) as usize] = current;
        }
    }

    // Second pass: resolve roots and renumber in raster order
    let mut remap = vec![0u32; sets.parent.len()];
    let mut count = 0u32;
    for label in provisional.iter_mut() {
        if *label == 0 {
            continue;
        }
        let root = sets.find(*label) as usize;
        if remap[root] == 0 {
            count += 1;
            remap[root] = count;
        }
        *label = remap[root];
    }

    LabelMap {
        width,
        height,
        labels: provisional,
        count,
    }
}

/// A connected component in an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponent {
    /// Unique label for this component
    pub label: u32,
    /// Number of pixels in this component
    pub pixel_count: usize,
    /// Bounding box of this component
    pub bounds: BoundingBox,
}

/// Find all connected components in a binary image
///
/// Returns one entry per component in label order.
pub fn find_connected_components(
    image: &BinaryImage,
    connectivity: ConnectivityType,
) -> Vec<ConnectedComponent> {
    let labels = label_connected_components(image, connectivity);
    labels
        .component_coords()
        .into_iter()
        .enumerate()
        .filter_map(|(i, coords)| {
            let bounds = BoundingBox::enclosing(coords.iter().copied())?;
            Some(ConnectedComponent {
                label: i as u32 + 1,
                pixel_count: coords.len(),
                bounds,
            })
        })
        .collect()
}

/// Remove 8-connected components with fewer than `min_area` pixels
///
/// The input is orientation-normalized first, so the foreground is the
/// minority class. Returns a new image of the same size.
///
/// # Errors
///
/// Propagates core errors from rebuilding the image.
pub fn remove_small_objects(image: &BinaryImage, min_area: usize) -> RegionResult<BinaryImage> {
    let image = check_binary(image);
    let labels = label_connected_components(&image, ConnectivityType::EightWay);
    let sizes = labels.component_sizes();

    let removed = sizes.iter().filter(|&&s| s < min_area).count();
    tracing::debug!(
        components = sizes.len(),
        removed,
        min_area,
        "removed small objects"
    );

    let data = labels
        .as_slice()
        .iter()
        .map(|&l| l > 0 && sizes[l as usize - 1] >= min_area)
        .collect();
    Ok(BinaryImage::from_vec(image.width(), image.height(), data)?)
}

/// Mean `(row, col)` of each component in label order
///
/// Components whose centroid is not finite are omitted.
pub fn component_centroids(labels: &LabelMap) -> Vec<(f64, f64)> {
    let mut sums = vec![(0.0f64, 0.0f64, 0usize); labels.num_components() as usize];
    for (i, &l) in labels.as_slice().iter().enumerate() {
        if l > 0 {
            let i = i as u32;
            let entry = &mut sums[l as usize - 1];
            entry.0 += (i / labels.width()) as f64;
            entry.1 += (i % labels.width()) as f64;
            entry.2 += 1;
        }
    }
    sums.into_iter()
        .map(|(r, c, n)| (r / n as f64, c / n as f64))
        .filter(|(r, c)| r.is_finite() && c.is_finite())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_raster_order() {
        let img = BinaryImage::from_rows(&[
            [0, 0, 0, 1, 1],
            [1, 0, 0, 0, 0],
            [1, 0, 1, 0, 0],
        ])
        .unwrap();
        let labels = label_connected_components(&img, ConnectivityType::FourWay);
        assert_eq!(labels.num_components(), 3);
        assert_eq!(labels.get(0, 3), Some(1));
        assert_eq!(labels.get(1, 0), Some(2));
        assert_eq!(labels.get(2, 2), Some(3));
        assert_eq!(labels.get(0, 0), Some(0));
        assert_eq!(labels.get(5, 0), None);
    }

    #[test]
    fn test_eight_way_joins_diagonals() {
        let img = BinaryImage::from_rows(&[[1, 0, 0], [0, 1, 0], [0, 0, 1]]).unwrap();
        assert_eq!(
            find_connected_components(&img, ConnectivityType::FourWay).len(),
            3
        );
        let comps = find_connected_components(&img, ConnectivityType::EightWay);
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0].pixel_count, 3);
        assert_eq!(comps[0].bounds, BoundingBox::new(0, 0, 3, 3));
    }

    #[test]
    fn test_u_shape_merges() {
        // Two arms meet only at the bottom row, forcing an equivalence
        let img = BinaryImage::from_rows(&[
            [1, 0, 1],
            [1, 0, 1],
            [1, 1, 1],
        ])
        .unwrap();
        let labels = label_connected_components(&img, ConnectivityType::FourWay);
        assert_eq!(labels.num_components(), 1);
        assert_eq!(labels.component_sizes(), vec![7]);
    }

    #[test]
    fn test_remove_small_objects() {
        let img = BinaryImage::from_rows(&[
            [1, 1, 1, 1, 1, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 1, 0],
            [0, 0, 0, 0, 0, 1, 0, 0],
        ])
        .unwrap();
        let cleaned = remove_small_objects(&img, 5).unwrap();
        assert_eq!(cleaned.count_foreground(), 5);
        assert!(!cleaned.get(2, 6).unwrap());

        let all = remove_small_objects(&img, 2).unwrap();
        assert_eq!(all, img);
    }

    #[test]
    fn test_extract_component() {
        let img = BinaryImage::from_rows(&[[1, 0, 1]]).unwrap();
        let labels = label_connected_components(&img, ConnectivityType::EightWay);
        let second = labels.extract_component(2).unwrap();
        assert_eq!(second, BinaryImage::from_rows(&[[0, 0, 1]]).unwrap());
        assert!(matches!(
            labels.extract_component(3),
            Err(RegionError::InvalidLabel { label: 3, count: 2 })
        ));
    }

    #[test]
    fn test_centroids() {
        let img = BinaryImage::from_rows(&[[1, 1, 1, 0, 0], [0, 0, 0, 0, 1]]).unwrap();
        let labels = label_connected_components(&img, ConnectivityType::EightWay);
        let centroids = component_centroids(&labels);
        assert_eq!(centroids, vec![(0.0, 1.0), (1.0, 4.0)]);
    }
}
