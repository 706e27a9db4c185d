//! Connected skeleton elements
//!
//! A [`ConnectedElement`] is one 8-connected piece of a skeleton together with
//! everything the curvature stage needs from it: its ordered pixel
//! coordinates, its area and a cropped mask holding only its own pixels.

use crate::conncomp::{ConnectivityType, label_connected_components};
use crate::error::RegionResult;
use fibermorph_core::{BinaryImage, BoundingBox, Coord};

/// One labeled skeleton element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedElement {
    /// 1-based label in raster order of the element's first pixel
    pub label: u32,
    /// Pixel coordinates in raster order
    pub coords: Vec<Coord>,
    /// Pixel count (`coords.len()`)
    pub area: usize,
    /// Bounding box in image coordinates
    pub bounds: BoundingBox,
    /// Mask cropped to `bounds` with only this element's pixels set
    pub image: BinaryImage,
}

impl ConnectedElement {
    fn from_coords(label: u32, coords: Vec<Coord>, bounds: BoundingBox) -> RegionResult<Self> {
        let local = coords
            .iter()
            .map(|c| Coord::new(c.row - bounds.min_row, c.col - bounds.min_col));
        let image = BinaryImage::from_coords(bounds.width, bounds.height, local)?;
        Ok(Self {
            label,
            area: coords.len(),
            coords,
            bounds,
            image,
        })
    }
}

/// Label a skeleton with 8-connectivity and build one element per component
///
/// Elements are returned in label order.
///
/// # Errors
///
/// Propagates core errors from building the cropped element masks.
pub fn extract_elements(skeleton: &BinaryImage) -> RegionResult<Vec<ConnectedElement>> {
    let labels = label_connected_components(skeleton, ConnectivityType::EightWay);
    let mut elements = Vec::with_capacity(labels.num_components() as usize);

    for (i, coords) in labels.component_coords().into_iter().enumerate() {
        let Some(bounds) = BoundingBox::enclosing(coords.iter().copied()) else {
            continue;
        };
        elements.push(ConnectedElement::from_coords(i as u32 + 1, coords, bounds)?);
    }

    tracing::debug!(count = elements.len(), "extracted skeleton elements");
    Ok(elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elements_in_label_order() {
        let img = BinaryImage::from_rows(&[
            [0, 0, 0, 1, 0],
            [1, 0, 0, 0, 1],
            [1, 0, 0, 0, 0],
            [1, 0, 0, 0, 0],
        ])
        .unwrap();
        let elements = extract_elements(&img).unwrap();
        assert_eq!(elements.len(), 2);

        let first = &elements[0];
        assert_eq!(first.label, 1);
        assert_eq!(first.area, 2);
        assert_eq!(first.coords, vec![Coord::new(0, 3), Coord::new(1, 4)]);
        assert_eq!(first.bounds, BoundingBox::new(0, 3, 2, 2));
        assert_eq!(
            first.image,
            BinaryImage::from_rows(&[[1, 0], [0, 1]]).unwrap()
        );

        let second = &elements[1];
        assert_eq!(second.label, 2);
        assert_eq!(second.area, 3);
        assert_eq!(second.image.width(), 1);
        assert_eq!(second.image.count_foreground(), 3);
    }

    #[test]
    fn test_crop_excludes_neighbors() {
        // The second element lies inside the first element's bounding box
        let img = BinaryImage::from_rows(&[
            [1, 1, 1, 1],
            [1, 0, 0, 0],
            [1, 0, 1, 1],
        ])
        .unwrap();
        let elements = extract_elements(&img).unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].bounds, BoundingBox::new(0, 0, 3, 4));
        assert_eq!(elements[0].image.count_foreground(), 6);
        assert_eq!(elements[1].image.count_foreground(), 2);
    }

    #[test]
    fn test_empty_skeleton() {
        let img = BinaryImage::new(4, 4).unwrap();
        assert!(extract_elements(&img).unwrap().is_empty());
    }
}
