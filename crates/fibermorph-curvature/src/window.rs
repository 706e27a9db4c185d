//! Sliding windows over element coordinates

use fibermorph_core::Coord;
use std::iter::FusedIterator;

/// Windows shorter than this are replaced by a single full-length window
pub const MIN_WINDOW_PX: usize = 10;

/// Lazy, restartable iterator over overlapping coordinate windows
///
/// Yields `len - window + 1` slices of `window` coordinates, the first
/// starting at index 0 and each following one shifted by one. Clone the
/// iterator to restart it.
#[derive(Debug, Clone)]
pub struct Windows<'a> {
    coords: &'a [Coord],
    window: usize,
    next: usize,
    end: usize,
}

impl<'a> Windows<'a> {
    /// Window length in coordinates
    pub fn window_len(&self) -> usize {
        self.window
    }
}

impl<'a> Iterator for Windows<'a> {
    type Item = &'a [Coord];

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let start = self.next;
        self.next += 1;
        Some(&self.coords[start..start + self.window])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end.saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Windows<'_> {}

impl FusedIterator for Windows<'_> {}

/// Sample an element of `length_px` coordinates with windows of `window_px`
///
/// If `window_px` is below [`MIN_WINDOW_PX`] a warning is logged and a single
/// window spanning the whole element is produced. `length_px` is clamped to
/// the number of coordinates available; a window longer than the element
/// yields nothing.
pub fn sample(length_px: usize, window_px: usize, coords: &[Coord]) -> Windows<'_> {
    let length = length_px.min(coords.len());
    let window = if window_px < MIN_WINDOW_PX {
        tracing::warn!(
            window_px,
            "window size is too small for a reliable fit, using the whole element"
        );
        length
    } else {
        window_px
    };

    let end = if window == 0 || window > length {
        0
    } else {
        length - window + 1
    };

    Windows {
        coords,
        window,
        next: 0,
        end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(n: u32) -> Vec<Coord> {
        (0..n).map(|i| Coord::new(0, i)).collect()
    }

    #[test]
    fn test_window_count_and_offsets() {
        let c = coords(100);
        let windows = sample(100, 20, &c);
        assert_eq!(windows.len(), 81);
        for (i, w) in windows.enumerate() {
            assert_eq!(w.len(), 20);
            assert_eq!(w[0], Coord::new(0, i as u32));
        }
    }

    #[test]
    fn test_small_window_uses_full_length() {
        let c = coords(37);
        let windows: Vec<_> = sample(37, 5, &c).collect();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].len(), 37);
    }

    #[test]
    fn test_restartable() {
        let c = coords(30);
        let mut windows = sample(30, 10, &c);
        let restart = windows.clone();
        windows.next();
        assert_eq!(windows.len(), 20);
        assert_eq!(restart.len(), 21);
        assert_eq!(restart.count(), 21);
    }

    #[test]
    fn test_window_longer_than_element() {
        let c = coords(12);
        assert_eq!(sample(12, 15, &c).count(), 0);
        assert_eq!(sample(12, 12, &c).count(), 1);
    }
}
