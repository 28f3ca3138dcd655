//! Selection geometry and normalization.
//!
//! A selection arrives as two arbitrary corner points in buffer coordinate
//! space: the user may drag in any direction and may drag past the image
//! edges. [`RawSelection::normalize`] turns that into a clamped,
//! axis-aligned [`Region`] that every transform can trust.

/// Two corner points of a drag, in buffer pixel coordinates.
///
/// Not yet ordered: `start` may lie right of or below `end`. Coordinates are
/// fractional because they come from pointer positions scaled into buffer
/// space; normalization floors them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawSelection {
    pub start: (f32, f32),
    pub end: (f32, f32),
}

impl RawSelection {
    pub fn new(start: (f32, f32), end: (f32, f32)) -> Self {
        Self { start, end }
    }

    /// Normalizes this selection against a buffer of the given dimensions.
    ///
    /// Ordering and clamping happen on the raw min/max values before the
    /// width/height subtraction, so a drag that leaves the buffer clips the
    /// rectangle instead of shifting it. A selection entirely outside the
    /// buffer collapses to a zero-area region.
    pub fn normalize(&self, buffer_width: u32, buffer_height: u32) -> Region {
        let w = buffer_width as f32;
        let h = buffer_height as f32;

        let left = self.start.0.min(self.end.0).clamp(0.0, w);
        let right = self.start.0.max(self.end.0).clamp(0.0, w);
        let top = self.start.1.min(self.end.1).clamp(0.0, h);
        let bottom = self.start.1.max(self.end.1).clamp(0.0, h);

        let left = left.floor() as u32;
        let right = right.floor() as u32;
        let top = top.floor() as u32;
        let bottom = bottom.floor() as u32;

        Region {
            left,
            top,
            width: right.saturating_sub(left),
            height: bottom.saturating_sub(top),
        }
    }
}

/// A clamped, axis-aligned rectangle within a pixel buffer.
///
/// Invariants: `left + width` and `top + height` never exceed the buffer
/// dimensions the region was normalized against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    /// A region with zero width or height selects no pixels; transforms
    /// must treat it as a no-op.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Exclusive right edge.
    pub fn right(&self) -> u32 {
        self.left + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }

    /// The corner points this region would be described by, for round-trip
    /// purposes.
    pub fn corners(&self) -> RawSelection {
        RawSelection::new(
            (self.left as f32, self.top as f32),
            (self.right() as f32, self.bottom() as f32),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_inverted_corners() {
        let sel = RawSelection::new((80.0, 60.0), (20.0, 10.0));
        let region = sel.normalize(100, 100);
        assert_eq!(
            region,
            Region {
                left: 20,
                top: 10,
                width: 60,
                height: 50
            }
        );
    }

    #[test]
    fn clamps_out_of_bounds_drag() {
        let sel = RawSelection::new((-30.0, 50.0), (130.0, 250.0));
        let region = sel.normalize(100, 200);
        assert_eq!(
            region,
            Region {
                left: 0,
                top: 50,
                width: 100,
                height: 150
            }
        );
    }

    #[test]
    fn fully_outside_selection_is_degenerate() {
        let sel = RawSelection::new((150.0, 150.0), (200.0, 200.0));
        let region = sel.normalize(100, 100);
        assert!(region.is_degenerate());
        assert_eq!(region.width, 0);
        assert_eq!(region.height, 0);
    }

    #[test]
    fn normalization_is_idempotent() {
        let sel = RawSelection::new((73.4, -12.0), (18.2, 61.9));
        let first = sel.normalize(64, 64);
        let second = first.corners().normalize(64, 64);
        assert_eq!(first, second);
    }

    #[test]
    fn fractional_coordinates_floor() {
        let sel = RawSelection::new((1.9, 2.9), (10.1, 12.7));
        let region = sel.normalize(100, 100);
        assert_eq!(
            region,
            Region {
                left: 1,
                top: 2,
                width: 9,
                height: 10
            }
        );
    }

    #[test]
    fn zero_width_drag_is_degenerate() {
        let sel = RawSelection::new((10.0, 0.0), (10.0, 50.0));
        assert!(sel.normalize(100, 100).is_degenerate());
    }
}
