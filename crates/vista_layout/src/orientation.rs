//! Orientation switching

use vista_core::{Orientation, Viewport};

/// A portrait and a landscape variant of the same thing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrientationLayout<T> {
    pub portrait: T,
    pub landscape: T,
}

impl<T> OrientationLayout<T> {
    pub fn new(portrait: T, landscape: T) -> Self {
        Self {
            portrait,
            landscape,
        }
    }

    pub fn for_orientation(&self, orientation: Orientation) -> &T {
        match orientation {
            Orientation::Portrait => &self.portrait,
            Orientation::Landscape => &self.landscape,
        }
    }

    pub fn choose(&self, viewport: &Viewport) -> &T {
        self.for_orientation(viewport.orientation())
    }
}

impl<T: Copy> OrientationLayout<T> {
    pub fn pick(&self, viewport: &Viewport) -> T {
        *self.choose(viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_by_orientation() {
        let columns = OrientationLayout::new(2, 3);
        let portrait = Viewport::new(390.0, 844.0).unwrap();
        let landscape = Viewport::new(844.0, 390.0).unwrap();
        assert_eq!(columns.pick(&portrait), 2);
        assert_eq!(columns.pick(&landscape), 3);
    }

    #[test]
    fn test_reported_orientation_wins() {
        let labels = OrientationLayout::new("stacked", "side by side");
        let viewport = Viewport::with_orientation(500.0, 400.0, Orientation::Portrait).unwrap();
        assert_eq!(*labels.choose(&viewport), "stacked");
    }
}
