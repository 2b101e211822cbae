//! Environment geometry supplied to the simulation each tick.

use std::borrow::Cow;

use crate::core::Wall;

/// Source of wall segments, queried once per tick.
///
/// The returned snapshot feeds both collision checks and the range sensor
/// for that tick. Static and moving walls are not distinguished.
pub trait WallSource {
    /// Current wall set
    fn walls(&self) -> Cow<'_, [Wall]>;
}

impl WallSource for [Wall] {
    fn walls(&self) -> Cow<'_, [Wall]> {
        Cow::Borrowed(self)
    }
}

impl WallSource for Vec<Wall> {
    fn walls(&self) -> Cow<'_, [Wall]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<T: WallSource + ?Sized> WallSource for &T {
    fn walls(&self) -> Cow<'_, [Wall]> {
        (**self).walls()
    }
}

/// Two sources concatenated, e.g. static room walls plus moving obstacles.
impl<A: WallSource, B: WallSource> WallSource for (A, B) {
    fn walls(&self) -> Cow<'_, [Wall]> {
        let first = self.0.walls();
        let second = self.1.walls();
        if second.is_empty() {
            return first;
        }
        if first.is_empty() {
            return second;
        }
        let mut all = first.into_owned();
        all.extend_from_slice(&second);
        Cow::Owned(all)
    }
}

/// Axis-aligned rectangle outline, corners `(x0, y0)` and `(x1, y1)`.
pub fn rectangle(x0: f32, y0: f32, x1: f32, y1: f32) -> Vec<Wall> {
    vec![
        Wall::from_coords(x0, y0, x1, y0),
        Wall::from_coords(x1, y0, x1, y1),
        Wall::from_coords(x1, y1, x0, y1),
        Wall::from_coords(x0, y1, x0, y0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_source_borrows() {
        let walls = rectangle(0.0, 0.0, 10.0, 10.0);
        assert!(matches!(walls.walls(), Cow::Borrowed(_)));
        assert_eq!(walls.walls().len(), 4);
    }

    #[test]
    fn test_pair_concatenates() {
        let room = rectangle(0.0, 0.0, 100.0, 100.0);
        let obstacle = vec![Wall::from_coords(40.0, 40.0, 60.0, 40.0)];
        let source = (room.clone(), obstacle);

        let all = source.walls();
        assert_eq!(all.len(), 5);
        assert_eq!(all[4], Wall::from_coords(40.0, 40.0, 60.0, 40.0));

        let only_room = (room, Vec::new());
        assert!(matches!(only_room.walls(), Cow::Borrowed(_)));
    }
}
