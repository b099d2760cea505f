//! The eight straight-line directions a word can run in

/// Cell coordinates as `[x, y]`, both in `0..size`
pub type Position = [usize; 2];

/// Unit step between consecutive letters of a placed word
///
/// Each component is -1, 0 or 1 and at least one is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    /// Column step
    pub dx: isize,
    /// Row step
    pub dy: isize,
}

impl Direction {
    /// All eight directions in scan order (`dx` outer, `dy` inner)
    pub const ALL: [Self; 8] = [
        Self { dx: -1, dy: -1 },
        Self { dx: -1, dy: 0 },
        Self { dx: -1, dy: 1 },
        Self { dx: 0, dy: -1 },
        Self { dx: 0, dy: 1 },
        Self { dx: 1, dy: -1 },
        Self { dx: 1, dy: 0 },
        Self { dx: 1, dy: 1 },
    ];

    /// Build a direction from a step vector, rejecting anything that is not a unit step
    pub const fn new(dx: isize, dy: isize) -> Option<Self> {
        let in_range = dx >= -1 && dx <= 1 && dy >= -1 && dy <= 1;
        if in_range && !(dx == 0 && dy == 0) {
            Some(Self { dx, dy })
        } else {
            None
        }
    }

    /// The direction pointing the opposite way
    pub const fn reversed(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }

    /// Position `steps` cells away from `origin`, or `None` if it falls below zero
    ///
    /// The upper bound is the grid's concern.
    pub const fn step_from(self, origin: Position, steps: usize) -> Option<Position> {
        let x = origin[0] as isize + self.dx * steps as isize;
        let y = origin[1] as isize + self.dy * steps as isize;
        if x < 0 || y < 0 {
            None
        } else {
            Some([x as usize, y as usize])
        }
    }
}
