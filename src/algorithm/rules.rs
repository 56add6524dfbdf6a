//! Adjacency compatibility between pipe orientations
//!
//! Two adjacent cells agree when the edge they share is either connected on
//! both sides or free on both sides. Each non-empty orientation is a
//! T-junction occupying every edge of its cell except the one opposite its
//! stem, so the whole compatibility table follows from edge occupancy alone.
//! Role-swap symmetry (if X permits Y as its northern neighbor, Y permits X
//! as its southern neighbor) holds by construction.

use crate::spatial::{Direction, OptionSet, Orientation};

/// Whether a decided orientation occupies the given edge of its cell
pub const fn occupies_edge(orientation: Orientation, edge: Direction) -> bool {
    match orientation {
        Orientation::Empty => false,
        Orientation::North => !matches!(edge, Direction::South),
        Orientation::East => !matches!(edge, Direction::West),
        Orientation::South => !matches!(edge, Direction::North),
        Orientation::West => !matches!(edge, Direction::East),
    }
}

/// Whether `candidate` may sit in the `direction` neighbor of a cell decided
/// to `collapsed`
///
/// The shared edge is `direction` as seen from the collapsed cell and
/// `direction.opposite()` as seen from the candidate.
pub const fn compatible(
    collapsed: Orientation,
    direction: Direction,
    candidate: Orientation,
) -> bool {
    occupies_edge(collapsed, direction) == occupies_edge(candidate, direction.opposite())
}

/// Orientations still admissible in the `direction` neighbor of a cell
/// decided to `collapsed`
///
/// Propagation intersects each neighbor's candidate set with this set.
pub fn allowed_neighbors(collapsed: Orientation, direction: Direction) -> OptionSet {
    let mut allowed = OptionSet::none();
    for candidate in Orientation::ALL {
        if compatible(collapsed, direction, candidate) {
            allowed.insert(candidate);
        }
    }
    allowed
}
