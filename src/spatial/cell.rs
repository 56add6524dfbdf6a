//! Cell state: pipe orientations, candidate option sets, and read-only views
//!
//! Every cell of the board holds a set of candidate orientations. Collapse and
//! propagation only ever remove candidates; a cell with a single remaining
//! candidate is decided and keeps that orientation for the rest of the run.

use bitvec::vec::BitVec;
use std::fmt;

/// A pipe-segment orientation, or the absence of a pipe
///
/// A non-empty orientation is a T-junction named after the direction its stem
/// points: it occupies every edge of its cell except the edge opposite the
/// stem. `Empty` occupies no edge at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// No pipe in the cell
    Empty,
    /// T-junction with the stem pointing north
    North,
    /// T-junction with the stem pointing east
    East,
    /// T-junction with the stem pointing south
    South,
    /// T-junction with the stem pointing west
    West,
}

impl Orientation {
    /// Number of distinct orientations
    pub const COUNT: usize = 5;

    /// Every orientation, in option-set bit order
    pub const ALL: [Self; Self::COUNT] =
        [Self::Empty, Self::North, Self::East, Self::South, Self::West];

    /// Bit position of this orientation within an option set
    pub const fn bit(self) -> usize {
        match self {
            Self::Empty => 0,
            Self::North => 1,
            Self::East => 2,
            Self::South => 3,
            Self::West => 4,
        }
    }

    /// Inverse of [`Orientation::bit`]
    pub const fn from_bit(bit: usize) -> Option<Self> {
        match bit {
            0 => Some(Self::Empty),
            1 => Some(Self::North),
            2 => Some(Self::East),
            3 => Some(Self::South),
            4 => Some(Self::West),
            _ => None,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        write!(f, "{name}")
    }
}

/// Fixed-size bitset of candidate orientations
///
/// Membership testing and intersection are the hot operations during
/// propagation. The set only ever shrinks while a cascade is running;
/// [`OptionSet::full`] is used when the whole board is reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionSet {
    bits: BitVec,
}

impl OptionSet {
    /// Create a set containing every orientation
    pub fn full() -> Self {
        Self {
            bits: BitVec::repeat(true, Orientation::COUNT),
        }
    }

    /// Create a set containing no orientation
    pub fn none() -> Self {
        Self {
            bits: BitVec::repeat(false, Orientation::COUNT),
        }
    }

    /// Create a set from explicit members
    pub fn from_slice(orientations: &[Orientation]) -> Self {
        let mut set = Self::none();
        for &orientation in orientations {
            set.insert(orientation);
        }
        set
    }

    /// Add an orientation to the set
    pub fn insert(&mut self, orientation: Orientation) {
        self.bits.set(orientation.bit(), true);
    }

    /// Test orientation membership
    pub fn contains(&self, orientation: Orientation) -> bool {
        self.bits.get(orientation.bit()).as_deref() == Some(&true)
    }

    /// Intersect this set with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new set containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Test if no orientation remains
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count the remaining orientations
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// The single remaining orientation, if the set is decided
    pub fn sole(&self) -> Option<Orientation> {
        if self.len() == 1 {
            self.bits.first_one().and_then(Orientation::from_bit)
        } else {
            None
        }
    }

    /// Extract the members as a vector in bit order
    pub fn to_vec(&self) -> Vec<Orientation> {
        self.bits
            .iter_ones()
            .filter_map(Orientation::from_bit)
            .collect()
    }
}

impl fmt::Display for OptionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OptionSet({} options: {:?})", self.len(), self.to_vec())
    }
}

/// A single board cell: immutable identity plus shrinking candidate set
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    id: usize,
    options: OptionSet,
}

impl Cell {
    /// Create a cell with the full candidate set
    pub fn new(id: usize) -> Self {
        Self {
            id,
            options: OptionSet::full(),
        }
    }

    /// Linear board index of this cell
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Remaining candidate orientations
    pub const fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Replace the candidate set wholesale
    pub fn set_options(&mut self, options: OptionSet) {
        self.options = options;
    }

    /// Narrow the candidate set to its intersection with `allowed`
    pub fn narrow(&mut self, allowed: &OptionSet) {
        self.options.intersect_with(allowed);
    }

    /// Count of remaining candidates (1 = decided, 0 = contradiction)
    pub fn entropy(&self) -> usize {
        self.options.len()
    }

    /// A cell is decided once a single candidate remains
    pub fn is_decided(&self) -> bool {
        self.entropy() == 1
    }

    /// The decided orientation, if any
    pub fn decided_type(&self) -> Option<Orientation> {
        self.options.sole()
    }

    /// Restore the full candidate set
    pub fn reset(&mut self) {
        self.options = OptionSet::full();
    }

    /// Snapshot the cell for read-only consumers
    pub fn view(&self) -> CellView {
        CellView {
            id: self.id,
            options: self.options.to_vec(),
            is_decided: self.is_decided(),
            decided_type: self.decided_type(),
        }
    }
}

/// Read-only snapshot of a cell handed to rendering and input layers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    /// Linear board index
    pub id: usize,
    /// Remaining candidate orientations at snapshot time
    pub options: Vec<Orientation>,
    /// Whether a single candidate remains
    pub is_decided: bool,
    /// The decided orientation, when `is_decided`
    pub decided_type: Option<Orientation>,
}
