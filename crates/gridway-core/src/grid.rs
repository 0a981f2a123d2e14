//! The input obstacle map: [`Cell`] kinds and [`GridMap`].

use std::fmt;

use crate::Point;

/// What a single grid cell contains.
///
/// Interchangeable with the external integer codes `{0, 1, 2, 3}` via
/// [`Cell::from_code`] and [`Cell::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Free,
    Wall,
    Start,
    End,
}

impl Cell {
    /// Decode an external integer code. Returns `None` for unknown codes.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Free),
            1 => Some(Self::Wall),
            2 => Some(Self::Start),
            3 => Some(Self::End),
            _ => None,
        }
    }

    /// The external integer code for this cell kind.
    pub const fn code(self) -> i32 {
        match self {
            Self::Free => 0,
            Self::Wall => 1,
            Self::Start => 2,
            Self::End => 3,
        }
    }
}

/// Errors building a [`GridMap`] from external input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A code outside `{0, 1, 2, 3}` was encountered.
    InvalidCellCode { pos: Point, code: i32 },
    /// The flat code slice does not hold `size * size` entries.
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCellCode { pos, code } => {
                write!(f, "invalid cell code {code} at {pos}")
            }
            Self::SizeMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A square N×N grid of [`Cell`] values, row-major.
///
/// The grid is plain owned data: one search invocation owns one `GridMap`
/// (or a shared reference to it) and all derived search state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridMap {
    size: i32,
    cells: Vec<Cell>,
}

impl GridMap {
    /// Create a new grid of side `size` filled with [`Cell::Free`].
    pub fn new(size: i32) -> Self {
        let n = (size.max(0) as usize).pow(2);
        Self {
            size: size.max(0),
            cells: vec![Cell::Free; n],
        }
    }

    /// Build a grid from a flat row-major slice of external integer codes.
    pub fn from_codes(size: i32, codes: &[i32]) -> Result<Self, GridError> {
        let expected = (size.max(0) as usize).pow(2);
        if codes.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                actual: codes.len(),
            });
        }
        let mut grid = Self::new(size);
        for (i, &code) in codes.iter().enumerate() {
            let pos = grid.point(i);
            grid.cells[i] = Cell::from_code(code).ok_or(GridError::InvalidCellCode { pos, code })?;
        }
        Ok(grid)
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.size && p.y >= 0 && p.y < self.size
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[(p.y * self.size + p.x) as usize])
    }

    /// Set the cell at `p`. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if !self.contains(p) {
            return;
        }
        self.cells[(p.y * self.size + p.x) as usize] = cell;
    }

    /// Whether the cell at `p` is a wall. Out-of-bounds points are not walls.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.at(p) == Some(Cell::Wall)
    }

    /// Position of the unique [`Cell::Start`], or `None` if absent.
    pub fn start(&self) -> Option<Point> {
        self.find(Cell::Start)
    }

    /// Position of the unique [`Cell::End`], or `None` if absent.
    pub fn end(&self) -> Option<Point> {
        self.find(Cell::End)
    }

    fn find(&self, kind: Cell) -> Option<Point> {
        self.cells
            .iter()
            .position(|&c| c == kind)
            .map(|i| self.point(i))
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(i, &c)| (self.point(i), c))
    }

    /// The grid as a flat row-major vector of external integer codes.
    pub fn to_codes(&self) -> Vec<i32> {
        self.cells.iter().map(|c| c.code()).collect()
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        Point::new(idx as i32 % self.size, idx as i32 / self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_code_round_trip() {
        for code in 0..4 {
            let cell = Cell::from_code(code).unwrap();
            assert_eq!(cell.code(), code);
        }
        assert_eq!(Cell::from_code(4), None);
        assert_eq!(Cell::from_code(-1), None);
    }

    #[test]
    fn from_codes_and_lookup() {
        let grid = GridMap::from_codes(3, &[2, 0, 0, 0, 1, 0, 0, 0, 3]).unwrap();
        assert_eq!(grid.at(Point::new(0, 0)), Some(Cell::Start));
        assert_eq!(grid.at(Point::new(1, 1)), Some(Cell::Wall));
        assert_eq!(grid.at(Point::new(2, 2)), Some(Cell::End));
        assert_eq!(grid.at(Point::new(3, 0)), None);
        assert_eq!(grid.start(), Some(Point::new(0, 0)));
        assert_eq!(grid.end(), Some(Point::new(2, 2)));
    }

    #[test]
    fn from_codes_rejects_bad_input() {
        assert_eq!(
            GridMap::from_codes(2, &[0, 0, 0]),
            Err(GridError::SizeMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            GridMap::from_codes(2, &[0, 0, 7, 0]),
            Err(GridError::InvalidCellCode {
                pos: Point::new(0, 1),
                code: 7
            })
        );
    }

    #[test]
    fn set_and_wall_query() {
        let mut grid = GridMap::new(4);
        let p = Point::new(2, 3);
        grid.set(p, Cell::Wall);
        assert!(grid.is_wall(p));
        assert!(!grid.is_wall(Point::new(0, 0)));
        // Out of bounds is never a wall.
        assert!(!grid.is_wall(Point::new(-1, 0)));
    }

    #[test]
    fn codes_echo_matches_input() {
        let codes = vec![2, 0, 0, 1, 0, 1, 0, 0, 3];
        let grid = GridMap::from_codes(3, &codes).unwrap();
        assert_eq!(grid.to_codes(), codes);
    }

    #[test]
    fn missing_markers_report_none() {
        let grid = GridMap::new(3);
        assert_eq!(grid.start(), None);
        assert_eq!(grid.end(), None);
    }
}
