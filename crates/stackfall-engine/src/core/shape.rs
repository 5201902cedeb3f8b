use serde::{Serialize, Serializer, ser::SerializeSeq as _};

/// Largest bounding box used by any catalog piece (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// Square occupancy matrix of a piece inside its bounding box.
///
/// Only the top-left `size × size` corner of `cells` is meaningful; the rest is
/// always empty. Shapes are created from the catalog and derived from it by
/// rotation, so every shape holds exactly four occupied cells.
///
/// Local coordinates are `(row, col)` with row 0 at the top of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Builds a shape from row strings where `#` marks an occupied cell.
    ///
    /// Every row must be exactly as long as the number of rows.
    #[expect(clippy::cast_possible_truncation)]
    pub(crate) const fn from_rows<const N: usize>(rows: [&str; N]) -> Self {
        assert!(N >= 1 && N <= MAX_SHAPE_SIZE);
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut r = 0;
        while r < N {
            let bytes = rows[r].as_bytes();
            assert!(bytes.len() == N, "shape rows must form a square");
            let mut c = 0;
            while c < N {
                cells[r][c] = bytes[c] == b'#';
                c += 1;
            }
            r += 1;
        }
        Self {
            size: N as u8,
            cells,
        }
    }

    /// Side length of the bounding box.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size as usize
    }

    /// Whether the local cell is occupied. Cells outside the box are empty.
    #[must_use]
    pub const fn is_occupied(&self, row: usize, col: usize) -> bool {
        row < self.size() && col < self.size() && self.cells[row][col]
    }

    /// Returns the shape turned 90° clockwise.
    ///
    /// The cell at `(row, col)` moves to `(col, size - 1 - row)`.
    #[must_use]
    pub const fn rotated_right(&self) -> Self {
        let size = self.size();
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut row = 0;
        while row < size {
            let mut col = 0;
            while col < size {
                cells[col][size - 1 - row] = self.cells[row][col];
                col += 1;
            }
            row += 1;
        }
        Self {
            size: self.size,
            cells,
        }
    }

    /// Iterates over the occupied local cells as `(row, col)`, row-major.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size();
        self.cells[..size].iter().enumerate().flat_map(move |(row, cells)| {
            cells[..size]
                .iter()
                .enumerate()
                .filter(|(_, occupied)| **occupied)
                .map(move |(col, _)| (row, col))
        })
    }
}

impl Serialize for Shape {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Format: ["....", "####", "....", "...."]
        let size = self.size();
        let mut seq = serializer.serialize_seq(Some(size))?;
        for row in &self.cells[..size] {
            let line: String = row[..size]
                .iter()
                .map(|&occupied| if occupied { '#' } else { '.' })
                .collect();
            seq.serialize_element(&line)?;
        }
        seq.end()
    }
}
