use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

use super::shape::Shape;

/// Enum representing the type of piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// O-piece.
    O = 1,
    /// T-piece.
    T = 2,
    /// S-piece.
    S = 3,
    /// Z-piece.
    Z = 4,
    /// J-piece.
    J = 5,
    /// L-piece.
    L = 6,
}

/// Color of a catalog piece; the only values a filled board cell can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

impl PieceColor {
    /// Catalog piece painted with this color.
    #[must_use]
    pub const fn piece_kind(self) -> PieceKind {
        match self {
            PieceColor::Cyan => PieceKind::I,
            PieceColor::Yellow => PieceKind::O,
            PieceColor::Purple => PieceKind::T,
            PieceColor::Green => PieceKind::S,
            PieceColor::Red => PieceKind::Z,
            PieceColor::Blue => PieceKind::J,
            PieceColor::Orange => PieceKind::L,
        }
    }
}

/// Immutable catalog entry: spawn orientation and color of one piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDefinition {
    pub shape: Shape,
    pub color: PieceColor,
}

static CATALOG: [PieceDefinition; PieceKind::LEN] = [
    // I-piece
    PieceDefinition {
        shape: Shape::from_rows(["....", "####", "....", "...."]),
        color: PieceColor::Cyan,
    },
    // O-piece
    PieceDefinition {
        shape: Shape::from_rows(["##", "##"]),
        color: PieceColor::Yellow,
    },
    // T-piece
    PieceDefinition {
        shape: Shape::from_rows([".#.", "###", "..."]),
        color: PieceColor::Purple,
    },
    // S-piece
    PieceDefinition {
        shape: Shape::from_rows([".##", "##.", "..."]),
        color: PieceColor::Green,
    },
    // Z-piece
    PieceDefinition {
        shape: Shape::from_rows(["##.", ".##", "..."]),
        color: PieceColor::Red,
    },
    // J-piece
    PieceDefinition {
        shape: Shape::from_rows(["#..", "###", "..."]),
        color: PieceColor::Blue,
    },
    // L-piece
    PieceDefinition {
        shape: Shape::from_rows(["..#", "###", "..."]),
        color: PieceColor::Orange,
    },
];

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::LEN)]
    }
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    pub const ALL: [PieceKind; PieceKind::LEN] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Returns the catalog entry of this kind.
    #[must_use]
    pub fn definition(self) -> &'static PieceDefinition {
        &CATALOG[self as usize]
    }

    /// Spawn orientation of this kind.
    #[must_use]
    pub fn shape(self) -> Shape {
        self.definition().shape
    }

    #[must_use]
    pub fn color(self) -> PieceColor {
        self.definition().color
    }

    /// Whether rotation leaves this kind unchanged.
    #[must_use]
    pub const fn is_rotation_invariant(self) -> bool {
        matches!(self, PieceKind::O)
    }

    /// Returns the single character representation of this piece kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use stackfall_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_char(), 'I');
    /// assert_eq!(PieceKind::T.as_char(), 'T');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }

    /// Parses a piece kind from a single character.
    ///
    /// # Examples
    ///
    /// ```
    /// use stackfall_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('I'), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_char('X'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            _ => None,
        }
    }
}
