//! The [`Tile`] type - one cell of a board.

/// Terrain of a single board cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Open,
    Wall,
}

impl Tile {
    /// Character used for walls in board text.
    pub const WALL: char = '#';
    /// Character used when rendering open terrain.
    pub const OPEN: char = '.';
    /// Start marker.
    pub const START: char = 'S';
    /// End marker.
    pub const END: char = 'E';

    /// Classify an input character. Markers and unknown characters are open.
    #[inline]
    pub const fn from_char(ch: char) -> Self {
        if ch == Self::WALL { Tile::Wall } else { Tile::Open }
    }

    #[inline]
    pub const fn is_wall(self) -> bool {
        matches!(self, Tile::Wall)
    }

    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Tile::Open => Self::OPEN,
            Tile::Wall => Self::WALL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_chars() {
        assert_eq!(Tile::from_char('#'), Tile::Wall);
        assert_eq!(Tile::from_char('.'), Tile::Open);
        assert_eq!(Tile::from_char('S'), Tile::Open);
        assert_eq!(Tile::from_char('~'), Tile::Open);
        assert_eq!(Tile::default(), Tile::Open);
    }
}
