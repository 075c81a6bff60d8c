//! Compass headings for direction-aware movement.

use std::fmt;
use std::str::FromStr;

use crate::geom::Point;

/// One of the four cardinal directions a walker can face.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings, in clockwise order starting north.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Unit step in this direction (north is `-y`).
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Heading::North => Point::new(0, -1),
            Heading::East => Point::new(1, 0),
            Heading::South => Point::new(0, 1),
            Heading::West => Point::new(-1, 0),
        }
    }

    /// The two headings reachable with a single 90° turn.
    #[inline]
    pub const fn turns(self) -> [Heading; 2] {
        match self {
            Heading::North | Heading::South => [Heading::East, Heading::West],
            Heading::East | Heading::West => [Heading::North, Heading::South],
        }
    }

    #[inline]
    pub const fn reverse(self) -> Heading {
        match self {
            Heading::North => Heading::South,
            Heading::East => Heading::West,
            Heading::South => Heading::North,
            Heading::West => Heading::East,
        }
    }

    /// Position in [`ALL`](Self::ALL); used to index per-heading tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Heading::North => "north",
            Heading::East => "east",
            Heading::South => "south",
            Heading::West => "west",
        };
        f.write_str(s)
    }
}

/// Error returned when a heading name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHeadingError(pub String);

impl fmt::Display for ParseHeadingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown heading \u{201c}{}\u{201d} (expected north, east, south or west)",
            self.0
        )
    }
}

impl std::error::Error for ParseHeadingError {}

impl FromStr for Heading {
    type Err = ParseHeadingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "north" | "up" => Ok(Heading::North),
            "e" | "east" | "right" => Ok(Heading::East),
            "s" | "south" | "down" => Ok(Heading::South),
            "w" | "west" | "left" => Ok(Heading::West),
            _ => Err(ParseHeadingError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_are_perpendicular() {
        for h in Heading::ALL {
            for t in h.turns() {
                let (a, b) = (h.delta(), t.delta());
                assert_eq!(a.x * b.x + a.y * b.y, 0, "{h} -> {t}");
            }
        }
    }

    #[test]
    fn reverse_cancels_delta() {
        for h in Heading::ALL {
            assert_eq!(h.delta() + h.reverse().delta(), Point::ZERO);
            assert_eq!(h.reverse().reverse(), h);
        }
    }

    #[test]
    fn index_matches_all_order() {
        for (i, h) in Heading::ALL.iter().enumerate() {
            assert_eq!(h.index(), i);
        }
    }

    #[test]
    fn parse_names_and_aliases() {
        assert_eq!("east".parse::<Heading>(), Ok(Heading::East));
        assert_eq!("N".parse::<Heading>(), Ok(Heading::North));
        assert_eq!("down".parse::<Heading>(), Ok(Heading::South));
        assert!("sideways".parse::<Heading>().is_err());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn heading_serializes_lowercase() {
        let json = serde_json::to_string(&Heading::West).unwrap();
        assert_eq!(json, "\"west\"");
        let back: Heading = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Heading::West);
    }
}
