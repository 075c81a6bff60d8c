//! The [`Board`] type - a rectangular maze with start and end markers.
//!
//! Boards are read from text: one row per line, `#` for walls, `S` and `E`
//! for the start and end tiles, anything else for open terrain. The board
//! owns only terrain; search annotations live in the pathfinding caches.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::MalformedInputError;
use crate::geom::{Point, Range};
use crate::tile::Tile;

/// Character used by [`Board::render_route`] for route tiles.
pub const ROUTE_CHAR: char = 'O';

/// A rectangular maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
    bounds: Range,
    start: Point,
    end: Point,
}

impl Board {
    /// Parse a board from its text form.
    ///
    /// Every row must have the same width. Trailing blank lines are
    /// ignored; a blank line between rows counts as a zero-width row.
    pub fn parse(text: &str) -> Result<Self, MalformedInputError> {
        let mut lines: Vec<&str> = text.lines().collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        if lines.is_empty() {
            return Err(MalformedInputError::Empty);
        }

        let width = lines[0].chars().count();
        let mut tiles = Vec::with_capacity(width * lines.len());
        let mut start: Option<Point> = None;
        let mut end: Option<Point> = None;

        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MalformedInputError::InconsistentWidth {
                    line: y + 1,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match ch {
                    Tile::START => set_marker(&mut start, Tile::START, p)?,
                    Tile::END => set_marker(&mut end, Tile::END, p)?,
                    _ => {}
                }
                tiles.push(Tile::from_char(ch));
            }
        }

        let start = start.ok_or(MalformedInputError::MissingStart)?;
        let end = end.ok_or(MalformedInputError::MissingEnd)?;
        let bounds = Range::new(0, 0, width as i32, lines.len() as i32);
        let board = Self {
            tiles,
            bounds,
            start,
            end,
        };
        debug!(
            "parsed {}x{} board, start {} end {}, {} walls",
            bounds.width(),
            bounds.height(),
            start,
            end,
            board.walls().count()
        );
        Ok(board)
    }

    /// Create a wall-free board with the start in the top-left corner and the
    /// end in the bottom-right corner.
    pub fn open(width: i32, height: i32) -> Self {
        let w = width.max(1);
        let h = height.max(1);
        let bounds = Range::new(0, 0, w, h);
        Self {
            tiles: vec![Tile::Open; bounds.len()],
            bounds,
            start: Point::ZERO,
            end: Point::new(w - 1, h - 1),
        }
    }

    /// The board rectangle, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the board as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Whether `p` is inside the board.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The tile at `p`, or `None` outside the board.
    #[inline]
    pub fn tile(&self, p: Point) -> Option<Tile> {
        self.bounds.index(p).map(|i| self.tiles[i])
    }

    /// Whether `p` is in bounds and not a wall.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.tile(p) == Some(Tile::Open)
    }

    /// Turn the open tile at `p` into a wall.
    ///
    /// Returns `false` (and changes nothing) when `p` is outside the board or
    /// already a wall.
    pub fn block(&mut self, p: Point) -> bool {
        match self.bounds.index(p) {
            Some(i) if self.tiles[i] == Tile::Open => {
                self.tiles[i] = Tile::Wall;
                true
            }
            _ => false,
        }
    }

    /// Row-major iterator over `(Point, Tile)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds.iter().zip(self.tiles.iter().copied())
    }

    /// Positions of every wall tile, row-major.
    pub fn walls(&self) -> impl Iterator<Item = Point> + '_ {
        self.iter().filter(|(_, t)| t.is_wall()).map(|(p, _)| p)
    }

    /// Render the board with `route` tiles drawn as [`ROUTE_CHAR`].
    ///
    /// Start and end markers take precedence over the route.
    pub fn render_route(&self, route: &[Point]) -> String {
        let mut on_route = vec![false; self.tiles.len()];
        for &p in route {
            if let Some(i) = self.bounds.index(p) {
                on_route[i] = true;
            }
        }
        self.render(|i| on_route[i])
    }

    fn render(&self, highlight: impl Fn(usize) -> bool) -> String {
        let w = self.bounds.width() as usize;
        let mut s = String::with_capacity(self.tiles.len() + self.bounds.height() as usize);
        for (i, (p, tile)) in self.iter().enumerate() {
            let ch = if p == self.start {
                Tile::START
            } else if p == self.end {
                Tile::END
            } else if highlight(i) {
                ROUTE_CHAR
            } else {
                tile.to_char()
            };
            s.push(ch);
            if (i + 1) % w == 0 {
                s.push('\n');
            }
        }
        s
    }
}

fn set_marker(slot: &mut Option<Point>, marker: char, p: Point) -> Result<(), MalformedInputError> {
    match *slot {
        Some(first) => Err(MalformedInputError::DuplicateMarker {
            marker,
            first,
            second: p,
        }),
        None => {
            *slot = Some(p);
            Ok(())
        }
    }
}

impl FromStr for Board {
    type Err = MalformedInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(|_| false))
    }
}
