//! **maze-core** - core types for grid mazes.
//!
//! This crate provides the foundational types shared by the *mazerun*
//! workspace: geometry primitives, compass headings, board tiles, the text
//! board loader and the obstacle-list parser.

pub mod board;
pub mod error;
pub mod geom;
pub mod heading;
pub mod points;
pub mod tile;

pub use board::{Board, ROUTE_CHAR};
pub use error::MalformedInputError;
pub use geom::{Point, Range};
pub use heading::{Heading, ParseHeadingError};
pub use points::parse_points;
pub use tile::Tile;
