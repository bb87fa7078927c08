/*
 *  A falling-polyomino puzzle engine: the shape catalog and the game rules.
 */

pub mod board;
pub mod consts;
pub mod coords;
pub mod engine;
pub mod notation;
pub mod piece;
pub mod polyomino;
pub mod selector;
pub mod shape;

pub mod prelude {
    pub(crate) use crate::utils::prelude::*;

    pub use super::{
        board::{Board, CellTag, Color},
        consts::*,
        coords::{self, *},
        engine::{Game, GameConfig, LockReport, MoveOutcome},
        notation::*,
        piece::Piece,
        polyomino::{Catalog, RawShapes},
        selector::PieceSelector,
        shape::{RotationCycle, Shape}
    };
}
