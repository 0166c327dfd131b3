//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, terminal handling, or real time.

pub mod board;
pub mod engine;
pub mod frame;
pub mod pieces;
pub mod rng;
pub mod scoring;

// Re-export commonly used types
pub use board::Board;
pub use engine::Engine;
pub use frame::{Frame, FrameCell};
pub use pieces::{spawn_shape, Piece, ShapeGrid, SPAWN_POSITION};
pub use rng::SimpleRng;
