//! Blockfall: a terminal falling-block puzzle.
//!
//! The crate splits into a deterministic engine and a thin host shell:
//!
//! - [`core`] owns the board, pieces, and session state machine. It never
//!   reads the clock or the keyboard; the host drives it through
//!   [`core::Engine::tick`] and [`core::Engine::apply_action`].
//! - [`input`] maps terminal key events to [`types::GameAction`] values.
//! - [`term`] renders [`core::Frame`] snapshots to the terminal.
//!
//! The binary in `main.rs` wires the three together with a gravity deadline
//! loop. Everything under [`core`] is plain state transitions, so tests can
//! run entire sessions without a terminal or a timer.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
