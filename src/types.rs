//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity timing (milliseconds): the drop interval shrinks by a fixed
/// step per level and never goes below the floor.
pub const BASE_DROP_MS: u32 = 600;
pub const DROP_STEP_MS: u32 = 50;
pub const MIN_DROP_MS: u32 = 100;

/// Scoring and leveling
pub const POINTS_PER_LINE: u32 = 100;
pub const LINES_PER_LEVEL: u32 = 10;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All seven kinds, in spawn-table order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];
}

/// Session lifecycle phase
///
/// `Idle` is the state before the first start; `GameOver` is terminal until
/// the next start. Pause is a separate flag, not a phase: a paused session
/// is still `Running` and resumes where it left off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    Running,
    GameOver,
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    HardDrop,
    Start,
    TogglePause,
}
