use crate::types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Display state of one board cell.
/// Settled cells are anonymous; only active cells carry a piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameCell {
    Empty,
    Locked,
    Active(PieceKind),
}

/// Render snapshot of one engine state, written by `Engine::frame_into`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame {
    pub cells: [[FrameCell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub phase: Phase,
    pub paused: bool,
}

impl Frame {
    pub fn clear(&mut self) {
        self.cells = [[FrameCell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.phase = Phase::Idle;
        self.paused = false;
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Running && !self.paused
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            cells: [[FrameCell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            score: 0,
            lines: 0,
            level: 1,
            phase: Phase::Idle,
            paused: false,
        }
    }
}
