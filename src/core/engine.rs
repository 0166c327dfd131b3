//! Engine module - the falling-piece state machine
//!
//! Ties together board, pieces, RNG and scoring. The engine owns the
//! single active piece and the session counters; it never touches real
//! time. The host calls `tick` once per gravity step at the interval
//! `drop_interval_ms` reports, and forwards discrete input as actions.

use crate::core::frame::{Frame, FrameCell};
use crate::core::pieces::Piece;
use crate::core::rng::SimpleRng;
use crate::core::scoring::{calculate_level, calculate_line_score, get_drop_interval_ms};
use crate::core::Board;
use crate::types::{GameAction, Phase, BOARD_HEIGHT, BOARD_WIDTH};

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    active: Option<Piece>,
    rng: SimpleRng,
    score: u32,
    lines: u32,
    level: u32,
    phase: Phase,
    paused: bool,
}

impl Engine {
    /// Create an idle engine with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            rng: SimpleRng::new(seed),
            score: 0,
            lines: 0,
            level: 1,
            phase: Phase::Idle,
            paused: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current gravity interval based on level.
    /// The host re-reads this after every mutating call to schedule the
    /// next tick, so a level-up takes effect on the following step.
    pub fn drop_interval_ms(&self) -> u32 {
        get_drop_interval_ms(self.level)
    }

    /// Start a session, or restart one from game over (or mid-game).
    /// Board and counters reset; the RNG stream continues where it left
    /// off, so consecutive sessions see different piece sequences.
    pub fn start(&mut self) {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.paused = false;
        self.phase = Phase::Running;
        // The board is empty here, so the first spawn cannot collide.
        self.active = Some(Piece::spawn(self.rng.next_kind()));
    }

    /// One gravity step: descend the active piece by one row, or lock it
    /// when the row below is blocked. No-op unless running and unpaused.
    pub fn tick(&mut self) -> bool {
        if !self.accepts_gameplay() {
            return false;
        }
        self.descend_or_lock()
    }

    /// Gameplay mutations are accepted only mid-session and unpaused
    fn accepts_gameplay(&self) -> bool {
        self.phase == Phase::Running && !self.paused
    }

    fn descend_or_lock(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.shifted(0, 1);
        if moved.is_valid(&self.board) {
            self.active = Some(moved);
        } else {
            self.lock_active();
        }
        true
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        if !self.accepts_gameplay() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.shifted(dx, 0);
        if moved.is_valid(&self.board) {
            self.active = Some(moved);
            return true;
        }
        false
    }

    /// Move the active piece one column left
    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    /// Move the active piece one column right
    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    /// Rotate the active piece 90 degrees clockwise in place.
    /// Rejected when the rotated matrix collides at the current anchor;
    /// there is no wall kick search.
    pub fn rotate(&mut self) -> bool {
        if !self.accepts_gameplay() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.rotated();
        if rotated.is_valid(&self.board) {
            self.active = Some(rotated);
            return true;
        }
        false
    }

    /// One immediate downward step. When the piece is already resting it
    /// locks at once instead of waiting for the next gravity tick.
    pub fn soft_drop(&mut self) -> bool {
        if !self.accepts_gameplay() {
            return false;
        }
        self.descend_or_lock()
    }

    /// Drop the active piece straight down to its resting row and lock it
    pub fn hard_drop(&mut self) -> bool {
        if !self.accepts_gameplay() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let mut resting = active;
        loop {
            let next = resting.shifted(0, 1);
            if next.is_valid(&self.board) {
                resting = next;
            } else {
                break;
            }
        }

        self.active = Some(resting);
        self.lock_active();
        true
    }

    /// Toggle pause. Only meaningful mid-session; idle and game-over
    /// states ignore it.
    pub fn toggle_pause(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Lock the active piece: commit it to the board, clear full rows,
    /// tally score and level, then spawn the next piece.
    ///
    /// Scoring reads the level in effect before the clear is counted;
    /// the level is then recomputed from the updated line total so the
    /// tenth line is the one that reaches level 2.
    fn lock_active(&mut self) {
        let Some(active) = self.active else {
            return;
        };

        // A piece that is invalid where it stands means the stack has
        // reached the spawn area; the session ends without a commit.
        if !active.is_valid(&self.board) {
            self.end_session();
            return;
        }

        let committed = self.board.commit(&active);
        debug_assert!(committed, "validated piece must commit");
        self.active = None;

        let cleared = self.board.clear_full_rows().len();
        if cleared > 0 {
            self.score = self
                .score
                .saturating_add(calculate_line_score(cleared, self.level));
            self.lines += cleared as u32;
            self.level = calculate_level(self.lines);
        }

        let next = Piece::spawn(self.rng.next_kind());
        if next.is_valid(&self.board) {
            self.active = Some(next);
        } else {
            self.end_session();
        }
    }

    fn end_session(&mut self) {
        self.phase = Phase::GameOver;
        self.active = None;
    }

    /// Apply a game action.
    /// `Start` is honored in every phase; everything else is accepted
    /// only while running (movement additionally requires unpaused).
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Start => {
                self.start();
                true
            }
            GameAction::TogglePause => self.toggle_pause(),
        }
    }

    /// Write the render snapshot for the current state into `out`.
    /// Settled cells are reported without identity; active cells carry
    /// the piece kind so the renderer can color them.
    pub fn frame_into(&self, out: &mut Frame) {
        out.clear();

        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                if self.board.is_occupied(x, y) {
                    out.cells[y as usize][x as usize] = FrameCell::Locked;
                }
            }
        }

        if let Some(active) = self.active {
            for (dx, dy) in active.shape.offsets() {
                let x = active.x + dx;
                let y = active.y + dy;
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    out.cells[y as usize][x as usize] = FrameCell::Active(active.kind);
                }
            }
        }

        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.phase = self.phase;
        out.paused = self.paused;
    }

    /// Convenience helper that allocates a fresh frame
    pub fn frame(&self) -> Frame {
        let mut f = Frame::default();
        self.frame_into(&mut f);
        f
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(1)
    }
}
