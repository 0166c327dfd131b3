//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids ratatui widgets/layout and instead renders into a
//! simple screen buffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Provide a rendering pipeline that feels closer to a game renderer
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod game_view;
pub mod renderer;
pub mod screen;

pub use game_view::{piece_color, GameView, Viewport};
pub use renderer::TerminalRenderer;
pub use screen::{Glyph, GlyphStyle, Rgb, ScreenBuffer};
