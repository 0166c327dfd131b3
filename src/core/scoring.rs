//! Scoring module - line points, leveling and gravity speed
//!
//! One flat rule set: every cleared row is worth the same base points
//! multiplied by the level at the moment of the clear, the level rises
//! every ten cumulative lines, and each level shaves a fixed step off
//! the gravity interval down to a hard floor.

use crate::types::{BASE_DROP_MS, DROP_STEP_MS, LINES_PER_LEVEL, MIN_DROP_MS, POINTS_PER_LINE};

/// Calculate points for clearing `lines` rows at once.
/// level: 1-based level in effect before the clear is tallied
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    (lines as u32)
        .saturating_mul(POINTS_PER_LINE)
        .saturating_mul(level)
}

/// Level for a cumulative cleared-line count.
/// Starts at 1 and increases every LINES_PER_LEVEL lines, so the tenth
/// cleared line is the one that moves a session to level 2.
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Get the gravity drop interval for a level (in milliseconds).
/// Strictly decreasing per level until it reaches the floor.
pub fn get_drop_interval_ms(level: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(level.saturating_mul(DROP_STEP_MS))
        .max(MIN_DROP_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores_scale_with_level() {
        assert_eq!(calculate_line_score(1, 1), 100);
        assert_eq!(calculate_line_score(2, 1), 200);
        assert_eq!(calculate_line_score(4, 1), 400);

        assert_eq!(calculate_line_score(1, 3), 300);
        assert_eq!(calculate_line_score(4, 5), 2000);
    }

    #[test]
    fn test_zero_lines_score_nothing() {
        assert_eq!(calculate_line_score(0, 1), 0);
        assert_eq!(calculate_line_score(0, 9), 0);
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(calculate_level(0), 1);
        assert_eq!(calculate_level(9), 1);
        assert_eq!(calculate_level(10), 2);
        assert_eq!(calculate_level(19), 2);
        assert_eq!(calculate_level(20), 3);
        assert_eq!(calculate_level(100), 11);
    }

    #[test]
    fn test_drop_interval_curve() {
        assert_eq!(get_drop_interval_ms(1), 550);
        assert_eq!(get_drop_interval_ms(2), 500);
        assert_eq!(get_drop_interval_ms(9), 150);
        assert_eq!(get_drop_interval_ms(10), 100);
    }

    #[test]
    fn test_drop_interval_floor() {
        assert_eq!(get_drop_interval_ms(11), 100);
        assert_eq!(get_drop_interval_ms(500), 100);
        assert_eq!(get_drop_interval_ms(u32::MAX), 100);
    }

    #[test]
    fn test_drop_interval_monotonic() {
        let mut prev = get_drop_interval_ms(1);
        for level in 2..30 {
            let cur = get_drop_interval_ms(level);
            assert!(cur <= prev, "interval rose at level {}", level);
            prev = cur;
        }
    }
}
