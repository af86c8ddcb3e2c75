//! Scoring module - points, level progression, gravity interval and combo feedback
//!
//! Everything here is a pure function of its arguments. The game state owns the
//! counters and calls into these after each lock.

use serde::Serialize;

use crate::types::{
    Rgb, BASE_TICK_MS, COMBO_ANCHOR, COMBO_DISPLAY_TICKS, LINES_PER_LEVEL, LINE_SCORES,
    MIN_TICK_MS, TICK_STEP_MS,
};

/// Points for clearing `lines` rows in one lock at `level`.
///
/// More than four simultaneous rows cannot happen with four-cell pieces and
/// scores nothing.
pub fn calculate_score(lines: usize, level: u32) -> u32 {
    LINE_SCORES
        .get(lines)
        .map_or(0, |&base| base.saturating_mul(level))
}

/// Level for a running total of cleared lines (starts at 1)
pub fn calculate_level(total_lines: u32) -> u32 {
    1 + total_lines / LINES_PER_LEVEL
}

/// Gravity interval a driver should wait between ticks at `level`, in milliseconds
pub fn tick_interval_ms(level: u32) -> u32 {
    let slowdown = level.saturating_sub(1).saturating_mul(TICK_STEP_MS);
    BASE_TICK_MS.saturating_sub(slowdown).max(MIN_TICK_MS)
}

/// Transient feedback shown after a multi-line clear.
///
/// Not gameplay state. The core creates it; whoever renders it decides how
/// often to count it down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ComboAnnotation {
    pub text: &'static str,
    pub color: Rgb,
    pub remaining_ticks: u32,
    /// Anchor in board cell coordinates
    pub position: (i8, i8),
}

impl ComboAnnotation {
    /// Count down one displayed frame. Returns false once the annotation has expired.
    pub fn decay(&mut self) -> bool {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        self.remaining_ticks > 0
    }
}

/// Annotation for a lock that cleared `lines` rows, if it earns one
pub fn combo_for(lines: usize) -> Option<ComboAnnotation> {
    let (text, color) = match lines {
        0 | 1 => return None,
        2 => ("x2", Rgb::YELLOW),
        3 => ("x3", Rgb::CYAN),
        _ => ("x4", Rgb::BRIGHT_RED),
    };

    Some(ComboAnnotation {
        text,
        color,
        remaining_ticks: COMBO_DISPLAY_TICKS,
        position: COMBO_ANCHOR,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores_scale_with_level() {
        assert_eq!(calculate_score(0, 7), 0);
        assert_eq!(calculate_score(1, 1), 40);
        assert_eq!(calculate_score(2, 1), 100);
        assert_eq!(calculate_score(3, 3), 900);
        assert_eq!(calculate_score(4, 5), 6000);
    }

    #[test]
    fn test_impossible_line_count_scores_nothing() {
        assert_eq!(calculate_score(5, 1), 0);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(calculate_level(0), 1);
        assert_eq!(calculate_level(9), 1);
        assert_eq!(calculate_level(10), 2);
        assert_eq!(calculate_level(19), 2);
        assert_eq!(calculate_level(20), 3);
        assert_eq!(calculate_level(29), 3);
    }

    #[test]
    fn test_tick_intervals() {
        assert_eq!(tick_interval_ms(1), 500);
        assert_eq!(tick_interval_ms(2), 480);
        assert_eq!(tick_interval_ms(10), 320);
        assert_eq!(tick_interval_ms(21), 100);
        assert_eq!(tick_interval_ms(22), 100);
        assert_eq!(tick_interval_ms(1000), 100);
    }

    #[test]
    fn test_combo_only_for_multi_line_clears() {
        assert_eq!(combo_for(0), None);
        assert_eq!(combo_for(1), None);

        let double = combo_for(2).unwrap();
        assert_eq!(double.text, "x2");
        assert_eq!(double.color, Rgb::YELLOW);
        assert_eq!(double.remaining_ticks, COMBO_DISPLAY_TICKS);
        assert_eq!(double.position, (5, 10));

        assert_eq!(combo_for(3).unwrap().color, Rgb::CYAN);
        assert_eq!(combo_for(4).unwrap().color, Rgb::BRIGHT_RED);
    }

    #[test]
    fn test_combo_decay_expires() {
        let mut combo = combo_for(2).unwrap();
        for _ in 0..COMBO_DISPLAY_TICKS - 1 {
            assert!(combo.decay());
        }
        assert!(!combo.decay());
        assert_eq!(combo.remaining_ticks, 0);
    }
}
