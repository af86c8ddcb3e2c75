//! Scoring policy tests

use blocktris::core::{calculate_level, calculate_score, combo_for, tick_interval_ms};
use blocktris::types::{Rgb, COMBO_ANCHOR, COMBO_DISPLAY_TICKS};

#[test]
fn test_line_clear_points() {
    assert_eq!(calculate_score(1, 1), 40);
    assert_eq!(calculate_score(2, 1), 100);
    assert_eq!(calculate_score(3, 3), 900);
    assert_eq!(calculate_score(4, 5), 6000);
    assert_eq!(calculate_score(0, 9), 0);
}

#[test]
fn test_level_progression() {
    for (lines, level) in [(0, 1), (10, 2), (19, 2), (20, 3), (29, 3), (95, 10)] {
        assert_eq!(calculate_level(lines), level, "after {lines} lines");
    }
}

#[test]
fn test_tick_interval_shrinks_to_floor() {
    let mut previous = u32::MAX;
    for level in 1..=30 {
        let interval = tick_interval_ms(level);
        assert!(interval <= previous);
        assert!(interval >= 100);
        previous = interval;
    }
    assert_eq!(tick_interval_ms(1), 500);
    assert_eq!(tick_interval_ms(30), 100);
}

#[test]
fn test_combo_annotation_per_clear_size() {
    assert!(combo_for(1).is_none());

    let expected = [(2, "x2", Rgb::YELLOW), (3, "x3", Rgb::CYAN), (4, "x4", Rgb::BRIGHT_RED)];
    for (lines, text, color) in expected {
        let combo = combo_for(lines).unwrap();
        assert_eq!(combo.text, text);
        assert_eq!(combo.color, color);
        assert_eq!(combo.remaining_ticks, COMBO_DISPLAY_TICKS);
        assert_eq!(combo.position, COMBO_ANCHOR);
    }
}
