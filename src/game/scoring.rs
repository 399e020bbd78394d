// game/scoring.rs

use crate::graph::{ColorGraph, MAX_COLORS};
use std::fmt;

/// Points awarded for clearing any level
pub const BASE_SCORE: i64 = 100;

/// Bonus per palette color left unused
const UNUSED_COLOR_BONUS: i64 = 50;

/// Extra bonus for hitting the level's target color count
const OPTIMAL_BONUS: i64 = 100;

/// Points lost per coloring move
const MOVE_PENALTY: i64 = 2;

/// Target color count per level; levels past the table use [`DEFAULT_OPTIMAL_COLORS`]
const OPTIMAL_COLORS: &[usize] = &[2, 3];

const DEFAULT_OPTIMAL_COLORS: usize = 3;

/// The color count that earns the optimal bonus on `level`
pub fn optimal_colors(level: usize) -> usize {
    OPTIMAL_COLORS
        .get(level)
        .copied()
        .unwrap_or(DEFAULT_OPTIMAL_COLORS)
}

/// How a level's score delta was assembled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub colors_used: usize,
    pub optimal_colors: usize,
    pub base: i64,
    pub color_bonus: i64,
    pub penalty: i64,
}

impl ScoreBreakdown {
    pub fn delta(&self) -> i64 {
        self.base + self.color_bonus - self.penalty
    }

    pub fn is_optimal(&self) -> bool {
        self.colors_used == self.optimal_colors
    }
}

impl fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "base {} + color bonus {} ({} colors, optimal {}) - penalty {} = {}",
            self.base,
            self.color_bonus,
            self.colors_used,
            self.optimal_colors,
            self.penalty,
            self.delta()
        )
    }
}

/// Score a solved level
///
/// `move_count` is the session-wide move total, not the moves spent on this level.
pub fn compute_level_score(graph: &ColorGraph, move_count: u32, level: usize) -> ScoreBreakdown {
    let colors_used = graph.colors_used().len();
    let optimal = optimal_colors(level);

    let mut color_bonus = UNUSED_COLOR_BONUS * (MAX_COLORS as i64 - colors_used as i64);
    if colors_used == optimal {
        color_bonus += OPTIMAL_BONUS;
    }

    ScoreBreakdown {
        colors_used,
        optimal_colors: optimal,
        base: BASE_SCORE,
        color_bonus,
        penalty: MOVE_PENALTY * i64::from(move_count),
    }
}

/// Add a delta to the running total, never dropping below zero
pub fn apply_delta(total: u32, delta: i64) -> u32 {
    let next = (i64::from(total) + delta).max(0);
    u32::try_from(next).unwrap_or(u32::MAX)
}
