//! Scoring module - score, streak, and best-score accounting

use bevy::prelude::*;

use crate::constants::STREAK_FIRE;

/// Session scoreboard. Read-only to presentation; only the shot
/// lifecycle systems mutate it, through the record_* methods.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct ScoreBoard {
    score: u32,
    streak: u32,
    best_score: u32,
    shots_taken: u32,
}

impl ScoreBoard {
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Consecutive scores since the last miss
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Highest score seen this session; never decreases
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn shots_taken(&self) -> u32 {
        self.shots_taken
    }

    pub fn on_fire(&self) -> bool {
        self.streak >= STREAK_FIRE
    }

    pub(crate) fn record_launch(&mut self) {
        self.shots_taken += 1;
    }

    pub(crate) fn record_score(&mut self) {
        self.score += 1;
        self.streak += 1;
        self.best_score = self.best_score.max(self.score);
    }

    pub(crate) fn record_miss(&mut self) {
        self.streak = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_and_streak_accumulate() {
        let mut board = ScoreBoard::default();
        board.record_launch();
        board.record_score();
        board.record_launch();
        board.record_score();

        assert_eq!(board.score(), 2);
        assert_eq!(board.streak(), 2);
        assert_eq!(board.best_score(), 2);
        assert_eq!(board.shots_taken(), 2);
    }

    #[test]
    fn test_miss_resets_streak_only() {
        let mut board = ScoreBoard::default();
        board.record_launch();
        board.record_score();
        board.record_launch();
        board.record_miss();

        assert_eq!(board.streak(), 0);
        assert_eq!(board.score(), 1);
        assert_eq!(board.best_score(), 1);
        assert_eq!(board.shots_taken(), 2);
    }

    #[test]
    fn test_best_score_is_monotone() {
        let mut board = ScoreBoard::default();
        for _ in 0..5 {
            board.record_score();
        }
        let best = board.best_score();
        board.record_miss();
        board.record_miss();
        assert_eq!(board.best_score(), best);
        board.record_score();
        assert!(board.best_score() >= best);
    }

    #[test]
    fn test_on_fire_threshold() {
        let mut board = ScoreBoard::default();
        board.record_score();
        board.record_score();
        assert!(!board.on_fire());
        board.record_score();
        assert!(board.on_fire());
        board.record_miss();
        assert!(!board.on_fire());
    }
}
