//! Win/loss counters, streaks and per-board guess histograms

use crate::core::BoardConfig;
use crate::engine::GameSession;
use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// How many games were won in 1, 2, ... `rows` guesses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuessDistribution {
    counts: Vec<u32>,
}

impl GuessDistribution {
    /// All-zero histogram for a board with `rows` rows
    #[must_use]
    pub fn new(rows: u8) -> Self {
        Self {
            counts: vec![0; usize::from(rows)],
        }
    }

    /// Wins that took exactly `guesses` guesses, 0 if out of range
    #[must_use]
    pub fn get(&self, guesses: usize) -> u32 {
        guesses
            .checked_sub(1)
            .and_then(|i| self.counts.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// `(guesses, wins)` pairs from 1 upwards
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.counts.iter().enumerate().map(|(i, &n)| (i + 1, n))
    }

    /// Number of buckets, equal to the board's rows
    #[must_use]
    pub fn rows(&self) -> usize {
        self.counts.len()
    }

    /// Largest bucket
    #[must_use]
    pub fn max(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    fn increment(&mut self, guesses: usize) {
        if let Some(count) = guesses.checked_sub(1).and_then(|i| self.counts.get_mut(i)) {
            *count = count.saturating_add(1);
        }
    }

    fn fit_to(&mut self, rows: u8) {
        self.counts.resize(usize::from(rows), 0);
    }
}

/// Aggregate results for one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserStatistics {
    games_played: u32,
    win_count: u32,
    loss_count: u32,
    current_streak: u32,
    max_streak: u32,
    distributions: BTreeMap<BoardConfig, GuessDistribution>,
}

impl Default for UserStatistics {
    fn default() -> Self {
        Self {
            games_played: 0,
            win_count: 0,
            loss_count: 0,
            current_streak: 0,
            max_streak: 0,
            distributions: BoardConfig::all()
                .map(|config| (config, GuessDistribution::new(config.rows())))
                .collect(),
        }
    }
}

impl UserStatistics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished game into the counters
    ///
    /// # Errors
    /// Returns `ConfigurationError::GuessCount` for a win whose `guesses_used`
    /// is outside `1..=rows`; nothing is changed in that case.
    pub fn record_outcome(
        &mut self,
        config: BoardConfig,
        won: bool,
        guesses_used: usize,
    ) -> Result<(), ConfigurationError> {
        if won && !(1..=usize::from(config.rows())).contains(&guesses_used) {
            return Err(ConfigurationError::GuessCount {
                guesses: guesses_used,
                rows: config.rows(),
            });
        }

        self.games_played = self.games_played.saturating_add(1);
        if won {
            self.win_count = self.win_count.saturating_add(1);
            self.current_streak = self.current_streak.saturating_add(1);
            self.max_streak = self.max_streak.max(self.current_streak);
            self.distributions
                .entry(config)
                .or_insert_with(|| GuessDistribution::new(config.rows()))
                .increment(guesses_used);
        } else {
            self.loss_count = self.loss_count.saturating_add(1);
            self.current_streak = 0;
        }

        debug!(%config, won, guesses_used, streak = self.current_streak, "recorded outcome");
        Ok(())
    }

    /// Record a finished session
    ///
    /// Returns `Ok(false)` without recording if the session is still running.
    ///
    /// # Errors
    /// See [`record_outcome`](Self::record_outcome).
    pub fn record_session(&mut self, session: &GameSession) -> Result<bool, ConfigurationError> {
        match session.outcome() {
            Some((won, guesses)) => {
                self.record_outcome(session.config(), won, guesses)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Fraction of games won, `0.0` before the first game
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.win_count) / f64::from(self.games_played)
        }
    }

    /// Histogram for `config`
    #[must_use]
    pub fn distribution(&self, config: BoardConfig) -> GuessDistribution {
        self.distributions
            .get(&config)
            .cloned()
            .unwrap_or_else(|| GuessDistribution::new(config.rows()))
    }

    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    #[must_use]
    pub fn win_count(&self) -> u32 {
        self.win_count
    }

    #[must_use]
    pub fn loss_count(&self) -> u32 {
        self.loss_count
    }

    #[must_use]
    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    #[must_use]
    pub fn max_streak(&self) -> u32 {
        self.max_streak
    }

    /// Zero every counter and histogram
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Repair data decoded from storage
    ///
    /// Adds missing boards, resizes histograms to their board's rows, and
    /// restores `wins + losses == played` and `max_streak >= current_streak`.
    /// No counter is ever lowered: unexplained games count as losses.
    pub fn normalize(&mut self) {
        for config in BoardConfig::all() {
            self.distributions
                .entry(config)
                .or_insert_with(|| GuessDistribution::new(config.rows()))
                .fit_to(config.rows());
        }

        let decided = self.win_count.saturating_add(self.loss_count);
        if decided != self.games_played {
            warn!(
                played = self.games_played,
                wins = self.win_count,
                losses = self.loss_count,
                "inconsistent game counters, repairing"
            );
            // Counters only ever grow: raise whichever side is short.
            if decided < self.games_played {
                self.loss_count = self.games_played - self.win_count;
            } else {
                self.games_played = decided;
            }
        }
        self.max_streak = self.max_streak.max(self.current_streak);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WordList;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn board(rows: u8, cols: u8) -> BoardConfig {
        BoardConfig::new(rows, cols).unwrap()
    }

    #[test]
    fn fresh_statistics_are_zero_and_fully_populated() {
        let stats = UserStatistics::new();
        assert_eq!(stats.games_played(), 0);
        assert_eq!(stats.win_rate(), 0.0);

        for config in BoardConfig::all() {
            let dist = stats.distribution(config);
            assert_eq!(dist.rows(), usize::from(config.rows()));
            assert_eq!(dist.total(), 0);
        }
    }

    #[test]
    fn wins_and_losses_update_streaks() {
        let mut stats = UserStatistics::new();
        let classic = BoardConfig::CLASSIC;

        stats.record_outcome(classic, true, 3).unwrap();
        stats.record_outcome(classic, true, 4).unwrap();
        stats.record_outcome(classic, true, 3).unwrap();
        assert_eq!(stats.current_streak(), 3);
        assert_eq!(stats.max_streak(), 3);

        stats.record_outcome(classic, false, 6).unwrap();
        assert_eq!(stats.current_streak(), 0);
        assert_eq!(stats.max_streak(), 3);

        stats.record_outcome(classic, true, 1).unwrap();
        assert_eq!(stats.current_streak(), 1);
        assert_eq!(stats.max_streak(), 3);

        assert_eq!(stats.games_played(), 5);
        assert_eq!(stats.win_count(), 4);
        assert_eq!(stats.loss_count(), 1);
        assert!((stats.win_rate() - 0.8).abs() < f64::EPSILON);

        let dist = stats.distribution(classic);
        assert_eq!(
            dist.iter().collect::<Vec<_>>(),
            vec![(1, 1), (2, 0), (3, 2), (4, 1), (5, 0), (6, 0)]
        );
    }

    #[test]
    fn histograms_are_per_board() {
        let mut stats = UserStatistics::new();
        stats.record_outcome(board(6, 5), true, 2).unwrap();
        stats.record_outcome(board(5, 6), true, 2).unwrap();
        stats.record_outcome(board(5, 6), true, 5).unwrap();

        assert_eq!(stats.distribution(board(6, 5)).total(), 1);
        assert_eq!(stats.distribution(board(5, 6)).total(), 2);
        assert_eq!(stats.distribution(board(5, 6)).get(5), 1);
    }

    #[test]
    fn impossible_win_is_rejected_without_changes() {
        let mut stats = UserStatistics::new();
        let before = stats.clone();

        assert_eq!(
            stats.record_outcome(board(3, 5), true, 4),
            Err(ConfigurationError::GuessCount {
                guesses: 4,
                rows: 3
            })
        );
        assert!(stats.record_outcome(board(3, 5), true, 0).is_err());
        assert_eq!(stats, before);
    }

    #[test]
    fn distribution_is_an_owned_copy() {
        let mut stats = UserStatistics::new();
        let snapshot = stats.distribution(BoardConfig::CLASSIC);
        stats.record_outcome(BoardConfig::CLASSIC, true, 2).unwrap();
        assert_eq!(snapshot.get(2), 0);
        assert_eq!(stats.distribution(BoardConfig::CLASSIC).get(2), 1);
    }

    #[test]
    fn reset_clears_everything() {
        let mut stats = UserStatistics::new();
        stats.record_outcome(BoardConfig::CLASSIC, true, 2).unwrap();
        stats.reset();
        assert_eq!(stats, UserStatistics::new());
    }

    #[test]
    fn record_session_uses_outcome() {
        let words = Arc::new(WordList::from_words(["thank"], ["smart"]));
        let mut game = GameSession::new(
            BoardConfig::CLASSIC,
            Word::new("smart").unwrap(),
            words,
            false,
        )
        .unwrap();
        let mut stats = UserStatistics::new();

        game.submit_guess("thank").unwrap();
        assert_eq!(stats.record_session(&game), Ok(false));
        assert_eq!(stats.games_played(), 0);

        game.submit_guess("smart").unwrap();
        assert_eq!(stats.record_session(&game), Ok(true));
        assert_eq!(stats.distribution(BoardConfig::CLASSIC).get(2), 1);
    }

    #[test]
    fn serde_round_trip_keeps_board_keys() {
        let mut stats = UserStatistics::new();
        stats.record_outcome(board(4, 7), true, 4).unwrap();

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains(r#""4x7":[0,0,0,1]"#));

        let back: UserStatistics = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }

    #[test]
    fn normalize_repairs_partial_data() {
        let mut stats: UserStatistics = serde_json::from_str(
            r#"{"games_played":9,"win_count":2,"loss_count":1,"current_streak":4,"max_streak":1,
                "distributions":{"6x5":[1,1]}}"#,
        )
        .unwrap();
        stats.normalize();

        assert_eq!(stats.games_played(), 9);
        assert_eq!(stats.win_count(), 2);
        assert_eq!(stats.loss_count(), 7);
        assert_eq!(stats.max_streak(), 4);
        assert_eq!(stats.distribution(BoardConfig::CLASSIC).rows(), 6);
        assert_eq!(stats.distribution(BoardConfig::CLASSIC).get(2), 1);
        assert_eq!(stats.distribution(board(7, 7)).rows(), 7);
    }

    #[test]
    fn normalize_raises_played_when_outcomes_exceed_it() {
        let mut stats: UserStatistics =
            serde_json::from_str(r#"{"games_played":1,"win_count":3,"loss_count":2}"#).unwrap();
        stats.normalize();

        assert_eq!(stats.games_played(), 5);
        assert_eq!(stats.win_count(), 3);
        assert_eq!(stats.loss_count(), 2);
    }

    #[test]
    fn win_rate_is_half_after_two_wins_two_losses() {
        let mut stats = UserStatistics::new();
        let classic = BoardConfig::CLASSIC;
        stats.record_outcome(classic, true, 2).unwrap();
        stats.record_outcome(classic, false, 6).unwrap();
        stats.record_outcome(classic, true, 5).unwrap();
        stats.record_outcome(classic, false, 6).unwrap();

        assert_eq!(stats.games_played(), 4);
        assert!((stats.win_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn loss_leaves_every_histogram_unchanged() {
        let mut stats = UserStatistics::new();
        stats.record_outcome(board(4, 4), true, 3).unwrap();
        let before: Vec<_> = BoardConfig::all().map(|c| stats.distribution(c)).collect();

        for config in BoardConfig::all() {
            stats
                .record_outcome(config, false, usize::from(config.rows()))
                .unwrap();
        }

        let after: Vec<_> = BoardConfig::all().map(|c| stats.distribution(c)).collect();
        assert_eq!(after, before);
        assert_eq!(stats.loss_count(), 25);
    }
}
