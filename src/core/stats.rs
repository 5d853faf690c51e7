//! Win/loss statistics across the games of one run

use super::{Finished, FIGURE_PARTS, Session};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub games_lost: usize,
    pub hints_used: usize,
    /// Won games bucketed by how many wrong guesses they took
    pub wrong_guess_distribution: [usize; FIGURE_PARTS as usize],
}

impl Statistics {
    /// Record a finished game
    pub fn record(&mut self, finished: &Finished, session: &Session) {
        self.total_games += 1;
        self.hints_used += usize::from(
            session
                .config()
                .hint_budget()
                .saturating_sub(session.hints_remaining()),
        );

        match finished {
            Finished::Won => {
                self.games_won += 1;
                let bucket = usize::from(session.wrong_guess_count());
                if let Some(slot) = self.wrong_guess_distribution.get_mut(bucket) {
                    *slot += 1;
                }
            }
            Finished::Lost { .. } => self.games_lost += 1,
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, SecretWord};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn play(word: &str, letters: &str) -> (Session, Option<Finished>) {
        let mut session = Session::new(SecretWord::new(word).unwrap(), GameConfig::default());
        let mut finished = None;
        for letter in letters.chars() {
            if let Some(f) = session.guess(letter).finished {
                finished = Some(f);
            }
        }
        (session, finished)
    }

    #[test]
    fn empty_statistics() {
        let stats = Statistics::default();
        assert_eq!(stats.total_games, 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn records_wins_and_losses() {
        let mut stats = Statistics::default();

        let (session, finished) = play("cat", "xcat");
        stats.record(&finished.unwrap(), &session);

        let (session, finished) = play("dog", "abcefh");
        stats.record(&finished.unwrap(), &session);

        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.games_lost, 1);
        assert_eq!(stats.wrong_guess_distribution[1], 1);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn counts_hints_used() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = Session::new(SecretWord::new("bee").unwrap(), GameConfig::default());
        session.hint(&mut rng);
        let finished = session.hint(&mut rng).finished.unwrap();

        let mut stats = Statistics::default();
        stats.record(&finished, &session);
        assert_eq!(stats.hints_used, 2);
        assert_eq!(stats.wrong_guess_distribution[0], 1);
    }
}
