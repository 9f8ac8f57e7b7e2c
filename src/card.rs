//! The question card: Unanswered until Yes is pressed, then Accepted forever.

use serde::{Deserialize, Serialize};

/// Where the card is in its (very short) life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Answer {
    /// Question on screen, buttons live
    #[default]
    Unanswered,
    /// Yes was pressed; celebration on screen
    Accepted,
}

/// Side effects the view must perform after an acceptance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Celebration {
    /// Replay key for the sparkle animation; changes on every acceptance
    pub replay: u32,
    /// Restart background music from the beginning
    pub restart_music: bool,
}

/// Card state
#[derive(Debug, Clone, Default)]
pub struct Card {
    answer: Answer,
    celebrate_key: u32,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(&self) -> Answer {
        self.answer
    }

    pub fn is_accepted(&self) -> bool {
        self.answer == Answer::Accepted
    }

    pub fn celebrate_key(&self) -> u32 {
        self.celebrate_key
    }

    /// Yes was activated.
    ///
    /// Repeat calls keep the card Accepted but still bump the replay key,
    /// so the celebration restarts if Yes is somehow reached again.
    pub fn accept(&mut self) -> Celebration {
        if self.answer == Answer::Unanswered {
            log::info!("Accepted!");
        }
        self.answer = Answer::Accepted;
        self.celebrate_key = self.celebrate_key.wrapping_add(1);
        Celebration {
            replay: self.celebrate_key,
            restart_music: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unanswered() {
        let card = Card::new();
        assert_eq!(card.answer(), Answer::Unanswered);
        assert_eq!(card.celebrate_key(), 0);
    }

    #[test]
    fn test_accept() {
        let mut card = Card::new();
        let c = card.accept();
        assert!(card.is_accepted());
        assert_eq!(c.replay, 1);
        assert!(c.restart_music);
    }

    #[test]
    fn test_accept_is_idempotent_on_state() {
        let mut card = Card::new();
        for i in 1..=5 {
            let c = card.accept();
            assert_eq!(card.answer(), Answer::Accepted);
            assert_eq!(c.replay, i);
        }
    }
}
