//! Collaborator protocol between the turn engine and its front end.
//!
//! The engine asks two questions synchronously while a turn is running:
//! which piece a pawn becomes, and whether a draw offer is accepted.

use std::collections::VecDeque;

use crate::board::{Coordinate, Player};

/// Answers the questions the engine asks during a turn.
pub trait Prompter {
    /// Raw answer to "promote the pawn on `square` to?". The engine re-asks
    /// until the answer is one of `N`, `B`, `R`, `Q` (any case).
    fn promotion_choice(&mut self, square: Coordinate) -> String;

    /// Whether the opponent of `offered_by` accepts a draw.
    fn draw_response(&mut self, offered_by: &Player) -> bool;
}

/// `y` or `yes`, any case, surrounding whitespace ignored.
#[must_use]
pub fn parse_draw_answer(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Prompter answering from pre-recorded queues, for tests and scripted games.
///
/// Promotion answers default to `"Q"` and draw answers to `false` once the
/// queues run dry.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    promotions: VecDeque<String>,
    draws: VecDeque<bool>,
    /// Number of promotion questions asked so far
    pub promotion_prompts: usize,
}

impl ScriptedPrompter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_promotions<I, S>(mut self, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.promotions.extend(answers.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_draw_answers(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.draws.extend(answers);
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn promotion_choice(&mut self, _square: Coordinate) -> String {
        self.promotion_prompts += 1;
        self.promotions
            .pop_front()
            .unwrap_or_else(|| "Q".to_string())
    }

    fn draw_response(&mut self, _offered_by: &Player) -> bool {
        self.draws.pop_front().unwrap_or(false)
    }
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn promotion_choice(&mut self, square: Coordinate) -> String {
        (**self).promotion_choice(square)
    }

    fn draw_response(&mut self, offered_by: &Player) -> bool {
        (**self).draw_response(offered_by)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_draw_answer() {
        for yes in ["y", "Y", "yes", " YES\n", "Yes"] {
            assert!(parse_draw_answer(yes), "{yes:?}");
        }
        for no in ["n", "no", "", "yeah", "ye"] {
            assert!(!parse_draw_answer(no), "{no:?}");
        }
    }

    #[test]
    fn test_scripted_prompter_defaults() {
        let mut prompter = ScriptedPrompter::new().with_promotions(["x"]);
        let a8: Coordinate = "a8".parse().unwrap();
        assert_eq!(prompter.promotion_choice(a8), "x");
        assert_eq!(prompter.promotion_choice(a8), "Q");
        assert_eq!(prompter.promotion_prompts, 2);
    }
}
