//! Question bank and round scoring
//!
//! A round walks the question list once, scoring each submitted answer,
//! and wraps back to the first question when the list is exhausted. The
//! completed round's tally is handed out exactly once so the caller can
//! show a "Round complete" screen before the next pass begins.

use heapless::String;

/// Longest answer line considered for matching; longer input is truncated
/// before normalization, matching the serial line buffer size upstream.
pub const MAX_ANSWER_LEN: usize = 64;

/// One quiz question with its acceptable answer variants
///
/// Variants are compared case-insensitively after whitespace trimming, so
/// they can be stored in any case.
#[derive(Debug, Clone, Copy)]
pub struct Question<'a> {
    /// Prompt text, laid out by the caller (wrapped or scrolled)
    pub prompt: &'a str,
    /// Acceptable answers; any match scores the question
    pub answers: &'a [&'a str],
}

/// Outcome of one submitted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verdict {
    Correct,
    Wrong,
}

/// Tally of a completed round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RoundScore {
    /// Questions answered correctly this round
    pub correct: u8,
    /// Questions asked this round
    pub total: u8,
}

/// Cyclic quiz round state: current question index, running score, and the
/// pending tally of a just-completed round
pub struct QuizRound<'a> {
    questions: &'a [Question<'a>],
    index: usize,
    score: u8,
    completed: Option<RoundScore>,
}

impl<'a> QuizRound<'a> {
    /// Start a round over a non-empty question list
    ///
    /// # Panics
    ///
    /// Panics if `questions` is empty.
    pub fn new(questions: &'a [Question<'a>]) -> Self {
        assert!(!questions.is_empty(), "quiz needs at least one question");
        Self {
            questions,
            index: 0,
            score: 0,
            completed: None,
        }
    }

    /// The question currently awaiting an answer
    pub fn question(&self) -> &Question<'a> {
        &self.questions[self.index]
    }

    /// Zero-based position of the current question within the round
    pub fn position(&self) -> usize {
        self.index
    }

    /// Submit an answer for the current question, score it, and advance
    ///
    /// Wrapping past the last question records the round tally (see
    /// [`take_round_score`](Self::take_round_score)) and resets the score
    /// for the next pass.
    pub fn answer(&mut self, input: &str) -> Verdict {
        let verdict = if self.question().matches(input) {
            self.score += 1;
            Verdict::Correct
        } else {
            Verdict::Wrong
        };

        self.index += 1;
        if self.index == self.questions.len() {
            self.index = 0;
            self.completed = Some(RoundScore {
                correct: self.score,
                total: self.questions.len() as u8,
            });
            self.score = 0;
        }

        verdict
    }

    /// Take the tally of a just-completed round, if one finished since the
    /// last call
    pub fn take_round_score(&mut self) -> Option<RoundScore> {
        self.completed.take()
    }
}

impl<'a> Question<'a> {
    /// Check `input` against the acceptable variants
    pub fn matches(&self, input: &str) -> bool {
        let normalized = normalize(input);
        self.answers
            .iter()
            .any(|cand| normalized.eq_ignore_ascii_case(cand.trim()))
    }
}

/// Trim surrounding whitespace and truncate to the matching buffer size
fn normalize(input: &str) -> String<MAX_ANSWER_LEN> {
    let trimmed = input.trim();
    let mut out: String<MAX_ANSWER_LEN> = String::new();
    for ch in trimmed.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}
