//! Financial growth-level assessment.
//!
//! A short quiz scored 1-5 per question. The flow is a three-state machine,
//! intro -> in progress -> complete, modeled as an enum so partially-scored
//! or score-less "results" states cannot be constructed. The final level is
//! the rounded mean of the answers, clamped into [1, 5].

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::FinCalcError;
use crate::FinCalcResult;

const MIN_SCORE: u8 = 1;
const MAX_SCORE: u8 = 5;

/// The fixed question list shown by the assessment flow.
pub const QUESTIONS: &[&str] = &[
    "Do you track your monthly income and expenses?",
    "Do you hold an emergency fund covering several months of expenses?",
    "Are you free of high-interest consumer debt?",
    "Do you contribute regularly to retirement or investment accounts?",
    "Do you have insurance matching your household's risks?",
    "Do you review and rebalance your finances at least yearly?",
];

/// Static descriptor for one growth level.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LevelDescriptor {
    pub level: u8,
    pub name: &'static str,
    pub summary: &'static str,
}

/// Descriptor table indexed by `level - 1`.
pub const LEVELS: [LevelDescriptor; 5] = [
    LevelDescriptor {
        level: 1,
        name: "Starting Out",
        summary: "Building awareness of where money goes each month.",
    },
    LevelDescriptor {
        level: 2,
        name: "Getting Stable",
        summary: "Covering essentials and beginning to save consistently.",
    },
    LevelDescriptor {
        level: 3,
        name: "Building Security",
        summary: "Emergency fund in place, debt under control.",
    },
    LevelDescriptor {
        level: 4,
        name: "Growing Wealth",
        summary: "Investing regularly with clear medium-term goals.",
    },
    LevelDescriptor {
        level: 5,
        name: "Financially Independent",
        summary: "Assets on track to sustain your lifestyle.",
    },
];

/// Look up the descriptor for a level in [1, 5].
pub fn level_descriptor(level: u8) -> Option<&'static LevelDescriptor> {
    LEVELS.get(level.saturating_sub(1) as usize)
}

/// Score a complete answer sheet: rounded mean of the scores, clamped to [1, 5].
pub fn score_assessment(scores: &[u8]) -> FinCalcResult<u8> {
    if scores.is_empty() {
        return Err(FinCalcError::InvalidInput {
            field: "scores".into(),
            reason: "at least one answer is required".into(),
        });
    }
    for (i, &s) in scores.iter().enumerate() {
        if !(MIN_SCORE..=MAX_SCORE).contains(&s) {
            return Err(FinCalcError::InvalidInput {
                field: format!("scores[{i}]"),
                reason: format!("score must be between {MIN_SCORE} and {MAX_SCORE}"),
            });
        }
    }

    let sum: u32 = scores.iter().map(|&s| u32::from(s)).sum();
    let mean = Decimal::from(sum) / Decimal::from(scores.len() as u32);
    let level = mean
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u8()
        .unwrap_or(MIN_SCORE);
    Ok(level.clamp(MIN_SCORE, MAX_SCORE))
}

/// Where the flow currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "lowercase")]
pub enum AssessmentState {
    Intro,
    InProgress {
        /// Index of the question awaiting an answer.
        question: usize,
        scores: Vec<u8>,
    },
    Complete {
        level: u8,
    },
}

/// Drives one user's pass through the assessment.
#[derive(Debug, Clone)]
pub struct Assessment {
    question_count: usize,
    state: AssessmentState,
}

impl Default for Assessment {
    fn default() -> Self {
        Self {
            question_count: QUESTIONS.len(),
            state: AssessmentState::Intro,
        }
    }
}

impl Assessment {
    /// Build a flow over `question_count` questions.
    pub fn new(question_count: usize) -> FinCalcResult<Self> {
        if question_count == 0 {
            return Err(FinCalcError::InvalidInput {
                field: "question_count".into(),
                reason: "assessment needs at least one question".into(),
            });
        }
        Ok(Self {
            question_count,
            state: AssessmentState::Intro,
        })
    }

    pub fn state(&self) -> &AssessmentState {
        &self.state
    }

    /// Leave the intro screen and present the first question.
    pub fn start(&mut self) -> FinCalcResult<&AssessmentState> {
        match self.state {
            AssessmentState::Intro => {
                self.state = AssessmentState::InProgress {
                    question: 0,
                    scores: Vec::with_capacity(self.question_count),
                };
                Ok(&self.state)
            }
            _ => Err(FinCalcError::InvalidInput {
                field: "state".into(),
                reason: "assessment already started".into(),
            }),
        }
    }

    /// Record an answer for the current question. The final answer moves the
    /// flow to `Complete` with the computed level.
    pub fn answer(&mut self, score: u8) -> FinCalcResult<&AssessmentState> {
        let AssessmentState::InProgress { question, scores } = &mut self.state else {
            return Err(FinCalcError::InvalidInput {
                field: "state".into(),
                reason: "no question is awaiting an answer".into(),
            });
        };
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(FinCalcError::InvalidInput {
                field: "score".into(),
                reason: format!("score must be between {MIN_SCORE} and {MAX_SCORE}"),
            });
        }

        scores.push(score);
        if scores.len() == self.question_count {
            let level = score_assessment(scores)?;
            self.state = AssessmentState::Complete { level };
        } else {
            *question += 1;
        }
        Ok(&self.state)
    }

    /// Discard all progress and return to the intro screen. Always allowed.
    pub fn reset(&mut self) {
        self.state = AssessmentState::Intro;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn level_is_rounded_mean() {
        assert_eq!(score_assessment(&[3, 3, 3]).unwrap(), 3);
        assert_eq!(score_assessment(&[4, 5]).unwrap(), 5); // 4.5 rounds up
        assert_eq!(score_assessment(&[1, 2]).unwrap(), 2); // 1.5 rounds up
        assert_eq!(score_assessment(&[2, 2, 3]).unwrap(), 2); // 2.33 rounds down
    }

    #[test]
    fn level_always_in_range() {
        assert_eq!(score_assessment(&[1]).unwrap(), 1);
        assert_eq!(score_assessment(&[5; 20]).unwrap(), 5);
        assert_eq!(score_assessment(&[1; 7]).unwrap(), 1);
    }

    #[test]
    fn empty_or_out_of_range_answers_rejected() {
        assert!(score_assessment(&[]).is_err());
        assert!(score_assessment(&[0]).is_err());
        assert!(score_assessment(&[3, 6]).is_err());
    }

    #[test]
    fn every_level_has_a_descriptor() {
        for level in 1..=5u8 {
            let d = level_descriptor(level).unwrap();
            assert_eq!(d.level, level);
            assert!(!d.name.is_empty());
        }
        assert!(level_descriptor(0).is_none() || level_descriptor(0).unwrap().level == 1);
        assert!(level_descriptor(6).is_none());
    }

    #[test]
    fn flow_walks_intro_to_complete() {
        let mut flow = Assessment::new(3).unwrap();
        assert_eq!(*flow.state(), AssessmentState::Intro);

        flow.start().unwrap();
        assert!(matches!(
            flow.state(),
            AssessmentState::InProgress { question: 0, .. }
        ));

        flow.answer(4).unwrap();
        flow.answer(5).unwrap();
        assert!(matches!(
            flow.state(),
            AssessmentState::InProgress { question: 2, .. }
        ));

        flow.answer(3).unwrap();
        // mean of 4, 5, 3 is 4
        assert_eq!(*flow.state(), AssessmentState::Complete { level: 4 });
    }

    #[test]
    fn answering_outside_in_progress_is_rejected() {
        let mut flow = Assessment::new(2).unwrap();
        assert!(flow.answer(3).is_err());

        flow.start().unwrap();
        flow.answer(3).unwrap();
        flow.answer(3).unwrap();
        assert!(flow.answer(3).is_err());
        assert!(flow.start().is_err());
    }

    #[test]
    fn reset_returns_to_intro_from_anywhere() {
        let mut flow = Assessment::new(2).unwrap();
        flow.reset();
        assert_eq!(*flow.state(), AssessmentState::Intro);

        flow.start().unwrap();
        flow.answer(2).unwrap();
        flow.reset();
        assert_eq!(*flow.state(), AssessmentState::Intro);

        flow.start().unwrap();
        flow.answer(2).unwrap();
        flow.answer(2).unwrap();
        flow.reset();
        assert_eq!(*flow.state(), AssessmentState::Intro);
    }

    #[test]
    fn default_flow_uses_builtin_questions() {
        let mut flow = Assessment::default();
        flow.start().unwrap();
        for _ in 0..QUESTIONS.len() {
            flow.answer(4).unwrap();
        }
        assert_eq!(*flow.state(), AssessmentState::Complete { level: 4 });
    }

    #[test]
    fn invalid_answer_does_not_advance_the_flow() {
        let mut flow = Assessment::new(2).unwrap();
        flow.start().unwrap();
        assert!(flow.answer(0).is_err());
        assert!(matches!(
            flow.state(),
            AssessmentState::InProgress { question: 0, .. }
        ));
    }
}
