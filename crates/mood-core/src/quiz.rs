//! Guided five-question quiz that derives a vibe from user answers.
//!
//! The session is a small state machine: `AwaitingAnswer(0)` through
//! `AwaitingAnswer(N-1)`, with the final answer running resolution. Answers
//! never escape the session; cancellation discards them without touching the
//! store.
//!
//! Resolution is rule-based first-match: vibes are checked in the fixed
//! priority order Calm, Chaotic, Dreamy, Cyber, Cozy against the `mood` and
//! `activity` choice answers, and only if none matches does the numeric
//! `energy` answer fall back into low/middle/high bands.

use fnv::FnvHashMap;

use crate::constants::{QUIZ_ENERGY_HIGH, QUIZ_ENERGY_LOW, QUIZ_RESULT_INTENSITY};
use crate::mood::{Palette, Vibe};
use crate::presets::pick_preset;
use crate::store::MoodStore;

/// How a question is answered in the UI.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum QuestionKind {
    /// 0..=100 slider with endpoint labels.
    Scale { min_label: &'static str, max_label: &'static str },
    /// One choice out of `choices` (label, token).
    Choice { choices: &'static [(&'static str, &'static str)] },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub kind: QuestionKind,
}

pub const QUESTIONS: &[Question] = &[
    Question {
        id: "energy",
        text: "How energetic do you feel?",
        kind: QuestionKind::Scale { min_label: "Low", max_label: "High" },
    },
    Question {
        id: "focus",
        text: "What's your focus level?",
        kind: QuestionKind::Scale { min_label: "Scattered", max_label: "Laser" },
    },
    Question {
        id: "mood",
        text: "How would you describe your mood?",
        kind: QuestionKind::Choice {
            choices: &[
                ("Peaceful", "calm"),
                ("Excited", "chaotic"),
                ("Dreamy", "dreamy"),
                ("Focused", "cyber"),
                ("Cozy", "cozy"),
            ],
        },
    },
    Question {
        id: "activity",
        text: "What activity suits you now?",
        kind: QuestionKind::Choice {
            choices: &[
                ("Meditation", "calm"),
                ("Dancing", "chaotic"),
                ("Daydreaming", "dreamy"),
                ("Coding", "cyber"),
                ("Reading", "cozy"),
            ],
        },
    },
    Question {
        id: "environment",
        text: "Preferred environment vibe?",
        kind: QuestionKind::Scale { min_label: "Minimal", max_label: "Rich" },
    },
];

/// A single recorded answer, transient for the session's lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Answer {
    Scale(f32),
    Choice(&'static str),
}

/// Outcome of feeding one answer into the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum QuizProgress {
    /// More questions remain; the index of the next one.
    AwaitingAnswer(usize),
    Resolved(Vibe),
}

#[derive(Default)]
pub struct QuizSession {
    question_index: usize,
    answers: FnvHashMap<&'static str, Answer>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn current_question(&self) -> &'static Question {
        &QUESTIONS[self.question_index.min(QUESTIONS.len() - 1)]
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Record the answer for the current question and advance. The final
    /// answer triggers resolution; extra answers after that re-resolve with
    /// the same result.
    pub fn answer(&mut self, answer: Answer) -> QuizProgress {
        let question = self.current_question();
        self.answers.insert(question.id, answer);
        if self.question_index + 1 < QUESTIONS.len() {
            self.question_index += 1;
            QuizProgress::AwaitingAnswer(self.question_index)
        } else {
            QuizProgress::Resolved(self.resolve())
        }
    }

    fn choice(&self, id: &str) -> Option<&'static str> {
        match self.answers.get(id) {
            Some(Answer::Choice(token)) => Some(token),
            _ => None,
        }
    }

    fn scale(&self, id: &str) -> Option<f32> {
        match self.answers.get(id) {
            Some(Answer::Scale(value)) => Some(*value),
            _ => None,
        }
    }

    /// First-match rule pass in priority order, then the energy fallback.
    fn resolve(&self) -> Vibe {
        let mood = self.choice("mood");
        let activity = self.choice("activity");
        for vibe in Vibe::ALL {
            let token = match vibe {
                Vibe::Calm => "calm",
                Vibe::Chaotic => "chaotic",
                Vibe::Dreamy => "dreamy",
                Vibe::Cyber => "cyber",
                Vibe::Cozy => "cozy",
            };
            if mood == Some(token) || activity == Some(token) {
                return vibe;
            }
        }
        match self.scale("energy") {
            Some(energy) if energy > QUIZ_ENERGY_HIGH => Vibe::Chaotic,
            Some(energy) if energy < QUIZ_ENERGY_LOW => Vibe::Calm,
            _ => Vibe::Dreamy,
        }
    }
}

/// Commit a resolved vibe: preset palette, fixed result intensity, quiz
/// closed. The session should be dropped by the caller afterwards.
pub fn apply_result(store: &mut MoodStore, vibe: Vibe) {
    let preset = pick_preset(vibe);
    store.set_vibe(vibe);
    store.set_palette(Palette::new(preset.primary, preset.accent, preset.bg));
    store.set_intensity(QUIZ_RESULT_INTENSITY);
    store.close_quiz();
    log::info!("[quiz] resolved -> {vibe}");
}
