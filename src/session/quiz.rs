use std::collections::BTreeSet;

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::data::model::{Catalog, Plant};

/// First entry of the option list; selecting it means "not answered yet".
pub const PLACEHOLDER: &str = "Selecteer een optie";

/// Number of options offered, correct answer included.
const OPTION_COUNT: usize = 3;

// ---------------------------------------------------------------------------
// Question
// ---------------------------------------------------------------------------

/// Which name the user has to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Shown the scientific name, asked for the Dutch one.
    DutchName,
    /// Shown the Dutch name, asked for the scientific one.
    ScientificName,
}

impl QuestionKind {
    /// The name of `plant` this kind asks for.
    pub fn answer_of(self, plant: &Plant) -> &str {
        match self {
            QuestionKind::DutchName => &plant.dutch_name,
            QuestionKind::ScientificName => &plant.scientific_name,
        }
    }

    /// The name of `plant` shown in the question.
    pub fn subject_of(self, plant: &Plant) -> &str {
        match self {
            QuestionKind::DutchName => &plant.scientific_name,
            QuestionKind::ScientificName => &plant.dutch_name,
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            QuestionKind::DutchName => "Wat is de Nederlandse naam van",
            QuestionKind::ScientificName => "Wat is de wetenschappelijke naam van",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Catalog index of the plant being asked about.
    pub plant: usize,
    pub kind: QuestionKind,
    /// Name shown to the user.
    pub subject: String,
    pub correct: String,
    /// Correct answer plus distractors, shuffled. Excludes [`PLACEHOLDER`].
    pub options: Vec<String>,
}

impl Question {
    /// Draw a question about a random plant among `candidates`.
    ///
    /// Returns `None` when there are no candidates.
    pub fn generate<R: Rng + ?Sized>(
        catalog: &Catalog,
        candidates: &[usize],
        rng: &mut R,
    ) -> Option<Question> {
        let &plant_idx = candidates.choose(rng)?;
        let kind = if rng.random_bool(0.5) {
            QuestionKind::DutchName
        } else {
            QuestionKind::ScientificName
        };
        let plant = &catalog.plants[plant_idx];
        let correct = kind.answer_of(plant).to_string();

        let mut options = vec![correct.clone()];
        options.extend(sample_distractors(catalog, candidates, kind, &correct, rng));
        options.shuffle(rng);

        Some(Question {
            plant: plant_idx,
            kind,
            subject: kind.subject_of(plant).to_string(),
            correct,
            options,
        })
    }

    /// Options as displayed: the placeholder followed by the shuffled names.
    pub fn displayed_options(&self) -> Vec<&str> {
        std::iter::once(PLACEHOLDER)
            .chain(self.options.iter().map(String::as_str))
            .collect()
    }

    /// Question text without markup; the UI italicises the subject.
    pub fn text(&self) -> String {
        format!("{} '{}'?", self.kind.prompt(), self.subject)
    }
}

/// Draw random rows until two names distinct from `correct` (and from each
/// other) are found.
///
/// The draw is capped by the number of distinct names among the candidates,
/// so a filter with fewer than three distinct names yields fewer options
/// instead of looping forever.
fn sample_distractors<R: Rng + ?Sized>(
    catalog: &Catalog,
    candidates: &[usize],
    kind: QuestionKind,
    correct: &str,
    rng: &mut R,
) -> Vec<String> {
    let distinct: BTreeSet<&str> = candidates
        .iter()
        .map(|&i| kind.answer_of(&catalog.plants[i]))
        .collect();
    let wanted = OPTION_COUNT.min(distinct.len()).saturating_sub(1);

    let mut chosen: Vec<String> = Vec::with_capacity(wanted);
    while chosen.len() < wanted {
        let Some(&idx) = candidates.choose(rng) else {
            break;
        };
        let name = kind.answer_of(&catalog.plants[idx]);
        if name != correct && !chosen.iter().any(|c| c == name) {
            chosen.push(name.to_string());
        }
    }
    chosen
}

// ---------------------------------------------------------------------------
// Answer checking
// ---------------------------------------------------------------------------

/// Free-text comparison: surrounding whitespace and case are ignored.
pub fn free_text_matches(given: &str, correct: &str) -> bool {
    given.trim().to_lowercase() == correct.trim().to_lowercase()
}

/// Consecutive correct answers since the last mistake.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Streak(u32);

impl Streak {
    /// Record one answer and return the new streak.
    pub fn record(&mut self, correct: bool) -> u32 {
        self.0 = if correct { self.0 + 1 } else { 0 };
        self.0
    }

    pub fn count(self) -> u32 {
        self.0
    }

    /// Share of `total` plants answered in a row, for the progress bar.
    pub fn progress(self, total: usize) -> f32 {
        (self.0 as f32 / total.max(1) as f32).min(1.0)
    }
}

/// Outcome of the last answer, kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Wrong { expected: String },
}

// ---------------------------------------------------------------------------
// QuizSession – per-session quiz state shared by both quiz modes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    pub question: Option<Question>,
    /// Index into `question.options` picked in multiple-choice mode.
    pub chosen: Option<usize>,
    pub streak: Streak,
    pub feedback: Option<Feedback>,
    /// Contents of the free-text field.
    pub input: String,
}

impl QuizSession {
    /// Whether the current multiple-choice question has been answered.
    pub fn answered(&self) -> bool {
        self.chosen.is_some()
    }

    /// Make sure a question exists for the current candidates.
    pub fn ensure_question<R: Rng + ?Sized>(
        &mut self,
        catalog: &Catalog,
        candidates: &[usize],
        rng: &mut R,
    ) {
        if self.question.is_none() {
            self.next_question(catalog, candidates, rng);
        }
    }

    /// Replace the current question and clear the answer state.
    pub fn next_question<R: Rng + ?Sized>(
        &mut self,
        catalog: &Catalog,
        candidates: &[usize],
        rng: &mut R,
    ) {
        self.question = Question::generate(catalog, candidates, rng);
        self.chosen = None;
        self.feedback = None;
        log::debug!("new question: {:?}", self.question.as_ref().map(Question::text));
    }

    /// Drop the current question, e.g. after the candidates changed.
    pub fn discard_question(&mut self) {
        self.question = None;
        self.chosen = None;
        self.feedback = None;
    }

    /// Multiple choice: pick option `idx` (0-based, placeholder excluded).
    ///
    /// The first pick locks the question; later picks are ignored.
    pub fn choose_option(&mut self, idx: usize) -> Option<&Feedback> {
        if self.answered() {
            return self.feedback.as_ref();
        }
        let question = self.question.as_ref()?;
        let picked = question.options.get(idx)?;
        let correct = *picked == question.correct;
        let feedback = verdict(correct, &question.correct);
        self.streak.record(correct);
        self.chosen = Some(idx);
        self.feedback = Some(feedback);
        self.feedback.as_ref()
    }

    /// Free text: check the input, then ask the next question straight away.
    ///
    /// The feedback of the checked answer survives the new question. A
    /// blank field is not an answer and leaves everything untouched.
    pub fn submit_free_text<R: Rng + ?Sized>(
        &mut self,
        catalog: &Catalog,
        candidates: &[usize],
        rng: &mut R,
    ) -> Option<Feedback> {
        if self.input.trim().is_empty() {
            return None;
        }
        let question = self.question.as_ref()?;
        let correct = free_text_matches(&self.input, &question.correct);
        let feedback = verdict(correct, &question.correct);
        self.streak.record(correct);
        self.input.clear();
        self.next_question(catalog, candidates, rng);
        self.feedback = Some(feedback.clone());
        Some(feedback)
    }
}

fn verdict(correct: bool, expected: &str) -> Feedback {
    if correct {
        Feedback::Correct
    } else {
        Feedback::Wrong {
            expected: expected.to_string(),
        }
    }
}
