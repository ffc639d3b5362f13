use std::path::{Path, PathBuf};

use rand::Rng;

use crate::color::FamilyColors;
use crate::config::AppConfig;
use crate::data::filter::{filtered_indices, NumberRange, PlantFilter};
use crate::data::loader::load_workbook;
use crate::data::model::{Catalog, Category};
use crate::session::practice::{FamilyBrowser, PracticeSession};
use crate::session::quiz::{Feedback, QuizSession};

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Driller,
    Families,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Driller, Page::Families];

    pub fn label(self) -> &'static str {
        match self {
            Page::Driller => "Planten driller",
            Page::Families => "Planten families",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Practice,
    FullList,
    MultipleChoice,
    Expert,
}

impl Mode {
    pub const ALL: [Mode; 4] = [
        Mode::Practice,
        Mode::FullList,
        Mode::MultipleChoice,
        Mode::Expert,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Mode::Practice => "Oefen planten",
            Mode::FullList => "Bekijk volledige plantenlijst",
            Mode::MultipleChoice => "Test kennis (Multiple choice)",
            Mode::Expert => "Test kennis (Expert)",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: AppConfig,

    /// Loaded workbook (None until a file loaded successfully).
    pub catalog: Option<Catalog>,

    /// File the catalog was read from, for reloading.
    pub source: Option<PathBuf>,

    pub page: Page,
    pub mode: Mode,

    /// List and family selection of the sidebar.
    pub filter: PlantFilter,

    /// Start/end numbers within `filtered`.
    pub range: NumberRange,

    /// Catalog indices passing `filter` (cached).
    pub filtered: Vec<usize>,

    pub family_colors: FamilyColors,

    pub quiz: QuizSession,
    pub practice: PracticeSession,
    pub families: FamilyBrowser,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            catalog: None,
            source: None,
            page: Page::Driller,
            mode: Mode::Practice,
            filter: PlantFilter::default(),
            range: NumberRange::full(0),
            filtered: Vec::new(),
            family_colors: FamilyColors::default(),
            quiz: QuizSession::default(),
            practice: PracticeSession::default(),
            families: FamilyBrowser::default(),
            status_message: None,
        }
    }

    /// Read a workbook; failures end up in the status message.
    pub fn load(&mut self, path: &Path) {
        match load_workbook(path, &self.config.plant_sheet, &self.config.family_sheet) {
            Ok(catalog) => self.set_catalog(catalog, path.to_path_buf()),
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.status_message = Some(format!("Fout: {e:#}"));
            }
        }
    }

    /// Put `msg` in front of the current status message.
    pub fn add_status(&mut self, msg: String) {
        self.status_message = Some(match self.status_message.take() {
            Some(current) => format!("{msg} | {current}"),
            None => msg,
        });
    }

    /// Re-read the current source file (or the configured workbook).
    pub fn reload(&mut self) {
        let path = self
            .source
            .clone()
            .unwrap_or_else(|| self.config.workbook.clone());
        self.load(&path);
    }

    /// Ingest a newly loaded catalog and re-apply the filters.
    pub fn set_catalog(&mut self, catalog: Catalog, source: PathBuf) {
        if let Some(family) = &self.filter.family {
            if !catalog.plant_families.contains(family) {
                self.filter.family = None;
            }
        }
        if let Some(family) = &self.families.selected {
            if !catalog.families.iter().any(|f| &f.name == family) {
                self.families.select(None);
            }
        }
        self.status_message = if catalog.is_empty() {
            log::warn!("{} contains no usable plant rows", source.display());
            Some(format!("Geen planten in {}", source.display()))
        } else {
            None
        };
        self.family_colors = FamilyColors::new(&catalog.plant_families);
        self.catalog = Some(catalog);
        self.source = Some(source);
        self.refilter();
    }

    /// Recompute `filtered` after a filter change.
    ///
    /// The range falls back to the whole list and the open question is
    /// dropped; the streak is kept.
    pub fn refilter(&mut self) {
        self.filtered = match &self.catalog {
            Some(catalog) => filtered_indices(catalog, &self.filter),
            None => Vec::new(),
        };
        self.range = NumberRange::full(self.filtered.len());
        self.quiz.discard_question();
    }

    pub fn set_list_filter(&mut self, list: Option<Category>) {
        if self.filter.list != list {
            self.filter.list = list;
            self.refilter();
        }
    }

    pub fn set_family_filter(&mut self, family: Option<String>) {
        if self.filter.family != family {
            self.filter.family = family;
            self.refilter();
        }
    }

    /// Update the start/end numbers, clamped to the filtered list.
    pub fn set_range(&mut self, start: usize, end: usize) {
        let range = NumberRange { start, end }.clamped(self.filtered.len());
        if range != self.range {
            self.range = range;
            self.quiz.discard_question();
        }
    }

    /// Switch modes; both quiz modes start from a fresh question.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            self.mode = mode;
            self.quiz.discard_question();
        }
    }

    /// Catalog indices of the plants between start and end.
    pub fn active_rows(&self) -> &[usize] {
        self.range.slice(&self.filtered)
    }

    // -- quiz dispatch --

    pub fn ensure_question<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if let Some(catalog) = &self.catalog {
            let rows = self.range.slice(&self.filtered);
            self.quiz.ensure_question(catalog, rows, rng);
        }
    }

    pub fn next_question<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if let Some(catalog) = &self.catalog {
            let rows = self.range.slice(&self.filtered);
            self.quiz.next_question(catalog, rows, rng);
        }
    }

    pub fn submit_free_text<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Feedback> {
        let catalog = self.catalog.as_ref()?;
        let rows = self.range.slice(&self.filtered);
        self.quiz.submit_free_text(catalog, rows, rng)
    }

    // -- practice dispatch --

    /// Point the practice cursor at the active range.
    pub fn sync_practice(&mut self) {
        let rows = self.range.slice(&self.filtered);
        self.practice.sync(rows);
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::data::model::{Family, Plant};

    fn plant(n: i64, dutch: &str, family: &str, cats: &[Category]) -> Plant {
        Plant {
            number: n,
            genus: None,
            species: None,
            variety: None,
            cultivar: None,
            scientific_name: format!("Planta {dutch}"),
            dutch_name: dutch.to_string(),
            family: Some(family.to_string()),
            extra_info: None,
            categories: cats.iter().copied().collect(),
            photos: Vec::new(),
        }
    }

    fn state() -> AppState {
        let catalog = Catalog::new(
            vec![
                plant(1, "Eik", "Fagaceae", &[Category::Tree]),
                plant(2, "Beuk", "Fagaceae", &[Category::Tree]),
                plant(3, "Hazelaar", "Betulaceae", &[Category::Shrub]),
                plant(4, "Berk", "Betulaceae", &[Category::Tree]),
                plant(5, "Els", "Betulaceae", &[Category::Tree]),
            ],
            vec![Family {
                name: "Fagaceae".into(),
                description: String::new(),
                leaves: String::new(),
                flowers: String::new(),
                fruits: String::new(),
            }],
        );
        let mut state = AppState::new(AppConfig::default());
        state.set_catalog(catalog, PathBuf::from("test.xlsx"));
        state
    }

    #[test]
    fn filters_reset_the_range() {
        let mut s = state();
        assert_eq!(s.active_rows(), &[0, 1, 2, 3, 4]);
        s.set_range(2, 3);
        assert_eq!(s.active_rows(), &[1, 2]);

        s.set_list_filter(Some(Category::Tree));
        assert_eq!(s.range, NumberRange { start: 1, end: 4 });
        s.set_family_filter(Some("Betulaceae".into()));
        assert_eq!(s.active_rows(), &[3, 4]);
    }

    #[test]
    fn empty_filter_result() {
        let mut s = state();
        s.set_list_filter(Some(Category::Grass));
        assert!(s.filtered.is_empty());
        assert!(s.active_rows().is_empty());
        let mut rng = StdRng::seed_from_u64(1);
        s.ensure_question(&mut rng);
        assert!(s.quiz.question.is_none());
    }

    #[test]
    fn changing_the_selection_drops_the_question_but_not_the_streak() {
        let mut s = state();
        let mut rng = StdRng::seed_from_u64(4);
        s.ensure_question(&mut rng);
        let expected = s.quiz.question.as_ref().unwrap().correct.clone();
        s.quiz.input = expected;
        assert_eq!(s.submit_free_text(&mut rng), Some(Feedback::Correct));
        assert!(s.quiz.question.is_some());

        s.set_range(1, 3);
        assert!(s.quiz.question.is_none());
        assert_eq!(s.quiz.streak.count(), 1);

        s.ensure_question(&mut rng);
        let q = s.quiz.question.as_ref().unwrap();
        assert!(s.active_rows().contains(&q.plant));
    }

    #[test]
    fn same_range_keeps_the_question() {
        let mut s = state();
        let mut rng = StdRng::seed_from_u64(8);
        s.ensure_question(&mut rng);
        let before = s.quiz.question.clone();
        s.set_range(1, 5);
        s.set_list_filter(None);
        assert_eq!(s.quiz.question, before);
    }

    #[test]
    fn practice_follows_the_range() {
        let mut s = state();
        s.sync_practice();
        s.practice.advance();
        assert_eq!(s.practice.current(), Some(1));
        s.set_range(3, 5);
        s.sync_practice();
        assert_eq!(s.practice.current(), Some(2));
    }

    #[test]
    fn reload_drops_vanished_family_selection() {
        let mut s = state();
        s.set_family_filter(Some("Fagaceae".into()));
        s.families.select(Some("Fagaceae".into()));
        s.set_catalog(
            Catalog::new(vec![plant(1, "Berk", "Betulaceae", &[])], Vec::new()),
            PathBuf::from("other.xlsx"),
        );
        assert_eq!(s.filter.family, None);
        assert_eq!(s.families.selected, None);
        assert_eq!(s.filtered, vec![0]);
    }

    #[test]
    fn switching_mode_starts_a_fresh_question() {
        let mut s = state();
        let mut rng = StdRng::seed_from_u64(6);
        s.set_mode(Mode::MultipleChoice);
        s.ensure_question(&mut rng);
        s.quiz.choose_option(0);
        assert!(s.quiz.answered());

        s.set_mode(Mode::Expert);
        assert!(s.quiz.question.is_none());
        assert!(!s.quiz.answered());
        assert!(s.quiz.feedback.is_none());
    }

    #[test]
    fn empty_catalog_is_reported() {
        let mut s = AppState::new(AppConfig::default());
        s.set_catalog(Catalog::default(), PathBuf::from("leeg.xlsx"));
        assert!(s.status_message.as_deref().unwrap().contains("leeg.xlsx"));
        assert!(s.filtered.is_empty());
    }

    #[test]
    fn failed_load_sets_status() {
        let mut s = AppState::new(AppConfig::default());
        s.load(Path::new("/nonexistent/PlantenDrill.xlsx"));
        assert!(s.catalog.is_none());
        assert!(s.status_message.is_some());
    }

    #[test]
    fn config_problem_is_kept_next_to_load_errors() {
        let mut s = AppState::new(AppConfig::default());
        s.add_status("Fout in configuratie: parsing config file".into());
        assert_eq!(
            s.status_message.as_deref(),
            Some("Fout in configuratie: parsing config file")
        );

        s.load(Path::new("/nonexistent/PlantenDrill.xlsx"));
        s.add_status("Fout in configuratie".into());
        let msg = s.status_message.unwrap();
        assert!(msg.starts_with("Fout in configuratie | Fout: "));
    }
}
