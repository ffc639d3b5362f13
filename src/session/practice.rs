// ---------------------------------------------------------------------------
// PracticeSession – sequential browse through the active range
// ---------------------------------------------------------------------------

/// Cursor over the plants of the active range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PracticeSession {
    /// The range the cursor belongs to (catalog indices).
    rows: Vec<usize>,
    index: usize,
}

impl PracticeSession {
    /// Follow the active range; a different range restarts at its first plant.
    pub fn sync(&mut self, rows: &[usize]) {
        if self.rows != rows {
            self.rows = rows.to_vec();
            self.index = 0;
        }
    }

    /// Catalog index of the current plant.
    pub fn current(&self) -> Option<usize> {
        self.rows.get(self.index).copied()
    }

    /// 1-based position and total, as in "Plant 3 van 12".
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.rows.len())
    }

    /// Go to the next plant, wrapping to the first after the last.
    pub fn advance(&mut self) {
        if self.index + 1 < self.rows.len() {
            self.index += 1;
        } else {
            self.index = 0;
        }
    }
}

// ---------------------------------------------------------------------------
// FamilyBrowser – the families page
// ---------------------------------------------------------------------------

/// Selection and cursor of the families page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyBrowser {
    /// `None` browses all families one by one.
    pub selected: Option<String>,
    index: usize,
}

impl FamilyBrowser {
    /// Current position, clamped to a list of `total` families.
    pub fn index(&self, total: usize) -> usize {
        self.index.min(total.saturating_sub(1))
    }

    pub fn previous(&mut self, total: usize) {
        self.index = self.index(total).saturating_sub(1);
    }

    pub fn next(&mut self, total: usize) {
        self.index = (self.index(total) + 1).min(total.saturating_sub(1));
    }

    pub fn select(&mut self, family: Option<String>) {
        self.selected = family;
    }
}
