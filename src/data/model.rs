use std::collections::{BTreeSet, HashMap};
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single worksheet cell
// ---------------------------------------------------------------------------

/// A dynamically-typed worksheet cell, decoupled from the spreadsheet reader.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Empty,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            // Whole numbers typed into a text column come back as floats.
            CellValue::Float(v) if v.fract() == 0.0 && v.is_finite() => write!(f, "{v:.0}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Empty => Ok(()),
        }
    }
}

impl CellValue {
    /// Build a cell from raw text; blank text becomes [`CellValue::Empty`].
    pub fn text(s: &str) -> Self {
        if s.trim().is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(s.to_string())
        }
    }

    /// Trimmed textual content, `None` for empty cells.
    pub fn as_text(&self) -> Option<String> {
        let s = self.to_string();
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Integer coercion used for the sequence number column.
    ///
    /// Floats are truncated, numeric text is parsed, everything else is `None`.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Integer(i) => Some(*i),
            CellValue::Float(v) if v.is_finite() => Some(v.trunc() as i64),
            CellValue::Text(s) => {
                let s = s.trim();
                s.parse::<i64>().ok().or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|v| v.is_finite())
                        .map(|v| v.trunc() as i64)
                })
            }
            _ => None,
        }
    }

    /// Whether the cell carries the `x` marker of a list column.
    pub fn is_marked(&self) -> bool {
        matches!(self, CellValue::Text(s) if s.trim().eq_ignore_ascii_case("x"))
    }
}

// ---------------------------------------------------------------------------
// Category – the boolean list columns of the plant sheet
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    NativeWestEurope,
    InvasiveExotic,
    Indicator,
    Tree,
    Shrub,
    Perennial,
    Herb,
    Grass,
    Bulb,
    Tuber,
    NotableRoots,
}

impl Category {
    /// All categories in the order the sidebar lists them.
    pub const ALL: [Category; 11] = [
        Category::NativeWestEurope,
        Category::InvasiveExotic,
        Category::Indicator,
        Category::Tree,
        Category::Shrub,
        Category::Perennial,
        Category::Herb,
        Category::Grass,
        Category::Bulb,
        Category::Tuber,
        Category::NotableRoots,
    ];

    /// Column header in the plant sheet, also used as the list label.
    pub fn column(self) -> &'static str {
        match self {
            Category::NativeWestEurope => "Inheems in West-Europa",
            Category::InvasiveExotic => "Invasieve exoot",
            Category::Indicator => "Signaalplant",
            Category::Tree => "Boom",
            Category::Shrub => "Struik",
            Category::Perennial => "Vaste plant",
            Category::Herb => "Kruid",
            Category::Grass => "Gras",
            Category::Bulb => "Bolgewas",
            Category::Tuber => "Knolgewas",
            Category::NotableRoots => "Opmerkelijke wortels",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// Plant – one row of the plant sheet
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Plant {
    /// Sequence number ("Nummer"); rows are ordered by it.
    pub number: i64,
    pub genus: Option<String>,
    pub species: Option<String>,
    pub variety: Option<String>,
    pub cultivar: Option<String>,
    /// Derived from genus, species, variety and cultivar.
    pub scientific_name: String,
    /// Dutch common name, empty when the sheet has none.
    pub dutch_name: String,
    pub family: Option<String>,
    /// Free-text note, prefixed with the family when both are known.
    pub extra_info: Option<String>,
    pub categories: BTreeSet<Category>,
    /// Up to three photo filenames, relative to the photo base URL.
    pub photos: Vec<String>,
}

impl Plant {
    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// One line per name part, e.g. "Geslacht: Acer".
    pub fn name_parts(&self) -> String {
        [
            ("Geslacht", &self.genus),
            ("Soort", &self.species),
            ("Varieteit", &self.variety),
            ("Cultivar", &self.cultivar),
        ]
        .iter()
        .filter_map(|(label, part)| part.as_ref().map(|p| format!("{label}: {p}")))
        .collect::<Vec<_>>()
        .join("\n")
    }
}

/// Join the name parts as `Genus species var. variety 'Cultivar'`.
pub fn scientific_name(
    genus: Option<&str>,
    species: Option<&str>,
    variety: Option<&str>,
    cultivar: Option<&str>,
) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(4);
    if let Some(g) = genus {
        parts.push(g.to_string());
    }
    if let Some(s) = species {
        parts.push(s.to_string());
    }
    if let Some(v) = variety {
        parts.push(format!("var. {v}"));
    }
    if let Some(c) = cultivar {
        parts.push(format!("'{c}'"));
    }
    parts.join(" ")
}

/// Prefix the note with the family name: `Familie: {family}. {note}`.
pub fn note_with_family(family: &str, note: Option<&str>) -> String {
    match note {
        Some(note) => format!("Familie: {family}. {note}"),
        None => format!("Familie: {family}."),
    }
}

// ---------------------------------------------------------------------------
// Family – one row of the family sheet
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    pub name: String,
    pub description: String,
    pub leaves: String,
    pub flowers: String,
    pub fruits: String,
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded workbook
// ---------------------------------------------------------------------------

/// Both worksheets, immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Plants sorted by sequence number.
    pub plants: Vec<Plant>,
    /// Families in sheet order.
    pub families: Vec<Family>,
    /// Sorted distinct family names used by the plants.
    pub plant_families: Vec<String>,
}

impl Catalog {
    pub fn new(plants: Vec<Plant>, families: Vec<Family>) -> Self {
        let plant_families: BTreeSet<String> =
            plants.iter().filter_map(|p| p.family.clone()).collect();
        Catalog {
            plants,
            families,
            plant_families: plant_families.into_iter().collect(),
        }
    }

    /// Number of plants.
    pub fn len(&self) -> usize {
        self.plants.len()
    }

    /// Whether the plant sheet produced no rows.
    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// Sorted distinct family names of the family sheet.
    pub fn family_names(&self) -> Vec<&str> {
        let names: BTreeSet<&str> = self.families.iter().map(|f| f.name.as_str()).collect();
        names.into_iter().collect()
    }

    /// All family sheet rows with the given name.
    pub fn families_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Family> + 'a {
        self.families.iter().filter(move |f| f.name == name)
    }

    /// Plant count per family name, for the family overview.
    pub fn plants_per_family(&self) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for family in self.plants.iter().filter_map(|p| p.family.as_deref()) {
            *counts.entry(family).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scientific_name_joins_present_parts_in_order() {
        assert_eq!(
            scientific_name(Some("Acer"), Some("palmatum"), None, Some("Bloodgood")),
            "Acer palmatum 'Bloodgood'"
        );
        assert_eq!(
            scientific_name(Some("Pinus"), Some("nigra"), Some("maritima"), None),
            "Pinus nigra var. maritima"
        );
        assert_eq!(scientific_name(Some("Quercus"), None, None, None), "Quercus");
        assert_eq!(scientific_name(None, None, None, None), "");
    }

    #[test]
    fn note_is_prefixed_with_family() {
        assert_eq!(
            note_with_family("Fagaceae", Some("Eikels.")),
            "Familie: Fagaceae. Eikels."
        );
        assert_eq!(note_with_family("Fagaceae", None), "Familie: Fagaceae.");
    }

    #[test]
    fn integer_coercion() {
        assert_eq!(CellValue::Integer(7).as_integer(), Some(7));
        assert_eq!(CellValue::Float(12.0).as_integer(), Some(12));
        assert_eq!(CellValue::Float(3.9).as_integer(), Some(3));
        assert_eq!(CellValue::text(" 42 ").as_integer(), Some(42));
        assert_eq!(CellValue::text("4.0").as_integer(), Some(4));
        assert_eq!(CellValue::text("twaalf").as_integer(), None);
        assert_eq!(CellValue::Float(f64::NAN).as_integer(), None);
        assert_eq!(CellValue::Empty.as_integer(), None);
    }

    #[test]
    fn marker_and_text() {
        assert!(CellValue::text("x").is_marked());
        assert!(CellValue::text(" X ").is_marked());
        assert!(!CellValue::text("ja").is_marked());
        assert!(!CellValue::Empty.is_marked());
        assert_eq!(CellValue::text("   "), CellValue::Empty);
        assert_eq!(CellValue::Float(3.0).as_text().as_deref(), Some("3"));
        assert_eq!(CellValue::text("  Eik ").as_text().as_deref(), Some("Eik"));
    }

    #[test]
    fn marker_is_a_lone_x_in_any_case() {
        for marked in ["x", "X", " x", "x ", "\tX\n"] {
            assert!(CellValue::text(marked).is_marked(), "{marked:?}");
        }
        for unmarked in ["xx", "x x", "ja", "1", "✓"] {
            assert!(!CellValue::text(unmarked).is_marked(), "{unmarked:?}");
        }
        assert!(!CellValue::Bool(true).is_marked());
        assert!(!CellValue::Integer(1).is_marked());
    }

    #[test]
    fn catalog_collects_sorted_families() {
        let plant = |n: i64, family: Option<&str>| Plant {
            number: n,
            genus: None,
            species: None,
            variety: None,
            cultivar: None,
            scientific_name: String::new(),
            dutch_name: String::new(),
            family: family.map(str::to_string),
            extra_info: None,
            categories: BTreeSet::new(),
            photos: Vec::new(),
        };
        let catalog = Catalog::new(
            vec![
                plant(1, Some("Rosaceae")),
                plant(2, None),
                plant(3, Some("Betulaceae")),
                plant(4, Some("Rosaceae")),
            ],
            Vec::new(),
        );
        assert_eq!(catalog.plant_families, vec!["Betulaceae", "Rosaceae"]);
        assert!(catalog.plants[0].name_parts().is_empty());

        let mut acer = plant(5, None);
        acer.genus = Some("Acer".into());
        acer.cultivar = Some("Bloodgood".into());
        assert_eq!(acer.name_parts(), "Geslacht: Acer\nCultivar: Bloodgood");
        assert_eq!(catalog.plants_per_family().get("Rosaceae"), Some(&2));
    }
}
