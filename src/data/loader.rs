use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Reader};

use super::model::{
    note_with_family, scientific_name, Catalog, Category, CellValue, Family, Plant,
};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Structural problems with a worksheet.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("worksheet '{sheet}' not found (available: {available})")]
    MissingSheet { sheet: String, available: String },
    #[error("worksheet '{0}' has no header row")]
    NoHeader(String),
    #[error("worksheet '{sheet}' has no '{column}' column")]
    MissingColumn { sheet: String, column: &'static str },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load both worksheets of the plant workbook.
///
/// Any format `calamine` recognises by extension works (`.xlsx`, `.xls`,
/// `.ods`).
pub fn load_workbook(path: &Path, plant_sheet: &str, family_sheet: &str) -> Result<Catalog> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("opening workbook {}", path.display()))?;
    let available = workbook.sheet_names().join(", ");

    let mut read_sheet = |name: &str| -> Result<SheetTable> {
        if !workbook.sheet_names().iter().any(|s| s == name) {
            return Err(SheetError::MissingSheet {
                sheet: name.to_string(),
                available: available.clone(),
            }
            .into());
        }
        let range = workbook
            .worksheet_range(name)
            .with_context(|| format!("reading worksheet '{name}'"))?;
        let mut rows = range
            .rows()
            .map(|row| row.iter().map(cell_from_data).collect::<Vec<_>>());
        let headers = rows
            .next()
            .ok_or_else(|| SheetError::NoHeader(name.to_string()))?
            .iter()
            .map(|c| c.as_text().unwrap_or_default())
            .collect();
        Ok(SheetTable::new(name, headers, rows.collect()))
    };

    let plants = plants_from_sheet(&read_sheet(plant_sheet)?)?;
    let families = families_from_sheet(&read_sheet(family_sheet)?)?;

    log::info!(
        "Loaded {} plants and {} families from {}",
        plants.len(),
        families.len(),
        path.display()
    );
    Ok(Catalog::new(plants, families))
}

fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::text(s),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Empty | Data::Error(_) => CellValue::Empty,
        other => CellValue::text(&other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// SheetTable – header row plus data rows
// ---------------------------------------------------------------------------

/// A worksheet reduced to a header row and rows of [`CellValue`].
#[derive(Debug, Clone)]
pub struct SheetTable {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetTable {
    pub fn new(name: &str, headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        SheetTable {
            name: name.to_string(),
            headers,
            rows,
        }
    }

    /// Index of the first column whose header matches one of `names`.
    pub fn column(&self, names: &[&str]) -> Option<usize> {
        names
            .iter()
            .find_map(|name| self.headers.iter().position(|h| h == name))
    }

    fn require(&self, column: &'static str) -> Result<usize, SheetError> {
        self.column(&[column]).ok_or(SheetError::MissingColumn {
            sheet: self.name.clone(),
            column,
        })
    }

    /// Trimmed text of a cell; short rows read as empty.
    fn text(&self, row: &[CellValue], col: Option<usize>) -> Option<String> {
        col.and_then(|c| row.get(c)).and_then(CellValue::as_text)
    }
}

// ---------------------------------------------------------------------------
// Plant sheet
// ---------------------------------------------------------------------------

/// Convert the plant sheet into plants sorted by sequence number.
///
/// Rows whose number is missing or not numeric are dropped. Without a
/// `Nummer` column the rows are numbered 1..n in sheet order.
pub fn plants_from_sheet(sheet: &SheetTable) -> Result<Vec<Plant>, SheetError> {
    let genus_col = sheet.column(&["Geslacht"]);
    let species_col = sheet.column(&["Soort"]);
    let variety_col = sheet.column(&["Varieteit"]);
    let cultivar_col = sheet.column(&["Cultivar"]);
    let dutch_col = sheet.column(&["Nederlandse naam", "Nederlands"]);
    let family_col = sheet.column(&["Familie"]);
    let info_col = sheet.column(&["Extra info"]);
    let number_col = sheet.column(&["Nummer"]);
    let photo_cols: Vec<usize> = ["Foto 1", "Foto 2", "Foto 3"]
        .iter()
        .filter_map(|c| sheet.column(&[c]))
        .collect();
    let category_cols: Vec<(Category, usize)> = Category::ALL
        .iter()
        .filter_map(|&cat| sheet.column(&[cat.column()]).map(|c| (cat, c)))
        .collect();

    if genus_col.is_none() && species_col.is_none() {
        log::warn!(
            "{}: no \"Geslacht\" or \"Soort\" column, scientific names stay empty",
            sheet.name
        );
    }

    let mut plants = Vec::with_capacity(sheet.rows.len());
    let mut dropped = 0usize;

    for (row_no, row) in sheet.rows.iter().enumerate() {
        let number = match number_col {
            Some(c) => row.get(c).and_then(CellValue::as_integer),
            None => Some(row_no as i64 + 1),
        };
        let Some(number) = number else {
            dropped += 1;
            log::debug!("{}: row {} has no usable number, skipped", sheet.name, row_no + 2);
            continue;
        };

        let genus = sheet.text(row, genus_col);
        let species = sheet.text(row, species_col);
        let variety = sheet.text(row, variety_col);
        let cultivar = sheet.text(row, cultivar_col);
        let family = sheet.text(row, family_col);
        let note = sheet.text(row, info_col);

        // The family prefix needs both columns to exist in the sheet.
        let extra_info = match (&family, family_col.and(info_col)) {
            (Some(f), Some(_)) => Some(note_with_family(f, note.as_deref())),
            _ => note,
        };

        let categories: BTreeSet<Category> = category_cols
            .iter()
            .filter(|(_, c)| row.get(*c).is_some_and(CellValue::is_marked))
            .map(|(cat, _)| *cat)
            .collect();

        let photos = photo_cols
            .iter()
            .filter_map(|&c| sheet.text(row, Some(c)))
            .collect();

        plants.push(Plant {
            number,
            scientific_name: scientific_name(
                genus.as_deref(),
                species.as_deref(),
                variety.as_deref(),
                cultivar.as_deref(),
            ),
            genus,
            species,
            variety,
            cultivar,
            dutch_name: sheet.text(row, dutch_col).unwrap_or_default(),
            family,
            extra_info,
            categories,
            photos,
        });
    }

    if dropped > 0 {
        log::info!("{}: dropped {dropped} rows without a number", sheet.name);
    }

    // Stable: equal numbers keep sheet order.
    plants.sort_by_key(|p| p.number);
    Ok(plants)
}

// ---------------------------------------------------------------------------
// Family sheet
// ---------------------------------------------------------------------------

/// Convert the family sheet; rows without a family name are skipped.
pub fn families_from_sheet(sheet: &SheetTable) -> Result<Vec<Family>, SheetError> {
    let name_col = sheet.require("Familie")?;
    let description_col = sheet.column(&["Beschrijving"]);
    let leaves_col = sheet.column(&["Bladeren"]);
    let flowers_col = sheet.column(&["Bloemen"]);
    let fruits_col = sheet.column(&["Vruchten"]);

    Ok(sheet
        .rows
        .iter()
        .filter_map(|row| {
            let name = sheet.text(row, Some(name_col))?;
            Some(Family {
                name,
                description: sheet.text(row, description_col).unwrap_or_default(),
                leaves: sheet.text(row, leaves_col).unwrap_or_default(),
                flowers: sheet.text(row, flowers_col).unwrap_or_default(),
                fruits: sheet.text(row, fruits_col).unwrap_or_default(),
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> CellValue {
        CellValue::text(s)
    }

    fn plant_sheet(headers: &[&str], rows: Vec<Vec<CellValue>>) -> SheetTable {
        SheetTable::new(
            "Planten",
            headers.iter().map(|h| h.to_string()).collect(),
            rows,
        )
    }

    const HEADERS: [&str; 9] = [
        "Nummer",
        "Geslacht",
        "Soort",
        "Varieteit",
        "Cultivar",
        "Nederlandse naam",
        "Familie",
        "Extra info",
        "Boom",
    ];

    #[test]
    fn derives_names_and_notes() {
        let sheet = plant_sheet(
            &HEADERS,
            vec![vec![
                CellValue::Float(1.0),
                t("Fagus"),
                t("sylvatica"),
                t("purpurea"),
                t("Dawyck"),
                t("Rode beuk"),
                t("Fagaceae"),
                t("Bladeren glanzend."),
                t("x"),
            ]],
        );
        let plants = plants_from_sheet(&sheet).unwrap();
        assert_eq!(plants.len(), 1);
        let p = &plants[0];
        assert_eq!(p.scientific_name, "Fagus sylvatica var. purpurea 'Dawyck'");
        assert_eq!(p.dutch_name, "Rode beuk");
        assert_eq!(
            p.extra_info.as_deref(),
            Some("Familie: Fagaceae. Bladeren glanzend.")
        );
        assert!(p.has_category(Category::Tree));
        assert!(!p.has_category(Category::Shrub));
    }

    #[test]
    fn family_without_note_still_yields_prefix() {
        let sheet = plant_sheet(
            &HEADERS,
            vec![vec![
                CellValue::Integer(3),
                t("Betula"),
                t("pendula"),
                CellValue::Empty,
                CellValue::Empty,
                t("Ruwe berk"),
                t("Betulaceae"),
                CellValue::Empty,
                CellValue::Empty,
            ]],
        );
        let plants = plants_from_sheet(&sheet).unwrap();
        assert_eq!(plants[0].extra_info.as_deref(), Some("Familie: Betulaceae."));
        assert_eq!(plants[0].scientific_name, "Betula pendula");
    }

    #[test]
    fn drops_rows_without_number_and_sorts() {
        let row = |n: CellValue, genus: &str| {
            vec![
                n,
                t(genus),
                t("sp"),
                CellValue::Empty,
                CellValue::Empty,
                t(genus),
                CellValue::Empty,
                CellValue::Empty,
                CellValue::Empty,
            ]
        };
        let sheet = plant_sheet(
            &HEADERS,
            vec![
                row(CellValue::Integer(3), "Carpinus"),
                row(t("?"), "Nowhere"),
                row(CellValue::Float(1.0), "Acer"),
                row(CellValue::Empty, "Missing"),
                row(t("2"), "Betula"),
            ],
        );
        let plants = plants_from_sheet(&sheet).unwrap();
        let genera: Vec<_> = plants.iter().map(|p| p.genus.as_deref().unwrap()).collect();
        assert_eq!(genera, vec!["Acer", "Betula", "Carpinus"]);
        // No family column value: the note stays absent.
        assert!(plants.iter().all(|p| p.extra_info.is_none()));
    }

    #[test]
    fn numbers_rows_when_column_is_absent() {
        let sheet = plant_sheet(
            &["Geslacht", "Nederlands", "Foto 1", "Foto 2", "Foto 3"],
            vec![
                vec![t("Ilex"), t("Hulst"), t(" ilex.jpg "), CellValue::Empty, t("ilex2.jpg")],
                vec![
                    t("Hedera"),
                    t("Klimop"),
                    CellValue::Empty,
                    CellValue::Empty,
                    CellValue::Empty,
                ],
            ],
        );
        let plants = plants_from_sheet(&sheet).unwrap();
        assert_eq!(plants[0].number, 1);
        assert_eq!(plants[1].number, 2);
        assert_eq!(plants[0].dutch_name, "Hulst");
        assert_eq!(plants[0].photos, vec!["ilex.jpg", "ilex2.jpg"]);
        assert!(plants[1].photos.is_empty());
    }

    #[test]
    fn note_untouched_without_family_column() {
        let sheet = plant_sheet(
            &["Geslacht", "Extra info"],
            vec![vec![t("Taxus"), t("Giftig.")]],
        );
        let plants = plants_from_sheet(&sheet).unwrap();
        assert_eq!(plants[0].extra_info.as_deref(), Some("Giftig."));
    }

    #[test]
    fn plant_sheet_without_name_columns_still_loads() {
        let sheet = plant_sheet(
            &["Nummer", "Nederlandse naam"],
            vec![vec![CellValue::Integer(1), t("Klimop")]],
        );
        let plants = plants_from_sheet(&sheet).unwrap();
        assert_eq!(plants.len(), 1);
        assert_eq!(plants[0].dutch_name, "Klimop");
        assert_eq!(plants[0].scientific_name, "");
    }

    #[test]
    fn family_rows_without_name_are_skipped() {
        let sheet = SheetTable::new(
            "Families",
            ["Familie", "Beschrijving", "Bladeren", "Bloemen", "Vruchten"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            vec![
                vec![t("Rosaceae"), t("Rozenfamilie"), t("Verspreid"), t("5-tallig"), t("Bottel")],
                vec![CellValue::Empty, t("wees")],
                vec![t("Poaceae")],
            ],
        );
        let families = families_from_sheet(&sheet).unwrap();
        assert_eq!(families.len(), 2);
        assert_eq!(families[0].fruits, "Bottel");
        assert_eq!(families[1].name, "Poaceae");
        assert_eq!(families[1].description, "");
    }

    #[test]
    fn loads_a_real_workbook() {
        use rust_xlsxwriter::Workbook;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drill.xlsx");

        let mut workbook = Workbook::new();
        {
            let sheet = workbook.add_worksheet();
            sheet.set_name("Planten").unwrap();
            for (c, h) in ["Nummer", "Geslacht", "Soort", "Nederlandse naam", "Familie", "Struik"]
                .iter()
                .enumerate()
            {
                sheet.write_string(0, c as u16, *h).unwrap();
            }
            sheet.write_number(1, 0, 2.0).unwrap();
            sheet.write_string(1, 1, "Corylus").unwrap();
            sheet.write_string(1, 2, "avellana").unwrap();
            sheet.write_string(1, 3, "Hazelaar").unwrap();
            sheet.write_string(1, 4, "Betulaceae").unwrap();
            sheet.write_string(1, 5, "x").unwrap();
            sheet.write_number(2, 0, 1.0).unwrap();
            sheet.write_string(2, 1, "Sambucus").unwrap();
            sheet.write_string(2, 2, "nigra").unwrap();
            sheet.write_string(2, 3, "Gewone vlier").unwrap();
            sheet.write_string(2, 4, "Adoxaceae").unwrap();
        }
        {
            let sheet = workbook.add_worksheet();
            sheet.set_name("Families").unwrap();
            sheet.write_string(0, 0, "Familie").unwrap();
            sheet.write_string(0, 1, "Beschrijving").unwrap();
            sheet.write_string(1, 0, "Betulaceae").unwrap();
            sheet.write_string(1, 1, "Berkenfamilie").unwrap();
        }
        workbook.save(&path).unwrap();

        let catalog = load_workbook(&path, "Planten", "Families").unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.plants[0].scientific_name, "Sambucus nigra");
        assert_eq!(catalog.plants[1].number, 2);
        assert!(catalog.plants[1].has_category(Category::Shrub));
        assert_eq!(catalog.plant_families, vec!["Adoxaceae", "Betulaceae"]);
        assert_eq!(catalog.families[0].description, "Berkenfamilie");

        let err = load_workbook(&path, "Planten", "Soorten").unwrap_err();
        assert!(err.to_string().contains("Soorten"));
    }
}
