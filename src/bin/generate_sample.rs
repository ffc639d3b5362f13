//! Write a small demonstration workbook with both worksheets.
//!
//! Usage: `generate_sample [output.xlsx]` (default `sample_PlantenDrill.xlsx`).

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook};

const PLANT_HEADERS: [&str; 22] = [
    "Nummer",
    "Geslacht",
    "Soort",
    "Varieteit",
    "Cultivar",
    "Nederlandse naam",
    "Familie",
    "Extra info",
    "Inheems in West-Europa",
    "Invasieve exoot",
    "Signaalplant",
    "Boom",
    "Struik",
    "Vaste plant",
    "Kruid",
    "Gras",
    "Bolgewas",
    "Knolgewas",
    "Opmerkelijke wortels",
    "Foto 1",
    "Foto 2",
    "Foto 3",
];

/// Number, genus, species, variety, cultivar, Dutch name, family, note,
/// marked list columns, photos.
type PlantRow = (
    u32,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static [&'static str],
    &'static [&'static str],
);

const PLANTS: [PlantRow; 12] = [
    (
        1,
        "Quercus",
        "robur",
        "",
        "",
        "Zomereik",
        "Fagaceae",
        "Eikels op lange steeltjes.",
        &["Inheems in West-Europa", "Boom"],
        &["quercus_robur_1.jpg", "quercus_robur_2.jpg"],
    ),
    (
        2,
        "Fagus",
        "sylvatica",
        "",
        "Purpurea",
        "Rode beuk",
        "Fagaceae",
        "",
        &["Boom"],
        &["fagus_purpurea.jpg"],
    ),
    (
        3,
        "Betula",
        "pendula",
        "",
        "",
        "Ruwe berk",
        "Betulaceae",
        "Witte schors, hangende twijgen.",
        &["Inheems in West-Europa", "Boom"],
        &[],
    ),
    (
        4,
        "Corylus",
        "avellana",
        "",
        "",
        "Hazelaar",
        "Betulaceae",
        "Katjes in februari.",
        &["Inheems in West-Europa", "Struik"],
        &["corylus.jpg"],
    ),
    (
        5,
        "Pinus",
        "nigra",
        "maritima",
        "",
        "Corsicaanse den",
        "Pinaceae",
        "Naalden per twee.",
        &["Boom"],
        &[],
    ),
    (
        6,
        "Prunus",
        "serotina",
        "",
        "",
        "Amerikaanse vogelkers",
        "Rosaceae",
        "",
        &["Invasieve exoot", "Struik", "Boom"],
        &["prunus_serotina.jpg"],
    ),
    (
        7,
        "Crataegus",
        "monogyna",
        "",
        "",
        "Eenstijlige meidoorn",
        "Rosaceae",
        "Eén stijl per bloem.",
        &["Inheems in West-Europa", "Struik"],
        &[],
    ),
    (
        8,
        "Urtica",
        "dioica",
        "",
        "",
        "Grote brandnetel",
        "Urticaceae",
        "Wijst op stikstofrijke bodem.",
        &["Inheems in West-Europa", "Signaalplant", "Kruid"],
        &[],
    ),
    (
        9,
        "Festuca",
        "rubra",
        "",
        "",
        "Rood zwenkgras",
        "Poaceae",
        "",
        &["Gras"],
        &[],
    ),
    (
        10,
        "Tulipa",
        "",
        "",
        "Queen of Night",
        "Tulp",
        "Liliaceae",
        "",
        &["Bolgewas"],
        &["tulipa.jpg"],
    ),
    (
        11,
        "Geranium",
        "",
        "",
        "Rozanne",
        "Ooievaarsbek",
        "Geraniaceae",
        "Bloeit de hele zomer.",
        &["Vaste plant"],
        &[],
    ),
    (
        12,
        "Taraxacum",
        "officinale",
        "",
        "",
        "Paardenbloem",
        "Asteraceae",
        "Penwortel.",
        &["Inheems in West-Europa", "Kruid", "Opmerkelijke wortels"],
        &[],
    ),
];

const FAMILIES: [[&str; 5]; 6] = [
    [
        "Fagaceae",
        "Napjesdragersfamilie.",
        "Verspreid, enkelvoudig.",
        "Eenslachtig, katjes.",
        "Nootje in een napje.",
    ],
    [
        "Betulaceae",
        "Berkenfamilie.",
        "Verspreid, gezaagd.",
        "Katjes, windbestuiving.",
        "Nootje of gevleugeld nootje.",
    ],
    ["Pinaceae", "Dennenfamilie.", "Naalden.", "Kegels.", "Kegel met gevleugelde zaden."],
    [
        "Rosaceae",
        "Rozenfamilie.",
        "Verspreid, met steunblaadjes.",
        "Vijftallig.",
        "Steenvrucht, appel of bottel.",
    ],
    ["Poaceae", "Grassenfamilie.", "Lijnvormig met bladschede.", "Aartjes.", "Graanvrucht."],
    [
        "Asteraceae",
        "Composietenfamilie.",
        "Zeer divers.",
        "Hoofdjes van buis- en lintbloemen.",
        "Nootje met pappus.",
    ],
];

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_PlantenDrill.xlsx".to_string());

    let bold = Format::new().set_bold();
    let mut workbook = Workbook::new();

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Planten")?;
        for (col, header) in PLANT_HEADERS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *header, &bold)?;
        }

        for (i, plant) in PLANTS.iter().enumerate() {
            let row = i as u32 + 1;
            let (number, genus, species, variety, cultivar, dutch, family, note, lists, photos) =
                *plant;
            sheet.write_number(row, 0, f64::from(number))?;
            for (col, text) in [genus, species, variety, cultivar, dutch, family, note]
                .into_iter()
                .enumerate()
            {
                if !text.is_empty() {
                    sheet.write_string(row, col as u16 + 1, text)?;
                }
            }
            for list in lists {
                let col = PLANT_HEADERS
                    .iter()
                    .position(|h| h == list)
                    .with_context(|| format!("unknown list column {list}"))?;
                sheet.write_string(row, col as u16, "x")?;
            }
            for (k, photo) in photos.iter().enumerate() {
                sheet.write_string(row, (PLANT_HEADERS.len() - 3 + k) as u16, *photo)?;
            }
        }
    }

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Families")?;
        for (col, header) in ["Familie", "Beschrijving", "Bladeren", "Bloemen", "Vruchten"]
            .iter()
            .enumerate()
        {
            sheet.write_string_with_format(0, col as u16, *header, &bold)?;
        }
        for (i, family) in FAMILIES.iter().enumerate() {
            for (col, text) in family.iter().enumerate() {
                sheet.write_string(i as u32 + 1, col as u16, *text)?;
            }
        }
    }

    workbook
        .save(&output_path)
        .with_context(|| format!("writing {output_path}"))?;

    println!(
        "Wrote {} plants and {} families to {output_path}",
        PLANTS.len(),
        FAMILIES.len()
    );
    Ok(())
}
