/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  PlantenDrill.xlsx  ("Planten" + "Families")
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  worksheet → SheetTable → Vec<Plant>, Vec<Family>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Catalog  │  plants sorted by number, family index
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  list + family predicates, number range → indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
