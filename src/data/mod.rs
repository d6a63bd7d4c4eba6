/// Data layer: core table types and loading.
///
/// Architecture:
/// ```text
///  Titanic-Dataset.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → DataTable
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ DataTable  │  Vec<Column>, one inferred dtype per column
///   └───────────┘
///        │
///        ▼
///     stats / charts
/// ```

pub mod loader;
pub mod model;
