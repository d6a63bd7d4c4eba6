/// Statistics layer: everything computed from the loaded table.
///
/// ```text
///   DataTable
///      │
///      ├── describe   summary statistics, schema report, missing counts
///      ├── impute     median / mode fill for Age and Embarked (in place)
///      ├── corr       pairwise-complete Pearson correlation matrix
///      └── group      mean survival rate per group key
/// ```

pub mod corr;
pub mod describe;
pub mod group;
pub mod impute;
