//! Console reporting: the fixed sequence of text blocks the program writes
//! to stdout. Everything here is program output, not diagnostics; the
//! narrative statements at the end are literal text, never derived from the
//! current run.

use crate::data::model::DataTable;
use crate::stats::corr::CorrMatrix;
use crate::stats::describe::{ColumnInfo, ColumnSummary};
use crate::stats::group::GroupedRates;

const STAT_ROWS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// The eight fixed observations. Static text, never recomputed from the
/// current run's data.
const INFERENCES: [&str; 8] = [
    "1. Age distribution appears slightly right-skewed, with a peak around 20-30 years.",
    "2. Fare distribution is highly right-skewed, indicating many passengers paid low fares, and a few paid very high fares (outliers).",
    "3. 'Survived' is a binary variable (0=No, 1=Yes).",
    "4. 'Sex' has a strong relationship with 'Survived': Females had a significantly higher survival rate than males.",
    "5. 'Pclass' also shows a strong relationship with 'Survived': Passengers in higher classes (1st class) had a much higher survival rate.",
    "6. 'SibSp' and 'Parch' distributions show that most passengers traveled alone or with very few siblings/spouses/parents/children.",
    "7. 'Embarked' shows that most passengers embarked from 'S' (Southampton).",
    "8. The correlation matrix confirms relationships: 'Fare' has a moderate positive correlation with 'Survived', and 'Pclass' has a moderate negative correlation with 'Survived' (higher class number means lower class, so negative correlation with survival makes sense).",
];

/// The diagnostic for the one recognized error condition.
pub const MISSING_FILE_DIAGNOSTIC: &str =
    "Error: Titanic-Dataset.csv not found. Please ensure the file is in the correct directory.";

fn fmt_stat(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{v:.6}")
    }
}

/// Descriptive statistics, one column per numeric column, one row per
/// statistic (the transposed layout of `df.describe()`).
pub fn print_describe(summaries: &[ColumnSummary]) {
    print!("{:<8}", "");
    for s in summaries {
        print!(" {:>12}", s.name);
    }
    println!();

    for stat in STAT_ROWS {
        print!("{stat:<8}");
        for s in summaries {
            let value = match stat {
                "count" => format!("{:.6}", s.count as f64),
                "mean" => fmt_stat(s.mean),
                "std" => fmt_stat(s.std),
                "min" => fmt_stat(s.min),
                "25%" => fmt_stat(s.q1),
                "50%" => fmt_stat(s.median),
                "75%" => fmt_stat(s.q3),
                _ => fmt_stat(s.max),
            };
            print!(" {value:>12}");
        }
        println!();
    }
}

/// Schema report: per-column non-null count and inferred dtype.
pub fn print_info(table: &DataTable, infos: &[ColumnInfo]) {
    println!(
        "DataTable: {} entries, {} columns",
        table.len(),
        table.columns.len()
    );
    println!(" #   {:<12} {:>14}  {}", "Column", "Non-Null Count", "Dtype");
    for (idx, info) in infos.iter().enumerate() {
        println!(
            " {idx:<3} {:<12} {:>8} non-null  {}",
            info.name, info.non_null, info.dtype
        );
    }
}

/// Missing-entry counts, one line per column in table order.
pub fn print_missing(counts: &[(String, usize)]) {
    for (name, count) in counts {
        println!("{name:<12} {count}");
    }
}

/// Correlation matrix with row and column labels.
pub fn print_corr(matrix: &CorrMatrix) {
    print!("{:<10}", "");
    for label in &matrix.labels {
        print!(" {label:>10}");
    }
    println!();
    for (i, label) in matrix.labels.iter().enumerate() {
        print!("{label:<10}");
        for j in 0..matrix.len() {
            let v = matrix.get(i, j);
            if v.is_nan() {
                print!(" {:>10}", "NaN");
            } else {
                print!(" {v:>10.6}");
            }
        }
        println!();
    }
}

/// Grouped survival rates, one line per group key.
pub fn print_grouped(rates: &GroupedRates) {
    println!("{:>8}  Survived", rates.by);
    for (key, rate) in &rates.rows {
        println!("{:>8}  {rate:.6}", key.to_string());
    }
}

/// The eight fixed narrative statements.
pub fn print_inferences() {
    for line in INFERENCES {
        println!("{line}");
    }
}
