use crate::data::model::{DataTable, Dtype};

// ---------------------------------------------------------------------------
// Scalar helpers shared by the whole stats layer
// ---------------------------------------------------------------------------

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n − 1 denominator).
pub fn std_dev(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    (ss / (n - 1) as f64).sqrt()
}

/// Quantile by linear interpolation between closest ranks, over an already
/// sorted slice. `q` in [0, 1].
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let pos = q * (n - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = pos.ceil() as usize;
            let frac = pos - lo as f64;
            sorted[lo] + (sorted[hi] - sorted[lo]) * frac
        }
    }
}

/// Quantile of an unsorted sample.
pub fn quantile(values: &[f64], q: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    quantile_sorted(&sorted, q)
}

// ---------------------------------------------------------------------------
// Profiler: describe / info / missing counts
// ---------------------------------------------------------------------------

/// Summary statistics for one numeric column, over non-null cells only.
#[derive(Debug, Clone)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Count / mean / std / min / quartiles / max for every numeric column,
/// identifier included, in table order. Read-only.
pub fn describe(table: &DataTable) -> Vec<ColumnSummary> {
    table
        .columns
        .iter()
        .filter(|c| c.dtype.is_numeric())
        .map(|c| {
            let mut values = c.numeric_values();
            values.sort_by(|a, b| a.total_cmp(b));
            ColumnSummary {
                name: c.name.clone(),
                count: values.len(),
                mean: mean(&values),
                std: std_dev(&values),
                min: values.first().copied().unwrap_or(f64::NAN),
                q1: quantile_sorted(&values, 0.25),
                median: quantile_sorted(&values, 0.50),
                q3: quantile_sorted(&values, 0.75),
                max: values.last().copied().unwrap_or(f64::NAN),
            }
        })
        .collect()
}

/// One line of the schema report.
#[derive(Debug, Clone)]
pub struct ColumnInfo {
    pub name: String,
    pub non_null: usize,
    pub dtype: Dtype,
}

/// Per-column inferred dtype and non-null count, in table order.
pub fn info(table: &DataTable) -> Vec<ColumnInfo> {
    table
        .columns
        .iter()
        .map(|c| ColumnInfo {
            name: c.name.clone(),
            non_null: c.non_null_count(),
            dtype: c.dtype,
        })
        .collect()
}

/// Per-column missing-value counts, in table order.
pub fn missing_counts(table: &DataTable) -> Vec<(String, usize)> {
    table
        .columns
        .iter()
        .map(|c| (c.name.clone(), c.null_count()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Column, DataTable};

    const EPS: f64 = 1e-9;

    fn col(name: &str, cells: &[&str]) -> Column {
        Column::infer(name, cells.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn quantiles_interpolate_linearly() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert!((quantile(&v, 0.25) - 1.75).abs() < EPS);
        assert!((quantile(&v, 0.5) - 2.5).abs() < EPS);
        assert!((quantile(&v, 0.75) - 3.25).abs() < EPS);
        assert!((quantile(&[22.0, 30.0], 0.5) - 26.0).abs() < EPS);
    }

    #[test]
    fn describe_skips_nulls_and_text_columns() {
        let table = DataTable::from_columns(vec![
            col("Age", &["22", "", "30", "26"]),
            col("Sex", &["male", "female", "male", "male"]),
        ]);
        let summaries = describe(&table);
        assert_eq!(summaries.len(), 1);
        let age = &summaries[0];
        assert_eq!(age.count, 3);
        assert!((age.mean - 26.0).abs() < EPS);
        assert!((age.std - 4.0).abs() < EPS);
        assert!((age.min - 22.0).abs() < EPS);
        assert!((age.median - 26.0).abs() < EPS);
        assert!((age.max - 30.0).abs() < EPS);
    }

    #[test]
    fn info_and_missing_cover_every_column() {
        let table = DataTable::from_columns(vec![
            col("Age", &["22", "", "30"]),
            col("Embarked", &["S", "C", ""]),
        ]);
        let report = info(&table);
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].non_null, 2);
        assert_eq!(report[1].non_null, 2);
        assert_eq!(
            missing_counts(&table),
            vec![("Age".to_string(), 1), ("Embarked".to_string(), 1)]
        );
    }
}
