use std::collections::HashMap;

use crate::data::model::{CellValue, DataTable};

use super::describe::quantile;

/// Fill every missing `Age` (or any numeric column) with the median of the
/// non-missing values, computed before any replacement. Done purely so the
/// rendering stages have a complete column to draw; not a rigorous
/// imputation. Returns the median used, or `None` if the column is absent or
/// entirely null.
pub fn fill_median(table: &mut DataTable, column: &str) -> Option<f64> {
    let col = table.column_mut(column)?;
    let values = col.numeric_values();
    if values.is_empty() {
        return None;
    }
    let median = quantile(&values, 0.5);
    for cell in col.values.iter_mut() {
        if cell.is_null() {
            *cell = CellValue::Float(median);
        }
    }
    Some(median)
}

/// Fill every missing `Embarked` (or any column) with the most frequent
/// non-missing value. Ties break toward the value seen first in source row
/// order: the scan below only replaces the running best on a strictly
/// greater count. Returns the mode used, or `None` if the column is absent
/// or entirely null.
pub fn fill_mode(table: &mut DataTable, column: &str) -> Option<CellValue> {
    let col = table.column_mut(column)?;

    let mut counts: HashMap<&CellValue, usize> = HashMap::new();
    let mut first_seen: Vec<&CellValue> = Vec::new();
    for cell in col.values.iter().filter(|c| !c.is_null()) {
        let entry = counts.entry(cell).or_insert(0);
        if *entry == 0 {
            first_seen.push(cell);
        }
        *entry += 1;
    }

    let mut mode: Option<(&CellValue, usize)> = None;
    for value in &first_seen {
        let count = counts[value];
        if mode.map(|(_, best)| count > best).unwrap_or(true) {
            mode = Some((value, count));
        }
    }
    let mode = mode.map(|(v, _)| (*v).clone())?;

    for cell in col.values.iter_mut() {
        if cell.is_null() {
            *cell = mode.clone();
        }
    }
    Some(mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Column;

    fn table(cols: Vec<Column>) -> DataTable {
        DataTable::from_columns(cols)
    }

    fn col(name: &str, cells: &[&str]) -> Column {
        Column::infer(name, cells.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn median_fill_uses_pre_imputation_median() {
        let mut t = table(vec![col("Age", &["22", "", "30", ""])]);
        let median = fill_median(&mut t, "Age").unwrap();
        assert_eq!(median, 26.0);
        let age = t.column("Age").unwrap();
        assert_eq!(age.null_count(), 0);
        assert_eq!(age.values[1], CellValue::Float(26.0));
        assert_eq!(age.values[3], CellValue::Float(26.0));
    }

    #[test]
    fn mode_fill_uses_most_frequent_value() {
        let mut t = table(vec![col("Embarked", &["S", "C", "S", "", "Q"])]);
        let mode = fill_mode(&mut t, "Embarked").unwrap();
        assert_eq!(mode, CellValue::Str("S".into()));
        assert_eq!(t.column("Embarked").unwrap().null_count(), 0);
        assert_eq!(
            t.column("Embarked").unwrap().values[3],
            CellValue::Str("S".into())
        );
    }

    #[test]
    fn mode_tie_breaks_toward_first_seen_value() {
        let mut t = table(vec![col("Embarked", &["C", "S", "S", "C", ""])]);
        let mode = fill_mode(&mut t, "Embarked").unwrap();
        assert_eq!(mode, CellValue::Str("C".into()));
    }

    #[test]
    fn all_null_column_is_left_alone() {
        let mut t = table(vec![col("Embarked", &["", "", ""])]);
        assert!(fill_mode(&mut t, "Embarked").is_none());
        assert_eq!(t.column("Embarked").unwrap().null_count(), 3);
    }
}
