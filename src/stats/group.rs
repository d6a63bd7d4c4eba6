use std::collections::BTreeMap;

use crate::data::model::{CellValue, DataTable};

/// Mean of a binary target per distinct grouping value, keys ascending.
#[derive(Debug, Clone)]
pub struct GroupedRates {
    pub by: String,
    /// (group key, mean of the target within the group)
    pub rows: Vec<(CellValue, f64)>,
}

/// Group rows by `by` and take the mean of `Survived` in each group. Rows
/// with a missing key or a missing target are skipped; groups come out in
/// ascending key order.
pub fn survival_rate_by(table: &DataTable, by: &str) -> GroupedRates {
    let keys = table.column(by).map(|c| c.values.as_slice()).unwrap_or(&[]);
    let targets = table
        .column("Survived")
        .map(|c| c.values.as_slice())
        .unwrap_or(&[]);

    let mut groups: BTreeMap<CellValue, (f64, usize)> = BTreeMap::new();
    for (key, target) in keys.iter().zip(targets.iter()) {
        if key.is_null() {
            continue;
        }
        let Some(value) = target.as_f64() else {
            continue;
        };
        let entry = groups.entry(key.clone()).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    GroupedRates {
        by: by.to_string(),
        rows: groups
            .into_iter()
            .map(|(key, (sum, count))| (key, sum / count as f64))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Column;

    fn col(name: &str, cells: &[&str]) -> Column {
        Column::infer(name, cells.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn one_row_per_distinct_key_rates_in_unit_interval() {
        let t = DataTable::from_columns(vec![
            col("Sex", &["male", "female", "male", "female", "male"]),
            col("Survived", &["0", "1", "1", "1", "0"]),
        ]);
        let rates = survival_rate_by(&t, "Sex");
        assert_eq!(rates.rows.len(), 2);
        assert_eq!(rates.rows[0].0, CellValue::Str("female".into()));
        assert_eq!(rates.rows[0].1, 1.0);
        assert_eq!(rates.rows[1].0, CellValue::Str("male".into()));
        assert!((rates.rows[1].1 - 1.0 / 3.0).abs() < 1e-9);
        for (_, rate) in &rates.rows {
            assert!((0.0..=1.0).contains(rate));
        }
    }

    #[test]
    fn integer_keys_come_out_ascending() {
        let t = DataTable::from_columns(vec![
            col("Pclass", &["3", "1", "2", "3"]),
            col("Survived", &["0", "1", "1", "0"]),
        ]);
        let rates = survival_rate_by(&t, "Pclass");
        let keys: Vec<_> = rates.rows.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["1", "2", "3"]);
        assert_eq!(rates.rows[2].1, 0.0);
    }

    #[test]
    fn missing_keys_are_skipped() {
        let t = DataTable::from_columns(vec![
            col("Embarked", &["S", "", "S"]),
            col("Survived", &["1", "1", "0"]),
        ]);
        let rates = survival_rate_by(&t, "Embarked");
        assert_eq!(rates.rows.len(), 1);
        assert!((rates.rows[0].1 - 0.5).abs() < 1e-9);
    }
}
