use crate::data::model::DataTable;

/// A square Pearson correlation matrix over a fixed list of column names.
/// Symmetric, diagonal 1, `NaN` where fewer than two complete pairs exist or
/// a column is constant.
#[derive(Debug, Clone)]
pub struct CorrMatrix {
    pub labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrMatrix {
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Pairwise-complete Pearson correlation over the given columns: each pair
/// uses exactly the rows where both cells are non-missing, so imputed and
/// untouched columns mix without dropping whole rows.
pub fn correlation_matrix(table: &DataTable, columns: &[String]) -> CorrMatrix {
    let n = columns.len();
    let mut values = vec![vec![f64::NAN; n]; n];

    for i in 0..n {
        for j in i..n {
            let r = pearson_pairwise(table, &columns[i], &columns[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrMatrix {
        labels: columns.to_vec(),
        values,
    }
}

fn pearson_pairwise(table: &DataTable, a: &str, b: &str) -> f64 {
    let (Some(ca), Some(cb)) = (table.column(a), table.column(b)) else {
        return f64::NAN;
    };

    let pairs: Vec<(f64, f64)> = ca
        .values
        .iter()
        .zip(cb.values.iter())
        .filter_map(|(x, y)| Some((x.as_f64()?, y.as_f64()?)))
        .collect();

    if pairs.len() < 2 {
        return f64::NAN;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return f64::NAN;
    }
    cov / denom
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Column;

    const EPS: f64 = 1e-9;

    fn col(name: &str, cells: &[&str]) -> Column {
        Column::infer(name, cells.iter().map(|s| s.to_string()).collect())
    }

    fn table() -> DataTable {
        DataTable::from_columns(vec![
            col("Age", &["20", "30", "40", ""]),
            col("Fare", &["10", "20", "30", "5"]),
            col("Survived", &["1", "0", "1", "0"]),
        ])
    }

    fn names() -> Vec<String> {
        vec!["Age".into(), "Fare".into(), "Survived".into()]
    }

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let m = correlation_matrix(&table(), &names());
        for i in 0..m.len() {
            assert!((m.get(i, i) - 1.0).abs() < EPS);
            for j in 0..m.len() {
                assert!((m.get(i, j) - m.get(j, i)).abs() < EPS);
            }
        }
    }

    #[test]
    fn perfectly_linear_pair_correlates_to_one() {
        // Age and Fare are exactly linear over their complete pairs; the
        // fourth row is skipped because Age is missing there.
        let m = correlation_matrix(&table(), &names());
        assert!((m.get(0, 1) - 1.0).abs() < EPS);
    }

    #[test]
    fn constant_column_yields_nan() {
        let t = DataTable::from_columns(vec![
            col("Age", &["20", "30", "40"]),
            col("Survived", &["1", "1", "1"]),
        ]);
        let m = correlation_matrix(&t, &["Age".into(), "Survived".into()]);
        assert!(m.get(0, 1).is_nan());
    }
}
