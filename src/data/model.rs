use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common Pandas dtypes.
/// Grouping keys live in `BTreeMap`s downstream so `CellValue` must be `Ord`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Str(String),
    Int(i64),
    Float(f64),
    Null,
}

// -- Manual Eq/Ord so we can use CellValue as a BTreeMap key --

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Int(_) => 1,
                Float(_) => 2,
                Str(_) => 3,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Int(a), Int(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Str(a), Str(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl std::hash::Hash for CellValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::Str(s) => s.hash(state),
            CellValue::Int(i) => i.hash(state),
            CellValue::Float(f) => f.to_bits().hash(state),
            CellValue::Null => {}
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Str(s) => write!(f, "{s}"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64` for numeric statistics.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// Dtype – whole-column inferred type
// ---------------------------------------------------------------------------

/// Column dtype, inferred once per column from the raw text cells.
/// Named after the Pandas dtypes the source file maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dtype {
    Int64,
    Float64,
    Text,
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dtype::Int64 => write!(f, "int64"),
            Dtype::Float64 => write!(f, "float64"),
            Dtype::Text => write!(f, "object"),
        }
    }
}

impl Dtype {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Dtype::Int64 | Dtype::Float64)
    }
}

// ---------------------------------------------------------------------------
// Column – one named column with a uniform dtype
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub dtype: Dtype,
    pub values: Vec<CellValue>,
}

impl Column {
    /// Build a column from raw text cells, inferring the dtype for the whole
    /// column at once (a column has exactly one dtype, like a Pandas Series):
    /// * every cell parses as `i64` and none is empty → `Int64`
    /// * every non-empty cell parses as `f64` → `Float64` (an integer column
    ///   with missing entries also lands here, as Pandas promotes it)
    /// * otherwise → `Text`
    pub fn infer(name: &str, raw: Vec<String>) -> Self {
        let mut any_null = false;
        let mut all_int = true;
        let mut all_float = true;

        for cell in &raw {
            let cell = cell.trim();
            if cell.is_empty() {
                any_null = true;
                continue;
            }
            if cell.parse::<i64>().is_err() {
                all_int = false;
            }
            if cell.parse::<f64>().is_err() {
                all_float = false;
            }
        }

        let dtype = if !all_float {
            Dtype::Text
        } else if all_int && !any_null {
            Dtype::Int64
        } else {
            Dtype::Float64
        };

        let values = raw
            .into_iter()
            .map(|cell| {
                let cell = cell.trim();
                if cell.is_empty() {
                    return CellValue::Null;
                }
                // parse() cannot fail here: the dtype was chosen because
                // every non-empty cell already parsed
                match dtype {
                    Dtype::Int64 => CellValue::Int(cell.parse().unwrap_or_default()),
                    Dtype::Float64 => CellValue::Float(cell.parse().unwrap_or_default()),
                    Dtype::Text => CellValue::Str(cell.to_string()),
                }
            })
            .collect();

        Column {
            name: name.to_string(),
            dtype,
            values,
        }
    }

    /// Non-null cell count.
    pub fn non_null_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_null()).count()
    }

    /// Missing cell count.
    pub fn null_count(&self) -> usize {
        self.values.len() - self.non_null_count()
    }

    /// All non-null values as `f64`, in row order.
    pub fn numeric_values(&self) -> Vec<f64> {
        self.values.iter().filter_map(|v| v.as_f64()).collect()
    }
}

// ---------------------------------------------------------------------------
// DataTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Identifier column: numeric in the file but not a feature.
pub const ID_COLUMN: &str = "PassengerId";

/// The full parsed table, columns in file header order.
#[derive(Debug, Clone)]
pub struct DataTable {
    pub columns: Vec<Column>,
    n_rows: usize,
}

impl DataTable {
    pub fn from_columns(columns: Vec<Column>) -> Self {
        let n_rows = columns.first().map(|c| c.values.len()).unwrap_or(0);
        DataTable { columns, n_rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.n_rows
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    /// Names of all numeric columns, in table order (identifier included).
    pub fn numeric_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.dtype.is_numeric())
            .map(|c| c.name.clone())
            .collect()
    }

    /// Numeric feature list: numeric columns minus the identifier column.
    pub fn numeric_features(&self) -> Vec<String> {
        self.numeric_columns()
            .into_iter()
            .filter(|n| n != ID_COLUMN)
            .collect()
    }

    /// Categorical feature list: text columns, in table order.
    pub fn categorical_features(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.dtype == Dtype::Text)
            .map(|c| c.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(name: &str, cells: &[&str]) -> Column {
        Column::infer(name, cells.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn infers_int64_when_complete() {
        let c = col("Pclass", &["3", "1", "3"]);
        assert_eq!(c.dtype, Dtype::Int64);
        assert_eq!(c.values[1], CellValue::Int(1));
    }

    #[test]
    fn integer_column_with_gaps_promotes_to_float64() {
        let c = col("Age", &["22", "", "30"]);
        assert_eq!(c.dtype, Dtype::Float64);
        assert_eq!(c.values[0], CellValue::Float(22.0));
        assert!(c.values[1].is_null());
        assert_eq!(c.null_count(), 1);
    }

    #[test]
    fn mixed_cells_stay_text() {
        let c = col("Ticket", &["345779", "PC 17599", "113803"]);
        assert_eq!(c.dtype, Dtype::Text);
        assert_eq!(c.values[0], CellValue::Str("345779".into()));
    }

    #[test]
    fn numeric_features_exclude_identifier() {
        let table = DataTable::from_columns(vec![
            col(ID_COLUMN, &["1", "2"]),
            col("Survived", &["0", "1"]),
            col("Sex", &["male", "female"]),
            col("Fare", &["7.25", "71.28"]),
        ]);
        assert_eq!(
            table.numeric_columns(),
            vec![ID_COLUMN.to_string(), "Survived".into(), "Fare".into()]
        );
        assert_eq!(
            table.numeric_features(),
            vec!["Survived".to_string(), "Fare".into()]
        );
        assert_eq!(table.categorical_features(), vec!["Sex".to_string()]);
    }
}
