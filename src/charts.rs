//! Chart sequence: a typed description of every figure the viewer shows, in
//! fixed presentation order. The stats here are
//! presentation prep (bins, density curves, five-number summaries); the ui
//! layer turns them into egui_plot elements without further computation.

use crate::data::model::{CellValue, DataTable};
use crate::stats::corr::CorrMatrix;
use crate::stats::describe::{quantile_sorted, std_dev};
use crate::stats::group::GroupedRates;

/// Grid figures show this many panels per row.
pub const PANELS_PER_ROW: usize = 2;

// ---------------------------------------------------------------------------
// Panel data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Bin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// Histogram with a smoothed density overlay, scaled to the count axis.
#[derive(Debug, Clone)]
pub struct HistogramPanel {
    pub feature: String,
    pub bins: Vec<Bin>,
    /// (x, expected count at x) samples of the kernel density estimate.
    pub density: Vec<[f64; 2]>,
}

/// Five-number summary with 1.5·IQR whiskers.
#[derive(Debug, Clone)]
pub struct BoxPanel {
    pub feature: String,
    pub whisker_lo: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_hi: f64,
    pub outliers: Vec<f64>,
}

/// Value frequencies for one categorical column, first-seen order.
#[derive(Debug, Clone)]
pub struct CountPanel {
    pub feature: String,
    pub counts: Vec<(String, usize)>,
}

/// Pairwise grid over a fixed column subset: complete rows only, colored by
/// the hue column.
#[derive(Debug, Clone)]
pub struct PairGrid {
    pub features: Vec<String>,
    /// One entry per complete row, feature order matching `features`.
    pub rows: Vec<Vec<f64>>,
    /// Hue value (Survived) per row.
    pub hue: Vec<i64>,
}

/// One bar chart of grouped means.
#[derive(Debug, Clone)]
pub struct BarPanel {
    pub by: String,
    pub bars: Vec<(String, f64)>,
}

/// One point of the interactive scatter, with its tooltip fields.
#[derive(Debug, Clone)]
pub struct ScatterPoint {
    pub age: f64,
    pub fare: f64,
    pub survived: i64,
    pub name: String,
    pub sex: String,
    pub pclass: String,
}

// ---------------------------------------------------------------------------
// The sequence itself
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Chart {
    HistogramGrid(Vec<HistogramPanel>),
    BoxplotGrid(Vec<BoxPanel>),
    CountPlotGrid(Vec<CountPanel>),
    Heatmap(CorrMatrix),
    PairPlot(PairGrid),
    SurvivalBars(BarPanel),
    InteractiveScatter(Vec<ScatterPoint>),
}

#[derive(Debug, Clone)]
pub struct ChartStep {
    pub title: String,
    pub chart: Chart,
}

/// Assemble every figure in presentation order. The table must already be
/// imputed; the aggregates are passed in because the console report printed
/// them first.
pub fn build_sequence(
    table: &DataTable,
    numeric_features: &[String],
    categorical_features: &[String],
    corr: &CorrMatrix,
    by_sex: &GroupedRates,
    by_pclass: &GroupedRates,
) -> Vec<ChartStep> {
    let histograms = numeric_features
        .iter()
        .filter_map(|f| histogram_panel(table, f))
        .collect();
    let boxplots = numeric_features
        .iter()
        .filter_map(|f| box_panel(table, f))
        .collect();
    let countplots = categorical_features
        .iter()
        .filter_map(|f| count_panel(table, f))
        .collect();
    let pair_cols = ["Age", "Fare", "Survived"];

    vec![
        ChartStep {
            title: "Histograms for Numeric Features".into(),
            chart: Chart::HistogramGrid(histograms),
        },
        ChartStep {
            title: "Boxplots for Numeric Features".into(),
            chart: Chart::BoxplotGrid(boxplots),
        },
        ChartStep {
            title: "Count Plots for Categorical Features".into(),
            chart: Chart::CountPlotGrid(countplots),
        },
        ChartStep {
            title: "Correlation Matrix of Numeric Features".into(),
            chart: Chart::Heatmap(corr.clone()),
        },
        ChartStep {
            title: "Pairplot of Age, Fare, and Survived".into(),
            chart: Chart::PairPlot(pair_grid(table, &pair_cols, "Survived")),
        },
        ChartStep {
            title: "Survival Rate by Sex".into(),
            chart: Chart::SurvivalBars(bar_panel(by_sex)),
        },
        ChartStep {
            title: "Survival Rate by Pclass".into(),
            chart: Chart::SurvivalBars(bar_panel(by_pclass)),
        },
        ChartStep {
            title: "Age vs Fare by Survival Status".into(),
            chart: Chart::InteractiveScatter(scatter_points(table)),
        },
    ]
}

// ---------------------------------------------------------------------------
// Histograms + KDE
// ---------------------------------------------------------------------------

fn histogram_panel(table: &DataTable, feature: &str) -> Option<HistogramPanel> {
    let mut values = table.column(feature)?.numeric_values();
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.total_cmp(b));

    let bins = bin_values(&values);
    let bin_width = bins.first().map(|b| b.hi - b.lo).unwrap_or(0.0);
    let density = kde_curve(&values)
        .into_iter()
        // scale the density to the count axis so the curve overlays the bars
        .map(|[x, d]| [x, d * values.len() as f64 * bin_width])
        .collect();

    Some(HistogramPanel {
        feature: feature.to_string(),
        bins,
        density,
    })
}

/// Square-root-rule binning over the closed range [min, max] of a sorted,
/// non-empty sample. A constant sample gets a single unit-width bin.
pub fn bin_values(sorted: &[f64]) -> Vec<Bin> {
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    if max == min {
        return vec![Bin {
            lo: min - 0.5,
            hi: min + 0.5,
            count: sorted.len(),
        }];
    }

    let n_bins = (sorted.len() as f64).sqrt().ceil() as usize;
    let width = (max - min) / n_bins as f64;
    let mut bins: Vec<Bin> = (0..n_bins)
        .map(|i| Bin {
            lo: min + i as f64 * width,
            hi: min + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for &v in sorted {
        let idx = (((v - min) / width) as usize).min(n_bins - 1);
        bins[idx].count += 1;
    }
    bins
}

/// Gaussian kernel density estimate sampled on a regular grid, Silverman
/// bandwidth. Returns (x, density) pairs; empty when the sample cannot
/// support a bandwidth (fewer than two points or zero spread).
pub fn kde_curve(sorted: &[f64]) -> Vec<[f64; 2]> {
    let n = sorted.len();
    if n < 2 {
        return Vec::new();
    }

    let sd = std_dev(sorted);
    let iqr = quantile_sorted(sorted, 0.75) - quantile_sorted(sorted, 0.25);
    let spread = if iqr > 0.0 {
        sd.min(iqr / 1.34)
    } else {
        sd
    };
    let h = 0.9 * spread * (n as f64).powf(-0.2);
    if !(h > 0.0) || !h.is_finite() {
        return Vec::new();
    }

    const GRID: usize = 200;
    let lo = sorted[0] - 3.0 * h;
    let hi = sorted[n - 1] + 3.0 * h;
    let step = (hi - lo) / (GRID - 1) as f64;
    let norm = 1.0 / (n as f64 * h * (2.0 * std::f64::consts::PI).sqrt());

    (0..GRID)
        .map(|i| {
            let x = lo + i as f64 * step;
            let d: f64 = sorted
                .iter()
                .map(|&xi| (-0.5 * ((x - xi) / h).powi(2)).exp())
                .sum();
            [x, d * norm]
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Boxplots
// ---------------------------------------------------------------------------

fn box_panel(table: &DataTable, feature: &str) -> Option<BoxPanel> {
    let mut values = table.column(feature)?.numeric_values();
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.total_cmp(b));
    Some(five_number_summary(feature, &values))
}

/// Five-number summary with whiskers at the furthest points within
/// 1.5·IQR of the quartiles; everything beyond is an outlier.
pub fn five_number_summary(feature: &str, sorted: &[f64]) -> BoxPanel {
    let q1 = quantile_sorted(sorted, 0.25);
    let q3 = quantile_sorted(sorted, 0.75);
    let iqr = q3 - q1;
    let fence_lo = q1 - 1.5 * iqr;
    let fence_hi = q3 + 1.5 * iqr;

    let whisker_lo = sorted
        .iter()
        .copied()
        .find(|&v| v >= fence_lo)
        .unwrap_or(q1);
    let whisker_hi = sorted
        .iter()
        .rev()
        .copied()
        .find(|&v| v <= fence_hi)
        .unwrap_or(q3);
    let outliers = sorted
        .iter()
        .copied()
        .filter(|&v| v < fence_lo || v > fence_hi)
        .collect();

    BoxPanel {
        feature: feature.to_string(),
        whisker_lo,
        q1,
        median: quantile_sorted(sorted, 0.5),
        q3,
        whisker_hi,
        outliers,
    }
}

// ---------------------------------------------------------------------------
// Count plots
// ---------------------------------------------------------------------------

fn count_panel(table: &DataTable, feature: &str) -> Option<CountPanel> {
    let column = table.column(feature)?;
    let mut order: Vec<String> = Vec::new();
    let mut counts: std::collections::HashMap<String, usize> =
        std::collections::HashMap::new();

    for cell in column.values.iter().filter(|c| !c.is_null()) {
        let label = cell.to_string();
        let entry = counts.entry(label.clone()).or_insert(0);
        if *entry == 0 {
            order.push(label);
        }
        *entry += 1;
    }

    Some(CountPanel {
        feature: feature.to_string(),
        counts: order.into_iter().map(|l| (l.clone(), counts[&l])).collect(),
    })
}

// ---------------------------------------------------------------------------
// Pair grid, bars, scatter
// ---------------------------------------------------------------------------

fn pair_grid(table: &DataTable, features: &[&str], hue: &str) -> PairGrid {
    let columns: Vec<_> = features.iter().filter_map(|f| table.column(f)).collect();
    let hue_col = table.column(hue);
    let mut rows = Vec::new();
    let mut hues = Vec::new();

    if columns.len() == features.len() {
        'rows: for i in 0..table.len() {
            let mut row = Vec::with_capacity(columns.len());
            for col in &columns {
                match col.values[i].as_f64() {
                    Some(v) => row.push(v),
                    None => continue 'rows,
                }
            }
            let hue_value = hue_col
                .and_then(|c| c.values[i].as_f64())
                .map(|v| v as i64)
                .unwrap_or(0);
            rows.push(row);
            hues.push(hue_value);
        }
    }

    PairGrid {
        features: features.iter().map(|f| f.to_string()).collect(),
        rows,
        hue: hues,
    }
}

fn bar_panel(rates: &GroupedRates) -> BarPanel {
    BarPanel {
        by: rates.by.clone(),
        bars: rates
            .rows
            .iter()
            .map(|(key, rate)| (key.to_string(), *rate))
            .collect(),
    }
}

fn scatter_points(table: &DataTable) -> Vec<ScatterPoint> {
    let cell = |name: &str, i: usize| -> CellValue {
        table
            .column(name)
            .map(|c| c.values[i].clone())
            .unwrap_or(CellValue::Null)
    };

    (0..table.len())
        .filter_map(|i| {
            let age = cell("Age", i).as_f64()?;
            let fare = cell("Fare", i).as_f64()?;
            let survived = cell("Survived", i).as_f64()? as i64;
            Some(ScatterPoint {
                age,
                fare,
                survived,
                name: cell("Name", i).to_string(),
                sex: cell("Sex", i).to_string(),
                pclass: cell("Pclass", i).to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Column;
    use crate::stats::corr::correlation_matrix;
    use crate::stats::group::survival_rate_by;

    fn col(name: &str, cells: &[&str]) -> Column {
        Column::infer(name, cells.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn bins_preserve_the_total_count() {
        let sorted: Vec<f64> = (0..50).map(|i| i as f64).collect();
        let bins = bin_values(&sorted);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 50);
        assert!(bins.len() >= 2);
        assert!((bins[0].lo - 0.0).abs() < 1e-9);
        assert!((bins.last().unwrap().hi - 49.0).abs() < 1e-9);
    }

    #[test]
    fn constant_sample_gets_one_bin() {
        let bins = bin_values(&[3.0, 3.0, 3.0]);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 3);
    }

    #[test]
    fn kde_has_unit_mass() {
        let sorted: Vec<f64> = (0..40).map(|i| (i % 7) as f64).collect();
        let mut sorted = sorted;
        sorted.sort_by(|a, b| a.total_cmp(b));
        let curve = kde_curve(&sorted);
        assert!(!curve.is_empty());
        // trapezoid rule over the sampled grid
        let mass: f64 = curve
            .windows(2)
            .map(|w| (w[1][0] - w[0][0]) * (w[0][1] + w[1][1]) / 2.0)
            .sum();
        assert!((mass - 1.0).abs() < 0.02, "mass = {mass}");
    }

    #[test]
    fn whiskers_stop_at_the_fences() {
        let mut sorted: Vec<f64> = vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        sorted.sort_by(|a, b| a.total_cmp(b));
        let b = five_number_summary("Fare", &sorted);
        assert_eq!(b.outliers, vec![100.0]);
        assert_eq!(b.whisker_hi, 5.0);
        assert_eq!(b.whisker_lo, 1.0);
        assert!(b.q1 <= b.median && b.median <= b.q3);
    }

    #[test]
    fn count_panel_keeps_first_seen_order() {
        let t = DataTable::from_columns(vec![col(
            "Embarked",
            &["S", "C", "S", "Q", "", "C", "S"],
        )]);
        let panel = count_panel(&t, "Embarked").unwrap();
        assert_eq!(
            panel.counts,
            vec![
                ("S".to_string(), 3),
                ("C".to_string(), 2),
                ("Q".to_string(), 1)
            ]
        );
    }

    #[test]
    fn pair_grid_keeps_only_complete_rows() {
        let t = DataTable::from_columns(vec![
            col("Age", &["22", "", "30"]),
            col("Fare", &["7.25", "71.28", "8.05"]),
            col("Survived", &["0", "1", "0"]),
        ]);
        let grid = pair_grid(&t, &["Age", "Fare", "Survived"], "Survived");
        assert_eq!(grid.rows.len(), 2);
        assert_eq!(grid.hue, vec![0, 0]);
    }

    #[test]
    fn sequence_has_every_figure_in_order() {
        let t = DataTable::from_columns(vec![
            col("PassengerId", &["1", "2", "3"]),
            col("Survived", &["0", "1", "0"]),
            col("Pclass", &["3", "1", "3"]),
            col("Name", &["A", "B", "C"]),
            col("Sex", &["male", "female", "male"]),
            col("Age", &["22", "26", "30"]),
            col("Fare", &["7.25", "71.28", "8.05"]),
        ]);
        let numeric = t.numeric_features();
        let categorical = t.categorical_features();
        let corr = correlation_matrix(&t, &numeric);
        let by_sex = survival_rate_by(&t, "Sex");
        let by_pclass = survival_rate_by(&t, "Pclass");
        let steps = build_sequence(&t, &numeric, &categorical, &corr, &by_sex, &by_pclass);

        assert_eq!(steps.len(), 8);
        assert!(matches!(steps[0].chart, Chart::HistogramGrid(_)));
        assert!(matches!(steps[3].chart, Chart::Heatmap(_)));
        assert!(matches!(steps[7].chart, Chart::InteractiveScatter(_)));
        if let Chart::InteractiveScatter(points) = &steps[7].chart {
            assert_eq!(points.len(), 3);
            assert_eq!(points[1].name, "B");
        }
    }
}
