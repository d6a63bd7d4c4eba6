use eframe::egui::{Align2, Color32, RichText, ScrollArea, Stroke, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, GridMark, Legend, Line, MarkerShape, Plot,
    PlotPoint, PlotPoints, Points, Polygon, Text,
};

use crate::charts::{
    BarPanel, BoxPanel, Chart, ChartStep, CountPanel, HistogramPanel, PairGrid, ScatterPoint,
    bin_values, PANELS_PER_ROW,
};
use crate::color;
use crate::stats::corr::CorrMatrix;

const PANEL_HEIGHT: f32 = 300.0;

// ---------------------------------------------------------------------------
// Chart dispatch (central panel)
// ---------------------------------------------------------------------------

/// Render the current chart step in the central panel.
pub fn render_chart(ui: &mut Ui, step: &ChartStep) {
    match &step.chart {
        Chart::HistogramGrid(panels) => {
            panel_grid(ui, panels, |ui, w, p| histogram_panel(ui, w, p));
        }
        Chart::BoxplotGrid(panels) => {
            panel_grid(ui, panels, |ui, w, p| box_panel(ui, w, p));
        }
        Chart::CountPlotGrid(panels) => {
            panel_grid(ui, panels, |ui, w, p| count_panel(ui, w, p));
        }
        Chart::Heatmap(matrix) => heatmap(ui, matrix),
        Chart::PairPlot(grid) => pair_plot(ui, grid),
        Chart::SurvivalBars(panel) => survival_bars(ui, panel),
        Chart::InteractiveScatter(points) => interactive_scatter(ui, points),
    }
}

/// Lay panels out two per row, scrolling vertically when they overflow.
fn panel_grid<T>(ui: &mut Ui, panels: &[T], mut draw: impl FnMut(&mut Ui, f32, &T)) {
    let width = (ui.available_width() - 24.0) / PANELS_PER_ROW as f32;
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for row in panels.chunks(PANELS_PER_ROW) {
                ui.horizontal(|ui: &mut Ui| {
                    for panel in row {
                        draw(ui, width, panel);
                    }
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Distribution panels
// ---------------------------------------------------------------------------

fn histogram_panel(ui: &mut Ui, width: f32, panel: &HistogramPanel) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(RichText::new(format!("Distribution of {}", panel.feature)).strong());
        Plot::new(format!("hist_{}", panel.feature))
            .width(width)
            .height(PANEL_HEIGHT)
            .x_axis_label(panel.feature.as_str())
            .y_axis_label("Count")
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                let bars: Vec<Bar> = panel
                    .bins
                    .iter()
                    .map(|b| {
                        Bar::new((b.lo + b.hi) / 2.0, b.count as f64).width(b.hi - b.lo)
                    })
                    .collect();
                plot_ui.bar_chart(
                    BarChart::new(bars).color(Color32::LIGHT_BLUE.linear_multiply(0.8)),
                );
                if !panel.density.is_empty() {
                    plot_ui.line(
                        Line::new(PlotPoints::from(panel.density.clone()))
                            .color(Color32::from_rgb(50, 90, 160))
                            .width(1.5),
                    );
                }
            });
    });
}

fn box_panel(ui: &mut Ui, width: f32, panel: &BoxPanel) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(RichText::new(format!("Boxplot of {}", panel.feature)).strong());
        Plot::new(format!("box_{}", panel.feature))
            .width(width)
            .height(PANEL_HEIGHT)
            .y_axis_label(panel.feature.as_str())
            .allow_scroll(false)
            .show_x(false)
            .show(ui, |plot_ui| {
                let elem = BoxElem::new(
                    0.5,
                    BoxSpread::new(
                        panel.whisker_lo,
                        panel.q1,
                        panel.median,
                        panel.q3,
                        panel.whisker_hi,
                    ),
                )
                .box_width(0.4)
                .whisker_width(0.2);
                plot_ui.box_plot(
                    BoxPlot::new(vec![elem]).color(Color32::LIGHT_BLUE.linear_multiply(0.8)),
                );
                if !panel.outliers.is_empty() {
                    let pts: PlotPoints =
                        panel.outliers.iter().map(|&v| [0.5, v]).collect();
                    plot_ui.points(
                        Points::new(pts)
                            .shape(MarkerShape::Diamond)
                            .radius(2.5)
                            .color(Color32::DARK_GRAY),
                    );
                }
            });
    });
}

fn count_panel(ui: &mut Ui, width: f32, panel: &CountPanel) {
    let labels: Vec<String> = panel
        .counts
        .iter()
        .map(|(label, _)| truncate_label(label))
        .collect();
    let palette = color::generate_palette(panel.counts.len());

    ui.vertical(|ui: &mut Ui| {
        ui.label(RichText::new(format!("Count of {}", panel.feature)).strong());
        Plot::new(format!("count_{}", panel.feature))
            .width(width)
            .height(PANEL_HEIGHT)
            .x_axis_label(panel.feature.as_str())
            .y_axis_label("Count")
            .allow_scroll(false)
            .x_axis_formatter(move |mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
                index_label(&labels, mark.value)
            })
            .show(ui, |plot_ui| {
                let bars: Vec<Bar> = panel
                    .counts
                    .iter()
                    .enumerate()
                    .map(|(i, (_, count))| {
                        Bar::new(i as f64, *count as f64)
                            .width(0.8)
                            .fill(palette[i])
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars));
            });
    });
}

fn truncate_label(label: &str) -> String {
    const MAX: usize = 14;
    if label.chars().count() <= MAX {
        label.to_string()
    } else {
        let cut: String = label.chars().take(MAX - 1).collect();
        format!("{cut}…")
    }
}

/// Tick label for bars positioned at integer coordinates.
fn index_label(labels: &[String], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-3 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Correlation heatmap
// ---------------------------------------------------------------------------

fn heatmap(ui: &mut Ui, matrix: &CorrMatrix) {
    let n = matrix.len();
    let x_labels = matrix.labels.clone();
    // row 0 renders at the top
    let y_labels: Vec<String> = matrix.labels.iter().rev().cloned().collect();

    Plot::new("corr_heatmap")
        .data_aspect(1.0)
        .allow_scroll(false)
        .x_grid_spacer(move |_input| cell_centers(n))
        .y_grid_spacer(move |_input| cell_centers(n))
        .x_axis_formatter(move |mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
            center_label(&x_labels, mark.value)
        })
        .y_axis_formatter(move |mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
            center_label(&y_labels, mark.value)
        })
        .show(ui, |plot_ui| {
            for i in 0..n {
                for j in 0..n {
                    let v = matrix.get(i, j);
                    let x0 = j as f64;
                    let y0 = (n - 1 - i) as f64;
                    let cell = PlotPoints::from(vec![
                        [x0, y0],
                        [x0 + 1.0, y0],
                        [x0 + 1.0, y0 + 1.0],
                        [x0, y0 + 1.0],
                    ]);
                    plot_ui.polygon(
                        Polygon::new(cell)
                            .fill_color(color::diverging(v))
                            .stroke(Stroke::new(0.5, Color32::WHITE)),
                    );
                    let annotation = if v.is_nan() {
                        "NaN".to_string()
                    } else {
                        format!("{v:.2}")
                    };
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(x0 + 0.5, y0 + 0.5),
                            RichText::new(annotation)
                                .size(12.0)
                                .color(color::annotation_color(v)),
                        )
                        .anchor(Align2::CENTER_CENTER),
                    );
                }
            }
        });
}

fn cell_centers(n: usize) -> Vec<GridMark> {
    (0..n)
        .map(|k| GridMark {
            value: k as f64 + 0.5,
            step_size: 1.0,
        })
        .collect()
}

fn center_label(labels: &[String], value: f64) -> String {
    let idx = value - 0.5;
    let rounded = idx.round();
    if (idx - rounded).abs() > 1e-3 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Pairwise grid
// ---------------------------------------------------------------------------

fn pair_plot(ui: &mut Ui, grid: &PairGrid) {
    let k = grid.features.len();
    if k == 0 {
        return;
    }
    let width = (ui.available_width() - 16.0 * k as f32) / k as f32;
    let height = ((ui.available_height() - 16.0 * k as f32) / k as f32).max(160.0);
    let hues = distinct_hues(&grid.hue);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for row in 0..k {
                ui.horizontal(|ui: &mut Ui| {
                    for col in 0..k {
                        let plot = Plot::new(format!("pair_{row}_{col}"))
                            .width(width)
                            .height(height)
                            .x_axis_label(grid.features[col].as_str())
                            .y_axis_label(grid.features[row].as_str())
                            .allow_scroll(false);
                        if row == col {
                            plot.show(ui, |plot_ui| {
                                diagonal_histograms(plot_ui, grid, row, &hues);
                            });
                        } else {
                            plot.show(ui, |plot_ui| {
                                for &hue in &hues {
                                    let pts: PlotPoints = grid
                                        .rows
                                        .iter()
                                        .zip(grid.hue.iter())
                                        .filter(|(_, h)| **h == hue)
                                        .map(|(r, _)| [r[col], r[row]])
                                        .collect();
                                    plot_ui.points(
                                        Points::new(pts)
                                            .radius(1.8)
                                            .color(color::survival_color(hue)),
                                    );
                                }
                            });
                        }
                    }
                });
            }
        });
}

/// Overlaid per-hue histograms on a diagonal cell.
fn diagonal_histograms(plot_ui: &mut egui_plot::PlotUi, grid: &PairGrid, col: usize, hues: &[i64]) {
    for &hue in hues {
        let mut values: Vec<f64> = grid
            .rows
            .iter()
            .zip(grid.hue.iter())
            .filter(|(_, h)| **h == hue)
            .map(|(r, _)| r[col])
            .collect();
        if values.is_empty() {
            continue;
        }
        values.sort_by(|a, b| a.total_cmp(b));
        let bars: Vec<Bar> = bin_values(&values)
            .iter()
            .map(|b| Bar::new((b.lo + b.hi) / 2.0, b.count as f64).width(b.hi - b.lo))
            .collect();
        plot_ui.bar_chart(
            BarChart::new(bars).color(color::survival_color(hue).linear_multiply(0.5)),
        );
    }
}

fn distinct_hues(hue: &[i64]) -> Vec<i64> {
    let mut out: Vec<i64> = Vec::new();
    for &h in hue {
        if !out.contains(&h) {
            out.push(h);
        }
    }
    out.sort_unstable();
    out
}

// ---------------------------------------------------------------------------
// Survival-rate bars
// ---------------------------------------------------------------------------

fn survival_bars(ui: &mut Ui, panel: &BarPanel) {
    let labels: Vec<String> = panel.bars.iter().map(|(l, _)| l.clone()).collect();
    let palette = color::generate_palette(panel.bars.len());

    Plot::new(format!("rates_{}", panel.by))
        .x_axis_label(panel.by.as_str())
        .y_axis_label("Survived")
        .include_y(0.0)
        .include_y(1.0)
        .allow_scroll(false)
        .x_axis_formatter(move |mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
            index_label(&labels, mark.value)
        })
        .show(ui, |plot_ui| {
            let bars: Vec<Bar> = panel
                .bars
                .iter()
                .enumerate()
                .map(|(i, (_, rate))| {
                    Bar::new(i as f64, *rate)
                        .width(0.6)
                        .fill(palette[i].linear_multiply(0.7))
                })
                .collect();
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Interactive scatter with tooltips
// ---------------------------------------------------------------------------

fn interactive_scatter(ui: &mut Ui, points: &[ScatterPoint]) {
    Plot::new("age_fare_scatter")
        .legend(Legend::default())
        .x_axis_label("Age")
        .y_axis_label("Fare")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for survived in [0i64, 1] {
                let pts: PlotPoints = points
                    .iter()
                    .filter(|p| p.survived == survived)
                    .map(|p| [p.age, p.fare])
                    .collect();
                plot_ui.points(
                    Points::new(pts)
                        .name(format!("Survived = {survived}"))
                        .radius(2.5)
                        .color(color::survival_color(survived)),
                );
            }

            // Tooltip: nearest point within a small screen radius of the
            // pointer shows the passenger behind it.
            if let Some(pointer) = plot_ui.pointer_coordinate() {
                let transform = *plot_ui.transform();
                let pointer_pos = transform.position_from_point(&pointer);
                let nearest = points
                    .iter()
                    .map(|p| {
                        let pos =
                            transform.position_from_point(&PlotPoint::new(p.age, p.fare));
                        (pos.distance(pointer_pos), p)
                    })
                    .min_by(|(a, _), (b, _)| a.total_cmp(b));

                if let Some((dist, p)) = nearest {
                    if dist <= 12.0 {
                        plot_ui.points(
                            Points::new(PlotPoints::from(vec![[p.age, p.fare]]))
                                .radius(5.0)
                                .shape(MarkerShape::Circle)
                                .color(Color32::YELLOW),
                        );
                        plot_ui.text(
                            Text::new(
                                PlotPoint::new(p.age, p.fare),
                                RichText::new(format!(
                                    "{}\nSex: {}   Pclass: {}\nAge: {}   Fare: {:.2}",
                                    p.name, p.sex, p.pclass, p.age, p.fare
                                ))
                                .size(12.0)
                                .color(Color32::WHITE)
                                .background_color(Color32::from_black_alpha(200)),
                            )
                            .anchor(Align2::LEFT_BOTTOM),
                        );
                    }
                }
            }
        });
}
