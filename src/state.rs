use crate::charts::ChartStep;

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// The chart sequence plus the cursor into it. The operator steps through
/// with Next/Back; one chart is visible at a time and must be dismissed
/// before the next appears.
pub struct AppState {
    pub charts: Vec<ChartStep>,
    pub current: usize,
}

impl AppState {
    pub fn new(charts: Vec<ChartStep>) -> Self {
        Self { charts, current: 0 }
    }

    pub fn current_step(&self) -> Option<&ChartStep> {
        self.charts.get(self.current)
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.charts.len()
    }

    /// Advance to the next chart; saturates on the last one.
    pub fn next(&mut self) {
        if !self.is_last() {
            self.current += 1;
        }
    }

    /// Step back to the previous chart; saturates on the first one.
    pub fn back(&mut self) {
        self.current = self.current.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{BarPanel, Chart};

    fn steps(n: usize) -> Vec<ChartStep> {
        (0..n)
            .map(|i| ChartStep {
                title: format!("chart {i}"),
                chart: Chart::SurvivalBars(BarPanel {
                    by: "Sex".into(),
                    bars: Vec::new(),
                }),
            })
            .collect()
    }

    #[test]
    fn cursor_saturates_at_both_ends() {
        let mut s = AppState::new(steps(3));
        assert!(s.is_first());
        s.back();
        assert_eq!(s.current, 0);
        s.next();
        s.next();
        assert!(s.is_last());
        s.next();
        assert_eq!(s.current, 2);
        assert_eq!(s.current_step().unwrap().title, "chart 2");
    }
}
