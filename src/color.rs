use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Diverging colormap for the correlation heatmap
// ---------------------------------------------------------------------------

fn cool() -> Srgb {
    Srgb::new(0.23, 0.30, 0.75)
}

fn warm() -> Srgb {
    Srgb::new(0.71, 0.02, 0.15)
}

fn neutral() -> Srgb {
    Srgb::new(0.95, 0.95, 0.95)
}

fn lerp(a: Srgb, b: Srgb, t: f32) -> Srgb {
    Srgb::new(
        a.red + (b.red - a.red) * t,
        a.green + (b.green - a.green) * t,
        a.blue + (b.blue - a.blue) * t,
    )
}

/// Map a correlation coefficient in [−1, 1] onto a blue–white–red diverging
/// scale. `NaN` renders grey.
pub fn diverging(value: f64) -> Color32 {
    if value.is_nan() {
        return Color32::GRAY;
    }
    let t = value.clamp(-1.0, 1.0) as f32;
    let rgb = if t < 0.0 {
        lerp(neutral(), cool(), -t)
    } else {
        lerp(neutral(), warm(), t)
    };
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Hue for the binary `Survived` variable: the diverging endpoints, so
/// survivors and non-survivors match the heatmap's warm/cool reading.
pub fn survival_color(survived: i64) -> Color32 {
    if survived != 0 {
        diverging(1.0)
    } else {
        diverging(-1.0)
    }
}

/// Annotation colour readable against a diverging cell: white on strong
/// correlations, black near zero.
pub fn annotation_color(value: f64) -> Color32 {
    if value.is_finite() && value.abs() > 0.6 {
        Color32::WHITE
    } else {
        Color32::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_entries() {
        let p = generate_palette(5);
        assert_eq!(p.len(), 5);
        assert_ne!(p[0], p[2]);
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn diverging_endpoints_and_center() {
        assert_eq!(diverging(0.0), diverging(-0.0));
        assert_ne!(diverging(-1.0), diverging(1.0));
        assert_eq!(diverging(f64::NAN), Color32::GRAY);
        // out-of-range values clamp
        assert_eq!(diverging(2.0), diverging(1.0));
    }
}
