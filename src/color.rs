use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::sst::Season;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| hsl_color((i as f32 / n as f32) * 360.0, 0.75, 0.55))
        .collect()
}

fn hsl_color(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Fixed colours for the dashboard's series
// ---------------------------------------------------------------------------

/// Line colour for profile `index` (0 = Profile 1).
pub fn profile_color(index: usize) -> Color32 {
    let palette = generate_palette(2);
    palette[index % palette.len()]
}

/// Solid colour for a season: orange autumn, blue winter, green spring/summer.
pub fn season_color(season: Season) -> Color32 {
    let hue = match season {
        Season::Fall => 30.0,
        Season::Winter => 210.0,
        Season::SpringSummer => 120.0,
    };
    hsl_color(hue, 0.6, 0.5)
}

/// Translucent season colour for the chart background.
pub fn season_fill(season: Season) -> Color32 {
    season_color(season).gamma_multiply(0.15)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(5).len(), 5);
    }

    #[test]
    fn profiles_get_distinct_colours() {
        assert_ne!(profile_color(0), profile_color(1));
        assert_eq!(profile_color(2), profile_color(0));
    }

    #[test]
    fn seasons_get_distinct_colours() {
        let colors: Vec<_> = Season::ALL.iter().map(|s| season_color(*s)).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert!(season_fill(Season::Fall).a() < season_color(Season::Fall).a());
    }
}
