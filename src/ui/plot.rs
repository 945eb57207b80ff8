use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use eframe::egui::{Align2, Color32, RichText, Stroke, Ui};
use egui_plot::{GridMark, Legend, Line, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::color::{season_color, season_fill};
use crate::data::profile::ProfileRecord;
use crate::state::SstSeries;

/// Initial depth range shown on profile charts (metres).
const DEFAULT_MAX_DEPTH: f64 = 250.0;

// ---------------------------------------------------------------------------
// Temperature vs. depth
// ---------------------------------------------------------------------------

/// One named profile series to draw.
#[derive(Clone, Copy)]
pub struct ProfileSeries<'a> {
    pub name: &'a str,
    pub records: &'a [ProfileRecord],
    pub color: Color32,
}

/// Render a depth profile chart. Depth is drawn downward: points are plotted
/// at `-depth` and the axis labels show the positive value.
pub fn profile_plot(ui: &mut Ui, id: &str, series: &[ProfileSeries<'_>], height: f32) {
    Plot::new(id)
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Temperature (°C)")
        .y_axis_label("Depth (m)")
        .y_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
            format!("{:.0}", -mark.value)
        })
        .label_formatter(|name, value| {
            let point = format!("{:.2} °C at {:.1} m", value.x, -value.y);
            if name.is_empty() {
                point
            } else {
                format!("{name}\n{point}")
            }
        })
        .include_y(0.0)
        .include_y(-DEFAULT_MAX_DEPTH)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for s in series {
                let points: Vec<[f64; 2]> = s
                    .records
                    .iter()
                    .map(|r| [r.temperature, -r.depth])
                    .collect();

                plot_ui.line(
                    Line::new(PlotPoints::new(points.clone()))
                        .name(s.name)
                        .color(s.color)
                        .width(1.5),
                );
                plot_ui.points(
                    Points::new(PlotPoints::new(points))
                        .name(s.name)
                        .color(s.color)
                        .radius(2.5),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Seasonal SST time series
// ---------------------------------------------------------------------------

fn date_to_x(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

fn x_to_date(x: f64) -> Option<NaiveDate> {
    let days = x.round();
    if days < f64::from(i32::MIN) || days > f64::from(i32::MAX) {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(days as i32)
}

fn format_date_axis(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    x_to_date(mark.value)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Render the SST time series with one shaded band per season, spanning the
/// season's dates and the full temperature extent, labelled at its mean date.
pub fn sst_plot(ui: &mut Ui, series: &SstSeries, height: f32) {
    Plot::new("sst_plot")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Date")
        .y_axis_label("SST (°C)")
        .x_axis_formatter(format_date_axis)
        .label_formatter(|name, value| {
            let date = x_to_date(value.x)
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            let point = format!("{date}: {:.2} °C", value.y);
            if name.is_empty() {
                point
            } else {
                format!("{name}\n{point}")
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if let Some((lo, hi)) = series.extent {
                for span in &series.spans {
                    // Half a day either side so single-day seasons stay visible.
                    let x0 = date_to_x(span.start) - 0.5;
                    let x1 = date_to_x(span.end) + 0.5;
                    let band = PlotPoints::new(vec![[x0, lo], [x1, lo], [x1, hi], [x0, hi]]);
                    plot_ui.polygon(
                        Polygon::new(band)
                            .name(span.season.label())
                            .fill_color(season_fill(span.season))
                            .stroke(Stroke::NONE),
                    );
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(date_to_x(span.mean), hi),
                            RichText::new(span.season.label())
                                .strong()
                                .color(season_color(span.season)),
                        )
                        .anchor(Align2::CENTER_BOTTOM),
                    );
                }
            }

            let points: PlotPoints = series
                .records
                .iter()
                .map(|r| [date_to_x(r.date), r.temperature])
                .collect();
            plot_ui.line(Line::new(points).name("SST").color(Color32::LIGHT_BLUE).width(1.5));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_axis_round_trips_days() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 2).unwrap();
        assert_eq!(x_to_date(date_to_x(date)), Some(date));
        assert_eq!(x_to_date(date_to_x(date) + 0.4), Some(date));
        assert_eq!(x_to_date(f64::MAX), None);
    }
}
