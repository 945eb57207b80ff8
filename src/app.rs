use eframe::egui::{self, Ui};

use crate::color::{profile_color, season_color};
use crate::state::AppState;
use crate::ui::plot::{profile_plot, sst_plot, ProfileSeries};
use crate::ui::panels;

const PROFILE_PLOT_HEIGHT: f32 = 380.0;
const SST_PLOT_HEIGHT: f32 = 420.0;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
}

impl DashboardApp {
    /// Run both pipelines once so the first frame has something to show.
    pub fn new(mut state: AppState) -> Self {
        state.reload();
        Self { state }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: both datasets ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    ui.heading("BATS Dashboard");
                    ui.separator();
                    profiles_section(ui, &self.state);
                    ui.add_space(12.0);
                    ui.separator();
                    sst_section(ui, &self.state);
                });
        });
    }
}

fn profiles_section(ui: &mut Ui, state: &AppState) {
    ui.heading("Temperature vs. Depth");

    let pair = match &state.profiles {
        Some(Ok(pair)) => pair,
        Some(Err(e)) => {
            panels::stage_error(ui, "temperature profiles", e);
            return;
        }
        None => {
            ui.spinner();
            return;
        }
    };

    let first = ProfileSeries {
        name: "Profile 1",
        records: &pair.first,
        color: profile_color(0),
    };
    let second = ProfileSeries {
        name: "Profile 2",
        records: &pair.second,
        color: profile_color(1),
    };

    ui.columns(3, |cols| {
        cols[0].strong("Profile 1");
        profile_plot(&mut cols[0], "profile_1", std::slice::from_ref(&first), PROFILE_PLOT_HEIGHT);
        cols[1].strong("Profile 2");
        profile_plot(&mut cols[1], "profile_2", std::slice::from_ref(&second), PROFILE_PLOT_HEIGHT);
        cols[2].strong("Combined");
        profile_plot(
            &mut cols[2],
            "profile_overlay",
            &[first, second],
            PROFILE_PLOT_HEIGHT,
        );
    });

    ui.add_space(8.0);
    ui.columns(2, |cols| {
        cols[0].strong("Profile 1 (preview)");
        panels::profile_table(&mut cols[0], "profile_1_table", &pair.first, state.preview_rows);
        cols[1].strong("Profile 2 (preview)");
        panels::profile_table(&mut cols[1], "profile_2_table", &pair.second, state.preview_rows);
    });
}

fn sst_section(ui: &mut Ui, state: &AppState) {
    ui.heading("Seasonal Evolution of SST");

    let series = match &state.sst {
        Some(Ok(series)) => series,
        Some(Err(e)) => {
            panels::stage_error(ui, "SST", e);
            return;
        }
        None => {
            ui.spinner();
            return;
        }
    };

    ui.label(format!("Day 0 = {}", state.reference_date.format("%Y-%m-%d")));
    sst_plot(ui, series, SST_PLOT_HEIGHT);
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for span in &series.spans {
            ui.colored_label(
                season_color(span.season),
                format!(
                    "{}: {} samples, {} to {}",
                    span.season,
                    span.count,
                    span.start.format("%Y-%m-%d"),
                    span.end.format("%Y-%m-%d")
                ),
            );
            ui.add_space(12.0);
        }
    });

    ui.add_space(8.0);
    ui.strong("SST (preview)");
    panels::sst_table(ui, &series.records, state.preview_rows);
}
