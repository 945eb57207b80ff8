use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, DatePickerButton, TableBuilder};

use crate::data::error::PipelineError;
use crate::data::profile::ProfileRecord;
use crate::data::sst::SstRecord;
use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open profiles…").clicked() {
                open_profiles_dialog(state);
                ui.close_menu();
            }
            if ui.button("Open SST…").clicked() {
                open_sst_dialog(state);
                ui.close_menu();
            }
        });

        if ui.button("⟳ Reload").clicked() {
            state.reload();
        }

        ui.separator();

        ui.label("Day 0:");
        let mut date = state.reference_date;
        if ui
            .add(DatePickerButton::new(&mut date).id_salt("reference_date"))
            .changed()
            && date != state.reference_date
        {
            log::info!("Reference date set to {date}");
            state.set_reference_date(date);
        }

        ui.separator();

        ui.label(format!(
            "{}  |  {}",
            state.profiles_path.display(),
            state.sst_path.display()
        ));
    });
}

// ---------------------------------------------------------------------------
// Stage errors
// ---------------------------------------------------------------------------

/// Render a failed stage in place of its charts.
pub fn stage_error(ui: &mut Ui, stage: &str, err: &PipelineError) {
    ui.label(
        RichText::new(format!("Error loading {stage} data ({}): {err}", err.kind()))
            .color(Color32::RED),
    );
}

// ---------------------------------------------------------------------------
// Tabular previews
// ---------------------------------------------------------------------------

/// First `limit` records of a profile.
pub fn profile_table(ui: &mut Ui, id: &str, records: &[ProfileRecord], limit: usize) {
    let shown = &records[..records.len().min(limit)];
    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::auto().at_least(80.0))
            .column(Column::remainder())
            .header(ROW_HEIGHT, |mut header| {
                header.col(|ui| {
                    ui.strong("Depth (m)");
                });
                header.col(|ui| {
                    ui.strong("Temperature (°C)");
                });
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, shown.len(), |mut row| {
                    let r = &shown[row.index()];
                    row.col(|ui| {
                        ui.label(format!("{}", r.depth));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.3}", r.temperature));
                    });
                });
            });
    });
    ui.weak(format!("{} of {} rows", shown.len(), records.len()));
}

/// First `limit` SST records.
pub fn sst_table(ui: &mut Ui, records: &[SstRecord], limit: usize) {
    let shown = &records[..records.len().min(limit)];
    ui.push_id("sst_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::auto().at_least(70.0))
            .column(Column::auto().at_least(90.0))
            .column(Column::auto().at_least(110.0))
            .column(Column::remainder())
            .header(ROW_HEIGHT, |mut header| {
                for title in ["Day offset", "Date", "SST (°C)", "Season"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, shown.len(), |mut row| {
                    let r = &shown[row.index()];
                    row.col(|ui| {
                        ui.label(format!("{}", r.day_offset));
                    });
                    row.col(|ui| {
                        ui.label(r.date.format("%Y-%m-%d").to_string());
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.3}", r.temperature));
                    });
                    row.col(|ui| {
                        ui.label(r.season.label());
                    });
                });
            });
    });
    ui.weak(format!("{} of {} rows", shown.len(), records.len()));
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

fn pick_source(title: &str) -> Option<std::path::PathBuf> {
    rfd::FileDialog::new()
        .set_title(title)
        .add_filter("Supported files", &["xlsx", "xlsm", "xls", "xlsb", "ods", "csv", "tsv", "txt", "dat"])
        .add_filter("Spreadsheets", &["xlsx", "xlsm", "xls", "xlsb", "ods"])
        .add_filter("Delimited text", &["csv", "tsv", "txt", "dat"])
        .pick_file()
}

pub fn open_profiles_dialog(state: &mut AppState) {
    if let Some(path) = pick_source("Open temperature profiles") {
        log::info!("Profiles source set to {}", path.display());
        state.set_profiles_path(path);
    }
}

pub fn open_sst_dialog(state: &mut AppState) {
    if let Some(path) = pick_source("Open sea-surface temperature") {
        log::info!("SST source set to {}", path.display());
        state.set_sst_path(path);
    }
}
