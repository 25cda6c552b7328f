// src/gui/components/stats_banner.rs
//
// Live clock plus the five headline counters. A failed fetch replaces the
// counters with the error until the next successful poll.

use chrono::Utc;
use eframe::egui::{self, Color32, RichText};

use crate::core::format::{format_count, jakarta_clock};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let s = app.stats.snapshot();

    egui::Frame::group(ui.style()).inner_margin(12.0).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.heading("Statistik MagangHub");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(jakarta_clock(Utc::now())).monospace());
            });
        });
        ui.add_space(6.0);

        if s.loading {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Memuat data statistik...");
            });
        } else if let Some(err) = &s.error {
            ui.label(RichText::new(format!("Error: {err}")).color(Color32::from_rgb(220, 38, 38)));
        } else if let Some(data) = &s.data {
            ui.columns(5, |cols| {
                for (col, (label, value)) in cols.iter_mut().zip(data.entries()) {
                    col.vertical_centered(|ui| {
                        ui.label(RichText::new(format_count(value)).size(22.0).strong());
                        ui.label(RichText::new(label).small().weak());
                    });
                }
            });
        }

        ui.add_space(4.0);
        ui.label(RichText::new("Data diperbarui setiap menit").small().weak());
    });
}
