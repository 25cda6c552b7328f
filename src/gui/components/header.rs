// src/gui/components/header.rs
use eframe::egui::{self, RichText};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.heading("Katalog Lowongan");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(format!("Update data : {}", app.options.last_updated)).weak());
        });
    });
    ui.add_space(6.0);
}
