// src/gui/components/filter_panel.rs
//
// Left sidebar. Every control edits the draft criteria only; "Cari" (or Enter
// in the keyword box) commits them, "Reset" clears both copies.

use eframe::egui::{self, Color32, RichText};

use super::filter_select::FilterSelect;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(6.0);
    ui.heading("Filter Lowongan");
    ui.separator();

    ui.label(RichText::new("Cari posisi").small());
    let resp = ui.add(
        egui::TextEdit::singleline(&mut app.view.draft.q)
            .hint_text("Ketik nama posisi...")
            .desired_width(f32::INFINITY),
    );
    if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        app.view.apply();
    }

    let opts = app.catalog.options();

    FilterSelect { label: "Provinsi", options: &opts.provinces, placeholder: None }
        .show(ui, &mut app.view.draft.province, &mut app.search.province);
    FilterSelect { label: "Kota/Kab", options: &opts.cities, placeholder: None }
        .show(ui, &mut app.view.draft.city, &mut app.search.city);
    FilterSelect { label: "Perusahaan", options: &opts.companies, placeholder: None }
        .show(ui, &mut app.view.draft.company, &mut app.search.company);
    FilterSelect {
        label: "Program Studi",
        options: &opts.programs,
        placeholder: Some("Pilih atau ketik program studi..."),
    }
    .show(ui, &mut app.view.draft.program, &mut app.search.program);

    ui.add_space(14.0);
    ui.horizontal(|ui| {
        if ui.button("Reset").clicked() {
            app.view.reset();
        }
        let cari = egui::Button::new(RichText::new("Cari").color(Color32::WHITE))
            .fill(Color32::from_rgb(37, 99, 235));
        if ui.add(cari).clicked() {
            app.view.apply();
        }
    });

    if app.view.has_pending_edits() {
        ui.add_space(4.0);
        ui.label(RichText::new("Tekan Cari untuk menerapkan filter.").weak().small());
    }

    if app.is_loading() {
        ui.add_space(8.0);
        ui.label(RichText::new("Pilihan filter dimuat bersama data...").weak().small());
    }
}
