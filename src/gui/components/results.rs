// src/gui/components/results.rs
//
// Result header (count + sort), card grid and pagination.

use eframe::egui::{self, RichText};

use super::{card_grid, pagination};
use crate::card::CardView;
use crate::gui::app::App;
use crate::model::SortMode;

/// Owned copy of one rendered page, so `app` is free to change afterwards.
struct PageSnapshot {
    cards: Vec<CardView>,
    total: usize,
    page: usize,
    total_pages: usize,
}

impl PageSnapshot {
    fn capture(app: &mut App) -> Self {
        let base = app.options.detail_base_url.clone();
        let view = app.current_view();
        Self {
            cards: view.visible().map(|v| CardView::from_vacancy(v, &base)).collect(),
            total: view.total(),
            page: view.page(),
            total_pages: view.total_pages(),
        }
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let snap = PageSnapshot::capture(app);

    ui.horizontal(|ui| {
        ui.heading("Lowongan Aktif");
        ui.label(RichText::new(format!("{} hasil", snap.total)).weak());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut sort = app.view.committed().sort;
            egui::ComboBox::from_id_salt("sort_mode")
                .selected_text(sort.label())
                .width(200.0)
                .show_ui(ui, |ui| {
                    for mode in SortMode::ALL {
                        ui.selectable_value(&mut sort, mode, mode.label());
                    }
                });
            ui.label("Urutkan");
            app.view.set_sort(sort);
        });
    });
    ui.separator();

    if app.is_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Memuat data...");
        });
        return;
    }

    if snap.cards.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Tidak ada lowongan yang cocok.").weak());
        });
        return;
    }

    card_grid::draw(ui, &snap.cards);
    ui.add_space(12.0);
    pagination::draw(ui, app, snap.page, snap.total_pages);
}
