// src/gui/components/pagination.rs
use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App, page: usize, total_pages: usize) {
    ui.horizontal(|ui| {
        if ui.add_enabled(page > 1, egui::Button::new("‹ Sebelumnya")).clicked() {
            app.view.prev_page();
        }
        ui.label(format!("Halaman {page} dari {total_pages}"));
        if ui.add_enabled(page < total_pages, egui::Button::new("Berikutnya ›")).clicked() {
            app.view.next_page(total_pages);
        }
    });
}
