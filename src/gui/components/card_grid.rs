// src/gui/components/card_grid.rs
use eframe::egui::{self, Color32, RichText};

use crate::card::CardView;

const CARD_WIDTH: f32 = 300.0;
const LOGO_SIZE: f32 = 44.0;

/// Cards in a grid, as many columns as fit.
pub fn draw(ui: &mut egui::Ui, cards: &[CardView]) {
    let spacing = ui.spacing().item_spacing.x + 12.0;
    let cols = ((ui.available_width() + spacing) / (CARD_WIDTH + spacing)).floor().max(1.0) as usize;

    egui::Grid::new("card_grid")
        .num_columns(cols)
        .spacing([12.0, 12.0])
        .show(ui, |ui| {
            for (i, card) in cards.iter().enumerate() {
                draw_card(ui, card);
                if (i + 1) % cols == 0 {
                    ui.end_row();
                }
            }
        });
}

fn draw_card(ui: &mut egui::Ui, card: &CardView) {
    egui::Frame::group(ui.style()).inner_margin(10.0).show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.set_min_height(240.0);
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                logo(ui, card.logo.as_deref());
                ui.vertical(|ui| {
                    ui.label(RichText::new(&card.title).strong());
                    ui.label(RichText::new(&card.company).weak());
                });
            });

            ui.add_space(4.0);
            ui.label(RichText::new(&card.description).small());
            ui.add_space(4.0);

            ui.horizontal_wrapped(|ui| {
                for b in &card.badges {
                    badge(ui, b, Color32::from_rgb(219, 234, 254));
                }
                if card.more_programs > 0 {
                    badge(ui, &format!("+{}", card.more_programs), Color32::from_gray(225));
                }
            });

            ui.add_space(4.0);
            egui::Grid::new(("card_facts", &card.id)).num_columns(2).show(ui, |ui| {
                fact(ui, "Kuota", &card.quota);
                fact(ui, "Pendaftar", &card.registered);
                fact(ui, "Provinsi", &card.province);
                fact(ui, "Kota/Kab", &card.city);
                fact(ui, "Batas daftar", &card.deadline);
                if let Some(start) = &card.start_date {
                    fact(ui, "Mulai", start);
                }
            });

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if card.fill != "-" {
                    badge(ui, &format!("Keterisian {}", card.fill), Color32::from_rgb(220, 252, 231));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(
                        egui::Hyperlink::from_label_and_url("Lihat detail", &card.detail_url)
                            .open_in_new_tab(true),
                    );
                });
            });
        });
    });
}

fn logo(ui: &mut egui::Ui, url: Option<&str>) {
    let size = egui::vec2(LOGO_SIZE, LOGO_SIZE);
    match url {
        Some(url) => {
            ui.add(egui::Image::new(url).fit_to_exact_size(size).corner_radius(4.0));
        }
        None => {
            let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
            let painter = ui.painter();
            painter.rect_filled(rect, 4.0, Color32::from_gray(230));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "No logo",
                egui::FontId::proportional(9.0),
                Color32::from_gray(120),
            );
        }
    }
}

fn badge(ui: &mut egui::Ui, text: &str, fill: Color32) {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().color(Color32::from_gray(40)));
        });
}

fn fact(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.label(RichText::new(label).small().weak());
    ui.label(RichText::new(value).small());
    ui.end_row();
}
