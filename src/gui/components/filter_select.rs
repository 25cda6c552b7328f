// src/gui/components/filter_select.rs
//
// Searchable single-choice select with an "all" entry at the top.
// Picking the current value again clears it.

use eframe::egui::{self, RichText};

pub struct FilterSelect<'a> {
    pub label: &'a str,
    pub options: &'a [String],
    pub placeholder: Option<&'a str>,
}

impl FilterSelect<'_> {
    pub fn show(&self, ui: &mut egui::Ui, value: &mut String, search: &mut String) {
        ui.add_space(8.0);
        ui.label(RichText::new(self.label).small());

        let label_lc = self.label.to_lowercase();
        let shown = if value.is_empty() {
            self.placeholder
                .map(str::to_string)
                .unwrap_or_else(|| format!("Pilih {label_lc}"))
        } else {
            value.clone()
        };

        egui::ComboBox::from_id_salt(("filter_select", self.label))
            .selected_text(shown)
            .width(ui.available_width())
            .height(320.0)
            .close_behavior(egui::PopupCloseBehavior::CloseOnClickOutside)
            .show_ui(ui, |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut *search)
                        .hint_text(format!("Cari {label_lc}..."))
                        .desired_width(f32::INFINITY),
                );
                ui.separator();

                if ui.selectable_label(value.is_empty(), "Semua").clicked() {
                    value.clear();
                }

                let needle = search.to_lowercase();
                let mut hits = 0usize;
                for opt in self.options.iter().filter(|o| matches_search(o, &needle)) {
                    hits += 1;
                    if ui.selectable_label(*value == *opt, opt.as_str()).clicked() {
                        *value = toggle_choice(value, opt);
                    }
                }
                if hits == 0 {
                    ui.label(RichText::new("Tidak ditemukan.").weak());
                }
            });
    }
}

fn matches_search(option: &str, needle_lc: &str) -> bool {
    needle_lc.is_empty() || option.to_lowercase().contains(needle_lc)
}

/// New value after picking `picked` while `current` is selected.
pub fn toggle_choice(current: &str, picked: &str) -> String {
    if current == picked { String::new() } else { picked.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picking_the_selected_value_clears_it() {
        assert_eq!(toggle_choice("Bali", "Bali"), "");
        assert_eq!(toggle_choice("Bali", "Aceh"), "Aceh");
        assert_eq!(toggle_choice("", "Aceh"), "Aceh");
    }

    #[test]
    fn search_is_case_insensitive() {
        assert!(matches_search("Jawa Barat", "barat"));
        assert!(matches_search("Jawa Barat", ""));
        assert!(!matches_search("Jawa Barat", "timur"));
    }
}
