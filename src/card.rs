// src/card.rs
//
// Display model for one vacancy card. Both front ends render from this,
// so every "missing value" rule lives in one place.

use serde::Serialize;

use crate::config::consts::{DESCRIPTION_MAX_CHARS, MAX_PROGRAM_BADGES};
use crate::core::format::{fill_percentage, format_date, truncate_chars};
use crate::model::Vacancy;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub company: String,
    /// `None` → draw the placeholder
    pub logo: Option<String>,
    pub description: String,
    pub quota: String,
    pub registered: String,
    pub province: String,
    pub city: String,
    pub deadline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    pub badges: Vec<String>,
    /// Programs beyond the badges shown
    pub more_programs: usize,
    pub fill: String,
    pub detail_url: String,
}

impl CardView {
    pub fn from_vacancy(v: &Vacancy, detail_base_url: &str) -> Self {
        let programs = v.programs();
        let more_programs = programs.len().saturating_sub(MAX_PROGRAM_BADGES);
        let badges = programs
            .into_iter()
            .take(MAX_PROGRAM_BADGES)
            .map(|p| p.title)
            .collect();

        let dash = |s: Option<&str>| s.filter(|s| !s.is_empty()).unwrap_or("-").to_string();

        Self {
            id: v.id_posisi.clone(),
            title: v.posisi.clone(),
            company: v.company_name().unwrap_or_default().to_string(),
            logo: v.logo().map(str::to_string),
            description: truncate_chars(&v.deskripsi_posisi, DESCRIPTION_MAX_CHARS),
            quota: v.jumlah_kuota.map(|n| n.to_string()).unwrap_or_else(|| "-".into()),
            registered: v.registered_or_zero().to_string(),
            province: dash(v.province()),
            city: dash(v.city()),
            deadline: format_date(v.deadline()),
            start_date: v.start_date().map(|d| format_date(Some(d))).filter(|d| d != "-"),
            badges,
            more_programs,
            fill: fill_percentage(v.jumlah_kuota, v.jumlah_terdaftar),
            detail_url: format!("{detail_base_url}{}", v.id_posisi),
        }
    }

    /// Plain-text block for the CLI.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("[{}] {}\n", self.id, self.title));
        if !self.company.is_empty() {
            out.push_str(&format!("    {}\n", self.company));
        }
        if !self.description.is_empty() {
            out.push_str(&format!("    {}\n", self.description));
        }
        out.push_str(&format!(
            "    Kuota: {} | Pendaftar: {} | Keterisian: {}\n",
            self.quota, self.registered, self.fill
        ));
        out.push_str(&format!("    Provinsi: {} | Kota/Kab: {}\n", self.province, self.city));
        out.push_str(&format!("    Batas daftar: {}", self.deadline));
        if let Some(start) = &self.start_date {
            out.push_str(&format!(" | Mulai: {start}"));
        }
        out.push('\n');
        if !self.badges.is_empty() {
            let mut line = self.badges.join(", ");
            if self.more_programs > 0 {
                line.push_str(&format!(" +{}", self.more_programs));
            }
            out.push_str(&format!("    Program: {line}\n"));
        }
        out.push_str(&format!("    {}\n", self.detail_url));
        out
    }
}
