// src/model.rs
//
// Wire shapes for the vacancy dataset and the view-side filter criteria.
// Field names follow the dataset (Indonesian) so serde needs no renames.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::parse::{self, lenient_string, opt_count, opt_lenient_string, opt_record};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramStudy {
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
}

impl ProgramStudy {
    pub fn new(value: impl Into<String>, title: impl Into<String>) -> Self {
        Self { value: value.into(), title: title.into() }
    }
}

/// `program_studi` as it arrives: a list, a JSON string of a list, or junk.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProgramField {
    List(Vec<ProgramStudy>),
    Text(String),
    Other(serde_json::Value),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Company {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id_perusahaan: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub nama_perusahaan: String,
    #[serde(default, deserialize_with = "opt_lenient_string")]
    pub alamat: Option<String>,
    #[serde(default, deserialize_with = "opt_lenient_string")]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "opt_lenient_string")]
    pub nama_provinsi: Option<String>,
    #[serde(default, deserialize_with = "opt_lenient_string")]
    pub nama_kabupaten: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Schedule {
    #[serde(default, deserialize_with = "opt_lenient_string")]
    pub tanggal_batas_pendaftaran: Option<String>,
    #[serde(default, deserialize_with = "opt_lenient_string")]
    pub tanggal_pendaftaran_akhir: Option<String>,
    #[serde(default, deserialize_with = "opt_lenient_string")]
    pub tanggal_mulai: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Vacancy {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id_posisi: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub posisi: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub deskripsi_posisi: String,
    #[serde(default, deserialize_with = "opt_count")]
    pub jumlah_kuota: Option<u64>,
    #[serde(default, deserialize_with = "opt_count")]
    pub jumlah_terdaftar: Option<u64>,
    #[serde(default)]
    pub program_studi: Option<ProgramField>,
    #[serde(default, deserialize_with = "opt_record")]
    pub perusahaan: Option<Company>,
    #[serde(default, deserialize_with = "opt_record")]
    pub jadwal: Option<Schedule>,
}

impl Vacancy {
    /// Study programs, whichever shape `program_studi` came in.
    pub fn programs(&self) -> Vec<ProgramStudy> {
        parse::parse_programs(self.program_studi.as_ref())
    }

    pub fn company_name(&self) -> Option<&str> {
        self.perusahaan.as_ref().map(|c| c.nama_perusahaan.as_str())
    }

    pub fn province(&self) -> Option<&str> {
        self.perusahaan.as_ref().and_then(|c| c.nama_provinsi.as_deref())
    }

    pub fn city(&self) -> Option<&str> {
        self.perusahaan.as_ref().and_then(|c| c.nama_kabupaten.as_deref())
    }

    pub fn logo(&self) -> Option<&str> {
        self.perusahaan
            .as_ref()
            .and_then(|c| c.logo.as_deref())
            .filter(|s| !s.trim().is_empty())
    }

    pub fn deadline(&self) -> Option<&str> {
        self.jadwal.as_ref().and_then(|j| j.tanggal_batas_pendaftaran.as_deref())
    }

    pub fn start_date(&self) -> Option<&str> {
        self.jadwal.as_ref().and_then(|j| j.tanggal_mulai.as_deref())
    }

    /// Registered applicants, missing counted as zero.
    pub fn registered_or_zero(&self) -> u64 {
        self.jumlah_terdaftar.unwrap_or(0)
    }

    /// Quota per registered applicant. `None` when either side is unknown
    /// or nobody has registered yet.
    pub fn chance(&self) -> Option<f64> {
        match (self.jumlah_kuota, self.jumlah_terdaftar) {
            (Some(q), Some(r)) if r > 0 => Some(q as f64 / r as f64),
            _ => None,
        }
    }
}

/// Sort selector. `None` keeps dataset order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortMode {
    #[default]
    None,
    RegisteredAsc,
    RegisteredDesc,
    ChanceAsc,
    ChanceDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 5] = [
        SortMode::None,
        SortMode::RegisteredAsc,
        SortMode::RegisteredDesc,
        SortMode::ChanceAsc,
        SortMode::ChanceDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::None => "",
            SortMode::RegisteredAsc => "jumlah_terdaftar_asc",
            SortMode::RegisteredDesc => "jumlah_terdaftar_desc",
            SortMode::ChanceAsc => "chance_asc",
            SortMode::ChanceDesc => "chance_desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::None => "Urutan asli",
            SortMode::RegisteredAsc => "Pendaftar paling sedikit",
            SortMode::RegisteredDesc => "Pendaftar paling banyak",
            SortMode::ChanceAsc => "Peluang terkecil",
            SortMode::ChanceDesc => "Peluang terbesar",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(SortMode::None);
        }
        SortMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown sort mode: {s}"))
    }
}

/// Filter criteria. Empty strings mean "no constraint".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filters {
    pub q: String,
    pub province: String,
    pub city: String,
    pub company: String,
    pub program: String,
    pub sort: SortMode,
}

impl Filters {
    /// No text criterion set (sort is not a filter).
    pub fn is_unfiltered(&self) -> bool {
        self.q.is_empty()
            && self.province.is_empty()
            && self.city.is_empty()
            && self.company.is_empty()
            && self.program.is_empty()
    }
}
