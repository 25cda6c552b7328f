// tests/card.rs
use magang_katalog::card::CardView;
use magang_katalog::model::{Company, ProgramField, ProgramStudy, Schedule, Vacancy};

const BASE: &str = "https://maganghub.kemnaker.go.id/lowongan/view/";

fn full() -> Vacancy {
    Vacancy {
        id_posisi: "abc-123".into(),
        posisi: "Staf Keuangan".into(),
        deskripsi_posisi: "x".repeat(200),
        jumlah_kuota: Some(10),
        jumlah_terdaftar: Some(20),
        program_studi: Some(ProgramField::List(
            ["A", "B", "C", "D", "E", "F"].iter().map(|t| ProgramStudy::new(*t, *t)).collect(),
        )),
        perusahaan: Some(Company {
            nama_perusahaan: "PT Maju".into(),
            logo: Some("https://cdn.example/logo.png".into()),
            nama_provinsi: Some("Bali".into()),
            nama_kabupaten: Some("Badung".into()),
            ..Company::default()
        }),
        jadwal: Some(Schedule {
            tanggal_batas_pendaftaran: Some("2025-10-31".into()),
            ..Schedule::default()
        }),
    }
}

#[test]
fn full_record_renders_every_field() {
    let c = CardView::from_vacancy(&full(), BASE);
    assert_eq!(c.fill, "50.00%");
    assert_eq!(c.detail_url, format!("{BASE}abc-123"));
    assert_eq!(c.badges, ["A", "B", "C", "D"]);
    assert_eq!(c.more_programs, 2);
    assert_eq!(c.deadline, "31/10/2025");
    assert_eq!(c.description.chars().count(), 161);
    assert!(c.description.ends_with('…'));
    assert_eq!(c.logo.as_deref(), Some("https://cdn.example/logo.png"));
    assert_eq!(c.start_date, None);
}

#[test]
fn missing_values_fall_back() {
    let v = Vacancy { id_posisi: "1".into(), posisi: "Kasir".into(), ..Vacancy::default() };
    let c = CardView::from_vacancy(&v, BASE);
    assert_eq!(c.quota, "-");
    assert_eq!(c.registered, "0");
    assert_eq!(c.province, "-");
    assert_eq!(c.city, "-");
    assert_eq!(c.deadline, "-");
    assert_eq!(c.fill, "-");
    assert!(c.logo.is_none());
    assert!(c.badges.is_empty());
}

#[test]
fn zero_registered_has_no_fill() {
    let mut v = full();
    v.jumlah_terdaftar = Some(0);
    assert_eq!(CardView::from_vacancy(&v, BASE).fill, "-");
}

#[test]
fn text_block_carries_the_labels() {
    let text = CardView::from_vacancy(&full(), BASE).to_text();
    assert!(text.starts_with("[abc-123] Staf Keuangan\n"));
    assert!(text.contains("Kuota: 10 | Pendaftar: 20 | Keterisian: 50.00%"));
    assert!(text.contains("Program: A, B, C, D +2"));
    assert!(text.contains("Batas daftar: 31/10/2025"));
}
