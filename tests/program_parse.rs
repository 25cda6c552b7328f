// tests/program_parse.rs
//
// `program_studi` arrives as a list or as a JSON string of a list.

use magang_katalog::core::parse::{parse_program_text, parse_programs};
use magang_katalog::model::{ProgramField, ProgramStudy, Vacancy};
use magang_katalog::source::parse_document;

#[test]
fn encoded_string_decodes_to_its_list() {
    let got = parse_program_text(r#"[{"value":"cs","title":"Computer Science"}]"#);
    assert_eq!(got, vec![ProgramStudy::new("cs", "Computer Science")]);
}

#[test]
fn garbage_string_is_empty() {
    assert!(parse_program_text("not json").is_empty());
    assert!(parse_program_text(r#"{"value":"cs"}"#).is_empty());
    assert!(parse_programs(None).is_empty());
}

#[test]
fn native_list_is_unchanged() {
    let list = vec![ProgramStudy::new("a", "Akuntansi"), ProgramStudy::new("b", "Biologi")];
    let field = ProgramField::List(list.clone());
    assert_eq!(parse_programs(Some(&field)), list);
}

#[test]
fn records_decode_whatever_shape_the_fields_take() {
    let doc = r#"{ "data": [
        { "id_posisi": 7, "posisi": "Staf", "jumlah_kuota": "3", "jumlah_terdaftar": 12,
          "program_studi": [{"value": "x", "title": "Hukum"}] },
        { "id_posisi": "b", "posisi": "Kasir", "jumlah_kuota": null,
          "program_studi": "[{\"value\":\"m\",\"title\":\"Manajemen\"}]",
          "perusahaan": { "nama_perusahaan": "PT A", "nama_provinsi": "Bali" } },
        { "id_posisi": "c", "posisi": "Gudang", "program_studi": 42 }
    ] }"#;

    let vs: Vec<Vacancy> = parse_document(doc).unwrap();
    assert_eq!(vs.len(), 3);

    assert_eq!(vs[0].id_posisi, "7");
    assert_eq!(vs[0].jumlah_kuota, Some(3));
    assert_eq!(vs[0].jumlah_terdaftar, Some(12));
    assert_eq!(vs[0].programs()[0].title, "Hukum");

    assert_eq!(vs[1].jumlah_kuota, None);
    assert_eq!(vs[1].programs()[0].title, "Manajemen");
    assert_eq!(vs[1].province(), Some("Bali"));
    assert_eq!(vs[1].city(), None);

    assert!(vs[2].programs().is_empty());
}
