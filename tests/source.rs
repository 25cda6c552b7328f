// tests/source.rs
use std::path::PathBuf;

use magang_katalog::source::{self, DataSource, Loader};

fn temp_file(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("katalog-{}-{name}", std::process::id()));
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn source_kind_follows_the_scheme() {
    assert_eq!(
        DataSource::parse("https://example.org/data.json"),
        DataSource::Url("https://example.org/data.json".into())
    );
    assert_eq!(
        DataSource::parse(" data/vacancies-aktif.json "),
        DataSource::File(PathBuf::from("data/vacancies-aktif.json"))
    );
}

#[test]
fn missing_or_non_list_data_is_empty() {
    assert!(source::parse_document(r#"{}"#).unwrap().is_empty());
    assert!(source::parse_document(r#"{"data": {"x": 1}}"#).unwrap().is_empty());
    assert!(source::parse_document(r#"{"data": null}"#).unwrap().is_empty());
}

#[test]
fn broken_json_is_an_error_for_fetch_but_empty_for_load() {
    let path = temp_file("broken.json", "{ not json");
    let src = DataSource::File(path.clone());

    assert!(source::fetch(&src).is_err());
    assert!(source::load(&src).is_empty());

    let _ = std::fs::remove_file(path);
}

#[test]
fn non_object_records_are_skipped() {
    let vs = source::parse_document(r#"{"data": [ {"id_posisi": "1"}, 5, "x", {"id_posisi": "2"} ]}"#).unwrap();
    let ids: Vec<_> = vs.iter().map(|v| v.id_posisi.as_str()).collect();
    assert_eq!(ids, ["1", "2"]);
}

#[test]
fn misshapen_nested_records_keep_the_vacancy() {
    let vs = source::parse_document(
        r#"{"data": [
            {"id_posisi": "1", "posisi": "Staf", "perusahaan": "PT A"},
            {"id_posisi": "2", "posisi": "Kasir", "jadwal": []},
            {"id_posisi": "3", "posisi": "Admin", "perusahaan": null, "jadwal": 7}
        ]}"#,
    )
    .unwrap();

    assert_eq!(vs.len(), 3);
    assert!(vs[0].perusahaan.is_none());
    assert_eq!(vs[0].company_name(), None);
    assert!(vs[1].jadwal.is_none());
    assert_eq!(vs[1].deadline(), None);
    assert!(vs[2].perusahaan.is_none() && vs[2].jadwal.is_none());
}

#[test]
fn missing_file_loads_empty() {
    let src = DataSource::File(PathBuf::from("/definitely/not/here.json"));
    assert!(source::load(&src).is_empty());
}

#[test]
fn loader_hands_the_dataset_out_once() {
    let path = temp_file("ok.json", r#"{"data": [{"id_posisi": "1", "posisi": "Staf"}]}"#);
    let loader = Loader::spawn(DataSource::File(path.clone()));
    let vs = loader.wait();
    assert_eq!(vs.len(), 1);
    assert_eq!(vs[0].posisi, "Staf");

    let mut loader = Loader::spawn_with(|| Vec::new(), || {});
    let mut got = None;
    for _ in 0..200 {
        if let Some(v) = loader.take() {
            got = Some(v);
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(5));
    }
    assert_eq!(got, Some(Vec::new()));
    assert!(!loader.is_loading());
    assert!(loader.take().is_none());

    let _ = std::fs::remove_file(path);
}
