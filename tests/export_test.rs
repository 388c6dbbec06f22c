//! PDF/Excel出力の統合テスト

use chrono::Local;
use soil_survey::export::{self, excel, pdf};
use soil_survey::session::Session;
use soil_survey::workflow;
use soil_survey_common::{AttributeCategory, Language, Record};
use tempfile::tempdir;

fn complete_session(language: Language, values: [&str; 5]) -> Session {
    AttributeCategory::ALL
        .iter()
        .zip(values)
        .fold(Session::new(language), |s, (&category, value)| s.select(category, value))
}

#[test]
fn test_generate_pdf_es() {
    let dir = tempdir().unwrap();
    let session = complete_session(Language::Es, ["negro", "arcilloso", "masiva", "Alta", "Ausentes"]);
    let report = workflow::build_report(&session, &Local::now()).unwrap();

    let path = dir.path().join("reporte.pdf");
    pdf::generate_pdf(&report, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.len() > 100);
    assert!(bytes.starts_with(b"%PDF"));
}

/// 同じ時刻の出力は連番で別ファイルになる
#[test]
fn test_export_report_pt_creates_unique_files() {
    let dir = tempdir().unwrap();
    let session = complete_session(Language::Pt, ["cinza", "arenoso", "laminar", "Baixa", "Escassas"]);
    let now = Local::now();
    let report = workflow::build_report(&session, &now).unwrap();

    let first = export::export_report(&report, dir.path(), &now).unwrap();
    let second = export::export_report(&report, dir.path(), &now).unwrap();

    assert_ne!(first, second);
    assert!(first
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("analise_solo_"));
    assert!(second.exists());
}

#[test]
fn test_generate_records_workbook() {
    let dir = tempdir().unwrap();
    let records = vec![Record {
        timestamp: "2026-10-18 10:00:00".into(),
        language: Language::Es,
        color: "gris".into(),
        texture: "franco".into(),
        structure: "granular".into(),
        moisture: "Media".into(),
        roots: "Abundantes".into(),
    }];

    let path = dir.path().join("analisis.xlsx");
    excel::generate_records_workbook(&records, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    // xlsx は zip
    assert!(bytes.starts_with(b"PK"));
}
