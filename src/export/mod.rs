pub mod excel;
pub mod pdf;

use crate::error::Result;
use chrono::{DateTime, Local};
use soil_survey_common::{Language, Report};
use std::path::{Path, PathBuf};

/// 帳票ファイル名の接頭辞
fn report_prefix(language: Language) -> &'static str {
    match language {
        Language::Es => "analisis_suelo",
        Language::Pt => "analise_solo",
    }
}

pub fn report_file_name(language: Language, stamp: &str) -> String {
    format!("{}_{}.pdf", report_prefix(language), stamp)
}

/// 出力先パスを決める（同じ秒に既存があれば連番を付ける）
pub fn report_path(dir: &Path, language: Language, time: &DateTime<Local>) -> PathBuf {
    let stamp = time.format("%Y%m%d_%H%M%S").to_string();
    let path = dir.join(report_file_name(language, &stamp));
    if !path.exists() {
        return path;
    }

    (2..)
        .map(|n| dir.join(report_file_name(language, &format!("{}_{}", stamp, n))))
        .find(|candidate| !candidate.exists())
        .unwrap_or(path)
}

/// 帳票をPDFで書き出し、書き出したパスを返す
pub fn export_report(report: &Report, dir: &Path, time: &DateTime<Local>) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = report_path(dir, report.language, time);
    pdf::generate_pdf(report, &path)?;
    tracing::info!("Wrote report {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 18, 9, 30, 5).unwrap()
    }

    #[test]
    fn test_report_file_names() {
        assert_eq!(
            report_file_name(Language::Es, "20261018_093005"),
            "analisis_suelo_20261018_093005.pdf"
        );
        assert_eq!(
            report_file_name(Language::Pt, "20261018_093005"),
            "analise_solo_20261018_093005.pdf"
        );
    }

    #[test]
    fn test_report_path_is_unique() {
        let dir = tempfile::tempdir().unwrap();
        let first = report_path(dir.path(), Language::Es, &fixed_time());
        assert!(first.ends_with("analisis_suelo_20261018_093005.pdf"));

        std::fs::write(&first, b"%PDF").unwrap();
        let second = report_path(dir.path(), Language::Es, &fixed_time());
        assert!(second.ends_with("analisis_suelo_20261018_093005_2.pdf"));
    }
}
