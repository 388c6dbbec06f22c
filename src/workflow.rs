//! 解析後の処理（帳票の組み立て・記録・PDF出力）
//!
//! analyze コマンドと対話モードで共有する。

use crate::config::Config;
use crate::error::Result;
use crate::export;
use crate::records::RecordStore;
use crate::session::Session;
use crate::upload;
use chrono::{DateTime, Local};
use soil_survey_common::texts::texts;
use soil_survey_common::{Record, Report};
use std::path::PathBuf;

/// 記録ストアのタイムスタンプ形式
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 完成したサンプルから帳票を組み立てる（未完成なら None）
///
/// サンプルに画像があれば、その説明を要約欄に付ける。
pub fn build_report(session: &Session, now: &DateTime<Local>) -> Option<Report> {
    let interpretation = session.analysis()?;
    let report = Report::assemble(
        &session.sample,
        session.language,
        &interpretation,
        &now.format(TIMESTAMP_FORMAT).to_string(),
    );

    let note = session.sample.image().and_then(|path| match upload::inspect(path) {
        Ok(image) => Some(image.note(session.language)),
        Err(e) => {
            tracing::warn!("Image note skipped: {}", e);
            None
        }
    });
    Some(match note {
        Some(note) => report.with_image_note(note),
        None => report,
    })
}

/// 記録ストアに1件追記し、ストアのパスを返す
pub fn save_record(config: &Config, session: &Session, now: &DateTime<Local>) -> Result<Option<PathBuf>> {
    let timestamp = now.format(TIMESTAMP_FORMAT).to_string();
    let Some(record) = Record::from_sample(&session.sample, session.language, &timestamp) else {
        return Ok(None);
    };

    let store = RecordStore::for_language(&config.records_dir, session.language);
    store.append(&record)?;
    println!("✔ {}: {}", texts(session.language).record_saved, store.path().display());
    Ok(Some(store.path().to_path_buf()))
}

/// PDF帳票を出力
pub fn write_pdf(config: &Config, report: &Report, now: &DateTime<Local>) -> Result<PathBuf> {
    let path = export::export_report(report, &config.output_dir, now)?;
    println!("✔ {}: {}", texts(report.language).pdf_saved, path.display());
    Ok(path)
}
