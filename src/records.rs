//! 記録ストア（追記専用CSV）
//!
//! ヘッダーは新規作成時または空ファイルのときだけ書く。
//! 1回の追記は1行分をバッファで整形してから1度の write_all で書き込む。

use crate::error::{Result, SoilSurveyError};
use soil_survey_common::types::RECORD_HEADERS;
use soil_survey_common::{Language, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// 言語ごとの既定ファイル名
pub fn default_file_name(language: Language) -> &'static str {
    match language {
        Language::Es => "analisis_suelos.csv",
        Language::Pt => "analises_solos.csv",
    }
}

#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn for_language(dir: &Path, language: Language) -> Self {
        Self::new(dir.join(default_file_name(language)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ストアにデータがあるか（存在して空でない）
    pub fn has_data(&self) -> bool {
        std::fs::metadata(&self.path)
            .map(|m| m.len() > 0)
            .unwrap_or(false)
    }

    /// 1件追記する
    pub fn append(&self, record: &Record) -> Result<()> {
        let needs_header = !self.has_data();

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        if needs_header {
            writer.write_record(RECORD_HEADERS)?;
        }
        writer.write_record(record.fields())?;
        let buffer = writer
            .into_inner()
            .map_err(|e| SoilSurveyError::Io(e.into_error()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&buffer)?;
        file.flush()?;

        tracing::info!("Appended record to {}", self.path.display());
        Ok(())
    }

    /// 物理行数（ヘッダー込み）
    pub fn line_count(&self) -> Result<usize> {
        if !self.has_data() {
            return Ok(0);
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(content.lines().count())
    }

    /// 全件読み込み（ファイルがなければ空）
    pub fn read_all(&self) -> Result<Vec<Record>> {
        if !self.has_data() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: Record = row?;
            records.push(record);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(color: &str) -> Record {
        Record {
            timestamp: "2026-10-18 09:30:00".into(),
            language: Language::Es,
            color: color.into(),
            texture: "franco".into(),
            structure: "granular".into(),
            moisture: "Media".into(),
            roots: "Abundantes".into(),
        }
    }

    #[test]
    fn test_default_file_names() {
        assert_eq!(default_file_name(Language::Es), "analisis_suelos.csv");
        assert_eq!(default_file_name(Language::Pt), "analises_solos.csv");
    }

    #[test]
    fn test_first_append_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::for_language(dir.path(), Language::Es);
        store.append(&record("negro")).unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines[0], "timestamp,language,color,texture,structure,moisture,roots");
        assert_eq!(lines[1], "2026-10-18 09:30:00,es,negro,franco,granular,Media,Abundantes");
    }

    #[test]
    fn test_empty_file_gets_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registros.csv");
        std::fs::write(&path, "").unwrap();

        let store = RecordStore::new(&path);
        store.append(&record("gris")).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("timestamp,"));
    }

    #[test]
    fn test_read_all_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("nested").join("registros.csv"));
        assert!(store.read_all().unwrap().is_empty());

        store.append(&record("negro")).unwrap();
        store.append(&record("pardo-marrón")).unwrap();

        let records = store.read_all().unwrap();
        assert_eq!(records, vec![record("negro"), record("pardo-marrón")]);
    }
}
