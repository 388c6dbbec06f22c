//! アップロード画像の確認
//!
//! 画像の中身は解析しない。形式・寸法・撮影日だけを読む。

use crate::error::{Result, SoilSurveyError};
use crate::scanner;
use soil_survey_common::texts::texts;
use soil_survey_common::Language;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// 撮影日時を探すタグ（優先順）
const CAPTURE_DATE_TAGS: [exif::Tag; 3] = [
    exif::Tag::DateTimeOriginal,
    exif::Tag::DateTimeDigitized,
    exif::Tag::DateTime,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub path: PathBuf,
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    /// EXIF撮影日時（なければ None）
    pub date: Option<String>,
}

impl UploadedImage {
    /// 要約・帳票用の説明文
    pub fn note(&self, language: Language) -> String {
        let t = texts(language);
        let mut note = format!(
            "{}: {} ({}x{})",
            t.uploaded_caption, self.file_name, self.width, self.height
        );
        if let Some(date) = &self.date {
            note.push_str(&format!(", {}: {}", t.capture_date, date));
        }
        note
    }
}

/// アップロード画像を確認する
pub fn inspect(path: &Path) -> Result<UploadedImage> {
    if !path.is_file() {
        return Err(SoilSurveyError::FileNotFound(path.display().to_string()));
    }

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default();
    if !scanner::is_image_extension(&ext) {
        return Err(SoilSurveyError::UnsupportedImage(path.display().to_string()));
    }

    let (width, height) = image::image_dimensions(path)
        .map_err(|e| SoilSurveyError::ImageLoad(format!("{}: {}", path.display(), e)))?;

    let date = capture_date(path);

    Ok(UploadedImage {
        path: path.to_path_buf(),
        file_name: path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default(),
        width,
        height,
        date,
    })
}

/// EXIFの撮影日時（読めなければ None、解析は続行）
fn capture_date(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    let data = match exif::Reader::new().read_from_container(&mut BufReader::new(file)) {
        Ok(data) => data,
        Err(e) => {
            tracing::debug!("No EXIF in {}: {}", path.display(), e);
            return None;
        }
    };

    let date = CAPTURE_DATE_TAGS
        .iter()
        .find_map(|tag| data.get_field(*tag, exif::In::PRIMARY))
        .map(|field| field.display_value().to_string());
    if date.is_none() {
        tracing::debug!("No capture date tag in {}", path.display());
    }
    date
}
