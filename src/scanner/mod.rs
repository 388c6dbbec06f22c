//! 参照画像ストアの走査
//!
//! `<reference_dir>/<カテゴリフォルダ>/<正規キー>/*.{png,jpg,jpeg}`

use crate::error::{Result, SoilSurveyError};
use soil_survey_common::{AttributeCategory, CanonicalKey};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "JPG", "JPEG", "PNG"];

pub fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&ext)
}

/// フォルダ直下の画像をファイル名順で返す
pub fn scan_folder(folder: &Path) -> Result<Vec<ImageInfo>> {
    if !folder.is_dir() {
        return Err(SoilSurveyError::FolderNotFound(folder.display().to_string()));
    }

    let mut images = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if let Some(ext) = path.extension() {
            if is_image_extension(&ext.to_string_lossy()) {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();

                images.push(ImageInfo {
                    path: path.to_path_buf(),
                    file_name,
                });
            }
        }
    }

    // ファイル名でソート
    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(images)
}

/// 参照画像の検索結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceImages {
    /// 参照フォルダが存在しない
    Missing(PathBuf),
    /// フォルダはあるが画像がない
    Empty(PathBuf),
    Found(PathBuf, Vec<ImageInfo>),
}

/// 参照画像ストア（読み取り専用）
#[derive(Debug, Clone)]
pub struct ReferenceLibrary {
    root: PathBuf,
}

impl ReferenceLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn folder(&self, category: AttributeCategory, key: &CanonicalKey) -> PathBuf {
        self.root.join(category.folder_name()).join(key.as_str())
    }

    /// 正規キーの参照画像を探す（フォルダ欠落・空は正常系）
    pub fn images(&self, category: AttributeCategory, key: &CanonicalKey) -> ReferenceImages {
        let folder = self.folder(category, key);

        if !folder.is_dir() {
            tracing::debug!("Reference folder missing: {}", folder.display());
            return ReferenceImages::Missing(folder);
        }

        match scan_folder(&folder) {
            Ok(images) if !images.is_empty() => ReferenceImages::Found(folder, images),
            Ok(_) => ReferenceImages::Empty(folder),
            Err(e) => {
                tracing::warn!("Failed to scan {}: {}", folder.display(), e);
                ReferenceImages::Empty(folder)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;

    #[test]
    fn test_is_image_extension() {
        assert!(is_image_extension("jpg"));
        assert!(is_image_extension("JPG"));
        assert!(is_image_extension("jpeg"));
        assert!(is_image_extension("png"));
        assert!(!is_image_extension("txt"));
        assert!(!is_image_extension("gif"));
    }

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"));
        assert!(matches!(result, Err(SoilSurveyError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_folder_with_images() {
        let temp_dir = tempfile::tempdir().unwrap();

        File::create(temp_dir.path().join("b.jpg")).unwrap().write_all(b"dummy").unwrap();
        File::create(temp_dir.path().join("a.PNG")).unwrap().write_all(b"dummy").unwrap();
        File::create(temp_dir.path().join("c.jpeg")).unwrap().write_all(b"dummy").unwrap();
        File::create(temp_dir.path().join("notas.txt")).unwrap().write_all(b"text").unwrap();
        fs::create_dir(temp_dir.path().join("sub.jpg")).unwrap();

        let result = scan_folder(temp_dir.path()).unwrap();
        let names: Vec<_> = result.iter().map(|i| i.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.PNG", "b.jpg", "c.jpeg"]);
    }

    #[test]
    fn test_reference_library_states() {
        let root = tempfile::tempdir().unwrap();
        let library = ReferenceLibrary::new(root.path());

        let missing = library.images(AttributeCategory::Color, &"negro".into());
        assert!(matches!(missing, ReferenceImages::Missing(dir) if dir.ends_with("color/negro")));

        fs::create_dir_all(root.path().join("textura").join("franco")).unwrap();
        let empty = library.images(AttributeCategory::Texture, &"franco".into());
        assert!(matches!(empty, ReferenceImages::Empty(_)));

        let folder = root.path().join("forma-estructura").join("masiva");
        fs::create_dir_all(&folder).unwrap();
        File::create(folder.join("01.jpg")).unwrap();
        let found = library.images(AttributeCategory::Structure, &"masiva".into());
        assert!(matches!(found, ReferenceImages::Found(_, images) if images.len() == 1));
    }
}
