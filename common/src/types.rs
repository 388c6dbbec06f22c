//! サンプル・記録の型定義
//!
//! - Sample: 利用者の選択（表示値のまま）。変更のたびに新しい値を作る
//! - CanonicalSample: 完成サンプルの正規キー5つ（ルール評価の入力）
//! - Record: 記録ストアの1行

use crate::catalog::{self, AttributeCategory, CanonicalKey, Language};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// 土壌サンプル（5属性の選択 + アップロード画像）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sample {
    selections: BTreeMap<AttributeCategory, String>,
    image: Option<PathBuf>,
}

impl Sample {
    pub fn new() -> Self {
        Self::default()
    }

    /// 選択を反映した新しいサンプルを返す
    ///
    /// プレースホルダや空文字は「未選択」として扱う。
    pub fn with_selection(&self, language: Language, category: AttributeCategory, value: &str) -> Self {
        let mut next = self.clone();
        if catalog::is_placeholder(language, value) {
            next.selections.remove(&category);
        } else {
            next.selections.insert(category, value.trim().to_string());
        }
        next
    }

    pub fn without_selections(&self) -> Self {
        Self {
            selections: BTreeMap::new(),
            image: self.image.clone(),
        }
    }

    pub fn with_image(&self, image: Option<PathBuf>) -> Self {
        Self {
            selections: self.selections.clone(),
            image,
        }
    }

    pub fn selection(&self, category: AttributeCategory) -> Option<&str> {
        self.selections.get(&category).map(|s| s.as_str())
    }

    pub fn image(&self) -> Option<&Path> {
        self.image.as_deref()
    }

    /// 未選択のカテゴリ（表示順）
    pub fn missing(&self) -> Vec<AttributeCategory> {
        AttributeCategory::ALL
            .iter()
            .copied()
            .filter(|c| !self.selections.contains_key(c))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// 全属性を正規キーに変換（未完成なら None）
    pub fn canonicalize(&self, language: Language) -> Option<CanonicalSample> {
        let key = |category: AttributeCategory| {
            self.selection(category)
                .map(|value| catalog::normalize(language, category, value))
        };

        Some(CanonicalSample {
            color: key(AttributeCategory::Color)?,
            texture: key(AttributeCategory::Texture)?,
            structure: key(AttributeCategory::Structure)?,
            moisture: key(AttributeCategory::Moisture)?,
            roots: key(AttributeCategory::Roots)?,
        })
    }
}

/// 正規化済みの完成サンプル
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalSample {
    pub color: CanonicalKey,
    pub texture: CanonicalKey,
    pub structure: CanonicalKey,
    pub moisture: CanonicalKey,
    pub roots: CanonicalKey,
}

impl CanonicalSample {
    pub fn get(&self, category: AttributeCategory) -> &CanonicalKey {
        match category {
            AttributeCategory::Color => &self.color,
            AttributeCategory::Texture => &self.texture,
            AttributeCategory::Structure => &self.structure,
            AttributeCategory::Moisture => &self.moisture,
            AttributeCategory::Roots => &self.roots,
        }
    }

    pub fn is(&self, category: AttributeCategory, key: &str) -> bool {
        self.get(category).as_str() == key
    }

    pub fn is_any(&self, category: AttributeCategory, keys: &[&str]) -> bool {
        keys.iter().any(|key| self.is(category, key))
    }
}

/// 記録ストアの列（順序固定）
pub const RECORD_HEADERS: [&str; 7] = [
    "timestamp",
    "language",
    "color",
    "texture",
    "structure",
    "moisture",
    "roots",
];

/// 記録ストアの1行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub timestamp: String,
    pub language: Language,
    pub color: String,
    pub texture: String,
    pub structure: String,
    pub moisture: String,
    pub roots: String,
}

impl Record {
    /// 完成サンプルから記録を作る（値は表示値のまま保存）
    pub fn from_sample(sample: &Sample, language: Language, timestamp: &str) -> Option<Self> {
        let value = |category: AttributeCategory| sample.selection(category).map(str::to_string);

        Some(Self {
            timestamp: timestamp.to_string(),
            language,
            color: value(AttributeCategory::Color)?,
            texture: value(AttributeCategory::Texture)?,
            structure: value(AttributeCategory::Structure)?,
            moisture: value(AttributeCategory::Moisture)?,
            roots: value(AttributeCategory::Roots)?,
        })
    }

    pub fn fields(&self) -> [&str; 7] {
        [
            self.timestamp.as_str(),
            self.language.as_str(),
            self.color.as_str(),
            self.texture.as_str(),
            self.structure.as_str(),
            self.moisture.as_str(),
            self.roots.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(language: Language, values: [&str; 5]) -> Sample {
        AttributeCategory::ALL
            .iter()
            .zip(values)
            .fold(Sample::new(), |sample, (&category, value)| {
                sample.with_selection(language, category, value)
            })
    }

    #[test]
    fn test_new_sample_is_incomplete() {
        let sample = Sample::new();
        assert!(!sample.is_complete());
        assert_eq!(sample.missing(), AttributeCategory::ALL.to_vec());
        assert!(sample.canonicalize(Language::Es).is_none());
    }

    #[test]
    fn test_with_selection_returns_new_value() {
        let empty = Sample::new();
        let next = empty.with_selection(Language::Es, AttributeCategory::Color, "negro");
        assert_eq!(empty.selection(AttributeCategory::Color), None);
        assert_eq!(next.selection(AttributeCategory::Color), Some("negro"));
    }

    #[test]
    fn test_placeholder_clears_selection() {
        let sample = Sample::new()
            .with_selection(Language::Es, AttributeCategory::Roots, "Escasas")
            .with_selection(Language::Es, AttributeCategory::Roots, "Seleccionar opción");
        assert_eq!(sample.selection(AttributeCategory::Roots), None);
    }

    #[test]
    fn test_canonicalize_complete_sample() {
        let sample = complete(Language::Pt, ["preto", "argiloso", "maciça", "Alta", "Ausentes"]);
        assert!(sample.is_complete());

        let canonical = sample.canonicalize(Language::Pt).unwrap();
        assert_eq!(canonical.color.as_str(), "negro");
        assert_eq!(canonical.texture.as_str(), "arcilloso");
        assert_eq!(canonical.structure.as_str(), "masiva");
        assert_eq!(canonical.moisture.as_str(), "alta");
        assert_eq!(canonical.roots.as_str(), "ausentes");
    }

    #[test]
    fn test_missing_lists_unselected_in_order() {
        let sample = Sample::new()
            .with_selection(Language::Es, AttributeCategory::Texture, "franco")
            .with_selection(Language::Es, AttributeCategory::Roots, "Abundantes");
        assert_eq!(
            sample.missing(),
            vec![AttributeCategory::Color, AttributeCategory::Structure, AttributeCategory::Moisture]
        );
    }

    #[test]
    fn test_without_selections_keeps_image() {
        let sample = complete(Language::Es, ["gris", "franco", "granular", "Media", "Abundantes"])
            .with_image(Some(PathBuf::from("muestra.jpg")));
        let cleared = sample.without_selections();
        assert_eq!(cleared.image(), Some(Path::new("muestra.jpg")));
        assert!(cleared.missing().len() == 5);
    }

    #[test]
    fn test_record_from_sample_keeps_display_values() {
        let sample = complete(Language::Es, ["marrón", "franco", "granular", "Media", "Abundantes"]);
        let record = Record::from_sample(&sample, Language::Es, "2026-10-18 09:30:00").unwrap();
        assert_eq!(
            record.fields(),
            ["2026-10-18 09:30:00", "es", "marrón", "franco", "granular", "Media", "Abundantes"]
        );
    }

    #[test]
    fn test_record_from_incomplete_sample() {
        let sample = Sample::new().with_selection(Language::Es, AttributeCategory::Color, "negro");
        assert!(Record::from_sample(&sample, Language::Es, "2026-10-18 09:30:00").is_none());
    }
}
