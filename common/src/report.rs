//! 帳票組み立て
//!
//! 解析結果からPDF/JSON出力用の帳票データを作る（描画はCLI側）。

use crate::catalog::{self, AttributeCategory, Language};
use crate::interpret::Interpretation;
use crate::texts::texts;
use crate::types::Sample;
use serde::Serialize;

/// 要約欄の1行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub category: AttributeCategory,
    pub label: String,
    pub value: String,
}

/// 帳票データ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub language: Language,
    pub title: String,
    pub generated_at: String,
    pub summary_title: String,
    pub summary: Vec<SummaryLine>,
    /// アップロード画像の説明（ファイル名・撮影日など）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_note: Option<String>,
    pub interpretation_title: String,
    pub fragments: Vec<String>,
    pub structure_title: String,
    pub structure_details: String,
    pub recommendations_title: String,
    pub recommendations: Vec<String>,
}

impl Report {
    pub fn assemble(
        sample: &Sample,
        language: Language,
        interpretation: &Interpretation,
        generated_at: &str,
    ) -> Self {
        let t = texts(language);

        let summary = AttributeCategory::ALL
            .iter()
            .map(|&category| SummaryLine {
                category,
                label: t.label(category).to_string(),
                value: sample
                    .selection(category)
                    .map(|value| {
                        let key = catalog::normalize(language, category, value);
                        catalog::display_value(language, category, &key)
                    })
                    .unwrap_or_else(|| "-".to_string()),
            })
            .collect();

        Self {
            language,
            title: t.report_title.to_string(),
            generated_at: generated_at.to_string(),
            summary_title: t.summary_title.to_string(),
            summary,
            image_note: None,
            interpretation_title: t.interpret_block_title.to_string(),
            fragments: interpretation.fragments.iter().map(|f| f.text.clone()).collect(),
            structure_title: t.structure_info_title.to_string(),
            structure_details: interpretation.structure_details.clone(),
            recommendations_title: t.recs_title.to_string(),
            recommendations: interpretation.recommendation_texts(),
        }
    }

    pub fn with_image_note(mut self, note: impl Into<String>) -> Self {
        self.image_note = Some(note.into());
        self
    }

    /// "- ラベル: 値" 形式の要約行
    pub fn summary_lines(&self) -> Vec<String> {
        self.summary
            .iter()
            .map(|line| format!("- {}: {}", line.label, line.value))
            .collect()
    }

    /// Markdown装飾（** と *）を外した構造説明の行
    pub fn structure_detail_lines(&self) -> Vec<String> {
        self.structure_details
            .lines()
            .map(|line| line.replace("**", "").replace('*', ""))
            .filter(|line| !line.trim().is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpret::interpret;

    fn sample() -> Sample {
        [
            (AttributeCategory::Color, "negro"),
            (AttributeCategory::Texture, "arcilloso"),
            (AttributeCategory::Structure, "masiva"),
            (AttributeCategory::Moisture, "Alta"),
            (AttributeCategory::Roots, "Ausentes"),
        ]
        .iter()
        .fold(Sample::new(), |s, (category, value)| {
            s.with_selection(Language::Es, *category, value)
        })
    }

    #[test]
    fn test_assemble_summary_uses_display_values() {
        let sample = sample();
        let interpretation = interpret(&sample.canonicalize(Language::Es).unwrap(), Language::Es);
        let report = Report::assemble(&sample, Language::Es, &interpretation, "18/10/2026 09:30");

        assert_eq!(report.title, "Reporte de Análisis Visual de Suelos");
        assert_eq!(report.summary_lines()[0], "- Color del suelo: negro");
        assert_eq!(report.summary_lines()[3], "- Humedad: Alta");
        assert_eq!(report.fragments.len(), 5);
        assert_eq!(report.recommendations.len(), 4);
    }

    /// 入力の表記ゆれはカタログの表示値に揃える
    #[test]
    fn test_summary_shows_catalog_labels() {
        let sample = sample()
            .with_selection(Language::Es, AttributeCategory::Color, "marron")
            .with_selection(Language::Es, AttributeCategory::Texture, "ARCILLOSO");
        let interpretation = interpret(&sample.canonicalize(Language::Es).unwrap(), Language::Es);
        let report = Report::assemble(&sample, Language::Es, &interpretation, "");

        assert_eq!(report.summary[0].value, "marrón");
        assert_eq!(report.summary[1].value, "arcilloso");
    }

    #[test]
    fn test_structure_detail_lines_strip_markup() {
        let sample = sample();
        let interpretation = interpret(&sample.canonicalize(Language::Es).unwrap(), Language::Es);
        let report = Report::assemble(&sample, Language::Es, &interpretation, "");

        let lines = report.structure_detail_lines();
        assert_eq!(lines[0], "Estructura Masiva (Sin Estructura)");
        assert!(lines.iter().all(|l| !l.contains('*')));
    }

    #[test]
    fn test_serialize_camel_case() {
        let sample = sample();
        let interpretation = interpret(&sample.canonicalize(Language::Es).unwrap(), Language::Es);
        let report = Report::assemble(&sample, Language::Es, &interpretation, "now")
            .with_image_note("muestra.jpg");

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"generatedAt\":\"now\""));
        assert!(json.contains("\"imageNote\":\"muestra.jpg\""));
        assert!(json.contains("\"language\":\"es\""));
    }
}
