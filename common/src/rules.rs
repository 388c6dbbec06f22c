//! 推奨事項ルール
//!
//! (条件, テキスト) の順序付きリスト。条件は正規キーだけを見るので、
//! どの言語で選択しても同じルールが発火する。
//! 各ルールは独立に評価され、重複は除去しない。

use crate::catalog::{AttributeCategory, Language};
use crate::types::CanonicalSample;
use serde::Serialize;

/// ルール識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    Drainage,
    SoilCover,
    OrganicMatter,
    ClayTillage,
    CompactionRelief,
    RootDevelopment,
    /// どのルールも発火しなかった場合の既定
    GoodPractice,
}

/// 推奨事項ルール
pub struct Rule {
    pub id: RuleId,
    predicate: fn(&CanonicalSample) -> bool,
    es: &'static str,
    pt: &'static str,
}

impl Rule {
    pub fn matches(&self, sample: &CanonicalSample) -> bool {
        (self.predicate)(sample)
    }

    pub fn text(&self, language: Language) -> &'static str {
        match language {
            Language::Es => self.es,
            Language::Pt => self.pt,
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("id", &self.id).finish()
    }
}

/// 発火した推奨事項
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub rule: RuleId,
    pub text: String,
}

/// 宣言順に評価される
pub const RULES: &[Rule] = &[
    Rule {
        id: RuleId::Drainage,
        predicate: |s| s.is(AttributeCategory::Moisture, "alta"),
        es: "Mejorar drenaje (canalización superficial, subsolado selectivo).",
        pt: "Melhorar a drenagem (canalização superficial, subsolagem seletiva).",
    },
    Rule {
        id: RuleId::SoilCover,
        predicate: |s| s.is(AttributeCategory::Moisture, "baja"),
        es: "Aumentar cobertura del suelo y planificar riegos oportunos.",
        pt: "Aumentar cobertura do solo e planejar irrigações oportunas.",
    },
    Rule {
        id: RuleId::OrganicMatter,
        predicate: |s| s.is(AttributeCategory::Texture, "arenoso"),
        es: "Incorporar materia orgánica y fraccionar la fertilización.",
        pt: "Incorporar MO e fracionar a adubação.",
    },
    Rule {
        id: RuleId::ClayTillage,
        predicate: |s| s.is(AttributeCategory::Texture, "arcilloso"),
        es: "Evitar labranza en húmedo y promover porosidad biológica.",
        pt: "Evitar preparo úmido e promover porosidade biológica.",
    },
    Rule {
        id: RuleId::CompactionRelief,
        predicate: |s| s.is_any(AttributeCategory::Structure, &["laminar", "masiva"]),
        es: "Aliviar compactación (tráfico controlado, subsolado puntual) y mantener residuos.",
        pt: "Aliviar compactação e manter resíduos.",
    },
    Rule {
        id: RuleId::RootDevelopment,
        predicate: |s| s.is_any(AttributeCategory::Roots, &["ausentes", "escasas"]),
        es: "Fomentar raíces finas con abonos verdes y rotaciones; revisar restricciones químicas.",
        pt: "Fomentar raízes finas com adubos verdes e rotações; revisar restrições químicas.",
    },
];

pub const FALLBACK: Rule = Rule {
    id: RuleId::GoodPractice,
    predicate: |_| true,
    es: "Mantener buenas prácticas de conservación y aporte de MO.",
    pt: "Manter boas práticas de conservação e aporte de MO.",
};

/// ルールを評価して推奨事項を返す（空にはならない）
pub fn recommend(sample: &CanonicalSample, language: Language) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = RULES
        .iter()
        .filter(|rule| rule.matches(sample))
        .map(|rule| Recommendation {
            rule: rule.id,
            text: rule.text(language).to_string(),
        })
        .collect();

    if recommendations.is_empty() {
        recommendations.push(Recommendation {
            rule: FALLBACK.id,
            text: FALLBACK.text(language).to_string(),
        });
    }

    recommendations
}
