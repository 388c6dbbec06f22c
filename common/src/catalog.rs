//! 属性カタログと正規化
//!
//! 言語ごとの選択肢（色・テクスチャ・構造・水分・根）と、
//! 表示値 → 正規キー（言語非依存、ASCII・小文字）の対応表を持つ。
//! 正規キーは参照画像フォルダ名と解釈テキストの検索キーを兼ねる。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// 対応言語
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// スペイン語（デフォルト）
    #[default]
    Es,
    /// ポルトガル語
    Pt,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Es, Language::Pt];

    pub const fn as_str(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::Pt => "pt",
        }
    }

    /// 言語コードを解析（大文字小文字無視、`pt-BR` のような地域タグも許容）
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "es" => Some(Language::Es),
            "pt" => Some(Language::Pt),
            _ => None,
        }
    }

    /// 未選択を表すプレースホルダ
    pub const fn placeholder(self) -> &'static str {
        match self {
            Language::Es => "Seleccionar opción",
            Language::Pt => "Selecionar opção",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Language::parse(s).ok_or_else(|| format!("Unknown language: {}. Use es or pt", s))
    }
}

/// 属性カテゴリ（固定の5種類、この順序で評価・表示する）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeCategory {
    Color,
    Texture,
    Structure,
    Moisture,
    Roots,
}

impl AttributeCategory {
    pub const ALL: [AttributeCategory; 5] = [
        AttributeCategory::Color,
        AttributeCategory::Texture,
        AttributeCategory::Structure,
        AttributeCategory::Moisture,
        AttributeCategory::Roots,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            AttributeCategory::Color => "color",
            AttributeCategory::Texture => "texture",
            AttributeCategory::Structure => "structure",
            AttributeCategory::Moisture => "moisture",
            AttributeCategory::Roots => "roots",
        }
    }

    /// 参照画像ストア上のフォルダ名
    pub const fn folder_name(self) -> &'static str {
        match self {
            AttributeCategory::Color => "color",
            AttributeCategory::Texture => "textura",
            AttributeCategory::Structure => "forma-estructura",
            AttributeCategory::Moisture => "humedad",
            AttributeCategory::Roots => "raices",
        }
    }
}

impl fmt::Display for AttributeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for AttributeCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "color" | "cor" => Ok(AttributeCategory::Color),
            "texture" | "textura" => Ok(AttributeCategory::Texture),
            "structure" | "estructura" | "estrutura" | "forma-estructura" => Ok(AttributeCategory::Structure),
            "moisture" | "humedad" | "umidade" => Ok(AttributeCategory::Moisture),
            "roots" | "raices" | "raíces" | "raizes" | "raízes" => Ok(AttributeCategory::Roots),
            _ => Err(format!(
                "Unknown category: {}. Use color, texture, structure, moisture or roots",
                s
            )),
        }
    }
}

/// 言語非依存の正規キー
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CanonicalKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// (表示値, 正規キー) の組。配列順が選択肢の表示順。
type Entries = &'static [(&'static str, &'static str)];

const ES_COLOR: Entries = &[
    ("rojo-intenso", "rojo-intenso"),
    ("rojo-amarillento", "rojo-amarillento"),
    ("amarillo", "amarillo"),
    ("marrón", "marron"),
    ("pardo-marrón", "pardo-marron"),
    ("negro", "negro"),
    ("gris", "gris"),
    ("blanco", "blanco"),
];

const PT_COLOR: Entries = &[
    ("vermelho-intenso", "rojo-intenso"),
    ("vermelho-amarelado", "rojo-amarillento"),
    ("amarelo", "amarillo"),
    ("marrom", "marron"),
    ("pardo-marrom", "pardo-marron"),
    ("preto", "negro"),
    ("cinza", "gris"),
    ("branco", "blanco"),
];

const ES_TEXTURE: Entries = &[
    ("arcilloso", "arcilloso"),
    ("arenoso", "arenoso"),
    ("franco", "franco"),
    ("limoso", "limoso"),
];

const PT_TEXTURE: Entries = &[
    ("argiloso", "arcilloso"),
    ("arenoso", "arenoso"),
    ("franco", "franco"),
    ("siltoso", "limoso"),
];

const ES_STRUCTURE: Entries = &[
    ("granular", "granular"),
    ("migajosa", "migajosa"),
    ("bloques", "bloques"),
    ("prismatica-columnar", "prismatica-columnar"),
    ("laminar", "laminar"),
    ("masiva", "masiva"),
    ("suelto", "suelto"),
];

const PT_STRUCTURE: Entries = &[
    ("granular", "granular"),
    ("migajosa", "migajosa"),
    ("blocos", "bloques"),
    ("prismática-colunar", "prismatica-columnar"),
    ("laminar", "laminar"),
    ("maciça", "masiva"),
    ("solto", "suelto"),
];

const ES_MOISTURE: Entries = &[("Baja", "baja"), ("Media", "media"), ("Alta", "alta")];

const PT_MOISTURE: Entries = &[("Baixa", "baja"), ("Média", "media"), ("Alta", "alta")];

const ES_ROOTS: Entries = &[
    ("Ausentes", "ausentes"),
    ("Escasas", "escasas"),
    ("Abundantes", "abundantes"),
];

const PT_ROOTS: Entries = &[
    ("Ausentes", "ausentes"),
    ("Escassas", "escasas"),
    ("Abundantes", "abundantes"),
];

/// 言語・カテゴリの (表示値, 正規キー) 一覧
pub fn entries(language: Language, category: AttributeCategory) -> Entries {
    match (language, category) {
        (Language::Es, AttributeCategory::Color) => ES_COLOR,
        (Language::Es, AttributeCategory::Texture) => ES_TEXTURE,
        (Language::Es, AttributeCategory::Structure) => ES_STRUCTURE,
        (Language::Es, AttributeCategory::Moisture) => ES_MOISTURE,
        (Language::Es, AttributeCategory::Roots) => ES_ROOTS,
        (Language::Pt, AttributeCategory::Color) => PT_COLOR,
        (Language::Pt, AttributeCategory::Texture) => PT_TEXTURE,
        (Language::Pt, AttributeCategory::Structure) => PT_STRUCTURE,
        (Language::Pt, AttributeCategory::Moisture) => PT_MOISTURE,
        (Language::Pt, AttributeCategory::Roots) => PT_ROOTS,
    }
}

lazy_static::lazy_static! {
    static ref NORMALIZATION: HashMap<(Language, AttributeCategory), HashMap<&'static str, &'static str>> = {
        let mut maps = HashMap::new();
        for language in Language::ALL {
            for category in AttributeCategory::ALL {
                let map: HashMap<_, _> = entries(language, category).iter().copied().collect();
                maps.insert((language, category), map);
            }
        }
        maps
    };
}

/// 選択肢（プレースホルダなし）
pub fn options(language: Language, category: AttributeCategory) -> Vec<&'static str> {
    entries(language, category).iter().map(|(label, _)| *label).collect()
}

/// セレクタに並べる選択肢（先頭がプレースホルダ）
pub fn choices(language: Language, category: AttributeCategory) -> Vec<&'static str> {
    std::iter::once(language.placeholder())
        .chain(options(language, category))
        .collect()
}

pub fn is_placeholder(language: Language, value: &str) -> bool {
    value.trim().is_empty() || value == language.placeholder()
}

/// 表示値を正規キーに変換する
///
/// 対応表にない値は小文字化した値そのものを返す（失敗しない）。
/// その場合、解釈テキストや参照フォルダが見つからないことがある。
pub fn normalize(language: Language, category: AttributeCategory, value: &str) -> CanonicalKey {
    let map = &NORMALIZATION[&(language, category)];
    if let Some(key) = map.get(value).or_else(|| map.get(value.trim())) {
        return CanonicalKey::new(*key);
    }

    let fallback = value.trim().to_lowercase();
    tracing::debug!(
        "No {} mapping for '{}' ({}), falling back to '{}'",
        category,
        value,
        language,
        fallback
    );
    CanonicalKey::new(fallback)
}

/// 正規キーから表示値を逆引き（見つからなければキーそのもの）
pub fn display_value(language: Language, category: AttributeCategory, key: &CanonicalKey) -> String {
    entries(language, category)
        .iter()
        .find(|(_, canonical)| *canonical == key.as_str())
        .map(|(label, _)| label.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// カテゴリの正規キー一覧（表示順）
pub fn canonical_keys(category: AttributeCategory) -> Vec<CanonicalKey> {
    entries(Language::Es, category)
        .iter()
        .map(|(_, key)| CanonicalKey::new(*key))
        .collect()
}

/// カタログの整合性チェック
///
/// - 全言語が同じ正規キー集合を持つこと
/// - 全正規キーに全言語の解釈テキストがあること
/// - 構造カテゴリの全正規キーに詳細説明があること
///
/// 欠落はまとめて `Error::Catalog` で返す。
pub fn validate() -> Result<()> {
    let mut gaps = Vec::new();

    for category in AttributeCategory::ALL {
        let reference = canonical_keys(category);

        for language in Language::ALL {
            let mut keys: Vec<&str> = entries(language, category).iter().map(|(_, k)| *k).collect();
            keys.sort_unstable();
            keys.dedup();

            let mut expected: Vec<&str> = reference.iter().map(|k| k.as_str()).collect();
            expected.sort_unstable();

            if keys != expected {
                gaps.push(format!("{}: {} canonical keys differ from es", category, language));
            }

            for key in &reference {
                if !crate::interpret::has_interpretation(category, key, language) {
                    gaps.push(format!("{}/{}: missing {} interpretation", category, key, language));
                }
                if category == AttributeCategory::Structure
                    && crate::interpret::structure_details(key, language).is_empty()
                {
                    gaps.push(format!("{}/{}: missing {} details", category, key, language));
                }
            }
        }
    }

    if gaps.is_empty() {
        Ok(())
    } else {
        Err(Error::Catalog(gaps))
    }
}
