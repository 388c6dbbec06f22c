//! 解釈エンジン
//!
//! 正規キーごとの解釈テキスト（短文）と構造の詳細説明を保持し、
//! 完成したサンプルから解釈文と推奨事項を組み立てる。
//! 検索に失敗しても空文字を返すだけで、エラーにはならない。

use crate::catalog::{AttributeCategory, CanonicalKey, Language};
use crate::rules::{self, Recommendation};
use crate::types::CanonicalSample;
use serde::Serialize;
use std::collections::HashMap;

type Texts = &'static [(&'static str, &'static str)];

const ES_COLOR: Texts = &[
    ("rojo-intenso", "Abundancia de hematita, buen drenaje y aireación; baja MO si tonos muy vivos."),
    ("rojo-amarillento", "Goethita y oxidación moderada; drenaje de medio a bueno."),
    ("amarillo", "Goethita y posible drenaje menos eficiente; fertilidad moderada."),
    ("marron", "Contenido moderado de MO y complejos Fe-Humus; fertilidad intermedia."),
    ("pardo-marron", "Transición con influencia férrica y de MO; buena estabilidad superficial."),
    ("negro", "Alto carbono orgánico; fértil, pero puede anegarse si la estructura es pobre."),
    ("gris", "Condiciones reductoras por saturación; drenaje deficiente."),
    ("blanco", "Arenas lavadas o sales/carbonatos; baja fertilidad y CICE."),
];

const PT_COLOR: Texts = &[
    ("rojo-intenso", "Muita hematita; boa drenagem/aeração; MO baixa se tons muito vivos."),
    ("rojo-amarillento", "Goethita e oxidação moderada; drenagem média a boa."),
    ("amarillo", "Goethita e possível drenagem menos eficiente; fertilidade moderada."),
    ("marron", "MO moderada e complexos Fe-Húmus; fertilidade intermediária."),
    ("pardo-marron", "Transição com influência férrica e de MO; boa estabilidade superficial."),
    ("negro", "Alto C orgânico; fértil, porém pode encharcar se a estrutura for pobre."),
    ("gris", "Condições redutoras por saturação; drenagem deficiente."),
    ("blanco", "Areias lavadas ou sais/carbonatos; baixa fertilidade e CTC."),
];

const ES_TEXTURE: Texts = &[
    ("arcilloso", "Alta retención de agua/nutrientes; drenaje lento y riesgo de compactación."),
    ("arenoso", "Drenaje muy rápido; baja retención de agua y nutrientes."),
    ("franco", "Equilibrio entre fracciones; buena aireación y retención."),
    ("limoso", "Retiene más agua que arenosos, pero estructura menos estable."),
];

const PT_TEXTURE: Texts = &[
    ("arcilloso", "Alta retenção de água/nutrientes; drenagem lenta e risco de compactação."),
    ("arenoso", "Drenagem muito rápida; baixa retenção de água e nutrientes."),
    ("franco", "Equilíbrio entre frações; boa aeração e retenção."),
    ("limoso", "Retém mais água que arenosos, porém estrutura menos estável."),
];

const ES_STRUCTURE: Texts = &[
    ("granular", "Agregados pequeños y redondeados; excelente aireación e infiltración."),
    ("migajosa", "Más porosa e irregular; muy deseable para agricultura."),
    ("bloques", "Cúbicos/poliédricos; pueden limitar raíces si hay compactación."),
    ("prismatica-columnar", "Columnas verticales; limitan agua y raíces (común en B arcillosos/sódicos)."),
    ("laminar", "Láminas horizontales; muy restrictiva a infiltración y raíces."),
    ("masiva", "Sin agregación; baja porosidad y drenaje deficiente."),
    ("suelto", "Partículas sueltas; alta permeabilidad pero baja fertilidad."),
];

const PT_STRUCTURE: Texts = &[
    ("granular", "Agregados pequenos e arredondados; excelente aeração e infiltração."),
    ("migajosa", "Mais porosa e irregular; muito desejável para agricultura."),
    ("bloques", "Cúbicos/poliedros; podem limitar raízes se compactados."),
    ("prismatica-columnar", "Colunas verticais; limitam água e raízes (comum em B argilosos/sódicos)."),
    ("laminar", "Lâminas horizontais; muito restritiva à infiltração e raízes."),
    ("masiva", "Sem agregação; baixa porosidade e drenagem deficiente."),
    ("suelto", "Partículas soltas; alta permeabilidade e baixa fertilidade."),
];

const ES_MOISTURE: Texts = &[
    ("baja", "Posible estrés hídrico; difícil establecimiento de plántulas."),
    ("media", "Condición intermedia adecuada si la estructura acompaña."),
    ("alta", "Riesgo de anegamiento/anoxia y pérdida de estructura."),
];

const PT_MOISTURE: Texts = &[
    ("baja", "Possível estresse hídrico."),
    ("media", "Condição intermediária."),
    ("alta", "Risco de encharcamento/anoxia."),
];

const ES_ROOTS: Texts = &[
    ("ausentes", "Limitaciones físicas/químicas o manejo reciente."),
    ("escasas", "Actividad biológica limitada; posible restricción de aireación o nutrientes."),
    ("abundantes", "Indican buena porosidad y disponibilidad hídrica/nutritiva."),
];

const PT_ROOTS: Texts = &[
    ("ausentes", "Limitações físicas/químicas."),
    ("escasas", "Atividade biológica limitada."),
    ("abundantes", "Boa porosidade e disponibilidade."),
];

/// 構造の詳細説明（長文、Markdown風）
const ES_STRUCTURE_DETAILS: Texts = &[
    ("granular", "**Estructura Granular**\n- *Forma:* agregados pequeños, más o menos esféricos o poliédricos irregulares.\n- *Formación:* materia orgánica, raíces, microorganismos y ciclos de humedecimiento-secado.\n- *Uso:* excelente para infiltración, aireación y crecimiento radicular."),
    ("migajosa", "**Estructura Migajosa**\n- *Forma:* muy porosa e irregular; se desmenuza fácilmente como migas.\n- *Formación:* alta MO, intensa biología (lombrices, microbios) y ciclos de humedad-sequía.\n- *Uso:* muy deseable en agricultura por equilibrio aire-agua."),
    ("bloques", "**Estructura en Bloques**\n- *Tipos:* angulares (caras planas, aristas agudas) y subangulares (aristas más redondeadas).\n- *Ubicación:* común en horizontes B.\n- *Efecto:* mejores que masiva pero pueden restringir raíces/agua versus granular."),
    ("prismatica-columnar", "**Estructura Prismática/Columnar**\n- *Forma:* columnas verticales.\n- *Prismática:* tope plano. *Columnar:* tope redondeado (frecuente en suelos sódicos).\n- *Ubicación:* horizontes B o C; pueden dificultar agua y raíces."),
    ("laminar", "**Estructura Laminar (Platy)**\n- *Forma:* láminas horizontales, suele resultar de compactación/lixiviación.\n- *Efecto:* restringe severamente el movimiento vertical de agua, aire y raíces."),
    ("suelto", "**Estructura Suelto (Grano Simple)**\n- *Forma:* partículas individuales (típicamente arena), sin agregación.\n- *Efecto:* muy buen drenaje pero baja retención de agua/nutrientes."),
    ("masiva", "**Estructura Masiva (Sin Estructura)**\n- *Forma:* masa sólida y cohesiva sin planos de debilidad.\n- *Efecto:* la más desfavorable: limita raíces, agua y aire; drenaje muy pobre."),
];

const PT_STRUCTURE_DETAILS: Texts = &[
    ("granular", "**Estrutura Granular**\n- *Forma:* agregados pequenos, esféricos ou poliedros irregulares.\n- *Formação:* MO, raízes, microrganismos e ciclos de umedecimento-secagem.\n- *Uso:* excelente infiltração, aeração e crescimento radicular."),
    ("migajosa", "**Estrutura Migajosa**\n- *Forma:* muito porosa e irregular; esfarela como migalhas.\n- *Formação:* alta MO, intensa biologia (minhocas, micróbios) e ciclos de umidade-seca.\n- *Uso:* muito desejável na agricultura."),
    ("bloques", "**Estrutura em Blocos**\n- *Tipos:* angulares e subangulares.\n- *Local:* comum em horizontes B.\n- *Efeito:* melhores que maciça, porém podem restringir raízes/água vs. granular."),
    ("prismatica-columnar", "**Estrutura Prismática/Colunar**\n- *Forma:* colunas verticais; topos planos (prismática) ou arredondados (colunar).\n- *Local:* B ou C; podem dificultar água e raízes."),
    ("laminar", "**Estrutura Laminar (Platy)**\n- *Forma:* lâminas horizontais (compactação/lixiviação).\n- *Efeito:* restringe fortemente água, ar e raízes."),
    ("suelto", "**Estrutura Solta (Grão Simples)**\n- *Forma:* partículas individuais (areia), sem agregação.\n- *Efeito:* drenagem alta e baixa retenção de água/nutrientes."),
    ("masiva", "**Estrutura Maciça (Sem Estrutura)**\n- *Forma:* massa sólida coesa, sem planos de fraqueza.\n- *Efeito:* a mais desfavorável; limita raízes, água e ar."),
];

fn texts_for(language: Language, category: AttributeCategory) -> Texts {
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
    static ref INTERPRETATIONS: HashMap<(Language, AttributeCategory), HashMap<&'static str, &'static str>> = {
        let mut tables = HashMap::new();
        for language in Language::ALL {
            for category in AttributeCategory::ALL {
                let table: HashMap<_, _> = texts_for(language, category).iter().copied().collect();
                tables.insert((language, category), table);
            }
        }
        tables
    };

    static ref STRUCTURE_DETAILS: HashMap<Language, HashMap<&'static str, &'static str>> = {
        let mut tables = HashMap::new();
        tables.insert(Language::Es, ES_STRUCTURE_DETAILS.iter().copied().collect());
        tables.insert(Language::Pt, PT_STRUCTURE_DETAILS.iter().copied().collect());
        tables
    };
}

fn lookup(category: AttributeCategory, key: &CanonicalKey, language: Language) -> Option<&'static str> {
    INTERPRETATIONS
        .get(&(language, category))
        .and_then(|table| table.get(key.as_str()))
        .copied()
}

pub fn has_interpretation(category: AttributeCategory, key: &CanonicalKey, language: Language) -> bool {
    lookup(category, key, language).is_some()
}

/// 正規キーの解釈テキスト（未登録なら空文字）
pub fn describe(category: AttributeCategory, key: &CanonicalKey, language: Language) -> String {
    match lookup(category, key, language) {
        Some(text) => text.to_string(),
        None => {
            tracing::debug!("No {} interpretation for {}/{}", language, category, key);
            String::new()
        }
    }
}

/// 構造の詳細説明（未登録なら空文字）
pub fn structure_details(key: &CanonicalKey, language: Language) -> String {
    STRUCTURE_DETAILS
        .get(&language)
        .and_then(|table| table.get(key.as_str()))
        .map(|text| text.to_string())
        .unwrap_or_default()
}

/// カテゴリごとの解釈文
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    pub category: AttributeCategory,
    pub text: String,
}

/// 解析結果（解釈文 + 推奨事項）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    pub language: Language,
    /// Color, Texture, Structure, Moisture, Roots の順。空の断片は含まない。
    pub fragments: Vec<Fragment>,
    pub structure_details: String,
    pub recommendations: Vec<Recommendation>,
}

impl Interpretation {
    /// 断片を空白1つで連結した解釈文
    pub fn text(&self) -> String {
        self.fragments
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn recommendation_texts(&self) -> Vec<String> {
        self.recommendations.iter().map(|r| r.text.clone()).collect()
    }
}

/// 完成サンプルを解釈する
pub fn interpret(sample: &CanonicalSample, language: Language) -> Interpretation {
    let fragments = AttributeCategory::ALL
        .iter()
        .map(|&category| Fragment {
            category,
            text: describe(category, sample.get(category), language),
        })
        .filter(|f| !f.text.is_empty())
        .collect();

    Interpretation {
        language,
        fragments,
        structure_details: structure_details(&sample.structure, language),
        recommendations: rules::recommend(sample, language),
    }
}
