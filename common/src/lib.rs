//! Soil Survey Common Library
//!
//! 属性カタログ・解釈エンジン・参照カルーセル（I/Oなし）

pub mod catalog;
pub mod interpret;
pub mod rules;
pub mod types;
pub mod carousel;
pub mod texts;
pub mod report;
pub mod error;
pub mod export;

pub use catalog::{AttributeCategory, CanonicalKey, Language};
pub use interpret::{describe, interpret, Interpretation};
pub use rules::{recommend, Recommendation, RuleId};
pub use types::{CanonicalSample, Record, Sample};
pub use carousel::{CarouselKey, CarouselState, Navigation};
pub use report::Report;
pub use error::{Error, Result};

/// サンプルが完成していれば解釈する
pub fn analyze(sample: &Sample, language: Language) -> Option<Interpretation> {
    sample
        .canonicalize(language)
        .map(|canonical| interpret(&canonical, language))
}
