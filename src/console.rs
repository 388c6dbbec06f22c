//! 端末への結果表示

use crate::session::ReferenceView;
use soil_survey_common::catalog;
use soil_survey_common::texts::texts;
use soil_survey_common::{AttributeCategory, Language, Record, Report};

/// 解析結果をまとめて表示
pub fn print_report(report: &Report) {
    println!("📋 {}", report.summary_title);
    for line in report.summary_lines() {
        println!("  {}", line);
    }
    if let Some(note) = &report.image_note {
        println!("  - {}", note);
    }

    println!("\n🔎 {}", report.interpretation_title);
    let fragments: Vec<&str> = report
        .fragments
        .iter()
        .map(String::as_str)
        .filter(|f| !f.is_empty())
        .collect();
    println!("  {}", fragments.join(" "));

    let details = report.structure_detail_lines();
    if !details.is_empty() {
        println!("\nℹ️  {}", report.structure_title);
        for line in details {
            println!("  {}", line);
        }
    }

    println!("\n🌱 {}", report.recommendations_title);
    for rec in &report.recommendations {
        println!("  - {}", rec);
    }
}

/// 未選択カテゴリを表示
pub fn print_missing(language: Language, missing: &[AttributeCategory]) {
    let t = texts(language);
    let labels: Vec<&str> = missing.iter().map(|&c| t.label(c)).collect();
    println!("⚠ {}: {}", t.incomplete_msg, labels.join(", "));
}

/// 参照画像の表示状態
pub fn print_reference(language: Language, view: &ReferenceView) {
    match view {
        ReferenceView::NoSelection => {}
        ReferenceView::Showing { path, .. } => {
            if let Some(caption) = view.caption() {
                println!("  🖼  {}", caption);
            }
            println!("     {}", path.display());
        }
        _ => {
            if let Some(notice) = view.notice(language) {
                println!("  ⚠ {}", notice);
            }
        }
    }
}

/// 選択肢一覧
pub fn print_options(language: Language, categories: &[AttributeCategory]) {
    let t = texts(language);
    for &category in categories {
        println!("{} ({}):", t.label(category), category.folder_name());
        for value in catalog::options(language, category) {
            let key = catalog::normalize(language, category, value);
            println!("  - {} → {}", value, key);
        }
    }
}

/// 記録一覧
pub fn print_records(language: Language, records: &[Record]) {
    if records.is_empty() {
        println!("{}", texts(language).no_records_msg);
        return;
    }

    for record in records {
        println!(
            "{} [{}] {} / {} / {} / {} / {}",
            record.timestamp,
            record.language,
            record.color,
            record.texture,
            record.structure,
            record.moisture,
            record.roots
        );
    }
    println!("\n✔ {}件", records.len());
}
