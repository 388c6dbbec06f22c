//! 対話モード
//!
//! カテゴリごとに値を選び、参照画像カルーセルで確認してから解析する。

use crate::config::Config;
use crate::console;
use crate::error::{Result, SoilSurveyError};
use crate::scanner::ReferenceLibrary;
use crate::session::{ReferenceView, Session};
use crate::upload;
use crate::workflow;
use chrono::Local;
use dialoguer::{Confirm, Input, Select};
use soil_survey_common::carousel::Navigation;
use soil_survey_common::catalog;
use soil_survey_common::texts::texts;
use soil_survey_common::{AttributeCategory, Language};
use std::path::{Path, PathBuf};

/// カルーセル操作
enum CarouselAction {
    Move(Navigation),
    Confirm,
}

fn prompt_error(e: dialoguer::Error) -> SoilSurveyError {
    SoilSurveyError::Prompt(e.to_string())
}

pub fn run_interactive(config: &Config, language: Language) -> Result<()> {
    println!("🌍 {}\n", texts(language).app_title);

    let library = ReferenceLibrary::new(config.reference_dir());
    let image = prompt_upload(language)?;
    let mut session = Session::new(language).with_image(image);

    loop {
        let t = texts(session.language);
        for category in AttributeCategory::ALL {
            session = prompt_category(session, &library, category)?;
        }

        let now = Local::now();
        match workflow::build_report(&session, &now) {
            Some(report) => {
                println!();
                console::print_report(&report);
                println!();

                if confirm(t.save_prompt)? {
                    workflow::save_record(config, &session, &now)?;
                }
                if confirm(t.pdf_prompt)? {
                    workflow::write_pdf(config, &report, &now)?;
                }
            }
            None => console::print_missing(session.language, &session.sample.missing()),
        }

        if !confirm(t.switch_language_prompt)? {
            return Ok(());
        }
        let next = other_language(session.language);
        session = session.with_language(next);
        println!("\n🌍 {}\n", texts(next).app_title);
    }
}

/// es ⇔ pt
fn other_language(language: Language) -> Language {
    Language::ALL
        .into_iter()
        .find(|&other| other != language)
        .unwrap_or(language)
}

fn confirm(prompt: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(prompt_error)
}

/// 土壌写真のパス入力（空ならなし、読めなければ警告して続行）
fn prompt_upload(language: Language) -> Result<Option<PathBuf>> {
    let input: String = Input::new()
        .with_prompt(texts(language).upload_prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match upload::inspect(Path::new(trimmed)) {
        Ok(image) => {
            println!("  ✔ {}\n", image.note(language));
            Ok(Some(image.path))
        }
        Err(e) => {
            println!("  ⚠ {}\n", e);
            Ok(None)
        }
    }
}

/// 1カテゴリの選択と参照画像の確認
fn prompt_category(
    session: Session,
    library: &ReferenceLibrary,
    category: AttributeCategory,
) -> Result<Session> {
    let language = session.language;
    let t = texts(language);
    let choices = catalog::choices(language, category);

    let index = Select::new()
        .with_prompt(t.label(category))
        .items(&choices)
        .default(0)
        .interact()
        .map_err(prompt_error)?;

    let mut session = session.select(category, choices[index]);
    if catalog::is_placeholder(language, choices[index]) {
        return Ok(session);
    }

    println!("  {}", t.tips_refs);
    let (next, mut view) = session.view(library, category);
    session = next;

    loop {
        console::print_reference(language, &view);
        if !matches!(view, ReferenceView::Showing { total, .. } if total > 1) {
            break;
        }

        match prompt_carousel(language)? {
            CarouselAction::Move(navigation) => {
                let (next, next_view) = session.navigate(library, category, navigation);
                session = next;
                view = next_view;
            }
            CarouselAction::Confirm => break,
        }
    }

    println!();
    Ok(session)
}

fn prompt_carousel(language: Language) -> Result<CarouselAction> {
    let t = texts(language);
    let items = [t.carousel_prev, t.carousel_next, t.carousel_confirm];

    let index = Select::new()
        .items(&items)
        .default(1)
        .interact()
        .map_err(prompt_error)?;

    Ok(match index {
        0 => CarouselAction::Move(Navigation::Prev),
        1 => CarouselAction::Move(Navigation::Next),
        _ => CarouselAction::Confirm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_language_toggles() {
        assert_eq!(other_language(Language::Es), Language::Pt);
        assert_eq!(other_language(Language::Pt), Language::Es);
    }
}
