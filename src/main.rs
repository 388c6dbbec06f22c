use chrono::Local;
use clap::Parser;
use soil_survey::{cli, config, console, error, export, interactive, records, scanner, session, upload, workflow};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use session::Session;
use soil_survey_common::carousel::Navigation;
use soil_survey_common::texts::texts;
use soil_survey_common::{catalog, AttributeCategory};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load()?;
    catalog::validate()?;

    let language = cli.lang.unwrap_or(config.language);
    let t = texts(language);

    match cli.command {
        Commands::Analyze { color, texture, structure, moisture, roots, image, save, pdf, json } => {
            println!("🌍 {}\n", t.app_title);

            if let Some(path) = image.as_deref() {
                upload::inspect(path)?;
            }

            let selections = [
                (AttributeCategory::Color, color),
                (AttributeCategory::Texture, texture),
                (AttributeCategory::Structure, structure),
                (AttributeCategory::Moisture, moisture),
                (AttributeCategory::Roots, roots),
            ];
            let session = selections
                .into_iter()
                .fold(Session::new(language), |session, (category, value)| match value {
                    Some(value) => session.select(category, &value),
                    None => session,
                })
                .with_image(image);

            let now = Local::now();
            let Some(report) = workflow::build_report(&session, &now) else {
                console::print_missing(language, &session.sample.missing());
                return Ok(());
            };

            console::print_report(&report);
            println!();

            if save {
                workflow::save_record(&config, &session, &now)?;
            }
            if pdf {
                workflow::write_pdf(&config, &report, &now)?;
            }
            if let Some(json_path) = json {
                let content = serde_json::to_string_pretty(&report)?;
                std::fs::write(&json_path, content)?;
                println!("✔ JSON: {}", json_path.display());
            }
        }

        Commands::Interactive => {
            interactive::run_interactive(&config, language)?;
        }

        Commands::Options { category } => {
            let categories = match category {
                Some(category) => vec![category],
                None => AttributeCategory::ALL.to_vec(),
            };
            console::print_options(language, &categories);
        }

        Commands::References { category, value, next, prev } => {
            let library = scanner::ReferenceLibrary::new(config.reference_dir());
            let session = Session::new(language).select(category, &value);

            let (mut session, mut view) = session.view(&library, category);
            let steps = std::iter::repeat(Navigation::Next)
                .take(next)
                .chain(std::iter::repeat(Navigation::Prev).take(prev));
            for navigation in steps {
                (session, view) = session.navigate(&library, category, navigation);
            }

            println!("{}", t.tips_refs);
            console::print_reference(language, &view);
        }

        Commands::Records { export: export_path } => {
            let store = records::RecordStore::for_language(&config.records_dir, language);
            let all = store.read_all()?;
            console::print_records(language, &all);

            if let Some(path) = export_path {
                export::excel::generate_records_workbook(&all, &path)?;
                println!("✔ Excel: {}", path.display());
            }
        }

        Commands::Config { show, set_language, set_reference_dir, set_records_dir, set_output_dir } => {
            let mut changed = false;
            if let Some(lang) = set_language {
                config.language = lang;
                changed = true;
            }
            if let Some(dir) = set_reference_dir {
                config.reference_dir = dir;
                changed = true;
            }
            if let Some(dir) = set_records_dir {
                config.records_dir = dir;
                changed = true;
            }
            if let Some(dir) = set_output_dir {
                config.output_dir = dir;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("language: {}", config.language);
                println!("reference_dir: {}", config.reference_dir().display());
                println!("records_dir: {}", config.records_dir.display());
                println!("output_dir: {}", config.output_dir.display());
            }
        }
    }

    Ok(())
}
