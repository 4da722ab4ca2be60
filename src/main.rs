// src/main.rs
//
// opengraph CLI
//
// render   - print the Open Graph headers a page view would get
// keywords - manage the keyword store

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use opengraph::application::{AppState, HeaderDto, PageViewDto};
use opengraph::config::{default_settings_path, PluginSettings};
use opengraph::logger;

#[derive(Debug, Parser)]
#[command(name = "opengraph", version, about = "Open Graph headers for submission pages")]
struct Cli {
    /// Settings file (JSON)
    #[arg(long, global = true, env = "OPENGRAPH_SETTINGS")]
    settings: Option<PathBuf>,

    /// Keyword database, overrides the settings file
    #[arg(long, global = true, env = "OPENGRAPH_DB")]
    db: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the headers for a page view fixture
    Render {
        /// JSON page view: request, context, issue, submission
        view: PathBuf,

        /// Print headers as JSON instead of markup
        #[arg(long)]
        json: bool,
    },

    /// Keyword store maintenance
    Keywords {
        #[command(subcommand)]
        action: KeywordAction,
    },
}

#[derive(Debug, Subcommand)]
enum KeywordAction {
    /// Replace a publication's keywords for one locale
    Set {
        publication_id: i64,
        locale: String,
        /// Comma-separated keywords
        keywords: String,
    },

    /// Show a publication's keywords
    List {
        publication_id: i64,
        /// Restrict to these locales (repeatable)
        #[arg(long = "locale")]
        locales: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(logger::level_from_verbosity(cli.verbose))
        .map_err(|e| anyhow::anyhow!("installing logger: {}", e))?;

    let settings_path = match cli.settings {
        Some(path) => path,
        None => default_settings_path()?,
    };
    let mut settings = PluginSettings::load(&settings_path)
        .with_context(|| format!("loading settings from {}", settings_path.display()))?;
    if let Some(db) = cli.db {
        settings.database_path = Some(db);
    }

    match cli.command {
        Command::Render { view, json } => {
            let raw = std::fs::read_to_string(&view)
                .with_context(|| format!("reading {}", view.display()))?;
            let dto: PageViewDto = serde_json::from_str(&raw)
                .with_context(|| format!("parsing {}", view.display()))?;

            let context_id = dto.context.id;
            let application = settings.application;
            let state = AppState::bootstrap(settings, Some(context_id))?;

            let mut page = dto.into_view(application);
            state.render_view(&mut page);

            if json {
                let headers = HeaderDto::from_headers(&page.headers);
                println!("{}", serde_json::to_string_pretty(&headers)?);
            } else {
                println!("{}", page.headers.render());
            }
        }
        Command::Keywords { action } => {
            let state = AppState::bootstrap(settings, None)?;
            match action {
                KeywordAction::Set {
                    publication_id,
                    locale,
                    keywords,
                } => {
                    let keywords: Vec<String> =
                        keywords.split(',').map(|k| k.trim().to_string()).collect();
                    state
                        .keyword_repo
                        .replace_keywords(publication_id, &locale, &keywords)?;
                }
                KeywordAction::List {
                    publication_id,
                    locales,
                } => {
                    let keywords = state.keyword_repo.get_keywords(publication_id, &locales)?;
                    for (locale, words) in keywords {
                        println!("{}: {}", locale, words.join(", "));
                    }
                }
            }
        }
    }

    Ok(())
}
