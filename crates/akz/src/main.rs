//! Command-line interface for the `akz` Alabama-English dictionary.

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use akz_lexicon::{FavoritesStore, Lexicon};
use akz_query::SearchMode;
use akz_search::{DEFAULT_PAGE_SIZE, SearchEngine};
use clap::{Parser, Subcommand};

mod output;

#[derive(Parser)]
#[command(name = "akz")]
#[command(about = "Alabama-English dictionary lookup")]
/// Top-level CLI options.
struct Cli {
    /// Path to the dictionary JSON file
    #[arg(long, global = true, default_value = "dict.json")]
    dict: PathBuf,

    /// Path to the favorites file
    #[arg(long, global = true, default_value = "favorites.json")]
    favorites: PathBuf,

    #[command(subcommand)]
    /// Subcommand to execute.
    command: Commands,
}

#[derive(Subcommand)]
/// Supported `akz` subcommands.
enum Commands {
    /// Search the dictionary
    Search {
        /// Search text; may embed #tag directives (e.g. "#en water",
        /// "#verb #li aya")
        #[arg(default_value = "")]
        query: String,

        /// Interpret the query as a phonological pattern (C/V shorthand)
        #[arg(long)]
        pattern: bool,

        /// Only entries with recorded audio
        #[arg(long)]
        audio_only: bool,

        /// Result offset for paging
        #[arg(long, default_value = "0")]
        offset: usize,

        /// Results per page
        #[arg(short = 'n', long, default_value_t = DEFAULT_PAGE_SIZE)]
        limit: usize,
    },

    /// Show full entries for a headword
    Show {
        /// The headword to look up (exact, accent-sensitive)
        headword: String,
    },

    /// Manage favorited entries
    Favorites {
        #[command(subcommand)]
        /// Favorites operation.
        command: FavoritesCommands,
    },
}

#[derive(Subcommand)]
/// Operations on the favorites store.
enum FavoritesCommands {
    /// Snapshot an entry into favorites
    Add {
        /// Headword of the entry to favorite
        headword: String,
    },

    /// Remove a favorite
    Remove {
        /// Headword of the favorite to remove
        headword: String,
    },

    /// List all favorites
    List,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Every subcommand needs the lexicon; a malformed artifact is fatal.
    let lexicon = match Lexicon::load(&cli.dict) {
        Ok(lexicon) => lexicon,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Search {
            query,
            pattern,
            audio_only,
            offset,
            limit,
        } => cmd_search(lexicon, &query, pattern, audio_only, offset, limit),
        Commands::Show { headword } => cmd_show(&lexicon, &headword),
        Commands::Favorites { command } => cmd_favorites(&lexicon, &cli.favorites, &command),
    }
}

/// Implements `akz search`.
fn cmd_search(
    lexicon: Lexicon,
    query: &str,
    pattern: bool,
    audio_only: bool,
    offset: usize,
    limit: usize,
) -> ExitCode {
    let mode = if pattern {
        SearchMode::Pattern
    } else {
        SearchMode::Literal
    };

    let engine = SearchEngine::new(lexicon);
    let results = engine.search_text(query, mode, audio_only);
    let page = results.page(offset, limit);

    if page.items.is_empty() {
        println!("No results.");
        return ExitCode::SUCCESS;
    }

    println!("{}", output::result_table(&page.items));
    println!(
        "{} - {} of {} results",
        page.offset,
        page.offset + page.items.len(),
        page.total_count
    );

    ExitCode::SUCCESS
}

/// Implements `akz show`.
fn cmd_show(lexicon: &Lexicon, headword: &str) -> ExitCode {
    let entries = lexicon.find(headword);
    if entries.is_empty() {
        eprintln!("error: no entry for headword: {headword}");
        return ExitCode::FAILURE;
    }

    for entry in entries {
        output::print_entry(entry, &lexicon.related_entries(entry));
    }

    ExitCode::SUCCESS
}

/// Implements `akz favorites`.
fn cmd_favorites(
    lexicon: &Lexicon,
    favorites_path: &Path,
    command: &FavoritesCommands,
) -> ExitCode {
    let mut store = FavoritesStore::open(favorites_path);

    match command {
        FavoritesCommands::Add { headword } => {
            let entries = lexicon.find(headword);
            let Some(entry) = entries.first() else {
                eprintln!("error: no entry for headword: {headword}");
                return ExitCode::FAILURE;
            };

            match store.add(entry) {
                Ok(true) => println!("Added {headword} to favorites."),
                Ok(false) => println!("{headword} is already a favorite."),
                Err(e) => {
                    eprintln!("error: {e}");
                    return ExitCode::FAILURE;
                }
            }
        }
        FavoritesCommands::Remove { headword } => match store.remove(headword) {
            Ok(true) => println!("Removed {headword} from favorites."),
            Ok(false) => {
                eprintln!("error: {headword} is not a favorite");
                return ExitCode::FAILURE;
            }
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        },
        FavoritesCommands::List => {
            if store.list().is_empty() {
                println!("No favorites.");
            } else {
                println!("{}", output::result_table(store.list()));
            }
        }
    }

    ExitCode::SUCCESS
}
