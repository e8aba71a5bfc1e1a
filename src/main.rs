//! bookfinder — book search with a durable local history and reading list.
//!
//! Queries the Google Books volumes API and keeps three values in a local
//! key-value namespace: recent searches, saved reading-list titles, and the
//! last executed query (replayed when invoked with no command).

mod api;
mod config;
mod render;
mod session;
mod store;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tokio::io::AsyncBufReadExt;
use tracing::{debug, error, info};

use api::BookClient;
use config::Config;
use session::SearchSession;
use store::LocalStore;
use store::backend::FileBackend;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("type something to search for")]
    EmptyQuery,
    #[error("type a book title")]
    EmptyTitle,
    #[error("something went wrong while fetching books; please try again")]
    SearchFailed,
    #[error("failed to build http client: {0}")]
    HttpClient(String),
    #[error("failed to read input: {0}")]
    Input(String),
}

#[derive(Parser, Debug)]
#[command(name = "bookfinder", about = "Book search with a local history and reading list")]
struct Cli {
    /// Durable storage directory (default: $HOME/.bookfinder).
    #[arg(long, env = "BOOKFINDER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Book API base URL override.
    #[arg(long, env = "BOOKFINDER_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for books and record the query in the history.
    Search {
        query: Vec<String>,
    },
    /// Read queries from stdin, one per line; a new query supersedes any
    /// search still in flight.
    Interactive,
    History(HistoryCommand),
    List(ListCommand),
}

/// Recent-search history.
#[derive(Args, Debug)]
struct HistoryCommand {
    #[command(subcommand)]
    command: HistorySubcommand,
}

#[derive(Subcommand, Debug)]
enum HistorySubcommand {
    /// Show recent searches, most recent first.
    Show,
    /// Delete the entire search history.
    Clear,
}

/// Saved reading list.
#[derive(Args, Debug)]
struct ListCommand {
    #[command(subcommand)]
    command: ListSubcommand,
}

#[derive(Subcommand, Debug)]
enum ListSubcommand {
    /// Save a title to the reading list.
    Add {
        title: Vec<String>,
    },
    /// Remove a title from the reading list.
    Remove {
        title: Vec<String>,
    },
    /// Show the reading list, most recently added first.
    Show,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = Config::from_env();
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url.trim_end_matches('/').to_owned();
    }

    let store = LocalStore::new(FileBackend::new(&config.data_dir));

    match cli.command {
        Some(Command::Search { query }) => {
            let client = build_client(&config)?;
            run_search(&store, &client, &query.join(" ")).await
        }
        Some(Command::Interactive) => {
            let client = build_client(&config)?;
            run_interactive(&store, &client).await
        }
        Some(Command::History(history)) => run_history(&store, history),
        Some(Command::List(list)) => run_list(&store, list),
        None => {
            // Startup behavior: replay the last query when one exists.
            match store.last_query() {
                Some(query) => {
                    info!(query = %query, "replaying last search");
                    let client = build_client(&config)?;
                    run_search(&store, &client, &query).await
                }
                None => {
                    println!("No previous search. Try `bookfinder search <terms>`.");
                    Ok(())
                }
            }
        }
    }
}

fn build_client(config: &Config) -> Result<BookClient, CliError> {
    BookClient::new(config).map_err(|e| CliError::HttpClient(e.to_string()))
}

async fn run_search(
    store: &LocalStore<FileBackend>,
    client: &BookClient,
    query: &str,
) -> Result<(), CliError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(CliError::EmptyQuery);
    }

    // Recorded at submission; a failed fetch changes nothing further.
    store.record_search(query);
    store.set_last_query(query);

    match client.search(query).await {
        Ok(books) => {
            print!("{}", render::format_results(query, &books));
            Ok(())
        }
        Err(e) => {
            error!(error = %e, query, "book search failed");
            Err(CliError::SearchFailed)
        }
    }
}

async fn run_interactive(
    store: &LocalStore<FileBackend>,
    client: &BookClient,
) -> Result<(), CliError> {
    let mut session = SearchSession::new();
    let (tx, mut rx) = tokio::sync::mpsc::channel::<SearchOutcome>(4);
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    println!("Type a query and press Enter; a blank line quits.");
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = line.map_err(|e| CliError::Input(e.to_string()))?;
                let Some(line) = line else { break };
                let query = line.trim().to_owned();
                if query.is_empty() {
                    break;
                }

                store.record_search(&query);
                store.set_last_query(&query);

                let generation = session.begin();
                let client = client.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    let result = client.search(&query).await;
                    let _ = tx.send(SearchOutcome { generation, query, result }).await;
                });
            }
            Some(outcome) = rx.recv() => {
                if !session.is_current(outcome.generation) {
                    debug!(query = %outcome.query, "dropping stale search response");
                    continue;
                }
                match outcome.result {
                    Ok(books) => print!("{}", render::format_results(&outcome.query, &books)),
                    Err(e) => {
                        error!(error = %e, query = %outcome.query, "book search failed");
                        eprintln!("{}", CliError::SearchFailed);
                    }
                }
            }
        }
    }
    Ok(())
}

struct SearchOutcome {
    generation: u64,
    query: String,
    result: Result<Vec<api::Book>, api::ApiError>,
}

fn run_history(store: &LocalStore<FileBackend>, history: HistoryCommand) -> Result<(), CliError> {
    match history.command {
        HistorySubcommand::Show => {
            print!("{}", render::format_history(&store.search_history()));
        }
        HistorySubcommand::Clear => {
            store.clear_search_history();
            println!("Search history cleared.");
        }
    }
    Ok(())
}

fn run_list(store: &LocalStore<FileBackend>, list: ListCommand) -> Result<(), CliError> {
    match list.command {
        ListSubcommand::Add { title } => {
            let title = title.join(" ");
            let title = title.trim();
            if title.is_empty() {
                return Err(CliError::EmptyTitle);
            }
            if store.add_to_reading_list(title) {
                println!("Added \"{title}\" to your reading list.");
            } else {
                println!("\"{title}\" is already on your reading list.");
            }
        }
        ListSubcommand::Remove { title } => {
            let title = title.join(" ");
            let title = title.trim();
            if title.is_empty() {
                return Err(CliError::EmptyTitle);
            }
            store.remove_from_reading_list(title);
            println!("Removed \"{title}\" from your reading list.");
        }
        ListSubcommand::Show => {
            print!("{}", render::format_reading_list(&store.reading_list()));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
