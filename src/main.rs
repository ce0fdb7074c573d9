use anyhow::Result;
use clap::{Parser, Subcommand};
use std::future::Future;
use std::process;

use newslens::api::{AnalyzeRequest, ApiClient, SearchRequest};
use newslens::environment::get_env_var_as_vec;
use newslens::logging;
use newslens::render;
use newslens::session::{RequestSession, SessionState};

#[derive(Parser)]
#[clap(name = "newslens", about = "News bias and fact-coverage analysis dashboard")]
struct Cli {
    /// Backend base URL (overrides NEWSLENS_API_URL)
    #[clap(long)]
    api_url: Option<String>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for articles matching a query
    Search {
        query: String,

        /// Earliest publication date (ISO-8601)
        #[clap(long)]
        date_from: Option<String>,

        /// Latest publication date (ISO-8601)
        #[clap(long)]
        date_to: Option<String>,

        /// Restrict to these sources (repeatable)
        #[clap(short, long)]
        source: Vec<String>,

        /// Number of articles to fetch
        #[clap(short, long, default_value = "50")]
        limit: u32,
    },

    /// Run the full analysis pipeline and list the resulting clusters
    Analyze {
        query: String,

        /// Earliest publication date (ISO-8601)
        #[clap(long)]
        date_from: Option<String>,

        /// Latest publication date (ISO-8601)
        #[clap(long)]
        date_to: Option<String>,

        /// Restrict to these sources (repeatable)
        #[clap(short, long)]
        source: Vec<String>,
    },

    /// Show the detail view of an analyzed cluster
    Cluster {
        /// Cluster ID from an analyze run
        id: String,
    },

    /// Show a single article
    Article {
        /// Article ID
        id: String,
    },
}

/// Source filter from CLI flags, falling back to NEWSLENS_SOURCES.
fn source_filter(cli_sources: Vec<String>) -> Option<Vec<String>> {
    let sources = if cli_sources.is_empty() {
        get_env_var_as_vec("NEWSLENS_SOURCES", ';')
    } else {
        cli_sources
    };
    if sources.is_empty() {
        None
    } else {
        Some(sources)
    }
}

/// Drives one fetch through a request session: begin, await, then settle
/// with the token so a completion that no longer matches the session's
/// current generation would be dropped.
async fn run_fetch<T, F>(session: &mut RequestSession<T>, fetch: F)
where
    F: Future<Output = Result<T>>,
{
    let token = match session.begin() {
        Some(token) => token,
        // A request is already in flight; the submit is a no-op.
        None => return,
    };
    match fetch.await {
        Ok(payload) => {
            session.resolve(token, payload);
        }
        Err(err) => {
            session.reject(token, format!("{:#}", err));
        }
    }
}

fn exit_on_error<T>(session: &RequestSession<T>) {
    if let SessionState::Error(message) = session.state() {
        render::render_error(message);
        process::exit(1);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::configure_logging();

    let args = Cli::parse();
    let client = match &args.api_url {
        Some(url) => ApiClient::new(url)?,
        None => ApiClient::from_env()?,
    };

    match args.command {
        Commands::Search {
            query,
            date_from,
            date_to,
            source,
            limit,
        } => {
            let request = SearchRequest {
                query,
                date_from,
                date_to,
                sources: source_filter(source),
                limit: Some(limit),
            };
            let mut session = RequestSession::new();
            run_fetch(&mut session, client.search(&request)).await;
            exit_on_error(&session);
            if let Some(articles) = session.payload() {
                render::render_search_results(articles);
            }
        }

        Commands::Analyze {
            query,
            date_from,
            date_to,
            source,
        } => {
            let request = AnalyzeRequest {
                query,
                date_from,
                date_to,
                sources: source_filter(source),
            };
            let mut session = RequestSession::new();
            run_fetch(&mut session, client.analyze(&request)).await;
            exit_on_error(&session);
            if let Some(response) = session.payload() {
                render::render_analysis(response);
            }
        }

        Commands::Cluster { id } => {
            let mut session = RequestSession::new();
            run_fetch(&mut session, client.cluster(&id)).await;
            exit_on_error(&session);
            if let Some(cluster) = session.payload() {
                render::render_cluster(cluster);
            }
        }

        Commands::Article { id } => {
            let mut session = RequestSession::new();
            run_fetch(&mut session, client.article(&id)).await;
            exit_on_error(&session);
            if let Some(article) = session.payload() {
                render::render_article_card(article);
            }
        }
    }

    Ok(())
}
