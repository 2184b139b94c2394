//! Maltak CLI
//!
//! Command-line front end for the Maltak content API.
//!
//! Every invocation opens an in-memory store (seeded unless `--empty`),
//! runs one command against it and prints JSON to stdout. Logs go to
//! stderr.
//!
//! # Commands
//!
//! - `articles`, `article`, `category`, `featured`, `popular`, `related`,
//!   `search` - Article queries
//! - `comments`, `comment` - Read and post comments
//! - `subscribe`, `unsubscribe` - Newsletter
//! - `news`, `tools`, `tool` - Other content
//! - `calc` - Loan, savings and budget calculators
//! - `batch` - Run JSON requests from stdin against one store
//! - `inspect` - Display store counts and statistics

mod commands;

use clap::{Parser, Subcommand};
use commands::calc::CalcCommand;
use maltak_api::{ApiConfig, ApiRequest, ApiServer};
use maltak_core::{Config, ContentStore, EntityId};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Maltak content API from the command line.
#[derive(Parser)]
#[command(name = "maltak")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Start from an empty store instead of the built-in dataset
    #[arg(global = true, long)]
    empty: bool,

    /// Default page size for article listings
    #[arg(global = true, long)]
    page_size: Option<usize>,

    /// Cap applied to every requested limit
    #[arg(global = true, long)]
    max_limit: Option<usize>,

    /// Pretty-print JSON output
    #[arg(global = true, long)]
    pretty: bool,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List articles with author and category, newest first
    Articles {
        /// Maximum number of articles
        #[arg(short, long)]
        limit: Option<usize>,

        /// Number of articles to skip
        #[arg(short, long)]
        offset: Option<usize>,
    },

    /// Read one article by slug (counts as a view)
    Article {
        /// Article slug
        slug: String,
    },

    /// List the articles of a category
    Category {
        /// Category slug
        slug: String,

        /// Maximum number of articles
        #[arg(short, long)]
        limit: Option<usize>,

        /// Number of articles to skip
        #[arg(short, long)]
        offset: Option<usize>,
    },

    /// List all categories
    Categories,

    /// List featured articles
    Featured {
        /// Maximum number of articles
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List the most viewed articles
    Popular {
        /// Maximum number of articles
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List articles related to an article
    Related {
        /// Article identity
        id: u64,

        /// Maximum number of articles
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Search article titles, excerpts and bodies
    Search {
        /// Search term
        query: String,

        /// Maximum number of articles
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List comments on an article
    Comments {
        /// Article identity
        article_id: u64,
    },

    /// Post a comment on an article
    Comment {
        /// Article identity
        article_id: u64,

        /// Author identity
        #[arg(short, long)]
        author: u64,

        /// Comment text
        content: String,
    },

    /// Subscribe an address to the newsletter
    Subscribe {
        /// Subscriber address
        email: String,

        /// Subscriber name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Unsubscribe an address from the newsletter
    Unsubscribe {
        /// Subscriber address
        email: String,
    },

    /// List the latest news
    News {
        /// Maximum number of items
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List financial tools
    Tools,

    /// Show one tool by slug
    Tool {
        /// Tool slug
        slug: String,
    },

    /// Run a financial calculator
    Calc {
        #[command(subcommand)]
        calculator: CalcCommand,
    },

    /// Run JSON requests from stdin, one per line, printing one response per line
    Batch,

    /// Display store counts and statistics
    Inspect {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

impl Commands {
    /// Maps a query command onto its API request.
    ///
    /// Returns `None` for commands that are not a single request.
    fn into_request(self) -> Option<ApiRequest> {
        let request = match self {
            Commands::Articles { limit, offset } => ApiRequest::ListArticles { limit, offset },
            Commands::Article { slug } => ApiRequest::GetArticle { slug },
            Commands::Category {
                slug,
                limit,
                offset,
            } => ApiRequest::CategoryArticles {
                slug,
                limit,
                offset,
            },
            Commands::Categories => ApiRequest::ListCategories,
            Commands::Featured { limit } => ApiRequest::FeaturedArticles { limit },
            Commands::Popular { limit } => ApiRequest::PopularArticles { limit },
            Commands::Related { id, limit } => ApiRequest::RelatedArticles {
                id: EntityId::new(id),
                limit,
            },
            Commands::Search { query, limit } => ApiRequest::Search {
                q: Some(query),
                limit,
            },
            Commands::Comments { article_id } => ApiRequest::ListComments {
                article_id: EntityId::new(article_id),
            },
            Commands::Comment {
                article_id,
                author,
                content,
            } => ApiRequest::CreateComment {
                article_id: EntityId::new(article_id),
                content: Some(content),
                author_id: Some(EntityId::new(author)),
            },
            Commands::Subscribe { email, name } => ApiRequest::Subscribe {
                email: Some(email),
                name,
            },
            Commands::Unsubscribe { email } => ApiRequest::Unsubscribe { email: Some(email) },
            Commands::News { limit } => ApiRequest::LatestNews { limit },
            Commands::Tools => ApiRequest::ListTools,
            Commands::Tool { slug } => ApiRequest::GetTool { slug },
            Commands::Calc { calculator } => ApiRequest::Calculate(calculator.into_calculation()),
            Commands::Batch | Commands::Inspect { .. } | Commands::Version => return None,
        };
        Some(request)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::default().seed_on_open(!cli.empty);
    if let Some(size) = cli.page_size {
        config = config.page_size(size);
    }
    let mut api_config = ApiConfig::default();
    if let Some(max) = cli.max_limit {
        api_config = api_config.with_max_limit(max);
    }

    let store = Arc::new(ContentStore::open(config));
    let server = ApiServer::new(api_config, Arc::clone(&store));

    match cli.command {
        Commands::Batch => {
            let stdin = std::io::stdin();
            commands::batch::run(&server, stdin.lock(), std::io::stdout().lock())?;
        }
        Commands::Inspect { format } => {
            commands::inspect::run(&store, &format)?;
        }
        Commands::Version => {
            println!("Maltak CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Maltak Core v{}", maltak_core::VERSION);
        }
        query => {
            let request = query
                .into_request()
                .ok_or("command does not map to a request")?;
            commands::request::run(&server, request, cli.pretty)?;
        }
    }

    Ok(())
}
