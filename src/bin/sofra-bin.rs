use sofra::app::DinnerApp;
use sofra::constants::DEFAULT_API_URL;
use sofra::data_backend::dinner_client::{DinnerClient, DinnerFetcher};
use sofra::data_backend::dinner_render::build_catalog_msg;
use sofra::data_types::Category;
use sofra::logging::logger_init;
use sofra::selection::CategorySelection;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::log_enabled;
use std::io::Write;
use tokio::io::BufReader;

/// Spin for a random dinner, one dish per course.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Base URL of the dinner service
    #[arg(long, env = "SOFRA_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
    /// Enable verbose logging{n}[SETS env: RUST_LOG=debug]
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Interactive category menu (default)
    Menu,
    /// Get one random dinner and exit
    Random {
        /// Comma-separated categories{n}Example: soup,dessert
        #[arg(short, long, value_delimiter = ',')]
        categories: Vec<Category>,
        /// Skip the slot machine
        #[arg(long)]
        no_spin: bool,
        /// Print the raw suggestion as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the categories known to the service
    Categories,
    /// List every meal the service knows
    Meals {
        #[arg(short, long)]
        category: Option<Category>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    logger_init(module_path!());
    if !(log_enabled!(log::Level::Debug) || log_enabled!(log::Level::Trace)) {
        log::info!("Enable verbose logging for request details");
    }
    log::info!("Using dinner service at {}", args.api_url);

    let client = DinnerClient::new(args.api_url);
    let mut stdout = std::io::stdout();

    match args.command.unwrap_or(Cmd::Menu) {
        Cmd::Menu => {
            let mut app = DinnerApp::new(DinnerFetcher::new(client));
            app.run_menu(BufReader::new(tokio::io::stdin()), &mut stdout)
                .await?;
        }
        Cmd::Random {
            categories,
            no_spin,
            json,
        } => {
            let selection = if categories.is_empty() {
                CategorySelection::default()
            } else {
                categories.into_iter().collect()
            };

            if json {
                let dinner = client.fetch_dinner(&selection.to_vec()).await?;
                writeln!(stdout, "{}", serde_json::to_string_pretty(&dinner)?)?;
                return Ok(());
            }

            let mut app = DinnerApp::new(DinnerFetcher::new(client))
                .with_selection(selection)
                .with_spin(!no_spin);
            if !app.run_once(&mut stdout).await? {
                std::process::exit(1);
            }
        }
        Cmd::Categories => {
            for category in client.get_categories().await? {
                let info = category.info();
                writeln!(stdout, "{} {} ({})", info.icon, info.label, category)?;
            }
        }
        Cmd::Meals { category } => {
            let meals = client.get_meals().await?;
            write!(stdout, "{}", build_catalog_msg(&meals, category))?;
        }
    }

    Ok(())
}

