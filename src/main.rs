use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "sellerhub")]
#[command(about = "SellerHub - sales, profit, inventory and trend metrics for marketplace sellers")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.sellerhub/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// JSON dataset to use instead of the configured one or the built-in sample
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Key metrics per period with today-vs-yesterday changes
    Tiles,

    /// Time series totals and the selected chart series
    Charts {
        /// Series to toggle from the default set (sales, netProfit); repeatable
        #[arg(long = "toggle")]
        toggle: Vec<String>,

        /// Chart kind: line, bar or area
        #[arg(long, default_value = "line")]
        kind: String,
    },

    /// Profit & loss statement
    Pl {
        /// Category to toggle open or closed; repeatable
        #[arg(long = "expand")]
        expand: Vec<String>,
    },

    /// Sales and stock by region and country
    Map {
        /// Shade by "sales" or "stock"
        #[arg(long, default_value = "sales")]
        mode: String,

        /// Show details for one country
        #[arg(long)]
        country: Option<String>,
    },

    /// Product trends with filtering and sorting
    Trends {
        /// Case-insensitive filter over name, SKU and ASIN
        #[arg(long, default_value = "")]
        filter: String,

        /// Sort by "change" or "current"
        #[arg(long, default_value = "change")]
        sort: String,

        /// KPI label shown in the header (defaults to the configured metric)
        #[arg(long)]
        metric: Option<String>,
    },

    /// Manage stored marketplace API credentials
    Credentials {
        /// User the credentials belong to (defaults to settings.default_user)
        #[arg(short, long, global = true)]
        user: Option<String>,

        #[command(subcommand)]
        action: cli::credentials::CredentialsAction,
    },

    /// Initialize a new ~/.sellerhub/config.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    let data_path = cli.data.as_deref();

    match cli.command {
        Some(Commands::Tiles) | None => {
            let ctx = cli::Context::load(config_path, data_path)?;
            cli::tiles::tiles_command(&ctx);
        }
        Some(Commands::Charts { toggle, kind }) => {
            let ctx = cli::Context::load(config_path, data_path)?;
            cli::charts::charts_command(&ctx, &toggle, &kind)?;
        }
        Some(Commands::Pl { expand }) => {
            let ctx = cli::Context::load(config_path, data_path)?;
            cli::pl::pl_command(&ctx, &expand);
        }
        Some(Commands::Map { mode, country }) => {
            let ctx = cli::Context::load(config_path, data_path)?;
            cli::map::map_command(&ctx, &mode, country)?;
        }
        Some(Commands::Trends {
            filter,
            sort,
            metric,
        }) => {
            let ctx = cli::Context::load(config_path, data_path)?;
            cli::trends::trends_command(&ctx, filter, &sort, metric.as_deref())?;
        }
        Some(Commands::Credentials { user, action }) => {
            cli::credentials::credentials_command(config_path, user, action).await?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(config_path, force)?;
        }
    }

    Ok(())
}
