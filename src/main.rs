use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use taskd::cli;
use taskd::config::ServerConfig;
use taskd::{rest, AppContext};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "taskd",
    about = "Demo user/task REST API daemon and CLI client",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Base URL of the API, used by the client subcommands
    #[arg(
        long,
        env = "TASKD_API_URL",
        default_value = "http://127.0.0.1:4310",
        global = true
    )]
    api_url: String,
}

#[derive(Subcommand)]
enum Command {
    /// Start the API server (default when no subcommand given).
    ///
    /// Runs taskd in the foreground. All state is held in memory and lost
    /// when the process exits.
    ///
    /// Examples:
    ///   taskd serve
    ///   taskd serve --port 9000 --log debug
    Serve {
        /// REST server port
        #[arg(long, env = "TASKD_PORT")]
        port: Option<u16>,
        /// Bind address (default: 127.0.0.1; use 0.0.0.0 for LAN access)
        #[arg(long, env = "TASKD_BIND")]
        bind: Option<String>,
        /// Log level (trace, debug, info, warn, error)
        #[arg(long, env = "TASKD_LOG")]
        log: Option<String>,
        /// Path to a TOML config file
        #[arg(long)]
        config: Option<std::path::PathBuf>,
    },
    /// Check API health.
    ///
    /// Examples:
    ///   taskd health
    Health,
    /// Show record counts (users, tasks, completed tasks).
    Stats,
    /// Create a new user.
    ///
    /// Examples:
    ///   taskd create-user --name "John" --email john@example.com
    ///   taskd create-user --name "Ada" --email ada@example.com --age 36
    CreateUser {
        /// Name of the user (must be non-empty)
        #[arg(long)]
        name: String,
        /// Email address (local@domain.tld)
        #[arg(long)]
        email: String,
        /// Age in years (optional, 0–150)
        #[arg(long)]
        age: Option<u32>,
    },
    /// List all users in creation order.
    ListUsers,
    /// Show one user.
    GetUser { id: u64 },
    /// Delete a user. The tasks they own are deleted too.
    ///
    /// Examples:
    ///   taskd delete-user 3
    DeleteUser { id: u64 },
    /// Show a user's task summary (totals and completion rate).
    Summary { id: u64 },
    /// Create a new task.
    ///
    /// Examples:
    ///   taskd create-task --title "write docs"
    ///   taskd create-task --title "review PR" --owner-id 1
    CreateTask {
        /// Title of the task (must be non-empty)
        #[arg(long)]
        title: String,
        /// Free-form description (optional)
        #[arg(long)]
        description: Option<String>,
        /// Owning user id (optional, must exist)
        #[arg(long)]
        owner_id: Option<u64>,
    },
    /// List tasks, optionally filtered.
    ///
    /// Examples:
    ///   taskd list-tasks
    ///   taskd list-tasks --completed true --owner-id 1
    ListTasks {
        /// Filter by completion status
        #[arg(long)]
        completed: Option<bool>,
        /// Filter by owning user
        #[arg(long)]
        owner_id: Option<u64>,
    },
    /// Mark a task as completed.
    CompleteTask { id: u64 },
    /// Delete a task.
    DeleteTask { id: u64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let api_url = args.api_url;

    match args.command.unwrap_or(Command::Serve {
        port: None,
        bind: None,
        log: None,
        config: None,
    }) {
        Command::Serve {
            port,
            bind,
            log,
            config,
        } => serve(port, bind, log, config).await,
        Command::Health => cli::cmd_health(&api_url).await,
        Command::Stats => cli::cmd_stats(&api_url).await,
        Command::CreateUser { name, email, age } => {
            cli::users::cmd_create(&api_url, name, email, age).await
        }
        Command::ListUsers => cli::users::cmd_list(&api_url).await,
        Command::GetUser { id } => cli::users::cmd_show(&api_url, id).await,
        Command::DeleteUser { id } => cli::users::cmd_delete(&api_url, id).await,
        Command::Summary { id } => cli::users::cmd_summary(&api_url, id).await,
        Command::CreateTask {
            title,
            description,
            owner_id,
        } => cli::tasks::cmd_create(&api_url, title, description, owner_id).await,
        Command::ListTasks {
            completed,
            owner_id,
        } => cli::tasks::cmd_list(&api_url, completed, owner_id).await,
        Command::CompleteTask { id } => cli::tasks::cmd_complete(&api_url, id).await,
        Command::DeleteTask { id } => cli::tasks::cmd_delete(&api_url, id).await,
    }
}

async fn serve(
    port: Option<u16>,
    bind: Option<String>,
    log: Option<String>,
    config_path: Option<std::path::PathBuf>,
) -> Result<()> {
    let base = match &config_path {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    let config = base.apply_overrides(port, bind, log);

    init_logging(&config.log_level);

    let addr = config.socket_addr()?;
    info!(version = env!("CARGO_PKG_VERSION"), "taskd starting");

    let ctx = Arc::new(AppContext::new(config));
    rest::start_rest_server(ctx, addr).await
}

fn init_logging(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .compact()
        .init();
}
