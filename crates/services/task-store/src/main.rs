//! Task Store - administrative CLI for the task and user collections.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::AppResult;
use task_store_lib::commands;
use task_store_lib::config::StoreConfig;
use task_store_lib::infra::Database;
use task_store_lib::Stores;

#[derive(Parser)]
#[command(name = "task-store")]
#[command(about = "Task and user persistence tooling")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Override the connection string
    #[arg(long, global = true, env = "MONGODB_URI")]
    uri: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check database connectivity
    Ping,
    /// User collection commands
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Task collection commands
    Tasks {
        #[command(subcommand)]
        action: TaskCommands,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// List all users
    List,
    /// Remove every user
    Reset,
}

#[derive(Subcommand)]
enum TaskCommands {
    /// List the tasks visible to a user
    List {
        /// Username whose view to show
        #[arg(long = "as")]
        username: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = StoreConfig::from_env();
    if let Some(uri) = cli.uri.clone() {
        config.database.uri = uri;
    }

    // Initialize tracing
    let default_level = if cli.verbose {
        "debug".to_string()
    } else {
        config.log.level.clone()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error [{}]: {}", err.code(), err.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, config: &StoreConfig) -> AppResult<()> {
    let db = Database::connect(&config.database).await?;
    let stores = Stores::from_database(&db);

    match command {
        Commands::Ping => {
            db.ping().await?;
            println!("ok");
        }
        Commands::Users { action } => match action {
            UserCommands::List => {
                for user in commands::list_users(stores.users.as_ref()).await? {
                    println!("{} {} {}", user.id, user.username, user.role);
                }
            }
            UserCommands::Reset => {
                let removed = commands::reset_users(stores.users.as_ref()).await?;
                println!("removed {} users", removed);
            }
        },
        Commands::Tasks { action } => match action {
            TaskCommands::List { username } => {
                let tasks =
                    commands::visible_tasks(stores.users.as_ref(), stores.tasks.as_ref(), &username)
                        .await?;
                for task in tasks {
                    println!(
                        "{} [{}] {} (due {}, owner {})",
                        task.id,
                        task.status,
                        task.title,
                        task.due_date.format("%Y-%m-%d"),
                        task.user_id
                    );
                }
            }
        },
    }

    Ok(())
}
