//! `cauhec`: the CAUHEC Connect admin API from a terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use shared::config::ClientConfig;
use shared::models::UserRole;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::Session;

/// CAUHEC Connect admin CLI
#[derive(Parser)]
#[command(name = "cauhec")]
#[command(about = "Command-line interface for the CAUHEC Connect admin API", long_about = None)]
struct Cli {
    /// Path to a configuration file (yaml or json)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Overrides the API base URL, e.g. `http://localhost:3000/api/v1`
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the session
    Login {
        /// Admin email; prompted for when omitted
        #[arg(long, short)]
        email: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in administrator
    Whoami,
    /// Show the stat tiles and the monthly chart
    Dashboard,
    /// List students or preceptors
    Users {
        #[arg(long, short, default_value = "student")]
        role: UserRole,
    },
    /// Show one user's profile
    User { id: String },
    /// List student/preceptor connections
    Connections,
    /// List institutions
    Institutions {
        #[arg(long)]
        state: Option<String>,
        #[arg(long = "type")]
        kind: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    /// List administrator profiles
    Profiles,
    /// Add a school location or clinical site
    AddInstitution {
        #[arg(long)]
        name: String,
        #[arg(long = "type")]
        kind: String,
        #[arg(long)]
        state: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        address: Option<String>,
    },
    /// Create an administrator account; the password is prompted for
    CreateAdmin {
        #[arg(long)]
        email: String,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
    },
    /// Delete an administrator profile
    DeleteProfile { id: i64 },
    /// Generate shell completion scripts
    Completion {
        #[arg(long, short)]
        shell: clap_complete::Shell,
    },
    /// Write a configuration file with the default settings
    Config {
        /// yaml or json
        #[arg(long, short, default_value = "yaml")]
        format: String,
    },
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Completion { shell } => {
            commands::completion::generate_completion(*shell);
            return Ok(());
        }
        Commands::Config { format } => {
            return commands::config::generate_config(format);
        }
        _ => {}
    }

    let config = ClientConfig::load_config(cli.config.as_deref(), cli.api_url.as_deref())
        .context("failed to load configuration")?;
    init_tracing(&config.log_level);
    let session = Session::open(&config);

    match cli.command {
        Commands::Login { email } => commands::session::login(&session, email).await,
        Commands::Logout => commands::session::logout(&session),
        Commands::Whoami => commands::session::whoami(&session),
        Commands::Dashboard => commands::records::dashboard(&session).await,
        Commands::Users { role } => commands::records::users(&session, role).await,
        Commands::User { id } => commands::records::user(&session, &id).await,
        Commands::Connections => commands::records::connections(&session).await,
        Commands::Institutions {
            state,
            kind,
            search,
        } => commands::records::institutions(&session, state, kind, search).await,
        Commands::Profiles => commands::records::profiles(&session).await,
        Commands::AddInstitution {
            name,
            kind,
            state,
            city,
            address,
        } => {
            let institution = shared::models::NewInstitution {
                name,
                kind,
                state,
                city,
                address,
            };
            commands::admin::add_institution(&session, &institution).await
        }
        Commands::CreateAdmin {
            email,
            first_name,
            last_name,
        } => commands::admin::create_admin(&session, email, first_name, last_name).await,
        Commands::DeleteProfile { id } => commands::admin::delete_profile(&session, id).await,
        Commands::Completion { .. } | Commands::Config { .. } => Ok(()),
    }
}
