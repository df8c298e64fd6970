//! Out-of-band admin account management.
//!
//! The web app never creates admins; this tool seeds them.

use anyhow::{bail, Context, Result};
use bichon_api::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use bichon_api::config::ServerConfig;
use bichon_db::models::admin::CreateAdmin;
use bichon_db::repositories::AdminRepo;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bichon-admin", about = "Manage Bichon admin accounts")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print an Argon2id hash for a password
    HashPassword {
        password: String,
    },
    /// Create an admin in the configured database
    CreateAdmin(CreateAdminArgs),
}

#[derive(Parser, Debug)]
struct CreateAdminArgs {
    /// Login name (case-sensitive)
    #[arg(long)]
    username: String,

    #[arg(long)]
    password: String,
}

fn hash_checked(password: &str) -> Result<String> {
    if let Err(msg) = validate_password_strength(password, MIN_PASSWORD_LENGTH) {
        bail!(msg);
    }
    hash_password(password).map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))
}

async fn create_admin(args: CreateAdminArgs) -> Result<()> {
    let username = args.username.trim();
    if username.is_empty() {
        bail!("Username must not be empty");
    }
    let password_hash = hash_checked(&args.password)?;

    let config = ServerConfig::from_env().context("Invalid configuration")?;
    let pool = bichon_db::create_pool(&config.database)
        .await
        .context("Failed to connect to database")?;
    bichon_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let admin = AdminRepo::create(
        &pool,
        &CreateAdmin {
            username: username.to_string(),
            password_hash,
        },
    )
    .await
    .with_context(|| format!("Failed to create admin {username:?}"))?;

    tracing::info!(admin_id = admin.id, username = %admin.username, "Admin created");
    println!("Created admin {} (id {})", admin.username, admin.id);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bichon_admin=info,bichon_db=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::HashPassword { password } => {
            println!("{}", hash_checked(&password)?);
            Ok(())
        }
        Command::CreateAdmin(args) => create_admin(args).await,
    }
}
