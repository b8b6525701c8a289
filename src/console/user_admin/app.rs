//! User administration console.
//!
//! It uses the same configuration as the main application.
//!
//! Examples:
//!
//! Create a user:
//!
//! ```text
//! cargo run --bin user_admin -- create --name "Ana Pérez" --email ana@example.com --role tecnico --password secret
//! ```
//!
//! Hash a password, for stores whose users are inserted by their owners:
//!
//! ```text
//! cargo run --bin user_admin -- hash-password --password secret
//! ```
use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use evidence_tracker_primitives::{Role, UserId};

use crate::bootstrap::config::initialize_configuration;
use crate::core::auth::{password, NewUser};
use crate::core::store::Store;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Creates a user in the configured store.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// `tecnico` or `coordinador`.
        #[arg(long)]
        role: Role,
        #[arg(long, env = "EVIDENCE_TRACKER_USER_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Prints the bcrypt hash of a password.
    HashPassword {
        #[arg(long, env = "EVIDENCE_TRACKER_USER_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

/// # Errors
///
/// Will return an error if the command fails.
pub async fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Create {
            name,
            email,
            role,
            password,
        } => {
            let configuration = initialize_configuration().context("failed to load the configuration")?;

            let store = Store::new(&configuration.core.database);

            let user_id = create_user(&store, &name, &email, role, password).await?;

            println!("User {email} created with id {user_id}");
        }
        Command::HashPassword { password } => {
            let password_hash = hash_password(password).await?;

            println!("{password_hash}");
        }
    }

    Ok(())
}

/// Hashes the password and inserts the user.
///
/// # Errors
///
/// Will return an error if a field is blank or the store fails, for example
/// because the email is already registered.
pub async fn create_user(store: &Store, name: &str, email: &str, role: Role, password: String) -> anyhow::Result<UserId> {
    let (name, email) = (name.trim(), email.trim());

    if name.is_empty() || email.is_empty() || password.is_empty() {
        bail!("name, email and password are required");
    }

    let new_user = NewUser {
        name: name.to_string(),
        email: email.to_string(),
        role,
        password_hash: hash_password(password).await?,
    };

    store
        .call(move |database| database.add_user(&new_user))
        .await
        .context("failed to insert the user")
}

async fn hash_password(plain: String) -> anyhow::Result<String> {
    tokio::task::spawn_blocking(move || password::hash(&plain))
        .await
        .context("the hashing task failed")?
        .context("failed to hash the password")
}
