pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "postctl")]
#[command(about = "postctl - operator tooling for the Posts API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Create database tables in DATABASE_URL")]
    Migrate,

    #[command(about = "User records used for post and comment authorship")]
    User {
        #[command(subcommand)]
        cmd: commands::user::UserCommands,
    },

    #[command(about = "Mint a signed token for a user id")]
    Token(commands::token::TokenArgs),
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Migrate => commands::migrate::handle().await,
        Commands::User { cmd } => commands::user::handle(cmd).await,
        Commands::Token(args) => commands::token::handle(args),
    }
}
