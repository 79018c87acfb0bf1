use clap::Subcommand;

use crate::config;
use crate::database::models::NewUser;
use crate::database::{PostgresStore, UserStore};

#[derive(Subcommand)]
pub enum UserCommands {
    #[command(about = "Create a user and print its id")]
    Add {
        #[arg(long, help = "Display name copied onto posts and comments")]
        name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long, help = "Avatar URL")]
        avatar: Option<String>,
    },
}

pub async fn handle(cmd: UserCommands) -> anyhow::Result<()> {
    match cmd {
        UserCommands::Add { name, email, avatar } => {
            let store = PostgresStore::connect(&config::config().database).await?;
            let user = store.insert_user(NewUser { name, email, avatar }).await?;
            store.close().await;
            println!("{}", user.id);
            Ok(())
        }
    }
}
