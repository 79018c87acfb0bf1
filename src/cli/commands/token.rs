use anyhow::Context;
use clap::Args;
use uuid::Uuid;

use crate::auth::issue_token;
use crate::config;

#[derive(Args)]
pub struct TokenArgs {
    #[arg(long, help = "User id the token is issued for")]
    pub user: Uuid,

    #[arg(long, help = "Hours until expiry (defaults to SECURITY_JWT_EXPIRY_HOURS)")]
    pub hours: Option<u64>,
}

pub fn handle(args: TokenArgs) -> anyhow::Result<()> {
    let security = &config::config().security;
    let hours = args.hours.unwrap_or(security.jwt_expiry_hours);
    let token = issue_token(&security.jwt_secret, args.user, hours).context("JWT_SECRET must be set")?;
    println!("{}", token);
    Ok(())
}
