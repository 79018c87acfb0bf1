// handlers/mod.rs - Handler tiers
//
// Public (no auth) -> Protected (token required)

pub mod protected; // /posts/*
pub mod public; // /, /health
