// handlers/protected/mod.rs - Handlers behind the token middleware
//
// Every route here expects an `AuthUser` extension, inserted by
// `jwt_auth_middleware` before the handler runs.

pub mod posts;

pub use posts::*;
