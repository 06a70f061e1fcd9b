//! Authentication: registration, login, admin lookup, session tokens.

pub mod handlers;
pub mod jwt;
mod password;
mod service;

pub use password::{HashParams, PasswordHasher};
pub use service::{AppProvider, AuthService, UserProvider, UserSaver};
