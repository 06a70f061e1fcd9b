//! Domain records: users and the applications tokens are issued for.

pub mod app;
pub mod user;

pub use app::App;
pub use user::User;
