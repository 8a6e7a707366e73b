pub mod user;

pub use user::SqliteUserStore;
