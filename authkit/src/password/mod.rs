pub mod bcrypt;
pub mod errors;

pub use bcrypt::PasswordHasher;
pub use bcrypt::WORK_FACTOR;
pub use errors::PasswordError;
