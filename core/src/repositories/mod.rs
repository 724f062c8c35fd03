//! Repository traits defining the persistence boundary of the core.

pub mod diary;
pub mod reset_token;
pub mod user;

pub use diary::DiaryRepository;
pub use reset_token::ResetTokenRepository;
pub use user::UserRepository;
