//! Domain entities for the MealTrack backend.

pub mod diary;
pub mod reset_token;
pub mod token;
pub mod user;

pub use diary::{DiaryEntry, Food};
pub use reset_token::PasswordResetToken;
pub use token::{Claims, TokenPair};
pub use user::User;
