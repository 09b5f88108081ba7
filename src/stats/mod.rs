//! Player statistics and accounts

mod account;
mod credential;
mod statistics;

pub use account::{Accounts, Preferences, SavedBoard, UserAccount, normalize_username};
pub use credential::{hash_password, verify_password};
pub use statistics::{GuessDistribution, UserStatistics};
