//! Game engine: daily targets, guess evaluation and sessions

pub mod clock;
mod evaluator;
mod session;
mod target;

pub use clock::{Clock, FixedClock, SystemClock};
pub use evaluator::{GuessEvaluator, check_hard_mode};
pub use session::{GameSession, SessionState, SessionStatus};
pub use target::{TargetSelector, TargetState};
