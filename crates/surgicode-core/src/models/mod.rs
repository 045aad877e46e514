pub mod progress;
pub mod tutorial;
pub mod user;

pub use progress::{CompletedSet, ProgressRecord};
pub use tutorial::{Category, Placement, Step, Tutorial};
pub use user::UserId;
