// Library surface for the binary and the integration tests.
pub mod app_dirs;
pub mod config;
pub mod console;
pub mod distractor;
pub mod error;
pub mod lesson;
pub mod quiz;
pub mod segment;
pub mod session;

pub use lesson::{LessonEntry, LessonSet};
pub use quiz::{LessonType, Outcome, QuizKind};
