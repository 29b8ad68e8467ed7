//! Domain models with validation at construction
//!
//! Client input is validated when building a `NewQuestion`.
//! Invalid input returns ValidationError, not panic.

pub mod category;
pub mod question;
pub mod validation;

pub use category::Category;
pub use question::{NewQuestion, Question, MAX_DIFFICULTY, MIN_DIFFICULTY};
pub use validation::ValidationError;
