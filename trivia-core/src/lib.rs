//! trivia-core: domain types shared by the trivia server and CLI
//!
//! - `models`: questions, categories and validated input
//! - `pagination`: fixed-size page windows over ordered question lists
//! - `quiz`: duplicate-free random quiz rounds
//! - `config`: deployment settings (TOML file + environment)

pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod quiz;

pub use config::Settings;
pub use error::{CoreError, Result};
pub use models::{Category, NewQuestion, Question, ValidationError};
pub use pagination::{paginate, Page, PageRequest, DEFAULT_QUESTIONS_PER_PAGE};
pub use quiz::RoundSpec;
