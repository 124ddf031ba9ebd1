//! Sokkuri Common Library
//!
//! Web(WASM)フロントと共有される型・スコアロジック

pub mod error;
pub mod score;
pub mod types;

pub use error::{Result, SokkuriError};
pub use score::{comment_for_score, headline_for_score, ScoreTier};
pub use types::{CompareResponse, ErrorBody, FALLBACK_ERROR_MESSAGE};
