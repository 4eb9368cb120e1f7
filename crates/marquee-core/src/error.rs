// src/error.rs
//! Error types for marquee-core
//!
//! Every marquee operation is total over its inputs. The only fallible path
//! is decoding a persisted [`SavedMarqueeState`](crate::marquee::SavedMarqueeState)
//! snapshot.

use thiserror_no_std::Error;

/// Errors surfaced by marquee-core
#[derive(Debug, Error)]
pub enum MarqueeError {
    /// A saved state snapshot could not be encoded or decoded
    #[error("Snapshot codec failed: {0}")]
    Snapshot(postcard::Error),
}

impl From<postcard::Error> for MarqueeError {
    fn from(err: postcard::Error) -> Self {
        MarqueeError::Snapshot(err)
    }
}

/// Result type for marquee operations
pub type MarqueeResult<T> = Result<T, MarqueeError>;
