//! Extractor implementations for video platforms.
//!
//! # Available Extractors
//!
//! - `ApifyExtractor` - Apify TikTok scraper (requires `apify` feature)
//! - `MockExtractor` - For testing
//!
//! # Example
//!
//! ```rust,ignore
//! use video_report::extractors::{ApifyExtractor, VideoExtractor};
//!
//! let extractor = ApifyExtractor::from_env()?;
//! let raw = extractor.extract("https://www.tiktok.com/@user/video/123").await?;
//! ```

mod mock;

#[cfg(feature = "apify")]
mod apify;

pub use mock::MockExtractor;

#[cfg(feature = "apify")]
pub use apify::ApifyExtractor;

// Re-export from traits for convenience
pub use crate::traits::extractor::{NoProgress, ProgressSink, VideoExtractor};
