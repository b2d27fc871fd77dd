//! Core components of the `finsense-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`FsClient`] and its builder.
//! - The primary [`FsError`] type.
//! - Shared data models like [`Sentiment`] and [`SentimentLabel`].
//! - The [`SentimentService`] seam used by the dashboard.

/// The main client (`FsClient`), builder, and configuration.
pub mod client;
/// The primary error type (`FsError`) for the crate.
pub mod error;
/// Shared data models used across the news and predict modules.
pub mod models;
/// Service trait abstracting the remote endpoints.
pub mod services;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::FsClient`
pub use client::{FsClient, FsClientBuilder};
pub use error::{ErrorKind, FsError};
pub use models::{Sentiment, SentimentLabel};
pub use services::SentimentService;
