//! Unified course search abstraction layer
//!
//! This crate normalizes heterogeneous upstream course/video APIs into one
//! common [`Course`] record and fans a single query out to all of them.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  Aggregator                  │
//! │  aggregate(query) -> one slot per provider   │
//! └──────────────────────────────────────────────┘
//!          │ concurrent fan-out, settle-all
//! ┌────────┴─────────────────────────────────────┐
//! │              CourseProvider trait            │
//! │     search(&str) -> Vec<Course>              │
//! └──────────────────────────────────────────────┘
//!      △                 △                 △
//!      │                 │                 │
//! ┌────┴──────┐   ┌──────┴─────┐   ┌───────┴─────┐
//! │  Youtube  │   │   Udemy    │   │  Coursera   │
//! │  Provider │   │  Provider  │   │  Provider   │
//! └───────────┘   └────────────┘   └─────────────┘
//! ```

mod adapters;
mod aggregator;
mod error;
mod models;
mod provider;

pub use adapters::{CourseraProvider, UdemyProvider, YoutubeProvider};
pub use aggregator::{AggregateError, Aggregator, ProviderOutcome};
pub use error::ProviderError;
pub use models::{Course, Platform};
pub use provider::CourseProvider;
