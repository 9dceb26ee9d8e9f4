//! Nocturne Content Client
//!
//! HTTP adapter for the remote `content` table.
//!
//! The adapter is a pure read-only query: given a [`Profile`], it
//! returns that profile's content items newest first. Its consumer sees
//! exactly three states (loading, loaded with results, loaded empty),
//! and fetch failures are logged and collapsed into the empty state.
//!
//! # Example
//!
//! ```ignore
//! use nocturne_content::{ContentClient, ContentConfig};
//! use nocturne_core::Profile;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ContentConfig::new("https://abc123.supabase.co", "anon-key");
//!     let client = ContentClient::new(config)?;
//!
//!     let state = client.load_for_profile(Profile::Joha).await;
//!     println!("{} items", state.items().len());
//!     Ok(())
//! }
//! ```
//!
//! [`Profile`]: nocturne_core::Profile

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod error;
mod state;

pub use client::{ContentClient, ContentConfig};
pub use error::{ContentError, Result};
pub use state::ContentListState;
