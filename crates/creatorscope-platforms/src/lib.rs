//! Platform-metrics collection: URL identifier extraction, API response
//! normalization, and fetch orchestration across YouTube, Instagram, TikTok,
//! Facebook, Pinterest, and Spotify.
//!
//! The three pieces compose in dependency order: [`extract`] turns a pasted
//! URL into a platform-native content ID, [`normalize`] maps a platform's raw
//! JSON onto the shared [`creatorscope_core::PlatformViewData`] record, and
//! [`client::PlatformClient`] drives the extract → fetch → normalize pipeline
//! against the live APIs, converting every failure into the uniform
//! [`creatorscope_core::ApiResponse`] shape.

pub mod aggregate;
pub mod client;
pub mod duration;
pub mod error;
pub mod extract;
pub mod normalize;
mod retry;
pub mod types;

pub use aggregate::aggregate_platform_data;
pub use client::{PlatformClient, PlatformEndpoints};
pub use error::PlatformError;
pub use extract::{extract_id, extract_spotify_resource, SpotifyResource, SpotifyResourceKind};
pub use normalize::normalize;
