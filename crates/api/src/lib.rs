//! Heimdahl API Rust Client
//!
//! This crate provides a Rust client for the Heimdahl blockchain data API: cross-chain
//! swaps, token transfers and raw contract events.
//!
//! Filters are encoded positionally into a dot-delimited pattern in the request path
//! (see [`filters`]). List endpoints are paginated with `page`/`pageSize`; the
//! aggregating helpers walk pages until a limit is reached (see [`pagination`]).
//!
//! # Example
//!
//! ```no_run
//! use heimdahl_api::{EventFilters, HeimdahlClient, PageRequest, TransferFilters};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), heimdahl_api::ApiError> {
//!     let client = HeimdahlClient::new("pk_...")?;
//!
//!     // One page of USDC transfers from an address on Arbitrum
//!     let filters = TransferFilters::new()
//!         .chain("arbitrum")
//!         .token("USDC")
//!         .from_address("0x51C72848c68a965f66FA7a88855F9f7784502a7F");
//!     let page = client.get_transfers(&filters, PageRequest::first(5)).await?;
//!
//!     // Up to 500 USDC transfers on any chain
//!     let transfers = client
//!         .get_token_transfers("USDC", TransferFilters::new(), 500)
//!         .await?;
//!
//!     // Transfer events emitted by a contract
//!     let events = client
//!         .get_events(&EventFilters::new(
//!             "arbitrum",
//!             "0xaf88d065e77c8cC2239327C5EDb3A432268e5831",
//!             "Transfer",
//!         ))
//!         .await?;
//!
//!     client.close();
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! All errors are reported through [`ApiError`]. A non-success HTTP status surfaces as
//! [`ApiError::Status`] with the response body; a body that is not JSON surfaces as
//! [`ApiError::Decode`]. Nothing is retried and filter values are never validated.

pub mod client;
pub mod error;
pub mod filters;
pub mod pagination;
pub mod records;

// Re-export main types at crate root
pub use client::{ClientConfig, HeimdahlClient, API_KEY_ENV, API_URL_ENV, DEFAULT_API_URL};
pub use error::{ApiError, Result};
pub use filters::{EventFilters, ResourceFilters, SizeBucket, SwapFilters, TransferFilters, WILDCARD};
pub use pagination::{collect_pages, PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use records::{Record, RecordBatch};
