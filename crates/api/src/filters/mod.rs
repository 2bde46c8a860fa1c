//! Filter builders and the pattern encoding used in request paths.
//!
//! Every resource is addressed by a dot-delimited pattern whose positions carry
//! the filter values in a fixed order. Optional positions that sit between two
//! populated ones are filled with the wildcard token [`WILDCARD`].
//!
//! | Resource  | Pattern                                                    |
//! |-----------|------------------------------------------------------------|
//! | swaps     | `{chain}.{network}[.{token1}.{token2\|all}.{size_bucket}]` |
//! | transfers | `{chain}.{network}[.{token}.{from\|all}.{to\|all}].all`     |
//! | events    | `{chain}.mainnet.{token_address}.{event_name}`             |
//!
//! # Example
//!
//! ```
//! use heimdahl_api::{ResourceFilters, SizeBucket, SwapFilters};
//!
//! let filters = SwapFilters::new()
//!     .chain("ethereum")
//!     .token1("USDC")
//!     .size_bucket(SizeBucket::Whale);
//! assert_eq!(filters.pattern(), "ethereum.mainnet.USDC.all.whale");
//!
//! let resource = ResourceFilters::from(filters);
//! assert_eq!(resource.endpoint(), "swaps/list/ethereum.mainnet.USDC.all.whale");
//! ```

pub mod event;
pub mod swap;
pub mod transfer;

pub use event::EventFilters;
pub use swap::{SizeBucket, SwapFilters};
pub use transfer::TransferFilters;

/// Token meaning "no filter" at a pattern position.
pub const WILDCARD: &str = "all";

/// Default chain for swap and transfer patterns.
pub const DEFAULT_CHAIN: &str = WILDCARD;

/// Default network for swap and transfer patterns.
pub const DEFAULT_NETWORK: &str = "mainnet";

/// Filters for one of the resource classes served by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceFilters {
    Swap(SwapFilters),
    Transfer(TransferFilters),
    Event(EventFilters),
}

impl ResourceFilters {
    /// Ordered, unencoded pattern tokens.
    pub fn tokens(&self) -> Vec<&str> {
        match self {
            ResourceFilters::Swap(f) => f.tokens(),
            ResourceFilters::Transfer(f) => f.tokens(),
            ResourceFilters::Event(f) => f.tokens(),
        }
    }

    /// Encoded, dot-joined pattern.
    pub fn pattern(&self) -> String {
        encode_pattern(&self.tokens())
    }

    /// Endpoint path relative to the API base URL.
    pub fn endpoint(&self) -> String {
        format!("{}/list/{}", self.resource(), self.pattern())
    }

    /// Path prefix of the resource, which is also the key a wrapped response
    /// stores its records under.
    pub fn resource(&self) -> &'static str {
        match self {
            ResourceFilters::Swap(_) => "swaps",
            ResourceFilters::Transfer(_) => "transfers",
            ResourceFilters::Event(_) => "events",
        }
    }

    /// Whether the endpoint accepts `page`/`pageSize` query parameters.
    pub fn is_paginated(&self) -> bool {
        !matches!(self, ResourceFilters::Event(_))
    }
}

impl From<SwapFilters> for ResourceFilters {
    fn from(filters: SwapFilters) -> Self {
        ResourceFilters::Swap(filters)
    }
}

impl From<TransferFilters> for ResourceFilters {
    fn from(filters: TransferFilters) -> Self {
        ResourceFilters::Transfer(filters)
    }
}

impl From<EventFilters> for ResourceFilters {
    fn from(filters: EventFilters) -> Self {
        ResourceFilters::Event(filters)
    }
}

/// Percent-encode a single pattern token.
///
/// Everything outside the RFC 3986 unreserved set is escaped. `.` is
/// unreserved but is the pattern separator, so it is escaped as well.
pub fn encode_token(token: &str) -> String {
    urlencoding::encode(token).replace('.', "%2E")
}

/// Encode each token and join them with `.`.
pub fn encode_pattern(tokens: &[&str]) -> String {
    tokens
        .iter()
        .map(|t| encode_token(t))
        .collect::<Vec<_>>()
        .join(".")
}

/// An optional filter value, treating empty strings as absent.
pub(crate) fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

/// A required filter value, falling back to `default` when empty.
pub(crate) fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}
