//! Filter for raw contract event queries.

use super::{encode_pattern, or_default, DEFAULT_NETWORK, WILDCARD};

/// Contract event filter. All three fields are required; the network is
/// always mainnet.
///
/// Values are not validated. An empty field is sent as the wildcard so the
/// pattern never carries an empty position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFilters {
    /// Blockchain name.
    pub chain: String,
    /// Contract address emitting the event.
    pub token_address: String,
    /// Event name, e.g. `Transfer`.
    pub event_name: String,
}

impl EventFilters {
    /// Create an event filter.
    pub fn new<C, A, E>(chain: C, token_address: A, event_name: E) -> Self
    where
        C: Into<String>,
        A: Into<String>,
        E: Into<String>,
    {
        Self {
            chain: chain.into(),
            token_address: token_address.into(),
            event_name: event_name.into(),
        }
    }

    /// Ordered, unencoded pattern tokens. Empty fields become [`WILDCARD`].
    pub fn tokens(&self) -> Vec<&str> {
        vec![
            or_default(&self.chain, WILDCARD),
            DEFAULT_NETWORK,
            or_default(&self.token_address, WILDCARD),
            or_default(&self.event_name, WILDCARD),
        ]
    }

    /// Encoded, dot-joined pattern.
    pub fn pattern(&self) -> String {
        encode_pattern(&self.tokens())
    }
}
