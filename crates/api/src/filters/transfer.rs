//! Filter builder for token transfer queries.

use super::{encode_pattern, or_default, present, DEFAULT_CHAIN, DEFAULT_NETWORK, WILDCARD};

/// Builder for transfer query filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferFilters {
    /// Blockchain name, or `all`.
    pub chain: String,
    /// Network name.
    pub network: String,
    /// Token address or symbol.
    pub token: Option<String>,
    /// Sender address. Only encoded when `token` is set.
    pub from_address: Option<String>,
    /// Recipient address. Only encoded when `token` is set.
    pub to_address: Option<String>,
}

impl Default for TransferFilters {
    fn default() -> Self {
        Self {
            chain: DEFAULT_CHAIN.to_string(),
            network: DEFAULT_NETWORK.to_string(),
            token: None,
            from_address: None,
            to_address: None,
        }
    }
}

impl TransferFilters {
    /// Create filters matching all transfers on mainnet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by chain.
    pub fn chain<S: Into<String>>(mut self, chain: S) -> Self {
        self.chain = chain.into();
        self
    }

    /// Filter by network.
    pub fn network<S: Into<String>>(mut self, network: S) -> Self {
        self.network = network.into();
        self
    }

    /// Filter by token.
    pub fn token<S: Into<String>>(mut self, token: S) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Filter by sender address.
    pub fn from_address<S: Into<String>>(mut self, address: S) -> Self {
        self.from_address = Some(address.into());
        self
    }

    /// Filter by recipient address.
    pub fn to_address<S: Into<String>>(mut self, address: S) -> Self {
        self.to_address = Some(address.into());
        self
    }

    /// Ordered, unencoded pattern tokens.
    ///
    /// Addresses are ignored without a token. The pattern always ends with a
    /// trailing wildcard.
    pub fn tokens(&self) -> Vec<&str> {
        let mut tokens = vec![
            or_default(&self.chain, DEFAULT_CHAIN),
            or_default(&self.network, DEFAULT_NETWORK),
        ];

        if let Some(token) = present(self.token.as_ref()) {
            tokens.push(token);
            tokens.push(present(self.from_address.as_ref()).unwrap_or(WILDCARD));
            tokens.push(present(self.to_address.as_ref()).unwrap_or(WILDCARD));
        }

        tokens.push(WILDCARD);
        tokens
    }

    /// Encoded, dot-joined pattern.
    pub fn pattern(&self) -> String {
        encode_pattern(&self.tokens())
    }
}
