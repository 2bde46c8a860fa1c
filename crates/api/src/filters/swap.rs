//! Filter builder for cross-chain swap queries.

use std::fmt;

use super::{encode_pattern, or_default, present, DEFAULT_CHAIN, DEFAULT_NETWORK, WILDCARD};

/// Swap magnitude category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeBucket {
    Micro,
    Small,
    Medium,
    Large,
    Whale,
    #[default]
    All,
}

impl SizeBucket {
    /// Token used for this bucket in the swap pattern.
    pub fn as_str(self) -> &'static str {
        match self {
            SizeBucket::Micro => "micro",
            SizeBucket::Small => "small",
            SizeBucket::Medium => "medium",
            SizeBucket::Large => "large",
            SizeBucket::Whale => "whale",
            SizeBucket::All => WILDCARD,
        }
    }
}

impl fmt::Display for SizeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SizeBucket> for String {
    fn from(bucket: SizeBucket) -> Self {
        bucket.as_str().to_string()
    }
}

/// Builder for swap query filters.
///
/// Values are passed through untouched; the API decides what a chain name or
/// token symbol means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapFilters {
    /// Blockchain name, or `all`.
    pub chain: String,
    /// Network name.
    pub network: String,
    /// First token address or symbol.
    pub token1: Option<String>,
    /// Second token address or symbol.
    pub token2: Option<String>,
    /// Size category, only encoded when `token1` is set.
    pub size_bucket: String,
}

impl Default for SwapFilters {
    fn default() -> Self {
        Self {
            chain: DEFAULT_CHAIN.to_string(),
            network: DEFAULT_NETWORK.to_string(),
            token1: None,
            token2: None,
            size_bucket: SizeBucket::All.into(),
        }
    }
}

impl SwapFilters {
    /// Create filters matching all swaps on mainnet.
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

    /// Filter by first token.
    pub fn token1<S: Into<String>>(mut self, token: S) -> Self {
        self.token1 = Some(token.into());
        self
    }

    /// Filter by second token.
    pub fn token2<S: Into<String>>(mut self, token: S) -> Self {
        self.token2 = Some(token.into());
        self
    }

    /// Filter by a token pair.
    pub fn pair<A: Into<String>, B: Into<String>>(self, token1: A, token2: B) -> Self {
        self.token1(token1).token2(token2)
    }

    /// Filter by size category. Accepts a [`SizeBucket`] or any raw label.
    pub fn size_bucket<S: Into<String>>(mut self, bucket: S) -> Self {
        self.size_bucket = bucket.into();
        self
    }

    /// Ordered, unencoded pattern tokens.
    ///
    /// Without `token1` the pattern stops after the network. With it, a
    /// missing `token2` becomes the wildcard and the size bucket is always last.
    pub fn tokens(&self) -> Vec<&str> {
        let mut tokens = vec![
            or_default(&self.chain, DEFAULT_CHAIN),
            or_default(&self.network, DEFAULT_NETWORK),
        ];

        if let Some(token1) = present(self.token1.as_ref()) {
            tokens.push(token1);
            tokens.push(present(self.token2.as_ref()).unwrap_or(WILDCARD));
            tokens.push(or_default(&self.size_bucket, WILDCARD));
        }

        tokens
    }

    /// Encoded, dot-joined pattern.
    pub fn pattern(&self) -> String {
        encode_pattern(&self.tokens())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let filters = SwapFilters::new();
        assert_eq!(filters.chain, "all");
        assert_eq!(filters.network, "mainnet");
        assert_eq!(filters.size_bucket, "all");
        assert_eq!(filters.pattern(), "all.mainnet");
    }

    #[test]
    fn test_no_token1_ignores_other_fields() {
        let filters = SwapFilters::new()
            .chain("ethereum")
            .token2("WETH")
            .size_bucket(SizeBucket::Whale);
        assert_eq!(filters.pattern(), "ethereum.mainnet");
    }

    #[test]
    fn test_missing_token2_becomes_wildcard() {
        let filters = SwapFilters::new()
            .chain("ethereum")
            .token1("T1")
            .size_bucket(SizeBucket::Whale);
        assert_eq!(filters.pattern(), "ethereum.mainnet.T1.all.whale");
    }

    #[test]
    fn test_full_pattern() {
        let filters = SwapFilters::new()
            .chain("ethereum")
            .pair("T1", "T2")
            .size_bucket("whale");
        assert_eq!(filters.tokens(), vec!["ethereum", "mainnet", "T1", "T2", "whale"]);
        assert_eq!(filters.pattern(), "ethereum.mainnet.T1.T2.whale");
    }

    #[test]
    fn test_custom_network_and_raw_bucket() {
        let filters = SwapFilters::new()
            .chain("solana")
            .network("devnet")
            .pair("SOL", "USDC")
            .size_bucket("jumbo");
        assert_eq!(filters.pattern(), "solana.devnet.SOL.USDC.jumbo");
    }

    #[test]
    fn test_empty_values_fall_back() {
        let filters = SwapFilters::new()
            .chain("")
            .network("")
            .token1("T1")
            .token2("")
            .size_bucket("");
        assert_eq!(filters.pattern(), "all.mainnet.T1.all.all");
    }

    #[test]
    fn test_size_bucket_labels() {
        assert_eq!(SizeBucket::Micro.to_string(), "micro");
        assert_eq!(SizeBucket::Large.as_str(), "large");
        assert_eq!(SizeBucket::default(), SizeBucket::All);
        assert_eq!(String::from(SizeBucket::All), "all");
    }
}
