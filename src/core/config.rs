//! Node configuration.
//!
//! The embedding host supplies the identity that ends up in response
//! headers; the store itself only needs a handful of knobs.

use serde::{Deserialize, Serialize};

use crate::store::lease::DEFAULT_TTL_S;

/// Identity and store-level defaults for one node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Cluster identifier reported in response headers.
    pub cluster_id: u64,

    /// Member identifier reported in response headers.
    pub member_id: u64,

    /// Consensus term reported as `raft_term`.
    pub raft_term: u64,

    /// TTL stored for lease grants that don't request a positive TTL.
    pub default_lease_ttl_s: i64,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            cluster_id: 1,
            member_id: 1,
            raft_term: 2,
            default_lease_ttl_s: DEFAULT_TTL_S,
        }
    }
}

impl NodeConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.default_lease_ttl_s <= 0 {
            anyhow::bail!(
                "default_lease_ttl_s must be positive, got {}",
                self.default_lease_ttl_s
            );
        }
        if self.raft_term == 0 {
            anyhow::bail!("raft_term must be nonzero");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(NodeConfig::default().validate().is_ok());
    }

    #[test]
    fn nonpositive_lease_ttl_rejected() {
        let config = NodeConfig {
            default_lease_ttl_s: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_term_rejected() {
        let config = NodeConfig {
            raft_term: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
