//! Node identifiers and score mappings for the causal graph.
//!
//! The simulator evaluates a fixed set of ten economic quantities: three
//! input-echo nodes (interest, oil, exchange) and seven derived nodes. This
//! module defines the [`NodeId`] enum with its stable string keys and the
//! [`NodeScores`] mapping produced by one evaluation pass.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the ten nodes in the causal graph.
///
/// String keys are stable and shared with serialized score mappings and the
/// presentation layout, so renderers can address nodes uniformly.
///
/// # Examples
///
/// ```
/// use macroflow::node::NodeId;
///
/// assert_eq!(NodeId::RealEstate.key(), "realEstate");
/// assert_eq!(NodeId::ALL.len(), 10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeId {
    Interest,
    Oil,
    Exchange,
    Price,
    Export,
    Consumption,
    Investment,
    Stock,
    Bond,
    RealEstate,
}

impl NodeId {
    /// All nodes in presentation order.
    pub const ALL: [NodeId; 10] = [
        NodeId::Interest,
        NodeId::Oil,
        NodeId::Exchange,
        NodeId::Price,
        NodeId::Export,
        NodeId::Consumption,
        NodeId::Investment,
        NodeId::Stock,
        NodeId::Bond,
        NodeId::RealEstate,
    ];

    /// Stable string key for this node.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            NodeId::Interest => "interest",
            NodeId::Oil => "oil",
            NodeId::Exchange => "exchange",
            NodeId::Price => "price",
            NodeId::Export => "export",
            NodeId::Consumption => "consumption",
            NodeId::Investment => "investment",
            NodeId::Stock => "stock",
            NodeId::Bond => "bond",
            NodeId::RealEstate => "realEstate",
        }
    }

    /// Parse a stable string key back into a `NodeId`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        NodeId::ALL.into_iter().find(|id| id.key() == key)
    }

    /// Returns `true` for the three input-echo nodes whose score is a
    /// normalized input (or, for interest, the feedback-adjusted input).
    #[must_use]
    pub fn is_input_echo(&self) -> bool {
        matches!(self, NodeId::Interest | NodeId::Oil | NodeId::Exchange)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// The complete score mapping for one evaluation.
///
/// Scores are nominally in `[-1, 1]` but are never clamped: extreme inputs
/// produce scores outside the nominal range, and consumers interpret magnitude
/// qualitatively via thresholds rather than assuming strict bounds.
///
/// A `NodeScores` value is an immutable snapshot: the engine builds it in one
/// pass and nothing mutates it afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeScores {
    pub interest: f64,
    pub oil: f64,
    pub exchange: f64,
    pub price: f64,
    pub export: f64,
    pub consumption: f64,
    pub investment: f64,
    pub stock: f64,
    pub bond: f64,
    pub real_estate: f64,
}

impl NodeScores {
    /// Read one node's score.
    #[must_use]
    pub fn get(&self, id: NodeId) -> f64 {
        match id {
            NodeId::Interest => self.interest,
            NodeId::Oil => self.oil,
            NodeId::Exchange => self.exchange,
            NodeId::Price => self.price,
            NodeId::Export => self.export,
            NodeId::Consumption => self.consumption,
            NodeId::Investment => self.investment,
            NodeId::Stock => self.stock,
            NodeId::Bond => self.bond,
            NodeId::RealEstate => self.real_estate,
        }
    }

    /// Iterate over `(NodeId, score)` pairs in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        NodeId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }

    /// Export as a string-keyed map for the presentation boundary.
    #[must_use]
    pub fn to_map(&self) -> FxHashMap<&'static str, f64> {
        self.iter().map(|(id, score)| (id.key(), score)).collect()
    }

    /// Returns `true` when every score is exactly zero (the equilibrium
    /// fixpoint produced by the all-zero input vector).
    #[must_use]
    pub fn is_equilibrium(&self) -> bool {
        self.iter().all(|(_, score)| score == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for id in NodeId::ALL {
            assert_eq!(NodeId::from_key(id.key()), Some(id));
        }
        assert_eq!(NodeId::from_key("gdp"), None);
    }

    #[test]
    fn map_export_covers_all_nodes() {
        let scores = NodeScores {
            stock: -0.7,
            ..NodeScores::default()
        };
        let map = scores.to_map();
        assert_eq!(map.len(), 10);
        assert_eq!(map["stock"], -0.7);
        assert_eq!(map["realEstate"], 0.0);
    }

    #[test]
    fn default_is_equilibrium() {
        assert!(NodeScores::default().is_equilibrium());
        let perturbed = NodeScores {
            bond: 0.01,
            ..NodeScores::default()
        };
        assert!(!perturbed.is_equilibrium());
    }
}
