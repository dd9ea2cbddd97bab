//! Static presentation layout for the causal graph.
//!
//! Renderers draw the ten nodes at fixed coordinates (0–100 SVG scale) joined
//! by a static directed edge list. The edges visually mirror the dependency
//! structure the engine evaluates, with one exception: the price → interest
//! edge depicts the central-bank response and is cosmetic only. The engine
//! realizes it as a one-way contribution inside a single evaluation pass, so
//! the drawn cycle never corresponds to an iterative solve.
//!
//! Nothing in the engine reads this module.

use crate::node::NodeId;
use serde::{Deserialize, Serialize};

/// Visual grouping of a node within the rendered graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    /// Driver nodes on the top row.
    Input,
    /// Flow nodes in the middle rows.
    Intermediate,
    /// Market nodes on the bottom row.
    Output,
}

/// Fixed position and grouping for one rendered node.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodePlacement {
    pub id: NodeId,
    pub role: NodeRole,
    /// Horizontal position, 0–100.
    pub x: f64,
    /// Vertical position, 0–100.
    pub y: f64,
}

/// A directed rendering edge between two nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutEdge {
    pub from: NodeId,
    pub to: NodeId,
}

/// Node placements, top row to bottom row.
pub const PLACEMENTS: [NodePlacement; 10] = [
    NodePlacement { id: NodeId::Interest, role: NodeRole::Input, x: 20.0, y: 15.0 },
    NodePlacement { id: NodeId::Oil, role: NodeRole::Input, x: 50.0, y: 10.0 },
    NodePlacement { id: NodeId::Exchange, role: NodeRole::Input, x: 80.0, y: 15.0 },
    NodePlacement { id: NodeId::Price, role: NodeRole::Intermediate, x: 35.0, y: 40.0 },
    NodePlacement { id: NodeId::Export, role: NodeRole::Intermediate, x: 80.0, y: 40.0 },
    NodePlacement { id: NodeId::Consumption, role: NodeRole::Intermediate, x: 20.0, y: 60.0 },
    NodePlacement { id: NodeId::Investment, role: NodeRole::Intermediate, x: 60.0, y: 60.0 },
    NodePlacement { id: NodeId::RealEstate, role: NodeRole::Output, x: 20.0, y: 85.0 },
    NodePlacement { id: NodeId::Bond, role: NodeRole::Output, x: 50.0, y: 85.0 },
    NodePlacement { id: NodeId::Stock, role: NodeRole::Output, x: 80.0, y: 85.0 },
];

/// Directed rendering edges. Includes the cosmetic price → interest feedback
/// edge; see the module docs.
pub const EDGES: [LayoutEdge; 15] = [
    LayoutEdge { from: NodeId::Interest, to: NodeId::Consumption },
    LayoutEdge { from: NodeId::Interest, to: NodeId::Investment },
    LayoutEdge { from: NodeId::Interest, to: NodeId::RealEstate },
    LayoutEdge { from: NodeId::Interest, to: NodeId::Bond },
    LayoutEdge { from: NodeId::Oil, to: NodeId::Price },
    LayoutEdge { from: NodeId::Oil, to: NodeId::Stock },
    LayoutEdge { from: NodeId::Exchange, to: NodeId::Export },
    LayoutEdge { from: NodeId::Exchange, to: NodeId::Price },
    LayoutEdge { from: NodeId::Price, to: NodeId::Consumption },
    LayoutEdge { from: NodeId::Price, to: NodeId::Interest },
    LayoutEdge { from: NodeId::Consumption, to: NodeId::Stock },
    LayoutEdge { from: NodeId::Consumption, to: NodeId::Investment },
    LayoutEdge { from: NodeId::Export, to: NodeId::Stock },
    LayoutEdge { from: NodeId::Export, to: NodeId::Investment },
    LayoutEdge { from: NodeId::Investment, to: NodeId::Stock },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_node_is_placed_exactly_once() {
        for id in NodeId::ALL {
            let count = PLACEMENTS.iter().filter(|p| p.id == id).count();
            assert_eq!(count, 1, "node {id} placed {count} times");
        }
    }

    #[test]
    fn coordinates_fit_the_svg_scale() {
        for p in PLACEMENTS {
            assert!((0.0..=100.0).contains(&p.x));
            assert!((0.0..=100.0).contains(&p.y));
        }
    }

    #[test]
    fn only_feedback_edge_points_into_an_input_node() {
        let into_inputs: Vec<_> = EDGES
            .iter()
            .filter(|e| {
                PLACEMENTS
                    .iter()
                    .any(|p| p.id == e.to && p.role == NodeRole::Input)
            })
            .collect();
        assert_eq!(into_inputs.len(), 1);
        assert_eq!(into_inputs[0].from, NodeId::Price);
        assert_eq!(into_inputs[0].to, NodeId::Interest);
    }
}
