//! Flattening of query results into a deduplicated [VisGraph].
//!
//! Three input shapes are supported, each in its own module, and all of them funnel into the
//! same [Flattener]:
//!
//! | Shape         | Input                                   | Entry point                   |
//! |---------------|-----------------------------------------|-------------------------------|
//! | Rows          | `(m, r?, n)` triples                    | [rows::flatten_rows]          |
//! | Lists         | separate node and relationship lists    | [lists::flatten_lists]        |
//! | Relationships | relationships, optionally grouped once  | [relationships::flatten_relationships] |
//!
//! Nodes and edges are keyed by identity. The first encounter derives the display record;
//! later encounters only bump a node's `value`. Which node gets bumped differs per shape, see
//! the module docs of each strategy.
pub mod lists;
pub mod relationships;
pub mod rows;

use crate::error::DrawResult;
use crate::extract::{LabelPolicy, edge_vis_info, node_vis_info};
use crate::model::{GraphNode, GraphRelationship, Identity, LabelMap, VisGraph};

/// The shared dedup core. Lives for exactly one draw call.
pub struct Flattener<'a> {
    label_map: &'a LabelMap,
    policy: LabelPolicy,
    graph: VisGraph,
}

impl<'a> Flattener<'a> {
    pub fn new(label_map: &'a LabelMap, policy: LabelPolicy) -> Self {
        Self {
            label_map,
            policy,
            graph: VisGraph::default(),
        }
    }

    /// Insert `node` with a value of 0 unless its identity is already present.
    ///
    /// Returns whether the node was newly inserted.
    pub fn register<N: GraphNode>(&mut self, node: &N) -> DrawResult<bool> {
        if self.graph.nodes.contains_key(&node.identity()) {
            return Ok(false);
        }
        let vis = node_vis_info(node, self.label_map, self.policy)?;
        self.graph.nodes.insert(vis.id, vis);
        Ok(true)
    }

    /// Insert `node` if unseen, otherwise bump the value of the node identified by `bump`.
    ///
    /// `bump` is not necessarily `node`: the row and relationship-only strategies credit the
    /// start node when the end node is a repeat.
    pub fn register_or_bump<N: GraphNode>(&mut self, node: &N, bump: Identity) -> DrawResult<()> {
        if !self.register(node)? {
            self.bump(bump);
        }
        Ok(())
    }

    fn bump(&mut self, id: Identity) {
        if let Some(node) = self.graph.nodes.get_mut(&id) {
            node.value += 1;
        }
    }

    pub fn contains_edge(&self, id: Identity) -> bool {
        self.graph.edges.contains_key(&id)
    }

    /// Insert the edge for `rel` unless its identity is already present.
    ///
    /// Both endpoints must have been registered first.
    pub fn register_edge<R: GraphRelationship>(&mut self, rel: &R) -> DrawResult<bool> {
        if self.contains_edge(rel.identity()) {
            tracing::trace!("Skipping duplicate relationship {}", rel.identity());
            return Ok(false);
        }
        let vis = edge_vis_info(rel, &self.graph.nodes, self.label_map, self.policy)?;
        self.graph.edges.insert(rel.identity(), vis);
        Ok(true)
    }

    pub fn finish(self) -> VisGraph {
        tracing::debug!(
            "Flattened into {} nodes and {} edges",
            self.graph.nodes.len(),
            self.graph.edges.len()
        );
        self.graph
    }
}
