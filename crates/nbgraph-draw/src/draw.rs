//! Draw entry points: flatten one of the three input shapes and render it.
use serde_json::Value;

use crate::error::DrawResult;
use crate::extract::LabelPolicy;
use crate::flatten::lists::flatten_lists;
use crate::flatten::relationships::{RelationshipItem, flatten_relationships};
use crate::flatten::rows::{Row, flatten_rows};
use crate::model::{GraphNode, GraphRelationship, LabelMap, VisGraph};
use crate::options::{Preset, with_physics};
use crate::render::{Html, Renderer};

/// Everything a draw call needs besides the data itself.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawConfig {
    pub label_map: LabelMap,
    /// Forced into `physics.enabled`. With physics off graphs usually come out as one big lump.
    pub physics: bool,
    /// Any options document vis.js accepts, passed through as is. `None` selects [Preset::Small].
    pub options: Option<Value>,
    pub policy: LabelPolicy,
    pub renderer: Renderer,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            label_map: LabelMap::default(),
            physics: true,
            options: None,
            policy: LabelPolicy::default(),
            renderer: Renderer::default(),
        }
    }
}

impl DrawConfig {
    pub fn new(label_map: LabelMap) -> Self {
        Self {
            label_map,
            ..Default::default()
        }
    }

    /// The options for this call. Never the caller's value itself, so it is never mutated.
    pub fn resolved_options(&self) -> DrawResult<Value> {
        let options = match &self.options {
            Some(options) => with_physics(options, self.physics),
            None => with_physics(&Preset::Small.options().to_value()?, self.physics),
        };
        Ok(options)
    }

    /// Render an already flattened graph.
    pub fn render(&self, graph: &VisGraph) -> DrawResult<Html> {
        self.renderer.render(graph, &self.resolved_options()?)
    }
}

/// Draw from `(m, r?, n)` rows. Duplicate relationships are elided.
pub fn draw_rows<N, R>(rows: &[Row<N, R>], config: &DrawConfig) -> DrawResult<Html>
where
    N: GraphNode,
    R: GraphRelationship,
{
    let graph = flatten_rows(rows, &config.label_map, config.policy)?;
    config.render(&graph)
}

/// Draw from a node list and a relationship list.
pub fn draw_lists<N, R>(nodes: &[N], relationships: &[R], config: &DrawConfig) -> DrawResult<Html>
where
    N: GraphNode,
    R: GraphRelationship,
{
    let graph = flatten_lists(nodes, relationships, &config.label_map, config.policy)?;
    config.render(&graph)
}

/// Draw from relationships alone, bare or grouped one level deep.
pub fn draw_relationships<R>(
    items: &[RelationshipItem<R>],
    config: &DrawConfig,
) -> DrawResult<Html>
where
    R: GraphRelationship,
{
    let graph = flatten_relationships(items, &config.label_map, config.policy)?;
    config.render(&graph)
}
