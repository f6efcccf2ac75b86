use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Database-assigned key of a node or relationship. Stable for one draw call.
pub type Identity = i64;

/// The node capabilities the flattener needs from a graph database driver.
pub trait GraphNode {
    fn identity(&self) -> Identity;
    /// Labels in driver order. The first one names the node's group.
    fn labels(&self) -> &[String];
    fn property(&self, key: &str) -> Option<&Value>;
}

/// The relationship capabilities the flattener needs from a graph database driver.
pub trait GraphRelationship {
    type Node: GraphNode;

    fn identity(&self) -> Identity;
    fn rel_type(&self) -> Option<&str>;
    fn start_node(&self) -> &Self::Node;
    fn end_node(&self) -> &Self::Node;
    fn property(&self, key: &str) -> Option<&Value>;
}

/// A node as exported by a query, e.g. `{"id": 1, "labels": ["Person"], "properties": {...}}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: Identity,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub properties: IndexMap<String, Value>,
}

impl Node {
    pub fn new(id: Identity, label: impl Into<String>) -> Self {
        Self {
            id,
            labels: vec![label.into()],
            properties: IndexMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

impl GraphNode for Node {
    fn identity(&self) -> Identity {
        self.id
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

/// A relationship carrying both of its endpoint nodes, the way drivers hand them out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub id: Identity,
    #[serde(rename = "type", default)]
    pub rel_type: Option<String>,
    pub start: Node,
    pub end: Node,
    #[serde(default)]
    pub properties: IndexMap<String, Value>,
}

impl Relationship {
    pub fn new(id: Identity, rel_type: impl Into<String>, start: Node, end: Node) -> Self {
        Self {
            id,
            rel_type: Some(rel_type.into()),
            start,
            end,
            properties: IndexMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

impl GraphRelationship for Relationship {
    type Node = Node;

    fn identity(&self) -> Identity {
        self.id
    }

    fn rel_type(&self) -> Option<&str> {
        self.rel_type.as_deref()
    }

    fn start_node(&self) -> &Node {
        &self.start
    }

    fn end_node(&self) -> &Node {
        &self.end
    }

    fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

/// Maps a node label or relationship type to the property used as its display name.
///
/// Works for nodes and edges alike: `{"Person": "name", "KNOWS": "since"}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelMap(IndexMap<String, String>);

impl LabelMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, key: impl Into<String>) {
        self.0.insert(label.into(), key.into());
    }

    /// The property key for `label`, or `""` if the label is unmapped.
    pub fn key_for(&self, label: &str) -> &str {
        self.0.get(label).map(String::as_str).unwrap_or("")
    }

    /// Resolve the display name for an entity tagged `label`.
    ///
    /// Returns `None` when the label is unmapped, the property is missing, or it displays as
    /// the empty string; callers then fall back to the label itself.
    pub fn resolve<'a>(
        &self,
        label: &str,
        property: impl FnOnce(&str) -> Option<&'a Value>,
    ) -> Option<String> {
        property(self.key_for(label))
            .map(display_value)
            .filter(|s| !s.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<L: Into<String>, K: Into<String>> FromIterator<(L, K)> for LabelMap {
    fn from_iter<I: IntoIterator<Item = (L, K)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(l, k)| (l.into(), k.into()))
                .collect(),
        )
    }
}

/// One `LABEL=KEY` entry, as given on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelMapping {
    pub label: String,
    pub key: String,
}

impl FromStr for LabelMapping {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (label, key) = s
            .split_once('=')
            .ok_or_else(|| format!("expected LABEL=KEY, got {s:?}"))?;
        let label = label.trim();
        let key = key.trim();
        if label.is_empty() || key.is_empty() {
            return Err(format!("expected LABEL=KEY, got {s:?}"));
        }
        Ok(Self {
            label: label.to_string(),
            key: key.to_string(),
        })
    }
}

impl Extend<LabelMapping> for LabelMap {
    fn extend<I: IntoIterator<Item = LabelMapping>>(&mut self, iter: I) {
        for m in iter {
            self.insert(m.label, m.key);
        }
    }
}

/// Text shown for a property value: strings verbatim, `null` as empty, everything else as JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A node in the shape the vis.js `DataSet` expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisNode {
    pub id: Identity,
    pub group: String,
    /// Usage counter, bumped on re-encounters. Drives size scaling in the large preset.
    pub value: u32,
    /// Printed text.
    pub label: String,
    /// Mouseover text.
    pub title: String,
}

/// An edge in the shape the vis.js `DataSet` expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisEdge {
    pub from: Identity,
    pub to: Identity,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub label: Option<String>,
    /// `"<from label> -[<type>]-> <to label>"`
    pub title: String,
}

/// Deduplicated nodes and edges in first-seen order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisGraph {
    pub nodes: IndexMap<Identity, VisNode>,
    pub edges: IndexMap<Identity, VisEdge>,
}

impl VisGraph {
    pub fn node_list(&self) -> Vec<&VisNode> {
        self.nodes.values().collect()
    }

    pub fn edge_list(&self) -> Vec<&VisEdge> {
        self.edges.values().collect()
    }
}
