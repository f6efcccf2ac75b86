//! Relationship-only input, as produced by path queries and table exports.
//!
//! Each element is either a bare relationship or a tuple whose members are relationships or
//! lists of relationships. Exactly one level of grouping is unwrapped; anything deeper does
//! not fit [RelationshipItem] and is rejected when the input is decoded.
//!
//! A relationship that was already seen is skipped entirely. Otherwise its start node is
//! registered or bumped, then its end node is registered or, if it is a repeat, the start
//! node is bumped again, and finally the edge is registered.
use serde::Deserialize;

use crate::error::DrawResult;
use crate::extract::LabelPolicy;
use crate::flatten::Flattener;
use crate::model::{GraphNode, GraphRelationship, LabelMap, VisGraph};

/// One element of relationship-only input.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(
    untagged,
    expecting = "a relationship, or an array of relationships and relationship arrays \
                 nested at most one level deep"
)]
pub enum RelationshipItem<R> {
    Single(R),
    Tuple(Vec<TupleMember<R>>),
}

/// One member of a [RelationshipItem::Tuple].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TupleMember<R> {
    Single(R),
    List(Vec<R>),
}

impl<R> RelationshipItem<R> {
    /// The relationships of this element in order, with the grouping removed.
    pub fn relationships(&self) -> impl Iterator<Item = &R> {
        let (single, members) = match self {
            Self::Single(rel) => (Some(rel), &[][..]),
            Self::Tuple(members) => (None, members.as_slice()),
        };
        single
            .into_iter()
            .chain(members.iter().flat_map(TupleMember::relationships))
    }
}

impl<R> TupleMember<R> {
    pub fn relationships(&self) -> &[R] {
        match self {
            Self::Single(rel) => std::slice::from_ref(rel),
            Self::List(rels) => rels,
        }
    }
}

impl<R> From<R> for RelationshipItem<R> {
    fn from(rel: R) -> Self {
        Self::Single(rel)
    }
}

pub fn flatten_relationships<R>(
    items: &[RelationshipItem<R>],
    label_map: &LabelMap,
    policy: LabelPolicy,
) -> DrawResult<VisGraph>
where
    R: GraphRelationship,
{
    let mut flattener = Flattener::new(label_map, policy);
    let mut count = 0;

    for rel in items.iter().flat_map(RelationshipItem::relationships) {
        count += 1;
        if flattener.contains_edge(rel.identity()) {
            tracing::trace!("Skipping duplicate relationship {}", rel.identity());
            continue;
        }
        let start = rel.start_node();
        flattener.register_or_bump(start, start.identity())?;
        flattener.register_or_bump(rel.end_node(), start.identity())?;
        flattener.register_edge(rel)?;
    }

    tracing::debug!("Processed {count} relationships from {} items", items.len());
    Ok(flattener.finish())
}
