//! A flat node list plus a relationship list, e.g. from `RETURN collect(n), collect(r)`.
//!
//! The node list is one flat pass, so repeats there are not counted. Relationship endpoints
//! are then registered or bumped, each crediting itself; nodes only reachable through a
//! relationship are added on the way.
use crate::error::DrawResult;
use crate::extract::LabelPolicy;
use crate::flatten::Flattener;
use crate::model::{GraphNode, GraphRelationship, LabelMap, VisGraph};

pub fn flatten_lists<N, R>(
    nodes: &[N],
    relationships: &[R],
    label_map: &LabelMap,
    policy: LabelPolicy,
) -> DrawResult<VisGraph>
where
    N: GraphNode,
    R: GraphRelationship,
{
    let mut flattener = Flattener::new(label_map, policy);

    for node in nodes {
        flattener.register(node)?;
    }

    for rel in relationships {
        let start = rel.start_node();
        let end = rel.end_node();
        flattener.register_or_bump(start, start.identity())?;
        flattener.register_or_bump(end, end.identity())?;
        flattener.register_edge(rel)?;
    }

    tracing::debug!(
        "Processed {} nodes and {} relationships",
        nodes.len(),
        relationships.len()
    );
    Ok(flattener.finish())
}
