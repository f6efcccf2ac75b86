//! Rows of `(m, r, n)` triples, as returned by `MATCH (m)-[r]-(n) RETURN m, r, n`.
//!
//! For each row `m` is registered or bumped, then `n` is registered or, if it is a repeat,
//! `m` is bumped once more. The relationship is optional (e.g. from an `OPTIONAL MATCH`);
//! rows without one contribute only their nodes. Nodes are counted even when the row's
//! relationship is a duplicate.
use crate::error::DrawResult;
use crate::extract::LabelPolicy;
use crate::flatten::Flattener;
use crate::model::{GraphNode, GraphRelationship, LabelMap, VisGraph};

/// One query result row. The relationship's direction is taken from the relationship itself,
/// not from the position of `m` and `n`.
pub type Row<N, R> = (N, Option<R>, N);

pub fn flatten_rows<N, R>(
    rows: &[Row<N, R>],
    label_map: &LabelMap,
    policy: LabelPolicy,
) -> DrawResult<VisGraph>
where
    N: GraphNode,
    R: GraphRelationship,
{
    let mut flattener = Flattener::new(label_map, policy);

    for (m, rel, n) in rows {
        flattener.register_or_bump(m, m.identity())?;
        flattener.register_or_bump(n, m.identity())?;

        if let Some(rel) = rel {
            // The relationship may point at nodes outside this row's m/n pair
            flattener.register(rel.start_node())?;
            flattener.register(rel.end_node())?;
            flattener.register_edge(rel)?;
        }
    }

    tracing::debug!("Processed {} rows", rows.len());
    Ok(flattener.finish())
}
