use indexmap::IndexMap;

use crate::error::{DrawError, DrawResult};
use crate::model::{GraphNode, GraphRelationship, Identity, LabelMap, VisEdge, VisNode};

/// What to do with a node that has no labels or a relationship that has no type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LabelPolicy {
    /// Fail the draw call with [DrawError::MissingLabel] / [DrawError::MissingType].
    #[default]
    Strict,
    /// Use the empty string as group/type and carry on.
    Lenient,
}

impl LabelPolicy {
    fn node_label<N: GraphNode>(self, node: &N) -> DrawResult<&str> {
        match (node.labels().first(), self) {
            (Some(label), _) => Ok(label.as_str()),
            (None, Self::Lenient) => Ok(""),
            (None, Self::Strict) => Err(DrawError::MissingLabel {
                node: node.identity(),
            }),
        }
    }

    fn rel_type<R: GraphRelationship>(self, rel: &R) -> DrawResult<&str> {
        match (rel.rel_type(), self) {
            (Some(t), _) => Ok(t),
            (None, Self::Lenient) => Ok(""),
            (None, Self::Strict) => Err(DrawError::MissingType {
                relationship: rel.identity(),
            }),
        }
    }
}

/// Derive the display record for a node. `value` always starts at 0.
pub fn node_vis_info<N: GraphNode>(
    node: &N,
    label_map: &LabelMap,
    policy: LabelPolicy,
) -> DrawResult<VisNode> {
    let group = policy.node_label(node)?;
    let display = label_map
        .resolve(group, |key| node.property(key))
        .unwrap_or_else(|| group.to_string());

    Ok(VisNode {
        id: node.identity(),
        group: group.to_string(),
        value: 0,
        label: display.clone(),
        title: display,
    })
}

/// Derive the display record for a relationship.
///
/// Both endpoints must already be in `nodes`: the title is built from their resolved labels.
pub fn edge_vis_info<R: GraphRelationship>(
    rel: &R,
    nodes: &IndexMap<Identity, VisNode>,
    label_map: &LabelMap,
    policy: LabelPolicy,
) -> DrawResult<VisEdge> {
    let rel_type = policy.rel_type(rel)?;
    let from = rel.start_node().identity();
    let to = rel.end_node().identity();

    let endpoint_label = |node: Identity| {
        nodes
            .get(&node)
            .map(|n| n.label.as_str())
            .ok_or(DrawError::UnregisteredEndpoint {
                relationship: rel.identity(),
                node,
            })
    };
    let title = format!(
        "{} -[{rel_type}]-> {}",
        endpoint_label(from)?,
        endpoint_label(to)?
    );

    Ok(VisEdge {
        from,
        to,
        label: label_map.resolve(rel_type, |key| rel.property(key)),
        title,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::model::{Node, Relationship};

    fn people() -> LabelMap {
        [("Person", "name"), ("KNOWS", "since")]
            .into_iter()
            .collect()
    }

    #[test]
    fn mapped_label_uses_property() {
        let alice = Node::new(1, "Person").with_property("name", "Alice");
        let vis = node_vis_info(&alice, &people(), LabelPolicy::Strict).unwrap();
        assert_eq!(
            vis,
            VisNode {
                id: 1,
                group: "Person".into(),
                value: 0,
                label: "Alice".into(),
                title: "Alice".into(),
            }
        );
    }

    #[test]
    fn unmapped_label_falls_back_to_label() {
        let acme = Node::new(2, "Company").with_property("name", "Acme");
        let vis = node_vis_info(&acme, &people(), LabelPolicy::Strict).unwrap();
        assert_eq!(vis.group, "Company");
        assert_eq!(vis.label, "Company");
        assert_eq!(vis.title, "Company");
    }

    #[test]
    fn mapped_label_without_property_falls_back() {
        let anon = Node::new(3, "Person");
        let vis = node_vis_info(&anon, &people(), LabelPolicy::Strict).unwrap();
        assert_eq!(vis.label, "Person");
    }

    #[test]
    fn zero_and_false_values_are_shown() {
        // Only null and empty strings fall back to the label
        for (value, shown) in [
            (json!(0), "0"),
            (json!(false), "false"),
            (json!([]), "[]"),
            (json!({}), "{}"),
        ] {
            let node = Node::new(6, "Person").with_property("name", value);
            let vis = node_vis_info(&node, &people(), LabelPolicy::Strict).unwrap();
            assert_eq!(vis.label, shown);
            assert_eq!(vis.title, shown);
        }

        let a = Node::new(1, "A");
        let b = Node::new(2, "B");
        let rel = Relationship::new(10, "KNOWS", a.clone(), b.clone()).with_property("since", 0);
        let nodes = registered(&[&a, &b]);
        let vis = edge_vis_info(&rel, &nodes, &people(), LabelPolicy::Strict).unwrap();
        assert_eq!(vis.label.as_deref(), Some("0"));
    }

    #[test]
    fn only_first_label_counts() {
        let node = Node {
            id: 4,
            labels: vec!["Employee".into(), "Person".into()],
            ..Default::default()
        }
        .with_property("name", "Bob");
        let vis = node_vis_info(&node, &people(), LabelPolicy::Strict).unwrap();
        assert_eq!(vis.group, "Employee");
        assert_eq!(vis.label, "Employee");
    }

    #[test]
    fn missing_label_strict_fails() {
        let node = Node {
            id: 5,
            ..Default::default()
        };
        let err = node_vis_info(&node, &people(), LabelPolicy::Strict).unwrap_err();
        assert!(matches!(err, DrawError::MissingLabel { node: 5 }));
    }

    #[test]
    fn missing_label_lenient_uses_empty_group() {
        let node = Node {
            id: 5,
            ..Default::default()
        };
        let vis = node_vis_info(&node, &people(), LabelPolicy::Lenient).unwrap();
        assert_eq!(vis.group, "");
        assert_eq!(vis.label, "");
        assert_eq!(vis.title, "");
    }

    fn registered(nodes: &[&Node]) -> IndexMap<Identity, VisNode> {
        nodes
            .iter()
            .map(|n| {
                (
                    n.id,
                    node_vis_info(*n, &people(), LabelPolicy::Strict).unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn edge_title_uses_resolved_node_labels() {
        let alice = Node::new(1, "Person").with_property("name", "Alice");
        let acme = Node::new(2, "Company");
        let rel = Relationship::new(10, "WORKS_AT", alice.clone(), acme.clone());
        let nodes = registered(&[&alice, &acme]);

        let vis = edge_vis_info(&rel, &nodes, &people(), LabelPolicy::Strict).unwrap();
        assert_eq!(
            vis,
            VisEdge {
                from: 1,
                to: 2,
                label: None,
                title: "Alice -[WORKS_AT]-> Company".into(),
            }
        );
    }

    #[test]
    fn edge_label_from_property() {
        let alice = Node::new(1, "Person").with_property("name", "Alice");
        let bob = Node::new(2, "Person").with_property("name", "Bob");
        let rel = Relationship::new(10, "KNOWS", alice.clone(), bob.clone())
            .with_property("since", 2004);
        let nodes = registered(&[&alice, &bob]);

        let vis = edge_vis_info(&rel, &nodes, &people(), LabelPolicy::Strict).unwrap();
        assert_eq!(vis.label.as_deref(), Some("2004"));
        assert_eq!(vis.title, "Alice -[KNOWS]-> Bob");
    }

    #[test]
    fn edge_before_endpoints_fails() {
        let alice = Node::new(1, "Person");
        let bob = Node::new(2, "Person");
        let rel = Relationship::new(10, "KNOWS", alice.clone(), bob);
        let nodes = registered(&[&alice]);

        let err = edge_vis_info(&rel, &nodes, &people(), LabelPolicy::Strict).unwrap_err();
        assert!(matches!(
            err,
            DrawError::UnregisteredEndpoint {
                relationship: 10,
                node: 2
            }
        ));
    }

    #[test]
    fn missing_type() {
        let a = Node::new(1, "A");
        let b = Node::new(2, "B");
        let mut rel = Relationship::new(10, "R", a.clone(), b.clone());
        rel.rel_type = None;
        let nodes = registered(&[&a, &b]);

        let err = edge_vis_info(&rel, &nodes, &people(), LabelPolicy::Strict).unwrap_err();
        assert!(matches!(err, DrawError::MissingType { relationship: 10 }));

        let vis = edge_vis_info(&rel, &nodes, &people(), LabelPolicy::Lenient).unwrap();
        assert_eq!(vis.title, "A -[]-> B");
    }
}
