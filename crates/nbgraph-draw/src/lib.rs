pub mod draw;
pub mod error;
pub mod extract;
pub mod flatten;
pub mod input;
pub mod model;
pub mod options;
pub mod render;

pub use draw::{DrawConfig, draw_lists, draw_relationships, draw_rows};
pub use error::{DrawError, DrawResult};
pub use extract::LabelPolicy;
pub use flatten::relationships::{RelationshipItem, TupleMember};
pub use flatten::rows::Row;
pub use input::{InputFormat, QueryResult};
pub use model::{
    GraphNode, GraphRelationship, Identity, LabelMap, LabelMapping, Node, Relationship, VisEdge,
    VisGraph, VisNode,
};
pub use options::{Preset, VisOptions, with_physics};
pub use render::{Html, Loader, Renderer};

#[cfg(test)]
#[ctor::ctor]
fn setup_test_logging() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .with_ansi(true)
        .init();
}
