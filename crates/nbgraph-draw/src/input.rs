//! JSON query-result documents, as consumed by `nbdraw`.
use std::fmt;

use clap::ValueEnum;
use eyre::WrapErr;
use serde::Deserialize;
use serde_json::Value;

use crate::draw::{DrawConfig, draw_lists, draw_relationships, draw_rows};
use crate::error::DrawResult;
use crate::flatten::relationships::RelationshipItem;
use crate::flatten::rows::Row;
use crate::model::{Node, Relationship};
use crate::render::Html;

/// Variant order defines content-detection priority (most specific first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// `{"nodes": [...], "relationships": [...]}`
    Lists,
    /// `[[m, r, n], ...]` where `r` may be `null`
    Rows,
    /// `[r, [r, [r, r]], ...]`
    Relationships,
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_possible_value().unwrap().get_name())
    }
}

/// Detect the input format from the shape of the document.
///
/// Returns `None` if no format matches. Variants are tried in enum declaration
/// order (most specific first).
pub fn detect(input: &Value) -> Option<InputFormat> {
    InputFormat::value_variants()
        .iter()
        .find(|fmt| fmt.matches_content(input))
        .copied()
}

impl InputFormat {
    /// The match is exhaustive so adding a new variant without a detection rule is a compile
    /// error.
    fn matches_content(&self, input: &Value) -> bool {
        match self {
            Self::Lists => is_lists(input),
            Self::Rows => is_rows(input),
            Self::Relationships => input.is_array(),
        }
    }
}

/// An object with a `nodes` or `relationships` key.
fn is_lists(input: &Value) -> bool {
    input
        .as_object()
        .is_some_and(|o| o.contains_key("nodes") || o.contains_key("relationships"))
}

/// The first element is a 3-array that starts with a node (an object without a `start` key).
fn is_rows(input: &Value) -> bool {
    let Some(first) = input.as_array().and_then(|a| a.first()) else {
        return false;
    };
    match first.as_array().map(Vec::as_slice) {
        Some([m, _, _]) => m.as_object().is_some_and(|o| !o.contains_key("start")),
        _ => false,
    }
}

/// Resolve input format using the explicit flag or content detection.
pub fn resolve_input_format(flag: Option<InputFormat>, input: &Value) -> eyre::Result<InputFormat> {
    if let Some(f) = flag {
        return Ok(f);
    }
    match detect(input) {
        Some(f) => {
            tracing::info!("Detected input format: {f} from content");
            Ok(f)
        }
        None => eyre::bail!("cannot detect input format; use --from"),
    }
}

#[derive(Debug, Deserialize)]
struct ListsDocument {
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default)]
    relationships: Vec<Relationship>,
}

/// A decoded query result in one of the three supported shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryResult {
    Rows(Vec<Row<Node, Relationship>>),
    Lists {
        nodes: Vec<Node>,
        relationships: Vec<Relationship>,
    },
    Relationships(Vec<RelationshipItem<Relationship>>),
}

impl QueryResult {
    pub fn format(&self) -> InputFormat {
        match self {
            Self::Rows(_) => InputFormat::Rows,
            Self::Lists { .. } => InputFormat::Lists,
            Self::Relationships(_) => InputFormat::Relationships,
        }
    }

    pub fn draw(&self, config: &DrawConfig) -> DrawResult<Html> {
        match self {
            Self::Rows(rows) => draw_rows(rows, config),
            Self::Lists {
                nodes,
                relationships,
            } => draw_lists(nodes, relationships, config),
            Self::Relationships(items) => draw_relationships(items, config),
        }
    }
}

/// Decode `input` as the given format.
///
/// Shapes that don't fit the format (including relationships nested more than one level deep)
/// are rejected here rather than partially drawn.
pub fn parse(format: InputFormat, input: Value) -> eyre::Result<QueryResult> {
    let result = match format {
        InputFormat::Rows => serde_json::from_value(input).map(QueryResult::Rows),
        InputFormat::Lists => {
            serde_json::from_value(input).map(|doc: ListsDocument| QueryResult::Lists {
                nodes: doc.nodes,
                relationships: doc.relationships,
            })
        }
        InputFormat::Relationships => {
            serde_json::from_value(input).map(QueryResult::Relationships)
        }
    };
    result.wrap_err(format!("Failed to decode {format} input"))
}

pub fn parse_json(text: &str) -> eyre::Result<Value> {
    serde_json::from_str(text).wrap_err("Input is not valid JSON")
}

/// Parse the text of a JSON document, detect or apply its format, and decode it.
pub fn parse_str(flag: Option<InputFormat>, text: &str) -> eyre::Result<QueryResult> {
    let value = parse_json(text)?;
    let format = resolve_input_format(flag, &value)?;
    parse(format, value)
}
