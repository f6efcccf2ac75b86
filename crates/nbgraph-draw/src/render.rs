//! HTML output: the network fragment for each draw, and the one-time library loader.
use std::fmt;

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::error::DrawResult;
use crate::model::VisGraph;

/// A rendered markup fragment, ready for a notebook's rich display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Html {
    container_id: String,
    markup: String,
}

impl Html {
    /// The `id` of the `<div>` the network is drawn into. Empty for the loader.
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn as_str(&self) -> &str {
        &self.markup
    }

    pub fn into_string(self) -> String {
        self.markup
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markup)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Renderer {
    /// CSS height of the container.
    pub height: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            height: "600px".to_string(),
        }
    }
}

impl Renderer {
    /// Render into a container with a fresh random id.
    pub fn render(&self, graph: &VisGraph, options: &Value) -> DrawResult<Html> {
        self.render_with_id(&Uuid::new_v4().to_string(), graph, options)
    }

    pub fn render_with_id(
        &self,
        container_id: &str,
        graph: &VisGraph,
        options: &Value,
    ) -> DrawResult<Html> {
        let nodes = script_json(&graph.node_list())?;
        let edges = script_json(&graph.edge_list())?;
        let options = script_json(options)?;
        let id = script_json(&container_id)?;
        let attr_id = escape_attr(container_id);
        let height = escape_attr(&self.height);

        let markup = format!(
            r#"
<div id="{attr_id}" style="height: {height};"></div>
<script type="text/javascript">
var nodes = {nodes};
var edges = {edges};

var container = document.getElementById({id});

var data = {{
    nodes: nodes,
    edges: edges
}};

var options = {options};

var network = new vis.Network(container, data, options);

</script>
"#
        );

        tracing::debug!(
            "Rendered {} nodes and {} edges into #{container_id}",
            graph.nodes.len(),
            graph.edges.len()
        );
        Ok(Html {
            container_id: container_id.to_string(),
            markup,
        })
    }
}

/// Serialize `value` as a JSON literal that is safe inside a `<script>` element.
fn script_json<T: Serialize + ?Sized>(value: &T) -> DrawResult<String> {
    // A literal "</" in a string would end the script element early
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Where the notebook loads the vis.js client library and stylesheet from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Loader {
    /// Host (and optional port) serving `/static/vis_js/<version>/`.
    pub host: String,
    pub version: String,
}

impl Loader {
    pub const DEFAULT_VERSION: &'static str = "4.8.2";

    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            version: Self::DEFAULT_VERSION.to_string(),
        }
    }

    fn base(&self) -> String {
        format!("{}/static/vis_js/{}", self.host, self.version)
    }

    pub fn stylesheet_url(&self) -> String {
        format!("https://{}/vis.css", self.base())
    }

    /// RequireJS module path, protocol-relative and without the `.js` suffix.
    pub fn script_path(&self) -> String {
        format!("//{}/vis.min", self.base())
    }

    /// Markup that pulls in vis.js once per notebook and exposes it as `window.vis`.
    pub fn to_html(&self) -> DrawResult<Html> {
        let css = escape_attr(&self.stylesheet_url());
        let path = script_json(&self.script_path())?;
        let markup = format!(
            r#"<link rel="stylesheet" type="text/css" href="{css}">
<script type="text/javascript">
require.config({{
  paths: {{
    vis: {path}
  }}
}});
require(['vis'], function(vis) {{
  window.vis = vis;
}});
</script>
"#
        );
        Ok(Html {
            container_id: String::new(),
            markup,
        })
    }
}
