//! vis.js `Network` options.
//!
//! Presets are built from typed structs that cover just the keys they set. Options handed in by
//! a caller stay plain JSON: vis.js accepts shorthands such as `"arrows": "to"` or
//! `"smooth": false`, and strings where numbers are expected, so they are passed through
//! verbatim apart from `physics.enabled`.
use serde::Serialize;
use serde_json::{Map, Value, json};

type Extra = Map<String, Value>;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct VisOptions {
    pub nodes: NodeOptions,
    pub edges: EdgeOptions,
    pub physics: PhysicsOptions,
    /// Further top-level keys, e.g. `interaction`.
    #[serde(flatten)]
    pub extra: Extra,
}

impl VisOptions {
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Return a copy of `options` with `physics.enabled` forced to `enabled`.
///
/// A `physics` entry that is not an object (vis.js takes a bare boolean too) is replaced.
/// Documents that are not objects are returned unchanged.
pub fn with_physics(options: &Value, enabled: bool) -> Value {
    let mut options = options.clone();
    if let Some(top) = options.as_object_mut() {
        let physics = top
            .entry("physics")
            .or_insert_with(|| Value::Object(Map::new()));
        match physics {
            Value::Object(physics) => {
                physics.insert("enabled".to_string(), Value::Bool(enabled));
            }
            other => *other = json!({ "enabled": enabled }),
        }
    }
    options
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NodeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling: Option<Scaling>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Value-driven size scaling. vis.js maps node `value` into `min..=max`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Scaling {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelScaling>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LabelScaling {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EdgeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<EdgeColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrows: Option<Arrows>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smooth: Option<Smooth>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EdgeColor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Arrows {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Arrow>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Arrow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_factor: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Smooth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub smooth_type: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PhysicsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solver: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Built-in option templates. Each call builds a fresh value; nothing is shared between draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    /// Ellipses with the label inside. Looks nice for small graphs.
    #[default]
    Small,
    /// Dots scaled by their value, labels underneath on a white background. Meant for large
    /// graphs; looks poor on small ones.
    Large,
}

impl Preset {
    pub fn options(self) -> VisOptions {
        match self {
            Self::Small => VisOptions {
                nodes: NodeOptions {
                    shape: Some("ellipse".into()),
                    size: Some(25),
                    font: Some(Font {
                        size: Some(14),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                edges: default_edges(),
                physics: default_physics(),
                ..Default::default()
            },
            Self::Large => VisOptions {
                nodes: NodeOptions {
                    shape: Some("dot".into()),
                    size: Some(25),
                    font: Some(Font {
                        size: Some(14),
                        background: Some("white".into()),
                        ..Default::default()
                    }),
                    scaling: Some(Scaling {
                        min: Some(10),
                        max: Some(800),
                        label: Some(LabelScaling {
                            enabled: Some(true),
                            min: Some(14),
                            max: Some(250),
                            ..Default::default()
                        }),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                edges: default_edges(),
                physics: default_physics(),
                ..Default::default()
            },
        }
    }
}

fn default_edges() -> EdgeOptions {
    EdgeOptions {
        font: Some(Font {
            size: Some(14),
            align: Some("middle".into()),
            ..Default::default()
        }),
        color: Some(EdgeColor {
            color: Some("grey".into()),
            highlight: Some("#404040".into()),
            ..Default::default()
        }),
        arrows: Some(Arrows {
            to: Some(Arrow {
                enabled: Some(true),
                scale_factor: Some(0.5),
                ..Default::default()
            }),
            ..Default::default()
        }),
        smooth: Some(Smooth {
            enabled: Some(true),
            smooth_type: Some("dynamic".into()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn default_physics() -> PhysicsOptions {
    PhysicsOptions {
        enabled: Some(false),
        solver: Some("repulsion".into()),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn small_preset_json() {
        let value = serde_json::to_value(Preset::Small.options()).unwrap();
        assert_eq!(
            value,
            json!({
                "nodes": {"shape": "ellipse", "size": 25, "font": {"size": 14}},
                "edges": {
                    "font": {"size": 14, "align": "middle"},
                    "color": {"color": "grey", "highlight": "#404040"},
                    "arrows": {"to": {"enabled": true, "scaleFactor": 0.5}},
                    "smooth": {"enabled": true, "type": "dynamic"}
                },
                "physics": {"enabled": false, "solver": "repulsion"}
            })
        );
    }

    #[test]
    fn large_preset_scales_by_value() {
        let value = serde_json::to_value(Preset::Large.options()).unwrap();
        assert_eq!(value["nodes"]["shape"], "dot");
        assert_eq!(value["nodes"]["font"]["background"], "white");
        assert_eq!(
            value["nodes"]["scaling"],
            json!({"min": 10, "max": 800, "label": {"enabled": true, "min": 14, "max": 250}})
        );
        assert_eq!(value["edges"], serde_json::to_value(default_edges()).unwrap());
    }

    /// The library's own small preset as a caller would hand it in, font size as a string.
    fn small_document() -> Value {
        json!({
            "nodes": {"shape": "ellipse", "size": 25, "font": {"size": "14"}},
            "edges": {
                "font": {"size": 14, "align": "middle"},
                "color": {"color": "grey", "highlight": "#404040"},
                "arrows": {"to": {"enabled": true, "scaleFactor": 0.5}},
                "smooth": {"enabled": true, "type": "dynamic"}
            },
            "physics": {"enabled": false, "solver": "repulsion"}
        })
    }

    #[test]
    fn with_physics_leaves_original_alone() {
        let preset = Preset::Small.options().to_value().unwrap();
        let enabled = with_physics(&preset, true);
        assert_eq!(enabled["physics"]["enabled"], true);
        assert_eq!(enabled["physics"]["solver"], "repulsion");
        assert_eq!(preset["physics"]["enabled"], false);
        assert_eq!(Preset::Small.options().to_value().unwrap(), preset);
    }

    #[test]
    fn caller_document_passes_through() {
        let input = small_document();
        let output = with_physics(&input, true);

        let mut expected = input;
        expected["physics"]["enabled"] = json!(true);
        assert_eq!(output, expected);
        assert_eq!(output["nodes"]["font"]["size"], "14");
    }

    #[test]
    fn shorthand_values_survive() {
        let input = json!({
            "nodes": {"size": 12.5, "borderWidth": 2},
            "edges": {"arrows": "to", "smooth": false, "color": "red", "font": "12px arial red"},
            "interaction": {"hover": true}
        });
        let output = with_physics(&input, false);

        let mut expected = input;
        expected["physics"] = json!({"enabled": false});
        assert_eq!(output, expected);
    }

    #[test]
    fn boolean_physics_is_replaced() {
        let output = with_physics(&json!({"physics": false}), true);
        assert_eq!(output, json!({"physics": {"enabled": true}}));
    }

    #[test]
    fn non_object_document_is_untouched() {
        assert_eq!(with_physics(&json!(null), true), json!(null));
    }

    #[test]
    fn extra_keys_extend_a_preset() {
        let mut options = Preset::Small.options();
        options.extra.insert("interaction".into(), json!({"hover": true}));
        let value = options.to_value().unwrap();
        assert_eq!(value["interaction"], json!({"hover": true}));
        assert_eq!(value["nodes"]["shape"], "ellipse");
    }
}
