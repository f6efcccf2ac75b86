use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use eyre::WrapErr;
use nbgraph_draw::input::{InputFormat, parse, parse_json, resolve_input_format};
use nbgraph_draw::{DrawConfig, LabelMap, LabelMapping, LabelPolicy, Loader, Preset, Renderer};
use nbgraph_utils::stdio::{get_output_writer, is_stdio, read_config_file, read_input_text};
use serde_json::Value;

/// Render graph query results as a vis.js network HTML fragment.
///
/// Input is a JSON document in one of three shapes:
///   rows           [[m, r, n], ...]   (r may be null)
///   lists          {"nodes": [...], "relationships": [...]}
///   relationships  [r, [r, [r, r]], ...]   (one level of grouping)
///
/// The shape is detected from content when --from is not given.
#[derive(Debug, Parser)]
#[clap(version, verbatim_doc_comment)]
struct Args {
    #[clap(long, default_value_t = tracing::Level::INFO)]
    log_level: tracing::Level,

    /// Input format (detected from content if omitted)
    #[clap(short, long)]
    from: Option<InputFormat>,

    /// Print the detected input format and exit
    #[clap(long)]
    detect: bool,

    /// Path to the input. stdin if '-' or omitted
    #[clap(short, long)]
    input: Option<PathBuf>,

    /// Path to the output. stdout if '-' or omitted
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Name entities carrying LABEL by their KEY property, e.g. Person=name. May be repeated
    #[clap(short, long = "label", value_name = "LABEL=KEY")]
    labels: Vec<LabelMapping>,

    /// JSON object mapping labels to property keys. --label entries take priority
    #[clap(long, value_name = "FILE")]
    label_map: Option<PathBuf>,

    /// Built-in vis.js options
    #[clap(long, default_value_t = Preset::Small, value_enum, conflicts_with = "options")]
    preset: Preset,

    /// JSON file with vis.js network options, used verbatim instead of a preset
    #[clap(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Disable the physics simulation
    #[clap(long)]
    no_physics: bool,

    /// What to do with nodes without labels and relationships without a type
    #[clap(long, default_value_t = LabelPolicy::Strict, value_enum)]
    policy: LabelPolicy,

    /// CSS height of the network container
    #[clap(long, default_value = "600px")]
    height: String,

    /// Print the one-time vis.js loader markup for --host and exit
    #[clap(long, requires = "host")]
    init: bool,

    /// Host serving /static/vis_js/<version>/
    #[clap(long)]
    host: Option<String>,

    /// vis.js version to load with --init
    #[clap(long, default_value = Loader::DEFAULT_VERSION)]
    vis_version: String,
}

impl Args {
    fn label_map(&self) -> eyre::Result<LabelMap> {
        let mut map = match &self.label_map {
            Some(path) => {
                let text = read_config_file(path)?;
                serde_json::from_str(&text)
                    .wrap_err(format!("Failed to parse label map: {path:?}"))?
            }
            None => LabelMap::new(),
        };
        map.extend(self.labels.iter().cloned());
        Ok(map)
    }

    fn draw_config(&self) -> eyre::Result<DrawConfig> {
        let options = match &self.options {
            Some(path) => {
                let text = read_config_file(path)?;
                let options: Value = serde_json::from_str(&text)
                    .wrap_err(format!("Failed to parse vis.js options: {path:?}"))?;
                eyre::ensure!(
                    options.is_object(),
                    "vis.js options must be a JSON object: {path:?}"
                );
                options
            }
            None => self.preset.options().to_value()?,
        };
        Ok(DrawConfig {
            label_map: self.label_map()?,
            physics: !self.no_physics,
            options: Some(options),
            policy: self.policy,
            renderer: Renderer {
                height: self.height.clone(),
            },
        })
    }
}

fn main() -> eyre::Result<()> {
    let args = Args::parse();
    nbgraph_utils::logging::init(args.log_level)?;

    // Normalize `-` to None -- it means stdio, not a file path.
    let input_path = args.input.clone().filter(|p| !is_stdio(p));
    let output_path = args.output.clone().filter(|p| !is_stdio(p));

    if args.init {
        let host = args
            .host
            .clone()
            .ok_or_else(|| eyre::eyre!("--init requires --host"))?;
        let loader = Loader {
            version: args.vis_version.clone(),
            ..Loader::new(host)
        };
        let mut output = get_output_writer(&output_path)?;
        write!(output, "{}", loader.to_html()?)?;
        return Ok(());
    }

    let input_text = read_input_text(&input_path)?;
    let input = parse_json(&input_text)?;
    let from = resolve_input_format(args.from, &input)?;

    if args.detect {
        println!("{from}");
        return Ok(());
    }

    let result = parse(from, input)?;

    let config = args.draw_config()?;
    tracing::debug!("Label map has {} entries", config.label_map.len());

    let html = result.draw(&config)?;
    tracing::info!("Rendered network into container {}", html.container_id());

    let mut output = get_output_writer(&output_path)?;
    write!(output, "{html}")?;

    Ok(())
}
