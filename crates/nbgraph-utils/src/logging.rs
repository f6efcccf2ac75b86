use std::io::IsTerminal;

/// Environment variable that overrides the `--log-level` default directive.
pub const LOG_ENV_VAR: &str = "NBGRAPH_LOG";

/// Install error reporting and the stderr tracing subscriber for a binary.
///
/// Color (both `color-eyre` reports and ANSI log output) is only enabled when stderr is a
/// terminal. The `level` is the default directive; [LOG_ENV_VAR] can refine it per target.
pub fn init(level: tracing::Level) -> eyre::Result<()> {
    let use_color = std::io::stderr().is_terminal();
    if use_color {
        color_eyre::install()?;
    }

    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(level.into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(use_color)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
