use anyhow::{Context, Result};
use eplclean::{process, Config};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging (stderr; stdout carries only the result line) ──
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();

    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {:?}", info);
    }));

    // ─── 2) fixed paths ──────────────────────────────────────────────
    let config = Config::default();
    info!(
        source = %config.source.display(),
        dest = %config.dest.display(),
        column = %config.column,
        "startup"
    );

    // ─── 3) load → clean → save ──────────────────────────────────────
    let summary = process::run_with(&config).with_context(|| {
        format!(
            "cleaning {} into {}",
            config.source.display(),
            config.dest.display()
        )
    })?;

    info!(rows = summary.rows, changed = summary.changed, "all done");
    Ok(())
}
