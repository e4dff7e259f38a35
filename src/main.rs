use clap::Parser;
use generate_ci::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Render the GitLab CI pipeline (or per-client helm values) from the client registry
#[derive(Parser, Debug)]
#[command(name = "generate-ci")]
#[command(version)]
struct Args {
    /// Generates helm values for every client into .gitlab/ dir
    #[arg(long = "gen-chart-values")]
    gen_chart_values: bool,
}

fn init_tracing() {
    // stdout carries the rendered pipeline, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("generate_ci=warn")),
        )
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = ConfigBuilder::new().token_from_env().build()?;
    let generator = Generator::new(config);

    let mut stdout = std::io::stdout().lock();
    let generated = generator
        .run(Mode::from(args.gen_chart_values), &mut stdout)
        .await?;

    match generated {
        Generated::Ci { clients } => info!(clients, "Printed pipeline"),
        Generated::ChartValues { written } => info!(files = written.len(), "Wrote values files"),
    }

    Ok(())
}
