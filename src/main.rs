use anyhow::{Context, Result};
use clap::Parser;
use indicatif::ProgressBar;
use mock_table::{OutputFormat, RowCount, render_table_with, write_table};
use rand::{SeedableRng, rngs::StdRng};
use tokio::{fs::File, io::BufWriter};
use tracing_subscriber::EnvFilter;

use std::{path::PathBuf, time::Duration};

mod commands;

use commands::{Args, Commands};

fn row_count(count: Option<&str>) -> RowCount {
    count.map(RowCount::parse).unwrap_or_default()
}

async fn render(
    count: Option<String>,
    format: OutputFormat,
    seed: Option<u64>,
    output: Option<PathBuf>,
) -> Result<()> {
    tracing::info!("Generating table");

    let start = std::time::Instant::now();

    let count = row_count(count.as_deref());
    let table = match seed {
        Some(seed) => render_table_with(&mut StdRng::seed_from_u64(seed), count),
        None => render_table_with(&mut rand::rng(), count),
    };

    tracing::info!("Generated {} rows in {:?}", table.rows.len(), start.elapsed());

    match output {
        Some(path) => {
            let spinner = ProgressBar::new_spinner();
            spinner.set_message(format!("Writing {}", path.display()));
            spinner.enable_steady_tick(Duration::from_millis(100));

            let file = File::create(&path)
                .await
                .with_context(|| format!("Could not create {}", path.display()))?;
            write_table(&table, format, BufWriter::new(file))
                .await
                .context("Failed to write table to file")?;

            spinner.finish_with_message(format!("Wrote {}", path.display()));
        }
        None => write_table(&table, format, tokio::io::stdout())
            .await
            .context("Failed to write table to stdout")?,
    }

    tracing::info!("Table rendered in {:?}", start.elapsed());

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine, it only supplies RUST_LOG
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Args::parse();
    match cli.command {
        Some(Commands::Render {
            count,
            format,
            seed,
            output,
        }) => render(count, format, seed, output).await?,
        None => {
            println!("Run with --help to see instructions");
        }
    }

    Ok(())
}
