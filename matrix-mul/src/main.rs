use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use matrix_mul::{MatrixMul, PipelineConfig};
use numbers_client::{ClientConfig, DEFAULT_BASE_URL, HttpNumbersClient};
use tracing_subscriber::EnvFilter;

/// Multiply the numbers service's datasets and submit the digest.
#[derive(Debug, Parser)]
#[command(name = "matrix-mul", version)]
struct Args {
    /// Side length of both matrices.
    #[arg(long, env = "MATRIX_SIZE", default_value_t = 1000)]
    size: usize,

    /// Base URL of the numbers service.
    #[arg(long, env = "NUMBERS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Maximum concurrent row fetches per dataset (default: all rows at once).
    #[arg(long, env = "MATRIX_MAX_IN_FLIGHT")]
    max_in_flight: Option<usize>,

    /// Per-request timeout in seconds.
    #[arg(long, env = "NUMBERS_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let client = HttpNumbersClient::new(ClientConfig {
        base_url: args.base_url.into(),
        timeout: Duration::from_secs(args.timeout_secs),
        ..ClientConfig::default()
    })?;

    let mm = MatrixMul::new(
        Arc::new(client),
        PipelineConfig {
            size: args.size,
            max_in_flight: args.max_in_flight,
        },
    );

    println!("Multiplying {0}x{0} matrices...", args.size);
    let report = mm.run().await?;

    println!("Validator response: {}", report.submission.body);
    println!(
        "Hash Submission took {} ms",
        report.submit_elapsed.as_millis()
    );
    if !report.submission.success {
        tracing::warn!("validator did not accept the submission");
    }

    Ok(())
}
