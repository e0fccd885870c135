//! Fetch, multiply, digest and submit.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use numbers_client::{BaseUrl, HttpNumbersClient, NumbersService};
use numbers_types::{Dataset, SubmissionResult};

use crate::assemble::MatrixAssembler;
use crate::canonical::canonical_string;
use crate::digest::{self, Digest};
use crate::fetch::VectorFetcher;
use crate::multiply::multiply;
use crate::{Error, Matrix};

/// Stages of a run, in order. A failure in any stage moves the run to
/// `Failed` and nothing after it is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    Fetching,
    Multiplying,
    Serializing,
    Digesting,
    Submitting,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Parameters of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Side length of both matrices.
    pub size: usize,
    /// Cap on concurrent row fetches per dataset; `None` fetches every row at once.
    pub max_in_flight: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            size: 1000,
            max_in_flight: None,
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub size: usize,
    pub digest: Digest,
    pub submission: SubmissionResult,
    /// Wall-clock time of the submission call alone.
    pub submit_elapsed: Duration,
    /// Wall-clock time from the first fetch to the validator's answer.
    pub total_elapsed: Duration,
}

/// Drives one run against the numbers service.
///
/// `MatrixMul` initializes the datasets, fetches `A` and `B` concurrently,
/// multiplies them on the rayon pool, and submits the digest of the
/// canonical product.
///
/// # Example
///
/// ```no_run
/// use matrix_mul::{MatrixMul, PipelineConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = PipelineConfig { size: 250, max_in_flight: Some(64) };
///     let mm = MatrixMul::connect("http://localhost:8080/api/numbers", config)?;
///
///     let report = mm.run().await?;
///     println!("{} in {:?}", report.submission.body, report.submit_elapsed);
///
///     Ok(())
/// }
/// ```
pub struct MatrixMul {
    service: Arc<dyn NumbersService>,
    assembler: MatrixAssembler,
    config: PipelineConfig,
}

impl MatrixMul {
    pub fn new(service: Arc<dyn NumbersService>, config: PipelineConfig) -> Self {
        let fetcher = VectorFetcher::new(Arc::clone(&service));
        let assembler = MatrixAssembler::new(fetcher, config.max_in_flight);
        Self {
            service,
            assembler,
            config,
        }
    }

    /// Builds a run against the HTTP service at `addr`.
    pub fn connect(addr: impl Into<BaseUrl>, config: PipelineConfig) -> Result<Self, Error> {
        let client = HttpNumbersClient::connect(addr)?;
        Ok(Self::new(Arc::new(client), config))
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs every stage in order and reports the submission outcome.
    pub async fn run(&self) -> Result<RunReport, Error> {
        let result = self.run_stages().await;
        match &result {
            Ok(report) => tracing::debug!(stage = %Stage::Done, success = report.submission.success),
            Err(e) => tracing::debug!(stage = %Stage::Failed, failed_in = %e.stage(), error = %e),
        }
        result
    }

    async fn run_stages(&self) -> Result<RunReport, Error> {
        let size = self.config.size;
        if size == 0 {
            return Err(Error::InvalidSize);
        }

        enter(Stage::Init);
        self.init().await?;
        let started = Instant::now();

        enter(Stage::Fetching);
        let (a, b) = self.fetch_matrices().await?;
        tracing::info!(size, elapsed_ms = started.elapsed().as_millis() as u64, "matrices fetched");

        enter(Stage::Multiplying);
        let product = self.compute(a, b).await?;

        enter(Stage::Serializing);
        let canonical = canonical_string(&product);

        enter(Stage::Digesting);
        let digest = digest::digest(&canonical);

        enter(Stage::Submitting);
        let submit_started = Instant::now();
        let submission = digest::submit(self.service.as_ref(), &digest).await?;
        let submit_elapsed = submit_started.elapsed();

        tracing::info!(
            success = submission.success,
            elapsed_ms = submit_elapsed.as_millis() as u64,
            "hash submission finished"
        );

        Ok(RunReport {
            size,
            digest,
            submission,
            submit_elapsed,
            total_elapsed: started.elapsed(),
        })
    }

    /// Allocates a fresh dataset pair of the configured size.
    pub async fn init(&self) -> Result<(), Error> {
        self.service
            .init(self.config.size)
            .await
            .map_err(Error::Init)
    }

    /// Fetches `A` and `B` concurrently.
    ///
    /// Both assemblies run to completion even if one fails; `A`'s error wins
    /// when both do.
    pub async fn fetch_matrices(&self) -> Result<(Matrix<i32>, Matrix<i32>), Error> {
        let size = self.config.size;
        let (a, b) = tokio::join!(
            self.assembler.assemble(Dataset::A, size),
            self.assembler.assemble(Dataset::B, size),
        );
        Ok((a?, b?))
    }

    /// Multiplies on the blocking pool so the runtime keeps serving I/O.
    pub async fn compute(&self, a: Matrix<i32>, b: Matrix<i32>) -> Result<Matrix<i64>, Error> {
        let started = Instant::now();
        let product = tokio::task::spawn_blocking(move || multiply(&a, &b)).await??;
        tracing::info!(elapsed_ms = started.elapsed().as_millis() as u64, "product computed");
        Ok(product)
    }
}

fn enter(stage: Stage) {
    tracing::debug!(%stage, "entering stage");
}
