//! Matrix multiplication over the remote numbers service.
//!
//! `matrix-mul` fetches two square integer matrices row by row from the
//! numbers service, multiplies them in parallel, and submits an MD5 digest
//! of the product back to the service for validation.
//!
//! # Pipeline
//!
//! 1. **Init**: `POST /init/{size}` allocates datasets `A` and `B`
//! 2. **Fetch**: every row of both datasets is requested concurrently and
//!    reassembled by row index ([`MatrixAssembler`])
//! 3. **Multiply**: one rayon task per output row ([`multiply`])
//! 4. **Serialize**: row-major digits, no separators ([`canonical_string`])
//! 5. **Digest**: MD5 of the digits, raw bytes read as UTF-8 ([`digest()`])
//! 6. **Submit**: `POST /validate` with the digest as a JSON string
//!
//! # Example
//!
//! ```no_run
//! use matrix_mul::{MatrixMul, PipelineConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mm = MatrixMul::connect(
//!         numbers_client::DEFAULT_BASE_URL,
//!         PipelineConfig { size: 2, max_in_flight: None },
//!     )?;
//!
//!     let report = mm.run().await?;
//!     println!("{}", report.submission.body);
//!
//!     Ok(())
//! }
//! ```

mod assemble;
mod canonical;
mod digest;
mod error;
mod fetch;
mod matrix;
mod matrix_mul;
mod multiply;
#[cfg(test)]
mod stub;

pub use assemble::MatrixAssembler;
pub use canonical::{CanonicalCell, canonical_string, serialize};
pub use digest::{Digest, digest, strip_non_digits, submit};
pub use error::{Error, RetrievalError};
pub use fetch::VectorFetcher;
pub use matrix::Matrix;
pub use matrix_mul::{MatrixMul, PipelineConfig, RunReport, Stage};
pub use multiply::multiply;
