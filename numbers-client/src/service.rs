use async_trait::async_trait;
use numbers_types::{Axis, Dataset, SubmissionResult, VectorResponse};

use crate::Error;

/// The operations the numbers service offers.
///
/// Implementations are shared between concurrently running requests, so they
/// must be safe to call from many tasks at once.
#[async_trait]
pub trait NumbersService: Send + Sync {
    /// Allocates a fresh pair of `size`×`size` datasets.
    async fn init(&self, size: usize) -> Result<(), Error>;

    /// Retrieves one row or column of `dataset`.
    ///
    /// The payload is returned undecoded beyond JSON; checking `success` and
    /// the vector length is left to the caller.
    async fn fetch_vector(
        &self,
        dataset: Dataset,
        axis: Axis,
        index: usize,
    ) -> Result<VectorResponse, Error>;

    /// Posts `digest` to the validator as a JSON string literal.
    async fn submit(&self, digest: &str) -> Result<SubmissionResult, Error>;
}
