//! Single-vector retrieval with payload validation.

use std::sync::Arc;

use numbers_client::NumbersService;
use numbers_types::{Axis, Dataset};

use crate::RetrievalError;

/// Fetches one row or column of a dataset and checks it is well-formed.
///
/// No retries happen here; a failed call is reported as-is.
#[derive(Clone)]
pub struct VectorFetcher {
    service: Arc<dyn NumbersService>,
}

impl VectorFetcher {
    pub fn new(service: Arc<dyn NumbersService>) -> Self {
        Self { service }
    }

    /// Retrieves vector `index` of `dataset` along `axis`, which must hold
    /// exactly `size` elements.
    pub async fn fetch(
        &self,
        dataset: Dataset,
        axis: Axis,
        index: usize,
        size: usize,
    ) -> Result<Vec<i32>, RetrievalError> {
        let response = self.service.fetch_vector(dataset, axis, index).await?;

        if !response.success {
            return Err(RetrievalError::Rejected(response.cause.unwrap_or_default()));
        }

        let value = response.value.ok_or(RetrievalError::MissingValue)?;
        if value.len() != size {
            return Err(RetrievalError::LengthMismatch {
                expected: size,
                actual: value.len(),
            });
        }

        tracing::trace!(%dataset, %axis, index, "vector fetched");
        Ok(value)
    }
}
