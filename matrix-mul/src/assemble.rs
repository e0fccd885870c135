//! Concurrent row retrieval and reassembly into a matrix.

use futures_util::{StreamExt, stream};
use numbers_types::{Axis, Dataset};

use crate::fetch::VectorFetcher;
use crate::{Error, Matrix, RetrievalError};

/// Fetches every row of a dataset concurrently and builds the matrix.
///
/// # Failure policy
///
/// A failed row does not cancel its siblings. Every fetch is driven to
/// completion before `assemble` returns, and the first failure to arrive is
/// reported together with the total number of failed rows.
#[derive(Clone)]
pub struct MatrixAssembler {
    fetcher: VectorFetcher,
    max_in_flight: Option<usize>,
}

impl MatrixAssembler {
    /// `max_in_flight` caps concurrent row fetches; `None` issues them all at once.
    pub fn new(fetcher: VectorFetcher, max_in_flight: Option<usize>) -> Self {
        Self {
            fetcher,
            max_in_flight,
        }
    }

    /// Fetches the `size` rows of `dataset` and assembles a `size`×`size` matrix.
    ///
    /// Row `i` of the result is the vector returned for index `i`, whatever
    /// order the fetches complete in.
    pub async fn assemble(&self, dataset: Dataset, size: usize) -> Result<Matrix<i32>, Error> {
        if size == 0 {
            return Err(Error::InvalidSize);
        }

        let limit = self.max_in_flight.unwrap_or(size).clamp(1, size);
        tracing::debug!(%dataset, size, limit, "assembling matrix");

        let fetcher = &self.fetcher;
        let mut pending = stream::iter(0..size)
            .map(move |index| async move {
                let result = fetcher.fetch(dataset, Axis::Row, index, size).await;
                (index, result)
            })
            .buffer_unordered(limit);

        let mut data = vec![0; size * size];
        let mut first_failure: Option<(usize, RetrievalError)> = None;
        let mut failed = 0;

        while let Some((index, result)) = pending.next().await {
            match result {
                Ok(row) => data[index * size..(index + 1) * size].copy_from_slice(&row),
                Err(e) => {
                    failed += 1;
                    tracing::warn!(%dataset, index, error = %e, "row fetch failed");
                    if first_failure.is_none() {
                        first_failure = Some((index, e));
                    }
                }
            }
        }

        if let Some((index, source)) = first_failure {
            return Err(Error::Assembly {
                dataset,
                index,
                failed,
                size,
                source,
            });
        }

        Ok(Matrix::from_parts(size, size, data))
    }
}
