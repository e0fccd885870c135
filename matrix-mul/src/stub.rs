//! In-process numbers service for tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use numbers_client::{Error, NumbersService};
use numbers_types::{Axis, Dataset, SubmissionResult, VectorResponse};

use crate::Matrix;

enum Override {
    Respond(VectorResponse),
    Unreachable,
}

/// Serves two fixed matrices and records how it was called.
///
/// Overridden rows answer immediately; every other vector waits for its
/// configured delay first.
pub struct StubService {
    a: Matrix<i32>,
    b: Matrix<i32>,
    overrides: HashMap<(Dataset, usize), Override>,
    fixed_delay: Duration,
    reverse_step: Duration,
    fail_init: bool,
    reject_submission: bool,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    completed: Mutex<Vec<(Dataset, usize)>>,
    init_calls: Mutex<Vec<usize>>,
    submissions: Mutex<Vec<String>>,
}

impl StubService {
    pub fn new(a: Vec<Vec<i32>>, b: Vec<Vec<i32>>) -> Self {
        Self {
            a: Matrix::from_rows(a).unwrap(),
            b: Matrix::from_rows(b).unwrap(),
            overrides: HashMap::new(),
            fixed_delay: Duration::ZERO,
            reverse_step: Duration::ZERO,
            fail_init: false,
            reject_submission: false,
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
            completed: Mutex::new(Vec::new()),
            init_calls: Mutex::new(Vec::new()),
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(mut self, dataset: Dataset, index: usize, response: VectorResponse) -> Self {
        self.overrides
            .insert((dataset, index), Override::Respond(response));
        self
    }

    pub fn with_malformed_row(self, dataset: Dataset, index: usize) -> Self {
        self.with_response(
            dataset,
            index,
            VectorResponse {
                value: None,
                cause: None,
                success: true,
            },
        )
    }

    pub fn with_unreachable_row(mut self, dataset: Dataset, index: usize) -> Self {
        self.overrides
            .insert((dataset, index), Override::Unreachable);
        self
    }

    /// Every vector takes `delay` to arrive.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.fixed_delay = delay;
        self
    }

    /// Lower indices take longer, so vectors complete in reverse order.
    pub fn with_reverse_delays(mut self, step: Duration) -> Self {
        self.reverse_step = step;
        self
    }

    pub fn failing_init(mut self) -> Self {
        self.fail_init = true;
        self
    }

    /// The validator answers every submission with a non-2xx status.
    pub fn rejecting_submission(mut self) -> Self {
        self.reject_submission = true;
        self
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn completed(&self) -> Vec<(Dataset, usize)> {
        self.completed.lock().unwrap().clone()
    }

    pub fn init_calls(&self) -> Vec<usize> {
        self.init_calls.lock().unwrap().clone()
    }

    pub fn submissions(&self) -> Vec<String> {
        self.submissions.lock().unwrap().clone()
    }

    fn matrix(&self, dataset: Dataset) -> &Matrix<i32> {
        match dataset {
            Dataset::A => &self.a,
            Dataset::B => &self.b,
        }
    }

    fn delay_for(&self, index: usize) -> Duration {
        let remaining = self.a.rows().saturating_sub(index) as u32;
        self.fixed_delay + self.reverse_step * remaining
    }

    fn vector(&self, dataset: Dataset, axis: Axis, index: usize) -> VectorResponse {
        let matrix = self.matrix(dataset);
        let value = match axis {
            Axis::Row => matrix.row(index).to_vec(),
            Axis::Column => (0..matrix.rows()).map(|row| matrix[(row, index)]).collect(),
        };
        VectorResponse::ok(value)
    }
}

#[async_trait]
impl NumbersService for StubService {
    async fn init(&self, size: usize) -> Result<(), Error> {
        self.init_calls.lock().unwrap().push(size);
        if self.fail_init {
            return Err(Error::Status {
                status: 503,
                url: format!("stub://init/{}", size),
            });
        }
        Ok(())
    }

    async fn fetch_vector(
        &self,
        dataset: Dataset,
        axis: Axis,
        index: usize,
    ) -> Result<VectorResponse, Error> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        let result = match self.overrides.get(&(dataset, index)) {
            Some(Override::Respond(response)) => Ok(response.clone()),
            Some(Override::Unreachable) => Err(Error::Status {
                status: 502,
                url: format!("stub://{}/{}/{}", dataset, axis, index),
            }),
            None => {
                tokio::time::sleep(self.delay_for(index)).await;
                Ok(self.vector(dataset, axis, index))
            }
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.completed.lock().unwrap().push((dataset, index));
        result
    }

    async fn submit(&self, digest: &str) -> Result<SubmissionResult, Error> {
        self.submissions.lock().unwrap().push(digest.to_string());
        if self.reject_submission {
            return Ok(SubmissionResult {
                body: "\"wrong hash\"".to_string(),
                success: false,
            });
        }
        Ok(SubmissionResult {
            body: "\"ok\"".to_string(),
            success: true,
        })
    }
}
