//! Client for the remote numbers service.
//!
//! `numbers-client` exposes the service as the [`NumbersService`] capability
//! (init, fetch one vector, submit a digest) and ships an HTTP implementation,
//! [`HttpNumbersClient`]. Callers hold the service behind the trait so tests
//! can substitute an in-process stub.
//!
//! # Example
//!
//! ```no_run
//! use numbers_client::{HttpNumbersClient, NumbersService};
//! use numbers_types::{Axis, Dataset};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpNumbersClient::connect("http://localhost:8080/api/numbers")?;
//!
//!     client.init(3).await?;
//!     let row = client.fetch_vector(Dataset::A, Axis::Row, 0).await?;
//!     println!("{:?}", row.value);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod service;

pub use client::{BaseUrl, ClientConfig, DEFAULT_BASE_URL, HttpNumbersClient};
pub use error::Error;
pub use service::NumbersService;
