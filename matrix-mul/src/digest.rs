//! Digest of the canonical result and its submission.

use std::borrow::Cow;
use std::fmt::Write;

use md5::{Digest as _, Md5};
use numbers_client::NumbersService;
use numbers_types::SubmissionResult;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::Error;

static NON_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\D").expect("non-digit pattern must compile"));

/// MD5 of a digit string, in the form the validator expects.
///
/// The validator compares against the raw hash bytes decoded as UTF-8, not
/// against a hex string. Invalid sequences decode to U+FFFD, so the text is
/// lossy; [`Digest::bytes`] keeps the exact hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    bytes: [u8; 16],
    text: String,
}

impl Digest {
    pub fn bytes(&self) -> &[u8; 16] {
        &self.bytes
    }

    /// The hash bytes reinterpreted as UTF-8 text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercase hex of the hash bytes, for logs.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().fold(String::with_capacity(32), |mut out, byte| {
            let _ = write!(out, "{:02x}", byte);
            out
        })
    }
}

/// Removes every character that is not a decimal digit.
pub fn strip_non_digits(input: &str) -> Cow<'_, str> {
    NON_DIGIT.replace_all(input, "")
}

/// Hashes the digits of `input`, ignoring everything else.
pub fn digest(input: &str) -> Digest {
    let digits = strip_non_digits(input);
    let hash = Md5::digest(digits.as_bytes());
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&hash);
    let text = String::from_utf8_lossy(&bytes).into_owned();
    Digest { bytes, text }
}

/// Sends the text form of `digest` to the validator.
pub async fn submit(
    service: &dyn NumbersService,
    digest: &Digest,
) -> Result<SubmissionResult, Error> {
    tracing::debug!(digest = %digest.to_hex(), "submitting digest");
    service
        .submit(digest.text())
        .await
        .map_err(Error::Submission)
}
