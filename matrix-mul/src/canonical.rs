//! Canonical text form of a result matrix.
//!
//! Cells are visited row by row, truncated toward zero and written as plain
//! decimal digits with nothing in between. The form is ambiguous (`1,23` and
//! `12,3` produce the same text) and the validator depends on exactly that.

use std::fmt::Write;

use crate::Matrix;

/// A cell value with a canonical integer rendering.
pub trait CanonicalCell {
    /// Appends the integer part of `self` to `out`.
    fn write_canonical(&self, out: &mut String);
}

macro_rules! impl_integer_cell {
    ($($ty:ty),*) => {
        $(
            impl CanonicalCell for $ty {
                fn write_canonical(&self, out: &mut String) {
                    let _ = write!(out, "{}", self);
                }
            }
        )*
    };
}

impl_integer_cell!(i32, i64);

impl CanonicalCell for f64 {
    fn write_canonical(&self, out: &mut String) {
        let truncated = self.trunc();
        if truncated == 0.0 {
            // -0.5 truncates to -0.0, which still renders as "0"
            out.push('0');
        } else {
            let _ = write!(out, "{:.0}", truncated);
        }
    }
}

/// Renders `matrix` as its canonical digit string.
pub fn canonical_string<T: CanonicalCell>(matrix: &Matrix<T>) -> String {
    let mut out = String::with_capacity(matrix.as_slice().len() * 4);
    for row in matrix.iter_rows() {
        for cell in row {
            cell.write_canonical(&mut out);
        }
    }
    out
}

/// Canonical form as UTF-8 bytes.
pub fn serialize<T: CanonicalCell>(matrix: &Matrix<T>) -> Vec<u8> {
    canonical_string(matrix).into_bytes()
}
