//! Row-parallel dense multiplication.

use rayon::prelude::*;

use crate::{Error, Matrix};

/// Computes `A × B` for two square matrices of the same size.
///
/// Each output row is computed by one rayon task that owns the matching
/// slice of the result buffer, so no cell is shared between tasks. Products
/// are accumulated exactly in `i64`; a sum that leaves the `i64` range fails
/// with [`Error::ArithmeticOverflow`] instead of wrapping.
pub fn multiply(a: &Matrix<i32>, b: &Matrix<i32>) -> Result<Matrix<i64>, Error> {
    if !a.is_square() || !b.is_square() || a.rows() != b.rows() {
        return Err(Error::DimensionMismatch(
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols(),
        ));
    }

    let n = a.rows();
    let mut data = vec![0i64; n * n];

    if n > 0 {
        data.par_chunks_mut(n)
            .enumerate()
            .try_for_each(|(i, out)| multiply_row(i, a.row(i), b, out))?;
    }

    Ok(Matrix::from_parts(n, n, data))
}

fn multiply_row(i: usize, a_row: &[i32], b: &Matrix<i32>, out: &mut [i64]) -> Result<(), Error> {
    for (j, cell) in out.iter_mut().enumerate() {
        let mut sum: i64 = 0;
        for (k, &a_ik) in a_row.iter().enumerate() {
            // i32 × i32 always fits in i64
            let term = i64::from(a_ik) * i64::from(b[(k, j)]);
            sum = sum
                .checked_add(term)
                .ok_or(Error::ArithmeticOverflow { row: i, col: j })?;
        }
        *cell = sum;
    }
    Ok(())
}
