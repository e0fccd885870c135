//! Dense row-major matrix.

use std::ops::Index;

/// A dense matrix stored as one contiguous row-major buffer.
///
/// Cell `(row, col)` lives at `data[row * cols + col]`. A `Matrix` is never
/// resized after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Builds a matrix from nested rows.
    ///
    /// Returns `None` if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != cols) {
            return None;
        }

        let data = rows.into_iter().flatten().collect();
        Some(Self::from_parts(row_count, cols, data))
    }

    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Row `index` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn row(&self, index: usize) -> &[T] {
        assert!(index < self.rows, "row {index} out of bounds");
        &self.data[index * self.cols..(index + 1) * self.cols]
    }

    /// Iterates rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.rows).map(move |i| &self.data[i * self.cols..(i + 1) * self.cols])
    }

    /// The row-major backing buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Clone> Matrix<T> {
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_layout() {
        let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert!(!m.is_square());
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(m[(1, 0)], 4);
        assert_eq!(m.row(1), &[4, 5, 6]);
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 3), None);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(Matrix::from_rows(vec![vec![1, 2], vec![3]]).is_none());
    }

    #[test]
    fn rows_round_trip() {
        let rows = vec![vec![7, -8], vec![9, 10]];
        let m = Matrix::from_rows(rows.clone()).unwrap();
        assert_eq!(m.to_rows(), rows);
        assert_eq!(m.iter_rows().count(), 2);
    }

    #[test]
    fn zero_width_rows_are_kept() {
        let m: Matrix<i32> = Matrix::from_rows(vec![Vec::new(); 3]).unwrap();
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 0);
        assert_eq!(m.iter_rows().count(), 3);
        assert_eq!(m.to_rows(), vec![Vec::<i32>::new(); 3]);
    }

    #[test]
    fn empty_matrix_has_no_rows() {
        let m: Matrix<i32> = Matrix::from_rows(Vec::new()).unwrap();
        assert_eq!(m.rows(), 0);
        assert!(m.is_square());
        assert_eq!(m.iter_rows().count(), 0);
    }
}
