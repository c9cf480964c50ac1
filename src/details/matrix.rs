/// dense row-major matrix
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    matrix: Vec<T>,
}

impl<T> Matrix<T>
where
    T: Clone,
{
    pub fn new(rows: usize, cols: usize, val: T) -> Self {
        Self {
            rows,
            cols,
            matrix: vec![val; rows * cols],
        }
    }

    #[allow(dead_code)]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[allow(dead_code)]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> &T {
        debug_assert!(row < self.rows);
        debug_assert!(col < self.cols);
        &self.matrix[row * self.cols + col]
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        debug_assert!(row < self.rows);
        debug_assert!(col < self.cols);
        &mut self.matrix[row * self.cols + col]
    }
}

impl Matrix<usize> {
    /// Wagner-Fischer table for sequences of length `len1` and `len2`.
    ///
    /// Row 0 and column 0 hold the cost of building / removing a whole prefix,
    /// so `table[i][0] = i` and `table[0][j] = j`. Every other cell is 0 and
    /// has to be filled by the caller.
    pub fn edit_table(len1: usize, len2: usize) -> Self {
        let mut table = Self::new(len1 + 1, len2 + 1, 0);
        for i in 0..=len1 {
            *table.get_mut(i, 0) = i;
        }
        for j in 0..=len2 {
            *table.get_mut(0, j) = j;
        }
        table
    }
}
