use derive_builder::Builder;

/// Dense 2D table of `f64` values.
///
/// MATPOWER case tables are plain numeric matrices addressed by fixed
/// column offsets, so the table carries no column names.
#[derive(Clone, Debug, Default, Builder)]
#[builder(default, build_fn(name = "pre_build", validate = "Self::validate"))]
pub struct Mat {
    #[builder(setter(custom))]
    rows: usize,
    #[builder(setter(custom))]
    cols: usize,

    values: Vec<f64>,

    // Element values are stored in row-major order (C-style)
    // or column-major order (Fortran-style).
    #[builder(setter(custom))]
    col_major: bool,
}

impl MatBuilder {
    pub fn col_major(&mut self) -> &mut Self {
        self.col_major = Some(true);
        self
    }

    pub fn row_major(&mut self) -> &mut Self {
        self.col_major = Some(false);
        self
    }

    pub fn build(&self) -> Result<Mat, MatBuilderError> {
        let mut mat = self.pre_build()?;
        if self.values.is_none() {
            mat.values = vec![0.0; mat.rows * mat.cols];
        }
        Ok(mat)
    }

    fn validate(&self) -> Result<(), String> {
        if let Some(values) = &self.values {
            let rows = self.rows.unwrap_or_default();
            let cols = self.cols.unwrap_or_default();
            if values.len() != rows * cols {
                return Err(format!(
                    "values length ({}) must be rows * cols ({} * {} = {})",
                    values.len(),
                    rows,
                    cols,
                    rows * cols
                ));
            }
        }
        Ok(())
    }
}

impl Mat {
    pub fn new(rows: usize, cols: usize) -> MatBuilder {
        MatBuilder {
            rows: Some(rows),
            cols: Some(cols),
            ..Default::default()
        }
    }

    /// Builds a row-major table from row literals. Every row must have the
    /// same number of values.
    pub fn from_rows(data: &[Vec<f64>]) -> Result<Self, MatBuilderError> {
        let cols = data.first().map_or(0, Vec::len);
        if let Some(row) = data.iter().find(|row| row.len() != cols) {
            return Err(MatBuilderError::ValidationError(format!(
                "every row must have {} values, got {}",
                cols,
                row.len()
            )));
        }
        Mat::new(data.len(), cols).values(data.concat()).build()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn values(&self) -> &Vec<f64> {
        &self.values
    }

    #[inline]
    fn ix(&self, row: usize, col: usize) -> usize {
        if !self.col_major {
            row * self.cols + col
        } else {
            col * self.rows + row
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows);
        assert!(col < self.cols);
        self.values[self.ix(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, v: f64) {
        assert!(row < self.rows);
        assert!(col < self.cols);
        let i = self.ix(row, col);
        self.values[i] = v
    }

    pub fn row(&self, row: usize) -> impl Iterator<Item = f64> + '_ {
        assert!(row < self.rows);
        (0..self.cols).map(move |col| self.get(row, col))
    }

    pub fn col(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        assert!(col < self.cols);
        (0..self.rows).map(move |row| self.get(row, col))
    }
}

impl PartialEq for Mat {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && (0..self.rows).all(|r| (0..self.cols).all(|c| self.get(r, c) == other.get(r, c)))
    }
}
