use pretty_dtoa::{dtoa, FmtFloatConfig};

use crate::dense::Mat;

const FLOAT_CONFIG: FmtFloatConfig = FmtFloatConfig::default()
    .add_point_zero(false)
    .max_significant_digits(9);

pub fn format_f64_vec(v: &[f64]) -> String {
    let a: Vec<String> = v.iter().map(|f| dtoa(*f, FLOAT_CONFIG)).collect();
    format!("[{}]", a.join(", "))
}

/// Formats a table one row per line.
pub fn format_mat(m: &Mat) -> String {
    (0..m.rows())
        .map(|r| {
            let row: Vec<f64> = m.row(r).collect();
            format_f64_vec(&row)
        })
        .collect::<Vec<String>>()
        .join("\n")
}
