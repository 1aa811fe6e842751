use crate::dense::Mat;
use crate::error::ConvertError;

/// PPC is a MATPOWER case normalized for network building.
///
/// Tables keep the fixed MATPOWER column scheme (see [`idx`](crate::idx)).
/// After conversion every bus number in `bus`, `branch` and `gen` is
/// 0-based and the branch tap column holds `1` where the raw file stored
/// the `0` "no transformer" sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct PPC {
    /// Case format version, copied through from the source file.
    pub version: String,

    /// System MVA base used for converting power into per-unit quantities.
    pub base_mva: f64,

    /// Power system nodes, one row per bus.
    pub bus: Mat,

    /// Generators, one row per machine.
    pub gen: Mat,

    /// Transmission lines/cables and transformers, one row per branch.
    pub branch: Mat,

    /// Generator cost coefficients. Not every case file carries them.
    pub gencost: Option<Mat>,
}

/// Guards a table's shape before a mutation step touches it.
pub(crate) fn require_cols(
    table: &Mat,
    name: &'static str,
    cols: usize,
) -> Result<(), ConvertError> {
    if table.rows() == 0 {
        return Err(ConvertError::malformed_table(name, "table is empty"));
    }
    if table.cols() < cols {
        return Err(ConvertError::malformed_table(
            name,
            format!("needs at least {} columns, got {}", cols, table.cols()),
        ));
    }
    Ok(())
}
