use crate::error::ConvertError;
use crate::idx::{BUS_I, F_BUS, GEN_BUS, T_BUS};
use crate::ppc::{require_cols, PPC};

/// Shifts the bus numbering columns from MATLAB 1-based to 0-based.
///
/// Rewrites the bus number, branch from/to bus and generator bus columns
/// in place; no other column is touched. Must be applied exactly once per
/// extracted case: a second pass shifts the numbering again.
pub fn adjust_indices(ppc: &mut PPC) -> Result<(), ConvertError> {
    require_cols(&ppc.bus, "bus", BUS_I + 1)?;
    require_cols(&ppc.branch, "branch", T_BUS + 1)?;
    require_cols(&ppc.gen, "gen", GEN_BUS + 1)?;

    for r in 0..ppc.bus.rows() {
        let i = ppc.bus.get(r, BUS_I);
        ppc.bus.set(r, BUS_I, i - 1.0);
    }
    for r in 0..ppc.branch.rows() {
        let f = ppc.branch.get(r, F_BUS);
        ppc.branch.set(r, F_BUS, f - 1.0);
        let t = ppc.branch.get(r, T_BUS);
        ppc.branch.set(r, T_BUS, t - 1.0);
    }
    for r in 0..ppc.gen.rows() {
        let b = ppc.gen.get(r, GEN_BUS);
        ppc.gen.set(r, GEN_BUS, b - 1.0);
    }
    Ok(())
}
