use crate::error::ConvertError;
use crate::idx::TAP;
use crate::ppc::{require_cols, PPC};

/// Replaces the `0` "no transformer" tap sentinel with a neutral `1`.
///
/// Raw case files store a tap ratio of zero for plain lines, while
/// transformer detection downstream reads a ratio of one as "no
/// transformer". Repaired rows hold `1`, so a second pass is a no-op.
pub fn repair_tap_ratio(ppc: &mut PPC) -> Result<(), ConvertError> {
    require_cols(&ppc.branch, "branch", TAP + 1)?;

    for r in 0..ppc.branch.rows() {
        if ppc.branch.get(r, TAP) == 0.0 {
            ppc.branch.set(r, TAP, 1.0);
        }
    }
    Ok(())
}
