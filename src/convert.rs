use std::path::Path;

use derive_builder::Builder;

use crate::error::ConvertError;
use crate::extract::extract_case;
use crate::network::{NetworkBuilder, TrafoDetection};
use crate::normalize::adjust_indices;
use crate::ppc::PPC;
use crate::read::read_mat_file;
use crate::tap::repair_tap_ratio;

/// Conversion options.
#[derive(Debug, Clone, Builder)]
pub struct ConvertOptions {
    /// Network frequency (Hz). Default value is 50.
    #[builder(default = "50.0")]
    pub f_hz: f64,

    /// Transformer detection policy handed to the network builder.
    #[builder(default)]
    pub detect_trafo: TrafoDetection,

    /// Variable name of the case struct inside the file, used when the
    /// tables are not stored top level. Default value is "mpc".
    #[builder(default = "\"mpc\".to_string()")]
    pub case_name: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            f_hz: 50.0,
            detect_trafo: TrafoDetection::default(),
            case_name: "mpc".to_string(),
        }
    }
}

/// Reads a MATPOWER case file and normalizes it into a [`PPC`].
///
/// The tables are extracted from either supported layout, the bus
/// numbering is shifted to 0-based and the tap ratio sentinel repaired.
/// Any step failing leaves no partial case behind.
pub fn mpc_to_ppc(case_path: &Path, case_name: &str) -> Result<PPC, ConvertError> {
    let mpc = read_mat_file(case_path)?;
    let mut ppc = extract_case(mpc, case_name)?;
    adjust_indices(&mut ppc)?;
    repair_tap_ratio(&mut ppc)?;
    Ok(ppc)
}

/// Converts a MATPOWER case file into a network model.
///
/// Runs [`mpc_to_ppc`] and hands the result to `builder` together with the
/// frequency and transformer detection mode. The builder is not invoked
/// when any conversion step fails.
pub fn convert<B: NetworkBuilder>(
    case_path: &Path,
    opts: &ConvertOptions,
    builder: &B,
) -> Result<B::Network, ConvertError> {
    let ppc = mpc_to_ppc(case_path, &opts.case_name)?;
    builder
        .build_network(ppc, opts.f_hz, opts.detect_trafo)
        .map_err(ConvertError::Network)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = ConvertOptions::default();
        assert_eq!(opts.f_hz, 50.0);
        assert_eq!(opts.detect_trafo, TrafoDetection::VnKv);
        assert_eq!(opts.case_name, "mpc");
    }

    #[test]
    fn test_options_builder() {
        let opts = ConvertOptionsBuilder::default()
            .f_hz(60.0)
            .detect_trafo(TrafoDetection::Ratio)
            .build()
            .unwrap();
        assert_eq!(opts.f_hz, 60.0);
        assert_eq!(opts.detect_trafo, TrafoDetection::Ratio);
        assert_eq!(opts.case_name, "mpc");
    }
}
