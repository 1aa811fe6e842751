use anyhow::Result;

use crate::ppc::PPC;

/// Policy for telling transformers apart from plain lines downstream.
///
/// Passed through to the network builder; this crate only guarantees the
/// tap convention both policies rely on (neutral ratio `1`).
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum TrafoDetection {
    /// A branch joining buses with different nominal voltages is a
    /// transformer.
    #[default]
    VnKv,
    /// A branch whose tap ratio deviates from one is a transformer.
    Ratio,
}

/// Builds an electrical network model from a normalized case.
///
/// Implemented by the downstream consumer of the converted tables. The
/// conversion pipeline calls [`build_network`](Self::build_network) exactly
/// once, with a fully normalized case.
pub trait NetworkBuilder {
    type Network;

    fn build_network(
        &self,
        ppc: PPC,
        f_hz: f64,
        detect_trafo: TrafoDetection,
    ) -> Result<Self::Network>;
}
