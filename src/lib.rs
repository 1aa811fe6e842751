//! Conversion of MATPOWER case files (.mat) into normalized power flow
//! tables for a downstream network builder: the case tables are located in
//! either supported file layout, bus numbering is shifted from MATLAB
//! 1-based to 0-based and the transformer tap sentinel is repaired.

mod convert;
mod dense;
mod error;
mod extract;
mod network;
mod normalize;
mod ppc;
mod read;
mod tap;

pub mod debug;
pub mod idx;

pub use convert::*;
pub use dense::*;
pub use error::*;
pub use extract::*;
pub use network::*;
pub use normalize::*;
pub use ppc::*;
pub use read::*;
pub use tap::*;
