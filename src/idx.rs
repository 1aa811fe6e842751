//! Column offsets of the MATPOWER case tables.
//!
//! The case format addresses tables by fixed numeric offsets; both the
//! conversion steps and downstream consumers of the normalized tables
//! should reference columns through these names.

// Bus //

pub const BUS_I: usize = 0; // bus number
pub const BUS_TYPE: usize = 1; // bus type
pub const PD: usize = 2; // Pd, real power demand (MW)
pub const QD: usize = 3; // Qd, reactive power demand (MVAr)
pub const GS: usize = 4; // Gs, shunt conductance (MW at V = 1.0 p.u.)
pub const BS: usize = 5; // Bs, shunt susceptance (MVAr at V = 1.0 p.u.)
pub const BUS_AREA: usize = 6; // area number, 1-100
pub const VM: usize = 7; // Vm, voltage magnitude (p.u.)
pub const VA: usize = 8; // Va, voltage angle (degrees)
pub const BASE_KV: usize = 9; // baseKV, base voltage (kV)
pub const ZONE: usize = 10; // zone, loss zone (1-999)
pub const VMAX: usize = 11; // maxVm, maximum voltage magnitude (p.u.)
pub const VMIN: usize = 12; // minVm, minimum voltage magnitude (p.u.)

// Gen //

pub const GEN_BUS: usize = 0; // bus number
pub const PG: usize = 1; // Pg, real power output (MW)
pub const QG: usize = 2; // Qg, reactive power output (MVAr)
pub const QMAX: usize = 3; // Qmax, maximum reactive power output at Pmin (MVAr)
pub const QMIN: usize = 4; // Qmin, minimum reactive power output at Pmin (MVAr)
pub const VG: usize = 5; // Vg, voltage magnitude setpoint (p.u.)
pub const MBASE: usize = 6; // mBase, total MVA base of this machine, defaults to baseMVA
pub const GEN_STATUS: usize = 7; // status, 1 - in service, 0 - out of service
pub const PMAX: usize = 8; // Pmax, maximum real power output (MW)
pub const PMIN: usize = 9; // Pmin, minimum real power output (MW)

// Branch //

pub const F_BUS: usize = 0; // f, from bus number
pub const T_BUS: usize = 1; // t, to bus number
pub const BR_R: usize = 2; // r, resistance (p.u.)
pub const BR_X: usize = 3; // x, reactance (p.u.)
pub const BR_B: usize = 4; // b, total line charging susceptance (p.u.)
pub const RATE_A: usize = 5; // rateA, MVA rating A (long term rating)
pub const RATE_B: usize = 6; // rateB, MVA rating B (short term rating)
pub const RATE_C: usize = 7; // rateC, MVA rating C (emergency rating)
pub const TAP: usize = 8; // ratio, transformer off nominal turns ratio
pub const SHIFT: usize = 9; // angle, transformer phase shift angle (degrees)
pub const BR_STATUS: usize = 10; // initial branch status, 1 - in service, 0 - out of service
pub const ANGMIN: usize = 11; // minimum angle difference, angle(Vf) - angle(Vt) (degrees)
pub const ANGMAX: usize = 12; // maximum angle difference, angle(Vf) - angle(Vt) (degrees)
