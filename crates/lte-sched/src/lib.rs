//! MAC scheduler configuration interface
//!
//! The scheduler itself lives outside of this workspace. RRC entities only hand it complete
//! per-UE configuration snapshots through [`SchedInterface`].

pub mod sched_iface;
pub mod ue_cfg;

pub use sched_iface::*;
pub use ue_cfg::*;
