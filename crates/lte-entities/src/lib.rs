//! eNB control plane entities
//!
//! Currently hosts the RRC side of the MAC scheduler configuration: one `MacController` per UE
//! keeps the scheduler in sync with the RRC procedures running for that UE.

pub mod rrc;

// Re-export commonly used items
pub use rrc::mac_controller::{MacController, ProcStage};
