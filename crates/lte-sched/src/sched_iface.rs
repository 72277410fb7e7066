use lte_core::Rnti;

use crate::ue_cfg::UeSchedCfg;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedErr {
    /// No UE context exists in the scheduler for this RNTI
    UnknownRnti { rnti: Rnti },
    /// The target RNTI is already bound to another UE
    RntiInUse { rnti: Rnti },
    /// The scheduler refused the configuration
    InvalidConfig { reason: &'static str },
}

impl core::fmt::Display for SchedErr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SchedErr::UnknownRnti { rnti } => write!(f, "unknown rnti 0x{:x}", rnti),
            SchedErr::RntiInUse { rnti } => write!(f, "rnti 0x{:x} already in use", rnti),
            SchedErr::InvalidConfig { reason } => write!(f, "invalid config: {}", reason),
        }
    }
}

impl std::error::Error for SchedErr {}

/// Configuration-acceptance side of the MAC scheduler.
/// Every call carries a full snapshot; the scheduler never observes partial updates.
pub trait SchedInterface {
    /// Binds the UE context known under `temp_crnti` to its final `crnti` and applies `cfg`.
    /// With `temp_crnti == crnti` this creates the UE context and schedules the contention
    /// resolution CE.
    fn bind_identity(&mut self, temp_crnti: Rnti, crnti: Rnti, cfg: &UeSchedCfg) -> Result<(), SchedErr>;

    /// Replaces the configuration of an existing UE
    fn update_config(&mut self, rnti: Rnti, cfg: &UeSchedCfg) -> Result<(), SchedErr>;

    /// Enables or disables the dedicated PHY configuration (PUCCH SR/CQI resources) for the UE
    fn set_phy_ack(&mut self, rnti: Rnti, enabled: bool);
}
