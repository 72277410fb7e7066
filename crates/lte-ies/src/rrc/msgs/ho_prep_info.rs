use crate::rrc::fields::rr_cfg_ded::RrCfgDed;
use crate::rrc::fields::ue_capabilities::UeCapabilities;

/// TS 36.331 10.3 AS-Config. Measurement and antenna config are not carried.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AsCfg {
    pub source_rr_cfg: RrCfgDed,
    /// Source C-RNTI
    pub source_ue_identity: u16,
    pub source_dl_carrier_freq: u32,
}

/// TS 36.331 10.2.2 HandoverPreparationInformation-r8-IEs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HoPrepInfo {
    pub ue_capabilities: Option<UeCapabilities>,
    pub as_cfg: Option<AsCfg>,
}
