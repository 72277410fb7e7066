use lte_core::LcId;

use super::logical_channel_cfg::LogicalChannelCfg;

/// TS 36.331 6.3.2 DRB-ToAddMod. PDCP/RLC configuration is not carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrbToAddMod {
    pub eps_bearer_id: Option<u8>,
    /// 1..32
    pub drb_id: u8,
    /// 3..10
    pub lc_ch_id: LcId,
    pub lc_ch_cfg: Option<LogicalChannelCfg>,
}

impl DrbToAddMod {
    pub fn new(drb_id: u8, lc_ch_id: LcId) -> Self {
        Self { eps_bearer_id: None, drb_id, lc_ch_id, lc_ch_cfg: None }
    }
}
