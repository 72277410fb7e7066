use super::logical_channel_cfg::LogicalChannelCfg;

/// logicalChannelConfig CHOICE of SRB-ToAddMod
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SrbLcChCfg {
    ExplicitValue(LogicalChannelCfg),
    DefaultValue,
}

/// TS 36.331 6.3.2 SRB-ToAddMod. RLC configuration is not carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SrbToAddMod {
    /// 1..2
    pub srb_id: u8,
    pub lc_ch_cfg: Option<SrbLcChCfg>,
}

impl SrbToAddMod {
    pub fn new(srb_id: u8) -> Self {
        Self { srb_id, lc_ch_cfg: None }
    }

    /// Explicitly signalled LogicalChannelConfig, if any
    pub fn explicit_lc_ch_cfg(&self) -> Option<&LogicalChannelCfg> {
        match &self.lc_ch_cfg {
            Some(SrbLcChCfg::ExplicitValue(cfg)) => Some(cfg),
            _ => None,
        }
    }
}
