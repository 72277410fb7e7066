use super::drb_to_add_mod::DrbToAddMod;
use super::phys_cfg_ded::{PhysCfgDed, PhysCfgDedSCell};
use super::srb_to_add_mod::SrbToAddMod;

/// TS 36.331 6.3.2 RadioResourceConfigDedicated
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RrCfgDed {
    pub srb_to_add_mod_list: Option<Vec<SrbToAddMod>>,
    pub drb_to_add_mod_list: Option<Vec<DrbToAddMod>>,
    pub drb_to_release_list: Option<Vec<u8>>,
    pub phys_cfg_ded: Option<PhysCfgDed>,
}

/// TS 36.331 6.3.2 RadioResourceConfigDedicatedSCell-r10
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RrCfgDedSCell {
    pub phys_cfg_ded_scell_r10: Option<PhysCfgDedSCell>,
}
