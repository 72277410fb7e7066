use crate::rrc::fields::mobility_control_info::MobilityControlInfo;
use crate::rrc::fields::rr_cfg_ded::RrCfgDed;
use crate::rrc::fields::scell_to_add_mod::SCellToAddMod;

/// TS 36.331 6.2.2 RRCConnectionReconfiguration-v1020-IEs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RrcConnRecfgV1020 {
    pub scell_to_release_list_r10: Option<Vec<u8>>,
    pub scell_to_add_mod_list_r10: Option<Vec<SCellToAddMod>>,
}

/// TS 36.331 6.2.2 RRCConnectionReconfiguration-v920-IEs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RrcConnRecfgV920 {
    pub full_cfg_r9: bool,
    pub non_crit_ext: Option<RrcConnRecfgV1020>,
}

/// TS 36.331 6.2.2 RRCConnectionReconfiguration-v890-IEs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RrcConnRecfgV890 {
    pub non_crit_ext: Option<RrcConnRecfgV920>,
}

/// TS 36.331 6.2.2 RRCConnectionReconfiguration-r8-IEs
/// Dedicated NAS info and security config are consumed elsewhere and not carried.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RrcConnRecfg {
    /// 0..3
    pub rrc_transaction_id: u8,
    pub mob_ctrl_info: Option<MobilityControlInfo>,
    pub rr_cfg_ded: Option<RrCfgDed>,
    pub non_crit_ext: Option<RrcConnRecfgV890>,
}

impl RrcConnRecfg {
    /// SCell additions, only reachable through the v890 -> v920 -> v1020 extension chain
    pub fn scell_to_add_mod_list(&self) -> Option<&[SCellToAddMod]> {
        self.non_crit_ext.as_ref()
            .and_then(|v890| v890.non_crit_ext.as_ref())
            .and_then(|v920| v920.non_crit_ext.as_ref())
            .and_then(|v1020| v1020.scell_to_add_mod_list_r10.as_deref())
    }

    /// Convenience setter that creates the intermediate extension containers
    pub fn set_scell_to_add_mod_list(&mut self, list: Vec<SCellToAddMod>) {
        let v920 = self.non_crit_ext.get_or_insert_with(Default::default)
            .non_crit_ext.get_or_insert_with(Default::default);
        v920.non_crit_ext.get_or_insert_with(Default::default).scell_to_add_mod_list_r10 = Some(list);
    }
}
