use lte_core::{Direction, LcId, MAX_LC_ID, is_srb_lcid};
use lte_ies::rrc::fields::drb_to_add_mod::DrbToAddMod;
use lte_sched::UeSchedCfg;

use super::bearer_defaults::default_drb;

/// Sets the active flag of every SCell from `scell_mask`, bit `i` standing for UE carrier `i`.
/// The PCell is never touched.
pub fn with_scell_activation(ue_cfg: &UeSchedCfg, scell_mask: u32) -> UeSchedCfg {
    let mut cfg = ue_cfg.clone();
    for (ue_cc_idx, cc) in cfg.supported_cc_list.iter_mut().enumerate().skip(1) {
        cc.active = ue_cc_idx < 32 && scell_mask & (1 << ue_cc_idx) != 0;
    }
    cfg
}

/// Freezes (Idle) or resumes (Both) the established DRBs that already have a scheduler entry.
/// Signalling bearers and DRBs unknown to the scheduler are left alone.
pub fn with_drb_activation(ue_cfg: &UeSchedCfg, drbs: &[DrbToAddMod], active: bool) -> UeSchedCfg {
    let mut cfg = ue_cfg.clone();
    let direction = if active { Direction::Both } else { Direction::Idle };
    for drb in drbs.iter().filter(|drb| is_drb_lcid(drb.lc_ch_id)) {
        if let Some(bearer) = cfg.ue_bearers.get_mut(&drb.lc_ch_id) {
            bearer.direction = direction;
        }
    }
    cfg
}

/// Re-derives the scheduler entry of every established DRB from its logical channel config
pub fn apply_established_drbs(ue_cfg: &UeSchedCfg, drbs: &[DrbToAddMod]) -> UeSchedCfg {
    let mut cfg = ue_cfg.clone();
    for drb in drbs {
        if !is_drb_lcid(drb.lc_ch_id) {
            tracing::warn!("Invalid lcid {} for DRB {}", drb.lc_ch_id, drb.drb_id);
            continue;
        }
        let mut bcfg = default_drb();
        if let Some(ul) = drb.lc_ch_cfg.as_ref().and_then(|lc| lc.ul_specific_params.as_ref()) {
            bcfg.pbr = ul.prioritised_bit_rate.to_number();
            bcfg.priority = ul.priority;
            bcfg.bsd = ul.bucket_size_duration.to_number();
            if let Some(group) = ul.lc_ch_group {
                bcfg.group = group;
            }
        }
        cfg.ue_bearers.insert(drb.lc_ch_id, bcfg);
    }
    cfg
}

fn is_drb_lcid(lcid: LcId) -> bool {
    !is_srb_lcid(lcid) && lcid <= MAX_LC_ID
}
