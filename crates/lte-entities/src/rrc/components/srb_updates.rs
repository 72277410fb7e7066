use lte_core::{Direction, MAX_LC_ID, RbId};
use lte_ies::rrc::fields::srb_to_add_mod::SrbToAddMod;
use lte_sched::{BearerCfg, UeSchedCfg};

use super::bearer_defaults::{default_control_bearer, default_srb2};

/// Returns `ue_cfg` with the SRBs of an SRB-ToAddModList (re)configured.
/// Explicit UL-specific parameters are mirrored onto the DL side of the bearer.
pub fn apply_srb_updates(ue_cfg: &UeSchedCfg, srbs: &[SrbToAddMod]) -> UeSchedCfg {
    let mut cfg = ue_cfg.clone();

    for srb in srbs {
        let mut bcfg = match RbId::try_from(srb.srb_id) {
            Ok(RbId::Srb1) => default_control_bearer(),
            Ok(RbId::Srb2) => default_srb2(),
            _ => {
                tracing::warn!("Invalid SRB ID {}", srb.srb_id);
                if srb.srb_id <= MAX_LC_ID {
                    cfg.ue_bearers.insert(srb.srb_id, BearerCfg::default());
                }
                continue;
            }
        };

        bcfg.direction = Direction::Both;
        if let Some(ul) = srb.explicit_lc_ch_cfg().and_then(|lc| lc.ul_specific_params.as_ref()) {
            bcfg.pbr = ul.prioritised_bit_rate.to_number();
            bcfg.priority = ul.priority;
            bcfg.bsd = ul.bucket_size_duration.to_number();
            if let Some(group) = ul.lc_ch_group {
                bcfg.group = group;
            }
        }
        cfg.ue_bearers.insert(srb.srb_id, bcfg);
    }

    cfg
}
