use lte_config::CfgCqi;
use lte_core::MAX_CARRIERS;
use lte_ies::rrc::fields::scell_to_add_mod::SCellToAddMod;
use lte_ies::rrc::fields::ue_capabilities::UeCapabilities;
use lte_ies::rrc::msgs::rrc_conn_recfg::RrcConnRecfg;
use lte_sched::UeSchedCfg;

use super::cell_list::CarrierResolver;
use super::srb_updates::apply_srb_updates;

/// Returns `ue_cfg` with the parts of an RRCConnectionReconfiguration applied that only take
/// effect once the UE has acknowledged it: 256QAM table, UCI offsets, SRBs, SCells and UL 64QAM.
pub fn apply_reconf_complete_updates(
    ue_cfg: &UeSchedCfg,
    recfg: &RrcConnRecfg,
    cells: &dyn CarrierResolver,
    uecaps: &UeCapabilities,
    cqi_cfg: &CfgCqi,
) -> UeSchedCfg {
    let mut cfg = ue_cfg.clone();

    if let Some(rr_cfg) = &recfg.rr_cfg_ded {
        if let Some(phy_cfg) = &rr_cfg.phys_cfg_ded {
            if phy_cfg.cqi_report_cfg_pcell_v1250.is_some_and(|v1250| v1250.alt_cqi_table_r12.is_some()) {
                cfg.use_tbs_index_alt = true;
            }
            if let Some(pusch) = &phy_cfg.pusch_cfg_ded {
                cfg.uci_offset.i_offset_ack = pusch.beta_offset_ack_idx as u32;
                cfg.uci_offset.i_offset_cqi = pusch.beta_offset_cqi_idx as u32;
                cfg.uci_offset.i_offset_ri = pusch.beta_offset_ri_idx as u32;
            }
        }

        if let Some(srbs) = &rr_cfg.srb_to_add_mod_list {
            cfg = apply_srb_updates(&cfg, srbs);
        }
    }

    if let Some(scells) = recfg.scell_to_add_mod_list() {
        apply_scell_updates(&mut cfg, scells, cells, cqi_cfg);
    }

    if uecaps.support_ul_64qam {
        cfg.support_ul_64qam = true;
    }

    cfg
}

fn apply_scell_updates(cfg: &mut UeSchedCfg, scells: &[SCellToAddMod], cells: &dyn CarrierResolver, cqi_cfg: &CfgCqi) {
    for scell in scells {
        let ue_cc_idx = scell.scell_idx_r10 as usize;
        if ue_cc_idx == 0 || ue_cc_idx >= MAX_CARRIERS {
            tracing::warn!("Invalid SCell index {}", ue_cc_idx);
            continue;
        }

        let Some(carrier) = cells.get_ue_cc(ue_cc_idx) else {
            tracing::warn!("SCell index {} has no eNB carrier assigned", ue_cc_idx);
            continue;
        };
        let cc = cfg.ensure_cc(ue_cc_idx);
        cc.active = true;
        cc.enb_cc_idx = carrier.enb_cc_idx;

        let cqi = scell.rr_cfg_ded_scell_r10.as_ref()
            .and_then(|rr| rr.phys_cfg_ded_scell_r10.as_ref())
            .and_then(|phy| phy.ul_cfg_r10.as_ref())
            .and_then(|ul| ul.cqi_report_cfg_scell_r10.as_ref());
        let Some(cqi) = cqi else {
            continue;
        };

        if let Some(periodic) = cqi.cqi_report_periodic_scell_r10.as_ref().and_then(|p| p.setup()) {
            cc.dl_cfg.cqi_report.periodic_configured = true;
            cc.dl_cfg.cqi_report.pmi_idx = periodic.cqi_pmi_cfg_idx as u32;
        } else if let Some(mode) = cqi.cqi_report_mode_aperiodic_r10 {
            tracing::trace!("SCell index {} aperiodic CQI {}", ue_cc_idx, mode);
            cc.dl_cfg.cqi_report.aperiodic_configured = true;
            cc.aperiodic_cqi_period = cqi_cfg.period;
        } else {
            tracing::warn!("Invalid CQI configuration for SCell index {}", ue_cc_idx);
        }
    }
}
