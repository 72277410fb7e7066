use lte_config::CfgCqi;
use lte_core::{UE_PCELL_CC_IDX, assert_warn};
use lte_ies::rrc::enums::transmission_mode::TransmissionMode;
use lte_ies::rrc::fields::antenna_info::{AntennaInfo, AntennaInfoDedicated, CodebookSubsetRestriction, UeTxAntennaSelection};
use lte_ies::rrc::fields::phys_cfg_ded::PhysCfgDed;
use lte_ies::rrc::fields::setup_release::SetupRelease;
use lte_sched::{AntInfoDed, CodebookType, TxMode, UeSchedCfg, UeTxAntSel};

/// Returns `ue_cfg` with the PHY ConfigurationDedicated of an RRC message applied:
/// SR resources, PCell CQI reporting and antenna configuration.
pub fn apply_phy_cfg_ded(ue_cfg: &UeSchedCfg, phy_cfg: &PhysCfgDed, cqi_cfg: &CfgCqi) -> UeSchedCfg {
    let mut cfg = ue_cfg.clone();

    // SR config
    match &phy_cfg.sched_request_cfg {
        Some(SetupRelease::Setup(sr)) => {
            cfg.pucch_cfg.sr_configured = true;
            cfg.pucch_cfg.i_sr = sr.sr_cfg_idx as u32;
            cfg.pucch_cfg.n_pucch_sr = sr.sr_pucch_res_idx as u32;
        }
        Some(SetupRelease::Release) => {
            cfg.pucch_cfg.sr_configured = false;
        }
        None => {}
    }

    assert_warn!(cfg.has_active_pcell(), "dedicated PHY config applied without active PCell");

    // CQI config
    if let Some(cqi) = &phy_cfg.cqi_report_cfg {
        if let Some(periodic) = cqi.cqi_report_periodic.as_ref().and_then(|p| p.setup()) {
            cfg.pucch_cfg.n_pucch = periodic.cqi_pucch_res_idx as u32;
            let pcell = cfg.ensure_cc(UE_PCELL_CC_IDX);
            pcell.dl_cfg.cqi_report.pmi_idx = periodic.cqi_pmi_cfg_idx as u32;
            pcell.dl_cfg.cqi_report.periodic_configured = true;
        } else if cqi.cqi_report_mode_aperiodic.is_some() {
            let pcell = cfg.ensure_cc(UE_PCELL_CC_IDX);
            pcell.aperiodic_cqi_period = cqi_cfg.period;
            pcell.dl_cfg.cqi_report.aperiodic_configured = true;
        }
    }

    // Antenna config
    match &phy_cfg.ant_info {
        Some(AntennaInfo::ExplicitValue(ant_info)) => {
            cfg.dl_ant_info = make_ant_info_ded(ant_info);
        }
        Some(AntennaInfo::DefaultValue) => {
            tracing::warn!("No antenna configuration provided, falling back to tm1");
            cfg.ensure_cc(UE_PCELL_CC_IDX).dl_cfg.tm = TxMode::Tm1;
            cfg.dl_ant_info.tx_mode = TxMode::Tm1;
        }
        None => {}
    }

    cfg
}

/// Translates AntennaInfoDedicated into the scheduler representation
pub fn make_ant_info_ded(ant_info: &AntennaInfoDedicated) -> AntInfoDed {
    let tx_mode = match ant_info.transmission_mode {
        TransmissionMode::Tm1 => TxMode::Tm1,
        TransmissionMode::Tm2 => TxMode::Tm2,
        TransmissionMode::Tm3 => TxMode::Tm3,
        TransmissionMode::Tm4 => TxMode::Tm4,
        TransmissionMode::Tm5 => TxMode::Tm5,
        TransmissionMode::Tm6 => TxMode::Tm6,
        TransmissionMode::Tm7 => TxMode::Tm7,
        TransmissionMode::Tm8V920 => TxMode::Tm8,
    };

    let (cb_type, codebook_subset_restrict) = match ant_info.codebook_subset_restriction {
        None => (CodebookType::None, 0),
        Some(CodebookSubsetRestriction::N2TxAntTm3(v)) => (CodebookType::N2TxAntTm3, v as u64),
        Some(CodebookSubsetRestriction::N4TxAntTm3(v)) => (CodebookType::N4TxAntTm3, v as u64),
        Some(CodebookSubsetRestriction::N2TxAntTm4(v)) => (CodebookType::N2TxAntTm4, v as u64),
        Some(CodebookSubsetRestriction::N4TxAntTm4(v)) => (CodebookType::N4TxAntTm4, v),
        Some(CodebookSubsetRestriction::N2TxAntTm5(v)) => (CodebookType::N2TxAntTm5, v as u64),
        Some(CodebookSubsetRestriction::N4TxAntTm5(v)) => (CodebookType::N4TxAntTm5, v as u64),
        Some(CodebookSubsetRestriction::N2TxAntTm6(v)) => (CodebookType::N2TxAntTm6, v as u64),
        Some(CodebookSubsetRestriction::N4TxAntTm6(v)) => (CodebookType::N4TxAntTm6, v as u64),
    };

    let ue_tx_ant_sel = match ant_info.ue_tx_antenna_selection {
        None => UeTxAntSel::Release,
        Some(UeTxAntennaSelection::ClosedLoop) => UeTxAntSel::ClosedLoop,
        Some(UeTxAntennaSelection::OpenLoop) => UeTxAntSel::OpenLoop,
    };

    AntInfoDed { tx_mode, cb_type, codebook_subset_restrict, ue_tx_ant_sel }
}
