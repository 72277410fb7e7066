use lte_config::{CfgCell, StackConfig};
use lte_core::LcId;
use lte_ies::rrc::enums::bucket_size_duration::BucketSizeDuration;
use lte_ies::rrc::enums::cqi_report_mode_aperiodic::CqiReportModeAperiodic;
use lte_ies::rrc::enums::prioritised_bit_rate::PrioritisedBitRate;
use lte_ies::rrc::enums::transmission_mode::TransmissionMode;
use lte_ies::rrc::fields::antenna_info::{AntennaInfo, AntennaInfoDedicated};
use lte_ies::rrc::fields::cqi_report_cfg::{CqiReportCfg, CqiReportCfgSCell, CqiReportPeriodic};
use lte_ies::rrc::fields::drb_to_add_mod::DrbToAddMod;
use lte_ies::rrc::fields::logical_channel_cfg::{LogicalChannelCfg, UlSpecificParams};
use lte_ies::rrc::fields::phys_cfg_ded::{PhysCfgDed, PhysCfgDedSCell, PhysCfgDedSCellUl};
use lte_ies::rrc::fields::pusch_cfg_ded::PuschCfgDed;
use lte_ies::rrc::fields::rr_cfg_ded::{RrCfgDed, RrCfgDedSCell};
use lte_ies::rrc::fields::sched_request_cfg::SchedRequestCfg;
use lte_ies::rrc::fields::scell_to_add_mod::{CellIdentification, SCellToAddMod};
use lte_ies::rrc::fields::setup_release::SetupRelease;
use lte_ies::rrc::fields::srb_to_add_mod::SrbToAddMod;
use lte_ies::rrc::msgs::rrc_conn_recfg::RrcConnRecfg;
use lte_ies::rrc::msgs::rrc_conn_setup::RrcConnSetup;

pub const TEST_RNTI: u16 = 0x46;
pub const TEST_TEMP_RNTI: u16 = 0x47;

/// Creates a default config for testing: three cells, pci 1, 2 and 3.
/// It can still be modified as needed before wrapping it in a SharedConfig
pub fn default_test_config() -> StackConfig {
    let mut cells = vec![
        CfgCell::new(1, 3350),
        CfgCell::new(2, 3150),
        CfgCell::new(3, 2850),
    ];
    cells[0].pucch.delta_pucch_shift = 2;
    cells[0].pucch.n1_pucch_an = 20;
    cells[0].pucch.nrb_cqi = 2;
    cells[0].pucch.ncs_an = 1;

    let mut cfg = StackConfig::new(cells);
    cfg.mac.max_harq_tx = 5;
    cfg.cqi.period = 40;
    cfg.pusch.beta_offset_ack_idx = 9;
    cfg.pusch.beta_offset_ri_idx = 6;
    cfg.pusch.beta_offset_cqi_idx = 6;
    cfg
}

/// Dedicated PHY config as sent in RRCConnectionSetup: SR, periodic CQI, tm1
pub fn setup_phy_cfg() -> PhysCfgDed {
    PhysCfgDed {
        sched_request_cfg: Some(SetupRelease::Setup(SchedRequestCfg { sr_pucch_res_idx: 4, sr_cfg_idx: 17, dsr_trans_max: 64 })),
        cqi_report_cfg: Some(CqiReportCfg {
            cqi_report_mode_aperiodic: None,
            nom_pdsch_rs_epre_offset: 0,
            cqi_report_periodic: Some(SetupRelease::Setup(CqiReportPeriodic {
                cqi_pucch_res_idx: 3,
                cqi_pmi_cfg_idx: 38,
                subband_cqi_k: None,
                ri_cfg_idx: None,
                simul_ack_nack_and_cqi: false,
            })),
        }),
        ant_info: Some(AntennaInfo::ExplicitValue(AntennaInfoDedicated {
            transmission_mode: TransmissionMode::Tm1,
            codebook_subset_restriction: None,
            ue_tx_antenna_selection: None,
        })),
        ..Default::default()
    }
}

pub fn conn_setup_msg() -> RrcConnSetup {
    RrcConnSetup {
        rrc_transaction_id: 0,
        rr_cfg_ded: RrCfgDed {
            srb_to_add_mod_list: Some(vec![SrbToAddMod::new(1)]),
            phys_cfg_ded: Some(setup_phy_cfg()),
            ..Default::default()
        },
    }
}

pub fn drb(drb_id: u8, lc_ch_id: LcId) -> DrbToAddMod {
    DrbToAddMod {
        eps_bearer_id: Some(drb_id + 4),
        ..DrbToAddMod::new(drb_id, lc_ch_id)
    }
}

pub fn drb_with_params(drb_id: u8, lc_ch_id: LcId, priority: u8, lc_ch_group: u8) -> DrbToAddMod {
    DrbToAddMod {
        lc_ch_cfg: Some(LogicalChannelCfg {
            ul_specific_params: Some(UlSpecificParams {
                priority,
                prioritised_bit_rate: PrioritisedBitRate::Kbps64,
                bucket_size_duration: BucketSizeDuration::Ms50,
                lc_ch_group: Some(lc_ch_group),
            }),
        }),
        ..drb(drb_id, lc_ch_id)
    }
}

pub fn scell(scell_idx: u8, pci: u16) -> SCellToAddMod {
    SCellToAddMod {
        scell_idx_r10: scell_idx,
        cell_identification_r10: Some(CellIdentification { pci_r10: pci, dl_carrier_freq_r10: 3150 }),
        rr_cfg_ded_scell_r10: Some(RrCfgDedSCell {
            phys_cfg_ded_scell_r10: Some(PhysCfgDedSCell {
                ul_cfg_r10: Some(PhysCfgDedSCellUl {
                    cqi_report_cfg_scell_r10: Some(CqiReportCfgSCell {
                        cqi_report_mode_aperiodic_r10: Some(CqiReportModeAperiodic::Rm30),
                        ..Default::default()
                    }),
                }),
            }),
        }),
    }
}

/// First RRCConnectionReconfiguration after attach: SRB2, DRBs, PUSCH offsets and optional SCells
pub fn recfg_msg(drbs: &[DrbToAddMod], scells: Vec<SCellToAddMod>) -> RrcConnRecfg {
    let mut recfg = RrcConnRecfg {
        rrc_transaction_id: 1,
        mob_ctrl_info: None,
        rr_cfg_ded: Some(RrCfgDed {
            srb_to_add_mod_list: Some(vec![SrbToAddMod::new(2)]),
            drb_to_add_mod_list: (!drbs.is_empty()).then(|| drbs.to_vec()),
            drb_to_release_list: None,
            phys_cfg_ded: Some(PhysCfgDed {
                pusch_cfg_ded: Some(PuschCfgDed { beta_offset_ack_idx: 10, beta_offset_ri_idx: 11, beta_offset_cqi_idx: 12 }),
                ..Default::default()
            }),
        }),
        non_crit_ext: None,
    };
    if !scells.is_empty() {
        recfg.set_scell_to_add_mod_list(scells);
    }
    recfg
}
