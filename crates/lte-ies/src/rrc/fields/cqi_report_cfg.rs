use crate::rrc::enums::cqi_report_mode_aperiodic::CqiReportModeAperiodic;

use super::setup_release::SetupRelease;

/// TS 36.331 6.3.2 CQI-ReportPeriodic, setup branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CqiReportPeriodic {
    /// 0..1185
    pub cqi_pucch_res_idx: u16,
    /// 0..1023
    pub cqi_pmi_cfg_idx: u16,
    /// Wideband CQI only when None, else subband K (1..4)
    pub subband_cqi_k: Option<u8>,
    /// 0..1023
    pub ri_cfg_idx: Option<u16>,
    pub simul_ack_nack_and_cqi: bool,
}

/// TS 36.331 6.3.2 CQI-ReportConfig
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CqiReportCfg {
    pub cqi_report_mode_aperiodic: Option<CqiReportModeAperiodic>,
    /// -1..6
    pub nom_pdsch_rs_epre_offset: i8,
    pub cqi_report_periodic: Option<SetupRelease<CqiReportPeriodic>>,
}

/// TS 36.331 6.3.2 CQI-ReportConfig-v1250, only the alternative CQI table is of interest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CqiReportCfgV1250 {
    /// altCQI-Table-r12, enumerated allSubframes/csi-SubframeSet1/csi-SubframeSet2/spare1
    pub alt_cqi_table_r12: Option<u8>,
}

/// TS 36.331 6.3.2 CQI-ReportConfigSCell-r10
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CqiReportCfgSCell {
    pub cqi_report_mode_aperiodic_r10: Option<CqiReportModeAperiodic>,
    /// -1..6
    pub nom_pdsch_rs_epre_offset_r10: i8,
    pub cqi_report_periodic_scell_r10: Option<SetupRelease<CqiReportPeriodic>>,
}
