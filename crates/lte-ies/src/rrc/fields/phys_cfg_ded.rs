use super::antenna_info::AntennaInfo;
use super::cqi_report_cfg::{CqiReportCfg, CqiReportCfgSCell, CqiReportCfgV1250};
use super::pusch_cfg_ded::PuschCfgDed;
use super::sched_request_cfg::SchedRequestCfg;
use super::setup_release::SetupRelease;

/// TS 36.331 6.3.2 PhysicalConfigDedicated
/// Fields not relevant for MAC scheduling (PDSCH power, TPC, SRS, ...) are not carried.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhysCfgDed {
    pub pusch_cfg_ded: Option<PuschCfgDed>,
    pub cqi_report_cfg: Option<CqiReportCfg>,
    pub ant_info: Option<AntennaInfo>,
    pub sched_request_cfg: Option<SetupRelease<SchedRequestCfg>>,
    /// cqi-ReportConfigPCell-v1250 extension
    pub cqi_report_cfg_pcell_v1250: Option<CqiReportCfgV1250>,
}

/// TS 36.331 6.3.2 PhysicalConfigDedicatedSCell-r10, UL part
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhysCfgDedSCellUl {
    pub cqi_report_cfg_scell_r10: Option<CqiReportCfgSCell>,
}

/// TS 36.331 6.3.2 PhysicalConfigDedicatedSCell-r10
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhysCfgDedSCell {
    pub ul_cfg_r10: Option<PhysCfgDedSCellUl>,
}
