pub mod antenna_info;
pub mod cqi_report_cfg;
pub mod drb_to_add_mod;
pub mod logical_channel_cfg;
pub mod mobility_control_info;
pub mod phys_cfg_ded;
pub mod pusch_cfg_ded;
pub mod rr_cfg_ded;
pub mod scell_to_add_mod;
pub mod sched_request_cfg;
pub mod setup_release;
pub mod srb_to_add_mod;
pub mod ue_capabilities;
