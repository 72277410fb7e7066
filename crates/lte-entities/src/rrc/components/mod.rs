pub mod activation;
pub mod bearer_defaults;
pub mod bearer_list;
pub mod cell_list;
pub mod cfg_buffers;
pub mod phy_cfg;
pub mod reconf_updates;
pub mod srb_updates;
