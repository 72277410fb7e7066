pub mod ho_prep_info;
pub mod rrc_conn_recfg;
pub mod rrc_conn_reest;
pub mod rrc_conn_setup;
