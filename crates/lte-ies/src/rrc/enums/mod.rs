pub mod bucket_size_duration;
pub mod cqi_report_mode_aperiodic;
pub mod prioritised_bit_rate;
pub mod transmission_mode;
