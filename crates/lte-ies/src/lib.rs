//! Decoded LTE RRC information elements
//!
//! Structures in this crate are the output of the ASN.1 decoder and are consumed as-is by the
//! RRC entities. Optional IEs are modelled as `Option`, CHOICEs as enums. Only the subset of
//! fields relevant to MAC scheduler configuration is kept.

pub mod rrc;
