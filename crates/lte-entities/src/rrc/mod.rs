pub mod components;
pub mod mac_controller;
