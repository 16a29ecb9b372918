//! router-restart: Router WAN Reconnect & Reboot
//!
//! A library for authenticating against a home router's embedded HTTP
//! administration interface and issuing a reconnect cycle or a reboot.

pub mod config;
pub mod router;
