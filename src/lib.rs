//! Capture lifecycle tracking and daily traffic aggregation for a VPN gateway.
//!
//! A single directory holds raw captures (`.pcap`) and the CSV reports generated
//! from them. [`capture`] derives each capture's processing status from that
//! directory, [`traffic`] folds the daily report names into a date-ordered index,
//! and [`api`] exposes both over HTTP.

pub mod api;
pub mod capture;
pub mod models;
pub mod traffic;
pub mod utils;
