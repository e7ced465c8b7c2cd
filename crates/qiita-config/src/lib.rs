//! Configuration for the qiita bindings.
//!
//! This crate loads and saves `qiita.yaml` files and turns their `decode`
//! section into a ready-to-use [`Decoder`](qiita_core::Decoder).

pub mod config;

pub use config::{ConfigError, DecodeConfig, QiitaConfig, load_config, save_config};
