//! airplane-registry - records airplanes, their manufacturer/model pairing
//! and a mutable next destination.
//!
//! Layers, leaf to root:
//! - [`catalog`]: closed manufacturer and model catalogs, valid pairings
//! - [`validation`]: field-level rules applied before any write
//! - [`storage`]: tables with constraint enforcement and commit/rollback
//! - [`service`]: create/read/update/delete orchestration
//! - [`http_server`], [`cli`]: transport and bootstrap

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod service;
pub mod storage;
pub mod validation;
