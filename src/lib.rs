//! writeflow - REST backend for the WriteFlow blogging platform

pub mod config;
pub mod db;
pub mod http_server;
