//! HTTP surface for the monitoring service

pub mod rest;
