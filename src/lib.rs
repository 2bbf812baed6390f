//! Employee Directory - CRUD service with an AI query endpoint
//!
//! This crate keeps an in-memory employee directory behind a REST API and
//! answers natural-language questions about it through an LLM provider.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
