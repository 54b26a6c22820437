//! HTTP controllers: thin adapters from extractors to services

pub mod echo;
pub mod stats;
