//! Career Compass - Career Guidance for Indian Secondary-School Students
//!
//! This crate implements the adaptive career aptitude quiz and the
//! cached translation layer behind the guidance platform: question
//! sequencing with AI generation and deterministic fallbacks, stream
//! scoring, and best-effort localization of UI content.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
