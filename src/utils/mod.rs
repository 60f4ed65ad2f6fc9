//! Shared numeric constants

pub mod constants;
