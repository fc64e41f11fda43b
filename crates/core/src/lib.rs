//! Core logic for the FX services.
//!
//! This crate contains the static rate table and conversion arithmetic with
//! ZERO web dependencies.
//!
//! # Modules
//!
//! - `currency` - Rate table lookups and amount conversion

pub mod currency;
