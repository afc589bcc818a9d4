// src/specs/mod.rs
//! # Page “specs”
//!
//! Page-specific extraction rules: *where the ground truth lives in the HTML*
//! and *how to pull it out robustly*.
//!
//! ## What lives here
//! - **Pure parsing** of fetched markup; no network, no store.
//! - **Selection rules** (e.g. "first emphasized integer ≤ 100") expressed as
//!   functions over plain strings so they can be tested offline.
//!
//! ## What does **not** live here
//! - Fetching (`core::net`) and persistence (`store`) – the collector wires
//!   those around a spec.
//!
//! ## Typical call chain
//! ```text
//! collect → Collector::run → core::net::http_get
//!                         ↘  specs::occupancy::extract → Reading
//!                            Store::append
//! ```
pub mod occupancy;
