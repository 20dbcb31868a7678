//! Core conversion building blocks. These are the pure scale formulas
//! consumed by the high-level `api` module.
pub mod convert;
