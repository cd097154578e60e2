#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(unused_crate_dependencies)]

//!
//! numseq's host runtime
//!
//! This crate contains the value model exposed to scripts, its numeric coercion
//! rules, the runtime errors, and the context holding the global functions.
//!

pub mod coercion;
pub mod conf;
pub mod context;
pub mod errors;
pub mod functions;
pub mod pretty_impl;
pub mod values;
