//!
//! numseq's native library
//!
//! This crate contains utilities to declare native functions, as well as the
//! functions injected into the global scope before any user code runs.
//!

#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(unused_crate_dependencies)]

mod functions;
mod helpers;

pub mod builder;

pub use self::{
    builder::build_native_lib_content,
    functions::range::{
        Progression, ProgressionIter, RANGE_ARITY, dispatch_range, range_bounds, range_count,
        range_stepped,
    },
    helpers::{
        args::{TypedValueEncoder, TypedValueParser},
        types as type_helpers,
    },
};
