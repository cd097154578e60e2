//! This module contains helpers that enable creating parts of the native library

pub mod args;
pub mod fns;
pub mod types;

/// Declare a set of native functions, each living in its own module
#[macro_export]
macro_rules! functions_set {
    (fn $set_name: ident => { $( mod $fn_name: ident; )* }) => {
        $( pub mod $fn_name; )*

        pub fn $set_name() -> Vec<$crate::helpers::fns::InternalFunction> {
            vec![ $( self::$fn_name::build_fn() ),* ]
        }
    };
}
