use numseq_runtime::{context::ScopeContent, functions::ScopeFn};

use crate::{functions::native_functions, helpers::fns::InternalFunction};

/// Definition of the native library
pub struct NativeLibDefinition {
    pub functions: Vec<InternalFunction>,
}

/// Generate definitions of the native library
pub fn define_native_lib() -> NativeLibDefinition {
    NativeLibDefinition {
        functions: native_functions(),
    }
}

/// Build the content of the native library
pub fn build_native_lib_content() -> ScopeContent {
    let NativeLibDefinition { functions } = define_native_lib();

    ScopeContent {
        fns: functions
            .into_iter()
            .map(|func| {
                let InternalFunction {
                    name,
                    signature,
                    run,
                } = func;

                (
                    name.to_owned(),
                    ScopeFn {
                        signature,
                        body: run,
                    },
                )
            })
            .collect(),
    }
}
