use ::std::fmt::Debug;

use numseq_builtins::{TypedValueParser, build_native_lib_content};
use numseq_prettify::PrettyPrintable;
use numseq_runtime::{
    conf::RuntimeConf,
    context::{Context, ContextCreationParams},
    errors::{ExecError, ExecErrorContent},
    values::RuntimeValue,
};

#[cfg(test)]
mod basics;

#[cfg(test)]
mod std;

/// Create a context with the full native library
pub fn create_context(runtime_conf: RuntimeConf) -> Context {
    Context::new(
        ContextCreationParams { runtime_conf },
        build_native_lib_content(),
    )
}

#[allow(clippy::result_large_err)]
pub fn run(
    name: &str,
    args: Vec<RuntimeValue>,
    runtime_conf: RuntimeConf,
) -> Result<Option<RuntimeValue>, (ExecError, Context)> {
    let mut ctx = create_context(runtime_conf);

    ctx.call_fn(name, args).map_err(|err| (err, ctx))
}

pub fn run_expect_success(name: &str, args: Vec<RuntimeValue>) -> Option<RuntimeValue> {
    match run(name, args, RuntimeConf::default()) {
        Ok(value) => value,
        Err((err, _)) => panic!("Call to {name}() failed: {err}"),
    }
}

pub fn run_expect_value(name: &str, args: Vec<RuntimeValue>) -> RuntimeValue {
    run_expect_success(name, args)
        .expect("Expected the function to return a value, but it returned nothing")
}

pub fn run_expect_value_of_type<T: TypedValueParser>(
    name: &str,
    args: Vec<RuntimeValue>,
) -> T::Parsed {
    let value = run_expect_value(name, args);

    T::parse(value.clone()).unwrap_or_else(|err| {
        panic!(
            "Function did not return the expected value type: {err}\n\n=> expected : {}\n=> got      : {}\n=> value    : {}",
            T::value_type().display_inline(),
            value.get_type().display_inline(),
            value.display_inline()
        )
    })
}

pub fn run_expect_specific_value<T: TypedValueParser>(
    name: &str,
    args: Vec<RuntimeValue>,
    expect: impl PartialEq<T::Parsed> + Debug,
) where
    T::Parsed: Debug,
{
    let got = run_expect_value_of_type::<T>(name, args);

    if expect != got {
        panic!(
            "Function returned incorrect value.\n\n=> expected : {expect:?}\n=> got      : {got:?}"
        );
    }
}

pub fn run_expect_error(name: &str, args: Vec<RuntimeValue>) -> ExecErrorContent {
    run_expect_error_with_conf(name, args, RuntimeConf::default())
}

pub fn run_expect_error_with_conf(
    name: &str,
    args: Vec<RuntimeValue>,
    runtime_conf: RuntimeConf,
) -> ExecErrorContent {
    match run(name, args, runtime_conf) {
        Ok(value) => panic!(
            "Call to {name}() succeeded, but expected it to fail (returned: {})",
            match value {
                Some(value) => value.display_inline().to_string(),
                None => "nothing".to_owned(),
            }
        ),

        Err((err, _)) => err.content,
    }
}
