#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(unused_crate_dependencies)]

use std::{process::ExitCode, time::Instant};

use clap::Parser as _;
use colored::Colorize;
use numseq_builtins::build_native_lib_content;
use numseq_prettify::{PrettyPrintOptions, PrettyPrintable};
use numseq_runtime::{
    conf::RuntimeConf,
    context::{Context, ContextCreationParams},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use self::{
    args::{Args, RuntimeConfArgs},
    literals::{parse_arg, value_to_json},
    reports::{print_err, print_exec_error},
};

mod args;
mod literals;
mod reports;

/// Environment variable holding the default logging filter
const LOG_ENV_VAR: &str = "NUMSEQ_LOG";

fn main() -> ExitCode {
    let now = Instant::now();

    match inner_main(now) {
        Ok(code) => code,
        Err(err) => {
            print_err(err);
            ExitCode::FAILURE
        }
    }
}

fn inner_main(started: Instant) -> Result<ExitCode, String> {
    let Args {
        args,
        func,
        json,
        multiline,
        list_fns,
        timings,
        log_level,
        runtime_conf_args,
    } = Args::parse();

    init_logging(log_level.as_deref())?;

    let mut ctx = Context::new(
        ContextCreationParams {
            runtime_conf: convert_runtime_conf(runtime_conf_args),
        },
        build_native_lib_content(),
    );

    if list_fns {
        for (name, scope_fn) in ctx.list_fns() {
            println!(
                "{}{}",
                name.bright_blue(),
                scope_fn.signature.display_inline()
            );
        }

        return Ok(ExitCode::SUCCESS);
    }

    let args = args
        .iter()
        .map(|arg| parse_arg(arg).map_err(|err| format!("Invalid argument '{arg}': {err}")))
        .collect::<Result<Vec<_>, _>>()?;

    let before_call = Instant::now();

    let result = ctx.call_fn(&func, args);

    debug!(
        function = func.as_str(),
        elapsed_us = before_call.elapsed().as_micros() as u64,
        "call finished"
    );

    let code = match result {
        Ok(Some(value)) => {
            if json {
                let json = serde_json::to_string(&value_to_json(&value))
                    .map_err(|err| format!("Failed to serialize result: {err}"))?;

                println!("{json}");
            } else {
                let opts = if multiline {
                    PrettyPrintOptions::multiline()
                } else {
                    PrettyPrintOptions {
                        max_list_items: None,
                        ..PrettyPrintOptions::inline()
                    }
                };

                println!("{}", value.display(opts));
            }

            ExitCode::SUCCESS
        }

        Ok(None) => ExitCode::SUCCESS,

        Err(err) => {
            print_exec_error(&err);
            ExitCode::FAILURE
        }
    };

    if timings {
        eprintln!(
            "{}",
            format!(
                "* Call: {} ms\n* Total: {} ms",
                before_call.elapsed().as_millis(),
                started.elapsed().as_millis()
            )
            .bright_black()
        );
    }

    Ok(code)
}

/// Install the logging subscriber
///
/// Logs are written to stderr so they never mix with results.
fn init_logging(level: Option<&str>) -> Result<(), String> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level)
            .map_err(|err| format!("Invalid logging filter '{level}': {err}"))?,
        None => EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| format!("Failed to set up logging: {err}"))
}

fn convert_runtime_conf(args: RuntimeConfArgs) -> RuntimeConf {
    let RuntimeConfArgs { max_len } = args;

    RuntimeConf {
        max_list_len: max_len,
    }
}
