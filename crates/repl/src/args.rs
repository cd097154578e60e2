use clap::Parser;

/// Command line arguments of numseq's binary
#[derive(Parser)]
#[clap(
    name = "numseq",
    version,
    about = "Call numseq's native functions from the command line"
)]
pub struct Args {
    #[clap(
        help = "Arguments to call the function with, as JSON literals (other inputs are passed as strings, 'undefined' is accepted)",
        allow_negative_numbers = true
    )]
    pub args: Vec<String>,

    #[clap(long = "fn", default_value = "range", help = "Name of the function to call")]
    pub func: String,

    #[clap(long, help = "Print the result as JSON")]
    pub json: bool,

    #[clap(
        long,
        help = "Print the result over multiple lines",
        conflicts_with = "json"
    )]
    pub multiline: bool,

    #[clap(long, help = "List the native functions and exit")]
    pub list_fns: bool,

    #[clap(short, long, help = "Display timings")]
    pub timings: bool,

    #[clap(
        long,
        help = "Logging filter, e.g. 'debug' (overrides the NUMSEQ_LOG environment variable)"
    )]
    pub log_level: Option<String>,

    #[clap(flatten)]
    pub runtime_conf_args: RuntimeConfArgs,
}

#[derive(clap::Args, Clone)]
pub struct RuntimeConfArgs {
    #[clap(long, help = "Maximum number of items a function may put in a list")]
    pub max_len: Option<usize>,
}
