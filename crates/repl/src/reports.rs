use colored::Colorize;
use numseq_runtime::errors::ExecError;

pub fn print_exec_error(err: &ExecError) {
    let ExecError { at, content, note } = err;

    eprintln!("{} {}", "Error:".bright_red().bold(), content.to_string().bright_red());
    eprintln!("  {} {at}", "-->".bright_blue());

    if let Some(note) = note {
        eprintln!("  {} {note}", "note:".bright_yellow());
    }
}

pub fn print_err(msg: impl AsRef<str>) {
    eprintln!("{}", msg.as_ref().bright_red());
}
