//! Process entry helpers: argument parsing and error reporting.

/// Report a failed run on stderr and exit with code 1.
///
/// The whole context chain is printed, outermost first, so a failure reads
/// like "writing out.sfd: No such file or directory".
pub fn handle_error(error: anyhow::Error) -> ! {
    eprintln!("Error: {error:#}");
    std::process::exit(1);
}

/// Parse the command line. Usage errors exit with code 2 inside clap.
pub fn get_cli_args() -> crate::core::cli::CliArgs {
    use clap::Parser;
    crate::core::cli::CliArgs::parse()
}
