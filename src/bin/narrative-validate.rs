use std::process::ExitCode;

fn main() -> ExitCode {
    narrative_validator::cli::main_entry()
}
