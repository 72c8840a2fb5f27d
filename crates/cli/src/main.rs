use std::process::ExitCode;

fn main() -> ExitCode {
    stagepass_cli::run()
}
