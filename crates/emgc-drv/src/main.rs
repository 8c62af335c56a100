use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(error) = emgc_drv::run(&args) {
        eprintln!("{}", error);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
