use std::{
    io::{self, Write},
    process::ExitCode,
};

use calc::{cli, logging};

fn main() -> ExitCode {
    logging::init_from_env();

    let stdin = io::stdin();
    let stdout = io::stdout();
    match cli::run(stdin.lock(), stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            let mut stdout = stdout.lock();
            let _ = writeln!(stdout, "{}", err);
            ExitCode::from(cli::FAILURE_EXIT_CODE)
        }
    }
}
