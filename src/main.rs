use std::io::{self, BufWriter};

use quodigious::{
    diagnostics::{Diagnostic, QuodigiousError},
    input::InputLines,
    logging::init_logging,
    run,
};

fn main() {
    init_logging();

    let mut input = InputLines::new(io::stdin().lock());
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Err(err) = run(&mut input, &mut out) {
        if err.is_broken_pipe() {
            return;
        }
        fail(&err, input.text());
    }
}

fn fail(err: &QuodigiousError, source: &str) -> ! {
    eprintln!("{}", Diagnostic::from(err).render(Some(source)));
    std::process::exit(1);
}
