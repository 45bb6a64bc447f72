use std::io;

fn main() {
    puntobanco_cli::init_logging();
    let code = puntobanco_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
