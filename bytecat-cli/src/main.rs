use std::io::{self, BufWriter, Write};

use clap::Parser;

mod cli;
mod util;

use cli::Cli;

fn main() {
    env_logger::init();

    let args = Cli::parse();
    let options = args.copy_options();
    let paths = args.paths_or_stdin();

    let stdout = io::stdout();
    let mut sink = BufWriter::new(stdout.lock());

    let clean = util::concatenate(&paths, &options, &mut sink);

    if let Err(e) = sink.flush() {
        eprintln!("bytecat: {}", e);
        std::process::exit(1);
    }
    if !clean {
        std::process::exit(1);
    }
}
