//! Act script runner CLI.

use actc::commands::{check_file, run_file, tokens_file};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        print_usage();
        std::process::exit(2);
    }

    let code = match args[1].as_str() {
        "run" => run_file(&args[2]),
        "check" => check_file(&args[2]),
        "tokens" => tokens_file(&args[2]),
        other => {
            eprintln!("error: unknown command `{other}`");
            print_usage();
            2
        }
    };
    std::process::exit(code);
}

fn print_usage() {
    eprintln!("Usage: act <command> <file.act>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run      Parse and execute a script");
    eprintln!("  check    Parse a script and report diagnostics");
    eprintln!("  tokens   Dump the token list");
}
