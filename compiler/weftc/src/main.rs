//! Weft CLI

use weftc::commands::{check_file, includes_file, parse_file, USAGE};

fn main() {
    weftc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: weftc parse <file.weft>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: weftc check <file.weft> [options]");
                std::process::exit(1);
            }
            check_file(&args[2], &args[3..]);
        }
        "includes" => {
            if args.len() < 3 {
                eprintln!("Usage: weftc includes <file.weft> [options]");
                std::process::exit(1);
            }
            includes_file(&args[2], &args[3..]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("weftc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    print!("{USAGE}");
}
