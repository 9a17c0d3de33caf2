//! calc CLI.

use calcc::commands::{eval_text, explain_error, parse_run_args, run_file, RunOptions};

fn main() {
    calcc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let (options, path) = run_args_or_exit(&args[2..], "Usage: calc run <file.calc> [options]");
            run_file(&path, &options);
        }
        "eval" => {
            let (options, source) = run_args_or_exit(&args[2..], "Usage: calc eval <source> [options]");
            eval_text(&source, &options);
        }
        "explain" | "--explain" => {
            if args.len() < 3 {
                eprintln!("Usage: calc explain <ERROR_CODE>");
                eprintln!("Example: calc explain E2001");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("calc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // If it looks like a file path, try to run it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("calc"))
            {
                let (options, path) = run_args_or_exit(&args[1..], "Usage: calc <file.calc> [options]");
                run_file(&path, &options);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn run_args_or_exit(args: &[String], usage: &str) -> (RunOptions, String) {
    match parse_run_args(args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!("{usage}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("calc - a small s-expression calculator");
    println!();
    println!("Usage: calc <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.calc>      Evaluate a file and print its final value");
    println!("  eval <source>        Evaluate source text given as an argument");
    println!("  explain <code>       Explain an error code (e.g., E2001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --max-depth=<n|none> Limit nested calls (default: 10000)");
    println!("  --color=<mode>       Diagnostics colors: auto, always, never");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable logging, e.g. RUST_LOG=calc_eval=debug");
    println!("  CALC_LOG_TREE=1      Show logs as an indented span tree");
    println!();
    println!("Examples:");
    println!("  calc run fib.calc");
    println!("  calc fib.calc --max-depth=none");
    println!("  calc eval \"(+ 1 2 3)\"");
    println!("  calc explain E6001");
}
