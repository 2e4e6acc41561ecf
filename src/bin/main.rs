use loxscan::Scanner;
use std::{
    env,
    io::{self, Write},
};

fn main() {
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let args: Vec<String> = env::args().collect();
    let result = match args.len() {
        1 => run_prompt(),
        2 => run_file(args[1].as_str()),
        _ => {
            writeln!(stdout, "Usage: loxscan [script]").expect("Something went wrong");
            std::process::exit(64);
        },
    };

    if let Err(e) = result {
        writeln!(stderr, "{}", e).expect("Something went wrong");
        std::process::exit(65);
    }
}

fn run_file(path: &str) -> io::Result<()> {
    let contents = std::fs::read_to_string(path)?;
    let error_count = run(contents.as_str())?;
    if error_count > 0 {
        std::process::exit(65);
    }
    Ok(())
}

fn run_prompt() -> io::Result<()> {
    let mut buffer = String::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        buffer.clear();

        let num_bytes = stdin.read_line(&mut buffer)?;
        if num_bytes == 0 { break };

        // lexical errors were already printed; the session keeps going
        run(buffer.as_str())?;
    }

    Ok(())
}

// Scans one buffer, printing tokens to stdout and diagnostics to stderr.
// Returns how many diagnostics the scan produced.
fn run(source: &str) -> io::Result<usize> {
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let (tokens, errors) = Scanner::new(source).scan_tokens();

    for token in &tokens {
        writeln!(stdout, "{}", token)?;
    }
    for error in &errors {
        writeln!(stderr, "{}", error)?;
    }

    Ok(errors.len())
}
