use rill_lang::diagnostics;
use rill_lang::language::parser::parse_program;
use rill_lang::runtime::{eval, object::Object};
use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("run") => {
            let Some(filename) = args.get(2) else {
                eprintln!("Usage: rill-lang run <filename.rill>");
                return ExitCode::FAILURE;
            };
            run_file(filename)
        }
        Some("repl") => repl(),
        _ => {
            eprintln!("Usage: rill-lang [run|repl] <filename.rill>");
            ExitCode::FAILURE
        }
    }
}

fn run_file(filename: &str) -> ExitCode {
    if !filename.ends_with(".rill") {
        eprintln!("Invalid file extension. Only .rill files are allowed.");
        return ExitCode::FAILURE;
    }

    let path = Path::new(filename);
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            diagnostics::report_io_error(path, &err);
            return ExitCode::FAILURE;
        }
    };

    let program = match parse_program(&source) {
        Ok(program) => program,
        Err(errors) => {
            diagnostics::emit_syntax_errors(filename, &source, &errors.errors);
            return ExitCode::FAILURE;
        }
    };

    match eval(&program) {
        Object::Error(err) => {
            diagnostics::report_eval_error(&err);
            ExitCode::FAILURE
        }
        result => {
            println!("{}", result.inspect());
            ExitCode::SUCCESS
        }
    }
}

fn repl() -> ExitCode {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!(">> ");
        if stdout.flush().is_err() {
            return ExitCode::FAILURE;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => {}
            Err(err) => {
                eprintln!("Failed to read input: {}", err);
                return ExitCode::FAILURE;
            }
        }
        if line.trim().is_empty() {
            continue;
        }

        match parse_program(&line) {
            Ok(program) => println!("{}", eval(&program).inspect()),
            Err(errors) => diagnostics::emit_syntax_errors("repl", &line, &errors.errors),
        }
    }
}
