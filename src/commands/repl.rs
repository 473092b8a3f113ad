use bfi::cli_util::print_machine_error;
use bfi::{Machine, Program, PromptInput, StdoutSink};
use clap::Args;
use std::env;
use std::io::{self, Write};

#[derive(Args, Debug)]
pub struct ReplArgs {}

pub fn run(_args: ReplArgs) -> i32 {
    // Install SIGINT (ctrl+c) handler to flush and exit(0) immediately
    if let Err(e) = ctrlc::set_handler(|| {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
        std::process::exit(0);
    }) {
        eprintln!("bfi: failed to set ctrl+c handler: {e}");
        let _ = io::stderr().flush();
        return 1;
    }

    println!("Brainfuck REPL");
    println!("Ctrl+d (Ctrl+z Enter on Windows) executes the current buffer. Ctrl+c exits.");

    repl_loop().unwrap();
    0
}

fn repl_loop() -> io::Result<()> {
    loop {
        let mut stdin = io::stdin().lock();

        print!("bfi> ");
        io::stdout().flush()?;

        let Some(submission) = read_submission(&mut stdin) else {
            // EOF with nothing buffered: leave the REPL
            println!();
            io::stdout().flush()?;
            return Ok(());
        };

        let program = Program::parse(&submission);
        if program.is_empty() {
            continue;
        }

        execute_submission(&submission, program);

        // Test hook: exit after a single execution to allow integration testing
        if env::var("BFI_REPL_ONCE").ok().as_deref() == Some("1") {
            return Ok(());
        }
    }
}

/// Executes one submission with fresh machine state.
/// - Program output goes to stdout.
/// - Errors are printed concisely to stderr.
/// - A newline is always written to stdout after execution (success or error)
///   so that the prompt begins at column 0 on the next iteration.
fn execute_submission(src: &str, program: Program) {
    let outcome = Machine::new(program.clone())
        .and_then(|mut machine| machine.run(&mut StdoutSink, &mut PromptInput));
    if let Err(err) = outcome {
        print_machine_error(None, src, &program, &err);
        let _ = io::stderr().flush();
    }
    println!();
    let _ = io::stdout().flush();
}

fn read_submission<R: io::BufRead>(stdin: &mut R) -> Option<String> {
    // Collect all lines until EOF
    let mut buffer = String::new();

    loop {
        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) => {
                // EOF
                break;
            }
            Ok(_) => {
                buffer.push_str(&line);
            }
            Err(_) => {
                // Read error, ignore
                return None;
            }
        }
    }

    if buffer.is_empty() { None } else { Some(buffer) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_submission_reads_until_eof_multiple_lines() {
        let input = b"+++\n>+.\n";
        let mut cursor = Cursor::new(&input[..]);
        let got = read_submission(&mut cursor);
        assert_eq!(got.as_deref(), Some("+++\n>+.\n"));
    }

    #[test]
    fn read_submission_empty_returns_none() {
        let mut cursor = Cursor::new(Vec::<u8>::new());
        let got = read_submission(&mut cursor);
        assert!(got.is_none());
    }
}
