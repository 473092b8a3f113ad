use bfi::cli_util::print_machine_error;
use bfi::{Machine, MachineError, Program, PromptInput, StdoutSink, StepControl};
use clap::Args;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::time::Duration;
use std::{env, fs, thread};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Read Brainfuck code from PATH instead of positional "<code>"
    #[arg(short = 'f', long = "file")]
    pub file: Option<String>,

    /// Wall-clock timeout in milliseconds (fallback BFI_TIMEOUT_MS; default unlimited)
    #[arg(long = "timeout", value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Maximum interpreter steps before abort (fallback BFI_MAX_STEPS; default unlimited)
    #[arg(long = "max-steps", value_name = "N")]
    pub max_steps: Option<u64>,

    /// Concatenated Brainfuck code parts
    #[arg(value_name = "code", trailing_var_arg = true)]
    pub code: Vec<String>,
}

pub fn run(args: RunArgs) -> i32 {
    let RunArgs {
        file,
        timeout_ms,
        max_steps,
        code,
    } = args;

    if file.is_none() && code.is_empty() {
        eprintln!("bfi: provide Brainfuck code as arguments or with --file");
        let _ = io::stderr().flush();
        return 2;
    }

    if file.is_some() && !code.is_empty() {
        eprintln!("bfi: cannot use positional code together with --file");
        let _ = io::stderr().flush();
        return 2;
    }

    let src = if let Some(path) = file {
        match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("bfi: failed to read code file as UTF-8: {e}");
                let _ = io::stderr().flush();
                return 1;
            }
        }
    } else {
        code.join("")
    };

    // Resolve limits: flags -> env -> unlimited
    let timeout_ms = timeout_ms.or_else(|| {
        env::var("BFI_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
    });
    let max_steps = max_steps.or_else(|| {
        env::var("BFI_MAX_STEPS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
    });

    let program = Program::parse(&src);

    // Execute on a worker thread with cooperative cancellation so a
    // wall-clock timeout can abort a runaway program.
    let cancel = Arc::new(AtomicBool::new(false));
    let (tx, rx) = mpsc::channel::<Result<(), MachineError>>();
    let worker_program = program.clone();
    let cancel_clone = cancel.clone();

    thread::spawn(move || {
        let result = Machine::new(worker_program).and_then(|mut machine| {
            let control = StepControl::new(max_steps.map(|n| n as usize), cancel_clone);
            machine.run_with_control(&mut StdoutSink, &mut PromptInput, control)
        });
        let _ = tx.send(result);
    });

    let result = match timeout_ms {
        Some(ms) => match rx.recv_timeout(Duration::from_millis(ms)) {
            Ok(result) => result,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                cancel.store(true, Ordering::Relaxed);
                eprintln!("Execution aborted: wall-clock timeout exceeded ({ms} ms)");
                let _ = io::stderr().flush();
                println!();
                let _ = io::stdout().flush();
                return 1;
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => return 1,
        },
        None => match rx.recv() {
            Ok(result) => result,
            Err(_) => return 1,
        },
    };

    let exit_code = match result {
        Ok(()) => 0,
        Err(MachineError::StepLimitExceeded { limit }) => {
            eprintln!("Execution aborted: step limit exceeded ({limit})");
            let _ = io::stderr().flush();
            1
        }
        Err(err) => {
            print_machine_error(Some("bfi"), &src, &program, &err);
            let _ = io::stderr().flush();
            1
        }
    };

    // For readability, ensure output ends with a newline
    println!();
    let _ = io::stdout().flush();
    exit_code
}
