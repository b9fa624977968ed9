use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use turc::loader::MachineLoader;
use turc::machine::Simulator;
use turc::types::{HaltReason, Step};

#[derive(Parser)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// Path to the machine description file
    machine: PathBuf,

    /// Path to the input file that seeds the tape
    input: PathBuf,

    /// Print each step of the execution
    #[clap(short = 'd', long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let machine = match MachineLoader::load_machine(&cli.machine) {
        Ok(machine) => machine,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut tape = match MachineLoader::load_tape(&cli.input, &machine) {
        Ok(tape) => tape,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut simulator = Simulator::new(&machine);

    let reason = if cli.debug {
        loop {
            eprintln!(
                "step: {}, state: {}, head: {}",
                simulator.step_count(),
                simulator.state(),
                tape.head()
            );

            match simulator.step(&mut tape) {
                Step::Continue => {}
                Step::Halt(reason) => break reason,
            }
        }
    } else {
        simulator.run(&mut tape)
    };

    // Both halt reasons end the run normally; the tape is valid output.
    match reason {
        HaltReason::NoTransition(state) => {
            eprintln!("info: no transition from state '{state}', halting");
        }
        HaltReason::BoundaryViolation => {
            eprintln!("info: head moved out of bounds, halting");
        }
    }

    println!("{tape}");

    ExitCode::SUCCESS
}
