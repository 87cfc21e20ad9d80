//! Crossed Wires - gate network evaluator and adder wiring audit
//!
//! # Usage
//!
//! ```bash
//! crossed-wires input.txt
//! RUST_LOG=debug crossed-wires input.txt
//! ```

use std::path::PathBuf;

use clap::Parser;
use crossed_wires::{
    adder::{audit_adder, format_answer},
    circuit::{trace, Circuit},
    dsl,
    error::Result,
    AdderLayout, Evaluator,
};
use log::debug;

/// Evaluate a gate network and locate miswired adder gates
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the circuit description file
    #[arg(value_name = "INPUT_FILE")]
    input_file: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default())
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    let args = Args::parse();
    let layout = AdderLayout::default();

    // Parse and build the circuit
    let ast = dsl::parse_file(&args.input_file)?;
    let circuit = Circuit::from_ast(ast)?;
    debug!(
        "loaded {} wires ({} gates) from {}",
        circuit.len(),
        circuit.gate_count(),
        args.input_file.display()
    );

    // Evaluate
    let mut evaluator = Evaluator::new(&circuit);
    evaluator.solve_all()?;
    let output = evaluator.assemble_output(&layout.sum)?;

    // Audit the adder wiring
    let defects = audit_adder(&circuit, &layout)?;
    for defect in &defects {
        let sources: Vec<&str> = trace::source_inputs(&circuit, defect.node)
            .into_iter()
            .map(|id| circuit.node_name(id))
            .collect();
        let sinks: Vec<&str> = trace::sink_outputs(&circuit, defect.node, &layout.sum)
            .into_iter()
            .map(|id| circuit.node_name(id))
            .collect();
        debug!(
            "{}: reads [{}], reaches [{}]",
            defect.name,
            sources.join(" "),
            sinks.join(" ")
        );
    }
    let names = defects.into_iter().map(|defect| defect.name).collect();

    println!("{}", output);
    println!("{}", format_answer(&names));

    Ok(())
}
