use bn254_stark_demos::{read_json, summarize_params, DemoError, SumAir};
use log::{debug, error};
use std::{io::Write, path::PathBuf, process, time::Instant};
use structopt::StructOpt;
use verifier::{BaseElement, ProofParams, StarkProof};

// CONSTANTS
// ================================================================================================

const DEFAULT_SECURITY_BITS: &str = "128";

// COMMAND LINE ARGUMENTS
// ================================================================================================

#[derive(StructOpt, Debug)]
#[structopt(name = "stark-verify", version = env!("CARGO_PKG_VERSION"), author = env!("CARGO_PKG_AUTHORS"), about = "Circuit-friendly STARK verifier")]
enum Cla {
    /// Verifies a proof of the sum computation
    Verify {
        /// JSON file with the proof parameters
        #[structopt(long, parse(from_os_str))]
        params: PathBuf,

        /// JSON file with the public inputs as decimal strings
        #[structopt(long, parse(from_os_str))]
        inputs: PathBuf,

        /// JSON file with the proof
        #[structopt(long, parse(from_os_str))]
        proof: PathBuf,
    },

    /// Prints the sizes implied by a set of proof parameters
    Params {
        /// JSON file with the proof parameters
        #[structopt(long, parse(from_os_str))]
        params: PathBuf,

        /// Security level used to recommend the number of query draws
        #[structopt(long, default_value = DEFAULT_SECURITY_BITS)]
        security: u32,
    },
}

// PROGRAM ENTRY POINT
// ================================================================================================

fn main() {
    // configure logging
    env_logger::Builder::new()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .filter_level(log::LevelFilter::Debug)
        .init();

    let result = match Cla::from_args() {
        Cla::Verify {
            params,
            inputs,
            proof,
        } => run_verify(params, inputs, proof),
        Cla::Params { params, security } => run_params(params, security),
    };

    if let Err(err) = result {
        error!("{}", err);
        process::exit(1);
    }
}

// COMMANDS
// ================================================================================================

fn run_verify(params: PathBuf, inputs: PathBuf, proof: PathBuf) -> Result<(), DemoError> {
    let params: ProofParams = read_json(&params)?;
    let public_inputs: Vec<BaseElement> = read_json(&inputs)?;
    let proof: StarkProof = read_json(&proof)?;

    debug!("============================================================");
    let now = Instant::now();
    verifier::verify::<SumAir>(&params, &public_inputs, &proof)?;
    debug!("Proof verified in {} ms", now.elapsed().as_millis());
    debug!("============================================================");
    Ok(())
}

fn run_params(params: PathBuf, security: u32) -> Result<(), DemoError> {
    let params: ProofParams = read_json(&params)?;
    let summary = summarize_params(&params, security)?;

    debug!("LDE domain size: {}", summary.lde_domain_size);
    debug!("Commitment tree depth: {}", summary.tree_depth);
    debug!("FRI layer tree depths: {:?}", summary.fri_tree_depths);
    debug!(
        "FRI remainder: {} values of a polynomial with at most {} coefficients",
        summary.remainder_size, summary.remainder_max_degree_plus_1
    );
    debug!(
        "Query draws for {} bits of security: {} (configured: {})",
        security, summary.recommended_num_draws, params.num_draws
    );
    Ok(())
}
