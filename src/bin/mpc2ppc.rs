use anyhow::Result;
use clap::Parser;
use mpc2ppc::debug::format_mat;
use mpc2ppc::mpc_to_ppc;
use std::path::PathBuf;

/// MATPOWER case file conversion.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The input case file (.mat)
    #[arg(required = true)]
    input: PathBuf,

    /// Name of the case struct inside the file
    #[arg(long, default_value = "mpc")]
    case_name: String,
}

fn main() {
    env_logger::Builder::from_default_env()
        .format_level(false)
        .format_target(false)
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    match execute(&cli) {
        Ok(_) => {
            std::process::exit(0);
        }
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(2);
        }
    }
}

fn execute(cli: &Cli) -> Result<()> {
    let ppc = mpc_to_ppc(&cli.input, &cli.case_name)?;

    println!("version: {}", ppc.version);
    println!("baseMVA: {}", ppc.base_mva);
    println!("bus:     {} x {}", ppc.bus.rows(), ppc.bus.cols());
    println!("gen:     {} x {}", ppc.gen.rows(), ppc.gen.cols());
    println!("branch:  {} x {}", ppc.branch.rows(), ppc.branch.cols());
    match &ppc.gencost {
        Some(gencost) => println!("gencost: {} x {}", gencost.rows(), gencost.cols()),
        None => println!("gencost: none"),
    }

    log::debug!("bus:\n{}", format_mat(&ppc.bus));
    log::debug!("branch:\n{}", format_mat(&ppc.branch));
    log::debug!("gen:\n{}", format_mat(&ppc.gen));

    Ok(())
}
