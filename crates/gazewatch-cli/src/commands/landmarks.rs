//! Landmarks command - print the landmark roles the classifier reads.

use anyhow::Result;
use clap::Args;
use gazewatch_core::LandmarkRole;

/// Arguments for the landmarks command
#[derive(Args)]
pub struct LandmarksArgs {
    /// Print the table as a JSON object
    #[arg(long)]
    pub json: bool,
}

/// Run the landmarks command.
pub fn run(args: &LandmarksArgs) -> Result<()> {
    if args.json {
        let table: serde_json::Map<String, serde_json::Value> = LandmarkRole::ALL
            .iter()
            .map(|role| (role.name().to_string(), serde_json::Value::from(role.index())))
            .collect();
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    let width = LandmarkRole::ALL
        .iter()
        .map(|role| role.name().len())
        .max()
        .unwrap_or(0);

    for role in LandmarkRole::ALL {
        println!("  {:<width$}  {:>3}", role.name(), role.index());
    }

    println!();
    println!(
        "{} roles, frames need at least {} landmarks",
        LandmarkRole::ALL.len(),
        LandmarkRole::required_len()
    );

    Ok(())
}
