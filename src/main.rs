use clap::{Parser, Subcommand};
use rust_dotenv::dotenv::DotEnv;
use surrealdb::{Surreal, engine::any::Any};

mod clear;
mod config;
mod records;
mod seed;
mod status;
mod verify;

use config::{DbCfg, connect};

#[derive(Parser, Debug)]
#[command(version, about = "Xarhani seed CLI")]
pub struct Cli {
	/// Print each document write
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Write the example records (default)
	Seed,
	/// Show document counts per collection
	Status,
	/// Check that every seeded document and reference resolves
	Verify,
	/// Delete the seeded collections
	Clear,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Cli::parse();

	// Load .env in CWD if present, ignore missing.
	let env = DotEnv::new("");
	let db = connect_from_env(&env).await?;

	match args.command.unwrap_or(Commands::Seed) {
		Commands::Seed => seed::seed(&db, args.verbose).await?,
		Commands::Status => status::status(&db).await?,
		Commands::Verify => verify::verify(&db).await?,
		Commands::Clear => clear::clear(&db).await?,
	}

	Ok(())
}

async fn connect_from_env(env: &DotEnv) -> anyhow::Result<Surreal<Any>> {
	let cfg = DbCfg::from_env(env)?;
	connect(&cfg).await
}
