use anyhow::Result;
use clap::Args;
use geoscalar::scalar::type_defs;

#[derive(Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {}

pub fn run(_arguments: &Subcommand) -> Result<()> {
	print!("{}", type_defs());
	Ok(())
}
