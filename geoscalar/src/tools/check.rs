use anyhow::{Context, Result, bail};
use clap::Args;
use geoscalar::{check::Checker, config::Config};
use log::{debug, info, warn};
use std::{
	fs,
	io::{self, Read},
	path::PathBuf,
};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON files to validate, use "-" to read from stdin
	#[arg(required = true)]
	files: Vec<String>,

	/// only accept this GeoJSON type, e.g. Polygon or FeatureCollection
	#[arg(long, short)]
	expect: Option<String>,

	/// maximum nesting of collections and features
	#[arg(long)]
	max_depth: Option<usize>,

	/// read settings from a YAML file, flags take precedence
	#[arg(long, short)]
	config: Option<PathBuf>,

	/// only report inputs that fail
	#[arg(long)]
	quiet_ok: bool,
}

impl Subcommand {
	fn config(&self) -> Result<Config> {
		let base = match &self.config {
			Some(path) => Config::from_path(path)?,
			None => Config::default(),
		};
		Ok(base.merge(Config {
			max_depth: self.max_depth,
			expect: self.expect.clone(),
		}))
	}
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let config = arguments.config()?;
	let checker = Checker::new(config.options(), config.expected_kind()?);
	debug!("checking with {config:?}");

	let mut failed = 0;
	for file in &arguments.files {
		let text = read_input(file)?;
		debug!("read {} bytes from {file}", text.len());

		let outcome = checker.check_str(&text);
		if !outcome.is_valid() {
			warn!("{file} failed validation");
			failed += 1;
		} else if arguments.quiet_ok {
			continue;
		}
		println!("{file}: {outcome}");
	}

	info!("checked {} inputs, {failed} failed", arguments.files.len());
	if failed > 0 {
		bail!("{failed} of {} inputs failed validation", arguments.files.len());
	}
	Ok(())
}

fn read_input(file: &str) -> Result<String> {
	if file == "-" {
		let mut text = String::new();
		io::stdin().read_to_string(&mut text).context("failed to read stdin")?;
		Ok(text)
	} else {
		fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))
	}
}
