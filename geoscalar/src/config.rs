use anyhow::{Context, Result, anyhow};
use geoscalar_geometry::{GeoJsonKind, ValidationOptions};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

/// Settings for `geoscalar check`, usually read from a YAML file.
///
/// ```yaml
/// max_depth: 16
/// expect: FeatureCollection
/// ```
#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Maximum nesting of collections and features
	#[serde(default)]
	pub max_depth: Option<usize>,

	/// Only accept this GeoJSON type
	#[serde(default)]
	pub expect: Option<String>,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("failed to open config file {path:?}"))?;
		Config::from_reader(BufReader::new(file)).with_context(|| format!("failed to parse config file {path:?}"))
	}

	/// Fields set in `other` win.
	pub fn merge(self, other: Config) -> Config {
		Config {
			max_depth: other.max_depth.or(self.max_depth),
			expect: other.expect.or(self.expect),
		}
	}

	pub fn options(&self) -> ValidationOptions {
		let mut options = ValidationOptions::default();
		if let Some(max_depth) = self.max_depth {
			options.max_depth = max_depth;
		}
		options
	}

	pub fn expected_kind(&self) -> Result<Option<GeoJsonKind>> {
		self.expect
			.as_deref()
			.map(|name| {
				GeoJsonKind::from_name(name).ok_or_else(|| {
					anyhow!(
						"unknown GeoJSON type '{name}', expected one of: {}",
						GeoJsonKind::allowed_names()
					)
				})
			})
			.transpose()
	}
}
