use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::{
	drawing::Color,
	font::{FontConfig, FontDesc},
};

const FALLBACK_CONFIG_PATH: &str = "/tmp/label-placer";

pub static CONFIG_ROOT_PATH: Lazy<PathBuf> = Lazy::new(|| {
	if let Ok(xdg_dirs) = xdg::BaseDirectories::new() {
		let mut dir = xdg_dirs.get_config_home();
		dir.push("label-placer");
		return dir;
	}
	log::error!("Failed to find config path, using {FALLBACK_CONFIG_PATH}");
	PathBuf::from(FALLBACK_CONFIG_PATH)
});

const fn def_font_size() -> f32 {
	14.0
}

const fn def_text_color() -> [f32; 4] {
	[1.0, 1.0, 1.0, 1.0]
}

const fn def_true() -> bool {
	true
}

const fn def_screen_width() -> u32 {
	480
}

const fn def_screen_height() -> u32 {
	320
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabelConfig {
	#[serde(default = "def_font_size")]
	pub font_size: f32,

	/// Derived from `font_size` when missing
	#[serde(default)]
	pub line_height: Option<f32>,

	#[serde(default)]
	pub font_family: Option<String>,

	#[serde(default = "def_text_color")]
	pub text_color: [f32; 4],

	#[serde(default = "def_true")]
	pub load_system_fonts: bool,

	#[serde(default)]
	pub font_files: Vec<PathBuf>,

	#[serde(default = "def_screen_width")]
	pub screen_width: u32,

	#[serde(default = "def_screen_height")]
	pub screen_height: u32,
}

impl Default for LabelConfig {
	fn default() -> Self {
		Self {
			font_size: def_font_size(),
			line_height: None,
			font_family: None,
			text_color: def_text_color(),
			load_system_fonts: def_true(),
			font_files: Vec::new(),
			screen_width: def_screen_width(),
			screen_height: def_screen_height(),
		}
	}
}

impl LabelConfig {
	fn sanitize_range(name: &str, val: f32, from: f32, to: f32) -> anyhow::Result<()> {
		if !val.is_normal() || val < from || val > to {
			anyhow::bail!("LabelConfig: {name} needs to be between {from} and {to}, got {val}");
		}
		Ok(())
	}

	fn post_load(self) -> anyhow::Result<Self> {
		Self::sanitize_range("font_size", self.font_size, 1.0, 1024.0)?;
		if let Some(line_height) = self.line_height {
			Self::sanitize_range("line_height", line_height, 1.0, 2048.0)?;
		}
		for (i, channel) in self.text_color.iter().enumerate() {
			if !(0.0..=1.0).contains(channel) {
				anyhow::bail!("LabelConfig: text_color[{i}] needs to be between 0 and 1");
			}
		}
		if self.screen_width == 0 || self.screen_height == 0 {
			anyhow::bail!("LabelConfig: screen size must be non-zero");
		}
		Ok(self)
	}

	pub fn default_font(&self) -> FontDesc {
		let mut desc = FontDesc::new(self.font_size);
		if let Some(line_height) = self.line_height {
			desc = desc.with_line_height(line_height);
		}
		if let Some(family) = &self.font_family {
			desc = desc.with_family(family.clone());
		}
		desc
	}

	pub const fn text_color(&self) -> Color {
		let [r, g, b, a] = self.text_color;
		Color::new(r, g, b, a)
	}

	/// Reads every configured font file. Unreadable files are skipped.
	pub fn font_config(&self) -> FontConfig {
		let binaries = self
			.font_files
			.iter()
			.filter_map(|path| match std::fs::read(path) {
				Ok(data) => Some(data),
				Err(e) => {
					log::error!("Failed to read font file {}: {e}", path.display());
					None
				}
			})
			.collect();

		FontConfig {
			binaries,
			family_name_sans_serif: self.font_family.clone().unwrap_or_default(),
			load_system_fonts: self.load_system_fonts,
			..Default::default()
		}
	}
}

fn config_from_builder(builder: config::ConfigBuilder<config::builder::DefaultState>) -> anyhow::Result<LabelConfig> {
	let settings = builder.build()?;
	settings.try_deserialize::<LabelConfig>()?.post_load()
}

pub fn load_from_str(yaml: &str) -> anyhow::Result<LabelConfig> {
	config_from_builder(Config::builder().add_source(File::from_str(yaml, FileFormat::Yaml)))
}

pub fn load_config() -> anyhow::Result<LabelConfig> {
	load_config_from(&CONFIG_ROOT_PATH)
}

/// Merges `config.yaml` from `root`, then `root/conf.d/*.yaml` in name order.
pub fn load_config_from(root: &Path) -> anyhow::Result<LabelConfig> {
	let mut settings_builder = Config::builder();

	let path_conf_d = root.join("conf.d");
	let base_conf = root.join("config.yaml");
	if base_conf.exists() {
		log::info!("Loading config file: {}", base_conf.display());
		settings_builder = settings_builder.add_source(File::from(base_conf));
	}

	if let Ok(paths_unsorted) = std::fs::read_dir(&path_conf_d) {
		let mut paths: Vec<_> = paths_unsorted
			.filter_map(|r| match r {
				Ok(entry) => Some(entry.path()),
				Err(e) => {
					log::error!("Failed to read conf.d directory: {e}");
					None
				}
			})
			.filter(|path| path.extension().is_some_and(|ext| ext == "yaml"))
			.collect();
		paths.sort();
		for path in paths {
			log::info!("Loading config file: {}", path.display());
			settings_builder = settings_builder.add_source(File::from(path));
		}
	}

	config_from_builder(settings_builder)
}
