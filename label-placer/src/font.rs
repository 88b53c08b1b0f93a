use cosmic_text::{Attrs, Family, Metrics, PlatformFallback};
use slotmap::{SlotMap, new_key_type};

use crate::error::{LayoutError, LayoutResult};

new_key_type! {
	pub struct FontID;
}

/// Used in case no `line_height` is given
pub const DEFAULT_LINE_HEIGHT_RATIO: f32 = 1.43;

const FALLBACK_LOCALE: &str = "en-US";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
	#[default]
	Normal,
	Bold,
}

impl From<FontWeight> for cosmic_text::Weight {
	fn from(value: FontWeight) -> Self {
		match value {
			FontWeight::Normal => Self::NORMAL,
			FontWeight::Bold => Self::BOLD,
		}
	}
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
	#[default]
	Normal,
	Italic,
}

impl From<FontStyle> for cosmic_text::Style {
	fn from(value: FontStyle) -> Self {
		match value {
			FontStyle::Normal => Self::Normal,
			FontStyle::Italic => Self::Italic,
		}
	}
}

/// Font descriptor. Handed out to widgets as a `FontID`.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDesc {
	/// `None` picks the sans-serif family of the font system
	pub family: Option<String>,
	pub size: f32,
	pub line_height: f32,
	pub weight: FontWeight,
	pub style: FontStyle,
}

impl FontDesc {
	pub fn new(size: f32) -> Self {
		Self {
			family: None,
			size,
			line_height: (size * DEFAULT_LINE_HEIGHT_RATIO).round(),
			weight: FontWeight::Normal,
			style: FontStyle::Normal,
		}
	}

	#[must_use]
	pub fn with_family(mut self, family: impl Into<String>) -> Self {
		self.family = Some(family.into());
		self
	}

	#[must_use]
	pub const fn with_line_height(mut self, line_height: f32) -> Self {
		self.line_height = line_height;
		self
	}

	#[must_use]
	pub const fn with_weight(mut self, weight: FontWeight) -> Self {
		self.weight = weight;
		self
	}

	#[must_use]
	pub const fn with_style(mut self, style: FontStyle) -> Self {
		self.style = style;
		self
	}

	pub fn validate(&self) -> LayoutResult<()> {
		// cosmic-text refuses zero line heights
		if !self.size.is_finite() || self.size <= 0.0 {
			return Err(LayoutError::InvalidFontDesc(format!(
				"size must be positive, got {}",
				self.size
			)));
		}
		if !self.line_height.is_finite() || self.line_height <= 0.0 {
			return Err(LayoutError::InvalidFontDesc(format!(
				"line height must be positive, got {}",
				self.line_height
			)));
		}
		Ok(())
	}

	pub const fn metrics(&self) -> Metrics {
		Metrics::new(self.size, self.line_height)
	}

	pub fn attrs(&self) -> Attrs<'_> {
		let family = match &self.family {
			Some(name) => Family::Name(name),
			None => Family::SansSerif,
		};

		Attrs::new()
			.family(family)
			.weight(self.weight.into())
			.style(self.style.into())
	}
}

pub struct FontRegistry {
	fonts: SlotMap<FontID, FontDesc>,
	default_font: FontID,
}

impl FontRegistry {
	pub fn new(default_desc: FontDesc) -> LayoutResult<Self> {
		default_desc.validate()?;

		let mut fonts = SlotMap::with_key();
		let default_font = fonts.insert(default_desc);

		Ok(Self {
			fonts,
			default_font,
		})
	}

	pub fn register(&mut self, desc: FontDesc) -> LayoutResult<FontID> {
		desc.validate()?;
		let id = self.fonts.insert(desc);
		log::debug!("registered font {id:?}");
		Ok(id)
	}

	pub fn get(&self, id: FontID) -> Option<&FontDesc> {
		self.fonts.get(id)
	}

	pub fn contains(&self, id: FontID) -> bool {
		self.fonts.contains_key(id)
	}

	/// Labels keep the removed ID until refreshed. Go through `Layout::remove_font` to refresh them.
	pub fn remove(&mut self, id: FontID) -> LayoutResult<FontDesc> {
		if id == self.default_font {
			return Err(LayoutError::DefaultFontRemoval);
		}
		self.fonts.remove(id).ok_or(LayoutError::InvalidFont(id))
	}

	pub const fn default_font(&self) -> FontID {
		self.default_font
	}

	pub fn len(&self) -> usize {
		self.fonts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fonts.is_empty()
	}
}

#[derive(Debug, Default, Clone)]
pub struct FontConfig {
	pub binaries: Vec<Vec<u8>>,
	pub family_name_sans_serif: String,
	pub family_name_serif: String,
	pub family_name_monospace: String,
	pub load_system_fonts: bool,
}

fn current_locale() -> String {
	// "pl_PL.UTF-8" -> "pl-PL"
	std::env::var("LANG")
		.ok()
		.and_then(|lang| {
			let tag = lang.split('.').next()?.replace('_', "-");
			(!tag.is_empty() && tag != "C" && tag != "POSIX").then_some(tag)
		})
		.unwrap_or_else(|| FALLBACK_LOCALE.to_owned())
}

pub fn create_font_system(config: &FontConfig) -> cosmic_text::FontSystem {
	let mut db = cosmic_text::fontdb::Database::new();

	if config.load_system_fonts {
		db.load_system_fonts();
	}

	for binary in &config.binaries {
		// binary data is copied and preserved here
		db.load_font_data(binary.clone());
	}

	if !config.family_name_sans_serif.is_empty() {
		db.set_sans_serif_family(&config.family_name_sans_serif);
	}

	if !config.family_name_serif.is_empty() {
		db.set_serif_family(&config.family_name_serif);
	}

	if !config.family_name_monospace.is_empty() {
		db.set_monospace_family(&config.family_name_monospace);
	}

	let face_count = db.faces().count();
	if face_count == 0 {
		log::warn!("font database is empty, labels will not be shaped");
	} else {
		log::debug!("font database ready with {face_count} faces");
	}

	cosmic_text::FontSystem::new_with_locale_and_db_and_fallback(current_locale(), db, PlatformFallback)
}

/// Shaping panics without at least one face to fall back to.
pub fn can_shape(font_system: &cosmic_text::FontSystem) -> bool {
	font_system.db().faces().next().is_some()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn desc_defaults_line_height_from_size() {
		let desc = FontDesc::new(20.0);
		assert_eq!(desc.line_height, 29.0);
		assert!(desc.validate().is_ok());
	}

	#[test]
	fn rejects_non_positive_sizes() {
		assert!(matches!(
			FontDesc::new(0.0).validate(),
			Err(LayoutError::InvalidFontDesc(_))
		));
		assert!(matches!(
			FontDesc::new(12.0).with_line_height(f32::NAN).validate(),
			Err(LayoutError::InvalidFontDesc(_))
		));
	}

	#[test]
	fn registry_keeps_default_font() {
		let mut registry = FontRegistry::new(FontDesc::new(14.0)).unwrap();
		let default_font = registry.default_font();
		assert!(matches!(
			registry.remove(default_font),
			Err(LayoutError::DefaultFontRemoval)
		));

		let big = registry.register(FontDesc::new(48.0).with_weight(FontWeight::Bold)).unwrap();
		assert_eq!(registry.len(), 2);
		assert_eq!(registry.get(big).unwrap().size, 48.0);

		registry.remove(big).unwrap();
		assert!(!registry.contains(big));
		assert!(matches!(registry.remove(big), Err(LayoutError::InvalidFont(_))));
	}

	#[test]
	fn registry_refuses_invalid_desc() {
		let mut registry = FontRegistry::new(FontDesc::new(14.0)).unwrap();
		assert!(registry.register(FontDesc::new(-1.0)).is_err());
		assert_eq!(registry.len(), 1);
	}

	#[test]
	fn empty_database_cannot_shape() {
		let font_system = create_font_system(&FontConfig::default());
		assert!(!can_shape(&font_system));
	}
}
