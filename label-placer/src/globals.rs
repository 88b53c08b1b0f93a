use std::{
	cell::{RefCell, RefMut},
	rc::Rc,
};

use crate::{
	config::LabelConfig,
	drawing::Color,
	error::LayoutResult,
	font::{self, FontConfig, FontDesc, FontRegistry},
};

pub struct Defaults {
	pub text_color: Color,
}

pub struct Globals {
	pub font_system: cosmic_text::FontSystem,
	pub fonts: FontRegistry,
	pub defaults: Defaults,
}

/// Shared toolkit state. Not `Send`: widgets may only be touched from the thread that created them.
#[derive(Clone)]
pub struct LabelGlobals(Rc<RefCell<Globals>>);

impl LabelGlobals {
	pub fn new(font_config: &FontConfig, default_font: FontDesc, defaults: Defaults) -> LayoutResult<Self> {
		let fonts = FontRegistry::new(default_font)?;
		let font_system = font::create_font_system(font_config);

		Ok(Self(Rc::new(RefCell::new(Globals {
			font_system,
			fonts,
			defaults,
		}))))
	}

	pub fn from_config(config: &LabelConfig) -> LayoutResult<Self> {
		Self::new(
			&config.font_config(),
			config.default_font(),
			Defaults {
				text_color: config.text_color(),
			},
		)
	}

	pub fn get(&self) -> RefMut<'_, Globals> {
		self.0.borrow_mut()
	}

	pub fn fonts(&self) -> RefMut<'_, FontRegistry> {
		RefMut::map(self.0.borrow_mut(), |x| &mut x.fonts)
	}
}
