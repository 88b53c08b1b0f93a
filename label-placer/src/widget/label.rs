use std::{cell::RefCell, rc::Rc};

use cosmic_text::{Attrs, Buffer, FontSystem, Shaping, Wrap};
use taffy::AvailableSpace;

use crate::{
	drawing::{self, Boundary, Color, TextPrimitive},
	font::{self, FontDesc, FontID},
};

use super::{WidgetObj, WidgetState, WidgetType};

pub struct WidgetLabelParams {
	pub content: String,
	pub color: Color,
	pub font: FontID,
	pub font_desc: FontDesc,
}

pub struct WidgetLabel {
	content: String,
	color: Color,
	font: FontID,
	font_desc: FontDesc,
	buffer: Rc<RefCell<Buffer>>,
}

impl WidgetLabel {
	pub fn create(font_system: &mut FontSystem, params: WidgetLabelParams) -> WidgetState {
		let buffer = Buffer::new_empty(params.font_desc.metrics());

		let mut label = Self {
			content: params.content,
			color: params.color,
			font: params.font,
			font_desc: params.font_desc,
			buffer: Rc::new(RefCell::new(buffer)),
		};

		{
			let mut buffer = label.buffer.borrow_mut();
			buffer.set_wrap(font_system, Wrap::None);
		}
		label.reshape(font_system);

		WidgetState::new(Box::new(label))
	}

	fn reshape(&mut self, font_system: &mut FontSystem) {
		if !font::can_shape(font_system) {
			return;
		}

		let attrs = self.font_desc.attrs().color(self.color.into());
		let mut buffer = self.buffer.borrow_mut();
		buffer.set_rich_text(
			font_system,
			[(self.content.as_str(), attrs)],
			&Attrs::new(),
			Shaping::Advanced,
			None,
		);
	}

	pub fn set_text(&mut self, font_system: &mut FontSystem, text: &str) {
		if self.content == text {
			return;
		}

		self.content = String::from(text);
		self.reshape(font_system);
	}

	pub fn get_text(&self) -> &str {
		&self.content
	}

	pub fn set_font(&mut self, font_system: &mut FontSystem, font: FontID, desc: &FontDesc) {
		if self.font == font && self.font_desc == *desc {
			return;
		}

		self.font = font;
		self.font_desc = desc.clone();
		self
			.buffer
			.borrow_mut()
			.set_metrics(font_system, self.font_desc.metrics());
		self.reshape(font_system);
	}

	pub const fn get_font(&self) -> FontID {
		self.font
	}

	pub const fn get_color(&self) -> Color {
		self.color
	}
}

impl WidgetObj for WidgetLabel {
	fn draw(&mut self, state: &mut super::DrawState, _params: &super::DrawParams) {
		let boundary = Boundary::construct(state.transform_stack);

		state.primitives.push(drawing::RenderPrimitive {
			boundary,
			depth: state.depth,
			payload: drawing::PrimitivePayload::Text(TextPrimitive {
				content: self.content.clone(),
				font: self.font,
				color: self.color,
				buffer: self.buffer.clone(),
			}),
		});
	}

	fn measure(
		&mut self,
		font_system: &mut FontSystem,
		known_dimensions: taffy::Size<Option<f32>>,
		available_space: taffy::Size<taffy::AvailableSpace>,
	) -> taffy::Size<f32> {
		if !font::can_shape(font_system) {
			return taffy::Size::ZERO;
		}

		// Set width constraint
		let width_constraint = known_dimensions.width.or(match available_space.width {
			AvailableSpace::MinContent => Some(0.0),
			AvailableSpace::MaxContent => None,
			AvailableSpace::Definite(width) => Some(width),
		});

		let mut buffer = self.buffer.borrow_mut();
		buffer.set_size(font_system, width_constraint, None);

		// Determine measured size of text
		let (width, total_lines) = buffer
			.layout_runs()
			.fold((0.0, 0usize), |(width, total_lines), run| {
				(run.line_w.max(width), total_lines + 1)
			});
		let height = total_lines as f32 * buffer.metrics().line_height;
		taffy::Size { width, height }
	}

	fn get_type(&self) -> WidgetType {
		WidgetType::Label
	}

	fn debug_print(&self) -> String {
		format!("\"{}\" font={:?} size={}", self.content, self.font, self.font_desc.size)
	}
}
