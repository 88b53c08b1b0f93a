use std::any::Any;

use glam::Vec2;
use smallvec::SmallVec;

use crate::{
	align::Placement,
	drawing::RenderPrimitive,
	font::FontID,
	layout::Layout,
	transform_stack::TransformStack,
};

pub mod div;
pub mod label;

/// Interaction state a style entry applies to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum StyleState {
	#[default]
	Default,
	Pressed,
	Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetType {
	Div,
	Label,
}

/// Local style of a widget. Unset entries inherit from the parent.
#[derive(Debug, Default, Clone)]
pub struct WidgetStyle {
	text_fonts: SmallVec<[(StyleState, FontID); 1]>,
	pub placement: Option<Placement>,
}

impl WidgetStyle {
	pub fn set_text_font(&mut self, state: StyleState, font: FontID) {
		if let Some(entry) = self.text_fonts.iter_mut().find(|(s, _)| *s == state) {
			entry.1 = font;
		} else {
			self.text_fonts.push((state, font));
		}
	}

	pub fn text_font_exact(&self, state: StyleState) -> Option<FontID> {
		self
			.text_fonts
			.iter()
			.find(|(s, _)| *s == state)
			.map(|(_, font)| *font)
	}

	/// Font for `state`, falling back to the `Default` entry.
	pub fn text_font(&self, state: StyleState) -> Option<FontID> {
		self
			.text_font_exact(state)
			.or_else(|| self.text_font_exact(StyleState::Default))
	}
}

pub struct WidgetData {
	pub state: StyleState,
	pub style: WidgetStyle,
	// relative to the parent border box, valid after Layout::update
	pub aligned_pos: Option<Vec2>,
}

pub struct WidgetState {
	pub data: WidgetData,
	pub obj: Box<dyn WidgetObj>,
}

impl WidgetState {
	fn new(obj: Box<dyn WidgetObj>) -> Self {
		Self {
			data: WidgetData {
				state: StyleState::Default,
				style: WidgetStyle::default(),
				aligned_pos: None,
			},
			obj,
		}
	}
}

// global draw params
pub struct DrawState<'a> {
	pub layout: &'a Layout,
	pub primitives: &'a mut Vec<RenderPrimitive>,
	pub transform_stack: &'a mut TransformStack,
	pub depth: f32,
}

// per-widget draw params
pub struct DrawParams<'a> {
	pub node_id: taffy::NodeId,
	pub taffy_layout: &'a taffy::Layout,
}

pub trait AsAny: 'static {
	fn as_any(&self) -> &dyn Any;
	fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: 'static> AsAny for T {
	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}

pub trait WidgetObj: AsAny {
	fn draw(&mut self, state: &mut DrawState, params: &DrawParams);

	fn measure(
		&mut self,
		_font_system: &mut cosmic_text::FontSystem,
		_known_dimensions: taffy::Size<Option<f32>>,
		_available_space: taffy::Size<taffy::AvailableSpace>,
	) -> taffy::Size<f32> {
		taffy::Size::ZERO
	}

	fn get_type(&self) -> WidgetType;

	fn debug_print(&self) -> String;
}

impl dyn WidgetObj {
	pub fn get_as<T: 'static>(&self) -> Option<&T> {
		self.as_any().downcast_ref::<T>()
	}

	pub fn get_as_mut<T: 'static>(&mut self) -> Option<&mut T> {
		self.as_any_mut().downcast_mut::<T>()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use slotmap::SlotMap;

	#[test]
	fn state_font_falls_back_to_default_entry() {
		let mut fonts = SlotMap::<FontID, ()>::with_key();
		let regular = fonts.insert(());
		let bold = fonts.insert(());

		let mut style = WidgetStyle::default();
		assert_eq!(style.text_font(StyleState::Default), None);

		style.set_text_font(StyleState::Default, regular);
		style.set_text_font(StyleState::Pressed, bold);

		assert_eq!(style.text_font(StyleState::Pressed), Some(bold));
		assert_eq!(style.text_font(StyleState::Disabled), Some(regular));

		style.set_text_font(StyleState::Default, bold);
		assert_eq!(style.text_font(StyleState::Disabled), Some(bold));
		assert_eq!(style.text_font_exact(StyleState::Disabled), None);
	}
}
