use std::fmt::{Debug, Display};

use crate::{
	align::Align,
	error::LayoutError,
	font::FontID,
	layout::{Layout, WidgetID},
	widget::StyleState,
};

/// The widget-tree primitives `place_label` is built from.
///
/// Handles are non-owning: the toolkit keeps every widget and font alive,
/// callers only pass IDs around.
pub trait Toolkit {
	type Widget: Copy + Debug;
	type Font: Copy + Debug;
	type Error: Display;

	fn create_label(&mut self, parent: Self::Widget) -> Result<Self::Widget, Self::Error>;

	fn set_label_text(&mut self, label: Self::Widget, text: &str) -> Result<(), Self::Error>;

	fn set_text_font(
		&mut self,
		widget: Self::Widget,
		font: Self::Font,
		state: StyleState,
	) -> Result<(), Self::Error>;

	/// Offsets are applied after the anchor is resolved.
	fn align(
		&mut self,
		widget: Self::Widget,
		align: Align,
		x_ofs: i32,
		y_ofs: i32,
	) -> Result<(), Self::Error>;

	fn remove_widget(&mut self, widget: Self::Widget) -> Result<(), Self::Error>;
}

impl Toolkit for Layout {
	type Widget = WidgetID;
	type Font = FontID;
	type Error = LayoutError;

	fn create_label(&mut self, parent: WidgetID) -> Result<WidgetID, LayoutError> {
		self.add_label(parent, "")
	}

	fn set_label_text(&mut self, label: WidgetID, text: &str) -> Result<(), LayoutError> {
		Layout::set_label_text(self, label, text)
	}

	fn set_text_font(&mut self, widget: WidgetID, font: FontID, state: StyleState) -> Result<(), LayoutError> {
		Layout::set_text_font(self, widget, font, state)
	}

	fn align(&mut self, widget: WidgetID, align: Align, x_ofs: i32, y_ofs: i32) -> Result<(), LayoutError> {
		Layout::align(self, widget, align, x_ofs, y_ofs)
	}

	fn remove_widget(&mut self, widget: WidgetID) -> Result<(), LayoutError> {
		Layout::remove_widget(self, widget)
	}
}
