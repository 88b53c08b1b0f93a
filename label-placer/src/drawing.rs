use std::{cell::RefCell, rc::Rc};

use cosmic_text::Buffer;
use glam::Vec2;
use taffy::TraversePartialTree;

use crate::{
	font::FontID,
	layout::{self, BoxWidget, Layout},
	transform_stack::{self, TransformStack},
	widget::{self, DrawState},
};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Boundary {
	pub pos: Vec2,
	pub size: Vec2,
}

impl Boundary {
	pub const fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
		Self { pos, size }
	}

	pub fn construct(transform_stack: &TransformStack) -> Self {
		let transform = transform_stack.get();
		Self {
			pos: transform.pos,
			size: transform.dim,
		}
	}

	pub fn center(&self) -> Vec2 {
		self.pos + self.size / 2.0
	}
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
	pub r: f32,
	pub g: f32,
	pub b: f32,
	pub a: f32,
}

impl Color {
	pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
		Self { r, g, b, a }
	}
}

impl Default for Color {
	fn default() -> Self {
		// opaque black
		Self::new(0.0, 0.0, 0.0, 1.0)
	}
}

impl From<Color> for cosmic_text::Color {
	fn from(value: Color) -> Self {
		Self::rgba(
			(value.r * 255.999) as u8,
			(value.g * 255.999) as u8,
			(value.b * 255.999) as u8,
			(value.a * 255.999) as u8,
		)
	}
}

pub struct TextPrimitive {
	pub content: String,
	pub font: FontID,
	pub color: Color,
	pub buffer: Rc<RefCell<Buffer>>,
}

pub enum PrimitivePayload {
	Text(TextPrimitive),
}

pub struct RenderPrimitive {
	pub boundary: Boundary,
	pub depth: f32,
	pub payload: PrimitivePayload,
}

fn draw_widget(layout: &Layout, state: &mut DrawState, node_id: taffy::NodeId, widget: &BoxWidget) {
	let Ok(l) = layout.state.tree.layout(node_id) else {
		debug_assert!(false);
		return;
	};

	let mut widget_state = widget.lock();

	state.transform_stack.push(transform_stack::Transform {
		pos: layout::local_pos(&widget_state.data, l),
		dim: Vec2::new(l.size.width, l.size.height),
	});

	let draw_params = widget::DrawParams {
		node_id,
		taffy_layout: l,
	};

	widget_state.obj.draw(state, &draw_params);
	drop(widget_state);

	draw_children(layout, state, node_id);

	state.transform_stack.pop();
}

fn draw_children(layout: &Layout, state: &mut DrawState, parent_node_id: taffy::NodeId) {
	for node_id in layout.state.tree.child_ids(parent_node_id) {
		let Some(widget_id) = layout.state.tree.get_node_context(node_id).copied() else {
			debug_assert!(false);
			continue;
		};

		let Some(widget) = layout.state.widgets.get(widget_id) else {
			debug_assert!(false);
			continue;
		};

		state.depth += 0.01;
		draw_widget(layout, state, node_id, widget);
		state.depth -= 0.01;
	}
}

/// Walks the tree in paint order. Call `Layout::update` first.
pub fn draw(layout: &Layout) -> anyhow::Result<Vec<RenderPrimitive>> {
	let mut primitives = Vec::<RenderPrimitive>::new();
	let mut transform_stack = TransformStack::new();

	let Some(root_widget) = layout.state.widgets.get(layout.root_widget) else {
		anyhow::bail!("root widget is missing");
	};

	let mut params = DrawState {
		primitives: &mut primitives,
		transform_stack: &mut transform_stack,
		layout,
		depth: 0.0,
	};

	draw_widget(layout, &mut params, layout.root_node, root_widget);

	Ok(primitives)
}
