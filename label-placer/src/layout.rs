use std::sync::Arc;

use glam::Vec2;
use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};
use slotmap::{HopSlotMap, SecondaryMap, new_key_type};
use taffy::{TaffyTree, TraversePartialTree, prelude::TaffyMaxContent, style_helpers::length};

use crate::{
	align::{Align, ParentBox, Placement},
	config::LabelConfig,
	drawing::Boundary,
	error::{LayoutError, LayoutResult},
	font::{FontDesc, FontID},
	globals::LabelGlobals,
	widget::{
		StyleState, WidgetData, WidgetObj, WidgetState,
		div::WidgetDiv,
		label::{WidgetLabel, WidgetLabelParams},
	},
};

new_key_type! {
	pub struct WidgetID;
}

pub type BoxWidget = Arc<Mutex<WidgetState>>;

pub struct WidgetMap(HopSlotMap<WidgetID, BoxWidget>);
pub type WidgetNodeMap = SecondaryMap<WidgetID, taffy::NodeId>;

impl WidgetMap {
	fn new() -> Self {
		Self(HopSlotMap::with_key())
	}

	/// `None` if the widget is gone or is not a `T`
	pub fn get_as<T: 'static>(&self, handle: WidgetID) -> Option<MappedMutexGuard<'_, T>> {
		let widget = self.0.get(handle)?;
		MutexGuard::try_map(widget.lock(), |w| w.obj.get_as_mut::<T>()).ok()
	}

	pub fn get(&self, handle: WidgetID) -> Option<&BoxWidget> {
		self.0.get(handle)
	}

	fn insert(&mut self, obj: BoxWidget) -> WidgetID {
		self.0.insert(obj)
	}

	fn remove(&mut self, handle: WidgetID) -> Option<BoxWidget> {
		self.0.remove(handle)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

pub struct LayoutState {
	pub globals: LabelGlobals,
	pub widgets: WidgetMap,
	pub nodes: WidgetNodeMap,
	pub tree: TaffyTree<WidgetID>,
}

/// Retained widget tree. Owns every widget it hands out IDs for.
pub struct Layout {
	pub state: LayoutState,

	pub root_widget: WidgetID,
	pub root_node: taffy::NodeId,

	pub prev_size: Vec2,
	pub needs_redraw: bool,
	needs_realign: bool,
}

/// Position of a widget relative to its parent's border box.
pub(crate) fn local_pos(data: &WidgetData, l: &taffy::Layout) -> Vec2 {
	data
		.aligned_pos
		.unwrap_or_else(|| Vec2::new(l.location.x, l.location.y))
}

fn absolute_style(size: Option<Vec2>) -> taffy::Style {
	taffy::Style {
		position: taffy::Position::Absolute,
		size: match size {
			Some(size) => taffy::Size {
				width: length(size.x),
				height: length(size.y),
			},
			None => taffy::Size::auto(),
		},
		..Default::default()
	}
}

fn add_child_internal(
	tree: &mut TaffyTree<WidgetID>,
	widgets: &mut WidgetMap,
	nodes: &mut WidgetNodeMap,
	parent_node: Option<taffy::NodeId>,
	widget: WidgetState,
	style: taffy::Style,
) -> LayoutResult<(WidgetID, taffy::NodeId)> {
	#[allow(clippy::arc_with_non_send_sync)]
	let child_id = widgets.insert(Arc::new(Mutex::new(widget)));
	let child_node = match tree.new_leaf_with_context(style, child_id) {
		Ok(node) => node,
		Err(e) => {
			widgets.remove(child_id);
			return Err(e.into());
		}
	};

	if let Some(parent_node) = parent_node {
		if let Err(e) = tree.add_child(parent_node, child_node) {
			let _ = tree.remove(child_node);
			widgets.remove(child_id);
			return Err(e.into());
		}
	}

	nodes.insert(child_id, child_node);

	Ok((child_id, child_node))
}

impl Layout {
	pub fn new(globals: LabelGlobals, size: Vec2) -> LayoutResult<Self> {
		let mut state = LayoutState {
			tree: TaffyTree::new(),
			widgets: WidgetMap::new(),
			nodes: WidgetNodeMap::default(),
			globals,
		};

		let (root_widget, root_node) = add_child_internal(
			&mut state.tree,
			&mut state.widgets,
			&mut state.nodes,
			None, // no parent
			WidgetDiv::create(),
			taffy::Style {
				size: taffy::Size {
					width: length(size.x),
					height: length(size.y),
				},
				..Default::default()
			},
		)?;

		Ok(Self {
			state,
			root_widget,
			root_node,
			prev_size: size,
			needs_redraw: true,
			needs_realign: true,
		})
	}

	pub fn from_config(config: &LabelConfig) -> LayoutResult<Self> {
		let globals = LabelGlobals::from_config(config)?;
		let size = Vec2::new(config.screen_width as f32, config.screen_height as f32);
		Self::new(globals, size)
	}

	fn get_node(&self, widget_id: WidgetID) -> LayoutResult<taffy::NodeId> {
		self
			.state
			.nodes
			.get(widget_id)
			.copied()
			.ok_or(LayoutError::InvalidWidget(widget_id))
	}

	fn get_widget(&self, widget_id: WidgetID) -> LayoutResult<&BoxWidget> {
		self
			.state
			.widgets
			.get(widget_id)
			.ok_or(LayoutError::InvalidWidget(widget_id))
	}

	pub fn contains(&self, widget_id: WidgetID) -> bool {
		self.state.nodes.contains_key(widget_id)
	}

	pub fn widget_count(&self) -> usize {
		self.state.widgets.len()
	}

	pub fn get_as<T: 'static>(&self, widget_id: WidgetID) -> Option<MappedMutexGuard<'_, T>> {
		self.state.widgets.get_as::<T>(widget_id)
	}

	pub fn add_child(
		&mut self,
		parent_widget_id: WidgetID,
		widget: WidgetState,
		style: taffy::Style,
	) -> LayoutResult<(WidgetID, taffy::NodeId)> {
		let parent_node = self.get_node(parent_widget_id)?;

		self.needs_redraw = true;

		add_child_internal(
			&mut self.state.tree,
			&mut self.state.widgets,
			&mut self.state.nodes,
			Some(parent_node),
			widget,
			style,
		)
	}

	/// Fixed-size container, placed at the parent's top-left until aligned.
	pub fn add_container(&mut self, parent: WidgetID, size: Vec2) -> LayoutResult<WidgetID> {
		let (id, _) = self.add_child(parent, WidgetDiv::create(), absolute_style(Some(size)))?;
		Ok(id)
	}

	/// Label sized to its text, using the font it inherits from `parent`.
	pub fn add_label(&mut self, parent: WidgetID, text: &str) -> LayoutResult<WidgetID> {
		self.get_node(parent)?;

		let font = self.resolve_font(parent);
		let widget = {
			let mut globals = self.state.globals.get();
			let globals = &mut *globals;
			let font_desc = globals
				.fonts
				.get(font)
				.ok_or(LayoutError::InvalidFont(font))?
				.clone();

			WidgetLabel::create(
				&mut globals.font_system,
				WidgetLabelParams {
					content: String::from(text),
					color: globals.defaults.text_color,
					font,
					font_desc,
				},
			)
		};

		let (id, node) = self.add_child(parent, widget, absolute_style(None))?;
		self.fit_label(id, node)?;
		Ok(id)
	}

	/// Pins a label node to its text extent, so children never resize it.
	fn fit_label(&mut self, widget_id: WidgetID, node: taffy::NodeId) -> LayoutResult<()> {
		let size = {
			let Some(mut label) = self.state.widgets.get_as::<WidgetLabel>(widget_id) else {
				return Ok(());
			};
			let mut globals = self.state.globals.get();
			label.measure(&mut globals.font_system, taffy::Size::NONE, taffy::Size::MAX_CONTENT)
		};

		self
			.state
			.tree
			.set_style(node, absolute_style(Some(Vec2::new(size.width, size.height))))?;
		Ok(())
	}

	pub fn parent(&self, widget_id: WidgetID) -> Option<WidgetID> {
		let node = self.state.nodes.get(widget_id)?;
		let parent_node = self.state.tree.parent(*node)?;
		self.state.tree.get_node_context(parent_node).copied()
	}

	pub fn children(&self, widget_id: WidgetID) -> LayoutResult<Vec<WidgetID>> {
		let node = self.get_node(widget_id)?;
		Ok(
			self
				.state
				.tree
				.child_ids(node)
				.filter_map(|child| self.state.tree.get_node_context(child).copied())
				.collect(),
		)
	}

	fn collect_subtree(&self, node_id: taffy::NodeId, out: &mut Vec<taffy::NodeId>) {
		out.push(node_id);
		for child in self.state.tree.child_ids(node_id) {
			self.collect_subtree(child, out);
		}
	}

	/// Removes the widget together with everything below it.
	pub fn remove_widget(&mut self, widget_id: WidgetID) -> LayoutResult<()> {
		if widget_id == self.root_widget {
			return Err(LayoutError::RootRemoval);
		}

		let node = self.get_node(widget_id)?;
		let parent_node = self.state.tree.parent(node);

		let mut subtree = Vec::new();
		self.collect_subtree(node, &mut subtree);

		for node_id in subtree.into_iter().rev() {
			if let Some(id) = self.state.tree.get_node_context(node_id).copied() {
				self.state.widgets.remove(id);
				self.state.nodes.remove(id);
			}
			self.state.tree.remove(node_id)?;
		}

		if let Some(parent_node) = parent_node {
			self.state.tree.mark_dirty(parent_node)?;
		}

		log::debug!("removed widget {widget_id:?}");
		self.needs_redraw = true;
		Ok(())
	}

	pub fn set_label_text(&mut self, widget_id: WidgetID, text: &str) -> LayoutResult<()> {
		let node = self.get_node(widget_id)?;
		{
			let mut label = self
				.state
				.widgets
				.get_as::<WidgetLabel>(widget_id)
				.ok_or(LayoutError::NotALabel(widget_id))?;
			let mut globals = self.state.globals.get();
			label.set_text(&mut globals.font_system, text);
		}

		self.fit_label(widget_id, node)?;
		self.needs_redraw = true;
		Ok(())
	}

	/// Sets the font used in `state`. Labels below `widget_id` without their own font follow it.
	pub fn set_text_font(&mut self, widget_id: WidgetID, font: FontID, state: StyleState) -> LayoutResult<()> {
		if !self.state.globals.fonts().contains(font) {
			return Err(LayoutError::InvalidFont(font));
		}

		self.get_widget(widget_id)?.lock().data.style.set_text_font(state, font);
		self.refresh_fonts(widget_id)
	}

	pub fn set_widget_state(&mut self, widget_id: WidgetID, state: StyleState) -> LayoutResult<()> {
		{
			let mut widget = self.get_widget(widget_id)?.lock();
			if widget.data.state == state {
				return Ok(());
			}
			widget.data.state = state;
		}
		self.refresh_fonts(widget_id)
	}

	pub fn align(&mut self, widget_id: WidgetID, align: Align, x_ofs: i32, y_ofs: i32) -> LayoutResult<()> {
		self.get_widget(widget_id)?.lock().data.style.placement = Some(Placement::new(align, x_ofs, y_ofs));
		self.needs_realign = true;
		self.needs_redraw = true;
		Ok(())
	}

	/// Effective font of a widget: own style for its state, then the parent chain, then the default.
	pub fn resolve_font(&self, widget_id: WidgetID) -> FontID {
		let fonts = self.state.globals.fonts();
		let mut current = Some(widget_id);

		while let Some(id) = current {
			if let Some(widget) = self.state.widgets.get(id) {
				let widget = widget.lock();
				let font = widget.data.style.text_font(widget.data.state);
				if let Some(font) = font.filter(|font| fonts.contains(*font)) {
					return font;
				}
			}
			current = self.parent(id);
		}

		fonts.default_font()
	}

	fn refresh_fonts(&mut self, widget_id: WidgetID) -> LayoutResult<()> {
		let node = self.get_node(widget_id)?;
		let mut subtree = Vec::new();
		self.collect_subtree(node, &mut subtree);

		for node_id in subtree {
			let Some(id) = self.state.tree.get_node_context(node_id).copied() else {
				continue;
			};
			let font = self.resolve_font(id);

			{
				let Some(mut label) = self.state.widgets.get_as::<WidgetLabel>(id) else {
					continue;
				};

				let mut globals = self.state.globals.get();
				let globals = &mut *globals;
				let desc = globals.fonts.get(font).ok_or(LayoutError::InvalidFont(font))?;
				label.set_font(&mut globals.font_system, font, desc);
			}

			self.fit_label(id, node_id)?;
		}

		self.needs_redraw = true;
		Ok(())
	}

	/// Unregisters `font`. Labels that used it switch to their inherited font.
	pub fn remove_font(&mut self, font: FontID) -> LayoutResult<FontDesc> {
		let desc = self.state.globals.fonts().remove(font)?;
		self.refresh_fonts(self.root_widget)?;
		Ok(desc)
	}

	pub fn check_toggle_needs_redraw(&mut self) -> bool {
		if self.needs_redraw {
			self.needs_redraw = false;
			true
		} else {
			false
		}
	}

	pub fn update(&mut self, size: Vec2) -> LayoutResult<()> {
		let resized = self.prev_size != size;
		if resized {
			self.prev_size = size;
			self.state.tree.set_style(
				self.root_node,
				taffy::Style {
					size: taffy::Size {
						width: length(size.x),
						height: length(size.y),
					},
					..Default::default()
				},
			)?;
		}

		if self.state.tree.dirty(self.root_node)? {
			log::debug!("re-computing layout, size {}x{}", size.x, size.y);

			let globals_rc = self.state.globals.clone();
			let mut globals = globals_rc.get();
			let font_system = &mut globals.font_system;
			let widgets = &self.state.widgets;

			self.state.tree.compute_layout_with_measure(
				self.root_node,
				taffy::Size {
					width: taffy::AvailableSpace::Definite(size.x),
					height: taffy::AvailableSpace::Definite(size.y),
				},
				|known_dimensions, available_space, _node_id, node_context, _style| {
					if let taffy::Size {
						width: Some(width),
						height: Some(height),
					} = known_dimensions
					{
						return taffy::Size { width, height };
					}

					match node_context {
						None => taffy::Size::ZERO,
						Some(h) => {
							if let Some(w) = widgets.get(*h) {
								w.lock().obj.measure(font_system, known_dimensions, available_space)
							} else {
								taffy::Size::ZERO
							}
						}
					}
				},
			)?;

			self.needs_realign = true;
			self.needs_redraw = true;
		}

		if self.needs_realign {
			self.needs_realign = false;
			self.apply_alignment(self.root_node)?;
		}

		Ok(())
	}

	fn apply_alignment(&self, node_id: taffy::NodeId) -> LayoutResult<()> {
		let parent_box = ParentBox::from_layout(self.state.tree.layout(node_id)?);

		for child in self.state.tree.child_ids(node_id) {
			let Some(widget_id) = self.state.tree.get_node_context(child).copied() else {
				continue;
			};
			let l = self.state.tree.layout(child)?;

			if let Some(widget) = self.state.widgets.get(widget_id) {
				let mut widget = widget.lock();
				let child_size = Vec2::new(l.size.width, l.size.height);
				widget.data.aligned_pos = widget
					.data
					.style
					.placement
					.map(|placement| placement.resolve(&parent_box, child_size));
			}

			self.apply_alignment(child)?;
		}

		Ok(())
	}

	/// Absolute boundary on the screen, as of the last `update`.
	pub fn get_widget_boundary(&self, widget_id: WidgetID) -> Option<Boundary> {
		let mut node = *self.state.nodes.get(widget_id)?;
		let l = self.state.tree.layout(node).ok()?;
		let size = Vec2::new(l.size.width, l.size.height);

		let mut pos = Vec2::ZERO;
		loop {
			let l = self.state.tree.layout(node).ok()?;
			let id = *self.state.tree.get_node_context(node)?;
			pos += local_pos(&self.state.widgets.get(id)?.lock().data, l);

			match self.state.tree.parent(node) {
				Some(parent) => node = parent,
				None => break,
			}
		}

		Some(Boundary::from_pos_size(pos, size))
	}

	pub fn print_tree(&self) {
		self.print_node(self.root_node, 0);
	}

	fn print_node(&self, node_id: taffy::NodeId, depth: usize) {
		let Some(widget_id) = self.state.tree.get_node_context(node_id).copied() else {
			return;
		};
		let Some(widget) = self.state.widgets.get(widget_id) else {
			return;
		};

		if let Some(boundary) = self.get_widget_boundary(widget_id) {
			let widget = widget.lock();
			log::debug!(
				"{:indent$}{:?} {widget_id:?} pos={} size={} state={} {}",
				"",
				widget.obj.get_type(),
				boundary.pos,
				boundary.size,
				widget.data.state,
				widget.obj.debug_print(),
				indent = depth * 2,
			);
		}

		for child in self.state.tree.child_ids(node_id) {
			self.print_node(child, depth + 1);
		}
	}
}

#[cfg(test)]
pub(crate) fn test_layout() -> Layout {
	use crate::{
		drawing::Color,
		font::{FontConfig, FontDesc},
		globals::Defaults,
	};

	let globals = LabelGlobals::new(
		&FontConfig {
			load_system_fonts: true,
			..Default::default()
		},
		FontDesc::new(16.0),
		Defaults {
			text_color: Color::new(1.0, 1.0, 1.0, 1.0),
		},
	)
	.unwrap();

	Layout::new(globals, Vec2::new(480.0, 320.0)).unwrap()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::font::FontDesc;

	#[test]
	fn container_is_placed_by_alignment() {
		let mut layout = test_layout();
		let root = layout.root_widget;
		let panel = layout.add_container(root, Vec2::new(100.0, 50.0)).unwrap();
		layout.align(panel, Align::BottomRight, -10, -10).unwrap();
		layout.update(Vec2::new(480.0, 320.0)).unwrap();

		let boundary = layout.get_widget_boundary(panel).unwrap();
		assert_eq!(boundary.pos, Vec2::new(370.0, 260.0));
		assert_eq!(boundary.size, Vec2::new(100.0, 50.0));
	}

	#[test]
	fn alignment_follows_screen_resize() {
		let mut layout = test_layout();
		let root = layout.root_widget;
		let panel = layout.add_container(root, Vec2::new(100.0, 50.0)).unwrap();
		layout.align(panel, Align::Center, 0, 0).unwrap();

		layout.update(Vec2::new(480.0, 320.0)).unwrap();
		assert_eq!(layout.get_widget_boundary(panel).unwrap().pos, Vec2::new(190.0, 135.0));

		layout.update(Vec2::new(200.0, 100.0)).unwrap();
		assert_eq!(layout.get_widget_boundary(panel).unwrap().pos, Vec2::new(50.0, 25.0));
	}

	#[test]
	fn unaligned_widgets_sit_at_parent_origin() {
		let mut layout = test_layout();
		let root = layout.root_widget;
		let panel = layout.add_container(root, Vec2::new(100.0, 50.0)).unwrap();
		layout.align(panel, Align::TopLeft, 30, 40).unwrap();
		let inner = layout.add_container(panel, Vec2::new(10.0, 10.0)).unwrap();
		layout.update(Vec2::new(480.0, 320.0)).unwrap();

		assert_eq!(layout.get_widget_boundary(inner).unwrap().pos, Vec2::new(30.0, 40.0));
	}

	#[test]
	fn removing_container_drops_subtree() {
		let mut layout = test_layout();
		let root = layout.root_widget;
		let panel = layout.add_container(root, Vec2::new(100.0, 50.0)).unwrap();
		let first = layout.add_label(panel, "1").unwrap();
		let second = layout.add_label(panel, "2").unwrap();
		assert_eq!(layout.widget_count(), 4);

		layout.remove_widget(panel).unwrap();

		assert_eq!(layout.widget_count(), 1);
		assert!(!layout.contains(panel));
		assert!(!layout.contains(first));
		assert!(!layout.contains(second));
		assert!(layout.children(root).unwrap().is_empty());
		assert!(matches!(
			layout.remove_widget(panel),
			Err(LayoutError::InvalidWidget(_))
		));
	}

	#[test]
	fn root_cannot_be_removed() {
		let mut layout = test_layout();
		let root = layout.root_widget;
		assert!(matches!(layout.remove_widget(root), Err(LayoutError::RootRemoval)));
	}

	#[test]
	fn labels_inherit_container_font() {
		let mut layout = test_layout();
		let root = layout.root_widget;
		let big = layout.state.globals.fonts().register(FontDesc::new(40.0)).unwrap();
		let default_font = layout.state.globals.fonts().default_font();

		let panel = layout.add_container(root, Vec2::new(200.0, 100.0)).unwrap();
		let existing = layout.add_label(panel, "before").unwrap();
		assert_eq!(layout.get_as::<WidgetLabel>(existing).unwrap().get_font(), default_font);

		layout.set_text_font(panel, big, StyleState::Default).unwrap();
		let created = layout.add_label(panel, "after").unwrap();

		assert_eq!(layout.get_as::<WidgetLabel>(existing).unwrap().get_font(), big);
		assert_eq!(layout.get_as::<WidgetLabel>(created).unwrap().get_font(), big);
		assert_eq!(layout.resolve_font(root), default_font);
	}

	#[test]
	fn widget_state_selects_font() {
		let mut layout = test_layout();
		let root = layout.root_widget;
		let regular = layout.state.globals.fonts().register(FontDesc::new(12.0)).unwrap();
		let pressed = layout.state.globals.fonts().register(FontDesc::new(18.0)).unwrap();

		let label = layout.add_label(root, "ok").unwrap();
		layout.set_text_font(label, regular, StyleState::Default).unwrap();
		layout.set_text_font(label, pressed, StyleState::Pressed).unwrap();
		assert_eq!(layout.get_as::<WidgetLabel>(label).unwrap().get_font(), regular);

		layout.set_widget_state(label, StyleState::Pressed).unwrap();
		assert_eq!(layout.get_as::<WidgetLabel>(label).unwrap().get_font(), pressed);

		layout.set_widget_state(label, StyleState::Disabled).unwrap();
		assert_eq!(layout.get_as::<WidgetLabel>(label).unwrap().get_font(), regular);
	}

	#[test]
	fn removed_font_falls_back() {
		let mut layout = test_layout();
		let root = layout.root_widget;
		let temp = layout.state.globals.fonts().register(FontDesc::new(30.0)).unwrap();
		let label = layout.add_label(root, "x").unwrap();
		layout.set_text_font(label, temp, StyleState::Default).unwrap();

		let default_font = layout.state.globals.fonts().default_font();
		layout.remove_font(temp).unwrap();
		assert_eq!(layout.resolve_font(label), default_font);
		assert_eq!(layout.get_as::<WidgetLabel>(label).unwrap().get_font(), default_font);
		assert!(matches!(layout.remove_font(default_font), Err(LayoutError::DefaultFontRemoval)));
		assert!(matches!(
			layout.set_text_font(label, temp, StyleState::Default),
			Err(LayoutError::InvalidFont(_))
		));
	}

	#[test]
	fn label_size_ignores_children() {
		let mut layout = test_layout();
		let root = layout.root_widget;
		let title = layout.add_label(root, "title text").unwrap();
		layout.align(title, Align::TopMid, 0, 8).unwrap();
		layout.update(Vec2::new(480.0, 320.0)).unwrap();
		let before = layout.get_widget_boundary(title).unwrap();

		layout.add_label(title, "sub").unwrap();
		layout.add_container(title, Vec2::new(300.0, 300.0)).unwrap();
		layout.update(Vec2::new(480.0, 320.0)).unwrap();

		assert_eq!(layout.get_widget_boundary(title).unwrap(), before);
	}

	#[test]
	fn label_size_follows_text() {
		let mut layout = test_layout();
		let root = layout.root_widget;
		let label = layout.add_label(root, "1").unwrap();
		layout.add_label(label, "child").unwrap();
		layout.update(Vec2::new(480.0, 320.0)).unwrap();
		let short = layout.get_widget_boundary(label).unwrap().size;

		layout.set_label_text(label, "1111111111").unwrap();
		layout.update(Vec2::new(480.0, 320.0)).unwrap();
		let long = layout.get_widget_boundary(label).unwrap().size;

		assert!(long.x >= short.x);
		assert_eq!(long.y, short.y);
	}

	#[test]
	fn text_on_container_is_rejected() {
		let mut layout = test_layout();
		let root = layout.root_widget;
		assert!(matches!(
			layout.set_label_text(root, "nope"),
			Err(LayoutError::NotALabel(_))
		));
	}

	#[test]
	fn redraw_flag_toggles() {
		let mut layout = test_layout();
		assert!(layout.check_toggle_needs_redraw());
		assert!(!layout.check_toggle_needs_redraw());

		let root = layout.root_widget;
		layout.add_label(root, "hi").unwrap();
		assert!(layout.check_toggle_needs_redraw());
	}
}
