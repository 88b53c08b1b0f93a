use glam::{IVec2, Vec2};

/// Anchor point of a child relative to its parent.
///
/// The inner variants keep the child within the parent's content box, the
/// `Out*` variants put it right outside the parent's border box. For the
/// outside variants the first word names the parent side the child touches.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Align {
	#[default]
	Default,
	TopLeft,
	TopMid,
	TopRight,
	LeftMid,
	Center,
	RightMid,
	BottomLeft,
	BottomMid,
	BottomRight,
	OutTopLeft,
	OutTopMid,
	OutTopRight,
	OutBottomLeft,
	OutBottomMid,
	OutBottomRight,
	OutLeftTop,
	OutLeftMid,
	OutLeftBottom,
	OutRightTop,
	OutRightMid,
	OutRightBottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
	Start,
	Mid,
	End,
	Before,
	After,
}

impl Edge {
	fn resolve(self, start: f32, parent_len: f32, child_len: f32) -> f32 {
		match self {
			Self::Start => start,
			Self::Mid => start + (parent_len - child_len) / 2.0,
			Self::End => start + parent_len - child_len,
			Self::Before => start - child_len,
			Self::After => start + parent_len,
		}
	}
}

impl Align {
	pub const fn is_outside(self) -> bool {
		matches!(
			self,
			Self::OutTopLeft
				| Self::OutTopMid
				| Self::OutTopRight
				| Self::OutBottomLeft
				| Self::OutBottomMid
				| Self::OutBottomRight
				| Self::OutLeftTop
				| Self::OutLeftMid
				| Self::OutLeftBottom
				| Self::OutRightTop
				| Self::OutRightMid
				| Self::OutRightBottom
		)
	}

	// (horizontal, vertical)
	const fn edges(self) -> (Edge, Edge) {
		use Edge::{After, Before, End, Mid, Start};
		match self {
			Self::Default | Self::TopLeft => (Start, Start),
			Self::TopMid => (Mid, Start),
			Self::TopRight => (End, Start),
			Self::LeftMid => (Start, Mid),
			Self::Center => (Mid, Mid),
			Self::RightMid => (End, Mid),
			Self::BottomLeft => (Start, End),
			Self::BottomMid => (Mid, End),
			Self::BottomRight => (End, End),
			Self::OutTopLeft => (Start, Before),
			Self::OutTopMid => (Mid, Before),
			Self::OutTopRight => (End, Before),
			Self::OutBottomLeft => (Start, After),
			Self::OutBottomMid => (Mid, After),
			Self::OutBottomRight => (End, After),
			Self::OutLeftTop => (Before, Start),
			Self::OutLeftMid => (Before, Mid),
			Self::OutLeftBottom => (Before, End),
			Self::OutRightTop => (After, Start),
			Self::OutRightMid => (After, Mid),
			Self::OutRightBottom => (After, End),
		}
	}
}

/// Geometry of a parent widget, relative to its own border box origin.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ParentBox {
	pub size: Vec2,
	pub content_pos: Vec2,
	pub content_size: Vec2,
}

impl ParentBox {
	pub fn from_layout(l: &taffy::Layout) -> Self {
		Self {
			size: Vec2::new(l.size.width, l.size.height),
			content_pos: Vec2::new(l.border.left + l.padding.left, l.border.top + l.padding.top),
			content_size: Vec2::new(l.content_box_width(), l.content_box_height()),
		}
	}

	pub const fn from_size(size: Vec2) -> Self {
		Self {
			size,
			content_pos: Vec2::ZERO,
			content_size: size,
		}
	}
}

/// One-shot placement instruction: anchor plus pixel offset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
	pub align: Align,
	pub offset: IVec2,
}

impl Placement {
	pub const fn new(align: Align, x_ofs: i32, y_ofs: i32) -> Self {
		Self {
			align,
			offset: IVec2::new(x_ofs, y_ofs),
		}
	}

	/// Position of the child's border box, relative to the parent's border box origin.
	pub fn resolve(&self, parent: &ParentBox, child_size: Vec2) -> Vec2 {
		let (start, len) = if self.align.is_outside() {
			(Vec2::ZERO, parent.size)
		} else {
			(parent.content_pos, parent.content_size)
		};

		let (horiz, vert) = self.align.edges();
		let pos = Vec2::new(
			horiz.resolve(start.x, len.x, child_size.x),
			vert.resolve(start.y, len.y, child_size.y),
		);

		pos + self.offset.as_vec2()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::str::FromStr;

	const PARENT: ParentBox = ParentBox::from_size(Vec2::new(200.0, 100.0));
	const CHILD: Vec2 = Vec2::new(40.0, 20.0);

	#[test]
	fn top_left_without_offset_is_origin() {
		let pos = Placement::new(Align::TopLeft, 0, 0).resolve(&PARENT, CHILD);
		assert_eq!(pos, Vec2::ZERO);
	}

	#[test]
	fn default_behaves_as_top_left() {
		let a = Placement::new(Align::Default, 3, 4).resolve(&PARENT, CHILD);
		let b = Placement::new(Align::TopLeft, 3, 4).resolve(&PARENT, CHILD);
		assert_eq!(a, b);
	}

	#[test]
	fn center_offset_moves_child_center() {
		let pos = Placement::new(Align::Center, 10, -5).resolve(&PARENT, CHILD);
		let center = pos + CHILD / 2.0;
		assert_eq!(center, Vec2::new(110.0, 45.0));
	}

	#[test]
	fn bottom_right_touches_corner() {
		let pos = Placement::new(Align::BottomRight, 0, 0).resolve(&PARENT, CHILD);
		assert_eq!(pos + CHILD, PARENT.size);
	}

	#[test]
	fn inner_anchors_respect_padding() {
		let parent = ParentBox {
			size: Vec2::new(200.0, 100.0),
			content_pos: Vec2::new(10.0, 5.0),
			content_size: Vec2::new(180.0, 90.0),
		};
		let pos = Placement::new(Align::TopLeft, 0, 0).resolve(&parent, CHILD);
		assert_eq!(pos, Vec2::new(10.0, 5.0));

		let pos = Placement::new(Align::BottomRight, 0, 0).resolve(&parent, CHILD);
		assert_eq!(pos, Vec2::new(150.0, 75.0));
	}

	#[test]
	fn outside_anchors_ignore_padding() {
		let parent = ParentBox {
			size: Vec2::new(200.0, 100.0),
			content_pos: Vec2::new(10.0, 5.0),
			content_size: Vec2::new(180.0, 90.0),
		};

		let pos = Placement::new(Align::OutTopLeft, 0, 0).resolve(&parent, CHILD);
		assert_eq!(pos, Vec2::new(0.0, -20.0));

		let pos = Placement::new(Align::OutRightMid, 0, 0).resolve(&parent, CHILD);
		assert_eq!(pos, Vec2::new(200.0, 40.0));

		let pos = Placement::new(Align::OutBottomMid, 0, 2).resolve(&parent, CHILD);
		assert_eq!(pos, Vec2::new(80.0, 102.0));

		let pos = Placement::new(Align::OutLeftBottom, 0, 0).resolve(&parent, CHILD);
		assert_eq!(pos, Vec2::new(-40.0, 80.0));
	}

	#[test]
	fn parses_snake_case_names() {
		assert_eq!(Align::from_str("center").unwrap(), Align::Center);
		assert_eq!(Align::from_str("out_right_mid").unwrap(), Align::OutRightMid);
		assert_eq!(Align::from_str("TOP_LEFT").unwrap(), Align::TopLeft);
		assert!(Align::from_str("middle").is_err());
		assert_eq!(Align::BottomMid.to_string(), "bottom_mid");
	}
}
