use glam::Vec2;

#[derive(Default, Copy, Clone)]
pub struct Transform {
	// absolute, accumulated from every parent
	pub pos: Vec2,
	pub dim: Vec2,
}

pub struct TransformStack {
	// never empty, the bottom entry is the screen origin
	stack: Vec<Transform>,
}

impl TransformStack {
	pub fn new() -> Self {
		Self {
			stack: vec![Transform::default()],
		}
	}

	/// `t.pos` is relative to the current top.
	pub fn push(&mut self, mut t: Transform) {
		t.pos += self.get().pos;
		self.stack.push(t);
	}

	pub fn pop(&mut self) {
		debug_assert!(self.stack.len() > 1);
		if self.stack.len() > 1 {
			self.stack.pop();
		}
	}

	pub fn get(&self) -> &Transform {
		&self.stack[self.stack.len() - 1]
	}
}

impl Default for TransformStack {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn positions_accumulate() {
		let mut stack = TransformStack::new();
		stack.push(Transform {
			pos: Vec2::new(10.0, 20.0),
			dim: Vec2::new(100.0, 100.0),
		});
		stack.push(Transform {
			pos: Vec2::new(-5.0, 5.0),
			dim: Vec2::new(10.0, 10.0),
		});
		assert_eq!(stack.get().pos, Vec2::new(5.0, 25.0));
		assert_eq!(stack.get().dim, Vec2::new(10.0, 10.0));

		stack.pop();
		assert_eq!(stack.get().pos, Vec2::new(10.0, 20.0));
	}

	#[test]
	fn deep_nesting_keeps_accumulating() {
		let mut stack = TransformStack::new();
		for _ in 0..200 {
			stack.push(Transform {
				pos: Vec2::ONE,
				dim: Vec2::ZERO,
			});
		}
		assert_eq!(stack.get().pos, Vec2::splat(200.0));

		for _ in 0..200 {
			stack.pop();
		}
		assert_eq!(stack.get().pos, Vec2::ZERO);
	}
}
