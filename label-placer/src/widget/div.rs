use super::{WidgetObj, WidgetState, WidgetType};

/// Plain container. Draws nothing on its own.
pub struct WidgetDiv {}

impl WidgetDiv {
	pub fn create() -> WidgetState {
		WidgetState::new(Box::new(Self {}))
	}
}

impl WidgetObj for WidgetDiv {
	fn draw(&mut self, _state: &mut super::DrawState, _params: &super::DrawParams) {
		// no-op
	}

	fn get_type(&self) -> WidgetType {
		WidgetType::Div
	}

	fn debug_print(&self) -> String {
		String::default()
	}
}
