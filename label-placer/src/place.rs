use crate::{align::Align, log::LogErr, toolkit::Toolkit, widget::StyleState};

fn configure_label<T: Toolkit + ?Sized>(
	toolkit: &mut T,
	label: T::Widget,
	text: &str,
	font: T::Font,
	align: Align,
	x_ofs: i32,
	y_ofs: i32,
) -> Result<(), T::Error> {
	toolkit.set_label_text(label, text)?;
	toolkit.set_text_font(label, font, StyleState::Default)?;
	toolkit.align(label, align, x_ofs, y_ofs)
}

/// Creates a label under `parent` showing `text` in `font`, anchored by `align` and shifted by the offsets.
///
/// Every call adds a new widget. The toolkit owns it afterwards; no handle is
/// returned. If any step fails after the label was created, the label is
/// removed again and the error is returned, leaving the tree as it was.
pub fn place_label<T: Toolkit + ?Sized>(
	toolkit: &mut T,
	parent: T::Widget,
	text: &str,
	font: T::Font,
	align: Align,
	x_ofs: i32,
	y_ofs: i32,
) -> Result<(), T::Error> {
	let label = toolkit.create_label(parent)?;

	if let Err(e) = configure_label(toolkit, label, text, font, align, x_ofs, y_ofs) {
		log::warn!("failed to set up label {label:?} under {parent:?}: {e}");
		let _ = toolkit
			.remove_widget(label)
			.log_err_with("failed to remove incomplete label");
		return Err(e);
	}

	log::debug!("placed label {label:?} under {parent:?} with {font:?} at {align} ({x_ofs}, {y_ofs})");
	Ok(())
}
