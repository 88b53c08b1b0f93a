use crate::{font::FontID, layout::WidgetID};

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
	#[error("widget {0:?} does not exist")]
	InvalidWidget(WidgetID),
	#[error("font {0:?} is not registered")]
	InvalidFont(FontID),
	#[error("invalid font description: {0}")]
	InvalidFontDesc(String),
	#[error("widget {0:?} is not a label")]
	NotALabel(WidgetID),
	#[error("the root widget cannot be removed")]
	RootRemoval,
	#[error("the default font cannot be removed")]
	DefaultFontRemoval,
	#[error("layout tree error: {0}")]
	Taffy(#[from] taffy::TaffyError),
}

pub type LayoutResult<T> = Result<T, LayoutError>;
