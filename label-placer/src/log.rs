use std::fmt::Display;

/// Logs the error side of a `Result` and passes it through unchanged.
pub trait LogErr {
	fn log_err_with(self, context: &str) -> Self;
	fn log_warn_with(self, context: &str) -> Self;
}

impl<T, E> LogErr for Result<T, E>
where
	E: Display,
{
	fn log_err_with(self, context: &str) -> Self {
		if let Err(error) = &self {
			log::error!("{context}: {error}");
		}
		self
	}

	fn log_warn_with(self, context: &str) -> Self {
		if let Err(error) = &self {
			log::warn!("{context}: {error}");
		}
		self
	}
}
