use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Similar to [`Result::unwrap`], but only for errors, and panics with the error's own
    /// [`Display`](std::fmt::Display) message rather than its [`Debug`] representation.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{error}"),
        }
    }
}
