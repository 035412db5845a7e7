use crate::collection::DequeError;
use core::fmt::{Debug, Display, Formatter};

#[cfg(target_pointer_width = "64")]
const _: () = {
  assert!(size_of::<Error>() <= 24);
};

/// Grouped individual errors
#[derive(Debug)]
pub enum Error {
  // External
  //
  Fmt(core::fmt::Error),
  #[cfg(feature = "_tracing-tree")]
  TryInitError(tracing_subscriber::util::TryInitError),

  // Internal
  //
  DequeError(DequeError),
}

impl Display for Error {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Debug>::fmt(self, f)
  }
}

impl core::error::Error for Error {}

impl From<core::fmt::Error> for Error {
  #[inline]
  fn from(from: core::fmt::Error) -> Self {
    Self::Fmt(from)
  }
}

#[cfg(feature = "_tracing-tree")]
impl From<tracing_subscriber::util::TryInitError> for Error {
  #[inline]
  fn from(from: tracing_subscriber::util::TryInitError) -> Self {
    Self::TryInitError(from)
  }
}

impl From<DequeError> for Error {
  #[inline]
  fn from(from: DequeError) -> Self {
    Self::DequeError(from)
  }
}
