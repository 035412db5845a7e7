macro_rules! _debug {
  ($($tt:tt)+) => {
    #[cfg(feature = "tracing")]
    tracing::debug!($($tt)+);
  };
}

macro_rules! _trace {
  ($($tt:tt)+) => {
    #[cfg(feature = "tracing")]
    tracing::trace!($($tt)+);
  };
}

macro_rules! doc_alloc_failure {
  () => {
    "The global allocator couldn't provide the requested memory."
  };
}

macro_rules! doc_cap_overflow {
  () => {
    "The requested capacity exceeds the maximum size an allocation can have."
  };
}

