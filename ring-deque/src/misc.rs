//! Miscellaneous

pub(crate) mod hints;

/// A tracing register with optioned parameters.
///
/// The filter is read from the `RUST_LOG` environment variable and falls back to `fallback_opt`
/// when the variable is absent or invalid.
#[cfg(feature = "_tracing-tree")]
pub fn tracing_tree_init(fallback_opt: Option<&str>) -> crate::Result<()> {
  use tracing_subscriber::{
    prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
  };
  let fallback = fallback_opt.unwrap_or("");
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
  let tracing_tree = tracing_tree::HierarchicalLayer::default()
    .with_deferred_spans(true)
    .with_indent_amount(2)
    .with_indent_lines(true)
    .with_span_retrace(true)
    .with_targets(true)
    .with_thread_ids(true)
    .with_thread_names(true)
    .with_verbose_entry(false)
    .with_verbose_exit(false)
    .with_writer(std::io::stderr);
  tracing_subscriber::Registry::default().with(env_filter).with(tracing_tree).try_init()?;
  Ok(())
}

#[cfg(all(feature = "_tracing-tree", test))]
mod tests {
  use crate::collection::Deque;

  #[test]
  fn subscriber_does_not_disturb_growth() {
    let _rslt = crate::misc::tracing_tree_init(Some("debug"));
    let mut deque = Deque::new();
    for elem in 0..4 {
      let _ = deque.push_back(elem).unwrap();
    }
    assert_eq!(deque.capacity(), 4);
  }
}
