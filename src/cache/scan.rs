//! Key Scan Module
//!
//! Best-effort key enumeration. Store faults end the scan instead of
//! surfacing to the caller, but the truncation stays observable.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::stream::{BoxStream, Stream, StreamExt};
use futures::ready;
use tracing::warn;

use crate::error::Result;

// == Scan Outcome ==
/// Keys collected by a scan, tagged with whether the scan ran to the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The store enumerated every matching key
    Complete(Vec<String>),
    /// The store failed partway; holds the keys seen before the failure
    Partial(Vec<String>),
}

impl ScanOutcome {
    pub fn keys(&self) -> &[String] {
        match self {
            ScanOutcome::Complete(keys) | ScanOutcome::Partial(keys) => keys,
        }
    }

    pub fn into_keys(self) -> Vec<String> {
        match self {
            ScanOutcome::Complete(keys) | ScanOutcome::Partial(keys) => keys,
        }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, ScanOutcome::Partial(_))
    }
}

// == Key Scan ==
/// Single-pass stream of keys produced by [`CacheClient::iterate`].
///
/// Yields only keys starting with the requested prefix. The first store error
/// terminates the stream; [`KeyScan::is_truncated`] reports it afterwards.
///
/// [`CacheClient::iterate`]: crate::cache::CacheClient::iterate
pub struct KeyScan<'a> {
    inner: Option<BoxStream<'a, Result<String>>>,
    prefix: Option<String>,
    truncated: bool,
}

impl<'a> KeyScan<'a> {
    pub(crate) fn new(inner: BoxStream<'a, Result<String>>, prefix: Option<String>) -> Self {
        Self {
            inner: Some(inner),
            prefix,
            truncated: false,
        }
    }

    /// True once a store fault has cut the scan short.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Drains the scan and reports whether it completed.
    pub async fn collect_outcome(mut self) -> ScanOutcome {
        let mut keys = Vec::new();
        while let Some(key) = self.next().await {
            keys.push(key);
        }

        if self.truncated {
            ScanOutcome::Partial(keys)
        } else {
            ScanOutcome::Complete(keys)
        }
    }

    fn matches(&self, key: &str) -> bool {
        self.prefix.as_deref().map_or(true, |p| key.starts_with(p))
    }
}

impl Stream for KeyScan<'_> {
    type Item = String;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<String>> {
        let this = self.get_mut();

        loop {
            let Some(inner) = this.inner.as_mut() else {
                return Poll::Ready(None);
            };

            match ready!(inner.poll_next_unpin(cx)) {
                Some(Ok(key)) => {
                    if this.matches(&key) {
                        return Poll::Ready(Some(key));
                    }
                }
                Some(Err(err)) => {
                    warn!(
                        component = "CacheClient",
                        prefix = this.prefix.as_deref().unwrap_or(""),
                        error = %err,
                        "Key scan interrupted, returning partial result"
                    );
                    this.inner = None;
                    this.truncated = true;
                    return Poll::Ready(None);
                }
                None => {
                    this.inner = None;
                    return Poll::Ready(None);
                }
            }
        }
    }
}
