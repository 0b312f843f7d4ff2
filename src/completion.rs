use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Deferred delivery of an already-computed command result.
///
/// Every command applies its store transition synchronously inside the
/// method call, but the result must never be observable within that
/// same turn of the cooperative scheduler. `Completion` holds the
/// result and refuses to resolve on its first poll, waking itself so
/// the runtime comes back on a later turn. Completions awaited in the
/// order they were issued therefore resolve in that same order.
///
/// For commands where a completion is optional, the caller simply drops
/// the `Completion`; the store transition has already happened and is
/// not undone.
#[derive(Debug)]
#[must_use = "a Completion delivers the command result on a later scheduler turn"]
pub struct Completion<T> {
    result: Option<T>,
    deferred: bool,
}

impl<T> Completion<T> {
    pub(crate) fn new(result: T) -> Completion<T> {
        Completion {
            result: Some(result),
            deferred: false,
        }
    }
}

impl<T: Unpin> Future for Completion<T> {
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        let this = self.get_mut();

        // First poll always pends, pushing delivery to the next turn.
        if !this.deferred {
            this.deferred = true;
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }

        match this.result.take() {
            Some(result) => Poll::Ready(result),
            None => panic!("Completion polled after it already resolved"),
        }
    }
}
