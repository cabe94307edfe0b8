//! Algebra over asynchronous computations (feature = `"async"`).
//!
//! Two pass-through combinators, neither of which adds scheduling
//! semantics of its own:
//!
//! - [`semigroup`]: sequence two async computations and combine their
//!   results with an inner [`Semigroup`]. Strictly sequential: the
//!   left computation runs to completion before the right starts.
//! - [`concat_all`]: drive a batch of computations to completion and
//!   fold their outputs with an inner [`Monoid`]'s `concat`. Progress
//!   interleaving is whatever `futures::future::join_all` and the host
//!   runtime provide; results are combined in input order once all
//!   have completed.
//!
//! Cancellation, timeouts, and ordering guarantees are exactly those
//! of the underlying future primitive.

use std::future::Future;

use futures::future::join_all;
use futures::future::BoxFuture;
use futures::FutureExt;

use crate::instance::Monoid;
use crate::instance::Semigroup;

/// Sequential composition of asynchronous computations under an inner
/// semigroup.
///
/// The carrier is `BoxFuture<'static, A>`; `prepend(x, y)` is the
/// computation that awaits `x`, then awaits `y`, then combines the two
/// results with `inner`. Associativity follows from the inner
/// semigroup's.
///
/// # Example
///
/// ```rust,ignore
/// use futures::FutureExt;
/// use ringbox::instance::semigroup;
/// use ringbox::sequenced;
///
/// let seq = sequenced::semigroup(semigroup::sum::<i32>().into_semigroup());
/// let fut = seq.prepend(async { 3 }.boxed(), async { 4 }.boxed());
/// assert_eq!(fut.await, 7);
/// ```
pub fn semigroup<A>(inner: Semigroup<A>) -> Semigroup<BoxFuture<'static, A>>
where
    A: Send + 'static,
{
    Semigroup::new(move |x: BoxFuture<'static, A>, y: BoxFuture<'static, A>| {
        let inner = inner.clone();
        async move {
            let a = x.await;
            let b = y.await;
            inner.prepend(a, b)
        }
        .boxed()
    })
}

/// Run every computation to completion, then fold the results with
/// the inner monoid's `concat`, in input order.
///
/// An empty batch produces the monoid's identity.
pub async fn concat_all<A, I>(monoid: &Monoid<A>, futures: I) -> A
where
    A: Clone + Send + Sync + 'static,
    I: IntoIterator,
    I::Item: Future<Output = A>,
{
    let results = join_all(futures).await;
    monoid.concat(results)
}
