//! Stream extensions for monoids (feature = `"async"`).
//!
//! Adds `.combine_all()` and `.concat_stream()` to any
//! `futures::Stream`, folding the stream with your type's `combine`
//! operation.

use async_trait::async_trait;

use futures::Stream;
use futures::StreamExt;

use crate::class::Monoid;
use crate::class::Semigroup;

/// Extension trait for folding `Stream`s of semigroup values.
///
/// Automatically implemented for all `Stream` types:
///
/// - [`combine_all`](ConcatStreamExt::combine_all): fold starting from
///   the first element, returning `None` for empty streams.
/// - [`concat_stream`](ConcatStreamExt::concat_stream): fold starting
///   from `empty()`, total even for empty streams.
///
/// # Example
///
/// ```rust,ignore
/// use futures::stream;
/// use ringbox::concat_stream_ext::ConcatStreamExt;
/// use ringbox::primitives::Sum;
///
/// let s = stream::iter(vec![Sum(1), Sum(2), Sum(3), Sum(4)]);
/// assert_eq!(s.concat_stream().await, Sum(10));
/// ```
#[async_trait]
pub trait ConcatStreamExt: Stream + Sized + Unpin + Send {
    /// Combine all items from a (possibly empty) stream.
    ///
    /// Returns `None` if the stream yields no items.
    async fn combine_all(self) -> Option<Self::Item>
    where
        Self::Item: Semigroup + Send,
    {
        let mut s = self;
        let first = s.next().await?; // None → empty stream
        Some(
            s.fold(first, |acc, x| async move { acc.combine(&x) })
                .await,
        )
    }

    /// Fold all items from the stream starting at the identity.
    ///
    /// Works even if the stream is empty, producing `empty()`.
    async fn concat_stream(self) -> Self::Item
    where
        Self::Item: Monoid + Send,
    {
        self.fold(<Self::Item as Monoid>::empty(), |acc, x| async move {
            acc.combine(&x)
        })
        .await
    }
}

#[async_trait]
impl<T> ConcatStreamExt for T
where
    T: Stream + Sized + Unpin + Send,
    T::Item: Send,
{
    // Default method bodies from the trait are used.
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Sum;
    use futures::stream;

    #[tokio::test]
    async fn combine_all_sums() {
        let s = stream::iter(vec![Sum(1), Sum(2), Sum(3)]);
        assert_eq!(s.combine_all().await, Some(Sum(6)));
    }

    #[tokio::test]
    async fn combine_all_empty_stream_is_none() {
        let s = stream::iter(Vec::<Sum<i32>>::new());
        assert_eq!(s.combine_all().await, None);
    }

    #[tokio::test]
    async fn concat_stream_folds_from_identity() {
        let s = stream::iter(vec![Sum(1), Sum(2), Sum(3), Sum(4)]);
        assert_eq!(s.concat_stream().await, Sum(10));
    }

    #[tokio::test]
    async fn concat_stream_empty_is_identity() {
        let s = stream::iter(Vec::<String>::new());
        assert_eq!(s.concat_stream().await, String::new());
    }
}
