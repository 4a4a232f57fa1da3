use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ptr;

use crate::util::fmt::write_list;

/// The shared contract of the node-based collections, [`LinkedStack`] and [`LinkedQueue`].
///
/// Implementors provide their size, an `add` method that routes to their own insertion semantics
/// (pushing for a stack, enqueueing for a queue) and a borrowed iterator in their own order. Every
/// other method is provided once here, in terms of those.
///
/// Two collections can only be compared or concatenated if they have the same type, so there is no
/// need to check the concrete kind at runtime.
///
/// [`LinkedStack`]: crate::collections::linked::LinkedStack
/// [`LinkedQueue`]: crate::collections::linked::LinkedQueue
pub trait Collection<T>: Default {
    type Iter<'a>: Iterator<Item = &'a T> where Self: 'a, T: 'a;

    /// Returns the number of items in the collection.
    fn len(&self) -> usize;

    /// Adds `item` to the collection, in whatever position the collection adds items to.
    fn add(&mut self, item: T);

    /// Returns a borrowed iterator over every item, in the collection's iteration order.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    /// Returns true if the collection contains no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Creates a collection by adding every item of `source`, in order, to an empty one.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::linked::LinkedQueue;
    /// # use linear_collections::collections::traits::Collection;
    /// let queue = LinkedQueue::from_source([1, 2, 3]);
    /// assert_eq!(Collection::len(&queue), 3);
    /// ```
    fn from_source<I: IntoIterator<Item = T>>(source: I) -> Self {
        let mut collection = Self::default();
        for item in source {
            collection.add(item);
        }
        collection
    }

    /// Creates a new collection containing a copy of every item of `self` followed by every item
    /// of `other`. This is what `&a + &b` does for implementors.
    fn concat(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut result = Self::from_source(self.iter().cloned());
        for item in other.iter() {
            result.add(item.clone());
        }
        result
    }

    /// Returns true if both collections have the same length and pairwise equal items, in
    /// iteration order.
    fn items_eq(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        if ptr::eq(self, other) {
            return true;
        }
        self.len() == other.len() && self.iter().eq(other.iter())
    }

    /// Writes every item in iteration order as a bracketed, comma-separated list. (`[1, 2, 3]`)
    fn fmt_items(&self, f: &mut Formatter<'_>) -> fmt::Result
    where
        T: Display,
    {
        write_list(f, self.iter())
    }
}

/// Debug formats the items of a collection as a list.
pub(crate) struct DebugItems<'a, C, T>(pub &'a C, pub PhantomData<T>);

impl<C: Collection<T>, T: Debug> Debug for DebugItems<'_, C, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Implements the standard traits of a [`Collection`] in terms of its provided methods:
/// equality, formatting, cloning, concatenation with `+`, [`Extend`] and [`FromIterator`].
macro_rules! impl_collection_traits {
    ($name:ident) => {
        impl<T: PartialEq> PartialEq for $name<T> {
            fn eq(&self, other: &Self) -> bool {
                $crate::collections::traits::Collection::items_eq(self, other)
            }
        }

        impl<T: Eq> Eq for $name<T> {}

        impl<T: ::std::fmt::Display> ::std::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::collections::traits::Collection::fmt_items(self, f)
            }
        }

        impl<T: ::std::fmt::Debug> ::std::fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field(
                        "contents",
                        &$crate::collections::traits::collection::DebugItems(
                            self,
                            ::std::marker::PhantomData::<T>,
                        ),
                    )
                    .field("len", &self.len())
                    .finish()
            }
        }

        impl<T: Clone> Clone for $name<T> {
            fn clone(&self) -> Self {
                $crate::collections::traits::Collection::from_source(self.iter().cloned())
            }
        }

        impl<T: Clone> ::std::ops::Add for &$name<T> {
            type Output = $name<T>;

            fn add(self, rhs: Self) -> Self::Output {
                $crate::collections::traits::Collection::concat(self, rhs)
            }
        }

        impl<T> ::std::ops::Add for $name<T> {
            type Output = $name<T>;

            fn add(mut self, rhs: Self) -> Self::Output {
                self.extend(rhs);
                self
            }
        }

        impl<T> Extend<T> for $name<T> {
            fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
                for item in iter {
                    $crate::collections::traits::Collection::add(self, item);
                }
            }
        }

        impl<T> FromIterator<T> for $name<T> {
            fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
                $crate::collections::traits::Collection::from_source(iter)
            }
        }
    };
}

pub(crate) use impl_collection_traits;
