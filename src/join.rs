//! Joining sequences of text with a separator.
//!
//! [`join`] walks its input once and lets the buffer grow. [`join_sized`]
//! needs input it can walk twice for free (`Copy` iterables such as slices
//! and references to vectors or arrays) and reserves the exact output size
//! before copying anything.

use std::borrow::Cow;

/// Joins `items`, putting `separator` between consecutive elements.
pub fn join<I>(items: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut iter = items.into_iter();
    let mut result = String::new();
    if let Some(first) = iter.next() {
        result.push_str(first.as_ref());
        for item in iter {
            result.push_str(separator);
            result.push_str(item.as_ref());
        }
    }
    result
}

/// Like [`join`], but reserves the whole output up front.
pub fn join_sized<I>(items: I, separator: &str) -> String
where
    I: IntoIterator + Copy,
    I::Item: AsRef<str>,
{
    let (count, len) = items
        .into_iter()
        .fold((0usize, 0usize), |(count, len), item| {
            (count + 1, len + item.as_ref().len())
        });
    if count == 0 {
        return String::new();
    }

    let mut result = String::with_capacity(len + (count - 1) * separator.len());
    let mut iter = items.into_iter();
    if let Some(first) = iter.next() {
        result.push_str(first.as_ref());
        for item in iter {
            result.push_str(separator);
            result.push_str(item.as_ref());
        }
    }
    result
}

/// A text-like value that [`join_items`] can measure and append.
pub trait JoinItem {
    /// Length in bytes once appended.
    fn item_len(&self) -> usize;

    fn append_to(&self, out: &mut String);
}

impl JoinItem for str {
    fn item_len(&self) -> usize {
        self.len()
    }

    fn append_to(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl JoinItem for String {
    fn item_len(&self) -> usize {
        self.len()
    }

    fn append_to(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl JoinItem for char {
    fn item_len(&self) -> usize {
        self.len_utf8()
    }

    fn append_to(&self, out: &mut String) {
        out.push(*self);
    }
}

impl<'a> JoinItem for Cow<'a, str> {
    fn item_len(&self) -> usize {
        self.len()
    }

    fn append_to(&self, out: &mut String) {
        out.push_str(self);
    }
}

// A missing item still takes its slot, so separators stay in place.
impl<T: JoinItem> JoinItem for Option<T> {
    fn item_len(&self) -> usize {
        self.as_ref().map_or(0, |item| item.item_len())
    }

    fn append_to(&self, out: &mut String) {
        if let Some(item) = self {
            item.append_to(out);
        }
    }
}

impl<T: JoinItem + ?Sized> JoinItem for &T {
    fn item_len(&self) -> usize {
        (**self).item_len()
    }

    fn append_to(&self, out: &mut String) {
        (**self).append_to(out);
    }
}

/// Joins a fixed list of possibly different text-like items.
///
/// Usually called through the [`join_items!`](crate::join_items!) macro.
pub fn join_items<S>(separator: S, items: &[&dyn JoinItem]) -> String
where
    S: JoinItem,
{
    if items.is_empty() {
        return String::new();
    }
    let len = items.iter().map(|item| item.item_len()).sum::<usize>()
        + (items.len() - 1) * separator.item_len();

    let mut result = String::with_capacity(len);
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            separator.append_to(&mut result);
        }
        item.append_to(&mut result);
    }
    result
}

/// Joins its arguments with the first one as separator.
///
/// ```
/// use str_extras::join_items;
///
/// let owned = String::from("bb");
/// assert_eq!(join_items!(",", "a", owned, 'c'), "a,bb,c");
/// assert_eq!(join_items!('-'), "");
/// ```
#[macro_export]
macro_rules! join_items {
    ($sep:expr) => {
        $crate::join::join_items($sep, &[])
    };
    ($sep:expr, $($item:expr),+ $(,)?) => {
        $crate::join::join_items($sep, &[$(&$item as &dyn $crate::join::JoinItem),+])
    };
}
