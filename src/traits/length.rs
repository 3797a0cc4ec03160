use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Containers whose size the length checks can measure.
///
/// Text reports its length in UTF-8 bytes, not characters, so `"ë"` has a
/// length of 2. Collections report their element or entry count.
///
/// # Examples
///
/// ```
/// use valtra::Length;
///
/// assert_eq!("tëst".length(), 5);
/// assert_eq!(vec![1, 2, 3].length(), 3);
/// ```
pub trait Length {
    fn length(&self) -> usize;
}

impl Length for str {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl Length for String {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for [T] {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Length for [T; N] {
    #[inline]
    fn length(&self) -> usize {
        N
    }
}

impl<T> Length for Vec<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for VecDeque<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Length for HashMap<K, V, S> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> Length for BTreeMap<K, V> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, S> Length for HashSet<T, S> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for BTreeSet<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<L: Length + ?Sized> Length for &L {
    #[inline]
    fn length(&self) -> usize {
        (**self).length()
    }
}
