use std::cmp::Ordering;
use std::fmt;

use crate::errors::RankError;

/// Placement rule applied when an inserted element compares equal to
/// elements already in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Place the new element at the start of the run of equal elements.
    InsertBeforeEqual,
    /// Place the new element at the end of the run of equal elements.
    InsertAfterEqual,
}

/// A fixed-capacity collection that keeps its elements sorted by a
/// caller-supplied comparison, evicting the lowest-ranked element when a
/// new one is inserted into a full list.
///
/// The comparison returns [`Ordering::Less`] when its first argument
/// ranks before (better than) its second. The list is kept sorted
/// best-first, so the element at the front is the best seen so far and
/// the element at the back is the next eviction candidate.
///
/// An optional disposal callback, attached at construction with
/// [`disposal`](BoundedRankedList::disposal), is handed every element
/// that permanently leaves the list, whether by eviction, explicit
/// removal, [`clear`](BoundedRankedList::clear), or drop. Without one,
/// departing elements are simply dropped.
///
/// # Examples
///
/// ```
/// # use toplist::ranked_list::BoundedRankedList;
/// // Track the two largest values seen.
/// let mut top = BoundedRankedList::new(2, |a: &u64, b: &u64| b.cmp(a));
///
/// top.insert(100);
/// top.insert(200);
/// top.insert(50); // not better than anything retained, dropped again
///
/// let values: Vec<u64> = top.iter().copied().collect();
/// assert_eq!(values, vec![200, 100]);
/// ```
pub struct BoundedRankedList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    entries: Vec<T>,
    capacity: usize,
    compare: C,
    tie_break: TieBreak,
    disposal: Option<Box<dyn FnMut(T) + Send>>,
}

impl<T, C> BoundedRankedList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty list holding at most `capacity` elements, ranked
    /// by `compare`.
    ///
    /// Ties go after their equals ([`TieBreak::InsertAfterEqual`]) and no
    /// disposal callback is attached; both can be changed with the
    /// builder methods below. The backing vector is pre-allocated with
    /// room for one extra element, since insertion into a full list
    /// briefly holds the new element before the eviction decision.
    ///
    /// A capacity of zero is legal: every insertion is rejected and the
    /// inserted element goes straight to disposal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use toplist::ranked_list::BoundedRankedList;
    /// let list = BoundedRankedList::new(3, |a: &i32, b: &i32| a.cmp(b));
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 3);
    /// ```
    pub fn new(capacity: usize, compare: C) -> Self {
        Self {
            entries: Vec::with_capacity(capacity.saturating_add(1)),
            capacity,
            compare,
            tie_break: TieBreak::InsertAfterEqual,
            disposal: None,
        }
    }

    /// Sets the placement rule for elements that compare equal to
    /// existing ones.
    ///
    /// # Examples
    ///
    /// ```
    /// # use toplist::ranked_list::{BoundedRankedList, TieBreak};
    /// let mut list = BoundedRankedList::new(4, |a: &(u32, &str), b: &(u32, &str)| a.0.cmp(&b.0))
    ///     .tie_break(TieBreak::InsertBeforeEqual);
    ///
    /// list.insert((1, "first"));
    /// list.insert((1, "second"));
    ///
    /// // The later insertion was placed before its equal.
    /// assert_eq!(list.top().unwrap().1, "second");
    /// ```
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Attaches a callback invoked with every element that permanently
    /// leaves the list.
    ///
    /// The callback owns the departing element and decides what
    /// releasing it means: dropping it, returning it to a pool, closing
    /// a handle it wraps, and so on. It fires exactly once per departing
    /// element, from every removal path.
    ///
    /// # Examples
    ///
    /// ```
    /// # use toplist::ranked_list::BoundedRankedList;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::sync::Arc;
    ///
    /// let disposed = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&disposed);
    ///
    /// let mut best = BoundedRankedList::new(1, |a: &i32, b: &i32| a.cmp(b))
    ///     .disposal(move |_| { counter.fetch_add(1, Ordering::SeqCst); });
    ///
    /// best.insert(2);
    /// best.insert(1); // evicts 2
    /// assert_eq!(disposed.load(Ordering::SeqCst), 1);
    /// ```
    pub fn disposal(mut self, disposal: impl FnMut(T) + Send + 'static) -> Self {
        self.disposal = Some(Box::new(disposal));
        self
    }

    /// Inserts `element` at its ranked position, evicting the
    /// lowest-ranked element if the list was already full.
    ///
    /// Returns `false` only when the list was full and `element` itself
    /// ended up last, meaning it ranked no better than everything
    /// already present: it is immediately evicted again (and handed to
    /// the disposal callback), leaving the list unchanged. In every
    /// other case the element stays and `true` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use toplist::ranked_list::BoundedRankedList;
    /// let mut smallest = BoundedRankedList::new(3, |a: &i32, b: &i32| a.cmp(b));
    ///
    /// assert!(smallest.insert(5));
    /// assert!(smallest.insert(3));
    /// assert!(smallest.insert(8));
    /// assert!(smallest.insert(1));  // evicts 8
    /// assert!(!smallest.insert(9)); // worse than all three, rejected
    ///
    /// let values: Vec<i32> = smallest.iter().copied().collect();
    /// assert_eq!(values, vec![1, 3, 5]);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        let was_full = self.entries.len() >= self.capacity;
        let idx = self.insertion_index(&element);
        self.entries.insert(idx, element);

        if !was_full {
            return true;
        }

        // The insertion overflowed the capacity by one. If the new
        // element itself landed last, it is the eviction candidate and
        // the insert counts as rejected.
        let accepted = idx + 1 != self.entries.len();
        if let Some(evicted) = self.entries.pop() {
            self.dispose(evicted);
        }
        accepted
    }

    /// Removes the first element equal to `element` (by `==`, not by the
    /// ranking comparison), handing it to the disposal callback.
    ///
    /// Returns [`RankError::NotFound`] if no element matches.
    ///
    /// # Examples
    ///
    /// ```
    /// # use toplist::ranked_list::BoundedRankedList;
    /// # use toplist::errors::RankError;
    /// let mut list = BoundedRankedList::new(3, |a: &i32, b: &i32| a.cmp(b));
    /// list.insert(1);
    ///
    /// assert!(list.remove_first(&1).is_ok());
    /// assert_eq!(list.remove_first(&1), Err(RankError::NotFound));
    /// ```
    pub fn remove_first(&mut self, element: &T) -> Result<(), RankError>
    where
        T: PartialEq,
    {
        match self.entries.iter().position(|e| e == element) {
            Some(idx) => {
                let removed = self.entries.remove(idx);
                self.dispose(removed);
                Ok(())
            }
            None => Err(RankError::NotFound),
        }
    }

    /// Removes every element equal to `element`, handing each one to the
    /// disposal callback. Removing a value with no occurrences is a
    /// no-op.
    pub fn remove_all(&mut self, element: &T)
    where
        T: PartialEq,
    {
        let mut idx = 0;
        while idx < self.entries.len() {
            if self.entries[idx] == *element {
                let removed = self.entries.remove(idx);
                self.dispose(removed);
            } else {
                idx += 1;
            }
        }
    }

    /// Removes every element, handing each one to the disposal callback
    /// in ranked order. Also runs when the list is dropped.
    pub fn clear(&mut self) {
        for element in std::mem::take(&mut self.entries) {
            self.dispose(element);
        }
    }

    /// Returns the best-ranked element, or [`RankError::EmptyContainer`]
    /// if the list holds nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use toplist::ranked_list::BoundedRankedList;
    /// # use toplist::errors::RankError;
    /// let mut list = BoundedRankedList::new(2, |a: &i32, b: &i32| a.cmp(b));
    /// assert_eq!(list.top(), Err(RankError::EmptyContainer));
    ///
    /// list.insert(4);
    /// list.insert(2);
    /// assert_eq!(list.top(), Ok(&2));
    /// ```
    pub fn top(&self) -> Result<&T, RankError> {
        self.entries.first().ok_or(RankError::EmptyContainer)
    }

    /// Returns the lowest-ranked element, the next eviction candidate,
    /// or [`RankError::EmptyContainer`] if the list holds nothing.
    pub fn bottom(&self) -> Result<&T, RankError> {
        self.entries.last().ok_or(RankError::EmptyContainer)
    }

    /// Iterates over the elements best-first.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Returns the number of elements currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no elements are held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of elements the list will hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Consumes the list and returns the remaining elements best-first.
    ///
    /// Ownership transfers to the caller, so the disposal callback is
    /// not invoked. Useful for merging per-worker lists:
    ///
    /// ```
    /// # use toplist::ranked_list::BoundedRankedList;
    /// let mut a = BoundedRankedList::new(2, |x: &i32, y: &i32| x.cmp(y));
    /// let mut b = BoundedRankedList::new(2, |x: &i32, y: &i32| x.cmp(y));
    /// a.insert(1);
    /// a.insert(4);
    /// b.insert(2);
    /// b.insert(3);
    ///
    /// for value in b.into_sorted_vec() {
    ///     a.insert(value);
    /// }
    /// let merged: Vec<i32> = a.into_sorted_vec();
    /// assert_eq!(merged, vec![1, 2]);
    /// ```
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        std::mem::take(&mut self.entries)
    }

    /// Binary search for the slot `element` should occupy, honoring the
    /// tie-break rule within its run of equals.
    fn insertion_index(&self, element: &T) -> usize {
        match self.tie_break {
            TieBreak::InsertBeforeEqual => self
                .entries
                .partition_point(|e| (self.compare)(e, element) == Ordering::Less),
            TieBreak::InsertAfterEqual => self
                .entries
                .partition_point(|e| (self.compare)(e, element) != Ordering::Greater),
        }
    }

    fn dispose(&mut self, element: T) {
        if let Some(disposal) = self.disposal.as_mut() {
            disposal(element);
        }
    }
}

impl<T, C> Drop for BoundedRankedList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, C> fmt::Debug for BoundedRankedList<T, C>
where
    T: fmt::Debug,
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedRankedList")
            .field("entries", &self.entries)
            .field("capacity", &self.capacity)
            .field("tie_break", &self.tie_break)
            .finish_non_exhaustive()
    }
}
