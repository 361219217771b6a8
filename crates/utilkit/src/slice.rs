//! Search, filter and removal helpers for slices and vectors.

use std::ops::Deref;

use crate::error::SliceError;

/// Returns the first element matching `predicate`, or `None`.
///
/// # Examples
///
/// ```
/// use utilkit::find_first;
///
/// let scores = [3, 8, 12, 8];
/// assert_eq!(find_first(&scores, |s| *s > 5), Some(&8));
/// assert_eq!(find_first(&scores, |s| *s > 100), None);
/// ```
pub fn find_first<T, F>(items: &[T], mut predicate: F) -> Option<&T>
where
    F: FnMut(&T) -> bool,
{
    items.iter().find(|item| predicate(item))
}

/// Mutable variant of [`find_first`].
///
/// The returned reference points into `items`, so writes through it are
/// visible in the source slice.
///
/// # Examples
///
/// ```
/// use utilkit::find_first_mut;
///
/// let mut names = vec!["ada".to_string(), "grace".to_string()];
/// if let Some(name) = find_first_mut(&mut names, |n| n.starts_with('g')) {
///     name.make_ascii_uppercase();
/// }
/// assert_eq!(names, ["ada", "GRACE"]);
/// ```
pub fn find_first_mut<T, F>(items: &mut [T], mut predicate: F) -> Option<&mut T>
where
    F: FnMut(&T) -> bool,
{
    items.iter_mut().find(|item| predicate(item))
}

/// Finds the first pointee in a slice of pointers (`Box<T>`, `Rc<T>`, `&T`).
///
/// The predicate sees the pointee and the pointee is returned, not the
/// pointer.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use utilkit::find_first_deref;
///
/// let shared = vec![Rc::new(1), Rc::new(2)];
/// assert_eq!(find_first_deref(&shared, |v| *v == 2), Some(&2));
/// ```
pub fn find_first_deref<P, F>(items: &[P], mut predicate: F) -> Option<&P::Target>
where
    P: Deref,
    F: FnMut(&P::Target) -> bool,
{
    items
        .iter()
        .map(|item| item.deref())
        .find(|target| predicate(target))
}

/// Returns the elements matching `predicate`, in their original order.
///
/// The input is not modified. With `Rc<T>` elements the result shares its
/// pointees with the input.
///
/// # Examples
///
/// ```
/// use utilkit::filter;
///
/// let letters = ["a", "b", "c"];
/// assert_eq!(filter(&letters, |l| *l == "b"), vec!["b"]);
/// assert!(filter(&letters, |l| *l == "z").is_empty());
/// ```
pub fn filter<T, F>(items: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).cloned().collect()
}

/// Borrowing variant of [`filter`]; the result refers into `items`.
pub fn filter_refs<T, F>(items: &[T], mut predicate: F) -> Vec<&T>
where
    F: FnMut(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).collect()
}

/// Removes and returns the element at `index`, shifting later elements left.
///
/// An out-of-range `index` leaves `items` untouched.
///
/// # Examples
///
/// ```
/// use utilkit::remove_ordered;
///
/// let mut list = vec!["a", "b", "c", "d"];
/// assert_eq!(remove_ordered(&mut list, 1), Ok("b"));
/// assert_eq!(list, ["a", "c", "d"]);
/// assert!(remove_ordered(&mut list, 3).is_err());
/// ```
///
/// # Errors
///
/// Returns [`SliceError::IndexOutOfRange`] if `index >= items.len()`.
pub fn remove_ordered<T>(items: &mut Vec<T>, index: usize) -> Result<T, SliceError> {
    check_index(items, index)?;
    Ok(items.remove(index))
}

/// Removes and returns the element at `index` by moving the last element
/// into its slot. O(1), but the order of the remaining elements changes.
///
/// An out-of-range `index` leaves `items` untouched.
///
/// # Examples
///
/// ```
/// use utilkit::remove_unordered;
///
/// let mut list = vec!["a", "b", "c", "d", "e"];
/// assert_eq!(remove_unordered(&mut list, 2), Ok("c"));
/// assert_eq!(list, ["a", "b", "e", "d"]);
/// ```
///
/// # Errors
///
/// Returns [`SliceError::IndexOutOfRange`] if `index >= items.len()`.
pub fn remove_unordered<T>(items: &mut Vec<T>, index: usize) -> Result<T, SliceError> {
    check_index(items, index)?;
    Ok(items.swap_remove(index))
}

fn check_index<T>(items: &[T], index: usize) -> Result<(), SliceError> {
    if index < items.len() {
        Ok(())
    } else {
        Err(SliceError::IndexOutOfRange {
            index,
            len: items.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    struct Player {
        name: &'static str,
        level: u32,
    }

    fn roster() -> Vec<Player> {
        vec![
            Player {
                name: "kira",
                level: 3,
            },
            Player {
                name: "milo",
                level: 7,
            },
            Player {
                name: "nova",
                level: 7,
            },
        ]
    }

    #[test]
    fn test_find_first_returns_lowest_index_match() {
        let players = roster();
        let found = find_first(&players, |p| p.level == 7).unwrap();
        assert_eq!(found.name, "milo");
    }

    #[test]
    fn test_find_first_no_match() {
        let players = roster();
        assert!(find_first(&players, |p| p.level > 10).is_none());
    }

    #[test]
    fn test_find_first_empty_slice() {
        let empty: Vec<Player> = Vec::new();
        assert!(find_first(&empty, |_| true).is_none());
    }

    #[test]
    fn test_find_first_mut_aliases_source() {
        let mut players = roster();
        let found = find_first_mut(&mut players, |p| p.name == "kira").unwrap();
        found.level = 4;
        assert_eq!(players[0].level, 4);
    }

    #[test]
    fn test_find_first_deref_boxed() {
        let players: Vec<Box<Player>> = roster().into_iter().map(Box::new).collect();
        let found = find_first_deref(&players, |p| p.name == "nova").unwrap();
        assert_eq!(found.level, 7);
        assert!(std::ptr::eq(found, &*players[2]));
    }

    #[test]
    fn test_find_first_deref_no_match() {
        let players: Vec<Rc<Player>> = roster().into_iter().map(Rc::new).collect();
        assert!(find_first_deref(&players, |p| p.name == "zed").is_none());
    }

    #[test]
    fn test_filter_preserves_order() {
        let players = roster();
        let names: Vec<_> = filter(&players, |p| p.level == 7)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["milo", "nova"]);
        assert_eq!(players.len(), 3);
    }

    #[test]
    fn test_filter_empty_result_is_empty_vec() {
        let result = filter(&[1, 2, 3], |n| *n > 3);
        assert_eq!(result, Vec::<i32>::new());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let numbers = [5, 2, 9, 4, 7, 1];
        let odd = |n: &i32| n % 2 == 1;
        let once = filter(&numbers, odd);
        assert_eq!(filter(&once, odd), once);
        assert!(once.len() <= numbers.len());
    }

    #[test]
    fn test_filter_rc_shares_pointees() {
        let players: Vec<Rc<Player>> = roster().into_iter().map(Rc::new).collect();
        let high = filter(&players, |p| p.level > 5);
        assert_eq!(high.len(), 2);
        assert!(Rc::ptr_eq(&high[0], &players[1]));
    }

    #[test]
    fn test_filter_refs_borrows_source() {
        let players = roster();
        let low = filter_refs(&players, |p| p.level < 5);
        assert_eq!(low.len(), 1);
        assert!(std::ptr::eq(low[0], &players[0]));
    }

    #[test]
    fn test_remove_ordered_shifts_left() {
        let mut list = vec!["a", "b", "c", "d"];
        assert_eq!(remove_ordered(&mut list, 1), Ok("b"));
        assert_eq!(list, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_remove_ordered_last_element() {
        let mut list = vec![1, 2, 3];
        assert_eq!(remove_ordered(&mut list, 2), Ok(3));
        assert_eq!(list, vec![1, 2]);
    }

    #[test]
    fn test_remove_ordered_out_of_range_is_untouched() {
        let mut list = vec![1, 2, 3];
        assert_eq!(
            remove_ordered(&mut list, 3),
            Err(SliceError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(list, vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_unordered_moves_last_into_slot() {
        let mut list = vec!["a", "b", "c", "d", "e"];
        assert_eq!(remove_unordered(&mut list, 2), Ok("c"));
        assert_eq!(list.len(), 4);
        assert!(!list.contains(&"c"));
        assert_eq!(list, vec!["a", "b", "e", "d"]);
    }

    #[test]
    fn test_remove_unordered_single_element() {
        let mut list = vec![42];
        assert_eq!(remove_unordered(&mut list, 0), Ok(42));
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_unordered_empty_vec() {
        let mut list: Vec<i32> = Vec::new();
        assert_eq!(
            remove_unordered(&mut list, 0),
            Err(SliceError::IndexOutOfRange { index: 0, len: 0 })
        );
    }
}
