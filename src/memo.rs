use std::cell::Cell;

/// Remembers the position of the most recent successful lookup.
///
/// The slot stores an index into a collection owned by the same value as
/// the memo, so it is valid for as long as that collection is not modified.
#[derive(Debug, Default)]
pub(crate) struct Memo<K: Copy> {
    last: Cell<Option<(K, usize)>>,
}

impl<K: Copy + PartialEq> Memo<K> {
    pub fn get(&self, key: K) -> Option<usize> {
        match self.last.get() {
            Some((last_key, index)) if last_key == key => Some(index),
            _ => None,
        }
    }

    pub fn set(&self, key: K, index: usize) {
        self.last.set(Some((key, index)));
    }

    /// Returns the memoized index for `key`, or runs `find` and remembers a hit.
    pub fn get_or_find(&self, key: K, find: impl FnOnce() -> Option<usize>) -> Option<usize> {
        if let Some(index) = self.get(key) {
            return Some(index);
        }
        let index = find()?;
        self.set(key, index);
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_memo_misses() {
        let memo = Memo::<u32>::default();
        assert_eq!(memo.get(0), None);
    }

    #[test]
    fn memo_hits_only_for_last_key() {
        let memo = Memo::default();
        memo.set(7u32, 3);
        assert_eq!(memo.get(7), Some(3));
        assert_eq!(memo.get(8), None);

        memo.set(8, 1);
        assert_eq!(memo.get(7), None);
        assert_eq!(memo.get(8), Some(1));
    }

    #[test]
    fn get_or_find_skips_search_on_hit() {
        let memo = Memo::default();
        assert_eq!(memo.get_or_find(5u64, || Some(2)), Some(2));
        assert_eq!(memo.get_or_find(5, || panic!("searched again")), Some(2));
    }

    #[test]
    fn get_or_find_does_not_remember_misses() {
        let memo = Memo::default();
        memo.set(1u64, 0);
        assert_eq!(memo.get_or_find(2, || None), None);
        assert_eq!(memo.get(1), Some(0));
    }
}
