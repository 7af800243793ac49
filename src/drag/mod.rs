/// In-flight drag within one day's note list.
///
/// Hover updates only move the ephemeral `over` index; the store sees a single
/// `reorder(from, over)` when the drop lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct DragSession {
    pub from: usize,
    pub over: usize,
}

impl DragSession {
    pub fn start(index: usize) -> Self {
        Self {
            from: index,
            over: index,
        }
    }

    /// Returns true when the hover target actually changed.
    pub fn hover(&mut self, index: usize) -> bool {
        if self.over == index {
            return false;
        }
        self.over = index;
        true
    }

    /// `items` as they should look while the dragged element sits at `over`.
    pub fn preview<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let mut xs = items.to_vec();
        if self.from < xs.len() && self.over < xs.len() {
            let moved = xs.remove(self.from);
            xs.insert(self.over, moved);
        }
        xs
    }

    /// The `(from, to)` pair to commit, or `None` when the item ends where it began.
    pub fn commit(self) -> Option<(usize, usize)> {
        (self.from != self.over).then_some((self.from, self.over))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_moves_item_forward() {
        let mut s = DragSession::start(0);
        assert!(s.hover(2));
        assert_eq!(s.preview(&["a", "b", "c", "d"]), vec!["b", "c", "a", "d"]);
        assert_eq!(s.commit(), Some((0, 2)));
    }

    #[test]
    fn test_preview_moves_item_backward() {
        let mut s = DragSession::start(3);
        s.hover(1);
        assert_eq!(s.preview(&["a", "b", "c", "d"]), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_returning_to_origin_commits_nothing() {
        let mut s = DragSession::start(1);
        s.hover(3);
        s.hover(0);
        assert!(s.hover(1));
        assert!(!s.hover(1));
        assert_eq!(s.preview(&[1, 2, 3, 4]), vec![1, 2, 3, 4]);
        assert_eq!(s.commit(), None);
    }

    #[test]
    fn test_preview_with_stale_indices_is_identity() {
        let mut s = DragSession::start(5);
        s.hover(0);
        assert_eq!(s.preview(&["a", "b"]), vec!["a", "b"]);
    }

    #[test]
    fn test_preview_is_permutation() {
        let items = vec![10, 20, 30, 40, 50];
        for from in 0..items.len() {
            for over in 0..items.len() {
                let mut s = DragSession::start(from);
                s.hover(over);
                let mut got = s.preview(&items);
                got.sort();
                assert_eq!(got, items);
            }
        }
    }
}
