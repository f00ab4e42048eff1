use cursive_core::view::{View, ViewWrapper};
use cursive_core::views::{
    LinearLayout, ListView, NamedView, PaddedView, ResizedView, ScrollView, SelectView,
};

/// A view backed by a countable collection of items.
///
/// Only the cardinality is ever consumed: items stay opaque, and no ordering
/// or identity semantics are assumed. This is the bound [`PlaceholderView`]
/// uses to pick between the list and its placeholder.
///
/// [`PlaceholderView`]: crate::PlaceholderView
pub trait ItemCount {
    /// Returns the number of items currently backing this view.
    fn item_count(&self) -> usize;

    /// Returns `true` if this view currently has no items.
    fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}

// Same bounds as `SelectView`'s own methods.
impl<T: Send + Sync + 'static> ItemCount for SelectView<T> {
    fn item_count(&self) -> usize {
        self.len()
    }
}

// Counts children like `ListView::len()` does, delimiters included.
impl ItemCount for ListView {
    fn item_count(&self) -> usize {
        self.len()
    }
}

impl ItemCount for LinearLayout {
    fn item_count(&self) -> usize {
        self.len()
    }
}

impl<V: View + ItemCount> ItemCount for ScrollView<V> {
    fn item_count(&self) -> usize {
        self.get_inner().item_count()
    }
}

impl<V: View + ItemCount> ItemCount for ResizedView<V> {
    fn item_count(&self) -> usize {
        self.get_inner().item_count()
    }
}

impl<V: View + ItemCount> ItemCount for PaddedView<V> {
    fn item_count(&self) -> usize {
        self.get_inner().item_count()
    }
}

// A named view that is already borrowed elsewhere counts as empty, like the
// other fallbacks in `ViewWrapper`.
impl<V: View + ItemCount> ItemCount for NamedView<V> {
    fn item_count(&self) -> usize {
        self.with_view(|v| v.item_count()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {

    use super::ItemCount;
    use cursive_core::view::Resizable;
    use cursive_core::views::{
        DummyView, LinearLayout, ListView, PaddedView, ScrollView, SelectView,
    };

    #[test]
    fn select_view() {
        let mut select = SelectView::<u32>::new();
        assert_eq!(select.item_count(), 0);
        assert!(ItemCount::is_empty(&select));

        select.add_item("one", 1);
        select.add_item("two", 2);
        assert_eq!(select.item_count(), 2);
        assert!(!ItemCount::is_empty(&select));

        select.clear();
        assert!(ItemCount::is_empty(&select));
    }

    #[test]
    fn list_view() {
        let mut list = ListView::new();
        assert!(ItemCount::is_empty(&list));

        list.add_child("row", DummyView);
        list.add_delimiter();
        assert_eq!(list.item_count(), 2);
    }

    #[test]
    fn linear_layout() {
        let layout = LinearLayout::vertical().child(DummyView).child(DummyView);
        assert_eq!(layout.item_count(), 2);
    }

    #[test]
    fn forwards_through_wrappers() {
        let mut select = SelectView::<u32>::new();
        select.add_item("one", 1);

        let resized = select.full_screen();
        assert_eq!(resized.item_count(), 1);

        let scroll = ScrollView::new(resized);
        assert_eq!(scroll.item_count(), 1);
        assert!(!ItemCount::is_empty(&scroll));

        let padded = PaddedView::lrtb(1, 1, 0, 0, scroll);
        assert_eq!(padded.item_count(), 1);
    }
}
