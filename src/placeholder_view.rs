use cursive_core::direction::Direction;
use cursive_core::event::{AnyCb, Event, EventResult};
use cursive_core::Rect;
use cursive_core::utils::markup::StyledString;
use cursive_core::view::{CannotFocus, Selector, View, ViewWrapper};
use cursive_core::views::TextView;
use cursive_core::{Printer, Vec2};

use crate::ItemCount;

/// Wrapper around a list view that shows a placeholder while the list is
/// empty.
///
/// The wrapped view's item count is read again on every render pass: while
/// it is zero the placeholder is drawn in the list's place, and the list
/// takes over on the first pass after items appear. Exactly one of the two
/// renderings is produced per pass.
///
/// Events and focus go to whichever view is currently displayed.
/// Callbacks (`call_on_any` and friends) always reach the list, so it can be
/// repopulated by name while the placeholder is on screen.
///
/// # Examples
///
/// ```
/// use cursive_core::Cursive;
/// use cursive_core::views::{SelectView, TextView};
/// use cursive_list_placeholder::PlaceholderView;
///
/// let mut siv = Cursive::new();
///
/// let tasks = SelectView::<String>::new();
/// siv.add_layer(PlaceholderView::new(tasks, TextView::new("No data")));
/// ```
pub struct PlaceholderView<V, P> {
    view: V,
    placeholder: P,
    // Branch shown at the last layout, to request a relayout when the
    // emptiness flips between two passes.
    showing_placeholder: bool,
    invalidated: bool,
}

impl<V: View + ItemCount, P: View> PlaceholderView<V, P> {
    /// Creates a new `PlaceholderView` around `view`.
    ///
    /// `placeholder` will be shown whenever `view` has no items.
    pub fn new(view: V, placeholder: P) -> Self {
        let showing_placeholder = view.is_empty();
        PlaceholderView {
            view,
            placeholder,
            showing_placeholder,
            invalidated: true,
        }
    }

    /// Replaces the placeholder view.
    pub fn set_placeholder(&mut self, placeholder: P) {
        self.placeholder = placeholder;
        self.invalidate();
    }

    /// Returns `true` if the placeholder is the branch currently rendered.
    ///
    /// This is re-read from the wrapped view's item count, not cached.
    pub fn is_showing_placeholder(&self) -> bool {
        self.view.is_empty()
    }

    /// Gets access to the placeholder view.
    pub fn get_placeholder(&self) -> &P {
        &self.placeholder
    }

    /// Gets mutable access to the placeholder view.
    pub fn get_placeholder_mut(&mut self) -> &mut P {
        &mut self.placeholder
    }

    fn invalidate(&mut self) {
        self.invalidated = true;
    }

    cursive_core::inner_getters!(self.view: V);
}

impl<V: View + ItemCount, P: View> ViewWrapper for PlaceholderView<V, P> {
    cursive_core::wrap_impl!(self.view: V);

    fn wrap_draw(&self, printer: &Printer) {
        if self.view.is_empty() {
            self.placeholder.draw(printer);
        } else {
            self.view.draw(printer);
        }
    }

    fn wrap_required_size(&mut self, req: Vec2) -> Vec2 {
        if self.view.is_empty() {
            self.placeholder.required_size(req)
        } else {
            self.view.required_size(req)
        }
    }

    fn wrap_layout(&mut self, size: Vec2) {
        self.invalidated = false;
        self.showing_placeholder = self.view.is_empty();
        if self.showing_placeholder {
            self.placeholder.layout(size);
        } else {
            self.view.layout(size);
        }
    }

    fn wrap_on_event(&mut self, event: Event) -> EventResult {
        if self.view.is_empty() {
            self.placeholder.on_event(event)
        } else {
            self.view.on_event(event)
        }
    }

    fn wrap_take_focus(&mut self, source: Direction) -> Result<EventResult, CannotFocus> {
        if self.view.is_empty() {
            self.placeholder.take_focus(source)
        } else {
            self.view.take_focus(source)
        }
    }

    fn wrap_needs_relayout(&self) -> bool {
        let empty = self.view.is_empty();

        self.invalidated
            || empty != self.showing_placeholder
            || if empty {
                self.placeholder.needs_relayout()
            } else {
                self.view.needs_relayout()
            }
    }

    fn wrap_important_area(&self, size: Vec2) -> Rect {
        if self.view.is_empty() {
            self.placeholder.important_area(size)
        } else {
            self.view.important_area(size)
        }
    }

    fn wrap_call_on_any(&mut self, selector: &Selector, callback: AnyCb) {
        // We always run callbacks, even when the placeholder is shown.
        self.view.call_on_any(selector, callback)
    }
}

/// Makes a view wrappable in a [`PlaceholderView`].
pub trait Placeholdable: View + ItemCount + Sized {
    /// Wraps `self` in a `PlaceholderView` showing `placeholder` while
    /// `self` has no items.
    fn placeholder<P: View>(self, placeholder: P) -> PlaceholderView<Self, P> {
        PlaceholderView::new(self, placeholder)
    }

    /// Wraps `self` in a `PlaceholderView` showing a simple text message
    /// while `self` has no items.
    fn placeholder_text<S: Into<StyledString>>(self, text: S) -> PlaceholderView<Self, TextView> {
        PlaceholderView::new(self, TextView::new(text))
    }
}

impl<T: View + ItemCount> Placeholdable for T {}
