//! Show a placeholder view while a list is empty.
//!
//! [`PlaceholderView`] wraps any list view whose item count can be read (see
//! [`ItemCount`]) and draws a placeholder view in its place as long as the
//! list holds no items. The regular list rendering takes over again on the
//! first render pass after items appear.
//!
//! The [`Placeholdable`] trait adds chainable constructors to every such
//! view:
//!
//! ```rust
//! use cursive_core::views::SelectView;
//! use cursive_list_placeholder::Placeholdable;
//!
//! let tasks = SelectView::<String>::new().placeholder_text("No data");
//! ```
#![deny(missing_docs)]

mod item_count;
mod placeholder_view;

pub use crate::item_count::ItemCount;
pub use crate::placeholder_view::{Placeholdable, PlaceholderView};
