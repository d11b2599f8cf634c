//! UI Components
//!
//! Leptos components binding the render descriptions to the DOM.

mod filter_bar;
mod new_todo_form;
mod theme_toggle;
mod tilt_card;
mod todo_list;
mod todo_row;

pub use filter_bar::FilterBar;
pub use new_todo_form::NewTodoForm;
pub use theme_toggle::ThemeToggle;
pub use tilt_card::TiltCard;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
