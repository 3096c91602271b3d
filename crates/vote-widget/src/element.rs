//! Element capabilities the widget binds to
//!
//! The widget only needs text and class-list access plus a way to receive
//! clicks, so any UI layer that offers those can host it.

use std::rc::Rc;

/// Click callback shared between the widget and its host
pub type ClickHandler = Rc<dyn Fn()>;

/// Text and class-list access on a bound element
pub trait VoteElement {
    /// Element ID, used in log events and errors
    fn id(&self) -> String;

    /// Current text content
    fn text(&self) -> String;

    /// Replaces the text content
    fn set_text(&self, text: &str);

    /// Adds a class if absent
    fn add_class(&self, class: &str);

    /// Removes a class if present
    fn remove_class(&self, class: &str);

    /// Checks if the element has a class
    fn has_class(&self, class: &str) -> bool;

    /// Adds the class if absent, removes it otherwise
    fn toggle_class(&self, class: &str) {
        if self.has_class(class) {
            self.remove_class(class);
        } else {
            self.add_class(class);
        }
    }
}

/// Something that can deliver click events
pub trait ClickSource {
    /// Registers a handler invoked on every click
    fn on_click(&self, handler: ClickHandler);
}
