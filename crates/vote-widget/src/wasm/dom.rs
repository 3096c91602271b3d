//! Mock DOM for native testing
//!
//! Elements live behind shared handles so the widget and the test can both
//! observe the same node, the way a browser page is shared between a script
//! and its inspector.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::config::WidgetConfig;
use crate::element::{ClickHandler, ClickSource, VoteElement};

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// CSS classes
    pub classes: Vec<String>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            classes: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Adds a class
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }
}

/// Shared handle to a mock element and its click listeners
#[derive(Clone)]
pub struct MockElement {
    node: Rc<RefCell<DomElement>>,
    listeners: Rc<RefCell<Vec<ClickHandler>>>,
}

impl fmt::Debug for MockElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockElement")
            .field("node", &self.node.borrow())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

impl MockElement {
    /// Wraps an element in a new handle
    #[must_use]
    pub fn new(element: DomElement) -> Self {
        Self {
            node: Rc::new(RefCell::new(element)),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Copy of the current element state
    #[must_use]
    pub fn snapshot(&self) -> DomElement {
        self.node.borrow().clone()
    }

    /// Number of registered click listeners
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Fires every registered click listener in registration order
    pub fn click(&self) {
        // Cloned so a listener may register another without a borrow conflict
        let listeners: Vec<ClickHandler> = self.listeners.borrow().clone();
        for listener in listeners {
            listener();
        }
    }
}

impl VoteElement for MockElement {
    fn id(&self) -> String {
        self.node.borrow().id.clone()
    }

    fn text(&self) -> String {
        self.node.borrow().text_content.clone()
    }

    fn set_text(&self, text: &str) {
        self.node.borrow_mut().set_text(text);
    }

    fn add_class(&self, class: &str) {
        self.node.borrow_mut().add_class(class);
    }

    fn remove_class(&self, class: &str) {
        self.node.borrow_mut().remove_class(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.node.borrow().has_class(class)
    }
}

impl ClickSource for MockElement {
    fn on_click(&self, handler: ClickHandler) {
        self.listeners.borrow_mut().push(handler);
    }
}

/// Mock DOM for testing the vote widget without a browser
#[derive(Debug, Default)]
pub struct MockDom {
    /// Elements by ID for quick lookup
    elements: HashMap<String, MockElement>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the vote widget markup with default IDs and classes
    #[must_use]
    pub fn vote_page(up_count: &str, down_count: &str) -> Self {
        Self::vote_page_with(&WidgetConfig::default(), up_count, down_count)
    }

    /// Creates the vote widget markup for a given configuration.
    ///
    /// Both buttons start in the outline icon state and the count displays
    /// hold the given text verbatim.
    #[must_use]
    pub fn vote_page_with(config: &WidgetConfig, up_count: &str, down_count: &str) -> Self {
        VotePage::build(config, up_count, down_count).dom
    }

    /// Registers an element for ID lookup and returns its handle.
    ///
    /// Elements without an ID get a handle but are not registered.
    pub fn register_element(&mut self, element: DomElement) -> MockElement {
        let id = element.id.clone();
        let handle = MockElement::new(element);
        if !id.is_empty() {
            self.elements.insert(id, handle.clone());
        }
        handle
    }

    /// Gets a shared handle by ID
    #[must_use]
    pub fn element(&self, id: &str) -> Option<MockElement> {
        self.elements.get(id).cloned()
    }

    /// Gets a copy of an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<DomElement> {
        self.elements.get(id).map(MockElement::snapshot)
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(VoteElement::text)
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get(id) {
            elem.set_text(text);
        }
    }

    /// Checks if an element has a class; unknown IDs have none
    #[must_use]
    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements.get(id).is_some_and(|e| e.has_class(class))
    }

    /// Dispatches an event, firing the target's listeners
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event.clone());

        match &event {
            DomEvent::Click { element_id } => {
                if let Some(elem) = self.elements.get(element_id) {
                    elem.click();
                }
            }
        }
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }
}

/// Vote markup together with handles to the four bound elements
#[derive(Debug)]
pub(crate) struct VotePage {
    pub(crate) dom: MockDom,
    pub(crate) up_button: MockElement,
    pub(crate) down_button: MockElement,
    pub(crate) up_count: MockElement,
    pub(crate) down_count: MockElement,
}

impl VotePage {
    pub(crate) fn build(config: &WidgetConfig, up_count: &str, down_count: &str) -> Self {
        let mut dom = MockDom::new();
        let ids = &config.ids;

        let up_button = dom.register_element(
            DomElement::new("i")
                .with_id(&ids.up_button)
                .with_class("fa")
                .with_class(&config.up_icon.outline),
        );
        let down_button = dom.register_element(
            DomElement::new("i")
                .with_id(&ids.down_button)
                .with_class("fa")
                .with_class(&config.down_icon.outline),
        );
        let up_count = dom.register_element(
            DomElement::new("span")
                .with_id(&ids.up_count)
                .with_text(up_count),
        );
        let down_count = dom.register_element(
            DomElement::new("span")
                .with_id(&ids.down_count)
                .with_text(down_count),
        );

        Self {
            dom,
            up_button,
            down_button,
            up_count,
            down_count,
        }
    }
}
