//! WASM Driver - mock DOM implementation of [`VoteDriver`]
//!
//! Clicks go through [`MockDom::dispatch_event`], so they reach the widget
//! only via the handlers attached by [`register`].

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use super::dom::{DomEvent, MockDom, MockElement, VotePage};
use crate::config::WidgetConfig;
use crate::core::VoteDirection;
use crate::driver::VoteDriver;
use crate::widget::{register, VoteWidget};

/// Vote widget mounted on a mock page
#[derive(Debug)]
pub struct WasmDriver {
    widget: Rc<RefCell<VoteWidget<MockElement>>>,
    dom: MockDom,
}

impl WasmDriver {
    /// Mounts a default widget on a page showing the given counts
    #[must_use]
    pub fn new(up_count: &str, down_count: &str) -> Self {
        Self::with_config(WidgetConfig::default(), up_count, down_count)
    }

    /// Mounts a widget with a custom configuration
    #[must_use]
    pub fn with_config(config: WidgetConfig, up_count: &str, down_count: &str) -> Self {
        let page = VotePage::build(&config, up_count, down_count);
        Self::from_parts(page, config)
    }

    /// Mounts a widget on an existing page.
    ///
    /// Returns `None` if any of the four configured IDs is missing.
    #[must_use]
    pub fn mount(dom: MockDom, config: WidgetConfig) -> Option<Self> {
        let ids = &config.ids;
        let page = VotePage {
            up_button: dom.element(&ids.up_button)?,
            down_button: dom.element(&ids.down_button)?,
            up_count: dom.element(&ids.up_count)?,
            down_count: dom.element(&ids.down_count)?,
            dom,
        };
        Some(Self::from_parts(page, config))
    }

    fn from_parts(page: VotePage, config: WidgetConfig) -> Self {
        let VotePage {
            dom,
            up_button,
            down_button,
            up_count,
            down_count,
        } = page;

        let widget = Rc::new(RefCell::new(VoteWidget::with_config(
            up_button.clone(),
            down_button.clone(),
            up_count,
            down_count,
            config,
        )));
        register(&widget, &up_button, &down_button);

        Self { widget, dom }
    }

    /// Returns the mounted widget
    #[must_use]
    pub fn widget(&self) -> Ref<'_, VoteWidget<MockElement>> {
        self.widget.borrow()
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns a mutable reference to the DOM
    pub fn dom_mut(&mut self) -> &mut MockDom {
        &mut self.dom
    }

    fn button_id(&self, direction: VoteDirection) -> String {
        self.widget.borrow().config().ids.button(direction).to_string()
    }
}

impl VoteDriver for WasmDriver {
    fn click(&mut self, direction: VoteDirection) {
        let id = self.button_id(direction);
        self.dom.dispatch_event(DomEvent::click(&id));
    }

    fn count_text(&self, direction: VoteDirection) -> String {
        let widget = self.widget.borrow();
        self.dom
            .get_element_text(widget.config().ids.count(direction))
            .unwrap_or_default()
    }

    fn is_disabled(&self, direction: VoteDirection) -> bool {
        let widget = self.widget.borrow();
        let config = widget.config();
        self.dom
            .has_class(config.ids.button(direction), &config.disabled_class)
    }

    fn is_icon_filled(&self, direction: VoteDirection) -> bool {
        let widget = self.widget.borrow();
        let config = widget.config();
        self.dom
            .has_class(config.ids.button(direction), &config.icon(direction).filled)
    }
}
