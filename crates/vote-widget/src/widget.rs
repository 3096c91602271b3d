//! Vote widget controller
//!
//! Owns the toggle state and counters for one pair of vote buttons and
//! reflects every change into the bound elements.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::config::WidgetConfig;
use crate::core::{read_counter, Counters, VoteDirection, VoteResult, VoteSnapshot, VoteState};
use crate::element::{ClickSource, VoteElement};

/// Up-vote/down-vote toggle pair bound to four elements
#[derive(Debug)]
pub struct VoteWidget<E> {
    up_button: E,
    down_button: E,
    up_count_view: E,
    down_count_view: E,
    state: VoteState,
    counters: Counters,
    config: WidgetConfig,
}

impl<E: VoteElement> VoteWidget<E> {
    /// Binds the widget with the default configuration.
    ///
    /// Counters are seeded from the text currently shown in the two count
    /// views; text that is not an integer seeds 0.
    #[must_use]
    pub fn initialize(up_button: E, down_button: E, up_count_view: E, down_count_view: E) -> Self {
        Self::with_config(
            up_button,
            down_button,
            up_count_view,
            down_count_view,
            WidgetConfig::default(),
        )
    }

    /// Binds the widget with a custom configuration
    #[must_use]
    pub fn with_config(
        up_button: E,
        down_button: E,
        up_count_view: E,
        down_count_view: E,
        config: WidgetConfig,
    ) -> Self {
        let counters = Counters::new(
            read_counter(&up_count_view.id(), &up_count_view.text()),
            read_counter(&down_count_view.id(), &down_count_view.text()),
        );
        tracing::debug!(
            up_count = counters.up_count,
            down_count = counters.down_count,
            "vote widget initialized"
        );
        Self {
            up_button,
            down_button,
            up_count_view,
            down_count_view,
            state: VoteState::new(),
            counters,
            config,
        }
    }

    /// Handles a click on the up-vote button
    pub fn on_up_vote_clicked(&mut self) -> bool {
        self.click(VoteDirection::Up)
    }

    /// Handles a click on the down-vote button
    pub fn on_down_vote_clicked(&mut self) -> bool {
        self.click(VoteDirection::Down)
    }

    /// Handles a click on one button.
    ///
    /// Returns `false` only when the enforced policy rejected a click on a
    /// disabled button; nothing changes in that case.
    pub fn click(&mut self, direction: VoteDirection) -> bool {
        let disabled_class = self.config.disabled_class.as_str();

        if self.config.disabled_policy.is_enforced()
            && self.button(direction).has_class(disabled_class)
        {
            tracing::debug!(%direction, "click ignored on disabled button");
            return false;
        }

        let voted = self.state.toggle(direction);

        let icon = self.config.icon(direction);
        let button = self.button(direction);
        button.toggle_class(&icon.filled);
        button.toggle_class(&icon.outline);

        let opposite = self.button(direction.opposite());
        let delta = if voted {
            opposite.add_class(disabled_class);
            1
        } else {
            opposite.remove_class(disabled_class);
            -1
        };

        let count = self.counters.adjust(direction, delta);
        self.count_view(direction).set_text(&count.to_string());

        tracing::debug!(%direction, voted, count, "vote toggled");
        true
    }

    /// Button element for a direction
    #[must_use]
    pub fn button(&self, direction: VoteDirection) -> &E {
        match direction {
            VoteDirection::Up => &self.up_button,
            VoteDirection::Down => &self.down_button,
        }
    }

    /// Count display element for a direction
    #[must_use]
    pub fn count_view(&self, direction: VoteDirection) -> &E {
        match direction {
            VoteDirection::Up => &self.up_count_view,
            VoteDirection::Down => &self.down_count_view,
        }
    }
}

impl<E> VoteWidget<E> {
    /// Current toggle state
    #[must_use]
    pub fn state(&self) -> VoteState {
        self.state
    }

    /// Current counters
    #[must_use]
    pub fn counters(&self) -> Counters {
        self.counters
    }

    /// Returns whether a vote is cast
    #[must_use]
    pub fn is_voted(&self, direction: VoteDirection) -> bool {
        self.state.is_voted(direction)
    }

    /// Returns the tally for a direction
    #[must_use]
    pub fn count(&self, direction: VoteDirection) -> i64 {
        self.counters.get(direction)
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Serializable copy of state and counters
    #[must_use]
    pub fn snapshot(&self) -> VoteSnapshot {
        VoteSnapshot::new(self.state, self.counters)
    }

    /// Snapshot encoded as JSON
    pub fn snapshot_json(&self) -> VoteResult<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }
}

/// Attaches click handlers for both buttons.
///
/// Handlers hold a weak reference: once the last strong handle to the widget
/// is dropped, clicks are no longer applied.
pub fn register<E, C>(widget: &Rc<RefCell<VoteWidget<E>>>, up_source: &C, down_source: &C)
where
    E: VoteElement + 'static,
    C: ClickSource + ?Sized,
{
    up_source.on_click(click_handler(Rc::downgrade(widget), VoteDirection::Up));
    down_source.on_click(click_handler(Rc::downgrade(widget), VoteDirection::Down));
}

fn click_handler<E>(widget: Weak<RefCell<VoteWidget<E>>>, direction: VoteDirection) -> Rc<dyn Fn()>
where
    E: VoteElement + 'static,
{
    Rc::new(move || {
        let Some(widget) = widget.upgrade() else {
            return;
        };
        match widget.try_borrow_mut() {
            Ok(mut widget) => {
                widget.click(direction);
            }
            Err(_) => tracing::warn!(%direction, "click dropped while widget is busy"),
        };
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisabledPolicy;
    use crate::wasm::{MockDom, MockElement};

    fn widget_on(dom: &MockDom, config: WidgetConfig) -> VoteWidget<MockElement> {
        let ids = config.ids.clone();
        VoteWidget::with_config(
            dom.element(&ids.up_button).unwrap(),
            dom.element(&ids.down_button).unwrap(),
            dom.element(&ids.up_count).unwrap(),
            dom.element(&ids.down_count).unwrap(),
            config,
        )
    }

    fn default_widget(up: &str, down: &str) -> (MockDom, VoteWidget<MockElement>) {
        let dom = MockDom::vote_page(up, down);
        let widget = widget_on(&dom, WidgetConfig::default());
        (dom, widget)
    }

    #[test]
    fn test_initialize_reads_counters() {
        let (_dom, widget) = default_widget("5", "3");
        assert_eq!(widget.counters(), Counters::new(5, 3));
        assert_eq!(widget.state(), VoteState::new());
    }

    #[test]
    fn test_initialize_malformed_defaults_to_zero() {
        let (_dom, widget) = default_widget("lots", " 2 ");
        assert_eq!(widget.count(VoteDirection::Up), 0);
        assert_eq!(widget.count(VoteDirection::Down), 2);
    }

    #[test]
    fn test_up_vote_scenario() {
        let (dom, mut widget) = default_widget("5", "3");

        assert!(widget.on_up_vote_clicked());
        assert_eq!(dom.get_element_text("up_votes_count").as_deref(), Some("6"));
        assert!(dom.has_class("thumbs_down", "disabled"));
        assert!(dom.has_class("thumbs_up", "fa-thumbs-up"));
        assert!(!dom.has_class("thumbs_up", "fa-thumbs-o-up"));

        assert!(widget.on_up_vote_clicked());
        assert_eq!(dom.get_element_text("up_votes_count").as_deref(), Some("5"));
        assert!(!dom.has_class("thumbs_down", "disabled"));
        assert!(dom.has_class("thumbs_up", "fa-thumbs-o-up"));
        assert!(!dom.has_class("thumbs_up", "fa-thumbs-up"));
    }

    #[test]
    fn test_down_vote_is_symmetric() {
        let (dom, mut widget) = default_widget("5", "3");

        widget.on_down_vote_clicked();
        assert_eq!(dom.get_element_text("down_votes_count").as_deref(), Some("4"));
        assert_eq!(dom.get_element_text("up_votes_count").as_deref(), Some("5"));
        assert!(dom.has_class("thumbs_up", "disabled"));
        assert!(dom.has_class("thumbs_down", "fa-thumbs-down"));
        assert!(widget.is_voted(VoteDirection::Down));
        assert!(!widget.is_voted(VoteDirection::Up));
    }

    #[test]
    fn test_cosmetic_policy_allows_click_on_disabled() {
        let (dom, mut widget) = default_widget("0", "0");

        widget.on_up_vote_clicked();
        assert!(dom.has_class("thumbs_down", "disabled"));

        assert!(widget.on_down_vote_clicked());
        assert_eq!(widget.counters(), Counters::new(1, 1));
        assert!(widget.is_voted(VoteDirection::Up));
        assert!(widget.is_voted(VoteDirection::Down));
        assert!(dom.has_class("thumbs_up", "disabled"));
        assert_eq!(dom.get_element_text("down_votes_count").as_deref(), Some("1"));
    }

    #[test]
    fn test_enforced_policy_ignores_click_on_disabled() {
        let dom = MockDom::vote_page("0", "0");
        let config = WidgetConfig::default().with_disabled_policy(DisabledPolicy::Enforced);
        let mut widget = widget_on(&dom, config);

        widget.on_up_vote_clicked();
        assert!(!widget.on_down_vote_clicked());
        assert_eq!(widget.counters(), Counters::new(1, 0));
        assert!(!widget.is_voted(VoteDirection::Down));
        assert!(!dom.has_class("thumbs_up", "disabled"));
        assert!(dom.has_class("thumbs_down", "fa-thumbs-o-down"));
        assert_eq!(dom.get_element_text("down_votes_count").as_deref(), Some("0"));

        // Un-voting re-enables the other button
        widget.on_up_vote_clicked();
        assert!(widget.on_down_vote_clicked());
        assert_eq!(widget.counters(), Counters::new(0, 1));
    }

    #[test]
    fn test_double_click_round_trip() {
        let (dom, mut widget) = default_widget("12", "4");
        let before = dom.get_element("thumbs_up").unwrap().classes;

        widget.on_up_vote_clicked();
        widget.on_up_vote_clicked();

        assert_eq!(widget.counters(), Counters::new(12, 4));
        assert!(!dom.has_class("thumbs_down", "disabled"));
        assert_eq!(dom.get_element("thumbs_up").unwrap().classes.len(), before.len());
    }

    #[test]
    fn test_snapshot_json() {
        let (_dom, mut widget) = default_widget("2", "9");
        widget.on_up_vote_clicked();
        let json: serde_json::Value =
            serde_json::from_str(&widget.snapshot_json().unwrap()).unwrap();
        assert_eq!(json["up_voted"], true);
        assert_eq!(json["up_count"], 3);
        assert_eq!(json["down_count"], 9);
    }

    #[test]
    fn test_register_dispatches_clicks() {
        let dom = MockDom::vote_page("1", "1");
        let widget = Rc::new(RefCell::new(widget_on(&dom, WidgetConfig::default())));
        let up = dom.element("thumbs_up").unwrap();
        let down = dom.element("thumbs_down").unwrap();
        register(&widget, &up, &down);

        up.click();
        assert_eq!(widget.borrow().count(VoteDirection::Up), 2);
        down.click();
        assert_eq!(widget.borrow().count(VoteDirection::Down), 2);
    }

    #[test]
    fn test_register_handlers_detach_after_drop() {
        let dom = MockDom::vote_page("1", "1");
        let widget = Rc::new(RefCell::new(widget_on(&dom, WidgetConfig::default())));
        let up = dom.element("thumbs_up").unwrap();
        let down = dom.element("thumbs_down").unwrap();
        register(&widget, &up, &down);
        drop(widget);

        up.click();
        assert_eq!(dom.get_element_text("up_votes_count").as_deref(), Some("1"));
    }

    #[test]
    fn test_custom_disabled_class() {
        let dom = MockDom::vote_page("0", "0");
        let mut widget = widget_on(&dom, WidgetConfig::default().with_disabled_class("inactive"));
        widget.on_up_vote_clicked();
        assert!(dom.has_class("thumbs_down", "inactive"));
        assert!(!dom.has_class("thumbs_down", "disabled"));
    }
}
