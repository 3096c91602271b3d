//! Browser WASM bindings for the vote widget
//!
//! Binds the widget to real page elements through `web-sys`.

// Note: This module is already conditionally compiled via #[cfg(feature = "wasm")] in mod.rs

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element};

use crate::config::WidgetConfig;
use crate::core::{VoteDirection, VoteError, VoteResult};
use crate::element::{ClickHandler, ClickSource, VoteElement};
use crate::widget::{register, VoteWidget};

impl From<VoteError> for JsValue {
    fn from(err: VoteError) -> Self {
        Self::from_str(&err.to_string())
    }
}

/// A page element seen through the widget's element capability
#[derive(Debug, Clone)]
pub struct BrowserElement {
    element: Element,
}

impl BrowserElement {
    /// Wraps a `web_sys` element
    #[must_use]
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// Looks an element up by ID
    pub fn by_id(document: &Document, id: &str) -> VoteResult<Self> {
        document
            .get_element_by_id(id)
            .map(Self::new)
            .ok_or_else(|| VoteError::missing_element(id))
    }
}

impl VoteElement for BrowserElement {
    fn id(&self) -> String {
        self.element.id()
    }

    fn text(&self) -> String {
        self.element.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.element.class_list().add_1(class) {
            tracing::warn!(id = %self.element.id(), class, ?err, "classList.add failed");
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.element.class_list().remove_1(class) {
            tracing::warn!(id = %self.element.id(), class, ?err, "classList.remove failed");
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.element.class_list().contains(class)
    }
}

impl ClickSource for BrowserElement {
    fn on_click(&self, handler: ClickHandler) {
        let closure = Closure::<dyn FnMut()>::new(move || handler());
        if let Err(err) = self
            .element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        {
            tracing::warn!(id = %self.element.id(), ?err, "addEventListener failed");
        }
        // Listeners stay attached for the lifetime of the page
        closure.forget();
    }
}

/// Handle to a widget mounted on the page.
///
/// Click handlers stop applying once this handle is freed.
#[derive(Debug)]
#[wasm_bindgen]
pub struct MountedVoteWidget {
    widget: Rc<RefCell<VoteWidget<BrowserElement>>>,
}

#[wasm_bindgen]
impl MountedVoteWidget {
    /// Whether the up vote is cast
    #[wasm_bindgen(getter, js_name = upVoted)]
    pub fn up_voted(&self) -> bool {
        self.widget.borrow().is_voted(VoteDirection::Up)
    }

    /// Whether the down vote is cast
    #[wasm_bindgen(getter, js_name = downVoted)]
    pub fn down_voted(&self) -> bool {
        self.widget.borrow().is_voted(VoteDirection::Down)
    }

    /// Current up-vote tally
    #[wasm_bindgen(getter, js_name = upCount)]
    pub fn up_count(&self) -> f64 {
        self.widget.borrow().count(VoteDirection::Up) as f64
    }

    /// Current down-vote tally
    #[wasm_bindgen(getter, js_name = downCount)]
    pub fn down_count(&self) -> f64 {
        self.widget.borrow().count(VoteDirection::Down) as f64
    }

    /// State and counters as JSON
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        Ok(self.widget.borrow().snapshot_json()?)
    }
}

/// Binds a vote widget to the current page.
///
/// `config_json` may override any `WidgetConfig` field; omitted fields keep
/// their defaults.
#[wasm_bindgen(js_name = mountVoteWidget)]
pub fn mount_vote_widget(config_json: Option<String>) -> Result<MountedVoteWidget, JsValue> {
    let config = match config_json {
        Some(json) => WidgetConfig::from_json(&json)?,
        None => WidgetConfig::default(),
    };
    Ok(mount(config)?)
}

fn mount(config: WidgetConfig) -> VoteResult<MountedVoteWidget> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| VoteError::missing_element("document"))?;

    let ids = &config.ids;
    let up_button = BrowserElement::by_id(&document, &ids.up_button)?;
    let down_button = BrowserElement::by_id(&document, &ids.down_button)?;
    let up_count = BrowserElement::by_id(&document, &ids.up_count)?;
    let down_count = BrowserElement::by_id(&document, &ids.down_count)?;

    let widget = Rc::new(RefCell::new(VoteWidget::with_config(
        up_button.clone(),
        down_button.clone(),
        up_count,
        down_count,
        config,
    )));
    register(&widget, &up_button, &down_button);

    tracing::info!("vote widget mounted");
    Ok(MountedVoteWidget { widget })
}

/// Routes `tracing` events to the browser console.
///
/// Returns whether a global subscriber is active afterwards; a subscriber
/// installed earlier by the host page is left in place.
pub fn install_console_logging() -> bool {
    let _ = tracing_wasm::try_set_as_global_default();
    tracing::dispatcher::has_been_set()
}

/// Initialize the module in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if !install_console_logging() {
        console::warn_1(&"Vote widget logging unavailable".into());
    }
    console::log_1(&"Vote widget WASM initialized".into());
}
