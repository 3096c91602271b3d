//! Vote Widget - mutually-exclusive up/down vote buttons
//!
//! A pair of toggle buttons with a running count for each. Casting one vote
//! marks the opposite button disabled; casting it again retracts the vote.
//!
//! The widget is written against the [`element::VoteElement`] and
//! [`element::ClickSource`] capabilities, so the same controller runs on the
//! in-memory [`wasm::MockDom`] and, with the `wasm` feature, on a real page.
//!
//! # Example
//!
//! ```rust
//! use vote_widget::prelude::*;
//!
//! let mut driver = WasmDriver::new("5", "3");
//!
//! driver.click_up();
//! assert_eq!(driver.up_count_text(), "6");
//! assert!(driver.is_disabled(VoteDirection::Down));
//! assert!(driver.is_icon_filled(VoteDirection::Up));
//!
//! driver.click_up();
//! assert_eq!(driver.up_count_text(), "5");
//! assert!(!driver.is_disabled(VoteDirection::Down));
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod element;
pub mod widget;

/// WASM module - mock DOM always available for testing
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{DisabledPolicy, ElementIds, IconClasses, WidgetConfig};
    pub use crate::core::{
        parse_counter, Counters, VoteDirection, VoteError, VoteResult, VoteSnapshot, VoteState,
    };
    pub use crate::driver::VoteDriver;
    pub use crate::element::{ClickHandler, ClickSource, VoteElement};
    pub use crate::widget::{register, VoteWidget};

    pub use crate::wasm::{DomElement, DomEvent, MockDom, MockElement, WasmDriver};
}
