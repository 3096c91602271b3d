//! WASM Frontend for the vote widget
//!
//! The mock DOM and driver are always compiled so the widget can be tested
//! natively; the `web-sys` binding needs the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;

#[cfg(feature = "wasm")]
pub use browser::{
    install_console_logging, mount_vote_widget, BrowserElement, MountedVoteWidget,
};
pub use dom::{DomElement, DomEvent, MockDom, MockElement};
pub use driver::WasmDriver;
