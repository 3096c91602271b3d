//! Unified vote widget driver
//!
//! Interaction tests are written once against [`VoteDriver`] and run on any
//! host that can click the buttons and read the page back.

use crate::core::VoteDirection;

/// Abstract driver trait for vote widget interactions
///
/// # Example
///
/// ```rust
/// use vote_widget::prelude::*;
///
/// fn vote_and_retract<D: VoteDriver>(driver: &mut D) {
///     driver.click_up();
///     assert!(driver.is_disabled(VoteDirection::Down));
///     driver.click_up();
///     assert!(!driver.is_disabled(VoteDirection::Down));
/// }
///
/// let mut driver = WasmDriver::new("5", "3");
/// vote_and_retract(&mut driver);
/// assert_eq!(driver.up_count_text(), "5");
/// ```
pub trait VoteDriver {
    /// Clicks one of the two buttons
    fn click(&mut self, direction: VoteDirection);

    /// Text currently shown in a count display
    fn count_text(&self, direction: VoteDirection) -> String;

    /// Checks if a button carries the disabled marker
    fn is_disabled(&self, direction: VoteDirection) -> bool;

    /// Checks if a button shows its filled icon
    fn is_icon_filled(&self, direction: VoteDirection) -> bool;

    /// Clicks the up-vote button
    fn click_up(&mut self) {
        self.click(VoteDirection::Up);
    }

    /// Clicks the down-vote button
    fn click_down(&mut self) {
        self.click(VoteDirection::Down);
    }

    /// Text of the up-vote count display
    fn up_count_text(&self) -> String {
        self.count_text(VoteDirection::Up)
    }

    /// Text of the down-vote count display
    fn down_count_text(&self) -> String {
        self.count_text(VoteDirection::Down)
    }
}
