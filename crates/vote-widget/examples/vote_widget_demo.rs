//! Vote widget on the mock DOM
//!
//! Run with: `RUST_LOG=vote_widget=debug cargo run -p vote-widget --example vote_widget_demo`

use tracing_subscriber::EnvFilter;
use vote_widget::prelude::*;

fn print_page(label: &str, driver: &WasmDriver) {
    let snapshot = driver.widget().snapshot();
    println!(
        "{label:<24} up={:<3} down={:<3} up_disabled={:<5} down_disabled={:<5} voted=({}, {})",
        driver.up_count_text(),
        driver.down_count_text(),
        driver.is_disabled(VoteDirection::Up),
        driver.is_disabled(VoteDirection::Down),
        snapshot.up_voted,
        snapshot.down_voted,
    );
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Cosmetic disabled marker ===");
    let mut driver = WasmDriver::new("5", "3");
    print_page("initial", &driver);
    driver.click_up();
    print_page("click up", &driver);
    driver.click_down();
    print_page("click down (disabled)", &driver);
    driver.click_up();
    print_page("click up", &driver);

    println!();
    println!("=== Enforced disabled marker ===");
    let config = WidgetConfig::new().with_disabled_policy(DisabledPolicy::Enforced);
    let mut driver = WasmDriver::with_config(config, "5", "3");
    driver.click_up();
    print_page("click up", &driver);
    driver.click_down();
    print_page("click down (ignored)", &driver);

    println!();
    println!("=== Malformed count text ===");
    let driver = WasmDriver::new("five", "3");
    print_page("initial", &driver);
}
