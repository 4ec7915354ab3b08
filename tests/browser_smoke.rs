//! End-to-end smoke tests against a real Chromium-family binary. These require a
//! browser on `PATH` (or `BROWSERCDP_BINARY` pointing at one) and are not run by
//! default; run with `cargo test -- --ignored` once a binary is available.

use browsercdp::{Browser, FindCriteria, Options};

fn options() -> Options {
    let mut options = Options::new();
    if let Ok(binary) = std::env::var("BROWSERCDP_BINARY") {
        options.set_binary_location(binary);
    }
    options.set_headless(true);
    options.add_argument("--no-sandbox").ok();
    options
}

#[tokio::test]
#[ignore]
async fn launches_and_reports_version() {
    let browser = Browser::launch(options()).await.expect("browser should launch");
    let version = browser.version().await.expect("Browser.getVersion should succeed");
    assert!(!version.product.is_empty());
    browser.stop().await.expect("browser should stop cleanly");
}

#[tokio::test]
#[ignore]
async fn navigates_and_finds_an_element() {
    let browser = Browser::launch(options()).await.expect("browser should launch");
    let tab = browser.new_blank_tab().await.expect("should open a blank tab");

    tab.go_to("data:text/html,<html><body><h1 id=\"greeting\">hello</h1></body></html>")
        .await
        .expect("navigation should complete");

    let heading = tab
        .find_element(&FindCriteria {
            id: Some("greeting".into()),
            ..Default::default()
        })
        .await
        .expect("the h1 should be found by id");

    let html = heading.outer_html().await.expect("outer_html should resolve");
    assert!(html.contains("hello"));

    assert!(browser
        .tabs()
        .await
        .expect("tabs() should list the open tab")
        .iter()
        .any(|t| t.target_id() == tab.target_id()));

    browser.stop().await.expect("browser should stop cleanly");
}
