//! Drives a Chromium-class browser (Chrome, Edge, and compatible variants) over the
//! Chrome DevTools Protocol, without WebDriver: launches or attaches to a browser,
//! opens tabs, navigates, locates DOM elements, synthesizes input, intercepts network
//! traffic, and observes browser events.
//!
//! ```no_run
//! use browsercdp::{Browser, Options};
//!
//! # async fn run() -> browsercdp::Result<()> {
//! let mut options = Options::new();
//! options.set_binary_location("/usr/bin/google-chrome");
//! let browser = Browser::launch(options).await?;
//! let tab = browser.new_blank_tab().await?;
//! tab.go_to("https://example.com").await?;
//! let heading = tab.find_element_by("h1").await?;
//! println!("{}", heading.outer_html().await?);
//! browser.stop().await?;
//! # Ok(())
//! # }
//! ```

mod async_process;
mod browser;
mod commands;
mod connection;
mod element;
mod error;
mod events;
mod html;
mod locator;
mod options;
mod process;
mod proxy;
mod tab;
mod tempdir;
mod transport;

pub use browser::Browser;
pub use element::{Element, Realm};
pub use error::{CdpError, Result};
pub use events::Callback;
pub use locator::{FindCriteria, Locator};
pub use options::Options;
pub use tab::Tab;

pub use browsercdp_cdp as cdp;
pub use browsercdp_types as types;
