#![allow(dead_code)]

use orgfeed::{Document, parse};

pub const CUSTOMER_ID_ENTRY: &str = include_str!("../data/customer_id_entry.xml");
pub const ORGUNIT_ENTRY: &str = include_str!("../data/orgunit_entry.xml");
pub const ORGUNIT_FEED: &str = include_str!("../data/orgunit_feed.xml");
pub const ORGUSER_ENTRY: &str = include_str!("../data/orguser_entry.xml");
pub const ORGUSER_FEED: &str = include_str!("../data/orguser_feed.xml");

pub const ORGUNIT_EDIT_BASE: &str = "https://apps-apis.google.com/a/feeds/orgunit/2.0/C123A456B/";
pub const ORGUSER_EDIT_BASE: &str = "https://apps-apis.google.com/a/feeds/orguser/2.0/C123A456B/";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parse a fixture, panicking with the parse error on failure.
pub fn parse_fixture<D: Document>(xml: &str) -> D {
    init_logging();
    parse(xml.as_bytes()).unwrap_or_else(|e| panic!("Failed to parse fixture: {}", e))
}

/// Wrap entry bodies in a feed document.
pub fn wrap_feed(entries_xml: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom"
    xmlns:apps="http://schemas.google.com/apps/2006">
  <id>https://apps-apis.google.com/a/feeds/orgunit/2.0/C123A456B</id>
  {}
</feed>"#,
        entries_xml
    )
}
