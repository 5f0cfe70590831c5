#![cfg(test)]

//! Fixtures shared by unit tests: the documents the provisioning service
//! returns for each record shape.

pub const CUSTOMER_ID_ENTRY: &str = include_str!("../tests/data/customer_id_entry.xml");
pub const ORGUNIT_ENTRY: &str = include_str!("../tests/data/orgunit_entry.xml");
pub const ORGUNIT_FEED: &str = include_str!("../tests/data/orgunit_feed.xml");
pub const ORGUSER_ENTRY: &str = include_str!("../tests/data/orguser_entry.xml");
pub const ORGUSER_FEED: &str = include_str!("../tests/data/orguser_feed.xml");

/// Route `log` records to the test output; safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parse a fixture, panicking with the parse error on failure.
pub fn parse_fixture<D: crate::xml::Document>(xml: &str) -> D {
    init_logging();
    match crate::xml::parse(xml.as_bytes()) {
        Ok(document) => document,
        Err(err) => panic!("Failed to parse fixture: {}", err),
    }
}
