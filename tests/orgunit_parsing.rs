mod common;

use common::{ORGUNIT_EDIT_BASE, ORGUNIT_ENTRY, ORGUNIT_FEED, parse_fixture, wrap_feed};
use orgfeed::{Document, HasLinks, OrgUnitEntry, OrgUnitFeed, parse};
use pretty_assertions::assert_eq;

#[test]
fn test_org_unit_entry_from_string() {
    let entry: OrgUnitEntry = parse_fixture(ORGUNIT_ENTRY);

    assert_eq!(entry.org_unit_description(), Some("New Test Org"));
    assert_eq!(entry.org_unit_name(), Some("Test Organization"));
    assert_eq!(entry.org_unit_path(), Some("Test/Test+Organization"));
    assert_eq!(entry.parent_org_unit_path(), Some("Test"));
    assert_eq!(entry.org_unit_block_inheritance(), Some("false"));
}

#[test]
fn test_org_unit_feed_from_string() {
    let feed: OrgUnitFeed = parse_fixture(ORGUNIT_FEED);
    assert_eq!(feed.len(), 2);

    let first = &feed.entries()[0];
    assert_eq!(
        first.find_edit_link(),
        Some(format!("{}testOrgUnit92", ORGUNIT_EDIT_BASE).as_str())
    );
    assert_eq!(first.org_unit_description(), Some("test92"));
    assert_eq!(first.org_unit_name(), Some("testOrgUnit92"));
    assert_eq!(first.org_unit_path(), Some("Test/testOrgUnit92"));
    assert_eq!(first.parent_org_unit_path(), Some("Test"));
    assert_eq!(first.org_unit_block_inheritance(), Some("false"));

    let second = &feed.entries()[1];
    assert_eq!(
        second.find_edit_link(),
        Some(format!("{}testOrgUnit93", ORGUNIT_EDIT_BASE).as_str())
    );
    assert_eq!(second.org_unit_description(), Some("test93"));
    assert_eq!(second.org_unit_name(), Some("testOrgUnit93"));
    assert_eq!(second.org_unit_path(), Some("Test/testOrgUnit93"));
    assert_eq!(second.parent_org_unit_path(), Some("Test"));
    assert_eq!(second.org_unit_block_inheritance(), Some("false"));
}

#[test]
fn test_feed_skips_opensearch_elements() {
    let feed: OrgUnitFeed = parse_fixture(ORGUNIT_FEED);
    assert_eq!(feed.atom().links.len(), 3);
    assert_eq!(
        feed.find_link("http://schemas.google.com/g/2005#post"),
        Some("https://apps-apis.google.com/a/feeds/orgunit/2.0/C123A456B")
    );
}

#[test]
fn test_parsing_twice_yields_equal_values() {
    let first = OrgUnitFeed::from_xml_str(ORGUNIT_FEED).unwrap();
    let second = OrgUnitFeed::from_xml_str(ORGUNIT_FEED).unwrap();
    assert_eq!(first, second);

    let entry = OrgUnitEntry::from_xml(ORGUNIT_ENTRY.as_bytes()).unwrap();
    assert_eq!(entry, OrgUnitEntry::from_xml(ORGUNIT_ENTRY.as_bytes()).unwrap());
}

#[test]
fn test_feed_without_entries_is_empty() {
    let feed: OrgUnitFeed = parse(wrap_feed("").as_bytes()).unwrap();
    assert!(feed.is_empty());
    assert_eq!(
        feed.atom().id.as_deref(),
        Some("https://apps-apis.google.com/a/feeds/orgunit/2.0/C123A456B")
    );

    let empty_root: OrgUnitFeed =
        parse(br#"<feed xmlns="http://www.w3.org/2005/Atom"/>"#).unwrap();
    assert!(empty_root.is_empty());
}

#[test]
fn test_entry_without_edit_link() {
    let xml = wrap_feed(
        r#"<entry>
    <link rel="self" href="https://apps-apis.google.com/a/feeds/orgunit/2.0/C123A456B/noEdit"/>
    <apps:property name="name" value="noEdit"/>
  </entry>
  <entry/>"#,
    );
    let feed: OrgUnitFeed = parse(xml.as_bytes()).unwrap();

    assert_eq!(feed.len(), 2);
    assert_eq!(feed.entries()[0].org_unit_name(), Some("noEdit"));
    assert_eq!(feed.entries()[0].find_edit_link(), None);
    assert_eq!(feed.entries()[1], OrgUnitEntry::default());
    assert_eq!(feed.entries()[1].find_edit_link(), None);
}

#[test]
fn test_first_edit_link_wins() {
    let xml = wrap_feed(
        r#"<entry>
    <link rel="edit" href="https://example.com/first"/>
    <link rel="edit" href="https://example.com/second"/>
  </entry>"#,
    );
    let feed: OrgUnitFeed = parse(xml.as_bytes()).unwrap();
    assert_eq!(feed.entries()[0].find_edit_link(), Some("https://example.com/first"));
}

#[test]
fn test_apps_namespace_bound_to_other_prefix() {
    let xml = r#"<entry xmlns="http://www.w3.org/2005/Atom" xmlns:g="http://schemas.google.com/apps/2006">
  <g:property name="name" value="Renamed Prefix"/>
  <property name="orgUnitPath" value="ignored: wrong namespace"/>
</entry>"#;
    let entry: OrgUnitEntry = parse(xml.as_bytes()).unwrap();

    assert_eq!(entry.org_unit_name(), Some("Renamed Prefix"));
    assert_eq!(entry.org_unit_path(), None);
}
