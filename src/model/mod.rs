//! Records of the organization unit provisioning feeds.

pub mod customer;
pub mod feed;
pub mod orgunit;
pub mod orguser;

pub use customer::CustomerIdEntry;
pub use feed::{Feed, OrgUnitFeed, OrgUserFeed};
pub use orgunit::OrgUnitEntry;
pub use orguser::OrgUserEntry;

/// `name` values of the `<apps:property>` elements.
pub mod property {
    pub const CUSTOMER_ID: &str = "customerId";
    pub const CUSTOMER_ORG_UNIT_NAME: &str = "customerOrgUnitName";
    pub const CUSTOMER_ORG_UNIT_DESCRIPTION: &str = "customerOrgUnitDescription";
    pub const ORG_UNIT_NAME: &str = "name";
    pub const ORG_UNIT_DESCRIPTION: &str = "description";
    pub const ORG_UNIT_PATH: &str = "orgUnitPath";
    pub const PARENT_ORG_UNIT_PATH: &str = "parentOrgUnitPath";
    pub const ORG_UNIT_BLOCK_INHERITANCE: &str = "blockInheritance";
    pub const USERS_TO_MOVE: &str = "usersToMove";
    pub const MOVED_USERS: &str = "usersMoved";
    pub const USER_EMAIL: &str = "orgUserEmail";
    pub const OLD_ORG_UNIT_PATH: &str = "oldOrgUnitPath";
}

/// Split a comma-separated user list, dropping blanks.
pub(crate) fn split_list(value: Option<&str>) -> Vec<&str> {
    value
        .map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .collect()
        })
        .unwrap_or_default()
}
