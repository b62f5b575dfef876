//! Unit tests for the Identity value object

use warden_domain::value_objects::{Identity, Role};
use warden_domain::Error;

#[test]
fn test_identity_collapses_duplicate_authorities() {
    let identity = Identity::new("alice", ["user:read", "user:update", "user:read"]).unwrap();

    assert_eq!(identity.username(), "alice");
    assert_eq!(identity.authorities().len(), 2);
    assert!(identity.has_authority("user:read"));
    assert!(identity.has_authority("user:update"));
}

#[test]
fn test_identity_authority_order_is_canonical() {
    let first = Identity::new("alice", ["user:update", "user:read"]).unwrap();
    let second = Identity::new("alice", ["user:read", "user:update"]).unwrap();

    assert_eq!(first, second);
    let ordered: Vec<&str> = first.authorities().iter().map(String::as_str).collect();
    assert_eq!(ordered, vec!["user:read", "user:update"]);
}

#[test]
fn test_identity_rejects_empty_username() {
    let result = Identity::new("  ", ["user:read"]);
    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
}

#[test]
fn test_identity_without_authorities() {
    let identity = Identity::new("guest", Vec::<String>::new()).unwrap();
    assert!(identity.authorities().is_empty());
}

#[test]
fn test_identity_for_role() {
    let identity = Identity::for_role("root", Role::SuperUser).unwrap();
    assert_eq!(identity.authorities().len(), 4);
    assert!(identity.has_authority("user:delete"));
}

#[test]
fn test_identity_into_parts() {
    let identity = Identity::new("alice", ["user:read"]).unwrap();
    let (username, authorities) = identity.into_parts();
    assert_eq!(username, "alice");
    assert!(authorities.contains("user:read"));
}
