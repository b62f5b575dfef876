//! Unit tests for the role catalogue

use warden_domain::value_objects::Role;

#[test]
fn test_role_authorities() {
    assert_eq!(Role::User.authorities(), &["user:read"]);
    assert_eq!(Role::Hr.authorities(), &["user:read", "user:update"]);
    assert_eq!(Role::Manager.authorities(), Role::Hr.authorities());
    assert!(Role::Admin.authorities().contains(&"user:create"));
    assert!(!Role::Admin.authorities().contains(&"user:delete"));
    assert!(Role::SuperUser.authorities().contains(&"user:delete"));
}

#[test]
fn test_role_parse_canonical_and_bare_names() {
    assert_eq!("ROLE_ADMIN".parse::<Role>().unwrap(), Role::Admin);
    assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
    assert_eq!("ROLE_SU".parse::<Role>().unwrap(), Role::SuperUser);
    assert_eq!("ROLE_MGR".parse::<Role>().unwrap(), Role::Manager);
    assert_eq!(" hr ".parse::<Role>().unwrap(), Role::Hr);
    assert!("ROLE_GUEST".parse::<Role>().is_err());
}

#[test]
fn test_role_parse_spelled_out_names() {
    assert_eq!("ROLE_MANAGER".parse::<Role>().unwrap(), Role::Manager);
    assert_eq!("mgr".parse::<Role>().unwrap(), Role::Manager);
    assert_eq!("ROLE_SUPER_ADMIN".parse::<Role>().unwrap(), Role::SuperUser);
    assert_eq!("su".parse::<Role>().unwrap(), Role::SuperUser);
    assert!("ROLE_S".parse::<Role>().is_err());
}

#[test]
fn test_role_display_roundtrips_through_parse() {
    for role in Role::ALL {
        assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
    }
}

#[test]
fn test_role_serde_uses_canonical_names() {
    let json = serde_json::to_string(&Role::Manager).unwrap();
    assert_eq!(json, "\"ROLE_MGR\"");
    assert_eq!(serde_json::to_string(&Role::SuperUser).unwrap(), "\"ROLE_SU\"");
    let role: Role = serde_json::from_str("\"ROLE_USER\"").unwrap();
    assert_eq!(role, Role::User);
}

#[test]
fn test_role_serde_accepts_spelled_out_aliases() {
    let manager: Role = serde_json::from_str("\"ROLE_MANAGER\"").unwrap();
    assert_eq!(manager, Role::Manager);
    let super_user: Role = serde_json::from_str("\"ROLE_SUPER_ADMIN\"").unwrap();
    assert_eq!(super_user, Role::SuperUser);
}
