use identity::{AuthUser, UserData};

use super::*;

fn org(uuid: &str, name: &str) -> Organization {
    Organization { uuid: uuid.to_owned(), name: name.to_owned(), logo_url: None }
}

#[test]
fn display_name_uses_profile_of_authenticated_session() {
    let session = UserSession {
        auth: Some(AuthUser::new("u1")),
        data: Some(UserData { id: "u1".into(), display_name: Some("Ana".into()), ..UserData::default() }),
        role: None,
    };
    assert_eq!(display_name(Some(&session)), "Ana");
}

#[test]
fn display_name_falls_back_to_guest() {
    let anonymous = UserSession {
        auth: None,
        data: Some(UserData { id: "u1".into(), display_name: Some("Ana".into()), ..UserData::default() }),
        role: None,
    };
    assert_eq!(display_name(Some(&anonymous)), "Guest");
    assert_eq!(display_name(None), "Guest");
}

#[test]
fn organization_label_and_href() {
    let acme = org("acme", "Acme");
    assert_eq!(organization_label(Some(&acme)), "Acme");
    assert_eq!(organization_label(Some(&org("x", "  "))), "No organization");
    assert_eq!(dashboard_href(Some(&acme)), "/dashboard/acme");
    assert_eq!(dashboard_href(Some(&org("", "Blank"))), "/dashboard");
    assert_eq!(dashboard_href(None), "/dashboard");
}
