use super::*;
use crate::net::types::Account;

fn alice() -> Session {
    Session::Authenticated(Account {
        id: "u1".to_owned(),
        username: "alice".to_owned(),
        email: String::new(),
        first_name: String::new(),
        last_name: String::new(),
        bio: String::new(),
        date_joined: None,
        profile_picture: None,
    })
}

// =============================================================
// Unknown session
// =============================================================

#[test]
fn unknown_session_is_always_pending() {
    for (path, require_auth) in
        [("/dashboard", true), ("/login", false), ("/", false), ("/journals", true)]
    {
        assert_eq!(decide(&Session::Unknown, path, require_auth, None), Decision::Pending);
    }
}

#[test]
fn unknown_session_never_redirects_even_with_carry_state() {
    assert_eq!(
        decide(&Session::Unknown, "/login", false, Some("/journals")),
        Decision::Pending
    );
}

// =============================================================
// Protected routes
// =============================================================

#[test]
fn anonymous_visitor_is_sent_to_login_with_carry_state() {
    assert_eq!(
        decide(&Session::Anonymous, "/dashboard", true, None),
        Decision::Redirect {
            to: "/login".to_owned(),
            carry_from: Some("/dashboard".to_owned()),
        }
    );
}

#[test]
fn authenticated_visitor_renders_protected_routes() {
    assert_eq!(decide(&alice(), "/dashboard", true, None), Decision::Render);
}

// =============================================================
// Public-only routes
// =============================================================

#[test]
fn authenticated_visitor_leaves_login_for_default_landing() {
    assert_eq!(
        decide(&alice(), "/login", false, None),
        Decision::Redirect { to: "/dashboard".to_owned(), carry_from: None }
    );
}

#[test]
fn authenticated_visitor_returns_to_carried_destination() {
    assert_eq!(
        decide(&alice(), "/login", false, Some("/journals")),
        Decision::Redirect { to: "/journals".to_owned(), carry_from: None }
    );
}

#[test]
fn anonymous_visitor_renders_public_routes() {
    assert_eq!(decide(&Session::Anonymous, "/login", false, None), Decision::Render);
    assert_eq!(decide(&Session::Anonymous, "/", false, None), Decision::Render);
}

// =============================================================
// Two-hop redirect protocol
// =============================================================

#[test]
fn login_redirect_carries_the_attempted_path_back() {
    // Hop 1: anonymous visit to a protected page stashes the destination.
    let first = decide(&Session::Anonymous, "/history", true, None);
    let Decision::Redirect { to, carry_from } = first else {
        panic!("expected redirect, got {first:?}");
    };
    assert_eq!(to, "/login");
    let carried = carry_from.expect("redirect must carry the attempted path");

    // Hop 2: after login succeeds, the login route consumes the carry.
    assert_eq!(
        decide(&alice(), "/login", false, Some(&carried)),
        Decision::Redirect { to: "/history".to_owned(), carry_from: None }
    );
}

// =============================================================
// RedirectSlot
// =============================================================

#[test]
fn redirect_slot_round_trips_the_carried_path() {
    let slot = RedirectSlot::new();
    assert!(slot.peek().is_none());

    slot.stash("/journals".to_owned());
    assert_eq!(slot.peek().as_deref(), Some("/journals"));

    slot.clear();
    assert!(slot.peek().is_none());
}
