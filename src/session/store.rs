//! The session state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` is constructed at application start and handed to the
//! route guard and pages through context. It is the only writer of the
//! credential slot, and a session only becomes `Authenticated` after a
//! successful backend round trip.
//!
//! ERROR HANDLING
//! ==============
//! `login`/`signup` convert every failure into `Err(message)`; nothing
//! escapes to pages as a panic or unhandled rejection. Restore failures
//! collapse to `Anonymous` without distinguishing an unreachable backend
//! from a rejected credential.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::http::Http;
use crate::net::types::{Account, AccountUpdate, SignupForm, TokenGrant};

/// Authentication state for the whole process lifetime.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    /// Credential existence not yet checked against the backend.
    #[default]
    Unknown,
    /// No valid credential.
    Anonymous,
    /// Credential validated; the cached account profile is attached.
    Authenticated(Account),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn account(&self) -> Option<&Account> {
        match self {
            Session::Authenticated(account) => Some(account),
            _ => None,
        }
    }
}

/// Handle to the session state machine. Cheap to copy; all copies share one
/// session signal and one credential slot.
#[derive(Clone, Copy)]
pub struct SessionStore {
    session: RwSignal<Session>,
    http: Http,
}

/// Fetch the session store from context.
///
/// # Panics
///
/// Panics when called outside the provider installed by `App`; that is a
/// construction error, not a recoverable runtime condition.
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

impl SessionStore {
    /// Create a store in the `Unknown` state sharing `http`'s credential
    /// slot.
    pub fn new(http: Http) -> Self {
        Self { session: RwSignal::new(Session::Unknown), http }
    }

    /// Reactive read of the current session.
    pub fn session(&self) -> Session {
        self.session.get()
    }

    /// Reactive `Authenticated` check for nav chrome and guards.
    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    /// Reactive read of the cached account, if authenticated.
    pub fn account(&self) -> Option<Account> {
        self.session.with(|s| s.account().cloned())
    }

    /// The HTTP adapter pages should use for domain data calls.
    pub fn http(&self) -> Http {
        self.http
    }

    /// Settle the boot-time `Unknown` state: no stored credential resolves
    /// straight to `Anonymous`; a stored credential is validated against
    /// `GET /auth/user/`. Runs once; later calls are no-ops.
    pub async fn restore(self) {
        if !matches!(self.session.get_untracked(), Session::Unknown) {
            return;
        }
        if self.stored_credential_or_settle().is_none() {
            return;
        }
        match api::fetch_account(self.http).await {
            Some(account) => self.session.set(Session::Authenticated(account)),
            None => {
                leptos::logging::warn!("session restore failed; discarding stored credential");
                self.settle_anonymous();
            }
        }
    }

    /// Exchange credentials for a token grant and enter `Authenticated`.
    ///
    /// # Errors
    ///
    /// Returns the backend's message (default `"Login failed"`); the session
    /// stays `Anonymous`.
    pub async fn login(self, username: &str, password: &str) -> Result<(), String> {
        let grant = api::login(self.http, username, password).await?;
        self.apply_grant(grant);
        Ok(())
    }

    /// Create an account and enter `Authenticated`.
    ///
    /// # Errors
    ///
    /// Returns the backend's message (default `"Signup failed"`); the session
    /// stays `Anonymous`.
    pub async fn signup(self, form: SignupForm) -> Result<(), String> {
        let grant = api::signup(self.http, &form).await?;
        self.apply_grant(grant);
        Ok(())
    }

    /// Drop the credential and return to `Anonymous`. Local only, and
    /// idempotent from any state.
    pub fn logout(&self) {
        self.settle_anonymous();
    }

    /// Merge updated profile fields into the cached account. Local only; the
    /// caller has already persisted the change via `PATCH /users/{id}/`.
    /// No-op unless authenticated.
    pub fn update_user(&self, patch: &AccountUpdate) {
        self.session.update(|session| {
            if let Session::Authenticated(account) = session {
                patch.apply_to(account);
            }
        });
    }

    /// First half of `restore`: with no stored credential the session
    /// settles to `Anonymous` immediately and no backend call is made.
    fn stored_credential_or_settle(&self) -> Option<String> {
        let stored = self.http.credentials().restore_persisted();
        if stored.is_none() {
            self.session.set(Session::Anonymous);
        }
        stored
    }

    /// Success continuation for `login`/`signup`: the credential is
    /// persisted before the session flips to `Authenticated`.
    fn apply_grant(&self, grant: TokenGrant) {
        self.http.credentials().store(&grant.token);
        self.session.set(Session::Authenticated(grant.user));
    }

    /// Failure/teardown continuation: discard the credential (which also
    /// clears the outgoing auth header) and settle to `Anonymous`.
    fn settle_anonymous(&self) {
        self.http.credentials().clear();
        self.session.set(Session::Anonymous);
    }
}
