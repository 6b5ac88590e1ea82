//! Route guard: who may see which screen.
//!
//! DESIGN
//! ======
//! `decide` is a pure function of the session, the requested path, the
//! route's auth requirement, and the carried return path. The `Guard`
//! component re-evaluates it on every session change and performs the
//! navigation side effect; while the session is still `Unknown` it renders
//! the loading placeholder and never redirects.
//!
//! Carry state is explicit: a redirect to `/login` stashes the attempted
//! path in the `RedirectSlot`, and the next public-only redirect consumes it
//! so the user lands where they were headed before authenticating.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use super::store::{Session, use_session};
use crate::components::loading::Loading;

/// Where a step-2 redirect sends unauthenticated visitors.
const LOGIN_PATH: &str = "/login";
/// Default landing screen for authenticated visitors of public-only routes.
const DEFAULT_AUTHENTICATED_PATH: &str = "/dashboard";

/// Outcome of a guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Session still `Unknown`: render the loading placeholder and wait.
    Pending,
    /// Render the requested target.
    Render,
    /// Navigate elsewhere; `carry_from` preserves the attempted destination
    /// across the login redirect.
    Redirect { to: String, carry_from: Option<String> },
}

/// Decide what a navigation to `requested_path` may render.
pub fn decide(
    session: &Session,
    requested_path: &str,
    require_auth: bool,
    carried_from: Option<&str>,
) -> Decision {
    match session {
        Session::Unknown => Decision::Pending,
        _ if require_auth && !session.is_authenticated() => Decision::Redirect {
            to: LOGIN_PATH.to_owned(),
            carry_from: Some(requested_path.to_owned()),
        },
        _ if !require_auth && session.is_authenticated() => Decision::Redirect {
            to: carried_from.unwrap_or(DEFAULT_AUTHENTICATED_PATH).to_owned(),
            carry_from: None,
        },
        _ => Decision::Render,
    }
}

/// The carried return path, threaded through context by the router layer
/// instead of being read from the history stack.
#[derive(Clone, Copy)]
pub struct RedirectSlot(RwSignal<Option<String>>);

impl RedirectSlot {
    pub fn new() -> Self {
        Self(RwSignal::new(None))
    }

    /// Remember the path an unauthenticated visitor tried to reach.
    pub fn stash(&self, from: String) {
        self.0.set(Some(from));
    }

    /// The carried path, if any, without consuming it.
    pub fn peek(&self) -> Option<String> {
        self.0.get_untracked()
    }

    /// Drop the carried path once a redirect has consumed it.
    pub fn clear(&self) {
        self.0.set(None);
    }
}

impl Default for RedirectSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap a route target with the guard policy. `require_auth` defaults to
/// true; login/signup pass `false` to become public-only screens.
#[component]
pub fn Guard(#[prop(default = true)] require_auth: bool, children: ChildrenFn) -> impl IntoView {
    let store = use_session();
    let slot = expect_context::<RedirectSlot>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let session = store.session();
        let path = location.pathname.get();
        let carried = slot.peek();
        if let Decision::Redirect { to, carry_from } =
            decide(&session, &path, require_auth, carried.as_deref())
        {
            match carry_from {
                Some(from) => slot.stash(from),
                None => slot.clear(),
            }
            navigate(&to, NavigateOptions { replace: true, ..Default::default() });
        }
    });

    view! {
        <Show
            when=move || store.session() != Session::Unknown
            fallback=|| view! { <Loading full_screen=true text="Checking authentication..."/> }
        >
            {children()}
        </Show>
    }
}
