//! REST API functions for communicating with the backend.
//!
//! Client-side (csr): real HTTP calls via the `Http` adapter.
//! Native builds: stubs returning `None`/error since these endpoints are
//! only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. Fetches degrade
//! to `None`; mutating calls convert every failure into a human-readable
//! message, preferring the backend's `error`/`message` payload over the
//! operation default.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::Http;
use super::types::{
    Account, AccountUpdate, AchievementReport, Journal, JournalDraft, Listing, MoodEntry,
    MoodHistoryDay, MoodStats, SignupForm, TokenGrant,
};

pub const LOGIN_FAILED: &str = "Login failed";
pub const SIGNUP_FAILED: &str = "Signup failed";
const MOOD_SAVE_FAILED: &str = "Failed to save mood entry";
const JOURNAL_SAVE_FAILED: &str = "Failed to save journal entry";
const JOURNAL_DELETE_FAILED: &str = "Failed to delete journal entry";
const PROFILE_UPDATE_FAILED: &str = "Failed to update profile. Please try again.";
const PASSWORD_CHANGE_FAILED: &str = "Failed to change password. Please try again.";
const EXPORT_FAILED: &str = "Failed to export data";

#[cfg(any(test, feature = "csr"))]
fn user_endpoint(user_id: &str) -> String {
    format!("/users/{user_id}/")
}

#[cfg(any(test, feature = "csr"))]
fn mood_entry_endpoint(entry_id: &str) -> String {
    format!("/mood-entries/{entry_id}/")
}

#[cfg(any(test, feature = "csr"))]
fn journal_endpoint(journal_id: &str) -> String {
    format!("/journals/{journal_id}/")
}

#[cfg(any(test, feature = "csr"))]
fn mood_history_endpoint(days: u16) -> String {
    format!("/mood-entries/mood_history/?days={days}")
}

/// Query string for the paginated journal list.
#[cfg(any(test, feature = "csr"))]
fn journals_endpoint(page: usize, page_size: usize, search: &str, newest_first: bool) -> String {
    let ordering = if newest_first { "-created_at" } else { "created_at" };
    let mut url = format!("/journals/?page={page}&page_size={page_size}&ordering={ordering}");
    if !search.trim().is_empty() {
        url.push_str("&search=");
        url.push_str(&encode_component(search.trim()));
    }
    url
}

/// Percent-encode a query component (RFC 3986 unreserved characters pass).
#[cfg(any(test, feature = "csr"))]
fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Pull a display message out of an error response body, falling back to
/// `default` when the body has no `error` or `message` string.
#[cfg(any(test, feature = "csr"))]
fn failure_message(body: &str, default: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return default.to_owned();
    };
    value
        .get("error")
        .or_else(|| value.get("message"))
        .and_then(|v| v.as_str())
        .map_or_else(|| default.to_owned(), ToOwned::to_owned)
}

/// Profile updates return DRF per-field error arrays; surface the first
/// username/email message, otherwise the generic default.
#[cfg(any(test, feature = "csr"))]
fn profile_failure_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return PROFILE_UPDATE_FAILED.to_owned();
    };
    for (field, label) in [("username", "Username"), ("email", "Email")] {
        if let Some(message) = value
            .get(field)
            .and_then(|v| v.as_array())
            .and_then(|a| a.first())
            .and_then(|v| v.as_str())
        {
            return format!("{label}: {message}");
        }
    }
    failure_message(body, PROFILE_UPDATE_FAILED)
}

#[cfg(feature = "csr")]
async fn failed_response_message(resp: gloo_net::http::Response, default: &str) -> String {
    let body = resp.text().await.unwrap_or_default();
    failure_message(&body, default)
}

/// Exchange username/password for a token grant via `POST /auth/login/`.
///
/// # Errors
///
/// Returns the backend's error message, or `"Login failed"` when the backend
/// is unreachable or sent no message.
pub async fn login(http: Http, username: &str, password: &str) -> Result<TokenGrant, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let resp = http
            .post_json("/auth/login/", &payload)
            .await
            .map_err(|_| LOGIN_FAILED.to_owned())?;
        if !resp.ok() {
            return Err(failed_response_message(resp, LOGIN_FAILED).await);
        }
        resp.json::<TokenGrant>().await.map_err(|_| LOGIN_FAILED.to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (http, username, password);
        Err(LOGIN_FAILED.to_owned())
    }
}

/// Create an account via `POST /auth/signup/`; responds like `login`.
///
/// # Errors
///
/// Returns the backend's error message, or `"Signup failed"`.
pub async fn signup(http: Http, form: &SignupForm) -> Result<TokenGrant, String> {
    #[cfg(feature = "csr")]
    {
        let resp = http
            .post_json("/auth/signup/", form)
            .await
            .map_err(|_| SIGNUP_FAILED.to_owned())?;
        if !resp.ok() {
            return Err(failed_response_message(resp, SIGNUP_FAILED).await);
        }
        resp.json::<TokenGrant>().await.map_err(|_| SIGNUP_FAILED.to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (http, form);
        Err(SIGNUP_FAILED.to_owned())
    }
}

/// Validate the stored credential via `GET /auth/user/`.
/// Returns `None` when the credential is missing, invalid, or the backend is
/// unreachable; callers deliberately cannot tell those apart.
pub async fn fetch_account(http: Http) -> Option<Account> {
    #[cfg(feature = "csr")]
    {
        let resp = http.get("/auth/user/").await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Account>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = http;
        None
    }
}

/// Change the account password via `POST /auth/change-password/`.
///
/// # Errors
///
/// Returns the backend's error message or a generic failure message.
pub async fn change_password(
    http: Http,
    current_password: &str,
    new_password: &str,
) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({
            "current_password": current_password,
            "new_password": new_password,
        });
        let resp = http
            .post_json("/auth/change-password/", &payload)
            .await
            .map_err(|_| PASSWORD_CHANGE_FAILED.to_owned())?;
        if !resp.ok() {
            return Err(failed_response_message(resp, PASSWORD_CHANGE_FAILED).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (http, current_password, new_password);
        Err(PASSWORD_CHANGE_FAILED.to_owned())
    }
}

/// Patch profile fields via `PATCH /users/{id}/` and return the updated
/// account.
///
/// # Errors
///
/// Returns the first per-field message (username/email) or a generic failure
/// message.
pub async fn update_profile(
    http: Http,
    user_id: &str,
    patch: &AccountUpdate,
) -> Result<Account, String> {
    #[cfg(feature = "csr")]
    {
        let resp = http
            .patch_json(&user_endpoint(user_id), patch)
            .await
            .map_err(|_| PROFILE_UPDATE_FAILED.to_owned())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(profile_failure_message(&body));
        }
        resp.json::<Account>().await.map_err(|_| PROFILE_UPDATE_FAILED.to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (http, user_id, patch);
        Err(PROFILE_UPDATE_FAILED.to_owned())
    }
}

/// Fetch every mood entry for the account, newest first.
pub async fn fetch_mood_entries(http: Http) -> Option<Vec<MoodEntry>> {
    #[cfg(feature = "csr")]
    {
        let resp = http.get("/mood-entries/").await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Listing<MoodEntry>>().await.ok().map(Listing::into_vec)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = http;
        None
    }
}

/// Fetch the last week's entries via `GET /mood-entries/recent/`.
pub async fn fetch_recent_moods(http: Http) -> Option<Vec<MoodEntry>> {
    #[cfg(feature = "csr")]
    {
        let resp = http.get("/mood-entries/recent/").await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Listing<MoodEntry>>().await.ok().map(Listing::into_vec)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = http;
        None
    }
}

/// Fetch one mood entry by ID.
pub async fn fetch_mood_entry(http: Http, entry_id: &str) -> Option<MoodEntry> {
    #[cfg(feature = "csr")]
    {
        let resp = http.get(&mood_entry_endpoint(entry_id)).await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<MoodEntry>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (http, entry_id);
        None
    }
}

/// Fetch aggregate statistics via `GET /mood-entries/mood_stats/`.
pub async fn fetch_mood_stats(http: Http) -> Option<MoodStats> {
    #[cfg(feature = "csr")]
    {
        let resp = http.get("/mood-entries/mood_stats/").await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<MoodStats>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = http;
        None
    }
}

/// Fetch day buckets for the last `days` days.
pub async fn fetch_mood_history(http: Http, days: u16) -> Option<Vec<MoodHistoryDay>> {
    #[cfg(feature = "csr")]
    {
        let resp = http.get(&mood_history_endpoint(days)).await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<MoodHistoryDay>>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (http, days);
        None
    }
}

/// Record a mood via `POST /mood-entries/`.
///
/// # Errors
///
/// Returns the backend's error message or a generic failure message.
pub async fn create_mood_entry(
    http: Http,
    mood_level: u8,
    notes: Option<&str>,
) -> Result<MoodEntry, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "mood_level": mood_level, "notes": notes });
        let resp = http
            .post_json("/mood-entries/", &payload)
            .await
            .map_err(|_| MOOD_SAVE_FAILED.to_owned())?;
        if !resp.ok() {
            return Err(failed_response_message(resp, MOOD_SAVE_FAILED).await);
        }
        resp.json::<MoodEntry>().await.map_err(|_| MOOD_SAVE_FAILED.to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (http, mood_level, notes);
        Err(MOOD_SAVE_FAILED.to_owned())
    }
}

/// Download the account's entries as CSV via `GET /mood-entries/export_data/`.
///
/// # Errors
///
/// Returns a generic failure message when the download fails.
pub async fn export_mood_csv(http: Http) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let resp = http
            .get("/mood-entries/export_data/")
            .await
            .map_err(|_| EXPORT_FAILED.to_owned())?;
        if !resp.ok() {
            return Err(EXPORT_FAILED.to_owned());
        }
        resp.text().await.map_err(|_| EXPORT_FAILED.to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = http;
        Err(EXPORT_FAILED.to_owned())
    }
}

/// Fetch one page of journals, optionally filtered and reordered.
pub async fn fetch_journals(
    http: Http,
    page: usize,
    page_size: usize,
    search: &str,
    newest_first: bool,
) -> Option<Listing<Journal>> {
    #[cfg(feature = "csr")]
    {
        let url = journals_endpoint(page, page_size, search, newest_first);
        let resp = http.get(&url).await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Listing<Journal>>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (http, page, page_size, search, newest_first);
        None
    }
}

/// Create a journal via `POST /journals/`.
///
/// # Errors
///
/// Returns the backend's error message or a generic failure message.
pub async fn create_journal(http: Http, draft: &JournalDraft) -> Result<Journal, String> {
    #[cfg(feature = "csr")]
    {
        let resp = http
            .post_json("/journals/", draft)
            .await
            .map_err(|_| JOURNAL_SAVE_FAILED.to_owned())?;
        if !resp.ok() {
            return Err(failed_response_message(resp, JOURNAL_SAVE_FAILED).await);
        }
        resp.json::<Journal>().await.map_err(|_| JOURNAL_SAVE_FAILED.to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (http, draft);
        Err(JOURNAL_SAVE_FAILED.to_owned())
    }
}

/// Delete a journal via `DELETE /journals/{id}/`.
///
/// # Errors
///
/// Returns a generic failure message when the delete fails.
pub async fn delete_journal(http: Http, journal_id: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = http
            .delete(&journal_endpoint(journal_id))
            .await
            .map_err(|_| JOURNAL_DELETE_FAILED.to_owned())?;
        if !resp.ok() {
            return Err(JOURNAL_DELETE_FAILED.to_owned());
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (http, journal_id);
        Err(JOURNAL_DELETE_FAILED.to_owned())
    }
}

/// Fetch the achievement report via `GET /achievements/`.
pub async fn fetch_achievements(http: Http) -> Option<AchievementReport> {
    #[cfg(feature = "csr")]
    {
        let resp = http.get("/achievements/").await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<AchievementReport>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = http;
        None
    }
}
