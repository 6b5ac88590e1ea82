//! Serde DTOs for the backend REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend payloads field-for-field so deserialization
//! stays schema-driven; optional and defaulted fields absorb the places where
//! the backend omits keys rather than sending `null`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated account as returned by `GET /auth/user/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account identifier.
    pub id: String,
    /// Login name, unique per account.
    pub username: String,
    /// Contact email address.
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Free-form profile text, up to 500 characters.
    #[serde(default)]
    pub bio: String,
    /// RFC 3339 timestamp of account creation, if exposed.
    pub date_joined: Option<String>,
    /// Avatar image URL, if one was uploaded.
    pub profile_picture: Option<String>,
}

impl Account {
    /// Display name: `First Last` when both are set, otherwise the username.
    pub fn display_name(&self) -> String {
        if self.first_name.is_empty() || self.last_name.is_empty() {
            self.username.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }

    /// One- or two-letter initials for the fallback avatar.
    pub fn initials(&self) -> String {
        match (self.first_name.chars().next(), self.last_name.chars().next()) {
            (Some(f), Some(l)) => format!("{f}{l}").to_uppercase(),
            _ => self
                .username
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_else(|| "U".to_owned()),
        }
    }
}

/// Partial account fields for `PATCH /users/{id}/` bodies and for the local
/// session merge; `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl AccountUpdate {
    /// Shallow merge: set fields overwrite, unset fields are left untouched.
    pub fn apply_to(&self, account: &mut Account) {
        if let Some(username) = &self.username {
            account.username = username.clone();
        }
        if let Some(email) = &self.email {
            account.email = email.clone();
        }
        if let Some(first_name) = &self.first_name {
            account.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            account.last_name = last_name.clone();
        }
        if let Some(bio) = &self.bio {
            account.bio = bio.clone();
        }
    }
}

/// Successful login/signup payload: the bearer token plus the account.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenGrant {
    pub token: String,
    pub user: Account,
}

/// Fields posted to `POST /auth/signup/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// One recorded mood.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: String,
    /// Scale position `1..=5`.
    pub mood_level: u8,
    pub notes: Option<String>,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// Aggregate statistics from `GET /mood-entries/mood_stats/`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MoodStats {
    pub total_entries: i64,
    /// Consecutive days with at least one entry, ending today.
    #[serde(default)]
    pub streak: i64,
    pub average_mood: Option<f64>,
    pub most_common_mood: Option<u8>,
}

/// One day bucket from `GET /mood-entries/mood_history/?days=N`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MoodHistoryDay {
    /// Bare `YYYY-MM-DD` date.
    pub date: String,
    pub average_mood: f64,
    #[serde(default)]
    pub mood_entries: Vec<MoodEntry>,
}

/// One journal entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub content: String,
    /// Linked mood entry ID, if the journal was written from a mood.
    pub mood_entry: Option<String>,
    pub created_at: String,
}

/// Fields posted to `POST /journals/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct JournalDraft {
    pub title: String,
    pub content: String,
    pub mood_entry: Option<String>,
}

/// DRF-style paginated body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Page<T> {
    pub count: i64,
    pub results: Vec<T>,
}

/// List bodies arrive either paginated or as a bare array depending on the
/// endpoint's pagination settings; this absorbs both.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Paged(Page<T>),
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Paged(page) => page.results,
            Listing::Plain(items) => items,
        }
    }

    /// Total item count: the DRF `count` when paginated, else the length.
    pub fn count(&self) -> i64 {
        match self {
            Listing::Paged(page) => page.count,
            #[allow(clippy::cast_possible_wrap)]
            Listing::Plain(items) => items.len() as i64,
        }
    }
}

/// One achievement definition.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Icon hint, e.g. `"fire"`.
    #[serde(default)]
    pub icon: String,
    /// Grouping key: `mood_streak`, `journal_count`, `mood_count`, or
    /// `consistency`.
    pub achievement_type: String,
    /// Progress target (days, entries, ...) for the unlock.
    pub requirement_value: i64,
    #[serde(default)]
    pub points: i64,
}

/// An achievement with the account's unlock status and progress.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AchievementProgress {
    pub achievement: Achievement,
    pub is_unlocked: bool,
    #[serde(default)]
    pub current_progress: i64,
    #[serde(default)]
    pub progress_percentage: f64,
    pub unlocked_at: Option<String>,
}

/// Body of `GET /achievements/`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AchievementReport {
    #[serde(default)]
    pub achievement_data: Vec<AchievementProgress>,
    #[serde(default)]
    pub total_achievements: i64,
    #[serde(default)]
    pub unlocked_count: i64,
}

impl AchievementReport {
    /// Whole-percent completion, `0` when there are no achievements.
    pub fn completion_percentage(&self) -> i64 {
        if self.total_achievements <= 0 {
            return 0;
        }
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        {
            ((self.unlocked_count as f64 / self.total_achievements as f64) * 100.0).round() as i64
        }
    }
}
