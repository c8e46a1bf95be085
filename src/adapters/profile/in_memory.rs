//! In-memory profile store for testing and single-session hosts.
//!
//! Holds student profiles in a HashMap for the lifetime of the process.
//! Not a persistence layer: a restart loses everything, which matches
//! the platform's session-scoped profile model.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::UserId;
use crate::domain::quiz::QuizResult;
use crate::ports::{ProfileStore, UserProfile};

/// In-memory implementation of the profile store port.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: Mutex<HashMap<UserId, UserProfile>>,
}

impl InMemoryProfileStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a profile, replacing any existing one with the same ID.
    pub fn create_profile(&self, profile: UserProfile) {
        self.profiles
            .lock()
            .unwrap()
            .insert(profile.id.clone(), profile);
    }

    /// Returns a copy of the profile, if present.
    pub fn get(&self, user_id: &UserId) -> Option<UserProfile> {
        self.profiles.lock().unwrap().get(user_id).cloned()
    }

    /// Removes the profile, returning it if it existed.
    pub fn remove(&self, user_id: &UserId) -> Option<UserProfile> {
        self.profiles.lock().unwrap().remove(user_id)
    }

    /// Adds the college to the profile's saved list, or removes it if
    /// already saved. Returns true if the college is saved afterwards.
    pub fn toggle_saved_college(&self, user_id: &UserId, college_id: &str) -> bool {
        let mut profiles = self.profiles.lock().unwrap();
        let Some(profile) = profiles.get_mut(user_id) else {
            return false;
        };

        if let Some(position) = profile
            .saved_colleges
            .iter()
            .position(|saved| saved == college_id)
        {
            profile.saved_colleges.remove(position);
            false
        } else {
            profile.saved_colleges.push(college_id.to_string());
            true
        }
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn record_quiz_result(&self, user_id: &UserId, result: QuizResult) {
        let mut profiles = self.profiles.lock().unwrap();
        match profiles.get_mut(user_id) {
            Some(profile) => profile.quiz_result = Some(result),
            // One-way notification: a result for an unknown student is
            // dropped, not an error.
            None => tracing::warn!(user_id = %user_id, "quiz result for unknown profile dropped"),
        }
    }

    async fn has_completed_quiz(&self, user_id: &UserId) -> bool {
        self.profiles
            .lock()
            .unwrap()
            .get(user_id)
            .is_some_and(|profile| profile.quiz_result.is_some())
    }
}
