//! In-memory implementation of ProfileRepository

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use food_core::entities::Profile;
use food_core::traits::{ProfileRepository, RepoResult};
use food_core::value_objects::UserId;

use super::FaultInjection;

/// In-memory implementation of ProfileRepository
#[derive(Debug, Default)]
pub struct InMemoryProfileRepository {
    profiles: Mutex<HashMap<UserId, Profile>>,
    faults: FaultInjection,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, profile: Profile) {
        self.profiles.lock().insert(profile.user_id, profile);
    }

    pub fn faults(&self) -> &FaultInjection {
        &self.faults
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_user_id(&self, user_id: UserId) -> RepoResult<Option<Profile>> {
        self.faults.check_read()?;
        Ok(self.profiles.lock().get(&user_id).cloned())
    }

    async fn find_by_user_ids(&self, user_ids: &[UserId]) -> RepoResult<Vec<Profile>> {
        self.faults.check_read()?;
        let profiles = self.profiles.lock();
        Ok(user_ids
            .iter()
            .filter_map(|id| profiles.get(id).cloned())
            .collect())
    }
}
