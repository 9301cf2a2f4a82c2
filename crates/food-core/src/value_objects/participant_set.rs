//! Participant set - users attached to a post through one field

use serde::{Deserialize, Serialize};

use super::UserId;
use crate::participation::ToggleOutcome;

/// Ordered, duplicate-free list of user ids.
///
/// Stored as a `uuid[]` column, so order is kept as written but carries no
/// meaning. Construction drops repeated ids, keeping the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<UserId>", into = "Vec<UserId>")]
pub struct ParticipantSet(Vec<UserId>);

impl ParticipantSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn contains(&self, user_id: UserId) -> bool {
        self.0.contains(&user_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserId> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[UserId] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<UserId> {
        self.0
    }

    /// Flip `user_id`'s membership, producing a new set.
    ///
    /// A member is removed (`is_marking = false`); anyone else is appended
    /// (`is_marking = true`). `self` is left untouched.
    pub fn toggled(&self, user_id: UserId) -> ToggleOutcome {
        if self.contains(user_id) {
            let participants = self.0.iter().copied().filter(|id| *id != user_id).collect();
            ToggleOutcome {
                participants: Self(participants),
                is_marking: false,
            }
        } else {
            let mut participants = self.0.clone();
            participants.push(user_id);
            ToggleOutcome {
                participants: Self(participants),
                is_marking: true,
            }
        }
    }
}

impl From<Vec<UserId>> for ParticipantSet {
    fn from(ids: Vec<UserId>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<ParticipantSet> for Vec<UserId> {
    fn from(set: ParticipantSet) -> Self {
        set.0
    }
}

impl FromIterator<UserId> for ParticipantSet {
    fn from_iter<I: IntoIterator<Item = UserId>>(iter: I) -> Self {
        let mut ids: Vec<UserId> = Vec::new();
        for id in iter {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self(ids)
    }
}

impl<'a> IntoIterator for &'a ParticipantSet {
    type Item = &'a UserId;
    type IntoIter = std::slice::Iter<'a, UserId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
