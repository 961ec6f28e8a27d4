// SPDX-License-Identifier: MPL-2.0
//! Authentication state and the signed-in user's profile.

/// Usage ratio above which the sidebar warns that the monthly limit is close.
pub const NEAR_LIMIT_RATIO: f32 = 0.8;

/// The signed-in user.
///
/// `usage <= limit` is expected but not enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    /// Pages processed this month.
    pub usage: u32,
    /// Pages allowed per month.
    pub limit: u32,
}

impl Profile {
    /// Fraction of the monthly limit consumed, `0.0` when there is no limit.
    #[must_use]
    pub fn usage_ratio(&self) -> f32 {
        if self.limit == 0 {
            0.0
        } else {
            self.usage as f32 / self.limit as f32
        }
    }

    #[must_use]
    pub fn is_near_limit(&self) -> bool {
        self.usage_ratio() > NEAR_LIMIT_RATIO
    }

    /// First character of the name, for the avatar badge.
    #[must_use]
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

/// Whether someone is signed in, and as whom.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated { profile: Profile },
}

impl Session {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    #[must_use]
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Session::Authenticated { profile } => Some(profile),
            Session::Unauthenticated => None,
        }
    }
}
