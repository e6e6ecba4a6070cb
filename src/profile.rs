use chrono::NaiveDate;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const PROFILE_FILE: &str = "profile.json";

static PROFILE: LazyLock<Result<Profile, ProfileError>> = LazyLock::new(|| load(PROFILE_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Newspaper,
    Linkedin,
    Github,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub handle: String,
    pub bio: String,
    pub location: String,
    pub joined: NaiveDate,
    pub following: u32,
    pub followers: u32,
    pub avatar: String,
    pub avatar_alt: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Profile {0} not found")]
    NotFound(String),
    #[error("Couldn't parse profile: {0}")]
    Parse(String),
}

impl Profile {
    pub fn headline(&self) -> String {
        format!("{} | {}", self.name, self.role)
    }

    pub fn display_handle(&self) -> String {
        format!("@{}", self.handle)
    }

    pub fn joined_label(&self) -> String {
        format!("Joined {}", self.joined.format("%B %Y"))
    }
}

/// The embedded profile, parsed on first use.
pub fn profile() -> Result<&'static Profile, ProfileError> {
    PROFILE.as_ref().map_err(Clone::clone)
}

pub fn load(name: &str) -> Result<Profile, ProfileError> {
    let file = Content::get(name).ok_or_else(|| ProfileError::NotFound(name.to_string()))?;
    parse(&file.data)
}

pub fn parse(data: &[u8]) -> Result<Profile, ProfileError> {
    serde_json::from_slice(data).map_err(|e| ProfileError::Parse(e.to_string()))
}

/// Formats a count the way social cards do: `1200` -> `1.2k`.
/// Fractions are truncated to one decimal, never rounded up.
pub fn compact_count(n: u32) -> String {
    const UNITS: [(u64, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "k")];
    for (scale, suffix) in UNITS {
        let n = u64::from(n);
        if n >= scale {
            let tenths = n * 10 / scale;
            let (whole, frac) = (tenths / 10, tenths % 10);
            return if frac == 0 {
                format!("{whole}{suffix}")
            } else {
                format!("{whole}.{frac}{suffix}")
            };
        }
    }
    n.to_string()
}
