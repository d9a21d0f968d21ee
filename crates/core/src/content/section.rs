use serde::{Deserialize, Serialize};

use super::model::*;

/// Top-level section names of the site document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Hero,
    Videos,
    Shorts,
    Reels,
    Gallery,
    Posts,
    Users,
    Contact,
    Settings,
    Integrations,
}

impl SectionKey {
    pub const ALL: [SectionKey; 10] = [
        SectionKey::Hero,
        SectionKey::Videos,
        SectionKey::Shorts,
        SectionKey::Reels,
        SectionKey::Gallery,
        SectionKey::Posts,
        SectionKey::Users,
        SectionKey::Contact,
        SectionKey::Settings,
        SectionKey::Integrations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Videos => "videos",
            Self::Shorts => "shorts",
            Self::Reels => "reels",
            Self::Gallery => "gallery",
            Self::Posts => "posts",
            Self::Users => "users",
            Self::Contact => "contact",
            Self::Settings => "settings",
            Self::Integrations => "integrations",
        }
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A whole-section replacement. The storage layer never applies
/// partial-field patches; the editing layer computes the full replacement
/// value first.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionUpdate {
    Hero(HeroContent),
    Videos(Vec<VideoEntry>),
    Shorts(Vec<VideoEntry>),
    Reels(Vec<ReelEntry>),
    Gallery(Vec<GalleryItem>),
    Posts(Vec<PostEntry>),
    Users(Vec<AdminUserEntry>),
    Contact(ContactContent),
    Settings(SettingsContent),
    Integrations(IntegrationSettings),
}

impl SectionUpdate {
    pub fn key(&self) -> SectionKey {
        match self {
            Self::Hero(_) => SectionKey::Hero,
            Self::Videos(_) => SectionKey::Videos,
            Self::Shorts(_) => SectionKey::Shorts,
            Self::Reels(_) => SectionKey::Reels,
            Self::Gallery(_) => SectionKey::Gallery,
            Self::Posts(_) => SectionKey::Posts,
            Self::Users(_) => SectionKey::Users,
            Self::Contact(_) => SectionKey::Contact,
            Self::Settings(_) => SectionKey::Settings,
            Self::Integrations(_) => SectionKey::Integrations,
        }
    }

    /// Extract a section's current value from `document` as a replacement
    /// update. Restoring a section to defaults is
    /// `SectionUpdate::from_document(&defaults, key)`.
    pub fn from_document(document: &SiteContent, key: SectionKey) -> SectionUpdate {
        match key {
            SectionKey::Hero => Self::Hero(document.hero.clone()),
            SectionKey::Videos => Self::Videos(document.videos.clone()),
            SectionKey::Shorts => Self::Shorts(document.shorts.clone()),
            SectionKey::Reels => Self::Reels(document.reels.clone()),
            SectionKey::Gallery => Self::Gallery(document.gallery.clone()),
            SectionKey::Posts => Self::Posts(document.posts.clone()),
            SectionKey::Users => Self::Users(document.users.clone()),
            SectionKey::Contact => Self::Contact(document.contact.clone()),
            SectionKey::Settings => Self::Settings(document.settings.clone()),
            SectionKey::Integrations => Self::Integrations(document.integrations.clone()),
        }
    }
}

impl SiteContent {
    /// Replace one section in place.
    pub fn apply(&mut self, update: SectionUpdate) {
        match update {
            SectionUpdate::Hero(v) => self.hero = v,
            SectionUpdate::Videos(v) => self.videos = v,
            SectionUpdate::Shorts(v) => self.shorts = v,
            SectionUpdate::Reels(v) => self.reels = v,
            SectionUpdate::Gallery(v) => self.gallery = v,
            SectionUpdate::Posts(v) => self.posts = v,
            SectionUpdate::Users(v) => self.users = v,
            SectionUpdate::Contact(v) => self.contact = v,
            SectionUpdate::Settings(v) => self.settings = v,
            SectionUpdate::Integrations(v) => self.integrations = v,
        }
    }
}
