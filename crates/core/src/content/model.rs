use serde::{Deserialize, Serialize};

/// The root site document: a fixed set of named sections.
///
/// Every section is always present on a loaded document; missing remote
/// sections are filled from the compiled-in defaults during merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub hero: HeroContent,
    pub videos: Vec<VideoEntry>,
    pub shorts: Vec<VideoEntry>,
    pub reels: Vec<ReelEntry>,
    pub gallery: Vec<GalleryItem>,
    pub posts: Vec<PostEntry>,
    pub users: Vec<AdminUserEntry>,
    pub contact: ContactContent,
    pub settings: SettingsContent,
    pub integrations: IntegrationSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroStat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub headline: String,
    pub description: String,
    pub primary_cta_label: String,
    pub primary_cta_link: String,
    pub secondary_cta_label: String,
    pub secondary_cta_link: String,
    pub trending_badge: String,
    pub stats: Vec<HeroStat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoKind {
    Video,
    Short,
}

impl VideoKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Short => "short",
        }
    }
}

/// A YouTube video or short. `id` is the platform video identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEntry {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: VideoKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelEntry {
    pub id: String,
    pub url: String,
    pub thumbnail: String,
    pub caption: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostEntry {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    /// Raw markup, rendered by the site layer.
    pub content: String,
    pub status: PostStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Role labels are capitalized on the wire (`"Owner"`, `"Editor"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Owner,
    Editor,
    Contributor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Invited,
    Suspended,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserEntry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
}

/// Fixed copy strings for the contact page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    pub hero_title: String,
    pub hero_highlight: String,
    pub hero_description: String,
    pub email_label: String,
    pub email_address: String,
    pub location_label: String,
    pub location_line1: String,
    pub location_line2: String,
    pub business_label: String,
    pub business_note: String,
    pub phone_label: String,
    pub phone_number: String,
    pub follow_label: String,
    pub follow_note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    pub primary_color: String,
    pub accent_color: String,
    pub background_style: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingSettings {
    pub logo_path: String,
    pub favicon_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialSettings {
    pub youtube: String,
    pub instagram_one: String,
    pub instagram_two: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shorts_playlist_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploads_playlist_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSettings {
    pub provider: String,
    pub signup_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsContent {
    pub theme: ThemeSettings,
    pub branding: BrandingSettings,
    pub socials: SocialSettings,
    pub newsletter: NewsletterSettings,
}

/// Third-party API keys. Values are placeholders until a sync job exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationSettings {
    pub youtube_api_key: String,
    pub youtube_channel_id: String,
    pub instagram_access_token: String,
    pub email_provider_api_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_synced_at: Option<String>,
}

// ---------------------------------------------------------------------------
// Partial mirrors: the wire shape of a remote document. Any section (and any
// field of a record-shaped section) may be absent and falls back to defaults
// during merge. Unknown keys (e.g. an `_updatedAt` stamp) are ignored.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialSiteContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<PartialHeroContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<VideoEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shorts: Option<Vec<VideoEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reels: Option<Vec<ReelEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<GalleryItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts: Option<Vec<PostEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<AdminUserEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<PartialContactContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<PartialSettingsContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrations: Option<PartialIntegrationSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialHeroContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_cta_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_cta_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_cta_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_cta_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trending_badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<HeroStat>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialContactContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_highlight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_style: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialBrandingSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialSocialSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_one: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_two: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shorts_playlist_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploads_playlist_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialNewsletterSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signup_link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialSettingsContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<PartialThemeSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branding: Option<PartialBrandingSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socials: Option<PartialSocialSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newsletter: Option<PartialNewsletterSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialIntegrationSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_provider_api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_synced_at: Option<String>,
}
