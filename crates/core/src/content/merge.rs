//! Merge a partially-populated remote document over the compiled-in
//! defaults.
//!
//! Merge depth follows the section's shape: list sections (`videos`,
//! `gallery`, ...) are replaced wholesale when present, record sections
//! (`hero`, `contact`, `settings`, `integrations`) fall back field by field.
//! Within `hero` the `stats` array is itself wholesale-or-default, never
//! element-merged.

use super::model::*;

/// Merge a remote partial document over `defaults`, producing a complete
/// document. Pure; neither input is mutated.
pub fn merge_with_defaults(defaults: &SiteContent, partial: PartialSiteContent) -> SiteContent {
    SiteContent {
        hero: merge_hero(&defaults.hero, partial.hero),
        videos: partial.videos.unwrap_or_else(|| defaults.videos.clone()),
        shorts: partial.shorts.unwrap_or_else(|| defaults.shorts.clone()),
        reels: partial.reels.unwrap_or_else(|| defaults.reels.clone()),
        gallery: partial.gallery.unwrap_or_else(|| defaults.gallery.clone()),
        posts: partial.posts.unwrap_or_else(|| defaults.posts.clone()),
        users: partial.users.unwrap_or_else(|| defaults.users.clone()),
        contact: merge_contact(&defaults.contact, partial.contact),
        settings: merge_settings(&defaults.settings, partial.settings),
        integrations: merge_integrations(&defaults.integrations, partial.integrations),
    }
}

pub fn merge_hero(base: &HeroContent, partial: Option<PartialHeroContent>) -> HeroContent {
    let Some(partial) = partial else {
        return base.clone();
    };
    HeroContent {
        headline: partial.headline.unwrap_or_else(|| base.headline.clone()),
        description: partial
            .description
            .unwrap_or_else(|| base.description.clone()),
        primary_cta_label: partial
            .primary_cta_label
            .unwrap_or_else(|| base.primary_cta_label.clone()),
        primary_cta_link: partial
            .primary_cta_link
            .unwrap_or_else(|| base.primary_cta_link.clone()),
        secondary_cta_label: partial
            .secondary_cta_label
            .unwrap_or_else(|| base.secondary_cta_label.clone()),
        secondary_cta_link: partial
            .secondary_cta_link
            .unwrap_or_else(|| base.secondary_cta_link.clone()),
        trending_badge: partial
            .trending_badge
            .unwrap_or_else(|| base.trending_badge.clone()),
        // Stats replace as a unit; merging stat rows positionally would
        // scramble reordered lists.
        stats: partial.stats.unwrap_or_else(|| base.stats.clone()),
    }
}

fn merge_contact(base: &ContactContent, partial: Option<PartialContactContent>) -> ContactContent {
    let Some(p) = partial else {
        return base.clone();
    };
    ContactContent {
        hero_title: p.hero_title.unwrap_or_else(|| base.hero_title.clone()),
        hero_highlight: p
            .hero_highlight
            .unwrap_or_else(|| base.hero_highlight.clone()),
        hero_description: p
            .hero_description
            .unwrap_or_else(|| base.hero_description.clone()),
        email_label: p.email_label.unwrap_or_else(|| base.email_label.clone()),
        email_address: p
            .email_address
            .unwrap_or_else(|| base.email_address.clone()),
        location_label: p
            .location_label
            .unwrap_or_else(|| base.location_label.clone()),
        location_line1: p
            .location_line1
            .unwrap_or_else(|| base.location_line1.clone()),
        location_line2: p
            .location_line2
            .unwrap_or_else(|| base.location_line2.clone()),
        business_label: p
            .business_label
            .unwrap_or_else(|| base.business_label.clone()),
        business_note: p
            .business_note
            .unwrap_or_else(|| base.business_note.clone()),
        phone_label: p.phone_label.unwrap_or_else(|| base.phone_label.clone()),
        phone_number: p.phone_number.unwrap_or_else(|| base.phone_number.clone()),
        follow_label: p.follow_label.unwrap_or_else(|| base.follow_label.clone()),
        follow_note: p.follow_note.unwrap_or_else(|| base.follow_note.clone()),
    }
}

fn merge_settings(
    base: &SettingsContent,
    partial: Option<PartialSettingsContent>,
) -> SettingsContent {
    let Some(p) = partial else {
        return base.clone();
    };
    SettingsContent {
        theme: merge_theme(&base.theme, p.theme),
        branding: merge_branding(&base.branding, p.branding),
        socials: merge_socials(&base.socials, p.socials),
        newsletter: merge_newsletter(&base.newsletter, p.newsletter),
    }
}

fn merge_theme(base: &ThemeSettings, partial: Option<PartialThemeSettings>) -> ThemeSettings {
    let Some(p) = partial else {
        return base.clone();
    };
    ThemeSettings {
        primary_color: p
            .primary_color
            .unwrap_or_else(|| base.primary_color.clone()),
        accent_color: p.accent_color.unwrap_or_else(|| base.accent_color.clone()),
        background_style: p
            .background_style
            .unwrap_or_else(|| base.background_style.clone()),
    }
}

fn merge_branding(
    base: &BrandingSettings,
    partial: Option<PartialBrandingSettings>,
) -> BrandingSettings {
    let Some(p) = partial else {
        return base.clone();
    };
    BrandingSettings {
        logo_path: p.logo_path.unwrap_or_else(|| base.logo_path.clone()),
        favicon_path: p.favicon_path.unwrap_or_else(|| base.favicon_path.clone()),
    }
}

fn merge_socials(base: &SocialSettings, partial: Option<PartialSocialSettings>) -> SocialSettings {
    let Some(p) = partial else {
        return base.clone();
    };
    SocialSettings {
        youtube: p.youtube.unwrap_or_else(|| base.youtube.clone()),
        instagram_one: p
            .instagram_one
            .unwrap_or_else(|| base.instagram_one.clone()),
        instagram_two: p
            .instagram_two
            .unwrap_or_else(|| base.instagram_two.clone()),
        shorts_playlist_id: p.shorts_playlist_id.or_else(|| base.shorts_playlist_id.clone()),
        uploads_playlist_id: p
            .uploads_playlist_id
            .or_else(|| base.uploads_playlist_id.clone()),
    }
}

fn merge_newsletter(
    base: &NewsletterSettings,
    partial: Option<PartialNewsletterSettings>,
) -> NewsletterSettings {
    let Some(p) = partial else {
        return base.clone();
    };
    NewsletterSettings {
        provider: p.provider.unwrap_or_else(|| base.provider.clone()),
        signup_link: p.signup_link.unwrap_or_else(|| base.signup_link.clone()),
    }
}

fn merge_integrations(
    base: &IntegrationSettings,
    partial: Option<PartialIntegrationSettings>,
) -> IntegrationSettings {
    let Some(p) = partial else {
        return base.clone();
    };
    IntegrationSettings {
        youtube_api_key: p
            .youtube_api_key
            .unwrap_or_else(|| base.youtube_api_key.clone()),
        youtube_channel_id: p
            .youtube_channel_id
            .unwrap_or_else(|| base.youtube_channel_id.clone()),
        instagram_access_token: p
            .instagram_access_token
            .unwrap_or_else(|| base.instagram_access_token.clone()),
        email_provider_api_key: p
            .email_provider_api_key
            .unwrap_or_else(|| base.email_provider_api_key.clone()),
        last_synced_at: p.last_synced_at.or_else(|| base.last_synced_at.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::defaults::default_content;

    #[test]
    fn empty_partial_yields_defaults() {
        let defaults = default_content();
        let merged = merge_with_defaults(&defaults, PartialSiteContent::default());
        assert_eq!(merged, defaults);
    }

    #[test]
    fn list_sections_replace_wholesale() {
        let defaults = default_content();
        let gallery = vec![GalleryItem {
            id: "new-1".to_string(),
            kind: MediaKind::Image,
            title: "New".to_string(),
            description: "Fresh upload".to_string(),
            image_url: "https://example.com/a.jpg".to_string(),
            video_url: None,
            source_url: None,
            likes: None,
            comments: None,
            category: "Travel".to_string(),
            featured: None,
            published_at: None,
        }];
        let partial = PartialSiteContent {
            gallery: Some(gallery.clone()),
            ..Default::default()
        };
        let merged = merge_with_defaults(&defaults, partial);
        assert_eq!(merged.gallery, gallery);
        // Untouched list sections keep their defaults.
        assert_eq!(merged.videos, defaults.videos);
    }

    #[test]
    fn empty_list_still_replaces() {
        // An explicitly empty list is a deliberate edit, not an absent key.
        let defaults = default_content();
        let partial = PartialSiteContent {
            posts: Some(vec![]),
            ..Default::default()
        };
        let merged = merge_with_defaults(&defaults, partial);
        assert!(merged.posts.is_empty());
    }

    #[test]
    fn hero_scalars_fall_back_independently() {
        let defaults = default_content();
        let partial = PartialSiteContent {
            hero: Some(PartialHeroContent {
                headline: Some("A new headline".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let merged = merge_with_defaults(&defaults, partial);
        assert_eq!(merged.hero.headline, "A new headline");
        assert_eq!(merged.hero.description, defaults.hero.description);
        assert_eq!(merged.hero.stats, defaults.hero.stats);
    }

    #[test]
    fn hero_stats_replace_as_a_unit() {
        let defaults = default_content();
        let stats = vec![HeroStat {
            value: "1".to_string(),
            label: "Only stat".to_string(),
        }];
        let partial = PartialSiteContent {
            hero: Some(PartialHeroContent {
                stats: Some(stats.clone()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let merged = merge_with_defaults(&defaults, partial);
        assert_eq!(merged.hero.stats, stats);
        assert_eq!(merged.hero.headline, defaults.hero.headline);
    }

    #[test]
    fn contact_merges_field_by_field() {
        let defaults = default_content();
        let partial = PartialSiteContent {
            contact: Some(PartialContactContent {
                email_address: Some("new@x.com".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let merged = merge_with_defaults(&defaults, partial);
        assert_eq!(merged.contact.email_address, "new@x.com");
        assert_eq!(merged.contact.phone_number, defaults.contact.phone_number);
        assert_eq!(merged.contact.hero_title, defaults.contact.hero_title);
    }

    #[test]
    fn settings_sub_objects_merge_field_by_field() {
        let defaults = default_content();
        let partial = PartialSiteContent {
            settings: Some(PartialSettingsContent {
                theme: Some(PartialThemeSettings {
                    primary_color: Some("#000000".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        let merged = merge_with_defaults(&defaults, partial);
        assert_eq!(merged.settings.theme.primary_color, "#000000");
        assert_eq!(
            merged.settings.theme.accent_color,
            defaults.settings.theme.accent_color
        );
        assert_eq!(merged.settings.branding, defaults.settings.branding);
        assert_eq!(merged.settings.newsletter, defaults.settings.newsletter);
    }

    #[test]
    fn serialization_round_trip_is_idempotent() {
        let defaults = default_content();
        let json = serde_json::to_string(&defaults).unwrap();
        let partial: PartialSiteContent = serde_json::from_str(&json).unwrap();
        let merged = merge_with_defaults(&defaults, partial);
        assert_eq!(merged, defaults);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        // Remote documents may carry a server-side `_updatedAt` stamp.
        let defaults = default_content();
        let json = r#"{"_updatedAt": "2025-01-01T00:00:00Z", "contact": {"phoneNumber": "+91 99"}}"#;
        let partial: PartialSiteContent = serde_json::from_str(json).unwrap();
        let merged = merge_with_defaults(&defaults, partial);
        assert_eq!(merged.contact.phone_number, "+91 99");
    }
}
