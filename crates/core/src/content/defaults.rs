//! Compiled-in default document. This is what the public site renders when
//! no remote backend is reachable, and what missing remote sections fall
//! back to during merge.

use super::model::*;

pub fn default_content() -> SiteContent {
    SiteContent {
        hero: default_hero(),
        videos: default_videos(),
        shorts: default_shorts(),
        reels: default_reels(),
        gallery: default_gallery(),
        posts: default_posts(),
        users: default_users(),
        contact: default_contact(),
        settings: default_settings(),
        integrations: default_integrations(),
    }
}

pub fn default_hero() -> HeroContent {
    HeroContent {
        headline: "Full Power, No Shaur. Jaipur's Stories On Screen.".to_string(),
        description: "Dive into the creators redefining Rajasthan's voice. From food trails \
                      to festival nights, JaipurTV brings the Pink City to the world across \
                      YouTube, Instagram, and beyond."
            .to_string(),
        primary_cta_label: "Watch Latest Videos".to_string(),
        primary_cta_link: "https://www.youtube.com/@jaipurtv".to_string(),
        secondary_cta_label: "Join the Community".to_string(),
        secondary_cta_link: "https://www.instagram.com/moinjaipurtv/".to_string(),
        trending_badge: "Trending Now on JaipurTV".to_string(),
        stats: vec![
            HeroStat {
                value: "100K+".to_string(),
                label: "Subscribers".to_string(),
            },
            HeroStat {
                value: "500+".to_string(),
                label: "Videos Published".to_string(),
            },
            HeroStat {
                value: "10M+".to_string(),
                label: "Lifetime Views".to_string(),
            },
        ],
    }
}

fn default_videos() -> Vec<VideoEntry> {
    vec![
        VideoEntry {
            id: "dQw4w9WgXcQ".to_string(),
            title: "Jaipur City Tour 2024".to_string(),
            views: Some("125K".to_string()),
            duration: Some("12:45".to_string()),
            kind: VideoKind::Video,
            category: "Travel".to_string(),
            thumbnail: None,
            url: Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string()),
        },
        VideoEntry {
            id: "dQw4w9WgXcQ".to_string(),
            title: "Street Food of Jaipur".to_string(),
            views: Some("98K".to_string()),
            duration: Some("15:20".to_string()),
            kind: VideoKind::Video,
            category: "Food".to_string(),
            thumbnail: None,
            url: Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string()),
        },
        VideoEntry {
            id: "dQw4w9WgXcQ".to_string(),
            title: "Jaipur Culture & Heritage".to_string(),
            views: Some("156K".to_string()),
            duration: Some("18:30".to_string()),
            kind: VideoKind::Video,
            category: "Culture".to_string(),
            thumbnail: None,
            url: Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string()),
        },
    ]
}

fn default_shorts() -> Vec<VideoEntry> {
    vec![
        VideoEntry {
            id: "dQw4w9WgXcQ".to_string(),
            title: "Hawa Mahal in 60 seconds".to_string(),
            views: Some("203K".to_string()),
            duration: Some("0:58".to_string()),
            kind: VideoKind::Short,
            category: "Travel".to_string(),
            thumbnail: None,
            url: Some("https://www.youtube.com/shorts/dQw4w9WgXcQ".to_string()),
        },
        VideoEntry {
            id: "dQw4w9WgXcQ".to_string(),
            title: "Jaipur Street Food Quick Bite".to_string(),
            views: Some("142K".to_string()),
            duration: Some("0:45".to_string()),
            kind: VideoKind::Short,
            category: "Food".to_string(),
            thumbnail: None,
            url: Some("https://www.youtube.com/shorts/dQw4w9WgXcQ".to_string()),
        },
        VideoEntry {
            id: "dQw4w9WgXcQ".to_string(),
            title: "Traditional Dance Performance".to_string(),
            views: Some("178K".to_string()),
            duration: Some("0:52".to_string()),
            kind: VideoKind::Short,
            category: "Culture".to_string(),
            thumbnail: None,
            url: Some("https://www.youtube.com/shorts/dQw4w9WgXcQ".to_string()),
        },
    ]
}

fn default_reels() -> Vec<ReelEntry> {
    vec![
        ReelEntry {
            id: "1".to_string(),
            url: "https://www.instagram.com/p/example1/".to_string(),
            thumbnail: "https://images.unsplash.com/photo-1524492412937-b28074a5d7da?w=800"
                .to_string(),
            caption: "Exploring the Pink City 🌸 #JaipurTV".to_string(),
            likes: Some("15K".to_string()),
            comments: Some("234".to_string()),
            username: Some("moinjaipurtv".to_string()),
            category: Some("Travel".to_string()),
        },
        ReelEntry {
            id: "2".to_string(),
            url: "https://www.instagram.com/p/example2/".to_string(),
            thumbnail: "https://images.unsplash.com/photo-1596797038530-2c107229654b?w=800"
                .to_string(),
            caption: "Best street food in Jaipur 🍛".to_string(),
            likes: Some("12K".to_string()),
            comments: Some("189".to_string()),
            username: Some("sameer4ukhan".to_string()),
            category: Some("Food".to_string()),
        },
        ReelEntry {
            id: "3".to_string(),
            url: "https://www.instagram.com/p/example3/".to_string(),
            thumbnail: "https://images.unsplash.com/photo-1599661046289-e31897846e41?w=800"
                .to_string(),
            caption: "Traditional Rajasthani culture 🎭".to_string(),
            likes: Some("18K".to_string()),
            comments: Some("312".to_string()),
            username: Some("moinjaipurtv".to_string()),
            category: Some("Culture".to_string()),
        },
    ]
}

fn default_gallery() -> Vec<GalleryItem> {
    vec![
        GalleryItem {
            id: "g-1".to_string(),
            kind: MediaKind::Image,
            title: "Sunrise at Amer Fort".to_string(),
            description: "Morning glow over Amer Fort captured during a shoot.".to_string(),
            image_url: "https://images.unsplash.com/photo-1505761671935-60b3a7427bad?w=1200"
                .to_string(),
            video_url: None,
            source_url: Some("https://instagram.com/p/example1".to_string()),
            likes: Some("12.4K".to_string()),
            comments: Some("312".to_string()),
            category: "Travel".to_string(),
            featured: Some(true),
            published_at: Some("2024-01-18".to_string()),
        },
        GalleryItem {
            id: "g-2".to_string(),
            kind: MediaKind::Image,
            title: "Rajasthani Cuisine".to_string(),
            description: "Behind the scenes tasting session with Jaipur's best chefs.".to_string(),
            image_url: "https://images.unsplash.com/photo-1589308078059-be1415eab4c3?w=1200"
                .to_string(),
            video_url: None,
            source_url: Some("https://instagram.com/p/example2".to_string()),
            likes: Some("18.1K".to_string()),
            comments: Some("842".to_string()),
            category: "Food".to_string(),
            featured: Some(false),
            published_at: Some("2024-01-10".to_string()),
        },
        GalleryItem {
            id: "g-3".to_string(),
            kind: MediaKind::Video,
            title: "Behind the Lens: City Night Shoot".to_string(),
            description: "A quick cut of our nighttime shoot across the Pink City skyline."
                .to_string(),
            image_url: "https://images.unsplash.com/photo-1533105079780-92b9be482077?w=1200"
                .to_string(),
            video_url: Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string()),
            source_url: Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string()),
            likes: Some("22K".to_string()),
            comments: Some("1.1K".to_string()),
            category: "Behind the Scenes".to_string(),
            featured: Some(true),
            published_at: Some("2024-02-02".to_string()),
        },
    ]
}

fn default_posts() -> Vec<PostEntry> {
    vec![
        PostEntry {
            id: "p-1".to_string(),
            title: "Behind JaipurTV: Filming the Pink City".to_string(),
            slug: "behind-jaipurtv-filming-the-pink-city".to_string(),
            excerpt: "How we storyboard, shoot, and edit every episode to capture Jaipur's spirit."
                .to_string(),
            content: "# Behind JaipurTV\nWe plan each episode with local stories in mind..."
                .to_string(),
            status: PostStatus::Published,
            published_at: Some("2024-01-05".to_string()),
            tags: Some(vec![
                "jaipur".to_string(),
                "production".to_string(),
                "storytelling".to_string(),
            ]),
        },
        PostEntry {
            id: "p-2".to_string(),
            title: "Top 5 Hidden Gems to Visit".to_string(),
            slug: "top-5-hidden-gems".to_string(),
            excerpt: "Our must-see spots beyond the usual tourist circuit.".to_string(),
            content: "Discover quiet courtyards, artisan workshops, and late-night eateries..."
                .to_string(),
            status: PostStatus::Draft,
            published_at: None,
            tags: Some(vec!["travel".to_string(), "guide".to_string()]),
        },
    ]
}

fn default_users() -> Vec<AdminUserEntry> {
    vec![
        AdminUserEntry {
            id: "u-1".to_string(),
            name: "Sameer Khan".to_string(),
            email: "sameer@jaipurtv.com".to_string(),
            role: UserRole::Owner,
            status: UserStatus::Active,
            last_login: Some("2025-10-15T09:00:00+05:30".to_string()),
        },
        AdminUserEntry {
            id: "u-2".to_string(),
            name: "Moin Khan".to_string(),
            email: "moin@jaipurtv.com".to_string(),
            role: UserRole::Owner,
            status: UserStatus::Active,
            last_login: Some("2025-10-18T14:30:00+05:30".to_string()),
        },
        AdminUserEntry {
            id: "u-3".to_string(),
            name: "Aditi Sharma".to_string(),
            email: "aditi@jaipurtv.com".to_string(),
            role: UserRole::Editor,
            status: UserStatus::Invited,
            last_login: None,
        },
    ]
}

fn default_contact() -> ContactContent {
    ContactContent {
        hero_title: "Get in Touch".to_string(),
        hero_highlight: "We'd love to hear from you!".to_string(),
        hero_description: "Drop us a line or follow us on social media.".to_string(),
        email_label: "Email".to_string(),
        email_address: "hello@jaipurtv.com".to_string(),
        location_label: "Location".to_string(),
        location_line1: "Jaipur, Rajasthan".to_string(),
        location_line2: "India".to_string(),
        business_label: "Business".to_string(),
        business_note: "For collaborations and business inquiries, please email us.".to_string(),
        phone_label: "Phone".to_string(),
        phone_number: "+91 1234567890".to_string(),
        follow_label: "Follow us".to_string(),
        follow_note: "Stay updated on our latest content and behind-the-scenes stories."
            .to_string(),
    }
}

fn default_settings() -> SettingsContent {
    SettingsContent {
        theme: ThemeSettings {
            primary_color: "#f973ab".to_string(),
            accent_color: "#facc15".to_string(),
            background_style: "gradient".to_string(),
        },
        branding: BrandingSettings {
            logo_path: "/jaipurtv-logo.png".to_string(),
            favicon_path: "/favicon.png".to_string(),
        },
        socials: SocialSettings {
            youtube: "https://www.youtube.com/@jaipurtv".to_string(),
            instagram_one: "https://www.instagram.com/moinjaipurtv/".to_string(),
            instagram_two: "https://www.instagram.com/sameer4ukhan/".to_string(),
            shorts_playlist_id: Some("UUSHuiKWS36eKqAoW2sxVxtScA".to_string()),
            uploads_playlist_id: Some("UUuiKWS36eKqAoW2sxVxtScA".to_string()),
        },
        newsletter: NewsletterSettings {
            provider: "Mailchimp".to_string(),
            signup_link: "https://mailchi.mp/jaipurtv/signup".to_string(),
        },
    }
}

fn default_integrations() -> IntegrationSettings {
    IntegrationSettings {
        youtube_api_key: String::new(),
        youtube_channel_id: "UC-example".to_string(),
        instagram_access_token: String::new(),
        email_provider_api_key: String::new(),
        last_synced_at: Some("2025-10-01T10:00:00+05:30".to_string()),
    }
}
