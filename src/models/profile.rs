use serde::{Deserialize, Serialize};

/// The kind of a social link, used to pick its icon class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Github,
    Linkedin,
    Twitter,
    Email,
    #[default]
    Website,
}

impl SocialKind {
    pub fn icon_class(self) -> &'static str {
        match self {
            SocialKind::Github => "icon-github",
            SocialKind::Linkedin => "icon-linkedin",
            SocialKind::Twitter => "icon-twitter",
            SocialKind::Email => "icon-mail",
            SocialKind::Website => "icon-globe",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub kind: SocialKind,
}

impl SocialLink {
    /// Whether the link leaves the site and should open in a new tab.
    pub fn is_external(&self) -> bool {
        self.url.starts_with("http://") || self.url.starts_with("https://")
    }
}

/// Everything the landing page shows about the site owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteProfile {
    pub name: String,
    pub headline: String,
    pub bio: String,
    /// Path under `public/`, e.g. `/images/avatar.jpg`.
    pub avatar: String,
    #[serde(default)]
    pub location: Option<String>,
    pub github_user: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    pub contact_email: String,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            headline: "Software Engineer".to_string(),
            bio: "I build things for the web.".to_string(),
            avatar: "/images/avatar.jpg".to_string(),
            location: None,
            github_user: "octocat".to_string(),
            socials: vec![SocialLink {
                label: "GitHub".to_string(),
                url: "https://github.com/octocat".to_string(),
                kind: SocialKind::Github,
            }],
            contact_email: "hello@example.com".to_string(),
        }
    }
}
