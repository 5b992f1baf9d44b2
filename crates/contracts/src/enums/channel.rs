use serde::{Deserialize, Serialize};

/// Acquisition channel filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    #[default]
    All,
    Organic,
    PaidSearch,
    SocialMedia,
    Email,
    Direct,
    Referral,
}

impl Channel {
    pub fn code(&self) -> &'static str {
        match self {
            Channel::All => "all",
            Channel::Organic => "organic",
            Channel::PaidSearch => "paid_search",
            Channel::SocialMedia => "social_media",
            Channel::Email => "email",
            Channel::Direct => "direct",
            Channel::Referral => "referral",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Channel::All => "Todos os canais",
            Channel::Organic => "Orgânico",
            Channel::PaidSearch => "Paid Search",
            Channel::SocialMedia => "Social Media",
            Channel::Email => "Email",
            Channel::Direct => "Direto",
            Channel::Referral => "Referral",
        }
    }

    pub fn all() -> Vec<Channel> {
        vec![
            Channel::All,
            Channel::Organic,
            Channel::PaidSearch,
            Channel::SocialMedia,
            Channel::Email,
            Channel::Direct,
            Channel::Referral,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|channel| channel.code() == code)
    }
}
