//! Fixed descriptive data per texture: tags and vibe keywords used for
//! search and display. Data, not logic.

use zoneintel_core::zone::TextureKind;

#[derive(Debug, Clone, Copy)]
pub struct TextureProfile {
    pub tags: &'static [&'static str],
    pub vibe_keywords: &'static [&'static str],
}

pub fn profile(kind: TextureKind) -> TextureProfile {
    match kind {
        TextureKind::MarketChaos => TextureProfile {
            tags: &["market", "street-food", "haggling"],
            vibe_keywords: &["loud", "crowded", "sensory", "bustling"],
        },
        TextureKind::TemplePeace => TextureProfile {
            tags: &["temple", "spiritual", "quiet"],
            vibe_keywords: &["serene", "incense", "reflective"],
        },
        TextureKind::NightlifeElectric => TextureProfile {
            tags: &["nightlife", "bars", "late-night"],
            vibe_keywords: &["electric", "neon", "social", "loud"],
        },
        TextureKind::CafeCulture => TextureProfile {
            tags: &["cafe", "coffee", "work-friendly"],
            vibe_keywords: &["relaxed", "conversational", "third-wave"],
        },
        TextureKind::TransitHub => TextureProfile {
            tags: &["transit", "connections", "transient"],
            vibe_keywords: &["rushed", "anonymous", "convenient"],
        },
        TextureKind::TouristDense => TextureProfile {
            tags: &["tourist", "landmarks", "photo-spots"],
            vibe_keywords: &["busy", "international", "curated"],
        },
        TextureKind::ParkRefuge => TextureProfile {
            tags: &["park", "green", "open-air"],
            vibe_keywords: &["calm", "shaded", "breathable"],
        },
        TextureKind::Residential => TextureProfile {
            tags: &["residential", "local-living"],
            vibe_keywords: &["quiet", "everyday", "unhurried"],
        },
        TextureKind::LocalAuthentic => TextureProfile {
            tags: &["local", "authentic", "untouristed"],
            vibe_keywords: &["genuine", "neighborhood", "unpolished"],
        },
        TextureKind::Mixed => TextureProfile {
            tags: &["mixed"],
            vibe_keywords: &["varied"],
        },
    }
}
