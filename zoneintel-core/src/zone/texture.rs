use serde::{Deserialize, Serialize};
use std::fmt;

/// A zone's baseline character, derived from its point-of-interest mix.
/// Closed enumeration; recomputed whenever the baseline POI snapshot changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextureKind {
    MarketChaos,
    TemplePeace,
    NightlifeElectric,
    CafeCulture,
    TransitHub,
    TouristDense,
    ParkRefuge,
    Residential,
    LocalAuthentic,
    Mixed,
}

impl TextureKind {
    /// Where this texture sits on the dynamic spectrum before any
    /// time-of-day or incident shift is applied.
    pub fn baseline_spectrum(self) -> SpectrumTexture {
        match self {
            TextureKind::TemplePeace | TextureKind::ParkRefuge | TextureKind::Residential => {
                SpectrumTexture::Silence
            }
            TextureKind::CafeCulture | TextureKind::LocalAuthentic | TextureKind::Mixed => {
                SpectrumTexture::Analog
            }
            TextureKind::NightlifeElectric
            | TextureKind::TouristDense
            | TextureKind::TransitHub => SpectrumTexture::Neon,
            TextureKind::MarketChaos => SpectrumTexture::Chaos,
        }
    }
}

impl fmt::Display for TextureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TextureKind::MarketChaos => "MARKET_CHAOS",
            TextureKind::TemplePeace => "TEMPLE_PEACE",
            TextureKind::NightlifeElectric => "NIGHTLIFE_ELECTRIC",
            TextureKind::CafeCulture => "CAFE_CULTURE",
            TextureKind::TransitHub => "TRANSIT_HUB",
            TextureKind::TouristDense => "TOURIST_DENSE",
            TextureKind::ParkRefuge => "PARK_REFUGE",
            TextureKind::Residential => "RESIDENTIAL",
            TextureKind::LocalAuthentic => "LOCAL_AUTHENTIC",
            TextureKind::Mixed => "MIXED",
        };
        f.write_str(s)
    }
}

/// Full static texture classification for a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneTexture {
    pub primary: TextureKind,
    pub secondary: Option<TextureKind>,
    /// Fixed descriptive tags carried by the primary texture.
    pub tags: Vec<String>,
    /// 0–100.
    pub walkability: f64,
    /// 0–100.
    pub safety_score: f64,
    pub vibe_keywords: Vec<String>,
}

/// The four dynamic textures form an ordered spectrum; the derived `Ord`
/// follows declaration order (Silence < Analog < Neon < Chaos).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpectrumTexture {
    Silence,
    Analog,
    Neon,
    Chaos,
}

impl SpectrumTexture {
    pub const SPECTRUM: [SpectrumTexture; 4] = [
        SpectrumTexture::Silence,
        SpectrumTexture::Analog,
        SpectrumTexture::Neon,
        SpectrumTexture::Chaos,
    ];

    /// Position on the spectrum, 0..=3.
    pub fn index(self) -> usize {
        match self {
            SpectrumTexture::Silence => 0,
            SpectrumTexture::Analog => 1,
            SpectrumTexture::Neon => 2,
            SpectrumTexture::Chaos => 3,
        }
    }

    /// Spectrum position clamped to the valid range.
    pub fn from_index(index: i64) -> Self {
        let clamped = index.clamp(0, 3) as usize;
        Self::SPECTRUM[clamped]
    }

    /// Absolute distance between two spectrum positions.
    pub fn distance(self, other: SpectrumTexture) -> usize {
        self.index().abs_diff(other.index())
    }
}

/// Request-time overlay on a zone's texture. Recomputed on every read,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DynamicTexture {
    pub current_texture: SpectrumTexture,
    pub time_modifier: f64,
    pub day_modifier: f64,
    pub incident_modifier: f64,
    /// Absolute value of the net modifier sum.
    pub shift_magnitude: f64,
}
