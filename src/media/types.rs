use serde::{Deserialize, Serialize};

/// Kind of media a request asks for, or a result carries.
///
/// Serialized as the integer codes used by the playback negotiation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum MediaType {
    /// The request did not say music or video.
    #[default]
    Generic,
    Music,
    Video,
}

impl MediaType {
    /// Wire code.
    #[inline]
    pub fn code(&self) -> u8 {
        match self {
            MediaType::Generic => 0,
            MediaType::Music => 2,
            MediaType::Video => 3,
        }
    }

    #[inline]
    pub fn is_generic(&self) -> bool {
        matches!(self, MediaType::Generic)
    }

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Generic => "generic",
            MediaType::Music => "music",
            MediaType::Video => "video",
        }
    }
}

impl From<u8> for MediaType {
    fn from(code: u8) -> Self {
        match code {
            2 => MediaType::Music,
            3 => MediaType::Video,
            _ => MediaType::Generic,
        }
    }
}

impl From<MediaType> for u8 {
    fn from(media_type: MediaType) -> u8 {
        media_type.code()
    }
}

impl std::str::FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "generic" | "any" => Ok(Self::Generic),
            "music" | "audio" => Ok(Self::Music),
            "video" => Ok(Self::Video),
            _ => Err(format!("Unknown media type: {}", s)),
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the host should play a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum PlaybackType {
    /// Handed back to the owning skill.
    Skill,
    Video,
    #[default]
    Audio,
}

impl PlaybackType {
    #[inline]
    pub fn code(&self) -> u8 {
        match self {
            PlaybackType::Skill => 0,
            PlaybackType::Video => 1,
            PlaybackType::Audio => 2,
        }
    }
}

impl From<u8> for PlaybackType {
    fn from(code: u8) -> Self {
        match code {
            0 => PlaybackType::Skill,
            1 => PlaybackType::Video,
            _ => PlaybackType::Audio,
        }
    }
}

impl From<PlaybackType> for u8 {
    fn from(playback: PlaybackType) -> u8 {
        playback.code()
    }
}
