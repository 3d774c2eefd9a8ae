//! Raw provider results, before scoring.

/// A single playable item as reported by the provider.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackInfo {
    pub title: Option<String>,
    pub artist: Option<String>,
    /// Duration in seconds.
    pub length_secs: Option<u64>,
    pub watch_url: String,
    pub thumbnail_url: Option<String>,
}

impl TrackInfo {
    pub fn new(watch_url: impl Into<String>) -> Self {
        Self {
            watch_url: watch_url.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_length_secs(mut self, secs: u64) -> Self {
        self.length_secs = Some(secs);
        self
    }

    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    /// Length in milliseconds, `0` when unknown; saturates instead of overflowing.
    #[inline]
    pub fn length_ms(&self) -> u64 {
        self.length_secs.map_or(0, |s| s.saturating_mul(1000))
    }
}

/// Which flavour of grouping a collection is; drives the display title suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Playlist,
    Album,
    /// An artist page; its tracks are the artist's featured tracks.
    Artist,
}

impl CollectionKind {
    #[inline]
    pub fn title_suffix(&self) -> &'static str {
        match self {
            CollectionKind::Playlist => "(Playlist)",
            CollectionKind::Album => "(Full Album)",
            CollectionKind::Artist => "(Featured Tracks)",
        }
    }
}

/// An ordered group of tracks (playlist, album or artist page).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollectionInfo {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub thumbnail_url: Option<String>,
    pub tracks: Vec<TrackInfo>,
}

impl CollectionInfo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    pub fn with_tracks(mut self, tracks: Vec<TrackInfo>) -> Self {
        self.tracks = tracks;
        self
    }
}

/// Provider result, discriminated by what it is.
#[derive(Debug, Clone, PartialEq)]
pub enum Candidate {
    Track(TrackInfo),
    /// A music video; scored and typed as video.
    Video(TrackInfo),
    Collection {
        kind: CollectionKind,
        info: CollectionInfo,
    },
}

impl Candidate {
    pub fn playlist(info: CollectionInfo) -> Self {
        Candidate::Collection {
            kind: CollectionKind::Playlist,
            info,
        }
    }

    pub fn album(info: CollectionInfo) -> Self {
        Candidate::Collection {
            kind: CollectionKind::Album,
            info,
        }
    }

    pub fn artist(info: CollectionInfo) -> Self {
        Candidate::Collection {
            kind: CollectionKind::Artist,
            info,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Candidate::Track(t) | Candidate::Video(t) => t.title.as_deref(),
            Candidate::Collection { info, .. } => info.title.as_deref(),
        }
    }

    pub fn artist_name(&self) -> Option<&str> {
        match self {
            Candidate::Track(t) | Candidate::Video(t) => t.artist.as_deref(),
            Candidate::Collection { info, .. } => info.artist.as_deref(),
        }
    }

    #[inline]
    pub fn is_collection(&self) -> bool {
        matches!(self, Candidate::Collection { .. })
    }

    /// A video that is neither a collection nor known to be music.
    #[inline]
    pub fn is_bare_video(&self) -> bool {
        matches!(self, Candidate::Video(_))
    }
}
