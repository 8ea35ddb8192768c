// Pure media-control state: which icon the mute button shows.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaIcon {
    /// Paused: clicking starts playback.
    Play,
    /// Playing but muted: clicking unmutes.
    Unmute,
    /// Playing and audible: clicking mutes.
    Mute,
}

/// Total function of the two reachable media flags.
pub fn media_icon(paused: bool, muted: bool) -> MediaIcon {
    if paused {
        MediaIcon::Play
    } else if muted {
        MediaIcon::Unmute
    } else {
        MediaIcon::Mute
    }
}
