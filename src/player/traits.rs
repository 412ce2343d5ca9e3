use super::error::{PlayerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between artist, album and title in the player's title line.
pub const SONG_DELIMITER: char = '|';

/// Title format the player must be configured with.
pub const SONG_TEMPLATE: &str = "${artist} | ${album} | ${title}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub artist: String,
    pub album: String,
    pub title: String,
}

impl FromStr for Song {
    type Err = PlayerError;

    /// Parses `"artist | album | title"`. Exactly three fields are required.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(SONG_DELIMITER).collect();
        match parts.as_slice() {
            [artist, album, title] => Ok(Song {
                artist: artist.trim().to_string(),
                album: album.trim().to_string(),
                title: title.trim().to_string(),
            }),
            _ => Err(PlayerError::Format(format!(
                "song title format is not set correctly (found {} fields); set it to \"{}\"",
                parts.len(),
                SONG_TEMPLATE
            ))),
        }
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.artist, self.album, self.title)
    }
}

/// Metadata fields that can be queried one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Album,
    Artist,
    Title,
}

impl Tag {
    pub const ALL: [Tag; 3] = [Tag::Album, Tag::Artist, Tag::Title];

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Album => "album",
            Tag::Artist => "artist",
            Tag::Title => "title",
        }
    }
}

impl FromStr for Tag {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self> {
        Tag::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| PlayerError::InvalidTag(s.to_string()))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared status vocabulary every backend reports in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    Playing,
    Paused,
    Stopped,
    NotRunning,
}

impl PlaybackState {
    pub fn as_str(self) -> &'static str {
        match self {
            PlaybackState::Playing => "playing",
            PlaybackState::Paused => "paused",
            PlaybackState::Stopped => "stopped",
            PlaybackState::NotRunning => "not_running",
        }
    }
}

impl FromStr for PlaybackState {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "playing" => Ok(PlaybackState::Playing),
            "paused" => Ok(PlaybackState::Paused),
            "stopped" => Ok(PlaybackState::Stopped),
            "not_running" => Ok(PlaybackState::NotRunning),
            other => Err(PlayerError::Format(format!(
                "unknown playback status {other:?}"
            ))),
        }
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length and elapsed time of the current song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongTime {
    pub time_seconds: i64,
    pub time_human: String,
    pub output_time_seconds: i64,
    pub output_time_human: String,
}

impl SongTime {
    pub fn new(time_seconds: i64, output_time_seconds: i64) -> Self {
        Self {
            time_seconds,
            time_human: format_duration(time_seconds),
            output_time_seconds,
            output_time_human: format_duration(output_time_seconds),
        }
    }
}

/// `H:MM:SS`, hours unpadded.
pub fn format_duration(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let total = seconds.unsigned_abs();
    format!(
        "{}{}:{:02}:{:02}",
        sign,
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Everything the player reports in one round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatus {
    #[serde(flatten)]
    pub song: Song,
    pub volume: i64,
    pub status: PlaybackState,
    pub song_seconds: i64,
    pub output_seconds: i64,
    pub playlist_name: String,
}

/// The uniform interface over every remotely controlled player.
///
/// Each method defaults to `PlayerError::Unsupported`, so a backend only
/// overrides what its control tool can actually do. Callers can test for
/// that with [`PlayerError::is_unsupported`].
pub trait Player: Send + Sync {
    fn get_song(&self) -> Result<Song> {
        Err(PlayerError::Unsupported("get_song"))
    }

    /// One metadata field of the current song: `album`, `artist` or `title`.
    fn get_tag(&self, _tag: &str) -> Result<String> {
        Err(PlayerError::Unsupported("get_tag"))
    }

    fn get_volume(&self) -> Result<i64> {
        Err(PlayerError::Unsupported("get_volume"))
    }

    fn volume_up(&self) -> Result<()> {
        Err(PlayerError::Unsupported("volume_up"))
    }

    fn volume_down(&self) -> Result<()> {
        Err(PlayerError::Unsupported("volume_down"))
    }

    /// Switch to the next playlist, wrapping after the last one.
    /// Returns the new playlist's name.
    fn next_playlist(&self) -> Result<String> {
        Err(PlayerError::Unsupported("next_playlist"))
    }

    /// Switch to the playlist at a 1-based `index` and return its name.
    fn change_playlist(&self, _index: i64) -> Result<String> {
        Err(PlayerError::Unsupported("change_playlist"))
    }

    fn next_song(&self) -> Result<Song> {
        Err(PlayerError::Unsupported("next_song"))
    }

    fn previous_song(&self) -> Result<Song> {
        Err(PlayerError::Unsupported("previous_song"))
    }

    /// Toggle play/pause and report the state afterwards.
    fn play_pause_toggle(&self) -> Result<PlaybackState> {
        Err(PlayerError::Unsupported("play_pause_toggle"))
    }

    /// Remove the entry at `position`, or the current song when `None`.
    fn remove_from_playlist(&self, _position: Option<u32>) -> Result<()> {
        Err(PlayerError::Unsupported("remove_from_playlist"))
    }

    fn get_song_time(&self) -> Result<SongTime> {
        Err(PlayerError::Unsupported("get_song_time"))
    }

    fn get_player_status(&self) -> Result<PlaybackState> {
        Err(PlayerError::Unsupported("get_player_status"))
    }

    /// Playlist names in index order.
    fn get_all_playlists(&self) -> Result<Vec<String>> {
        Err(PlayerError::Unsupported("get_all_playlists"))
    }

    fn start_player(&self) -> Result<()> {
        Err(PlayerError::Unsupported("start_player"))
    }

    fn get_player_all_status(&self) -> Result<PlayerStatus> {
        Err(PlayerError::Unsupported("get_player_all_status"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BarePlayer;
    impl Player for BarePlayer {}

    #[test]
    fn test_parse_song() {
        let song: Song = "Radiohead | OK Computer | Airbag".parse().unwrap();
        assert_eq!(song.artist, "Radiohead");
        assert_eq!(song.album, "OK Computer");
        assert_eq!(song.title, "Airbag");
    }

    #[test]
    fn test_parse_song_trims_and_keeps_empty_fields() {
        let song: Song = "  Boards of Canada|  |Roygbiv \n".parse().unwrap();
        assert_eq!(song.artist, "Boards of Canada");
        assert_eq!(song.album, "");
        assert_eq!(song.title, "Roygbiv");
    }

    #[test]
    fn test_parse_song_wrong_field_count() {
        for input in ["Airbag", "Radiohead - Airbag", "A | B", "A | B | C | D", ""] {
            let err = input.parse::<Song>().unwrap_err();
            match err {
                PlayerError::Format(msg) => assert!(msg.contains(SONG_TEMPLATE), "{msg}"),
                other => panic!("expected format error for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_tag_allow_set() {
        assert_eq!("album".parse::<Tag>().unwrap(), Tag::Album);
        assert_eq!("artist".parse::<Tag>().unwrap(), Tag::Artist);
        assert_eq!("title".parse::<Tag>().unwrap(), Tag::Title);
        for bad in ["genre", "Title", " title", ""] {
            assert!(matches!(bad.parse::<Tag>(), Err(PlayerError::InvalidTag(_))));
        }
    }

    #[test]
    fn test_playback_state_vocabulary() {
        assert_eq!("playing\n".parse::<PlaybackState>().unwrap(), PlaybackState::Playing);
        assert_eq!("paused".parse::<PlaybackState>().unwrap(), PlaybackState::Paused);
        assert_eq!("stopped".parse::<PlaybackState>().unwrap(), PlaybackState::Stopped);
        assert_eq!(PlaybackState::NotRunning.to_string(), "not_running");
        assert!("buffering".parse::<PlaybackState>().is_err());
        assert_eq!(
            serde_json::to_string(&PlaybackState::NotRunning).unwrap(),
            "\"not_running\""
        );
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00:00");
        assert_eq!(format_duration(284), "0:04:44");
        assert_eq!(format_duration(3725), "1:02:05");
        assert_eq!(format_duration(90_000), "25:00:00");
        assert_eq!(format_duration(-1), "-0:00:01");
    }

    #[test]
    fn test_song_time_human_fields() {
        let t = SongTime::new(284, 61);
        assert_eq!(t.time_human, "0:04:44");
        assert_eq!(t.output_time_seconds, 61);
        assert_eq!(t.output_time_human, "0:01:01");
    }

    #[test]
    fn test_player_status_serializes_flat() {
        let status = PlayerStatus {
            song: "Radiohead | OK Computer | Airbag".parse().unwrap(),
            volume: 50,
            status: PlaybackState::Playing,
            song_seconds: 284,
            output_seconds: 12,
            playlist_name: "Default".to_string(),
        };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["artist"], "Radiohead");
        assert_eq!(json["status"], "playing");
        assert_eq!(json["playlist_name"], "Default");
    }

    #[test]
    fn test_default_operations_are_unsupported() {
        let p = BarePlayer;
        assert!(p.get_song().unwrap_err().is_unsupported());
        assert!(p.get_tag("title").unwrap_err().is_unsupported());
        assert!(p.get_volume().unwrap_err().is_unsupported());
        assert!(p.volume_up().unwrap_err().is_unsupported());
        assert!(p.next_playlist().unwrap_err().is_unsupported());
        assert!(p.remove_from_playlist(None).unwrap_err().is_unsupported());
        assert!(p.get_all_playlists().unwrap_err().is_unsupported());
        assert!(matches!(
            p.start_player(),
            Err(PlayerError::Unsupported("start_player"))
        ));
        assert!(p.get_player_all_status().unwrap_err().is_unsupported());
    }
}
