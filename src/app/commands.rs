use serde::Serialize;
use std::fmt::Write;

use super::cli::Command;
use crate::player::{PlaybackState, Player, PlayerStatus, Result, Song, SongTime};

/// What a command produced, ready to print.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Done,
    Text(String),
    Number(i64),
    Song(Song),
    State(PlaybackState),
    Time(SongTime),
    Status(PlayerStatus),
    List(Vec<String>),
}

/// Run one CLI command against `player`.
pub fn execute(player: &dyn Player, command: &Command) -> Result<Outcome> {
    let outcome = match command {
        Command::Song => Outcome::Song(player.get_song()?),
        Command::Tag { name } => Outcome::Text(player.get_tag(name)?),
        Command::Volume => Outcome::Number(player.get_volume()?),
        Command::VolumeUp => {
            player.volume_up()?;
            Outcome::Done
        }
        Command::VolumeDown => {
            player.volume_down()?;
            Outcome::Done
        }
        Command::Next => Outcome::Song(player.next_song()?),
        Command::Previous => Outcome::Song(player.previous_song()?),
        Command::Toggle => Outcome::State(player.play_pause_toggle()?),
        Command::Remove { position } => {
            player.remove_from_playlist(*position)?;
            Outcome::Done
        }
        Command::Time => Outcome::Time(player.get_song_time()?),
        Command::Status => Outcome::State(player.get_player_status()?),
        Command::AllStatus => Outcome::Status(player.get_player_all_status()?),
        Command::Playlists => Outcome::List(player.get_all_playlists()?),
        Command::NextPlaylist => Outcome::Text(player.next_playlist()?),
        Command::Playlist { index } => Outcome::Text(player.change_playlist(*index)?),
        Command::Start => {
            player.start_player()?;
            Outcome::Done
        }
    };
    Ok(outcome)
}

impl Outcome {
    /// Text for the terminal; `None` when there is nothing to show.
    pub fn render(&self, json: bool) -> serde_json::Result<Option<String>> {
        if json {
            return serde_json::to_string_pretty(self).map(Some);
        }

        let text = match self {
            Outcome::Done => return Ok(None),
            Outcome::Text(s) => s.clone(),
            Outcome::Number(n) => n.to_string(),
            Outcome::Song(song) => song_lines(song),
            Outcome::State(state) => state.to_string(),
            Outcome::Time(t) => format!("{} / {}", t.output_time_human, t.time_human),
            Outcome::Status(s) => {
                let mut out = song_lines(&s.song);
                let _ = write!(
                    out,
                    "\nstatus: {}\nvolume: {}\ntime: {}/{}s\nplaylist: {}",
                    s.status, s.volume, s.output_seconds, s.song_seconds, s.playlist_name
                );
                out
            }
            Outcome::List(names) => names
                .iter()
                .enumerate()
                .map(|(i, name)| format!("{:>3}. {}", i + 1, name))
                .collect::<Vec<_>>()
                .join("\n"),
        };
        Ok(Some(text))
    }
}

fn song_lines(song: &Song) -> String {
    format!(
        "artist: {}\nalbum: {}\ntitle: {}",
        song.artist, song.album, song.title
    )
}
