//! Audacious, driven through `audtool` on the remote host.
//!
//! The player's title format must be set to
//! `${artist} | ${album} | ${title}` for song parsing to work.

pub mod batch;

use self::batch::Batch;
use crate::player::error::{PlayerError, Result};
use crate::player::traits::{PlaybackState, Player, PlayerStatus, Song, SongTime, Tag};
use crate::player::VOLUME_INCREMENT;
use crate::remote::CommandExecutor;
use tracing::debug;

const AUDTOOL: &str = "audtool";

/// Subcommands of the status batch, in the order they are issued.
const STATUS_COMMANDS: [&str; 6] = [
    "current-song",
    "get-volume",
    "playback-status",
    "current-song-length-seconds",
    "current-song-output-length-seconds",
    "current-playlist-name",
];

pub struct AudaciousPlayer<E> {
    executor: E,
    volume_step: i64,
}

impl<E: CommandExecutor> AudaciousPlayer<E> {
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            volume_step: VOLUME_INCREMENT,
        }
    }

    pub fn with_volume_step(mut self, step: i64) -> Self {
        self.volume_step = step;
        self
    }

    /// Run `audtool <args>` and return its stdout.
    fn audtool(&self, args: &[&str]) -> Result<String> {
        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push(AUDTOOL.to_string());
        argv.extend(args.iter().map(|a| a.to_string()));
        let output = self.executor.run(&argv)?;
        Ok(output.stdout_text())
    }

    /// Run `audtool <args>` and parse its reply as an integer.
    fn audtool_int(&self, args: &[&str]) -> Result<i64> {
        let text = self.audtool(args)?;
        parse_int(args.first().copied().unwrap_or(AUDTOOL), &text)
    }

    fn run_batch(&self, batch: &Batch) -> Result<String> {
        debug!(commands = batch.len(), "running audtool batch");
        let output = self.executor.run(&batch.to_remote_args(AUDTOOL))?;
        Ok(output.stdout_text())
    }

    fn fetch_tag(&self, tag: Tag) -> Result<String> {
        let text = self.audtool(&["current-song-tuple-data", tag.as_str()])?;
        Ok(strip_newline(&text).to_string())
    }

    fn adjust_volume(&self, delta: i64) -> Result<()> {
        // No clamping here: audtool decides what to do with out-of-range values
        let target = self.get_volume()? + delta;
        self.audtool(&["set-volume", &target.to_string()])?;
        Ok(())
    }

    fn current_playlist_name(&self) -> Result<String> {
        let text = self.audtool(&["current-playlist-name"])?;
        Ok(strip_newline(&text).to_string())
    }

    /// (current 1-based playlist index, number of playlists)
    fn playlist_position(&self) -> Result<(i64, i64)> {
        let current = self.audtool_int(&["current-playlist"])?;
        let count = self.audtool_int(&["number-of-playlists"])?;
        Ok((current, count))
    }
}

impl<E: CommandExecutor> Player for AudaciousPlayer<E> {
    fn get_song(&self) -> Result<Song> {
        self.audtool(&["current-song"])?.parse()
    }

    /// Anything but `album`, `artist` or `title` is rejected before the
    /// remote host is contacted.
    fn get_tag(&self, tag: &str) -> Result<String> {
        let tag: Tag = tag.parse()?;
        self.fetch_tag(tag)
    }

    fn get_volume(&self) -> Result<i64> {
        self.audtool_int(&["get-volume"])
    }

    fn volume_up(&self) -> Result<()> {
        self.adjust_volume(self.volume_step)
    }

    fn volume_down(&self) -> Result<()> {
        self.adjust_volume(-self.volume_step)
    }

    fn next_playlist(&self) -> Result<String> {
        let (current, count) = self.playlist_position()?;
        self.change_playlist(next_playlist_index(current, count))
    }

    fn change_playlist(&self, index: i64) -> Result<String> {
        self.audtool(&["set-current-playlist", &index.to_string()])?;
        self.current_playlist_name()
    }

    fn next_song(&self) -> Result<Song> {
        self.audtool(&["playlist-advance"])?;
        self.get_song()
    }

    fn previous_song(&self) -> Result<Song> {
        self.audtool(&["playlist-reverse"])?;
        self.get_song()
    }

    fn play_pause_toggle(&self) -> Result<PlaybackState> {
        self.audtool(&["playback-playpause"])?;
        self.get_player_status()
    }

    fn remove_from_playlist(&self, position: Option<u32>) -> Result<()> {
        let position = match position {
            Some(p) => p.to_string(),
            None => self.audtool(&["playlist-position"])?.trim().to_string(),
        };
        self.audtool(&["playlist-delete", &position])?;
        Ok(())
    }

    fn get_song_time(&self) -> Result<SongTime> {
        let length = self.audtool_int(&["current-song-length-seconds"])?;
        let output = self.audtool_int(&["current-song-output-length-seconds"])?;
        Ok(SongTime::new(length, output))
    }

    fn get_player_status(&self) -> Result<PlaybackState> {
        self.audtool(&["playback-status"])?.parse()
    }

    fn get_all_playlists(&self) -> Result<Vec<String>> {
        let (current, count) = self.playlist_position()?;

        // Walk the displayed playlist through every index, then put the
        // selection and focus back where they were.
        let mut batch = Batch::new().action("select-displayed");
        for idx in 1..=count {
            batch = batch
                .action(format!("set-current-playlist {idx}"))
                .query("current-playlist-name");
        }
        let batch = batch
            .action(format!("set-current-playlist {current}"))
            .action("select-playing");

        let stdout = self.run_batch(&batch)?;
        let names = batch
            .demux(&stdout)?
            .into_iter()
            .filter(|r| r.command == "current-playlist-name")
            .map(|r| r.text().to_string())
            .collect();
        Ok(names)
    }

    fn get_player_all_status(&self) -> Result<PlayerStatus> {
        let batch = STATUS_COMMANDS
            .iter()
            .fold(Batch::new(), |b, cmd| b.query(*cmd));
        let stdout = self.run_batch(&batch)?;
        let replies = batch.demux(&stdout)?;

        Ok(PlayerStatus {
            song: replies[0].value()?.parse()?,
            volume: parse_int(replies[1].command, replies[1].value()?)?,
            status: replies[2].value()?.parse()?,
            song_seconds: parse_int(replies[3].command, replies[3].value()?)?,
            output_seconds: parse_int(replies[4].command, replies[4].value()?)?,
            playlist_name: replies[5].text().to_string(),
        })
    }
}

/// Index after `current` among `count` playlists, wrapping to 1.
pub fn next_playlist_index(current: i64, count: i64) -> i64 {
    if current + 1 > count {
        1
    } else {
        current + 1
    }
}

fn parse_int(command: &str, text: &str) -> Result<i64> {
    text.trim().parse().map_err(|_| {
        PlayerError::Format(format!("`{command}` printed {text:?}, expected an integer"))
    })
}

fn strip_newline(text: &str) -> &str {
    text.strip_suffix('\n').unwrap_or(text)
}
