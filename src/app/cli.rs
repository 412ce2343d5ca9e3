use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use super::config::RemoteOverrides;
use crate::player::Backend;

/// audremote - control an Audacious player on another machine over SSH
#[derive(Parser, Debug)]
#[command(name = "audremote", version, about)]
pub struct Args {
    /// Config file (default: <config dir>/audremote/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Player backend (overrides the config file)
    #[arg(long, value_enum)]
    pub backend: Option<Backend>,

    /// Remote host address
    #[arg(long, short = 'H')]
    pub host: Option<String>,

    /// Remote user name
    #[arg(long, short = 'u')]
    pub user: Option<String>,

    /// SSH identity file
    #[arg(long, short = 'i', value_name = "PATH")]
    pub identity: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// More logging (-v info, -vv debug)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Generate default config.toml to stdout
    #[arg(long)]
    pub generate_config: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    pub fn overrides(&self) -> RemoteOverrides {
        RemoteOverrides {
            host: self.host.clone(),
            user: self.user.clone(),
            identity_file: self.identity.clone(),
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the current song
    Song,
    /// Show one field of the current song (album, artist or title)
    Tag { name: String },
    /// Show the volume
    Volume,
    VolumeUp,
    VolumeDown,
    /// Skip to the next song
    Next,
    /// Go back to the previous song
    Previous,
    /// Toggle play/pause
    Toggle,
    /// Remove a song from the playlist (default: the current one)
    Remove { position: Option<u32> },
    /// Show song length and elapsed time
    Time,
    /// Show playback status
    Status,
    /// Show song, volume, status, times and playlist in one go
    AllStatus,
    /// List playlist names
    Playlists,
    /// Switch to the next playlist
    NextPlaylist,
    /// Switch to the playlist at a 1-based index
    Playlist { index: i64 },
    /// Start the player
    Start,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommands() {
        let args = Args::parse_from(["audremote", "-H", "10.0.0.5", "volume-up"]);
        assert_eq!(args.host.as_deref(), Some("10.0.0.5"));
        assert_eq!(args.command, Some(Command::VolumeUp));

        let args = Args::parse_from(["audremote", "--backend", "audacious", "--json", "remove", "4"]);
        assert_eq!(args.backend, Some(Backend::Audacious));
        assert!(args.json);
        assert_eq!(args.command, Some(Command::Remove { position: Some(4) }));

        let args = Args::parse_from(["audremote", "tag", "artist"]);
        assert_eq!(
            args.command,
            Some(Command::Tag {
                name: "artist".to_string()
            })
        );
    }

    #[test]
    fn test_verbose_counts() {
        let args = Args::parse_from(["audremote", "-vv", "status"]);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_generate_config_needs_no_command() {
        let args = Args::parse_from(["audremote", "--generate-config"]);
        assert!(args.generate_config);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from(["audremote", "-u", "pi", "-i", "/keys/pi", "song"]);
        let o = args.overrides();
        assert_eq!(o.host, None);
        assert_eq!(o.user.as_deref(), Some("pi"));
        assert_eq!(o.identity_file, Some(PathBuf::from("/keys/pi")));
    }
}
