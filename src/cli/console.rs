//! Interactive console.
//!
//! `Console` is a pure line-in, lines-out state machine around a
//! `SessionController`; the stdin/stdout loop lives in `run`. After a search
//! with results, the next line is read as a 1-based selection instead of a
//! command.

use std::io::{self, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::core::{SearchResults, SessionController, SessionResult};

use super::render;

pub const WELCOME: &str =
    "Hello and welcome to the video player, what would you like to do?\nEnter HELP for list of available commands or EXIT to terminate.";
pub const GOODBYE: &str = "Video player is now closing...";

/// A parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video_id: String },
    RemoveFromPlaylist { playlist: String, video_id: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
    ShowAllPlaylists,
    SearchVideos(String),
    SearchVideosWithTag(String),
    FlagVideo { video_id: String, reason: Option<String> },
    AllowVideo(String),
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    Empty,

    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    Unknown(String),

    #[error("Please enter {command} command followed by {argument}.")]
    MissingArgument {
        command: String,
        argument: &'static str,
    },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let word = words.next().ok_or(CommandError::Empty)?;
        let command = word.to_uppercase();
        let args: Vec<&str> = words.collect();

        let arg = |idx: usize, argument: &'static str| -> Result<String, CommandError> {
            args.get(idx)
                .map(|s| s.to_string())
                .ok_or_else(|| CommandError::MissingArgument {
                    command: command.clone(),
                    argument,
                })
        };

        let parsed = match command.as_str() {
            "NUMBER_OF_VIDEOS" => Self::NumberOfVideos,
            "SHOW_ALL_VIDEOS" => Self::ShowAllVideos,
            "PLAY" => Self::Play(arg(0, "a video id")?),
            "PLAY_RANDOM" => Self::PlayRandom,
            "STOP" => Self::Stop,
            "PAUSE" => Self::Pause,
            "CONTINUE" => Self::Continue,
            "SHOW_PLAYING" => Self::ShowPlaying,
            "CREATE_PLAYLIST" => Self::CreatePlaylist(arg(0, "a playlist name")?),
            "ADD_TO_PLAYLIST" => Self::AddToPlaylist {
                playlist: arg(0, "a playlist name and a video id")?,
                video_id: arg(1, "a playlist name and a video id")?,
            },
            "REMOVE_FROM_PLAYLIST" => Self::RemoveFromPlaylist {
                playlist: arg(0, "a playlist name and a video id")?,
                video_id: arg(1, "a playlist name and a video id")?,
            },
            "CLEAR_PLAYLIST" => Self::ClearPlaylist(arg(0, "a playlist name")?),
            "DELETE_PLAYLIST" => Self::DeletePlaylist(arg(0, "a playlist name")?),
            "SHOW_PLAYLIST" => Self::ShowPlaylist(arg(0, "a playlist name")?),
            "SHOW_ALL_PLAYLISTS" => Self::ShowAllPlaylists,
            "SEARCH_VIDEOS" => Self::SearchVideos(arg(0, "a search term")?),
            "SEARCH_VIDEOS_WITH_TAG" => Self::SearchVideosWithTag(arg(0, "a tag")?),
            "FLAG_VIDEO" => Self::FlagVideo {
                video_id: arg(0, "a video id")?,
                reason: (args.len() > 1).then(|| args[1..].join(" ")),
            },
            "ALLOW_VIDEO" => Self::AllowVideo(arg(0, "a video id")?),
            "HELP" => Self::Help,
            "EXIT" => Self::Exit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };

        Ok(parsed)
    }
}

/// Parse a follow-up search selection.
///
/// Only a plain positive integer within `1..=count` is a selection.
pub fn parse_selection(input: &str, count: usize) -> Option<usize> {
    let input = input.trim();
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input
        .parse::<usize>()
        .ok()
        .filter(|&n| n >= 1 && n <= count)
}

/// Lines to print in response to one input line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub exit: bool,
}

impl From<Vec<String>> for Reply {
    fn from(lines: Vec<String>) -> Self {
        Self { lines, exit: false }
    }
}

/// Console state: the session plus any search awaiting a selection
pub struct Console {
    session: SessionController,
    offer_search_selection: bool,
    pending: Option<SearchResults>,
}

impl Console {
    pub fn new(session: SessionController, offer_search_selection: bool) -> Self {
        Self {
            session,
            offer_search_selection,
            pending: None,
        }
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    /// True when the next line will be read as a search selection
    pub fn awaiting_selection(&self) -> bool {
        self.pending.is_some()
    }

    pub fn handle_line(&mut self, line: &str) -> Reply {
        if let Some(results) = self.pending.take() {
            return self.select(&results, line);
        }

        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(CommandError::Empty) => Reply::default(),
            Err(e) => vec![e.to_string()].into(),
        }
    }

    fn select(&mut self, results: &SearchResults, line: &str) -> Reply {
        let chosen = parse_selection(line, results.len())
            .and_then(|n| results.select(n))
            .map(|video| video.id.to_string());

        match chosen {
            Some(id) => render::play(&self.session.play(&id)).into(),
            None => {
                debug!(input = line, "Search selection declined");
                Reply::default()
            }
        }
    }

    fn search(&mut self, result: SessionResult<SearchResults>) -> Reply {
        let mut lines = render::search_results(&result);
        if let Ok(results) = result {
            if self.offer_search_selection {
                lines.extend(render::SELECTION_PROMPT.iter().map(|s| s.to_string()));
                self.pending = Some(results);
            }
        }
        lines.into()
    }

    pub fn execute(&mut self, command: Command) -> Reply {
        let s = &mut self.session;
        let lines = match command {
            Command::NumberOfVideos => render::number_of_videos(s.number_of_videos()),
            Command::ShowAllVideos => render::all_videos(&s.show_all_videos()),
            Command::Play(id) => render::play(&s.play(&id)),
            Command::PlayRandom => render::play(&s.play_random()),
            Command::Stop => render::stop(&s.stop()),
            Command::Pause => render::pause(&s.pause()),
            Command::Continue => render::resume(&s.resume()),
            Command::ShowPlaying => render::show_playing(&s.show_playing()),
            Command::CreatePlaylist(name) => {
                render::create_playlist(&name, &s.create_playlist(&name))
            }
            Command::AddToPlaylist { playlist, video_id } => {
                render::add_to_playlist(&playlist, &s.add_to_playlist(&playlist, &video_id))
            }
            Command::RemoveFromPlaylist { playlist, video_id } => render::remove_from_playlist(
                &playlist,
                &s.remove_from_playlist(&playlist, &video_id),
            ),
            Command::ClearPlaylist(name) => render::clear_playlist(&name, &s.clear_playlist(&name)),
            Command::DeletePlaylist(name) => {
                render::delete_playlist(&name, &s.delete_playlist(&name))
            }
            Command::ShowPlaylist(name) => render::show_playlist(&name, &s.show_playlist(&name)),
            Command::ShowAllPlaylists => render::all_playlists(&s.list_playlists()),
            Command::SearchVideos(term) => {
                let result = s.search(&term);
                return self.search(result);
            }
            Command::SearchVideosWithTag(tag) => {
                let result = s.search_by_tag(&tag);
                return self.search(result);
            }
            Command::FlagVideo { video_id, reason } => {
                render::flag(&s.flag(&video_id, reason.as_deref()))
            }
            Command::AllowVideo(id) => render::allow(&s.allow(&id)),
            Command::Help => render::help(),
            Command::Exit => {
                return Reply {
                    lines: vec![GOODBYE.to_string()],
                    exit: true,
                }
            }
        };
        lines.into()
    }
}

/// Run the console over stdin/stdout until EXIT or end of input
pub async fn run(mut console: Console, prompt: &str) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = io::stdout();

    println!("{}", WELCOME);

    loop {
        if !console.awaiting_selection() {
            print!("{}", prompt);
            stdout.flush().context("Failed to flush stdout")?;
        }

        let Some(line) = lines
            .next_line()
            .await
            .context("Failed to read from stdin")?
        else {
            break;
        };

        let reply = console.handle_line(&line);
        for out in &reply.lines {
            println!("{}", out);
        }
        if reply.exit {
            break;
        }
    }

    Ok(())
}
