//! Outcome rendering: the exact text the console prints.
//!
//! Each function takes the result of one session operation and returns the
//! lines to show. Failure reasons come from `SessionError`'s `Display`; the
//! operation-specific "Cannot ..." prefix is added here.

use crate::core::{
    Flagged, NowPlaying, Played, PlaylistView, SearchResults, SessionError, SessionResult,
};
use crate::domain::{Video, VideoListing};

pub const SELECTION_PROMPT: [&str; 2] = [
    "Would you like to play any of the above? If yes, specify the number of the video.",
    "If your answer is not a valid number, we will assume it's a no.",
];

fn render<T>(
    result: &SessionResult<T>,
    on_ok: impl FnOnce(&T) -> Vec<String>,
    on_err: impl FnOnce(&SessionError) -> String,
) -> Vec<String> {
    match result {
        Ok(value) => on_ok(value),
        Err(e) => vec![on_err(e)],
    }
}

fn cannot(action: &str, e: &SessionError) -> String {
    format!("Cannot {}: {}", action, e)
}

fn stopping(video: &Video) -> String {
    format!("Stopping video: {}", video.title)
}

pub fn number_of_videos(count: usize) -> Vec<String> {
    vec![format!("{} videos in the library", count)]
}

pub fn all_videos(videos: &[VideoListing]) -> Vec<String> {
    std::iter::once("Here's a list of all available videos:".to_string())
        .chain(videos.iter().map(ToString::to_string))
        .collect()
}

/// `play`, `play_random` and search selections
pub fn play(result: &SessionResult<Played>) -> Vec<String> {
    render(
        result,
        |played| {
            played
                .stopped
                .iter()
                .map(stopping)
                .chain(std::iter::once(format!("Playing video: {}", played.playing.title)))
                .collect()
        },
        |e| match e {
            SessionError::NoVideosAvailable => e.to_string(),
            _ => cannot("play video", e),
        },
    )
}

pub fn stop(result: &SessionResult<Video>) -> Vec<String> {
    render(result, |v| vec![stopping(v)], |e| cannot("stop video", e))
}

pub fn pause(result: &SessionResult<Video>) -> Vec<String> {
    render(
        result,
        |v| vec![format!("Pausing video: {}", v.title)],
        |e| match e {
            SessionError::AlreadyPaused { .. } => e.to_string(),
            _ => cannot("pause video", e),
        },
    )
}

pub fn resume(result: &SessionResult<Video>) -> Vec<String> {
    render(
        result,
        |v| vec![format!("Continuing video: {}", v.title)],
        |e| cannot("continue video", e),
    )
}

pub fn show_playing(result: &SessionResult<NowPlaying>) -> Vec<String> {
    render(
        result,
        |now| {
            let suffix = if now.paused { " - PAUSED" } else { "" };
            vec![format!("Currently playing: {}{}", now.listing, suffix)]
        },
        ToString::to_string,
    )
}

pub fn create_playlist(name: &str, result: &SessionResult<String>) -> Vec<String> {
    render(
        result,
        |_| vec![format!("Successfully created new playlist: {}", name)],
        |e| cannot("create playlist", e),
    )
}

pub fn add_to_playlist(name: &str, result: &SessionResult<Video>) -> Vec<String> {
    render(
        result,
        |v| vec![format!("Added video to {}: {}", name, v.title)],
        |e| cannot(&format!("add video to {}", name), e),
    )
}

pub fn remove_from_playlist(name: &str, result: &SessionResult<Video>) -> Vec<String> {
    render(
        result,
        |v| vec![format!("Removed video from {}: {}", name, v.title)],
        |e| cannot(&format!("remove video from {}", name), e),
    )
}

pub fn clear_playlist(name: &str, result: &SessionResult<()>) -> Vec<String> {
    render(
        result,
        |_| vec![format!("Successfully removed all videos from {}", name)],
        |e| cannot(&format!("clear playlist {}", name), e),
    )
}

pub fn delete_playlist(name: &str, result: &SessionResult<String>) -> Vec<String> {
    render(
        result,
        |_| vec![format!("Deleted playlist: {}", name)],
        |e| cannot(&format!("delete playlist {}", name), e),
    )
}

pub fn show_playlist(name: &str, result: &SessionResult<PlaylistView>) -> Vec<String> {
    render(
        result,
        |view| {
            let mut lines = vec![format!("Showing playlist: {}", name)];
            if view.videos.is_empty() {
                lines.push("No videos here yet".to_string());
            } else {
                lines.extend(view.videos.iter().map(ToString::to_string));
            }
            lines
        },
        |e| cannot(&format!("show playlist {}", name), e),
    )
}

pub fn all_playlists(names: &[String]) -> Vec<String> {
    if names.is_empty() {
        return vec!["No playlists exist yet".to_string()];
    }
    std::iter::once("Showing all playlists:".to_string())
        .chain(names.iter().cloned())
        .collect()
}

/// Numbered search results, without the follow-up prompt
pub fn search_results(result: &SessionResult<SearchResults>) -> Vec<String> {
    render(
        result,
        |results| {
            std::iter::once(format!("Here are the results for {}:", results.term))
                .chain(
                    results
                        .matches
                        .iter()
                        .enumerate()
                        .map(|(idx, listing)| format!("{}) {}", idx + 1, listing)),
                )
                .collect()
        },
        ToString::to_string,
    )
}

pub fn flag(result: &SessionResult<Flagged>) -> Vec<String> {
    render(
        result,
        |flagged| {
            flagged
                .stopped
                .iter()
                .map(stopping)
                .chain(std::iter::once(format!(
                    "Successfully flagged video: {} (reason: {})",
                    flagged.video.title, flagged.reason
                )))
                .collect()
        },
        |e| cannot("flag video", e),
    )
}

pub fn allow(result: &SessionResult<Video>) -> Vec<String> {
    render(
        result,
        |v| vec![format!("Successfully removed flag from video: {}", v.title)],
        |e| cannot("remove flag from video", e),
    )
}

pub fn help() -> Vec<String> {
    [
        "Available commands:",
        "    NUMBER_OF_VIDEOS - Shows how many videos are in the library.",
        "    SHOW_ALL_VIDEOS - Lists all videos from the library.",
        "    PLAY <video_id> - Plays specified video.",
        "    PLAY_RANDOM - Plays a random video from the library.",
        "    STOP - Stop the current video.",
        "    PAUSE - Pause the current video.",
        "    CONTINUE - Resume the current paused video.",
        "    SHOW_PLAYING - Displays the title, video_id, video tags and paused status of the video that is currently playing (or paused).",
        "    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.",
        "    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.",
        "    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist",
        "    CLEAR_PLAYLIST <playlist_name> - Removes all videos from the playlist.",
        "    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.",
        "    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.",
        "    SHOW_ALL_PLAYLISTS - Display all the available playlists.",
        "    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.",
        "    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.",
        "    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.",
        "    ALLOW_VIDEO <video_id> - Removes a flag from a video.",
        "    HELP - Displays help.",
        "    EXIT - Terminates the program execution.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(title: &str, id: &str) -> Video {
        Video::new(title, id)
    }

    #[test]
    fn test_play_reports_stop_first() {
        let result = Ok(Played {
            stopped: Some(video("Funny Dogs", "a")),
            playing: video("Amazing Cats", "b"),
        });
        assert_eq!(
            play(&result),
            ["Stopping video: Funny Dogs", "Playing video: Amazing Cats"]
        );
    }

    #[test]
    fn test_failure_prefixes() {
        assert_eq!(
            play(&Err(SessionError::VideoNotFound)),
            ["Cannot play video: Video does not exist"]
        );
        assert_eq!(
            play(&Err(SessionError::NoVideosAvailable)),
            ["No videos available"]
        );
        assert_eq!(
            pause(&Err(SessionError::AlreadyPaused {
                title: "Funny Dogs".to_string()
            })),
            ["Video already paused: Funny Dogs"]
        );
        assert_eq!(
            add_to_playlist(
                "my_COOL_playlist",
                &Err(SessionError::VideoFlagged {
                    reason: "dont_like_cats".to_string()
                })
            ),
            ["Cannot add video to my_COOL_playlist: Video is currently flagged (reason: dont_like_cats)"]
        );
        assert_eq!(
            show_playing(&Err(SessionError::NothingPlaying)),
            ["No video is currently playing"]
        );
    }

    #[test]
    fn test_all_playlists_empty() {
        assert_eq!(all_playlists(&[]), ["No playlists exist yet"]);
        assert_eq!(
            all_playlists(&["a".to_string(), "B".to_string()]),
            ["Showing all playlists:", "a", "B"]
        );
    }

    #[test]
    fn test_show_playing_paused_suffix() {
        let now = NowPlaying {
            listing: VideoListing {
                video: video("Amazing Cats", "amazing_cats_video_id").with_tags(["#cat", "#animal"]),
                flag_reason: None,
            },
            paused: true,
        };
        assert_eq!(
            show_playing(&Ok(now)),
            ["Currently playing: Amazing Cats (amazing_cats_video_id) [#cat #animal] - PAUSED"]
        );
    }
}
