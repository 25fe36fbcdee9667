//! Playlist Integration Tests
//!
//! Playlist operations through the session, including flag interaction and
//! case-insensitive names.

use std::sync::Arc;

use video_player::core::{SessionController, SessionError};
use video_player::{Video, VideoCatalog};

fn session() -> SessionController {
    let catalog = VideoCatalog::new(vec![
        Video::new("Funny Dogs", "funny_dogs_video_id").with_tags(["#dog", "#animal"]),
        Video::new("Amazing Cats", "amazing_cats_video_id").with_tags(["#cat", "#animal"]),
        Video::new("Life at Google", "life_at_google_video_id").with_tags(["#google", "#career"]),
    ])
    .unwrap();
    SessionController::new(Arc::new(catalog))
}

fn playlist_len(s: &SessionController, name: &str) -> usize {
    s.show_playlist(name).unwrap().videos.len()
}

#[test]
fn test_create_duplicate_name_any_case() {
    let mut s = session();

    assert_eq!(s.create_playlist("my_PLAYlist").unwrap(), "my_PLAYlist");
    assert_eq!(
        s.create_playlist("MY_playlist"),
        Err(SessionError::DuplicateName)
    );
    assert_eq!(s.list_playlists(), ["my_PLAYlist"]);
}

#[test]
fn test_add_twice_is_duplicate_and_count_unchanged() {
    let mut s = session();
    s.create_playlist("my_playlist").unwrap();

    s.add_to_playlist("my_playlist", "amazing_cats_video_id").unwrap();
    assert_eq!(playlist_len(&s, "my_playlist"), 1);

    assert_eq!(
        s.add_to_playlist("MY_PLAYLIST", "amazing_cats_video_id"),
        Err(SessionError::DuplicateVideo)
    );
    assert_eq!(playlist_len(&s, "my_playlist"), 1);
}

#[test]
fn test_add_failures_in_check_order() {
    let mut s = session();

    // Missing playlist wins over missing video
    assert_eq!(
        s.add_to_playlist("nope", "also_nope"),
        Err(SessionError::PlaylistNotFound)
    );

    s.create_playlist("p").unwrap();
    assert_eq!(
        s.add_to_playlist("p", "also_nope"),
        Err(SessionError::VideoNotFound)
    );

    s.flag("funny_dogs_video_id", Some("dont_like_dogs")).unwrap();
    assert_eq!(
        s.add_to_playlist("p", "funny_dogs_video_id"),
        Err(SessionError::VideoFlagged {
            reason: "dont_like_dogs".to_string()
        })
    );
    assert_eq!(playlist_len(&s, "p"), 0);
}

#[test]
fn test_remove_from_playlist() {
    let mut s = session();
    s.create_playlist("p").unwrap();
    s.add_to_playlist("p", "funny_dogs_video_id").unwrap();
    s.add_to_playlist("p", "amazing_cats_video_id").unwrap();

    assert_eq!(
        s.remove_from_playlist("q", "funny_dogs_video_id"),
        Err(SessionError::PlaylistNotFound)
    );
    assert_eq!(
        s.remove_from_playlist("p", "missing"),
        Err(SessionError::VideoNotFound)
    );
    assert_eq!(
        s.remove_from_playlist("p", "life_at_google_video_id"),
        Err(SessionError::NotPresent)
    );

    // Flagged videos can still be removed
    s.flag("funny_dogs_video_id", None).unwrap();
    assert_eq!(
        s.remove_from_playlist("P", "funny_dogs_video_id").unwrap().title,
        "Funny Dogs"
    );

    let view = s.show_playlist("p").unwrap();
    assert_eq!(view.videos.len(), 1);
    assert_eq!(view.videos[0].video.title, "Amazing Cats");
}

#[test]
fn test_show_playlist_keeps_insertion_order_and_flags() {
    let mut s = session();
    s.create_playlist("Mixed").unwrap();
    s.add_to_playlist("mixed", "life_at_google_video_id").unwrap();
    s.add_to_playlist("mixed", "funny_dogs_video_id").unwrap();
    s.flag("life_at_google_video_id", Some("boring")).unwrap();

    let view = s.show_playlist("MIXED").unwrap();
    assert_eq!(view.name, "Mixed");
    let lines: Vec<_> = view.videos.iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        [
            "Life at Google (life_at_google_video_id) [#google #career] - FLAGGED (reason: boring)",
            "Funny Dogs (funny_dogs_video_id) [#dog #animal]",
        ]
    );
}

#[test]
fn test_clear_playlist_is_idempotent() {
    let mut s = session();
    s.create_playlist("p").unwrap();

    assert_eq!(s.clear_playlist("p"), Ok(()));

    s.add_to_playlist("p", "funny_dogs_video_id").unwrap();
    assert_eq!(s.clear_playlist("P"), Ok(()));
    assert_eq!(playlist_len(&s, "p"), 0);
    assert_eq!(s.clear_playlist("p"), Ok(()));

    assert_eq!(s.clear_playlist("q"), Err(SessionError::PlaylistNotFound));
}

#[test]
fn test_delete_playlist_case_insensitive() {
    let mut s = session();
    s.create_playlist("foo").unwrap();

    assert_eq!(s.delete_playlist("bar"), Err(SessionError::PlaylistNotFound));
    assert_eq!(s.delete_playlist("Foo").unwrap(), "foo");
    assert_eq!(s.delete_playlist("foo"), Err(SessionError::PlaylistNotFound));
    assert!(s.list_playlists().is_empty());

    // Name is free again
    s.create_playlist("FOO").unwrap();
    assert_eq!(s.show_playlist("foo").unwrap().name, "FOO");
}

#[test]
fn test_list_playlists_sorted() {
    let mut s = session();
    assert!(s.list_playlists().is_empty());

    for name in ["zebra", "Apple", "mango"] {
        s.create_playlist(name).unwrap();
    }
    assert_eq!(s.list_playlists(), ["Apple", "mango", "zebra"]);
    // Directory itself keeps creation order
    assert_eq!(s.playlists().list_names(), ["zebra", "Apple", "mango"]);
}

#[test]
fn test_playlist_operations_leave_playback_alone() {
    let mut s = session();
    s.play("amazing_cats_video_id").unwrap();
    s.create_playlist("p").unwrap();
    s.add_to_playlist("p", "amazing_cats_video_id").unwrap();
    s.delete_playlist("p").unwrap();

    assert_eq!(
        s.show_playing().unwrap().listing.video.title,
        "Amazing Cats"
    );
}
