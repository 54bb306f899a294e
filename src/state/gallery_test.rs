use super::*;

fn record(id: &str, created_at: i64) -> PhotoRecord {
    PhotoRecord {
        id: id.to_owned(),
        url: format!("https://cdn.example/{id}.jpg"),
        uploader: None,
        uid: None,
        name: format!("{id}.jpg"),
        created_at,
    }
}

#[test]
fn default_gallery_is_empty() {
    assert!(GalleryState::default().photos.is_empty());
}

#[test]
fn snapshot_preserves_count_and_delivered_order() {
    let mut state = GalleryState::default();
    state.apply_snapshot(vec![record("c", 3000), record("b", 2000), record("a", 1000)]);
    assert_eq!(state.photos.len(), 3);
    let ids: Vec<&str> = state.photos.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["c", "b", "a"]);
}

#[test]
fn snapshot_replaces_prior_state_wholesale() {
    let mut state = GalleryState::default();
    state.apply_snapshot(vec![record("a", 1000), record("b", 2000)]);
    state.apply_snapshot(vec![record("z", 9000)]);
    assert_eq!(state.photos.len(), 1);
    assert_eq!(state.photos[0].id, "z");
}

#[test]
fn empty_snapshot_clears_the_gallery() {
    let mut state = GalleryState::default();
    state.apply_snapshot(vec![record("a", 1000)]);
    state.apply_snapshot(Vec::new());
    assert!(state.photos.is_empty());
}
