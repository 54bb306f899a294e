use super::*;

fn record_json(id: &str, created_at: &str) -> String {
    format!(
        r#"{{"id":"{id}","url":"https://cdn.example/{id}.jpg","uploader":"a@x.com","uid":"u1","name":"beach.jpg","created_at":{created_at}}}"#
    )
}

#[test]
fn photo_record_deserializes_integer_timestamp() {
    let record: PhotoRecord = serde_json::from_str(&record_json("p1", "1724800000000")).expect("record");
    assert_eq!(record.created_at, 1_724_800_000_000);
    assert_eq!(record.uploader.as_deref(), Some("a@x.com"));
}

#[test]
fn photo_record_deserializes_float_timestamp() {
    let record: PhotoRecord = serde_json::from_str(&record_json("p1", "1724800000000.0")).expect("record");
    assert_eq!(record.created_at, 1_724_800_000_000);
}

#[test]
fn photo_record_missing_timestamp_defaults_to_zero() {
    let json = r#"{"id":"p1","url":"u","uploader":null,"uid":null,"name":"f.jpg"}"#;
    let record: PhotoRecord = serde_json::from_str(json).expect("record");
    assert_eq!(record.created_at, 0);
    assert!(record.uploader.is_none());
    assert!(record.uid.is_none());
}

#[test]
fn feed_event_auth_present_identity() {
    let json = r#"{"event":"auth","identity":{"uid":"u1","email":"a@x.com"}}"#;
    let event: FeedEvent = serde_json::from_str(json).expect("event");
    assert_eq!(
        event,
        FeedEvent::Auth {
            identity: Some(Identity { uid: "u1".to_owned(), email: "a@x.com".to_owned() })
        }
    );
}

#[test]
fn feed_event_auth_absent_identity() {
    let json = r#"{"event":"auth","identity":null}"#;
    let event: FeedEvent = serde_json::from_str(json).expect("event");
    assert_eq!(event, FeedEvent::Auth { identity: None });
}

#[test]
fn feed_event_snapshot_preserves_record_order() {
    let json = format!(
        r#"{{"event":"snapshot","records":[{},{}]}}"#,
        record_json("newest", "2000"),
        record_json("older", "1000")
    );
    let event: FeedEvent = serde_json::from_str(&json).expect("event");
    let FeedEvent::Snapshot { records } = event else {
        panic!("expected snapshot event");
    };
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "newest");
    assert_eq!(records[1].id, "older");
}

#[test]
fn feed_event_snapshot_missing_records_is_empty() {
    let json = r#"{"event":"snapshot"}"#;
    let event: FeedEvent = serde_json::from_str(json).expect("event");
    assert_eq!(event, FeedEvent::Snapshot { records: Vec::new() });
}

#[test]
fn new_photo_record_serializes_nulls_for_anonymous() {
    let record = NewPhotoRecord {
        url: "https://cdn.example/x.jpg".to_owned(),
        uploader: None,
        uid: None,
        name: "x.jpg".to_owned(),
    };
    let value = serde_json::to_value(&record).expect("json");
    assert!(value["uploader"].is_null());
    assert!(value["uid"].is_null());
    assert_eq!(value["name"], "x.jpg");
}
