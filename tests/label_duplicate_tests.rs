use fieldlabel::label::*;
use std::cell::Cell;

struct FixedClock(i64);

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

struct SequentialIds {
    next: Cell<u32>,
}

impl SequentialIds {
    fn new() -> Self {
        Self { next: Cell::new(1) }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let id = self.next.get();
        self.next.set(id + 1);
        format!("label-{}", id)
    }
}

#[test]
fn test_duplicate_gets_new_identity_and_creation_time() {
    let ids = SequentialIds::new();
    let source = LabelRecord::new_with_value_using(
        &ids,
        1000,
        ValueType::Text,
        TextValue::new("hello"),
        None,
    )
    .unwrap()
    .with_timestamp(1500)
    .unwrap();

    let copy = source.duplicate_with(&ids, &FixedClock(9000)).unwrap();

    assert_eq!(source.label_id(), "label-1");
    assert_eq!(copy.label_id(), "label-2");
    assert_eq!(copy.creation_time_ms(), 9000);
    assert_eq!(copy.timestamp_ms(), 1500);
    assert_eq!(copy.value_type(), ValueType::Text);
    assert_eq!(copy.as_text().unwrap(), source.as_text().unwrap());
}

#[test]
fn test_duplicate_with_system_time() {
    let now = SystemClock.now_ms();
    let source = LabelRecord::new_with_value(
        now,
        ValueType::Snapshot,
        SnapshotValue::new(vec![SensorSnapshot {
            sensor_id: "temp".to_string(),
            value: 21.5,
            timestamp_ms: now,
            ..Default::default()
        }]),
        None,
    )
    .unwrap();

    let copy = source.duplicate().unwrap();

    assert_ne!(copy.label_id(), source.label_id());
    assert!(copy.creation_time_ms() >= source.creation_time_ms());
    assert_eq!(copy.value_type(), source.value_type());
    assert_eq!(copy.timestamp_ms(), source.timestamp_ms());
    assert_eq!(copy.as_snapshot().unwrap(), source.as_snapshot().unwrap());
}

#[test]
fn test_duplicate_picture_copies_reference_only() {
    let source = LabelRecord::new_with_value(
        1000,
        ValueType::Picture,
        PictureValue::new("img/1.jpg"),
        None,
    )
    .unwrap();

    let copy = source.duplicate().unwrap();

    assert_eq!(copy.as_picture().unwrap().file_path, "img/1.jpg");
    assert_ne!(copy.label_id(), source.label_id());
}

#[test]
fn test_duplicate_restamps_caption() {
    let source = LabelRecord::new_with_value(
        1000,
        ValueType::Text,
        TextValue::new("boiling point"),
        Some(Caption::new("check thermometer", 1200)),
    )
    .unwrap();

    let copy = source
        .duplicate_with(&SequentialIds::new(), &FixedClock(5000))
        .unwrap();

    let caption = copy.caption().unwrap();
    assert_eq!(caption.text, "check thermometer");
    assert_eq!(caption.last_edited_timestamp, 5000);
    assert_eq!(source.caption().unwrap().last_edited_timestamp, 1200);
}

#[test]
fn test_duplicate_is_independent() {
    let source = LabelRecord::new_with_value(
        1000,
        ValueType::Text,
        TextValue::new("original"),
        None,
    )
    .unwrap();

    let mut copy = source.duplicate().unwrap();
    copy.set_value(TextValue::new("changed")).unwrap();
    copy.set_caption(Some(Caption::new("new", 1)));

    assert_eq!(source.as_text().unwrap().text, "original");
    assert!(source.caption().is_none());
}
