use chrono::{TimeZone, Utc};
use wex_model::*;

#[test]
fn job_round_trip() {
    let job = Job::new(JobKind::CreateMessageObject {
        message: MessageObject {
            well_uid: "W-1".into(),
            wellbore_uid: "WB-1".into(),
            uid: "MSG-1".into(),
            name: "Drilling resumed".into(),
            text: "Resumed drilling at 09:30 after BOP test".into(),
        },
    });

    let serialized = serde_json::to_string_pretty(&job).expect("serialize job");
    let restored: Job = serde_json::from_str(&serialized).expect("deserialize job");
    assert_eq!(restored.id, job.id);
    assert_eq!(restored.kind, job.kind);
    assert_eq!(restored.kind.job_type(), JobType::CreateMessageObject);
}

#[test]
fn refresh_action_wire_tags_are_stable() {
    // The reconciler on the client side decodes these tags; they are a
    // contract, not an implementation detail.
    let action = RefreshAction::Wellbore {
        server: "https://store.example.com".into(),
        well_uid: "W-1".into(),
        wellbore_uid: "WB-1".into(),
        refresh_kind: RefreshKind::Update,
    };

    let value = serde_json::to_value(&action).expect("serialize refresh action");
    assert_eq!(value["scope"], "wellbore");
    assert_eq!(value["refresh_kind"], "update");
    assert_eq!(value["well_uid"], "W-1");
    assert_eq!(value["wellbore_uid"], "WB-1");
}

#[test]
fn log_index_round_trips_both_kinds() {
    let time = LogIndex::Time(Utc.with_ymd_and_hms(2023, 4, 12, 6, 30, 0).unwrap());
    let depth = LogIndex::Depth(1234.5);

    let time_json = serde_json::to_value(time).expect("serialize time index");
    assert_eq!(time_json["kind"], "time");
    let restored: LogIndex = serde_json::from_value(time_json).expect("deserialize time index");
    assert_eq!(restored, time);

    let depth_json = serde_json::to_value(depth).expect("serialize depth index");
    assert_eq!(depth_json["kind"], "depth");
    let restored: LogIndex = serde_json::from_value(depth_json).expect("deserialize depth index");
    assert_eq!(restored, depth);
}

#[test]
fn job_type_parses_both_spellings() {
    assert_eq!(
        "create_message_object".parse::<JobType>().unwrap(),
        JobType::CreateMessageObject
    );
    assert_eq!(
        "TrimLogObject".parse::<JobType>().unwrap(),
        JobType::TrimLogObject
    );
    assert!("delete_everything".parse::<JobType>().is_err());
}
