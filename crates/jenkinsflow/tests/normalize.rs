use chrono::Utc;

use jenkinsflow::jenkins::RemoteJob;
use jenkinsflow::jobs::{color_to_status, normalize, JobStatus};

fn remote(name: Option<&str>, color: Option<&str>) -> RemoteJob {
    RemoteJob {
        name: name.map(str::to_string),
        color: color.map(str::to_string),
    }
}

#[test]
fn recognized_colors_map_to_canonical_statuses() {
    assert_eq!(color_to_status(Some("blue")), JobStatus::Success);
    assert_eq!(color_to_status(Some("red")), JobStatus::Failure);
    assert_eq!(color_to_status(Some("notbuilt")), JobStatus::NotBuilt);
}

#[test]
fn anime_suffix_means_building() {
    assert_eq!(color_to_status(Some("blue_anime")), JobStatus::Building);
    assert_eq!(color_to_status(Some("red_anime")), JobStatus::Building);
    assert_eq!(color_to_status(Some("notbuilt_anime")), JobStatus::Building);
    assert_eq!(color_to_status(Some("grey_anime")), JobStatus::Building);
    // bare suffix still matches
    assert_eq!(color_to_status(Some("_anime")), JobStatus::Building);
}

#[test]
fn suffix_check_is_case_sensitive() {
    assert_eq!(
        color_to_status(Some("blue_ANIME")),
        JobStatus::Other("blue_ANIME".to_string())
    );
}

#[test]
fn unrecognized_tokens_pass_through_verbatim() {
    for token in ["disabled", "aborted", "yellow", "anime", ""] {
        assert_eq!(
            color_to_status(Some(token)),
            JobStatus::Other(token.to_string()),
            "token {token:?} should pass through"
        );
    }
}

#[test]
fn missing_color_becomes_unknown_sentinel() {
    assert_eq!(color_to_status(None), JobStatus::Unknown);
}

#[test]
fn status_tokens_round_trip_through_strings() {
    for status in [
        JobStatus::Success,
        JobStatus::Failure,
        JobStatus::NotBuilt,
        JobStatus::Building,
        JobStatus::Unknown,
        JobStatus::Other("disabled".to_string()),
    ] {
        assert_eq!(JobStatus::from_str(status.as_str()), status);
    }
}

#[test]
fn empty_input_yields_empty_batch() {
    let batch = normalize(&[], Utc::now());
    assert!(batch.jobs.is_empty());
    assert_eq!(batch.skipped, 0);
}

#[test]
fn every_named_job_produces_exactly_one_record() {
    let now = Utc::now();
    let raw = vec![
        remote(Some("build-A"), Some("blue")),
        remote(Some("build-B"), Some("red")),
        remote(Some("build-C"), None),
    ];

    let batch = normalize(&raw, now);

    assert_eq!(batch.skipped, 0);
    assert_eq!(batch.jobs.len(), 3);
    assert_eq!(batch.jobs[0].name, "build-A");
    assert_eq!(batch.jobs[0].status, JobStatus::Success);
    assert_eq!(batch.jobs[1].status, JobStatus::Failure);
    assert_eq!(batch.jobs[2].status, JobStatus::Unknown);
    assert!(batch.jobs.iter().all(|j| j.last_updated == now));
}

#[test]
fn nameless_entries_are_skipped_and_counted() {
    let raw = vec![
        remote(None, Some("blue")),
        remote(Some(""), Some("red")),
        remote(Some("build-A"), Some("red")),
    ];

    let batch = normalize(&raw, Utc::now());

    assert_eq!(batch.skipped, 2);
    assert_eq!(batch.jobs.len(), 1);
    assert_eq!(batch.jobs[0].name, "build-A");
}

#[test]
fn duplicate_names_are_kept_in_input_order() {
    let raw = vec![
        remote(Some("build-A"), Some("blue")),
        remote(Some("build-A"), Some("red")),
    ];

    let batch = normalize(&raw, Utc::now());

    assert_eq!(batch.jobs.len(), 2);
    assert_eq!(batch.jobs[0].status, JobStatus::Success);
    assert_eq!(batch.jobs[1].status, JobStatus::Failure);
}
