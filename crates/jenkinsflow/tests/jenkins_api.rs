use jenkinsflow::jenkins::{Crumb, JenkinsClient, JobListResponse};

#[test]
fn job_list_parses_names_and_colors() {
    let body = r#"
    {
        "_class": "hudson.model.Hudson",
        "jobs": [
            {"_class": "hudson.model.FreeStyleProject", "name": "build-A", "color": "blue"},
            {"_class": "hudson.model.FreeStyleProject", "name": "build-B", "color": "red_anime"},
            {"_class": "com.cloudbees.hudson.plugins.folder.Folder", "name": "tools"}
        ]
    }
    "#;

    let parsed: JobListResponse = serde_json::from_str(body).unwrap();

    assert_eq!(parsed.jobs.len(), 3);
    assert_eq!(parsed.jobs[0].name.as_deref(), Some("build-A"));
    assert_eq!(parsed.jobs[0].color.as_deref(), Some("blue"));
    assert_eq!(parsed.jobs[1].color.as_deref(), Some("red_anime"));
    // folders report no color
    assert_eq!(parsed.jobs[2].name.as_deref(), Some("tools"));
    assert_eq!(parsed.jobs[2].color, None);
}

#[test]
fn job_list_tolerates_an_empty_or_missing_jobs_field() {
    let parsed: JobListResponse = serde_json::from_str(r#"{"jobs": []}"#).unwrap();
    assert!(parsed.jobs.is_empty());

    let parsed: JobListResponse =
        serde_json::from_str(r#"{"_class": "hudson.model.Hudson"}"#).unwrap();
    assert!(parsed.jobs.is_empty());
}

#[test]
fn crumb_payload_parses() {
    let body = r#"
    {
        "_class": "hudson.security.csrf.DefaultCrumbIssuer",
        "crumb": "abcdef0123456789",
        "crumbRequestField": "Jenkins-Crumb"
    }
    "#;

    let crumb: Crumb = serde_json::from_str(body).unwrap();
    assert_eq!(crumb.crumb, "abcdef0123456789");
    assert_eq!(crumb.crumb_request_field, "Jenkins-Crumb");
}

#[test]
fn client_normalizes_a_trailing_slash() {
    let client = JenkinsClient::new("http://localhost:8080/", None, None, 30).unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
}
