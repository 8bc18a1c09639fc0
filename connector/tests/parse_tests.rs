/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the response contract and wire-format normalization

use connector::jobs::*;
use connector::{ApiError, parse_body};

#[test]
fn test_parse_body_success() {
    let body = br#"{"data": [], "total_count": 0}"#;
    let res: JobsListResponse = parse_body(true, body).unwrap();
    assert!(res.data.is_empty());
    assert_eq!(res.total_count, 0);
}

#[test]
fn test_parse_body_server_error() {
    let body = br#"{"errorMessage": "No Data found"}"#;
    let err = parse_body::<JobsListResponse>(false, body).unwrap_err();
    assert_eq!(err, ApiError::Server("No Data found".to_string()));
}

#[test]
fn test_parse_body_error_shape_under_success_status() {
    // The server reports empty results as {"ErrorMessage": ...} with a 2xx.
    let body = br#"{"ErrorMessage": "No Data found"}"#;
    let err = parse_body::<JobsListResponse>(true, body).unwrap_err();
    assert_eq!(err, ApiError::Server("No Data found".to_string()));
}

#[test]
fn test_parse_body_session_expired_sentinel() {
    let body = br#"{"errorMessage": "NAVIGATE TO LOGIN"}"#;
    let err = parse_body::<JobsListResponse>(false, body).unwrap_err();
    assert_eq!(err, ApiError::SessionExpired);
}

#[test]
fn test_parse_body_unreadable_body_falls_back() {
    let err = parse_body::<JobsListResponse>(false, b"<html>502</html>").unwrap_err();
    assert_eq!(err, ApiError::Server("Failed to fetch data".to_string()));

    let err = parse_body::<JobsListResponse>(false, br#"{"errorMessage": null}"#).unwrap_err();
    assert_eq!(err, ApiError::Server("Failed to fetch data".to_string()));
}

#[test]
fn test_job_summary_accepts_lowercase_jobid() {
    // get-similar-jobs spells the identifier "jobid".
    let body = br#"{
        "jobid": "xyz123",
        "roleName": "Data Scientist",
        "companyLogoUrl": "https://logo",
        "stars": 4,
        "location": "Delhi",
        "employmentType": "Full Time",
        "salary": 20,
        "jobDescription": "desc"
    }"#;
    let job: JobSummary = serde_json::from_slice(body).unwrap();
    assert_eq!(job.job_id, "xyz123");
    assert_eq!(job.role_name, "Data Scientist");
    assert_eq!(job.employment_type, "Full Time");
}

#[test]
fn test_job_detail_life_at_company_casing_variants() {
    let camel = br#"{
        "jobId": "abc123",
        "roleName": "Devops Engineer",
        "skills": ["HTML5", "CSS5"],
        "companyPageUrl": "https://company",
        "lifeAtCompanyDescription": "great place",
        "lifeAtCompanyImageUrl": "https://image"
    }"#;
    let pascal = br#"{
        "jobId": "abc123",
        "roleName": "Devops Engineer",
        "skills": ["HTML5", "CSS5"],
        "companyPageUrl": "https://company",
        "LifeAtCompanyDescription": "great place",
        "LifeAtCompanyImageUrl": "https://image"
    }"#;

    let a: JobDetail = serde_json::from_slice(camel).unwrap();
    let b: JobDetail = serde_json::from_slice(pascal).unwrap();

    assert_eq!(a.life_at_company_description, "great place");
    assert_eq!(a.life_at_company_description, b.life_at_company_description);
    assert_eq!(a.life_at_company_image_url, b.life_at_company_image_url);
    assert_eq!(a.skills, vec!["HTML5", "CSS5"]);
}

#[test]
fn test_job_detail_malformed_life_at_company() {
    // Non-string values normalize to empty strings under either casing.
    let body = br#"{
        "jobId": "abc123",
        "roleName": "Devops Engineer",
        "LifeAtCompanyDescription": null,
        "lifeAtCompanyImageUrl": 42
    }"#;
    let detail: JobDetail = serde_json::from_slice(body).unwrap();
    assert_eq!(detail.life_at_company_description, "");
    assert_eq!(detail.life_at_company_image_url, "");
    assert!(detail.skills.is_empty());
    assert_eq!(detail.company_page_url, "");
}

#[test]
fn test_jobs_list_request_omits_absent_filters() {
    let req = JobsListRequest {
        token: "abc".to_string(),
        minimum_salary: None,
        employment_type: None,
        search_role_name: None,
        page_number: 1,
        page_size: PAGE_SIZE,
    };

    let body = serde_json::to_value(&req).unwrap();
    assert!(body.get("minimumSalary").is_none());
    assert!(body.get("employmentType").is_none());
    assert!(body.get("searchRoleName").is_none());
    assert_eq!(body["page_number"], 1);
    assert_eq!(body["page_size"], 10);
}

#[test]
fn test_jobs_list_request_carries_selected_filters() {
    let req = JobsListRequest {
        token: "abc".to_string(),
        minimum_salary: Some(30),
        employment_type: Some(vec!["Full Time".to_string(), "Internship".to_string()]),
        search_role_name: Some("engineer".to_string()),
        page_number: 2,
        page_size: PAGE_SIZE,
    };

    let body = serde_json::to_value(&req).unwrap();
    assert_eq!(body["minimumSalary"], 30);
    assert_eq!(body["employmentType"][0], "Full Time");
    assert_eq!(body["searchRoleName"], "engineer");
}

#[test]
fn test_validate_user_response_shapes() {
    use connector::auth::ValidateUserResponse;

    let ok: ValidateUserResponse =
        serde_json::from_slice(br#"{"validuser": true, "token": "abc"}"#).unwrap();
    assert!(ok.validuser);
    assert_eq!(ok.token.as_deref(), Some("abc"));

    // Bad credentials: no token, no message.
    let bad: ValidateUserResponse = serde_json::from_slice(br#"{"validuser": false}"#).unwrap();
    assert!(!bad.validuser);
    assert!(bad.token.is_none());
    assert!(bad.error_message.is_none());
}

#[test]
fn test_total_pages() {
    assert_eq!(total_pages(95, 10), 10);
    assert_eq!(total_pages(100, 10), 10);
    assert_eq!(total_pages(101, 10), 11);
    assert_eq!(total_pages(1, 10), 1);
    assert_eq!(total_pages(0, 10), 0);
    assert_eq!(total_pages(10, 0), 0);
}
