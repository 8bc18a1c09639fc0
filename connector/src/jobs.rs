/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};

/// Fixed page size of the listing view.
pub const PAGE_SIZE: u32 = 10;

#[derive(Serialize, Deserialize, Debug)]
pub struct JobsListRequest {
    pub token: String,
    #[serde(rename = "minimumSalary", skip_serializing_if = "Option::is_none")]
    pub minimum_salary: Option<u32>,
    #[serde(rename = "employmentType", skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<Vec<String>>,
    #[serde(rename = "searchRoleName", skip_serializing_if = "Option::is_none")]
    pub search_role_name: Option<String>,
    pub page_number: u32,
    pub page_size: u32,
}

#[derive(Serialize, Deserialize, Debug)]
struct JobIdRequest {
    token: String,
    #[serde(rename = "jobId")]
    job_id: String,
}

/// One job as it appears in the listing and similar-jobs views. Wire names
/// are camelCase; similar-jobs entries may spell the identifier `jobid`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct JobSummary {
    #[serde(rename = "jobId", alias = "jobid")]
    pub job_id: String,
    #[serde(rename = "roleName")]
    pub role_name: String,
    #[serde(rename = "companyLogoUrl", default)]
    pub company_logo_url: String,
    #[serde(default)]
    pub stars: u32,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "employmentType", default)]
    pub employment_type: String,
    /// Lakh per annum.
    #[serde(default)]
    pub salary: u32,
    #[serde(rename = "jobDescription", default)]
    pub job_description: String,
}

/// Full job record from `get-job-details`. The life-at-company fields arrive
/// in either casing and are occasionally malformed; both variants normalize
/// here so nothing downstream has to care.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct JobDetail {
    #[serde(rename = "jobId", alias = "jobid")]
    pub job_id: String,
    #[serde(rename = "roleName")]
    pub role_name: String,
    #[serde(rename = "companyLogoUrl", default)]
    pub company_logo_url: String,
    #[serde(default)]
    pub stars: u32,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "employmentType", default)]
    pub employment_type: String,
    #[serde(default)]
    pub salary: u32,
    #[serde(rename = "jobDescription", default)]
    pub job_description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(rename = "companyPageUrl", default)]
    pub company_page_url: String,
    #[serde(
        rename = "lifeAtCompanyDescription",
        alias = "LifeAtCompanyDescription",
        default,
        deserialize_with = "lenient_string"
    )]
    pub life_at_company_description: String,
    #[serde(
        rename = "lifeAtCompanyImageUrl",
        alias = "LifeAtCompanyImageUrl",
        default,
        deserialize_with = "lenient_string"
    )]
    pub life_at_company_image_url: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct JobsListResponse {
    pub data: Vec<JobSummary>,
    pub total_count: u32,
}

#[derive(Serialize, Deserialize, Debug)]
struct JobDetailsResponse {
    data: JobDetail,
}

#[derive(Serialize, Deserialize, Debug)]
struct SimilarJobsResponse {
    #[serde(rename = "similarJobs")]
    similar_jobs: Vec<JobSummary>,
}

// A malformed value (null, number, ...) normalizes to an empty string
// instead of failing the whole payload.
fn lenient_string<'de, D>(de: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match serde_json::Value::deserialize(de)? {
        serde_json::Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

/// Number of pages the listing spans, `0` for an empty result.
pub fn total_pages(total_count: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }

    total_count.div_ceil(page_size)
}

/// `POST dashboard/get-jobs-list`. Absent filters are omitted from the
/// request body entirely, matching what the server expects.
pub async fn post_jobs_list(
    config: RequestConfig,
    minimum_salary: Option<u32>,
    employment_type: Option<Vec<String>>,
    search_role_name: Option<String>,
    page_number: u32,
) -> Result<JobsListResponse, ApiError> {
    let req = JobsListRequest {
        token: require_token(&config)?,
        minimum_salary,
        employment_type,
        search_role_name,
        page_number,
        page_size: PAGE_SIZE,
    };

    let (ok, bytes) = send(&config, "dashboard/get-jobs-list", &req).await?;

    parse_body(ok, &bytes)
}

/// `POST dashboard/get-job-details`.
pub async fn post_job_details(
    config: RequestConfig,
    job_id: String,
) -> Result<JobDetail, ApiError> {
    let req = JobIdRequest {
        token: require_token(&config)?,
        job_id,
    };

    let (ok, bytes) = send(&config, "dashboard/get-job-details", &req).await?;

    parse_body::<JobDetailsResponse>(ok, &bytes).map(|res| res.data)
}

/// `POST dashboard/get-similar-jobs`.
pub async fn post_similar_jobs(
    config: RequestConfig,
    job_id: String,
) -> Result<Vec<JobSummary>, ApiError> {
    let req = JobIdRequest {
        token: require_token(&config)?,
        job_id,
    };

    let (ok, bytes) = send(&config, "dashboard/get-similar-jobs", &req).await?;

    parse_body::<SimilarJobsResponse>(ok, &bytes).map(|res| res.similar_jobs)
}
