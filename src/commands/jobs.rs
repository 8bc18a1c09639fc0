/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::base::{fail, guarded_request_config};
use crate::filters::{EmploymentType, FilterState};
use crate::pagination;
use clap::{Subcommand, arg};
use connector::jobs::{self, JobDetail, JobSummary, JobsListResponse, PAGE_SIZE};
use connector::{ApiError, RequestConfig, auth};
use std::io;
use std::io::Write;
use std::process::exit;
use std::str::FromStr;

#[derive(Subcommand, Debug)]
pub enum Commands {
    List {
        #[arg(short, long)]
        search: Option<String>,
        #[arg(short = 'm', long)]
        min_salary: Option<u32>,
        #[arg(short = 't', long = "type")]
        employment_types: Vec<String>,
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    Show {
        id: String,
    },
    Browse,
}

pub async fn handle(cmd: Commands) {
    match cmd {
        Commands::List {
            search,
            min_salary,
            employment_types,
            page,
        } => {
            let mut filters = FilterState::new();

            for employment_type in employment_types {
                match EmploymentType::from_str(&employment_type) {
                    Ok(employment_type) => filters.toggle_employment_type(employment_type),
                    Err(_) => {
                        eprintln!("Unknown employment type: {}", employment_type);
                        eprintln!("Valid types are: full-time, part-time, freelance, internship");
                        exit(1);
                    }
                }
            }

            if min_salary.is_some() {
                filters.set_salary_floor(min_salary);
            }

            if let Some(search) = search {
                filters.set_search(&search);
            }

            filters.set_page(page);

            let config = guarded_request_config();

            match fetch_page(&config, &filters).await {
                Ok(res) => render_listing(&res, filters.page()),
                Err(ApiError::SessionExpired) => fail(ApiError::SessionExpired),
                Err(err) => {
                    eprintln!("{}", err);
                    render_empty_state();
                    exit(1);
                }
            }
        }

        Commands::Show { id } => {
            let config = guarded_request_config();

            if let Err(err) = show_job(&config, &id).await {
                fail(err);
            }
        }

        Commands::Browse => browse().await,
    }
}

async fn fetch_page(
    config: &RequestConfig,
    filters: &FilterState,
) -> Result<JobsListResponse, ApiError> {
    jobs::post_jobs_list(
        config.clone(),
        filters.salary_floor(),
        filters.employment_type_param(),
        filters.search_param(),
        filters.page(),
    )
    .await
}

fn render_listing(res: &JobsListResponse, page: u32) {
    if res.data.is_empty() {
        render_empty_state();
        return;
    }

    for job in &res.data {
        print_summary(job);
    }

    println!();
    println!(
        "{}",
        pagination::render(page, jobs::total_pages(res.total_count, PAGE_SIZE))
    );
}

fn render_empty_state() {
    println!("No Jobs Found");
    println!("We could not find any jobs. Try other filters.");
}

fn print_summary(job: &JobSummary) {
    println!("{}: {}", job.job_id, job.role_name);
    println!(
        "  {} | {} | {} LPA | {} stars",
        job.location, job.employment_type, job.salary, job.stars
    );
    println!("  {}", job.job_description);
}

fn print_detail(details: &JobDetail) {
    println!("===== {} =====", details.role_name);
    println!("Job ID: {}", details.job_id);
    println!("Location: {}", details.location);
    println!("Employment Type: {}", details.employment_type);
    println!("Salary: {} LPA", details.salary);
    println!("Rating: {} stars", details.stars);

    if !details.company_page_url.is_empty() {
        println!("Company Page: {}", details.company_page_url);
    }

    println!();
    println!("Description");
    println!("{}", details.job_description);

    if !details.skills.is_empty() {
        println!();
        println!("Skills: {}", details.skills.join(", "));
    }

    if !details.life_at_company_description.is_empty()
        || !details.life_at_company_image_url.is_empty()
    {
        println!();
        println!("Life at Company");

        if !details.life_at_company_description.is_empty() {
            println!("{}", details.life_at_company_description);
        }

        if !details.life_at_company_image_url.is_empty() {
            println!("Image: {}", details.life_at_company_image_url);
        }
    }
}

/// The detail view: a failed details fetch is the caller's error, a failed
/// similar-jobs fetch leaves the section empty. Only the session-expired
/// sentinel still forces logout.
async fn show_job(config: &RequestConfig, id: &str) -> Result<(), ApiError> {
    let details = jobs::post_job_details(config.clone(), id.to_string()).await?;
    print_detail(&details);

    match jobs::post_similar_jobs(config.clone(), id.to_string()).await {
        Ok(similar) if !similar.is_empty() => {
            println!();
            println!("===== Similar Jobs =====");
            for job in similar {
                print_summary(&job);
            }
        }
        Ok(_) => {}
        Err(ApiError::SessionExpired) => fail(ApiError::SessionExpired),
        Err(_) => {}
    }

    Ok(())
}

async fn refetch(config: &RequestConfig, filters: &FilterState) -> u32 {
    println!("[{}]", filters.describe());

    match fetch_page(config, filters).await {
        Ok(res) => {
            render_listing(&res, filters.page());
            jobs::total_pages(res.total_count, PAGE_SIZE)
        }
        Err(ApiError::SessionExpired) => fail(ApiError::SessionExpired),
        Err(err) => {
            eprintln!("{}", err);
            render_empty_state();
            0
        }
    }
}

/// Interactive listing view. Every filter command resets to page 1 and
/// refetches; page moves refetch with filters untouched. One fetch cycle per
/// command, awaited before the next prompt, so a stale response can never
/// overwrite a newer one.
async fn browse() {
    let config = guarded_request_config();

    // Profile sidebar of the listing view; failures are ignored.
    if let Ok(profile) = auth::post_get_user_data(config.clone()).await {
        println!("{} ({})", profile.name, profile.position);
        println!();
    }

    let mut filters = FilterState::new();
    let mut total = refetch(&config, &filters).await;

    loop {
        print!("jobs> ");
        io::stdout().flush().unwrap();

        let mut line = String::new();
        if io::stdin().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match cmd {
            "quit" | "exit" | "q" => break,

            "search" => filters.set_search(rest),

            "salary" => {
                if rest.is_empty() {
                    filters.set_salary_floor(None);
                } else {
                    match rest.parse::<u32>() {
                        Ok(floor) => filters.set_salary_floor(Some(floor)),
                        Err(_) => {
                            eprintln!("Not a valid salary floor.");
                            continue;
                        }
                    }
                }
            }

            "type" => match EmploymentType::from_str(rest) {
                Ok(employment_type) => filters.toggle_employment_type(employment_type),
                Err(_) => {
                    eprintln!("Valid types are: full-time, part-time, freelance, internship");
                    continue;
                }
            },

            "next" => {
                if filters.page() >= total {
                    println!("Already on the last page.");
                    continue;
                }

                filters.set_page(filters.page() + 1);
            }

            "prev" => {
                if filters.page() <= 1 {
                    println!("Already on the first page.");
                    continue;
                }

                filters.set_page(filters.page() - 1);
            }

            "page" => match rest.parse::<u32>() {
                Ok(page) if page >= 1 && page <= total.max(1) => filters.set_page(page),
                _ => {
                    eprintln!("Page out of range.");
                    continue;
                }
            },

            "open" => {
                if rest.is_empty() {
                    eprintln!("Usage: open <job-id>");
                } else if let Err(err) = show_job(&config, rest).await {
                    eprintln!("{}", err);
                }

                continue;
            }

            "filters" => {
                println!("{}", filters.describe());
                continue;
            }

            _ => {
                print_browse_help();
                continue;
            }
        }

        total = refetch(&config, &filters).await;
    }
}

fn print_browse_help() {
    println!("Commands:");
    println!("  search <text>   free-text role search");
    println!("  salary <n>      minimum salary in LPA, no value clears the floor");
    println!("  type <t>        toggle full-time, part-time, freelance or internship");
    println!("  page <n>        jump to a page");
    println!("  next / prev     page through the results");
    println!("  open <job-id>   show job details and similar jobs");
    println!("  filters         show the active filters");
    println!("  quit            leave");
}
