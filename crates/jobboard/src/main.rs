//! # Job Board CLI
//!
//! Drives the client core from the command line: loads a resource through its slice
//! and prints what a page would show.
//!
//! ```bash
//! RUST_LOG=info cargo run -p jobboard -- --offline companies --industry software --sort jobs
//! RUST_LOG=debug cargo run -p jobboard -- students --search asha
//! ```
//!
//! `--offline` answers every request from built-in sample data instead of the API.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jobboard::config::AppConfig;
use jobboard::format::{format_date, salary_display, time_ago};
use jobboard::http::{Method, SharedTransport, StubTransport};
use jobboard::lifecycle::{open_notifications, JobBoardSystem};
use jobboard::listing::{CompanyListView, FilterCriteria, SortKey};
use serde_json::json;
use slice_framework::tracing::setup_tracing;
use slice_framework::SliceHandle;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "jobboard")]
#[command(about = "Job board client core", long_about = None)]
struct Cli {
    /// Serve requests from built-in sample data
    #[arg(long)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List companies with filters and sorting
    Companies {
        /// Free-text search
        #[arg(long, default_value = "")]
        keyword: String,

        /// Industry to include (repeatable)
        #[arg(long)]
        industry: Vec<String>,

        /// Size bucket to include, e.g. 51-200 (repeatable)
        #[arg(long)]
        size: Vec<String>,

        /// Location to include (repeatable)
        #[arg(long)]
        location: Vec<String>,

        /// featured, jobs or name
        #[arg(long, default_value = "featured")]
        sort: String,

        #[arg(long)]
        page: Option<u64>,

        #[arg(long)]
        limit: Option<u64>,
    },

    /// List students
    Students {
        #[arg(long)]
        search: Option<String>,

        #[arg(long, default_value = "1")]
        page: u64,

        #[arg(long, default_value = "20")]
        limit: u64,
    },

    /// Show the admin dashboard
    Dashboard,

    /// Show the stored notification list
    Notifications {
        /// Mark every notification read
        #[arg(long)]
        mark_all_read: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();
    let config = AppConfig::from_env().context("Invalid configuration")?;

    let system = if cli.offline {
        info!("Running offline with sample data");
        let transport: SharedTransport = Arc::new(sample_transport());
        JobBoardSystem::new(&config, transport)
    } else {
        JobBoardSystem::connect(&config).context("Failed to build HTTP client")?
    };
    let outcome = run(&system, &config, cli.command).await;
    if let Err(e) = &outcome {
        error!(error = %e, "Command failed");
    }

    system.shutdown().await.map_err(anyhow::Error::msg)?;
    outcome
}

async fn run(system: &JobBoardSystem, config: &AppConfig, command: Commands) -> Result<()> {
    match command {
        Commands::Companies {
            keyword,
            industry,
            size,
            location,
            sort,
            page,
            limit,
        } => {
            system.companies.list(page, limit).await?;
            let criteria = FilterCriteria {
                keyword,
                industries: industry,
                sizes: size,
                locations: location,
            };
            let sort: SortKey = sort.parse().unwrap_or_default();
            let mut view = CompanyListView::new();
            let visible = system.companies.view(&mut view, &criteria, sort);

            println!("{} companies (sorted by {sort})", visible.len());
            for company in visible.iter() {
                let hiring = if company.hiring { " [hiring]" } else { "" };
                println!(
                    "  {}{hiring} | {} | {} | {} | {} open jobs",
                    company.name, company.industry, company.size, company.location, company.job_count
                );
            }
        }
        Commands::Students {
            search,
            page,
            limit,
        } => {
            let students = system.students.list(Some(page), Some(limit), search).await?;
            let pagination = system.students.pagination();
            println!(
                "{} students (page {} of {})",
                students.len(),
                pagination.page.unwrap_or(page),
                pagination.page_count().unwrap_or(1)
            );
            for student in &students {
                println!("  {} <{}> {}", student.name, student.email, student.skills.join(", "));
            }
        }
        Commands::Dashboard => {
            let dashboard = system.admin.load_dashboard().await?;
            let stats = &dashboard.stats;
            println!(
                "users {} | students {} | companies {} | jobs {} ({} active) | applications {}",
                stats.total_users,
                stats.total_students,
                stats.total_companies,
                stats.total_jobs,
                stats.active_jobs,
                stats.total_applications
            );
            let now = chrono::Utc::now();
            for user in &dashboard.recent_users {
                let joined = user.created_at.as_deref().map(|d| time_ago(d, now)).unwrap_or_default();
                println!("  user {} ({}) {joined}", user.name, user.role);
            }
            for job in &dashboard.recent_jobs {
                let posted = job.posted_at.as_deref().map(format_date).unwrap_or_default();
                println!(
                    "  job {} at {} [{}] {} {posted}",
                    job.title,
                    job.company,
                    job.status,
                    salary_display(job.salary.as_deref())
                );
            }
            if let Some(message) = system.admin.error_message() {
                println!("  last error: {message}");
            }
        }
        Commands::Notifications { mark_all_read } => {
            let mut center = open_notifications(config);
            if mark_all_read {
                let changed = center.mark_all_read()?;
                info!(changed, "Marked notifications read");
            }
            println!("{} unread", center.unread_count());
            for n in center.items() {
                let marker = if n.read { " " } else { "*" };
                println!("  {marker} {} - {} ({})", n.title, n.subtitle, format_date(&n.date));
            }
        }
    }
    Ok(())
}

/// Sample responses for `--offline`.
fn sample_transport() -> StubTransport {
    let stub = StubTransport::new();
    stub.respond(
        Method::Get,
        "/companies",
        json!({
            "data": [
                {"_id": "c1", "name": "Acme Cloud", "industry": "Software", "size": 120,
                 "location": {"city": "Bengaluru", "country": "India"}, "jobCount": 7,
                 "tags": ["cloud", "devops"]},
                {"_id": "c2", "companyName": "Globex Energy", "sector": "Energy", "employees": 2400,
                 "city": "Houston", "country": "USA", "jobs": [{}, {}]},
                {"_id": "c3", "name": "Initech", "industry": "Software", "size": "11-50",
                 "location": "Austin, USA", "isHiring": false},
                {"name": "Stealth Startup"}
            ],
            "pagination": {"page": 1, "limit": 20, "total": 4}
        }),
    );
    stub.respond(
        Method::Get,
        "/students",
        json!({
            "data": [
                {"_id": "s1", "name": "Asha Rao", "email": "asha@example.com", "skills": ["rust", "sql"]},
                {"_id": "s2", "name": "Ben Ortiz", "email": "ben@example.com", "skills": ["react"]}
            ],
            "pagination": {"page": 1, "limit": 20, "total": 2}
        }),
    );
    stub.respond(
        Method::Get,
        "/admin/dashboard",
        json!({
            "stats": {"totalUsers": 42, "totalStudents": 30, "totalCompanies": 8,
                      "totalJobs": 15, "activeJobs": 11, "totalApplications": 97},
            "recentUsers": [{"_id": "u1", "name": "Asha Rao", "role": "student",
                             "createdAt": "2024-05-01T09:30:00Z"}],
            "recentJobs": [{"_id": "j1", "title": "Backend Engineer", "company": "Acme Cloud",
                            "status": "open", "postedAt": "2024-05-03", "salary": "$90k - $120k"}]
        }),
    );
    stub
}
