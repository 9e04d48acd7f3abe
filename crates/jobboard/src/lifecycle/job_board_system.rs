use crate::clients::{AdminClient, CompanyClient, CompanyTypesClient, StudentClient, SubscriptionClient};
use crate::config::AppConfig;
use crate::http::{ApiError, HttpTransport, SharedTransport};
use crate::notifications::{FileStore, NotificationCenter};
use crate::{admin_slice, company_slice, company_types_slice, student_slice, subscription_slice};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// All slices of the job board, started and wired together.
pub struct JobBoardSystem {
    pub students: StudentClient,
    pub admin: AdminClient,
    pub company_types: CompanyTypesClient,
    pub subscription: SubscriptionClient,
    pub companies: CompanyClient,
    handles: Vec<JoinHandle<()>>,
}

impl JobBoardSystem {
    /// Starts every slice on the current runtime, sharing `transport`.
    pub fn new(config: &AppConfig, transport: SharedTransport) -> Self {
        let buffer = config.slice_buffer;
        let (student_actor, students) = student_slice::new(buffer);
        let (admin_actor, admin) = admin_slice::new(buffer);
        let (company_types_actor, company_types) = company_types_slice::new(buffer);
        let (subscription_actor, subscription) = subscription_slice::new(buffer);
        let (company_actor, companies) = company_slice::new(buffer);

        let handles = vec![
            tokio::spawn(student_actor.run(transport.clone())),
            tokio::spawn(admin_actor.run(transport.clone())),
            tokio::spawn(company_types_actor.run(transport.clone())),
            tokio::spawn(subscription_actor.run(transport.clone())),
            tokio::spawn(company_actor.run(transport)),
        ];
        info!(slices = handles.len(), api = %config.api_base_url, "Job board system started");

        Self {
            students,
            admin,
            company_types,
            subscription,
            companies,
            handles,
        }
    }

    /// Starts the system against the configured API.
    pub fn connect(config: &AppConfig) -> Result<Self, ApiError> {
        let transport = HttpTransport::new(
            config.api_base_url.clone(),
            config.request_timeout,
            config.auth_token.clone(),
        )?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    /// Drops every client and waits for the slices to stop.
    pub async fn shutdown(self) -> Result<(), String> {
        let JobBoardSystem {
            students,
            admin,
            company_types,
            subscription,
            companies,
            handles,
        } = self;
        drop(students);
        drop(admin);
        drop(company_types);
        drop(subscription);
        drop(companies);

        for handle in handles {
            handle.await.map_err(|e| format!("Slice task failed: {e}"))?;
        }
        info!("Job board system stopped");
        Ok(())
    }
}

/// Opens the notification list stored at the configured path.
pub fn open_notifications(config: &AppConfig) -> NotificationCenter {
    NotificationCenter::load(Arc::new(FileStore::new(config.storage_path.clone())))
}
