#![allow(dead_code)]

use employee_service::config::MongoConfig;
use employee_service::services::{EmployeeDb, EmployeeStore, InMemoryEmployeeStore};
use employee_service::startup::Application;
use std::sync::Arc;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub mongo: Option<(EmployeeDb, String)>,
}

impl TestApp {
    /// Spawn the service on a random port in front of an in-memory store.
    pub async fn spawn() -> Self {
        Self::spawn_with_store(Arc::new(InMemoryEmployeeStore::new()), None).await
    }

    /// Spawn the service against a throwaway MongoDB database.
    pub async fn spawn_with_mongo() -> Self {
        let config = MongoConfig {
            uri: std::env::var("TEST_MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database: format!("employee_test_{}", Uuid::new_v4().simple()),
            collection: "employees".to_string(),
        };

        let db = EmployeeDb::connect(&config.uri, &config.database, &config.collection)
            .await
            .expect("Failed to connect to MongoDB");

        Self::spawn_with_store(Arc::new(db.clone()), Some((db, config.database))).await
    }

    async fn spawn_with_store(
        store: Arc<dyn EmployeeStore>,
        mongo: Option<(EmployeeDb, String)>,
    ) -> Self {
        let app = Application::build_with_store(0, store)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            mongo,
        }
    }

    /// Drop the test database, if any.
    pub async fn cleanup(&self) {
        if let Some((db, name)) = &self.mongo {
            let _ = db.client().database(name).drop(None).await;
        }
    }
}

