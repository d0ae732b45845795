use crate::models::{Employee, EmployeeFields, EmployeeId};
use crate::services::store::EmployeeStore;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{ClientOptions, FindOneAndUpdateOptions, ReturnDocument},
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

/// MongoDB-backed employee store.
#[derive(Clone)]
pub struct EmployeeDb {
    client: MongoClient,
    db: Database,
    collection_name: String,
}

impl EmployeeDb {
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, collection = %collection, "Connecting to MongoDB");
        let mut client_options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB connection string: {}", e);
            AppError::from(e)
        })?;
        client_options.app_name = Some("employee-service".to_string());

        let client = MongoClient::with_options(client_options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client ready");

        Ok(Self {
            client,
            db,
            collection_name: collection.to_string(),
        })
    }

    pub fn employees(&self) -> Collection<Employee> {
        self.db.collection(&self.collection_name)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}

#[async_trait]
impl EmployeeStore for EmployeeDb {
    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        let cursor = self.employees().find(doc! {}, None).await?;
        let employees: Vec<Employee> = cursor.try_collect().await?;
        Ok(employees)
    }

    async fn insert(&self, fields: EmployeeFields) -> Result<Employee, AppError> {
        // The id travels with the document, so the stored record is known
        // without reading it back.
        let employee = Employee::new(EmployeeId::generate(), fields);
        self.employees().insert_one(&employee, None).await?;
        Ok(employee)
    }

    async fn update(
        &self,
        id: &EmployeeId,
        fields: EmployeeFields,
    ) -> Result<Option<Employee>, AppError> {
        let filter = doc! { "_id": id.as_object_id() };
        let update = doc! {
            "$set": {
                "name": fields.name,
                "salary": fields.salary,
                "age": fields.age,
            }
        };
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let employee = self
            .employees()
            .find_one_and_update(filter, update, options)
            .await?;
        Ok(employee)
    }

    async fn delete(&self, id: &EmployeeId) -> Result<bool, AppError> {
        let result = self
            .employees()
            .delete_one(doc! { "_id": id.as_object_id() }, None)
            .await?;
        Ok(result.deleted_count > 0)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
