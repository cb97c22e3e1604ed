use std::sync::Arc;

use anyhow::{Context, Result};
use futures::future::BoxFuture;
use gcloud_gax::grpc::Code;
use gcloud_googleapis::spanner::admin::database::v1::{
    CreateDatabaseRequest, GetDatabaseDdlRequest, GetDatabaseRequest, UpdateDatabaseDdlRequest,
};
use gcloud_googleapis::spanner::admin::instance::v1::{
    CreateInstanceRequest, GetInstanceRequest, Instance,
};
use gcloud_spanner::admin::client::Client as AdminClient;
use gcloud_spanner::admin::AdminClientConfig;
use gcloud_spanner::client::{Client, ClientConfig};
use gcloud_spanner::key::Key;
use gcloud_spanner::mutation::{delete, insert_or_update};
use gcloud_spanner::statement::Statement;
use gcloud_spanner::value::CommitTimestamp;
use uuid::Uuid;

use super::{GameStore, Lookup, StoreError, StoreResult};
use crate::config::SpannerConfig;
use crate::models::Game;

/// Spanner-backed store: one row per Game in the `games` table, keyed by the
/// record id, with the full record serialized into a JSON `data` column.
#[derive(Clone)]
pub struct SpannerGameStore {
    inner: Arc<Client>,
}

impl SpannerGameStore {
    /// Create a store connected to Spanner from configuration.
    ///
    /// The gcloud-spanner library automatically detects the
    /// SPANNER_EMULATOR_HOST environment variable and connects to the
    /// emulator when set, or production Spanner otherwise. Auto-provisioning
    /// creates the instance, database, and `games` table if they don't
    /// exist, so local development against the emulator needs no setup.
    pub async fn from_config(config: &SpannerConfig) -> Result<Self> {
        auto_provision(config).await?;

        let database_path = format!(
            "projects/{}/instances/{}/databases/{}",
            config.project, config.instance, config.database
        );

        if let Some(host) = &config.emulator_host {
            tracing::info!("Connecting to Spanner emulator at: {}", host);
        } else {
            tracing::info!("Connecting to production Spanner");
        }

        let client = Client::new(&database_path, ClientConfig::default())
            .await
            .context("Failed to create Spanner client")?;

        tracing::info!(
            "Successfully connected to Spanner database: {}",
            database_path
        );

        Ok(Self {
            inner: Arc::new(client),
        })
    }

    async fn read(&self, id: Uuid) -> Result<Lookup> {
        let id_str = id.to_string();

        let mut statement = Statement::new("SELECT data FROM games WHERE id = @id");
        statement.add_param("id", &id_str);

        let mut tx = self
            .inner
            .single()
            .await
            .context("Failed to create read transaction")?;

        let mut result_set = tx
            .query(statement)
            .await
            .context("Failed to query game from Spanner")?;

        if let Some(row) = result_set.next().await? {
            let data_str: String = row.column_by_name("data")?;
            let game: Game = serde_json::from_str(&data_str)
                .context("Failed to deserialize Game record")?;

            tracing::debug!("Read game with id: {}", id);
            Ok(Lookup::Found(game))
        } else {
            tracing::debug!("Game not found with id: {}", id);
            Ok(Lookup::NotFound)
        }
    }

    async fn upsert(&self, game: &Game) -> Result<()> {
        let id_str = game.id.to_string();
        let data_str =
            serde_json::to_string(game).context("Failed to serialize Game record")?;

        let mutation = insert_or_update(
            "games",
            &["id", "data", "created_at", "updated_at"],
            &[
                &id_str,
                &data_str,
                &CommitTimestamp::new(),
                &CommitTimestamp::new(),
            ],
        );

        self.inner
            .apply(vec![mutation])
            .await
            .context("Failed to upsert game to Spanner")?;

        tracing::debug!("Upserted game with id: {}", game.id);
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> Result<()> {
        let id_str = id.to_string();

        // Spanner delete mutations succeed whether or not the key exists.
        let mutation = delete("games", Key::new(&id_str));

        self.inner
            .apply(vec![mutation])
            .await
            .context("Failed to delete game from Spanner")?;

        tracing::debug!("Deleted game with id: {}", id);
        Ok(())
    }

    async fn scan_all(&self) -> Result<Vec<Game>> {
        let statement = Statement::new("SELECT data FROM games ORDER BY id");

        let mut tx = self
            .inner
            .single()
            .await
            .context("Failed to create read transaction")?;

        let mut result_set = tx
            .query(statement)
            .await
            .context("Failed to scan games from Spanner")?;

        let mut games = Vec::new();
        while let Some(row) = result_set.next().await? {
            let data_str: String = row.column_by_name("data")?;
            let game: Game = serde_json::from_str(&data_str)
                .context("Failed to deserialize Game record")?;
            games.push(game);
        }

        tracing::debug!("Scanned {} games", games.len());
        Ok(games)
    }

    async fn ping(&self) -> Result<()> {
        let statement = Statement::new("SELECT 1");

        let mut tx = self
            .inner
            .single()
            .await
            .context("Failed to create health check transaction")?;

        let mut result_set = tx
            .query(statement)
            .await
            .context("Failed to execute health check query")?;

        if result_set.next().await?.is_some() {
            Ok(())
        } else {
            Err(anyhow::anyhow!("Health check query returned no results"))
        }
    }
}

impl GameStore for SpannerGameStore {
    fn get(&self, id: Uuid) -> BoxFuture<'static, StoreResult<Lookup>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .read(id)
                .await
                .map_err(|e| StoreError::unavailable("Spanner read failed", e))
        })
    }

    fn put(&self, game: Game) -> BoxFuture<'static, StoreResult<Uuid>> {
        let store = self.clone();
        Box::pin(async move {
            let id = game.id;
            store
                .upsert(&game)
                .await
                .map_err(|e| StoreError::unavailable("Spanner write failed", e))?;
            Ok(id)
        })
    }

    fn delete(&self, id: Uuid) -> BoxFuture<'static, StoreResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .remove(id)
                .await
                .map_err(|e| StoreError::unavailable("Spanner delete failed", e))
        })
    }

    fn scan(&self) -> BoxFuture<'static, StoreResult<Vec<Game>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .scan_all()
                .await
                .map_err(|e| StoreError::unavailable("Spanner scan failed", e))
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StoreResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .ping()
                .await
                .map_err(|e| StoreError::unavailable("Spanner health check failed", e))
        })
    }
}

/// Check that the configured instance, database, and table exist, creating
/// them if needed. Enables zero-setup local development with the emulator.
async fn auto_provision(config: &SpannerConfig) -> Result<()> {
    tracing::info!("Starting auto-provisioning checks...");

    let admin_client = AdminClient::new(AdminClientConfig::default())
        .await
        .context("Failed to create Spanner admin client")?;

    let project_path = format!("projects/{}", config.project);
    let instance_path = format!("{}/instances/{}", project_path, config.instance);
    let database_path = format!("{}/databases/{}", instance_path, config.database);

    ensure_instance_exists(&admin_client, config, &project_path, &instance_path).await?;
    ensure_database_exists(&admin_client, &instance_path, &database_path).await?;
    ensure_table_exists(&admin_client, &database_path).await?;

    tracing::info!("Auto-provisioning complete");
    Ok(())
}

async fn ensure_instance_exists(
    admin_client: &AdminClient,
    config: &SpannerConfig,
    project_path: &str,
    instance_path: &str,
) -> Result<()> {
    let get_request = GetInstanceRequest {
        name: instance_path.to_string(),
        field_mask: None,
    };

    match admin_client.instance().get_instance(get_request, None).await {
        Ok(_) => {
            tracing::info!("Instance already exists: {}", instance_path);
            Ok(())
        }
        Err(status) if status.code() == Code::NotFound => {
            tracing::info!("Instance not found, creating: {}", instance_path);

            let instance_config = if config.emulator_host.is_some() {
                format!("{}/instanceConfigs/emulator-config", project_path)
            } else {
                format!("{}/instanceConfigs/regional-us-central1", project_path)
            };

            let create_request = CreateInstanceRequest {
                parent: project_path.to_string(),
                instance_id: config.instance.clone(),
                instance: Some(Instance {
                    name: instance_path.to_string(),
                    config: instance_config,
                    display_name: format!("{} instance", config.instance),
                    node_count: 1,
                    ..Default::default()
                }),
            };

            let mut operation = admin_client
                .instance()
                .create_instance(create_request, None)
                .await
                .context("Failed to start instance creation")?;

            operation
                .wait(None)
                .await
                .context("Failed to create instance")?;

            tracing::info!("Instance created successfully: {}", instance_path);
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!(
            "Failed to check instance existence: {}",
            e.message()
        )),
    }
}

async fn ensure_database_exists(
    admin_client: &AdminClient,
    instance_path: &str,
    database_path: &str,
) -> Result<()> {
    let get_request = GetDatabaseRequest {
        name: database_path.to_string(),
    };

    match admin_client
        .database()
        .get_database(get_request, None)
        .await
    {
        Ok(_) => {
            tracing::info!("Database already exists: {}", database_path);
            Ok(())
        }
        Err(status) if status.code() == Code::NotFound => {
            tracing::info!("Database not found, creating: {}", database_path);

            let database_id = database_path
                .split('/')
                .next_back()
                .context("Invalid database path")?;

            let create_request = CreateDatabaseRequest {
                parent: instance_path.to_string(),
                create_statement: format!("CREATE DATABASE `{}`", database_id),
                extra_statements: vec![],
                encryption_config: None,
                database_dialect: 1, // Google Standard SQL
                proto_descriptors: vec![],
            };

            let mut operation = admin_client
                .database()
                .create_database(create_request, None)
                .await
                .context("Failed to start database creation")?;

            operation
                .wait(None)
                .await
                .context("Failed to create database")?;

            tracing::info!("Database created successfully: {}", database_path);
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!(
            "Failed to check database existence: {}",
            e.message()
        )),
    }
}

async fn ensure_table_exists(admin_client: &AdminClient, database_path: &str) -> Result<()> {
    let get_ddl_request = GetDatabaseDdlRequest {
        database: database_path.to_string(),
    };

    let ddl_response = admin_client
        .database()
        .get_database_ddl(get_ddl_request, None)
        .await
        .context("Failed to get database DDL")?;

    let table_exists = ddl_response
        .into_inner()
        .statements
        .iter()
        .any(|stmt| stmt.contains("CREATE TABLE games") || stmt.contains("CREATE TABLE `games`"));

    if table_exists {
        tracing::info!("Table 'games' already exists");
        Ok(())
    } else {
        tracing::info!("Table 'games' not found, creating...");

        let create_table_ddl = r#"
CREATE TABLE games (
    id STRING(36) NOT NULL,
    data JSON NOT NULL,
    created_at TIMESTAMP NOT NULL OPTIONS (allow_commit_timestamp=true),
    updated_at TIMESTAMP NOT NULL OPTIONS (allow_commit_timestamp=true),
) PRIMARY KEY (id)
"#
        .trim()
        .to_string();

        let update_request = UpdateDatabaseDdlRequest {
            database: database_path.to_string(),
            statements: vec![create_table_ddl],
            operation_id: String::new(),
            proto_descriptors: vec![],
            throughput_mode: false,
        };

        let mut operation = admin_client
            .database()
            .update_database_ddl(update_request, None)
            .await
            .context("Failed to start table creation")?;

        operation
            .wait(None)
            .await
            .context("Failed to create table")?;

        tracing::info!("Table 'games' created successfully");
        Ok(())
    }
}
