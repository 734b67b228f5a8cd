//! Neo4j connection and statement execution.

use std::path::Path;

use anyhow::{Context, Result};
use neo4rs::{ConfigBuilder, Graph, Query};
use serde::Deserialize;
use tracing::debug;

const DEFAULT_URI: &str = "bolt://localhost:7687";
const DEFAULT_NAME: &str = "neo4j";

/// Connection settings, loadable from a TOML file.
///
/// ```toml
/// uri = "bolt://graph:7687"
/// user = "loader"
/// password = "secret"
/// database = "facts"
/// ```
///
/// Missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            user: DEFAULT_NAME.to_string(),
            password: DEFAULT_NAME.to_string(),
            database: DEFAULT_NAME.to_string(),
        }
    }
}

impl GraphConfig {
    /// Parse settings from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid graph configuration")
    }

    /// Read settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("In {}", path.display()))
    }
}

/// Node and relationship totals in the database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphCounts {
    pub nodes: usize,
    pub relationships: usize,
}

const COUNTS_QUERY: &str = "MATCH (n) WITH count(n) AS nodes \
                            OPTIONAL MATCH ()-[r]->() \
                            RETURN nodes, count(r) AS relationships";

/// Connected Neo4j session pool.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Build the pool and ping the server.
    ///
    /// `Graph::connect` is lazy; the `RETURN 1` forces a bolt handshake so a
    /// caller-side timeout catches an unreachable server.
    pub async fn connect(config: &GraphConfig) -> Result<Self> {
        let bolt = ConfigBuilder::default()
            .uri(config.uri.as_str())
            .user(config.user.as_str())
            .password(config.password.as_str())
            .db(config.database.as_str())
            .max_connections(4)
            .build()
            .context("Failed to build Neo4j config")?;

        let graph = Graph::connect(bolt)
            .await
            .with_context(|| format!("Failed to connect to {}", config.uri))?;
        graph
            .run(Query::new("RETURN 1".to_string()))
            .await
            .context("Neo4j is not responding to queries")?;

        debug!(uri = %config.uri, database = %config.database, "Connected to Neo4j");
        Ok(Self { graph })
    }

    /// Run one Cypher statement, discarding any result.
    pub async fn run(&self, statement: &str) -> Result<()> {
        self.graph
            .run(Query::new(statement.to_string()))
            .await
            .context("Neo4j statement failed")
    }

    /// Count all nodes and relationships.
    pub async fn counts(&self) -> Result<GraphCounts> {
        let mut stream = self
            .graph
            .execute(Query::new(COUNTS_QUERY.to_string()))
            .await
            .context("Neo4j count query failed")?;

        let Some(row) = stream.next().await.context("Failed to fetch Neo4j row")? else {
            return Ok(GraphCounts::default());
        };
        let column = |name: &str| -> Result<i64> {
            row.get::<i64>(name)
                .map_err(|e| anyhow::anyhow!("Failed to get field '{}': {:?}", name, e))
        };
        let nodes = column("nodes")?;
        let relationships = column("relationships")?;

        Ok(GraphCounts {
            nodes: nodes.max(0) as usize,
            relationships: relationships.max(0) as usize,
        })
    }
}
