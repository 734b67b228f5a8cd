//! # pl2cy Graph
//!
//! Neo4j integration for pl2cy.
//!
//! Connects to a Neo4j server and executes converted Cypher scripts
//! statement by statement.

pub mod client;
pub mod runner;

pub use client::{GraphClient, GraphConfig, GraphCounts};
pub use runner::{RunResult, batch_statements, run_script};
