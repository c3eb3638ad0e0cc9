//! Plan application over a single managed connection.

use std::collections::BTreeMap;

use rowhook_core::{FunctionDescriptor, SyncConfig, SyncOutput};
use sqlx::{Connection, PgConnection};
use tracing::{debug, info};

use crate::error::SyncResult;
use crate::plan::{self, SyncPlan, TRIGGER_METHOD};

/// Synchronize every selected function's trigger.
///
/// Owns the database connection for the whole run: acquired here and
/// released on every exit path before the result propagates. Planning
/// happens before the connection is opened, so configuration problems
/// never touch the database.
pub async fn run(
    config: &SyncConfig,
    database_url: &str,
    functions: &BTreeMap<String, FunctionDescriptor>,
) -> SyncResult<SyncOutput> {
    let plan = plan::build_plan(functions, config)?;

    debug!("connecting to PostgreSQL");
    let mut conn = PgConnection::connect(database_url).await?;
    debug!("connected");

    let outcome = apply(&mut conn, &plan).await;

    // Release the connection whether or not the batch succeeded.
    let closed = conn.close().await;
    let output = outcome?;
    closed?;

    Ok(output)
}

/// Execute the plan strictly in order inside one transaction.
///
/// Commits only if every statement for every function succeeds. A
/// failure on any statement aborts the remaining queue and rolls back
/// everything applied earlier in the run, so each function ends either
/// fully synchronized or untouched.
pub async fn apply(conn: &mut PgConnection, plan: &SyncPlan) -> SyncResult<SyncOutput> {
    let mut tx = conn.begin().await?;
    let mut output = SyncOutput::default();

    for step in &plan.steps {
        info!(
            function = %step.name,
            table = %step.table,
            event = step.sql_event,
            method = TRIGGER_METHOD,
            url = %step.url,
            "replacing trigger"
        );

        debug!(sql = %step.drop_sql, "dropping existing trigger");
        sqlx::raw_sql(&step.drop_sql).execute(&mut *tx).await?;

        debug!(sql = %step.create_sql, "creating trigger");
        sqlx::raw_sql(&step.create_sql).execute(&mut *tx).await?;

        output
            .functions
            .insert(step.name.clone(), step.route.clone());
    }

    tx.commit().await?;
    Ok(output)
}
