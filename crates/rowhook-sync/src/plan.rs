//! Trigger planning.
//!
//! Planning is pure: given the selected descriptors and the run
//! configuration it derives every SQL statement and route descriptor up
//! front. No statement text is built mid-apply, and the generated SQL is
//! byte-identical across runs with identical inputs.

use std::collections::BTreeMap;

use rowhook_core::ident::{check_identifier, quote_identifier, quote_literal};
use rowhook_core::{FunctionDescriptor, RouteDescriptor, RouteRequest, SyncConfig, SyncOutput};

use crate::error::SyncResult;

/// HTTP method every generated trigger uses.
pub const TRIGGER_METHOD: &str = "POST";

/// Timeout, in milliseconds, the database applies to each outbound call.
pub const TRIGGER_TIMEOUT_MS: u32 = 1000;

/// Schema the watched tables live in.
pub const TABLE_SCHEMA: &str = "public";

/// Extension procedure performing the outbound HTTP call.
const HTTP_REQUEST_PROCEDURE: &str = "supabase_functions.http_request";

/// Everything needed to replace one function's trigger.
///
/// The trigger name equals the function name, so functions and triggers
/// stay in 1:1 correspondence across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerStep {
    pub name: String,
    pub table: String,
    pub sql_event: &'static str,
    pub url: String,
    /// `DROP TRIGGER IF EXISTS ...` — tolerates a missing trigger.
    pub drop_sql: String,
    /// `CREATE TRIGGER ...` — fires once per affected row.
    pub create_sql: String,
    pub route: RouteDescriptor,
}

/// The full ordered batch for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
    pub steps: Vec<TriggerStep>,
}

impl SyncPlan {
    /// The route map this plan produces once applied.
    pub fn output(&self) -> SyncOutput {
        let mut output = SyncOutput::default();
        for step in &self.steps {
            output
                .functions
                .insert(step.name.clone(), step.route.clone());
        }
        output
    }
}

/// Derive the ordered drop/create batch for the selected functions.
///
/// Function and table names are allowlisted before any text is built:
/// they land in identifier positions where bind parameters cannot
/// protect them.
pub fn build_plan(
    functions: &BTreeMap<String, FunctionDescriptor>,
    config: &SyncConfig,
) -> SyncResult<SyncPlan> {
    let headers = BTreeMap::from([
        ("content-type".to_string(), "application/json".to_string()),
        ("x-api-key".to_string(), config.api_key.clone()),
    ]);
    // BTreeMap keys serialize sorted, keeping the header literal stable.
    let headers_json = serde_json::to_string(&headers)?;

    let mut steps = Vec::with_capacity(functions.len());

    for descriptor in functions.values() {
        check_identifier(&descriptor.name)?;
        check_identifier(&descriptor.table)?;

        let trigger = quote_identifier(&descriptor.name);
        let table = format!(
            "{}.{}",
            TABLE_SCHEMA,
            quote_identifier(&descriptor.table)
        );
        let sql_event = descriptor.event.sql_keyword();
        let url = config.endpoint_for(&descriptor.name);

        let drop_sql = format!("DROP TRIGGER IF EXISTS {trigger} ON {table}");
        let create_sql = format!(
            "CREATE TRIGGER {trigger}\n\
             AFTER {sql_event} ON {table}\n\
             FOR EACH ROW\n\
             EXECUTE PROCEDURE {HTTP_REQUEST_PROCEDURE}({}, {}, {}, {}, {})",
            quote_literal(&url),
            quote_literal(TRIGGER_METHOD),
            quote_literal(&headers_json),
            quote_literal("{}"),
            quote_literal(&TRIGGER_TIMEOUT_MS.to_string()),
        );

        let route = RouteDescriptor {
            name: descriptor.name.clone(),
            table: descriptor.table.clone(),
            event: sql_event.to_string(),
            kind: "http".to_string(),
            request: RouteRequest {
                method: TRIGGER_METHOD.to_string(),
                url: url.clone(),
            },
            headers: headers.clone(),
        };

        steps.push(TriggerStep {
            name: descriptor.name.clone(),
            table: descriptor.table.clone(),
            sql_event,
            url,
            drop_sql,
            create_sql,
            route,
        });
    }

    Ok(SyncPlan { steps })
}
