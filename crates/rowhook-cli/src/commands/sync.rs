//! The `rowhook sync` command.
//!
//! Orchestration only: load the manifest, filter and select, then hand
//! the survivors to the synchronizer. Configuration is validated before
//! any database work, and the connection string is only required when a
//! connection will actually be opened.

use std::path::PathBuf;

use rowhook_core::{ConfigError, SyncConfig, SyncOutput};
use rowhook_registry::FunctionManifest;
use tracing::info;

/// Environment variable naming the target database.
const DATABASE_URL_VAR: &str = "POSTGRESQL_CONNECTION_URL";

pub struct SyncArgs {
    pub manifest: PathBuf,
    pub base_url: String,
    pub api_key: String,
    pub functions: Option<String>,
    pub dry_run: bool,
    pub format: String,
}

pub async fn sync(args: SyncArgs) -> anyhow::Result<()> {
    info!(manifest = %args.manifest.display(), "starting up");

    let config = SyncConfig::new(args.base_url, args.api_key)?;

    let manifest = FunctionManifest::from_file(&args.manifest)?;
    let registry = rowhook_registry::eligible_functions(&manifest)?;
    info!(
        count = registry.len(),
        "found functions registered for trigger wiring"
    );

    let only = selection_list(args.functions.as_deref());
    let selected = rowhook_registry::select(&registry, &only)?;

    if args.dry_run {
        let plan = rowhook_sync::build_plan(&selected, &config)?;
        for step in &plan.steps {
            println!("{};", step.drop_sql);
            println!("{};\n", step.create_sql);
        }
        return print_output(&plan.output(), &args.format);
    }

    let database_url = std::env::var(DATABASE_URL_VAR)
        .ok()
        .filter(|url| !url.is_empty())
        .ok_or(ConfigError::MissingDatabaseUrl)?;

    info!("functions will be called via {}/<name>", config.base_url);

    let output = rowhook_sync::run(&config, &database_url, &selected).await?;

    info!("job done");
    print_output(&output, &args.format)
}

/// Split the `--functions` argument into names, dropping empty segments.
fn selection_list(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn print_output(output: &SyncOutput, format: &str) -> anyhow::Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(output)?),
        _ => {
            for route in output.functions.values() {
                println!(
                    "{}: {}.{} -> {} {}",
                    route.name, route.table, route.event, route.request.method, route.request.url
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn selection_list_splits_and_trims() {
        assert_eq!(selection_list(Some("a,b")), vec!["a", "b"]);
        assert_eq!(selection_list(Some(" a , ,b,")), vec!["a", "b"]);
        assert!(selection_list(Some("")).is_empty());
        assert!(selection_list(None).is_empty());
    }

    fn write_manifest(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    fn args(manifest: &tempfile::NamedTempFile) -> SyncArgs {
        SyncArgs {
            manifest: manifest.path().to_path_buf(),
            base_url: "https://api.example.com".to_string(),
            api_key: "s3cr3t".to_string(),
            functions: None,
            dry_run: true,
            format: "text".to_string(),
        }
    }

    #[tokio::test]
    async fn dry_run_succeeds_without_a_database() {
        let manifest = write_manifest(
            r#"{"functions": [{"name": "sendWelcome", "hook": {"table": "users", "event": "row_created"}}]}"#,
        );

        sync(args(&manifest)).await.unwrap();
    }

    #[tokio::test]
    async fn unknown_selection_fails_fast() {
        let manifest = write_manifest(
            r#"{"functions": [
                {"name": "a", "hook": {"table": "users", "event": "row_created"}},
                {"name": "b", "hook": {"table": "orders", "event": "row_updated"}}
            ]}"#,
        );

        let mut args = args(&manifest);
        args.functions = Some("b,c".to_string());

        let err = sync(args).await.unwrap_err();
        assert!(err.to_string().contains("\"c\""));
    }

    #[tokio::test]
    async fn empty_manifest_fails_before_any_database_work() {
        let manifest = write_manifest(r#"{"functions": [{"name": "plain"}]}"#);

        let mut args = args(&manifest);
        args.dry_run = false;

        // Fails on eligibility, not on the missing connection string.
        let err = sync(args).await.unwrap_err();
        assert!(err.to_string().contains("no functions registered"));
    }
}
