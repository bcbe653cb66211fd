use crate::cli::{Cli, Commands};
use crate::domain::models::{ClassifyReport, JsonOut, MarkReport, ModelConfig};
use crate::domain::tasks::to_supported_task;
use crate::hub;
use crate::services::ledger::{load_ledger, record, save_ledger};
use crate::services::lister::scan_models;
use crate::services::output::{print_one, print_out};
use crate::services::settings::Settings;

pub fn handle_commands(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Scan { query, category } => {
            let ledger = load_ledger(&cli.output_dir)?;
            let limit = cli.limit.unwrap_or(settings.default_limit);
            let candidates = scan_models(
                settings,
                query.as_deref(),
                category.as_deref(),
                limit,
                &ledger,
            )?;
            print_out(cli.json, &candidates, |c| {
                format!(
                    "{}\t{}\t{}",
                    c.info.id,
                    c.task,
                    c.config
                        .architectures
                        .first()
                        .map(String::as_str)
                        .unwrap_or("n/a")
                )
            })?;
        }
        Commands::Show { model_id } => {
            let info = hub::model_info(settings, model_id)?;
            let config = hub::fetch_config(settings, &info)?;
            let (task, architecture) = to_supported_task(&config)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: serde_json::json!({
                            "info": info,
                            "config": config,
                            "architecture": architecture,
                            "task": task,
                        })
                    })?
                );
            } else {
                println!("id: {}", info.id);
                println!("revision: {}", info.sha.as_deref().unwrap_or("n/a"));
                println!("downloads: {}", info.downloads);
                println!("architecture: {}", architecture);
                println!("task: {}", task.unwrap_or("unsupported"));
            }
        }
        Commands::Classify { config_path } => {
            let raw = std::fs::read_to_string(config_path)?;
            let config: ModelConfig = serde_json::from_str(&raw)?;
            let (task, architecture) = to_supported_task(&config)?;
            let report = ClassifyReport {
                architecture,
                task: task.map(|t| t.to_string()),
            };
            print_one(cli.json, report, |r| {
                format!(
                    "{}\t{}",
                    r.architecture,
                    r.task.as_deref().unwrap_or("unsupported")
                )
            })?;
        }
        Commands::Mark {
            model_id,
            application,
            failed,
            reason,
            size,
            sha,
        } => {
            let mut ledger = load_ledger(&cli.output_dir)?;
            let sha = match sha {
                Some(s) => s.clone(),
                None => hub::model_info(settings, model_id)?
                    .sha
                    .unwrap_or_default(),
            };
            let status = record(
                &mut ledger,
                model_id,
                &sha,
                application,
                !failed,
                reason.clone(),
                *size,
            );
            save_ledger(&cli.output_dir, &ledger)?;
            let report = MarkReport {
                model_id: model_id.clone(),
                status,
            };
            print_one(cli.json, report, |r| {
                format!("marked {} {}", r.model_id, r.status.result)
            })?;
        }
        Commands::Ledger { model_id } => {
            let ledger = load_ledger(&cli.output_dir)?;
            match model_id {
                Some(id) => {
                    let status = ledger
                        .get(id)
                        .ok_or_else(|| anyhow::anyhow!("no ledger entry: {}", id))?;
                    print_one(cli.json, status, |s| {
                        format!("{}\t{}\t{}", s.result, s.application, s.sha1)
                    })?;
                }
                None => {
                    if cli.json {
                        println!(
                            "{}",
                            serde_json::to_string_pretty(&JsonOut {
                                ok: true,
                                data: &ledger
                            })?
                        );
                    } else {
                        for (id, status) in &ledger {
                            println!("{}\t{}\t{}", id, status.result, status.application);
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
