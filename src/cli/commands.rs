use super::*;
use crate::core::{presenter, Config};
use crate::storage::{ensure_schema, NewWorker, Storage, Worker};
use anyhow::Result;
use tracing::{debug, info};

pub fn add_worker(config: &Config, args: AddArgs) -> Result<()> {
    ensure_schema(&config.db_path)?;

    let worker = NewWorker::new(args.name, args.number, args.birthday);
    let mut storage = Storage::open(&config.db_path)?;
    let outcome = storage.workers_mut().add_worker(&worker)?;

    info!("Added worker {:?} ({})", worker.name, outcome);
    Ok(())
}

pub fn display(config: &Config, args: DisplayArgs) -> Result<()> {
    let output = display_output(config, args.json)?;
    println!("{}", output);
    Ok(())
}

pub fn find(config: &Config, args: FindArgs) -> Result<()> {
    let output = find_output(config, &args.name, args.json)?;
    println!("{}", output);
    Ok(())
}

/// `display` 的输出文本
pub fn display_output(config: &Config, json: bool) -> Result<String> {
    ensure_schema(&config.db_path)?;

    let workers = {
        let storage = Storage::open(&config.db_path)?;
        storage.workers().list_all()?
    };
    debug!("Loaded {} records from {:?}", workers.len(), config.db_path);

    format_workers(&workers, json)
}

/// `find` 的输出文本
pub fn find_output(config: &Config, name: &str, json: bool) -> Result<String> {
    ensure_schema(&config.db_path)?;

    let workers = {
        let storage = Storage::open(&config.db_path)?;
        storage.workers().find_by_name_prefix(name)?
    };
    debug!("Found {} records matching {:?}", workers.len(), name);

    format_workers(&workers, json)
}

fn format_workers(workers: &[Worker], json: bool) -> Result<String> {
    if json {
        presenter::render_json(workers)
    } else {
        Ok(presenter::render(workers))
    }
}
