use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;

use coop_replays::{
    aggregate::aggregate,
    args::Args,
    config,
    format::format_percentage,
    logging,
    session::Session,
    ui,
};

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = logging::init(&config::log_dir())?;

    let preferences_path = match &args.preferences {
        Some(path) => Some(path.clone()),
        None => config::preferences_path().ok(),
    };
    let mut session = Session::open(preferences_path);

    if let Some(dir) = &args.dir {
        session.select_directory(dir)?;
    } else if session.directory().is_some() {
        // A stale saved directory is reported in the error list, not fatal.
        let _ = session.reload();
    }
    args.apply_filters(&mut session.selection);

    if !args.is_headless() {
        return ui::run_ui(session);
    }

    if session.directory().is_none() {
        bail!("No replay directory; pass --dir");
    }

    for error in session.errors() {
        eprintln!("{}", error.message);
    }

    if let Some(dimension) = args.report {
        let records = session.filtered();
        let result = aggregate(&records, dimension, session.selection.player.as_deref());

        for row in &result.rows {
            println!("{} {} ({})", row.key, row.count, format_percentage(row.percent));
        }
        println!("total: {}", result.total);
    }

    if let Some(path) = &args.export {
        let rows = session
            .export(path)
            .with_context(|| format!("Export to {} failed", path.display()))?;
        println!("exported: {}", rows);
    }

    info!("Headless run finished");
    session.close();
    Ok(())
}
