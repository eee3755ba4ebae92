//! The `fetch` command: authenticate, execute a report definition, write CSV

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use clap::Args;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::info;

use aa_client::{JwtAuth, ReportClient, Session};
use aa_core::Config;

#[derive(Args, Debug)]
pub struct FetchCommand {
  /// Path to the report definition JSON (Analysis Workspace debug format)
  #[arg(short, long)]
  report: PathBuf,

  /// Start of the reporting period (YYYY-MM-DD)
  #[arg(long, requires = "end", conflicts_with = "days")]
  start: Option<NaiveDate>,

  /// End of the reporting period, inclusive (YYYY-MM-DD)
  #[arg(long, requires = "start", conflicts_with = "days")]
  end: Option<NaiveDate>,

  /// Report the trailing N days ending now
  #[arg(long, default_value_t = 5)]
  days: i64,

  /// Write the CSV here instead of stdout
  #[arg(short, long)]
  output: Option<PathBuf>,
}

impl FetchCommand {
  /// Resolve the configured reporting period
  fn date_range(&self) -> (NaiveDateTime, NaiveDateTime) {
    match (self.start, self.end) {
      (Some(start), Some(end)) => (
        start.and_hms_opt(0, 0, 0).expect("midnight is valid"),
        end.and_hms_opt(23, 59, 59).expect("end of day is valid"),
      ),
      _ => {
        let now = Utc::now().naive_utc();
        (now - Duration::days(self.days), now)
      }
    }
  }
}

pub async fn handle_fetch(cmd: FetchCommand) -> Result<()> {
  let config = Config::from_env().context("Failed to load configuration")?;

  let mut session = Session::with_timeout(std::time::Duration::from_secs(config.timeout_secs))?;
  JwtAuth::from_config(&config)?
    .authenticate(&mut session)
    .await
    .context("Authentication against Adobe IMS failed")?;

  let mut client = ReportClient::with_base_url(session, &config.base_url)?;
  client
    .from_json_file(&cmd.report)
    .with_context(|| format!("Failed to load report definition {}", cmd.report.display()))?;

  let (start, end) = cmd.date_range();
  info!("Reporting period: {} through {}", start, end);
  client.set_date_range(start, end)?;

  let table = client.execute().await.context("Report execution failed")?;
  info!("Fetched {} rows", table.row_count());

  match &cmd.output {
    Some(path) => {
      let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
      table.write_csv(file)?;
      info!("Wrote {}", path.display());
    }
    None => {
      table.write_csv(io::stdout().lock())?;
    }
  }

  Ok(())
}
