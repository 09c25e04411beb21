//! CLI command for the earnings/expenses report

use clap::{Args, ValueEnum};

use crate::config::{RenderOptions, Settings, SortKey};
use crate::error::TallyResult;
use crate::reports::{EarningsExpensesReport, Layout};
use crate::storage::PeriodStore;

/// Sort key as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Name,
    Value,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => SortKey::Name,
            SortArg::Value => SortKey::Value,
        }
    }
}

/// Arguments of the report command
#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// Period to report on (defaults to the current year)
    #[arg(short, long, env = "TALLY_PERIOD")]
    pub period: Option<String>,

    /// Print earnings above expenses instead of side by side
    #[arg(long)]
    pub stacked: bool,

    /// Category ordering
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// Hide the ID column
    #[arg(long)]
    pub hide_ids: bool,
}

impl ReportArgs {
    /// Settings defaults overridden by the flags of this invocation
    pub fn resolve(&self, settings: &Settings) -> (RenderOptions, Layout) {
        let mut opts = settings.render_options();
        if let Some(sort) = self.sort {
            opts.sort_key = sort.into();
        }
        if self.hide_ids {
            opts.show_ids = false;
        }

        let layout = if self.stacked {
            Layout::Stacked
        } else {
            settings.layout
        };

        (opts, layout)
    }
}

/// Render the report of a period to a string
pub fn render_period_report(
    store: &PeriodStore,
    settings: &Settings,
    period: &str,
    args: &ReportArgs,
) -> TallyResult<String> {
    let tables = store.load(period)?;
    let (opts, layout) = args.resolve(settings);
    Ok(EarningsExpensesReport::from_tables(&tables).render(&opts, layout))
}

/// Handle the report command
pub fn handle_report_command(
    store: &PeriodStore,
    settings: &Settings,
    args: ReportArgs,
) -> TallyResult<()> {
    let period = args
        .period
        .clone()
        .unwrap_or_else(crate::storage::default_period_name);

    let output = render_period_report(store, settings, &period, &args)?;
    if output.is_empty() {
        println!("No entries in period {}.", period);
    } else {
        println!("{}", output);
    }

    Ok(())
}
