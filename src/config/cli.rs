//! Command-line interface.
//!
//! ```bash
//! # Import a spreadsheet, replacing the current reports after confirmation
//! site_tracker reports import ./daily.xlsx
//!
//! # Append without prompting, filling blank dates with today
//! site_tracker reports import ./daily.csv --yes --policy append --missing-dates today
//!
//! # Day-first dates everywhere
//! site_tracker --date-format dd/mm/yyyy reports list
//!
//! # Export sites for the network team
//! site_tracker sites export --output sites.xlsx
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::constants::{DATA_DIR_ENV, DEFAULT_DATA_DIR};
use super::types::{Config, LogFormat, LogLevel};
use crate::dates::DateFormat;
use crate::export::{ReportExportFormat, SiteExportFormat};
use crate::import::{ImportPolicy, MissingDatePolicy};
use crate::models::{Theme, UserGroup};

/// Command-line options.
#[derive(Debug, Parser)]
#[command(
    name = "site_tracker",
    version,
    about = "Tracks network sites and their daily problem reports."
)]
pub struct Cli {
    /// Directory holding persisted reports, sites and preferences
    #[arg(long, global = true, env = DATA_DIR_ENV, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Display format for dates: mm/dd/yy|mm/dd/yyyy|dd/mm/yyyy
    #[arg(long, global = true, value_enum, default_value_t = DateFormat::MonthDayShortYear)]
    pub date_format: DateFormat,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Group of the acting user; only admin and network-team may change sites
    #[arg(long, global = true, value_enum, default_value_t = UserGroup::Admin)]
    pub group: UserGroup,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Library configuration for this invocation.
    pub fn config(&self) -> Config {
        let mut config = Config {
            data_dir: self.data_dir.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            date_format: self.date_format,
            ..Default::default()
        };
        if let Command::Reports(ReportsCommand::Import(args)) = &self.command {
            config.import_policy = args.policy;
            config.missing_date_policy = args.missing_dates;
        }
        config
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Daily problem reports
    #[command(subcommand)]
    Reports(ReportsCommand),
    /// Network sites
    #[command(subcommand)]
    Sites(SitesCommand),
    /// Light/dark theme preference
    #[command(subcommand)]
    Theme(ThemeCommand),
}

#[derive(Debug, Subcommand)]
pub enum ReportsCommand {
    /// List all reports
    List,
    /// Add a report; status defaults to UP and dates to today
    Add(ReportArgs),
    /// Change fields of an existing report
    Edit {
        id: String,
        #[command(flatten)]
        fields: ReportArgs,
    },
    /// Delete a report
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Import reports from a .csv, .xls or .xlsx file
    Import(ImportArgs),
    /// Export all reports
    Export(ExportReportsArgs),
}

/// Report fields; dates use the display format.
#[derive(Debug, Clone, Default, Args)]
pub struct ReportArgs {
    #[arg(long)]
    pub site_name: Option<String>,
    #[arg(long)]
    pub ticket_id: Option<String>,
    /// UP or DOWN
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub reason: Option<String>,
    #[arg(long)]
    pub last_update: Option<String>,
    #[arg(long)]
    pub issue_date: Option<String>,
    #[arg(long)]
    pub last_follow_up: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct ImportArgs {
    /// Spreadsheet or CSV file whose first row holds the report headers
    pub file: PathBuf,

    /// Apply the import without asking for confirmation
    #[arg(long, short)]
    pub yes: bool,

    /// replace: imported reports become the whole list; append: add them
    #[arg(long, value_enum, default_value_t = ImportPolicy::Replace)]
    pub policy: ImportPolicy,

    /// Value for date cells that are blank or unreadable
    #[arg(long, value_enum, default_value_t = MissingDatePolicy::Empty)]
    pub missing_dates: MissingDatePolicy,
}

#[derive(Debug, Clone, Args)]
pub struct ExportReportsArgs {
    /// Export format: csv|jsonl
    #[arg(long, value_enum, default_value_t = ReportExportFormat::Csv)]
    pub format: ReportExportFormat,

    /// Output file path (defaults to stdout)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum SitesCommand {
    /// List sites, optionally filtered
    List {
        /// Case-insensitive match on location, device, SD-WAN id or LAN IP
        #[arg(long)]
        search: Option<String>,
    },
    /// Add a site
    Add(SiteArgs),
    /// Change fields of an existing site
    Edit {
        id: String,
        #[command(flatten)]
        fields: SiteArgs,
    },
    /// Delete a site
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Export all sites
    Export(ExportSitesArgs),
}

/// Site fields; ISP details are flat.
#[derive(Debug, Clone, Default, Args)]
pub struct SiteArgs {
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub device: Option<String>,
    #[arg(long)]
    pub sdwan_id: Option<String>,
    #[arg(long)]
    pub lan_ip: Option<String>,
    #[arg(long)]
    pub el_info: Option<String>,
    #[arg(long)]
    pub el_capacity: Option<String>,
    #[arg(long)]
    pub el_l2_ip: Option<String>,
    #[arg(long)]
    pub ilevant_info: Option<String>,
    #[arg(long)]
    pub ilevant_capacity: Option<String>,
    #[arg(long)]
    pub horizon_info: Option<String>,
    #[arg(long)]
    pub horizon_capacity: Option<String>,
    #[arg(long)]
    pub horizon_l2_ip: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct ExportSitesArgs {
    /// Export format: xlsx|csv
    #[arg(long, value_enum, default_value_t = SiteExportFormat::Xlsx)]
    pub format: SiteExportFormat,

    /// Output file path (defaults to stdout)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum ThemeCommand {
    /// Print the current theme
    Show,
    /// Switch between light and dark
    Toggle,
    /// Set the theme explicitly
    Set {
        #[arg(value_enum)]
        theme: Theme,
    },
}
