//! Command dispatch for the CLI front-end.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use chrono::{Local, Utc};
use log::info;

use super::state::AppState;
use super::summary::{format_import_summary, format_reports, format_sites};
use crate::config::{
    Cli, Command, Config, ImportArgs, ReportArgs, ReportsCommand, SiteArgs, SitesCommand,
    ThemeCommand,
};
use crate::export::{export_reports, export_sites};
use crate::forms::{ReportForm, SiteForm};
use crate::import::{read_table, ImportOptions, ImportPolicy};
use crate::models::UserGroup;

/// Asks a yes/no question; anything but `y` or `yes` means no.
pub fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<bool> {
    write!(output, "{} [y/N] ", question)?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

fn confirm(question: &str) -> Result<bool> {
    let stdin = io::stdin();
    prompt_yes_no(&mut stdin.lock(), &mut io::stderr(), question)
        .context("Failed to read confirmation")
}

fn set(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}

/// Overwrites the form fields that were given on the command line.
pub fn apply_report_args(form: &mut ReportForm, args: ReportArgs) {
    set(&mut form.site_name, args.site_name);
    set(&mut form.ticket_id, args.ticket_id);
    set(&mut form.status, args.status);
    set(&mut form.reason, args.reason);
    set(&mut form.last_update, args.last_update);
    set(&mut form.issue_date, args.issue_date);
    set(&mut form.last_follow_up, args.last_follow_up);
}

/// Overwrites the form fields that were given on the command line.
pub fn apply_site_args(form: &mut SiteForm, args: SiteArgs) {
    set(&mut form.site_location_name, args.location);
    set(&mut form.device_name, args.device);
    set(&mut form.sdwan_site_id, args.sdwan_id);
    set(&mut form.lan_ip, args.lan_ip);
    set(&mut form.el_info, args.el_info);
    set(&mut form.el_capacity, args.el_capacity);
    set(&mut form.el_l2_ip, args.el_l2_ip);
    set(&mut form.ilevant_info, args.ilevant_info);
    set(&mut form.ilevant_capacity, args.ilevant_capacity);
    set(&mut form.horizon_info, args.horizon_info);
    set(&mut form.horizon_capacity, args.horizon_capacity);
    set(&mut form.horizon_l2_ip, args.horizon_l2_ip);
}

/// Runs one CLI command against the persisted state.
pub async fn run(cli: Cli) -> Result<()> {
    let config = cli.config();
    let mut state = AppState::open(&config).with_context(|| {
        format!(
            "Failed to open data directory {}",
            config.data_dir.display()
        )
    })?;

    match cli.command {
        Command::Reports(cmd) => run_reports(&mut state, &config, cmd).await,
        Command::Sites(cmd) => run_sites(&mut state, cli.group, cmd),
        Command::Theme(cmd) => {
            run_theme(&mut state, cmd);
            Ok(())
        }
    }
}

async fn run_reports(state: &mut AppState, config: &Config, cmd: ReportsCommand) -> Result<()> {
    match cmd {
        ReportsCommand::List => {
            println!("{}", format_reports(state.reports(), state.date_format()));
        }
        ReportsCommand::Add(args) => {
            let mut form = ReportForm::blank(Local::now().date_naive(), state.date_format());
            apply_report_args(&mut form, args);
            let report = state.add_report(form, Utc::now().timestamp_millis())?;
            println!("Added report {}", report.id);
        }
        ReportsCommand::Edit { id, fields } => {
            let existing = state
                .report(&id)
                .with_context(|| format!("No report with id {}", id))?;
            let mut form = ReportForm::from_report(existing, state.date_format());
            apply_report_args(&mut form, fields);
            state.edit_report(&id, form)?;
            println!("Updated report {}", id);
        }
        ReportsCommand::Delete { id, yes } => {
            let Some(report) = state.report(&id) else {
                println!("No report with id {}", id);
                return Ok(());
            };
            let question = format!(
                "Delete report {} ({} / {})?",
                id, report.site_name, report.ticket_id
            );
            if !yes && !confirm(&question)? {
                println!("Nothing deleted.");
                return Ok(());
            }
            state.delete_report(&id);
            println!("Deleted report {}", id);
        }
        ReportsCommand::Import(args) => run_import(state, config, args).await?,
        ReportsCommand::Export(args) => {
            let count = export_reports(
                state.reports(),
                args.format,
                state.date_format(),
                args.output.as_deref(),
            )?;
            if args.output.is_some() {
                println!("Exported {} reports", count);
            }
        }
    }
    Ok(())
}

async fn run_import(state: &mut AppState, config: &Config, args: ImportArgs) -> Result<()> {
    let table = read_table(&args.file)
        .await
        .with_context(|| format!("Failed to import {}", args.file.display()))?;
    let opts = ImportOptions::new(config.date_format, config.missing_date_policy);

    let staged = state.stage_import(&table, &opts)?;
    println!("{}", format_import_summary(staged));
    let action = match config.import_policy {
        ImportPolicy::Replace => "replacing the current reports",
        ImportPolicy::Append => "after the current reports",
    };
    let question = format!("Import {} reports, {}?", staged.reports.len(), action);

    if !args.yes && !confirm(&question)? {
        state.cancel_import();
        println!("Import cancelled; reports unchanged.");
        return Ok(());
    }

    let applied = state.confirm_import()?;
    info!("Import applied from {}", args.file.display());
    println!(
        "{} reports imported successfully ({} total)",
        applied.imported, applied.total
    );
    Ok(())
}

fn run_sites(state: &mut AppState, group: UserGroup, cmd: SitesCommand) -> Result<()> {
    let manages = matches!(
        cmd,
        SitesCommand::Add(_) | SitesCommand::Edit { .. } | SitesCommand::Delete { .. }
    );
    if manages && !group.can_manage_sites() {
        bail!("The {} group cannot add, edit or delete sites", group);
    }

    match cmd {
        SitesCommand::List { search } => {
            let sites = state.search_sites(search.as_deref().unwrap_or_default());
            println!("{}", format_sites(&sites));
        }
        SitesCommand::Add(args) => {
            let mut form = SiteForm::default();
            apply_site_args(&mut form, args);
            let site = state.add_site(form, Utc::now().timestamp_millis())?;
            println!("Added site {}", site.id);
        }
        SitesCommand::Edit { id, fields } => {
            let existing = state
                .site(&id)
                .with_context(|| format!("No site with id {}", id))?;
            let mut form = SiteForm::from_site(existing);
            apply_site_args(&mut form, fields);
            state.edit_site(&id, form)?;
            println!("Updated site {}", id);
        }
        SitesCommand::Delete { id, yes } => {
            let Some(site) = state.site(&id) else {
                println!("No site with id {}", id);
                return Ok(());
            };
            let question = format!("Delete site {} ({})?", id, site.site_location_name);
            if !yes && !confirm(&question)? {
                println!("Nothing deleted.");
                return Ok(());
            }
            state.delete_site(&id);
            println!("Deleted site {}", id);
        }
        SitesCommand::Export(args) => {
            let count = export_sites(state.sites(), args.format, args.output.as_deref())?;
            if args.output.is_some() {
                println!("Exported {} sites", count);
            }
        }
    }
    Ok(())
}

fn run_theme(state: &mut AppState, cmd: ThemeCommand) {
    match cmd {
        ThemeCommand::Show => {}
        ThemeCommand::Toggle => {
            state.toggle_theme();
        }
        ThemeCommand::Set { theme } => state.set_theme(theme),
    }
    println!("{}", state.theme());
}
