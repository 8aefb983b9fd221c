//! One function per subcommand, each driving a `desk::Desk` session.
//!
//! Commands go through the same controller calls as the browser, so the
//! dependent-field sync and validation rules apply unchanged.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use desk::{Accessory, Desk, DeskError};
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::error::CliError;
use crate::http::HttpApi;
use crate::render;

#[derive(Args, Debug, Default)]
pub struct LendArgs {
    /// Borrower's full name, exactly as registered.
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub location: String,
    #[arg(long)]
    pub loaned_by: String,
    /// PC unit number; implies the PC box.
    #[arg(long)]
    pub pc: Option<String>,
    #[arg(long, default_value_t = false)]
    pub kit: bool,
    #[arg(long, default_value_t = false)]
    pub aire: bool,
    #[arg(long, default_value_t = false)]
    pub cabinas: bool,
    #[arg(long, default_value_t = false)]
    pub consola: bool,
    #[arg(long, default_value_t = false)]
    pub vbeam: bool,
    #[arg(long)]
    pub notes: Option<String>,
    /// Loan date (`YYYY-MM-DD`); today when omitted.
    #[arg(long)]
    pub date: Option<String>,
    /// Start time (`HH:MM`); now when omitted.
    #[arg(long)]
    pub time: Option<String>,
}

impl LendArgs {
    fn accessory(&self, accessory: Accessory) -> bool {
        match accessory {
            Accessory::Kit => self.kit,
            Accessory::Aire => self.aire,
            Accessory::Cabinas => self.cabinas,
            Accessory::Consola => self.consola,
            Accessory::Vbeam => self.vbeam,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Excel,
    Pdf,
}

impl ExportFormat {
    pub fn path(self) -> &'static str {
        match self {
            Self::Excel => "/export/excel",
            Self::Pdf => "/export/pdf",
        }
    }

    /// File name the server suggests for the download.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Excel => "historial_prestamos.xlsx",
            Self::Pdf => "historial_prestamos.pdf",
        }
    }
}

/// Local wall-clock time, UTC when the offset cannot be determined.
pub fn now() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    PrimitiveDateTime::new(now.date(), now.time())
}

async fn loaded_desk(api: &HttpApi) -> Result<Desk, CliError> {
    let mut desk = Desk::new(now());
    desk.initialize(api, now()).await?;
    Ok(desk)
}

pub async fn run_reference(api: &HttpApi) -> Result<(), CliError> {
    let desk = loaded_desk(api).await?;
    print!("{}", render::reference(desk.reference()));
    Ok(())
}

pub async fn run_pending(api: &HttpApi, search: Option<&str>) -> Result<(), CliError> {
    let mut desk = Desk::new(now());
    desk.reload(api).await?;
    if let Some(term) = search {
        desk.search(term);
    }
    print!("{}", render::pending_table(desk.table()));
    Ok(())
}

/// Enter `args` into the form the way a user would, field by field.
pub fn fill_form(desk: &mut Desk, args: &LendArgs) {
    if let Some(date) = &args.date {
        desk.set_date(date);
    }
    if let Some(time) = &args.time {
        desk.set_start_time(time);
    }
    desk.set_name(&args.name);
    if !desk.reference().is_location(&args.location) {
        tracing::warn!(location = %args.location, "unknown location");
    }
    desk.select_location(&args.location);
    desk.set_loaned_by(&args.loaned_by);
    if let Some(number) = &args.pc {
        desk.set_pc(true);
        desk.set_pc_number(number);
    }
    for accessory in Accessory::ALL {
        desk.set_accessory(accessory, args.accessory(accessory));
    }
    if let Some(notes) = &args.notes {
        desk.set_notes(notes);
    }
}

pub async fn run_lend(api: &HttpApi, args: LendArgs) -> Result<(), CliError> {
    let mut desk = loaded_desk(api).await?;
    fill_form(&mut desk, &args);
    let message = desk.submit(api, now()).await?;
    println!("{}", render::sanitize(&message));
    print!("{}", render::pending_table(desk.table()));
    Ok(())
}

pub async fn run_return(api: &HttpApi, loan_id: i64, received_by: &str) -> Result<(), CliError> {
    let mut desk = loaded_desk(api).await?;
    desk.open_return(loan_id).map_err(DeskError::from)?;
    desk.select_receiver(received_by);
    let message = desk.confirm_return(api).await?;
    println!("{}", render::sanitize(&message));
    print!("{}", render::pending_table(desk.table()));
    Ok(())
}

pub async fn run_export(api: &HttpApi, format: ExportFormat, out: Option<PathBuf>) -> Result<(), CliError> {
    let bytes = api.download(format.path()).await?;
    let path = out.unwrap_or_else(|| PathBuf::from(format.file_name()));
    std::fs::write(&path, &bytes).map_err(|source| CliError::Write { path: path.clone(), source })?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "report saved");
    println!("{}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
