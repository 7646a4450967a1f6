use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod accounts_cmd;
mod attachments_cmd;
mod config;
mod goals_cmd;
mod payments_cmd;
mod render;
mod reports_cmd;
mod session_cmd;
mod state;
mod transactions_cmd;

use crate::transactions_cmd::FilterArgs;

#[derive(Parser, Debug)]
#[command(name = "pocketbook", version, about = "Pocketbook personal-finance CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and persist the session token
    Login {
        /// Email; prompted for when omitted
        #[arg(long)]
        email: Option<String>,
    },

    /// Invalidate the token and forget the local session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Transaction listing and export
    Tx {
        #[command(subcommand)]
        command: TxCommand,
    },

    /// Payments: create, edit, delete, line items
    Pay {
        #[command(subcommand)]
        command: PayCommand,
    },

    /// Accounts
    Account {
        #[command(subcommand)]
        command: AccountCommand,
    },

    /// Savings goals
    Goal {
        #[command(subcommand)]
        command: GoalCommand,
    },

    /// Attachments on a transaction
    Attach {
        #[command(subcommand)]
        command: AttachCommand,
    },

    /// Reporting totals
    Report {
        #[command(subcommand)]
        command: ReportCommand,
    },

    /// Config file management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum TxCommand {
    /// List transactions under an optional filter
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Walk every page instead of just the first
        #[arg(long)]
        all: bool,

        /// Fetch one specific page
        #[arg(long, conflicts_with = "all")]
        page: Option<u32>,
    },

    /// Show one transaction
    Show { id: i64 },

    /// Export matching transactions to CSV (walks every page)
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output path
        #[arg(long)]
        out: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum PayCommand {
    /// Create a payment
    Add {
        name: String,
        amount: f64,

        /// income | expense | transfer | withdrawal
        #[arg(long, default_value = "expense")]
        kind: String,

        /// Defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Account id the payment belongs to
        #[arg(long)]
        account: i64,

        /// Mark as a scheduled (future) payment
        #[arg(long)]
        scheduled: bool,

        #[arg(long)]
        notes: Option<String>,

        /// Line item as "name:amount[:quantity]" (repeatable)
        #[arg(long = "item")]
        items: Vec<String>,
    },

    /// Edit fields of a payment
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        amount: Option<f64>,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        account: Option<i64>,
        #[arg(long)]
        scheduled: Option<bool>,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a payment
    Rm { id: i64 },

    /// List a payment's line items
    Items {
        id: i64,
        /// Walk every page
        #[arg(long)]
        all: bool,
    },
}

#[derive(Subcommand, Debug)]
enum AccountCommand {
    /// List accounts with balances
    List,

    /// Show one account
    Show { id: i64 },

    /// Create an account
    Add {
        name: String,
        /// bank | card | cash | savings | other
        #[arg(long, default_value = "bank")]
        kind: String,
        /// Opening balance
        #[arg(long, default_value_t = 0.0)]
        balance: f64,
    },

    /// Rename or reclassify an account
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        kind: Option<String>,
    },

    /// Delete an account
    Rm { id: i64 },
}

#[derive(Subcommand, Debug)]
enum GoalCommand {
    /// List savings goals with progress
    List {
        /// Walk every page
        #[arg(long)]
        all: bool,
    },

    /// Create a goal
    Add {
        name: String,
        target: f64,
        #[arg(long)]
        deadline: Option<NaiveDate>,
    },

    /// Edit a goal
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        target: Option<f64>,
        #[arg(long)]
        saved: Option<f64>,
        #[arg(long)]
        deadline: Option<NaiveDate>,
    },

    /// Delete a goal
    Rm { id: i64 },
}

#[derive(Subcommand, Debug)]
enum AttachCommand {
    /// Upload a file to a transaction
    Upload {
        /// Transaction id
        tx: i64,
        /// File to upload
        file: PathBuf,
    },

    /// List a transaction's attachments
    List { tx: i64 },

    /// Delete an attachment
    Rm { id: i64 },
}

#[derive(Subcommand, Debug)]
enum ReportCommand {
    /// Income/expense totals for a date range
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default ~/.pocketbook/config.toml
    Init,

    /// Print the effective config
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pocketbook=info,pocketbook_api=info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config()?;

    match cli.command {
        Command::Login { email } => session_cmd::login(&cfg, email).await?,
        Command::Logout => session_cmd::logout(&cfg).await?,
        Command::Whoami => session_cmd::whoami(&cfg).await?,

        Command::Tx { command } => match command {
            TxCommand::List { filter, all, page } => {
                transactions_cmd::list(&cfg, &filter, all, page).await?;
            }
            TxCommand::Show { id } => transactions_cmd::show(&cfg, id).await?,
            TxCommand::Export { filter, out } => {
                transactions_cmd::export(&cfg, &filter, &out).await?;
            }
        },

        Command::Pay { command } => match command {
            PayCommand::Add {
                name,
                amount,
                kind,
                date,
                account,
                scheduled,
                notes,
                items,
            } => {
                payments_cmd::add(&cfg, name, amount, &kind, date, account, scheduled, notes, &items)
                    .await?;
            }
            PayCommand::Edit { id, name, amount, date, account, scheduled, notes } => {
                payments_cmd::edit(&cfg, id, name, amount, date, account, scheduled, notes).await?;
            }
            PayCommand::Rm { id } => payments_cmd::rm(&cfg, id).await?,
            PayCommand::Items { id, all } => payments_cmd::items(&cfg, id, all).await?,
        },

        Command::Account { command } => match command {
            AccountCommand::List => accounts_cmd::list(&cfg).await?,
            AccountCommand::Show { id } => accounts_cmd::show(&cfg, id).await?,
            AccountCommand::Add { name, kind, balance } => {
                accounts_cmd::add(&cfg, name, &kind, balance).await?;
            }
            AccountCommand::Edit { id, name, kind } => {
                accounts_cmd::edit(&cfg, id, name, kind.as_deref()).await?;
            }
            AccountCommand::Rm { id } => accounts_cmd::rm(&cfg, id).await?,
        },

        Command::Goal { command } => match command {
            GoalCommand::List { all } => goals_cmd::list(&cfg, all).await?,
            GoalCommand::Add { name, target, deadline } => {
                goals_cmd::add(&cfg, name, target, deadline).await?;
            }
            GoalCommand::Edit { id, name, target, saved, deadline } => {
                goals_cmd::edit(&cfg, id, name, target, saved, deadline).await?;
            }
            GoalCommand::Rm { id } => goals_cmd::rm(&cfg, id).await?,
        },

        Command::Attach { command } => match command {
            AttachCommand::Upload { tx, file } => attachments_cmd::upload(&cfg, tx, &file).await?,
            AttachCommand::List { tx } => attachments_cmd::list(&cfg, tx).await?,
            AttachCommand::Rm { id } => attachments_cmd::rm(&cfg, id).await?,
        },

        Command::Report { command } => match command {
            ReportCommand::Summary { filter } => reports_cmd::summary(&cfg, &filter).await?,
        },

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => config::show_config(&cfg)?,
        },
    }

    Ok(())
}
