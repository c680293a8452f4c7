//! Command line front end driving the configuration backend directly.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use dbms_profiles::backend::http::HttpTransport;
use dbms_profiles::backend::FormBackend;
use dbms_profiles::domain::copy_request::CopySource;
use dbms_profiles::domain::profile_type::{FieldGroup, ProfileType, ProfileTypeKey};
use dbms_profiles::domain::types::{DbId, DriverTypeId, ProfileId, TypeName};
use dbms_profiles::forms::connection::ConnectionConfigForm;
use dbms_profiles::models::config::{AdminConfig, DEFAULT_CONFIG_PATH};
use dbms_profiles::services::connection_test::{ConnectionTestPanel, test_connection};
use dbms_profiles::services::copy_workflow::{CopyOutcome, TypeCopyWorkflow, request_copy};
use dbms_profiles::services::editor::{ProfileTypeEditor, delete_profile_type};
use dbms_profiles::services::prompt::UserPrompt;
use dbms_profiles::services::{Completion, ServiceResult};

#[derive(Parser)]
#[command(name = "profile-admin", about = "Manage DBMS profile types from the terminal")]
struct Cli {
    /// YAML configuration file; `APP_*` variables override it.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Answer every confirmation with yes.
    #[arg(long, short = 'y', global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Test a connection configuration given as `name=value` pairs.
    Test {
        #[arg(value_parser = parse_pair, required = true)]
        fields: Vec<(String, String)>,
    },
    /// Print the sample DSN for a database and host.
    Dsn {
        #[arg(long)]
        db: String,
        #[arg(long)]
        host: String,
    },
    /// Copy a driver type into a profile type.
    Copy {
        #[arg(long)]
        db: String,
        #[arg(long = "type")]
        type_id: i32,
        #[arg(long)]
        type_name: String,
        /// Profile type receiving the copy; defaults to the source type.
        #[arg(long)]
        target: Option<i32>,
    },
    /// Delete the details of one profile type.
    Delete {
        #[arg(long)]
        profile: i32,
        #[arg(long = "type")]
        type_id: i32,
    },
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("expected name=value, got `{raw}`"))
}

/// Terminal dialogs: confirmations read a line from stdin.
struct TerminalPrompt {
    assume_yes: bool,
}

impl UserPrompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            log::info!("{message} yes (--yes)");
            return true;
        }

        print!("{message} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(err) => {
                log::error!("Failed to read answer: {err}");
                false
            }
        }
    }

    fn alert(&self, message: &str) {
        println!("{message}");
    }
}

fn execute(cli: Cli, config: AdminConfig) -> ServiceResult<ExitCode> {
    let prompt = TerminalPrompt {
        assume_yes: cli.yes,
    };

    match cli.command {
        Command::Dsn { db, host } => {
            println!("{}", config.dsn_template().render(&db, &host));
            Ok(ExitCode::SUCCESS)
        }
        Command::Test { fields } => {
            let backend = FormBackend::new(HttpTransport::new(config.endpoint)?);
            let mut panel = ConnectionTestPanel::new();
            let form = ConnectionConfigForm::new(fields);
            let completion = test_connection(&mut panel, &form, &backend)?;
            println!("{}", panel.indicator().message());
            Ok(match completion {
                Completion::Applied => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            })
        }
        Command::Copy {
            db,
            type_id,
            type_name,
            target,
        } => {
            let backend = FormBackend::new(HttpTransport::new(config.endpoint)?);
            let source = CopySource::new(
                DbId::new(db)?,
                DriverTypeId::new(type_id)?,
                TypeName::new(type_name)?,
            );
            let target = target.map(DriverTypeId::new).transpose()?;

            let mut workflow = TypeCopyWorkflow::new();
            let preselected = workflow.open(source);
            let target = target.unwrap_or(preselected);

            match request_copy(&mut workflow, target, &backend, &prompt)? {
                CopyOutcome::Copied(copied) => {
                    println!(
                        "Copy successful: {} is now type {} of profile {}",
                        copied.type_name, copied.target_type_id, copied.profile
                    );
                    Ok(ExitCode::SUCCESS)
                }
                CopyOutcome::Declined | CopyOutcome::Stale => Ok(ExitCode::SUCCESS),
                CopyOutcome::Failed(message) => {
                    eprintln!("{message}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Delete { profile, type_id } => {
            let backend = FormBackend::new(HttpTransport::new(config.endpoint)?);
            let key = ProfileTypeKey::new(ProfileId::new(profile)?, DriverTypeId::new(type_id)?);
            let mut editor = ProfileTypeEditor::new();
            editor.bind(ProfileType::new(
                key,
                FieldGroup::default(),
                FieldGroup::default(),
                true,
            ));

            match delete_profile_type(&mut editor, key, &backend, &prompt)? {
                Completion::Rejected(_) => Ok(ExitCode::FAILURE),
                _ => Ok(ExitCode::SUCCESS),
            }
        }
    }
}

fn main() -> ExitCode {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    let config = match AdminConfig::load(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading config: {err}");
            return ExitCode::FAILURE;
        }
    };

    match execute(cli, config) {
        Ok(code) => code,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
