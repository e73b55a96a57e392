use anyhow::Context;
use clap::{Parser, Subcommand};
use empleado_crud::config::Settings;
use empleado_crud::gateway::HttpGateway;
use empleado_crud::lifecycle::{setup_tracing, EmpleadoSystem};
use empleado_crud::model::{EmpleadoField, EmpleadoId};
use empleado_crud::presentation::{render_table, Notice, TerminalPrompt};
use empleado_crud::shell::{DeleteOutcome, ShellClient, ShellError, SubmitOutcome};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "empleados")]
#[command(about = "List, create, edit and delete employees on an Empleado API")]
struct Cli {
    /// Base URL of the API (overrides EMPLEADOS_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every employee
    List,
    /// Load one employee into an edit form and print it
    Show { id: u32 },
    /// Create an employee
    New {
        #[arg(long)]
        nombre: String,
        #[arg(long)]
        correo: String,
        #[arg(long)]
        sueldo: String,
    },
    /// Change fields of an existing employee
    Edit {
        id: u32,
        #[arg(long)]
        nombre: Option<String>,
        #[arg(long)]
        correo: Option<String>,
        #[arg(long)]
        sueldo: Option<String>,
    },
    /// Delete an employee after confirmation
    Delete {
        id: u32,
        /// Skip the confirmation question
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let cli = Cli::parse();
    let settings = match cli.api_url {
        Some(url) => Settings::new(url),
        None => Settings::from_env(),
    }
    .context("could not load API settings")?;
    let gateway = Arc::new(HttpGateway::from_settings(&settings)?);
    info!(api_url = %gateway.base_url(), "Using API");

    let assume_yes = matches!(cli.command, Command::Delete { yes: true, .. });
    let system = EmpleadoSystem::new(gateway, Arc::new(TerminalPrompt::new(assume_yes)));

    let result = run(&system.shell, cli.command).await;
    system.shutdown().await?;

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            TerminalPrompt::alert(&Notice::from(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run(shell: &ShellClient, command: Command) -> Result<(), ShellError> {
    match command {
        Command::List => {
            let empleados = shell.refresh().await?;
            print!("{}", render_table(&empleados));
        }
        Command::Show { id } => {
            let view = shell.open_edit(EmpleadoId(id)).await?;
            shell.cancel().await?;
            if let Some(error) = view.error {
                return Err(error.into());
            }
            println!("{}", view.title);
            println!("  Nombre: {}", view.draft.nombre);
            println!("  Correo: {}", view.draft.correo);
            println!("  Sueldo: {}", view.draft.sueldo);
        }
        Command::New {
            nombre,
            correo,
            sueldo,
        } => {
            shell.open_create().await?;
            let fields = [
                (EmpleadoField::Nombre, Some(nombre)),
                (EmpleadoField::Correo, Some(correo)),
                (EmpleadoField::Sueldo, Some(sueldo)),
            ];
            submit_form(shell, fields).await?;
        }
        Command::Edit {
            id,
            nombre,
            correo,
            sueldo,
        } => {
            let view = shell.open_edit(EmpleadoId(id)).await?;
            if let Some(error) = view.error {
                shell.cancel().await?;
                return Err(error.into());
            }
            let fields = [
                (EmpleadoField::Nombre, nombre),
                (EmpleadoField::Correo, correo),
                (EmpleadoField::Sueldo, sueldo),
            ];
            submit_form(shell, fields).await?;
        }
        Command::Delete { id, .. } => match shell.delete(EmpleadoId(id)).await? {
            DeleteOutcome::Deleted => {
                TerminalPrompt::alert(&Notice::success("Eliminado!", "Empleado eliminado"));
            }
            DeleteOutcome::DeletedListStale(e) => {
                warn!(error = %e, "Deleted but the list could not be reloaded");
                TerminalPrompt::alert(&Notice::success("Eliminado!", "Empleado eliminado"));
            }
            DeleteOutcome::Declined => info!(id, "Nothing deleted"),
        },
    }
    Ok(())
}

/// Fills the open form and submits it. The form is closed on any failure.
async fn submit_form(
    shell: &ShellClient,
    fields: [(EmpleadoField, Option<String>); 3],
) -> Result<(), ShellError> {
    let outcome = async {
        for (field, value) in fields {
            if let Some(value) = value {
                shell.set_field(field, value).await?;
            }
        }
        shell.submit().await
    }
    .await;

    match outcome {
        Ok(SubmitOutcome::Committed) => {
            TerminalPrompt::alert(&Notice::success("Guardado!", "Empleado guardado"));
            Ok(())
        }
        Ok(SubmitOutcome::CommittedListStale(e)) => {
            warn!(error = %e, "Saved but the list could not be reloaded");
            TerminalPrompt::alert(&Notice::success("Guardado!", "Empleado guardado"));
            Ok(())
        }
        Err(e) => {
            let _ = shell.cancel().await;
            Err(e)
        }
    }
}
