use crate::gateway::SharedGateway;
use crate::presentation::Prompt;
use crate::shell::{ShellActor, ShellClient, ShellContext, ShellError};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

const SHELL_BUFFER: usize = 32;

/// Owns the running shell task.
///
/// # Example
///
/// ```ignore
/// let gateway = Arc::new(HttpGateway::new("http://localhost:5000/api")?);
/// let system = EmpleadoSystem::start(gateway, Arc::new(TerminalPrompt::new(false))).await?;
///
/// let empleados = system.shell.empleados().await?;
/// system.shell.delete(EmpleadoId(7)).await?;
///
/// system.shutdown().await?;
/// ```
pub struct EmpleadoSystem {
    /// Client for the shell actor.
    pub shell: ShellClient,

    handle: JoinHandle<()>,
}

impl EmpleadoSystem {
    /// Spawns the shell with its dependencies injected. Nothing is fetched yet.
    pub fn new(gateway: SharedGateway, prompt: Arc<dyn Prompt>) -> Self {
        let (actor, shell) = ShellActor::new(SHELL_BUFFER);
        let handle = tokio::spawn(actor.run(ShellContext { gateway, prompt }));
        Self { shell, handle }
    }

    /// Spawns the shell and performs the initial collection load.
    pub async fn start(
        gateway: SharedGateway,
        prompt: Arc<dyn Prompt>,
    ) -> Result<Self, ShellError> {
        let system = Self::new(gateway, prompt);
        let empleados = system.shell.refresh().await?;
        info!(size = empleados.len(), "System started");
        Ok(system)
    }

    /// Drops the client and waits for the shell task to finish.
    ///
    /// Clones of [`EmpleadoSystem::shell`] held elsewhere keep the task alive,
    /// so this only returns once they are gone too.
    pub async fn shutdown(self) -> Result<(), ShellError> {
        info!("Shutting down system...");
        drop(self.shell);

        if let Err(e) = self.handle.await {
            error!("Shell task failed: {:?}", e);
            return Err(ShellError::TaskFailed(e.to_string()));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
