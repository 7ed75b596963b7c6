use std::{error::Error as StdError, fmt};

pub type BoxError = Box<dyn StdError + Send + Sync>;

type Hook = Box<dyn FnOnce() -> Result<(), BoxError> + Send>;

/// Named cleanup steps run once the server has stopped, in the order they
/// were added. Every hook runs even if an earlier one failed.
#[derive(Default)]
pub struct ShutdownGroup {
    hooks: Vec<(String, Hook)>,
}

impl fmt::Debug for ShutdownGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.hooks.iter().map(|(name, _)| name))
            .finish()
    }
}

impl ShutdownGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        name: impl Into<String>,
        hook: impl FnOnce() -> Result<(), BoxError> + Send + 'static,
    ) {
        self.hooks.push((name.into(), Box::new(hook)));
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn close(self) -> Result<(), ShutdownError> {
        let mut errors = vec![];
        for (name, hook) in self.hooks {
            tracing::debug!(hook = %name, "running shutdown hook");
            if let Err(err) = hook() {
                errors.push((name, err));
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ShutdownError { errors })
        }
    }
}

/// Every hook that failed, joined with `; `.
#[derive(Debug)]
pub struct ShutdownError {
    pub errors: Vec<(String, BoxError)>,
}

impl StdError for ShutdownError {}

impl fmt::Display for ShutdownError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, err)) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", name, err)?;
        }
        Ok(())
    }
}

/// Resolves on SIGINT, SIGTERM or SIGQUIT (only Ctrl-C outside Unix).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match (signal(SignalKind::terminate()), signal(SignalKind::quit())) {
            (Ok(mut term), Ok(mut quit)) => {
                tokio::select! {
                    _ = term.recv() => {},
                    _ = quit.recv() => {},
                }
            }
            _ => {
                tracing::error!("cannot listen for SIGTERM/SIGQUIT");
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
