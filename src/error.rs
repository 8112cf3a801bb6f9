use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// Subdomain or port absent from the invocation.
    #[error("Usage: {program} <subdomain> <port>")]
    Usage { program: String },

    #[error("Failed to locate the installation directory")]
    Locate(#[source] std::io::Error),

    #[error("Failed to render virtual host for: {hostname}")]
    Render {
        hostname: String,
        #[source]
        source: handlebars::RenderError,
    },

    #[error("Failed to write config file to: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
