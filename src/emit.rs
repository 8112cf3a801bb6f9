use {
    crate::{error::EmitError, vhost::VirtualHost},
    std::path::{Path, PathBuf},
};

/// A validated invocation: both positional values were supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub subdomain: String,
    pub port: String,
}

impl Request {
    /// Empty values are treated like absent ones.
    pub fn from_args(program: &str, subdomain: Option<String>, port: Option<String>) -> Result<Self, EmitError> {
        match (subdomain, port) {
            | (Some(subdomain), Some(port)) if !subdomain.is_empty() && !port.is_empty() => Ok(Self { subdomain, port }),
            | _ => Err(EmitError::Usage {
                program: program.to_string(),
            }),
        }
    }
}

/// Directory holding the running executable.
pub fn install_dir() -> Result<PathBuf, EmitError> {
    let exe = std::env::current_exe().map_err(EmitError::Locate)?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        EmitError::Locate(std::io::Error::other(format!(
            "executable path has no parent: {}",
            exe.display()
        )))
    })
}

/// Renders the virtual host for `request` and writes it to `<dir>/<subdomain>.config`,
/// replacing any previous content. Returns the written path.
pub fn emit(request: &Request, dir: &Path) -> Result<PathBuf, EmitError> {
    let vhost = VirtualHost::new(request.subdomain.as_str(), request.port.as_str());
    let path = dir.join(vhost.file_name());
    tracing::debug!(hostname = %vhost.hostname, upstream_port = %vhost.port, "rendering virtual host");

    let config = vhost.render()?;
    std::fs::write(&path, config.as_bytes()).map_err(|source| EmitError::Write {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = config.len(), "wrote virtual host");
    Ok(path)
}
