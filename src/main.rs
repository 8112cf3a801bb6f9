pub mod args;
pub mod emit;
pub mod error;
pub mod reference;
pub mod vhost;

use {
    crate::{args::ManualFormat, error::EmitError},
    anyhow::{Context, Result},
    tracing::level_filters::LevelFilter,
};

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        | 0 => LevelFilter::WARN,
        | 1 => LevelFilter::INFO,
        | 2 => LevelFilter::DEBUG,
        | _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .compact()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cmd = crate::args::ClapArgumentLoader::load()?;
    init_logging(cmd.verbosity);

    match cmd.command {
        | crate::args::Command::Manual { path, format } => {
            std::fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            match format {
                | ManualFormat::Manpages => reference::build_manpages(&path),
                | ManualFormat::Markdown => reference::build_markdown(&path),
            }
        },
        | crate::args::Command::Autocomplete { path, shell } => {
            std::fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            reference::build_shell_completion(&path, &shell)
        },
        | crate::args::Command::Emit { subdomain, port } => {
            let request = match emit::Request::from_args(&cmd.program, subdomain, port) {
                | Ok(request) => request,
                | Err(err @ EmitError::Usage { .. }) => {
                    eprintln!("{}", err);
                    std::process::exit(1);
                },
                | Err(err) => return Err(err.into()),
            };
            let dir = emit::install_dir()?;
            let path = emit::emit(&request, &dir)?;
            println!("NGINX config file generated: {}", path.display());
            Ok(())
        },
    }
}
