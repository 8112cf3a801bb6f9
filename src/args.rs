use {
    anyhow::Result,
    clap::{Arg, ArgAction},
    std::{ffi::OsString, path::PathBuf, str::FromStr},
};

pub(crate) const BIN_NAME: &str = "vhostgen";

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum ManualFormat {
    Manpages,
    Markdown,
}

#[derive(Debug)]
pub(crate) struct CallArgs {
    /// Basename of the invoked executable, used in the usage line.
    pub program: String,
    pub verbosity: u8,
    pub command: Command,
}

#[derive(Debug)]
pub(crate) enum Command {
    Manual {
        path: PathBuf,
        format: ManualFormat,
    },
    Autocomplete {
        path: PathBuf,
        shell: clap_complete::Shell,
    },
    /// Presence of both values is checked by the emitter, not by clap.
    Emit {
        subdomain: Option<String>,
        port: Option<String>,
    },
}

pub(crate) struct ClapArgumentLoader {}

impl ClapArgumentLoader {
    pub(crate) fn root_command() -> clap::Command {
        clap::Command::new(BIN_NAME)
            .version(env!("CARGO_PKG_VERSION"))
            .about("Generates an NGINX reverse-proxy virtual host for a subdomain.")
            .author("cchexcode <alexanderh.weber@outlook.com>")
            .override_usage(format!("{} <subdomain> <port>", BIN_NAME))
            .args([
                Arg::new("subdomain")
                    .index(1)
                    .required(false)
                    .allow_hyphen_values(true)
                    .value_parser(clap::value_parser!(OsString))
                    .help("Label prepended to the parent domain; also the output file name."),
                Arg::new("port")
                    .index(2)
                    .required(false)
                    .allow_hyphen_values(true)
                    .value_parser(clap::value_parser!(OsString))
                    .help("Local port the virtual host proxies to."),
                Arg::new("extra")
                    .index(3)
                    .required(false)
                    .num_args(1..)
                    .action(ArgAction::Append)
                    .allow_hyphen_values(true)
                    .value_parser(clap::value_parser!(OsString))
                    .hide(true),
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .help("Raises the log level on stderr (repeatable).")
                    .action(ArgAction::Count),
                Arg::new("manual")
                    .long("manual")
                    .value_name("DIR")
                    .help("Renders the manual into DIR instead of emitting a config.")
                    .conflicts_with_all(["autocomplete", "subdomain", "port", "extra"]),
                Arg::new("manual-format")
                    .long("manual-format")
                    .value_parser(["manpages", "markdown"])
                    .default_value("manpages"),
                Arg::new("autocomplete")
                    .long("autocomplete")
                    .value_name("DIR")
                    .help("Renders a shell completion script into DIR instead of emitting a config.")
                    .conflicts_with_all(["subdomain", "port", "extra"])
                    .requires("shell"),
                Arg::new("shell")
                    .long("shell")
                    .value_parser(["bash", "zsh", "fish", "elvish", "powershell"])
                    .requires("autocomplete"),
            ])
    }

    pub(crate) fn load() -> Result<CallArgs> {
        Self::load_from(std::env::args_os())
    }

    pub(crate) fn load_from<I, T>(itr: I) -> Result<CallArgs>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = itr.into_iter().map(Into::into).collect();
        let program = args
            .first()
            .map(PathBuf::from)
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_else(|| BIN_NAME.to_string());

        let command = Self::root_command().try_get_matches_from(args).unwrap_or_else(|e| e.exit());

        let cmd = if let Some(out) = command.get_one::<String>("manual") {
            Command::Manual {
                path: out.into(),
                format: match command.get_one::<String>("manual-format").map(String::as_str) {
                    | Some("manpages") | None => ManualFormat::Manpages,
                    | Some("markdown") => ManualFormat::Markdown,
                    | Some(_) => return Err(anyhow::anyhow!("argument \"manual-format\": unknown format")),
                },
            }
        } else if let Some(out) = command.get_one::<String>("autocomplete") {
            let shell = command
                .get_one::<String>("shell")
                .ok_or_else(|| anyhow::anyhow!("argument \"shell\": missing"))?;
            Command::Autocomplete {
                path: out.into(),
                shell: clap_complete::Shell::from_str(shell)
                    .map_err(|e| anyhow::anyhow!("argument \"shell\": {}", e))?,
            }
        } else {
            Command::Emit {
                subdomain: lossy(command.get_one::<OsString>("subdomain")),
                port: lossy(command.get_one::<OsString>("port")),
            }
        };

        Ok(CallArgs {
            program,
            verbosity: command.get_count("verbose"),
            command: cmd,
        })
    }
}

/// Undecodable bytes become U+FFFD instead of rejecting the invocation.
fn lossy(value: Option<&OsString>) -> Option<String> {
    value.map(|v| v.to_string_lossy().into_owned())
}
