//! Command-line argument parsing for the admin CLI.

use std::fmt;
use std::str::FromStr;

/// Collections that `list` can print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTarget {
    Users,
    Items,
    Categories,
    Comments,
    Notices,
    Files,
}

impl ListTarget {
    pub const ALL: [ListTarget; 6] = [
        ListTarget::Users,
        ListTarget::Items,
        ListTarget::Categories,
        ListTarget::Comments,
        ListTarget::Notices,
        ListTarget::Files,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListTarget::Users => "users",
            ListTarget::Items => "items",
            ListTarget::Categories => "categories",
            ListTarget::Comments => "comments",
            ListTarget::Notices => "notices",
            ListTarget::Files => "files",
        }
    }
}

impl fmt::Display for ListTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ListTarget::ALL
            .into_iter()
            .find(|target| target.as_str() == s)
            .ok_or_else(|| format!("unknown list target '{}'", s))
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Print the registered route table. `flat` overrides the configured
    /// flattening setting.
    Routes { flat: Option<bool> },
    /// Log in and print the token. Prompts for the password when absent.
    Login {
        name: String,
        password: Option<String>,
    },
    /// Show the signed-in admin and their roles
    Info,
    /// Print one backend collection as JSON
    List(ListTarget),
    /// Arguments that could not be parsed
    Invalid(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first argument is the program name. `--version` anywhere wins.
///
/// # Examples
///
/// ```
/// use lostfound_admin::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["lostfound-admin".to_string(), "routes".to_string(), "--flat".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Routes { flat: Some(true) });
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let args: Vec<String> = args.skip(1).collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        return CliCommand::Version;
    }

    let Some((command, rest)) = args.split_first() else {
        return CliCommand::Help;
    };

    match command.as_str() {
        "help" | "--help" | "-h" => CliCommand::Help,
        "routes" => parse_routes(rest),
        "login" => match rest {
            [name] => CliCommand::Login {
                name: name.clone(),
                password: None,
            },
            [name, password] => CliCommand::Login {
                name: name.clone(),
                password: Some(password.clone()),
            },
            _ => CliCommand::Invalid("usage: login <name> [password]".to_string()),
        },
        "info" => CliCommand::Info,
        "list" => match rest {
            [target] => match target.parse() {
                Ok(target) => CliCommand::List(target),
                Err(msg) => CliCommand::Invalid(msg),
            },
            _ => CliCommand::Invalid(format!("usage: list <{}>", list_targets())),
        },
        other => CliCommand::Invalid(format!("unknown command '{}'", other)),
    }
}

fn parse_routes(rest: &[String]) -> CliCommand {
    let mut flat = None;
    for arg in rest {
        match arg.as_str() {
            "--flat" => flat = Some(true),
            "--no-flat" => flat = Some(false),
            other => return CliCommand::Invalid(format!("unknown routes option '{}'", other)),
        }
    }
    CliCommand::Routes { flat }
}

pub(crate) fn list_targets() -> String {
    ListTarget::ALL
        .iter()
        .map(ListTarget::as_str)
        .collect::<Vec<_>>()
        .join("|")
}
