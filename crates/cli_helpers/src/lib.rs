//! Helper types and functions for the `pwgen` command line executable.

pub mod messages;

/// Command tree used to print help output as JSON.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CommandTree {
    /// Name of the command.
    pub name: String,
    /// Names of the arguments accepted by the command.
    pub args: Vec<String>,
    /// Subcommands.
    pub commands: Vec<CommandTree>,
}

impl From<&clap::Command> for CommandTree {
    fn from(value: &clap::Command) -> Self {
        CommandTree {
            name: value.get_name().to_string(),
            args: value
                .get_arguments()
                .map(|a| a.get_id().to_string())
                .collect(),
            commands: value.get_subcommands().map(|c| c.into()).collect(),
        }
    }
}
