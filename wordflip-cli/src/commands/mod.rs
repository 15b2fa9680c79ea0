//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use wordflip_api::Operation;

pub mod process;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract the words of each input, in order
    Split(process::ProcessArgs),

    /// Reverse every word of each input in place
    Reverse(process::ProcessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available operations
    Operations,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(Operation::Split),
            Commands::Reverse(args) => args.execute(Operation::Reverse),
            Commands::List { subcommand } => {
                for line in subcommand.entries() {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Lines printed by `list`
    pub fn entries(&self) -> Vec<String> {
        match self {
            ListCommands::Operations => Operation::ALL
                .iter()
                .map(|op| {
                    let about = match op {
                        Operation::Split => "extract the ordered list of words",
                        Operation::Reverse => "reverse every word, keep everything else in place",
                    };
                    format!("{op:<10} {about}")
                })
                .collect(),
            ListCommands::Formats => process::OutputFormat::value_variants()
                .iter()
                .filter_map(|format| format.to_possible_value())
                .map(|value| value.get_name().to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn process_args() -> process::ProcessArgs {
        process::ProcessArgs {
            input: vec!["test.txt".to_string()],
            output: None,
            format: Some(process::OutputFormat::Text),
            config: None,
            no_spans: false,
            parallel: false,
            threads: None,
            quiet: false,
            verbose: 0,
        }
    }

    #[test]
    fn test_commands_debug_format() {
        let split_cmd = Commands::Split(process_args());
        let debug_str = format!("{:?}", split_cmd);
        assert!(debug_str.contains("Split"));
        assert!(debug_str.contains("test.txt"));

        let list_cmd = Commands::List {
            subcommand: ListCommands::Operations,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Operations"));
    }

    #[test]
    fn test_list_operations() {
        let entries = ListCommands::Operations.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].starts_with("split"));
        assert!(entries[1].starts_with("reverse"));
    }

    #[test]
    fn test_list_formats() {
        assert_eq!(
            ListCommands::Formats.entries(),
            ["text", "json", "markdown"]
        );
    }

    #[test]
    fn test_list_executes() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Formats,
        };
        assert!(list_cmd.execute().is_ok());
    }
}
