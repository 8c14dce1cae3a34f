//! cli::usage
//!
//! Usage text, rendered from the command registry.
//!
//! Each command carries its own [`CommandUsage`]; the full help lists every
//! registered command in registration order, so a command cannot be
//! registered without appearing in help.

use super::registry::CommandRegistry;
use crate::ui::output::{command, optional, required};

/// A positional argument in a command's synopsis.
#[derive(Debug, Clone, Copy)]
pub struct ArgumentDoc {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

/// A command-line option.
#[derive(Debug, Clone, Copy)]
pub struct OptionDoc {
    /// Flag spelling, e.g. `--port`
    pub flag: &'static str,
    pub description: &'static str,
}

/// Everything help shows for one command.
#[derive(Debug, Clone, Copy)]
pub struct CommandUsage {
    /// One-line description
    pub summary: &'static str,
    pub arguments: &'static [ArgumentDoc],
    pub options: &'static [OptionDoc],
}

/// Options accepted before or after any command.
pub const GLOBAL_OPTIONS: &[OptionDoc] = &[
    OptionDoc {
        flag: "-c, --config",
        description: "config file to use (default: rig.config.toml)",
    },
    OptionDoc {
        flag: "-h, --help",
        description: "display this help message",
    },
    OptionDoc {
        flag: "-v, --version",
        description: "print rig's version",
    },
    OptionDoc {
        flag: "    --debug",
        description: "enable debug logging",
    },
];

/// Render the full usage text, one entry per line.
pub fn render(registry: &CommandRegistry) -> Vec<String> {
    let names: Vec<&str> = registry.names().collect();
    let mut lines = vec![
        format!(
            "Usage: rig ({}) {}",
            names
                .iter()
                .map(|name| command(name).to_string())
                .collect::<Vec<_>>()
                .join("|"),
            optional("[options]")
        ),
        String::new(),
        "Options:".to_string(),
    ];
    lines.extend(option_lines(GLOBAL_OPTIONS, "  "));

    lines.push(String::new());
    lines.push("Commands:".to_string());

    for entry in registry.entries() {
        let usage = entry.usage();
        lines.push(String::new());
        lines.push(format!("  {}", synopsis(entry.name().as_str(), usage)));
        lines.push(format!("    {}", usage.summary));

        if !usage.arguments.is_empty() {
            lines.push(String::new());
            lines.push("    Arguments:".to_string());
            let width = usage.arguments.iter().map(|a| a.name.len()).max().unwrap_or(0);
            for arg in usage.arguments {
                let name = format!("{:<width$}", arg.name, width = width);
                let styled = if arg.required {
                    required(&name)
                } else {
                    optional(&name)
                };
                lines.push(format!("      {}  {}", styled, arg.description));
            }
        }

        if !usage.options.is_empty() {
            lines.push(String::new());
            lines.push("    Options:".to_string());
            lines.extend(option_lines(usage.options, "      "));
        }
    }

    lines
}

/// `rig <name> <required> [optional] [options]`
pub fn synopsis(name: &str, usage: &CommandUsage) -> String {
    let mut parts = vec!["rig".to_string(), command(name).to_string()];
    for arg in usage.arguments {
        if arg.required {
            parts.push(required(&format!("<{}>", arg.name)).to_string());
        } else {
            parts.push(optional(&format!("[{}]", arg.name)).to_string());
        }
    }
    if !usage.options.is_empty() {
        parts.push(optional("[options]").to_string());
    }
    parts.join(" ")
}

fn option_lines(options: &[OptionDoc], indent: &str) -> Vec<String> {
    let width = options.iter().map(|o| o.flag.len()).max().unwrap_or(0);
    options
        .iter()
        .map(|o| {
            let flag = format!("{:<width$}", o.flag, width = width);
            format!("{}{}  {}", indent, optional(&flag), o.description)
        })
        .collect()
}
