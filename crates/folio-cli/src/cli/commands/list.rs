//! Commands listing handler.

use anyhow::{Context, Result};
use folio_core::commands::COMMANDS;
use serde::Serialize;

#[derive(Serialize)]
struct CommandInfo<'a> {
    name: &'a str,
    description: &'a str,
}

pub fn run(json: bool) -> Result<()> {
    if json {
        let listing: Vec<CommandInfo<'_>> = COMMANDS
            .iter()
            .map(|command| CommandInfo {
                name: command.name,
                description: command.description,
            })
            .collect();
        let out = serde_json::to_string_pretty(&listing).context("serialize command listing")?;
        println!("{out}");
    } else {
        for command in COMMANDS {
            println!("{:<13} {}", command.name, command.description);
        }
    }
    Ok(())
}
