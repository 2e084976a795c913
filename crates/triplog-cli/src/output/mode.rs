use crate::cli::{Commands, TripCommand};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    let json = match command {
        Commands::Trip { command } => match command {
            TripCommand::Add { json, .. }
            | TripCommand::List { json }
            | TripCommand::Clear { json, .. } => *json,
        },
        Commands::Summary { json, .. } | Commands::Export { json, .. } => *json,
    };

    if json { OutputMode::Json } else { OutputMode::Text }
}
