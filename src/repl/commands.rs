//! Command Table
//!
//! The fixed set of REPL commands, looked up by name.

// == Command ==
/// Every command the REPL understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

impl Command {
    /// All commands, in the order `help` lists them.
    pub const ALL: [Command; 8] = [
        Command::Help,
        Command::Exit,
        Command::Map,
        Command::MapBack,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
    ];

    /// Looks up a command by its exact (already lower-cased) name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => "Displays the next page of location areas",
            Command::MapBack => "Displays the previous page of location areas",
            Command::Explore => "Lists the Pokemon found in a location area",
            Command::Catch => "Attempts to catch a Pokemon",
            Command::Inspect => "Displays details of a caught Pokemon",
            Command::Pokedex => "Lists every Pokemon you have caught",
        }
    }

    /// Usage line for commands that take an argument.
    pub fn usage(self) -> Option<&'static str> {
        match self {
            Command::Explore => Some("usage: explore <area_name>"),
            Command::Catch => Some("usage: catch <pokemon_name>"),
            Command::Inspect => Some("usage: inspect <pokemon_name>"),
            _ => None,
        }
    }
}
