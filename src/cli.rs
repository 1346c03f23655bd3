use clap::Parser;
use clap::Subcommand;

/// Friendbook - a small PostgreSQL-backed list of friends.
#[derive(Parser, Debug)]
#[clap(author, about)]
pub struct Args {
    #[clap(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Reset the store, add Tomas and print everyone (default).
    Demo,
    /// Create the friends table and reset it to the seed records.
    Init,
    /// Print all friends ordered by name.
    List {
        /// Print a JSON array instead of text lines.
        #[clap(long)]
        json: bool,
    },
    /// Add a friend.
    Add {
        /// Name
        #[clap(required = true)]
        name: String,
        /// Nickname
        #[clap(long, short = 'n')]
        nick: Option<String>,
    },
}

impl Args {
    pub fn command(&self) -> Cmd {
        self.cmd.clone().unwrap_or(Cmd::Demo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_demo() {
        let args = Args::parse_from(["friendbook"]);
        assert_eq!(args.command(), Cmd::Demo);
    }

    #[test]
    fn test_add_with_nick() {
        let args = Args::parse_from(["friendbook", "add", "Tomas", "--nick", "Tom"]);
        assert_eq!(
            args.command(),
            Cmd::Add {
                name: "Tomas".to_string(),
                nick: Some("Tom".to_string()),
            }
        );
    }

    #[test]
    fn test_add_without_nick() {
        let args = Args::parse_from(["friendbook", "add", "Lisa"]);
        assert_eq!(
            args.command(),
            Cmd::Add {
                name: "Lisa".to_string(),
                nick: None,
            }
        );
    }

    #[test]
    fn test_add_requires_name() {
        assert!(Args::try_parse_from(["friendbook", "add"]).is_err());
    }

    #[test]
    fn test_list_json_flag() {
        let args = Args::parse_from(["friendbook", "list", "--json"]);
        assert_eq!(args.command(), Cmd::List { json: true });
    }
}
