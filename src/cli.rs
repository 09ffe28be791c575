use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitgraph")]
#[command(about = "Personal commit calendar for your local git repositories")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, env = "GITGRAPH_CONFIG", global = true, help = "Path to the registration file (default: ~/.gitgraph)")]
    pub config: Option<PathBuf>,

    #[arg(short, long, action = ArgAction::Count, global = true, help = "Log more (-v info, -vv debug)")]
    pub verbose: u8,
}

impl CommonArgs {
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Ok(crate::config::default_path()?),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a folder for git repositories and register them
    Add {
        #[arg(help = "Folder to scan")]
        folder: PathBuf,
    },
    /// Render the contribution graph
    Graph {
        #[arg(long, help = "Author email to count (default: configured email)")]
        email: Option<String>,

        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Disable colors")]
        no_color: bool,

        #[arg(long, help = "Abort if any repository cannot be read")]
        strict: bool,
    },
    /// Set the default author email
    Email {
        #[arg(help = "Author email")]
        address: String,
    },
    /// Skip folders with this name when scanning
    Ignore {
        #[arg(help = "Folder name")]
        name: String,
    },
    /// List registered repositories
    List,
    /// Forget all registered repositories
    Clear,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::logging::init(self.common.verbose);

        match self.command {
            Commands::Add { folder } => crate::register::add(&self.common, &folder),
            Commands::Graph { email, json, no_color, strict } => {
                crate::graph::exec(self.common, email, json, no_color, strict)
            }
            Commands::Email { address } => crate::register::set_email(&self.common, &address),
            Commands::Ignore { name } => crate::register::ignore(&self.common, &name),
            Commands::List => crate::register::list(&self.common),
            Commands::Clear => crate::register::clear(&self.common),
        }
    }
}
