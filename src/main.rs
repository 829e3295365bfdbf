use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use svcs::areas::repository::Repository;
use svcs::artifacts::branch::outcome::{Checkout, ResetMode};
use svcs::artifacts::merge::outcome::MergeOutcome;
use svcs::artifacts::staging::staging_target::StagingTarget;

#[derive(Parser)]
#[command(
    name = "svcs",
    version = "0.1.0",
    about = "A small version control system",
    long_about = "A small version control system with a content-addressed object store, \
    branches, a staging area and two-way merges.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "SVCS_REPO",
        default_value = ".",
        help = "The repository directory"
    )]
    repo: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the repository layout and the 'main' branch. \
        Running it on an existing repository changes nothing."
    )]
    Init,
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command stores the given files in the object store and stages them. \
        Without paths, or with '.', every regular file at the repository root is staged."
    )]
    Add {
        #[arg(index = 1, help = "The files to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command records the staged files as a new commit on the current branch."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "log",
        about = "Show the history of the current branch",
        long_about = "This command prints every commit reachable from the current branch, newest first."
    )]
    Log,
    #[command(
        name = "branch",
        about = "Create or list branches",
        long_about = "With a name, this command creates a branch at the current commit. \
        Without one, it lists every branch and marks the current one."
    )]
    Branch {
        #[arg(index = 1, help = "The name of the branch to create")]
        name: Option<String>,
    },
    #[command(
        name = "checkout",
        about = "Switch to another branch",
        long_about = "This command makes the given branch the current one. \
        The working tree and the staging area are left as they are."
    )]
    Checkout {
        #[arg(index = 1, help = "The branch to switch to")]
        name: String,
    },
    #[command(
        name = "merge",
        about = "Merge another branch into the current one",
        long_about = "This command merges the files of the source branch into the current branch. \
        Paths changed on both sides are reported as conflicts and nothing is written."
    )]
    Merge {
        #[arg(index = 1, help = "The branch to merge from")]
        source: String,
    },
    #[command(
        name = "reset",
        about = "Point the current branch at another commit",
        long_about = "This command moves the current branch to the given commit. \
        The commit must exist unless --unchecked is passed."
    )]
    Reset {
        #[arg(index = 1, help = "The commit to reset to")]
        hash: String,
        #[arg(long, help = "Accept any well-formed commit ID without looking it up")]
        unchecked: bool,
    },
    #[command(
        name = "hash-object",
        about = "Hash an object and optionally write it to the object database",
        long_about = "This command hashes a file the way it would be stored and can write it to the object database. \
        It requires the path to the file to be specified."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the decompressed content of an object in the repository. \
        It requires the SHA of the object to be specified."
    )]
    CatFile {
        #[arg(index = 1, help = "The object SHA to print")]
        sha: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("SVCS_LOG", "warn")).init();

    let cli = Cli::parse();
    let writer = Box::new(std::io::stdout());
    let mut repository = match &cli.command {
        Commands::Init => Repository::create(&cli.repo, writer)?,
        _ => Repository::new(&cli.repo, writer)?,
    };

    match &cli.command {
        Commands::Init => repository.init().await?,
        Commands::Add { paths } => {
            repository.add(&StagingTarget::from_args(paths)).await?;
        }
        Commands::Commit { message } => {
            repository.commit(message).await?;
        }
        Commands::Log => {
            repository.log()?;
        }
        Commands::Branch { name } => match name {
            Some(name) => {
                repository.create_branch(name)?;
            }
            None => {
                repository.list_branches()?;
            }
        },
        Commands::Checkout { name } => {
            if let Checkout::Missing(_) = repository.checkout(name)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Merge { source } => match repository.merge(source)? {
            MergeOutcome::Merged(_) | MergeOutcome::UpToDate => {}
            MergeOutcome::SourceMissing(_) | MergeOutcome::Conflicted(_) => {
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Reset { hash, unchecked } => {
            let mode = if *unchecked {
                ResetMode::Unchecked
            } else {
                ResetMode::Checked
            };
            repository.reset(hash, mode)?;
        }
        Commands::HashObject { write, file } => {
            repository.hash_object(file, *write)?;
        }
        Commands::CatFile { sha } => {
            repository.cat_file(sha)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
