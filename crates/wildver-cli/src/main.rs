//! wildver command line interface

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use wildver::{ComparatorSet, Version};

#[derive(Parser)]
#[command(name = "wildver", version, about = "Wildcard-aware semver range matching")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether a concrete version satisfies a range expression
    Check {
        /// Version to test, e.g. "1.2.3"
        version: String,
        /// Range expression, e.g. "^1.2 || >=2.0.0 <3"
        range: String,
    },
    /// Parse a version and print its canonical form
    Parse {
        version: String,
        /// Print the JSON form instead of the bare canonical string
        #[arg(long)]
        json: bool,
    },
    /// Print the versions that satisfy a range expression
    Filter {
        range: String,
        versions: Vec<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Check { version, range } => {
            let v = Version::parse(&version)
                .with_context(|| format!("invalid version {version:?}"))?;
            if !v.is_valid() {
                bail!("{version:?} is not a concrete version");
            }
            let set = ComparatorSet::parse(&range)
                .with_context(|| format!("invalid range {range:?}"))?;
            log::debug!("parsed range {range:?} as {set:?}");
            if set.contains(&v) {
                println!("{v} satisfies {set}");
            } else {
                println!("{v} does not satisfy {set}");
                std::process::exit(1);
            }
        }
        Command::Parse { version, json } => {
            let v = Version::parse(&version)
                .with_context(|| format!("invalid version {version:?}"))?;
            if json {
                println!("{}", serde_json::to_string(&v)?);
            } else {
                println!("{v}");
            }
        }
        Command::Filter { range, versions } => {
            let set = ComparatorSet::parse(&range)
                .with_context(|| format!("invalid range {range:?}"))?;
            log::debug!("filtering {} versions", versions.len());
            for version in &versions {
                match Version::parse(version) {
                    Ok(v) if v.is_valid() && set.contains(&v) => println!("{version}"),
                    Ok(_) => {}
                    Err(e) => log::warn!("skipping {version:?}: {e}"),
                }
            }
        }
    }
    Ok(())
}
