//! CLI for the scrapetrain profile downloader.

mod progress;
mod prompt;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use scrapetrain_core::config::{self, ScrapeConfig};
use scrapetrain_core::http::CurlClient;
use scrapetrain_core::input::{read_profile_list, ProfileInput};
use scrapetrain_core::scrape::{run_batch, scrape_profile, RunOptions};
use std::io;
use std::path::PathBuf;

use progress::PrintProgress;

/// Top-level CLI for scrapetrain.
#[derive(Debug, Parser)]
#[command(name = "scrapetrain")]
#[command(
    about = "Download every track of a TrakTrain profile, tagged with artist, title and cover art",
    long_about = None
)]
pub struct Cli {
    /// Profile URL, bare profile name, or path to a .txt list of profiles.
    /// Prompts interactively when omitted.
    pub reference: Option<String>,

    /// Base output directory; files go to <DIR>/<artist>/<title>.mp3.
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Album tag to write into every downloaded track.
    #[arg(short, long, value_name = "NAME")]
    pub album: Option<String>,

    /// Re-download tracks whose file already exists.
    #[arg(short, long)]
    pub overwrite: bool,

    /// Print a shell completion script and exit.
    #[arg(long, value_enum, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<()> {
        if let Some(shell) = self.completions {
            clap_complete::generate(shell, &mut Cli::command(), "scrapetrain", &mut io::stdout());
            return Ok(());
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let defaults = RunOptions {
            output_dir: match self.dir {
                Some(dir) => dir,
                None => cfg.output_dir()?,
            },
            album: self.album,
            overwrite: self.overwrite,
        };

        let (reference, opts) = match self.reference {
            Some(reference) => (reference, defaults),
            None => prompt::ask(&mut io::stdin().lock(), &mut io::stdout(), &defaults)?,
        };

        execute(&cfg, &reference, &opts)
    }
}

/// Single profile: an error ends the run. List file: every profile is attempted,
/// failures are printed as they happen and the run still succeeds.
fn execute(cfg: &ScrapeConfig, reference: &str, opts: &RunOptions) -> Result<()> {
    let client = CurlClient::new(&cfg.http());
    let mut progress = PrintProgress::new(io::stdout(), io::stderr());

    match ProfileInput::detect(reference) {
        ProfileInput::Single(reference) => {
            scrape_profile(&client, cfg, &reference, opts, &mut progress)?;
        }
        ProfileInput::ListFile(path) => {
            let references = read_profile_list(&path)?;
            println!("{} profiles listed in {}", references.len(), path.display());
            run_batch(&client, cfg, &references, opts, &mut progress);
            if progress.failures() > 0 {
                println!(
                    "{} of {} profiles failed",
                    progress.failures(),
                    references.len()
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
