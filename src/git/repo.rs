use crate::error::{GtrackError, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::process::Command;

const LOG_FORMAT: &str = "%h|%an|%cd|%s";
const LOG_DATE_FORMAT: &str = "format-local:%Y-%m-%d %H:%M:%S";

/// Handle on a validated git working directory. All git access goes through
/// `git -C <path>` with argument-list invocation; the process working
/// directory is never changed.
pub struct GitRepo {
    path: PathBuf,
}

impl GitRepo {
    /// Open a repository at `path`, or the current dir if `None`.
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let path = match path {
            Some(p) => p.as_ref().to_path_buf(),
            None => std::env::current_dir()?,
        };

        if !path.is_dir() {
            return Err(GtrackError::GitRepo(format!(
                "Invalid directory: {}",
                path.display()
            )));
        }
        if !path.join(".git").exists() {
            return Err(GtrackError::GitRepo(format!(
                "Directory is not a git repository: {}",
                path.display()
            )));
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve the configured committer name via `git config user.name`.
    /// An unset or empty name is a configuration error: filtering against an
    /// empty name would attribute every commit to the user.
    pub fn config_user_name(&self) -> Result<String> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.path)
            .args(["config", "user.name"])
            .output()?;

        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !output.status.success() || name.is_empty() {
            return Err(GtrackError::Config(
                "git config user.name is not set; set it or pass --user".to_string(),
            ));
        }
        Ok(name)
    }

    /// Fetch all commits, across all branches and authors, whose commit
    /// timestamp falls on `date` (local time), one `hash|author|timestamp|subject`
    /// line per commit. An empty result means no commits that day; a failed
    /// invocation is an error, never an empty result.
    pub fn log_for_date(&self, date: NaiveDate) -> Result<Vec<String>> {
        let day = date.format("%Y-%m-%d");
        let stdout = self.run_git(&[
            "log",
            "--all",
            &format!("--format={LOG_FORMAT}"),
            &format!("--date={LOG_DATE_FORMAT}"),
            &format!("--after={day} 00:00"),
            &format!("--before={day} 23:59"),
        ])?;

        Ok(stdout
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn run_git(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.path)
            .args(args)
            .output()?;

        if !output.status.success() {
            return Err(GtrackError::GitCommand {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
