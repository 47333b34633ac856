use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use quickstart_creator_config::Config;
use quickstart_creator_engine::{
    ConfirmReplace, CreatorCallbacks, CreatorOptions, CreatorSession, LoadOutcome,
    ParseAlert, ReconcileOutcome, draft_file_name, io, parse_quickstart,
};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, process, thread};

const SAMPLE_DRAFT_NAME: &str = "sample-interactive-quickstart";
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Check, scaffold and live-watch quickstart YAML drafts
#[derive(Parser)]
#[command(name = "quickstart-creator", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a draft once and print what the structured editor would receive
    Check {
        /// Path to the YAML draft
        file: PathBuf,
    },

    /// Write the sample quickstart to a file
    Sample {
        /// Target file (defaults to the configured drafts folder)
        path: Option<PathBuf>,
        /// Replace existing content without asking
        #[arg(long)]
        force: bool,
    },

    /// Re-parse a draft whenever it changes on disk
    Watch {
        /// Path to the YAML draft
        file: PathBuf,
        /// Quiet period before a change is parsed
        #[arg(long)]
        debounce_ms: Option<u64>,
    },

    /// Show the configuration, or change it when options are given
    Config {
        /// Quiet period before an edit is parsed
        #[arg(long)]
        debounce_ms: Option<u64>,
        /// Folder new drafts are written to
        #[arg(long)]
        drafts_path: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = Config::config_path();
    log::debug!("Config path: {}", config_path.display());
    let config = Config::load()?.unwrap_or_default();

    match cli.command {
        Commands::Check { file } => {
            print!("{}", check(&file)?);
            Ok(())
        }
        Commands::Sample { path, force } => {
            let target = sample_target(path, &config)?;
            let outcome = if force {
                write_sample(&target, |_: &str| true)?
            } else {
                write_sample(&target, |_: &str| prompt_replace(&target))?
            };
            match outcome {
                LoadOutcome::Loaded => println!("Wrote sample quickstart to {}", target.display()),
                LoadOutcome::Declined => println!("Left {} unchanged", target.display()),
            }
            Ok(())
        }
        Commands::Watch { file, debounce_ms } => {
            let debounce = debounce_ms.map_or_else(|| config.debounce(), Duration::from_millis);
            watch(&file, debounce)
        }
        Commands::Config {
            debounce_ms,
            drafts_path,
        } => {
            let (config, changed) = update_config(config, debounce_ms, drafts_path);
            if changed {
                config.save()?;
                println!("Saved {}", config_path.display());
            }
            print!("{}", render_config(&config));
            Ok(())
        }
    }
}

/// Apply command-line overrides, reporting whether anything changed
fn update_config(
    mut config: Config,
    debounce_ms: Option<u64>,
    drafts_path: Option<PathBuf>,
) -> (Config, bool) {
    let before = config.clone();
    if let Some(debounce_ms) = debounce_ms {
        config.debounce_ms = debounce_ms;
    }
    if drafts_path.is_some() {
        config.drafts_path = drafts_path;
    }
    let changed = config != before;
    (config, changed)
}

fn render_config(config: &Config) -> String {
    let mut out = format!("debounce_ms = {}\n", config.debounce_ms);
    if let Some(drafts) = &config.drafts_path {
        out.push_str(&format!("drafts_path = {:?}\n", drafts.display().to_string()));
    }
    out
}

/// Parse once and render the summary as YAML
fn check(file: &Path) -> Result<String> {
    let text = io::read_draft(file)?;
    let parsed = parse_quickstart(&text).map_err(|err| anyhow!("{}", ParseAlert::from(err)))?;
    Ok(serde_yaml::to_string(&parsed.summary())?)
}

fn sample_target(path: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = path {
        return Ok(path);
    }
    let folder = match &config.drafts_path {
        Some(drafts) => drafts.clone(),
        None => env::current_dir()?,
    };
    Ok(folder.join(draft_file_name(SAMPLE_DRAFT_NAME)))
}

/// Load the sample over whatever `target` holds and save it if accepted
fn write_sample(target: &Path, confirm: impl ConfirmReplace) -> Result<LoadOutcome> {
    let existing = if target.exists() {
        io::read_draft(target)?
    } else {
        String::new()
    };

    let options = CreatorOptions {
        initial_text: existing,
        ..Default::default()
    };
    let mut session = CreatorSession::new(options, CreatorCallbacks::new());
    let outcome = session.load_sample(confirm);
    if outcome == LoadOutcome::Loaded {
        io::write_draft(target, &session.text())?;
    }
    Ok(outcome)
}

fn prompt_replace(target: &Path) -> bool {
    eprint!(
        "{} already has content. Replace it with the sample quickstart? [y/N] ",
        target.display()
    );
    flush_prompt(std::io::stderr());

    let mut answer = String::new();
    if let Err(e) = std::io::stdin().lock().read_line(&mut answer) {
        log::warn!("Could not read answer, keeping existing content: {e}");
        return false;
    }
    is_yes(&answer)
}

/// Push the prompt out before blocking on stdin; returns whether that worked
fn flush_prompt(mut out: impl Write) -> bool {
    match out.flush() {
        Ok(()) => true,
        Err(e) => {
            log::debug!("Could not flush prompt: {e}");
            false
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn logging_callbacks() -> CreatorCallbacks {
    CreatorCallbacks::new()
        .on_spec_changed(|spec| {
            log::info!(
                "spec: displayName={:?} description={:?}",
                spec.display_name,
                spec.description
            )
        })
        .on_bundles_changed(|bundles| log::info!("bundles: {bundles:?}"))
        .on_tags_changed(|tags| {
            for (kind, values) in tags.iter() {
                log::info!("tags[{kind}]: {values:?}");
            }
        })
        .on_metadata_tags_changed(|raw| log::debug!("metadata tags: {} entries", raw.len()))
}

fn watch(file: &Path, debounce: Duration) -> Result<()> {
    let mut last_seen = io::read_draft(file)?;
    log::info!(
        "Watching {} (debounce {}ms)",
        file.display(),
        debounce.as_millis()
    );

    let options = CreatorOptions {
        debounce,
        initial_text: last_seen.clone(),
    };
    let mut session = CreatorSession::new(options, logging_callbacks());
    if let Some(alert) = session.alert() {
        log::warn!("{alert}");
    }

    loop {
        match io::read_draft(file) {
            Ok(content) if content != last_seen => {
                session.on_edit(content.as_str());
                last_seen = content;
            }
            Ok(_) => {}
            // Editors often replace the file on save; try again next poll
            Err(e) => log::warn!("Could not read {}: {e}", file.display()),
        }

        match session.tick() {
            Some(ReconcileOutcome::Updated) => {
                log::info!("Applied `{}` (v{})", session.draft().name, session.version())
            }
            Some(ReconcileOutcome::Rejected) => {
                if let Some(alert) = session.alert() {
                    log::warn!("{alert}");
                }
            }
            None => {}
        }

        let wait = session
            .time_until_due()
            .map_or(POLL_INTERVAL, |due| due.min(POLL_INTERVAL));
        thread::sleep(wait);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quickstart_creator_engine::SAMPLE_QUICKSTART_YAML;
    use tempfile::TempDir;

    #[test]
    fn test_check_prints_summary() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("draft.yaml");
        std::fs::write(
            &file,
            "metadata:\n  name: test\n  tags:\n    - kind: bundle\n      value: test-bundle\nspec:\n  displayName: Test\n",
        )
        .unwrap();

        let output = check(&file).unwrap();

        assert_eq!(
            output,
            "name: test\ndisplayName: Test\ndescription: ''\nbundles:\n- test-bundle\ntagsByKind: {}\n"
        );
    }

    #[test]
    fn test_check_reports_alert_on_broken_yaml() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("draft.yaml");
        std::fs::write(&file, "invalid: yaml: content: [[[").unwrap();

        let err = check(&file).unwrap_err().to_string();

        assert!(err.starts_with("YAML Parse Error: "));
        assert!(err.contains("previous valid state"));
    }

    #[test]
    fn test_check_missing_file() {
        let dir = TempDir::new().unwrap();

        let err = check(&dir.path().join("missing.yaml")).unwrap_err();

        assert!(err.to_string().contains("Draft not found"));
    }

    #[test]
    fn test_sample_target_prefers_explicit_path() {
        let config = Config {
            drafts_path: Some(PathBuf::from("/drafts")),
            ..Default::default()
        };

        let target = sample_target(Some(PathBuf::from("mine.yaml")), &config).unwrap();

        assert_eq!(target, PathBuf::from("mine.yaml"));
    }

    #[test]
    fn test_sample_target_uses_drafts_path() {
        let config = Config {
            drafts_path: Some(PathBuf::from("/drafts")),
            ..Default::default()
        };

        let target = sample_target(None, &config).unwrap();

        assert_eq!(
            target,
            PathBuf::from("/drafts/sample-interactive-quickstart.yaml")
        );
    }

    #[test]
    fn test_write_sample_into_new_file_does_not_ask() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("drafts").join("sample.yaml");

        let outcome = write_sample(&target, |_: &str| -> bool { panic!("should not ask") }).unwrap();

        assert_eq!(outcome, LoadOutcome::Loaded);
        assert_eq!(std::fs::read_to_string(&target).unwrap(), SAMPLE_QUICKSTART_YAML);
    }

    #[test]
    fn test_write_sample_declined_keeps_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("mine.yaml");
        std::fs::write(&target, "metadata:\n  name: mine\n").unwrap();

        let outcome = write_sample(&target, |_: &str| false).unwrap();

        assert_eq!(outcome, LoadOutcome::Declined);
        assert_eq!(
            std::fs::read_to_string(&target).unwrap(),
            "metadata:\n  name: mine\n"
        );
    }

    #[test]
    fn test_write_sample_confirmed_replaces_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("mine.yaml");
        std::fs::write(&target, "metadata:\n  name: mine\n").unwrap();

        let outcome = write_sample(&target, |current: &str| current.contains("mine")).unwrap();

        assert_eq!(outcome, LoadOutcome::Loaded);
        assert_eq!(std::fs::read_to_string(&target).unwrap(), SAMPLE_QUICKSTART_YAML);
    }

    #[test]
    fn test_update_config_applies_overrides() {
        let (config, changed) =
            update_config(Config::default(), Some(350), Some(PathBuf::from("/drafts")));

        assert!(changed);
        assert_eq!(config.debounce_ms, 350);
        assert_eq!(config.drafts_path, Some(PathBuf::from("/drafts")));
    }

    #[test]
    fn test_update_config_without_options_changes_nothing() {
        let (config, changed) = update_config(Config::default(), None, None);

        assert!(!changed);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_updated_config_round_trips_through_file() {
        let dir = TempDir::new().unwrap();
        let config_file = dir.path().join("config.toml");
        let (config, _) = update_config(Config::default(), Some(75), None);

        config.save_to_path(&config_file).unwrap();
        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded, config);
        assert_eq!(render_config(&loaded), "debounce_ms = 75\n");
    }

    #[test]
    fn test_render_config_with_drafts_path() {
        let config = Config {
            debounce_ms: 200,
            drafts_path: Some(PathBuf::from("/drafts")),
        };

        assert_eq!(
            render_config(&config),
            "debounce_ms = 200\ndrafts_path = \"/drafts\"\n"
        );
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_flush_prompt_reports_failure() {
        assert!(flush_prompt(Vec::new()));
        assert!(!flush_prompt(BrokenPipe));
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("nope"));
    }
}
