//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use specfill_runner::DEFAULT_DELAY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Rules,
    Ai,
}

impl Strategy {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "rules" => Some(Self::Rules),
            "ai" => Some(Self::Ai),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub overwrite: bool,
    pub quiet: bool,
    pub strategy: Strategy,
    pub api_key: Option<String>,
    pub config: Option<PathBuf>,
    pub delay: Duration,
}

#[derive(Debug, PartialEq)]
pub enum Command {
    Run(CliArgs),
    Help,
}

pub const USAGE: &str = "\
Usage: specfill <input.json|input.xlsx> [options]

Options:
  -o, --output <path>      Output .json or .xlsx (default: <input>_with_specs.<ext>)
      --overwrite          Re-extract rows that already have specs
  -q, --quiet              Only print errors
      --ai                 Use the AI extractor instead of the rule engine
      --api-key <key>      API key for --ai (default: ANTHROPIC_API_KEY)
      --config <path>      JSON file with AI settings (api_key, model, max_tokens, endpoint)
      --delay <secs>       Pause between AI calls (default: 0.5)

Commands:
  help                     Show this help message";

/// Parse arguments after the program name. `env` supplies `SPECFILL_*` fallbacks.
pub fn parse<I, F>(args: I, env: F) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
    F: Fn(&str) -> Option<String>,
{
    let mut input = None;
    let mut output = None;
    let mut overwrite = false;
    let mut quiet = false;
    let mut strategy = None;
    let mut api_key = None;
    let mut config = None;
    let mut delay = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "help" | "--help" | "-h" => return Ok(Command::Help),
            "-o" | "--output" => {
                let value = args.next().ok_or("--output requires a path")?;
                output = Some(PathBuf::from(value));
            }
            "--overwrite" => overwrite = true,
            "-q" | "--quiet" => quiet = true,
            "--ai" => strategy = Some(Strategy::Ai),
            "--api-key" => {
                api_key = Some(args.next().ok_or("--api-key requires a value")?);
            }
            "--config" => {
                let value = args.next().ok_or("--config requires a path")?;
                config = Some(PathBuf::from(value));
            }
            "--delay" => {
                let value = args.next().ok_or("--delay requires seconds")?;
                delay = Some(parse_delay(&value)?);
            }
            flag if flag.starts_with('-') => return Err(format!("Unknown option: {}", flag)),
            _ => {
                if input.is_some() {
                    return Err(format!("Unexpected argument: {}", arg));
                }
                input = Some(PathBuf::from(arg));
            }
        }
    }

    let input = input.ok_or("Missing input file")?;

    let strategy = match strategy {
        Some(s) => s,
        None => match env("SPECFILL_STRATEGY") {
            Some(raw) => Strategy::parse(&raw)
                .ok_or_else(|| format!("SPECFILL_STRATEGY must be 'rules' or 'ai', got '{}'", raw))?,
            None => Strategy::Rules,
        },
    };

    let delay = match delay {
        Some(d) => d,
        None => match env("SPECFILL_DELAY") {
            Some(raw) => parse_delay(&raw)?,
            None => DEFAULT_DELAY,
        },
    };

    Ok(Command::Run(CliArgs {
        input,
        output,
        overwrite,
        quiet,
        strategy,
        api_key,
        config,
        delay,
    }))
}

fn parse_delay(raw: &str) -> Result<Duration, String> {
    let secs: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("Invalid delay: {}", raw))?;
    Duration::try_from_secs_f64(secs).map_err(|_| format!("Invalid delay: {}", raw))
}
