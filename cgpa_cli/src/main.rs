//! # SGPA2CGPA CLI Application
//!
//! Terminal front-end for the SGPA to CGPA calculator. Every rule lives in
//! `cgpa_core`; this binary only builds a [`CgpaForm`] from arguments (or an
//! interactive session) and prints what the form reports.
//!
//! ## Usage
//!
//! ```text
//! cgpa_cli semesters 8.5 9.0 --scale four
//! cgpa_cli aggregate --total 27 --semesters 3 --scale four
//! cgpa_cli --format json eval request.json
//! cgpa_cli interactive
//! ```
//!
//! Results are printed to stdout and rejections to stderr, in either format.
//! Exit status: 0 on success, 1 when the input is rejected, 2 on I/O or JSON errors.

use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cgpa_core::{
    AggregateField, CalculationResult, CgpaForm, FormEvent, FormObserver, GradingScale,
    InputMethod,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "cgpa_cli",
    version,
    about = "Convert semester SGPAs into a CGPA and percentage."
)]
struct Cli {
    /// Output format for results and errors.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Print debug logs to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Average one SGPA per semester (Method 1).
    Semesters {
        /// SGPA for each semester, in order.
        #[arg(required = true, allow_negative_numbers = true)]
        sgpas: Vec<String>,

        #[command(flatten)]
        scale: ScaleArgs,
    },

    /// Divide a total SGPA by the number of semesters (Method 2).
    Aggregate {
        /// Sum of all semester SGPAs.
        #[arg(long, allow_negative_numbers = true)]
        total: String,

        /// Number of semesters the total spans.
        #[arg(long, allow_negative_numbers = true)]
        semesters: String,

        #[command(flatten)]
        scale: ScaleArgs,
    },

    /// Calculate a JSON-encoded form state (use `-` for stdin).
    Eval {
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Edit the form line by line, like the web form.
    Interactive,
}

#[derive(Args)]
struct ScaleArgs {
    /// Grading scale: four, ten, custom (or 4.0, 10.0).
    #[arg(long, default_value = "ten")]
    scale: GradingScale,

    /// Maximum grade point when `--scale custom` is used.
    #[arg(long, value_name = "VALUE")]
    custom_scale: Option<String>,
}

impl ScaleArgs {
    fn apply(&self, form: &mut CgpaForm) {
        form.set_scale(self.scale);
        if let Some(custom) = &self.custom_scale {
            form.set_custom_scale(custom.as_str());
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Prints form events in the selected output format. Results go to stdout,
/// rejections to stderr.
struct Reporter {
    format: OutputFormat,
    /// Maximum grade point, for labelling the CGPA line
    scale_label: String,
}

impl Reporter {
    fn new(format: OutputFormat) -> Self {
        Reporter {
            format,
            scale_label: String::new(),
        }
    }

    fn for_form(format: OutputFormat, form: &CgpaForm) -> Self {
        let scale_label = match form.scale().max_points() {
            Some(max) => max.to_string(),
            None => form.custom_scale().trim().to_string(),
        };
        Reporter {
            format,
            scale_label,
        }
    }

    fn result_banner(&self, result: &CalculationResult) -> String {
        const RULE: &str = "═══════════════════════════════════════";
        format!(
            "{RULE}\n  YOUR RESULTS\n{RULE}\n  CGPA:        {} / {}\n  Percentage:  {}%\n{RULE}",
            result.cgpa, self.scale_label, result.percentage
        )
    }

    /// Text for an event and the stream it belongs on
    fn render(&self, event: &FormEvent) -> (Stream, String) {
        match (self.format, event) {
            (OutputFormat::Text, FormEvent::Calculated(result)) => {
                (Stream::Stdout, self.result_banner(result))
            }
            (OutputFormat::Text, event) if event.is_error() => {
                (Stream::Stderr, format!("Error: {}", event.message()))
            }
            (OutputFormat::Text, event) => (Stream::Stderr, event.message()),
            (OutputFormat::Json, FormEvent::Calculated(result)) => (Stream::Stdout, to_json(result)),
            (OutputFormat::Json, FormEvent::CalculationFailed(err)) => (Stream::Stderr, to_json(err)),
            (OutputFormat::Json, event) => (Stream::Stdout, to_json(event)),
        }
    }
}

impl FormObserver for Reporter {
    fn notify(&mut self, event: &FormEvent) {
        if let FormEvent::CalculationFailed(err) = event {
            debug!(code = err.error_code(), detail = %err, "input rejected");
        }
        match self.render(event) {
            (Stream::Stdout, text) => println!("{}", text),
            (Stream::Stderr, text) => eprintln!("{}", text),
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("Error: failed to serialize output: {}", e))
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Run the selected command. `Ok(false)` means the input was rejected.
fn run(cli: &Cli) -> Result<bool> {
    let mut form = match &cli.command {
        Command::Semesters { sgpas, scale } => semesters_form(sgpas, scale),
        Command::Aggregate {
            total,
            semesters,
            scale,
        } => aggregate_form(total, semesters, scale),
        Command::Eval { input } => read_form(input)?,
        Command::Interactive => {
            let stdin = io::stdin();
            return interactive(&mut stdin.lock(), cli.format);
        }
    };

    let mut reporter = Reporter::for_form(cli.format, &form);
    Ok(form.calculate_notify(&mut reporter).is_ok())
}

fn semesters_form(sgpas: &[String], scale: &ScaleArgs) -> CgpaForm {
    let mut form = CgpaForm::new();
    for (index, sgpa) in sgpas.iter().enumerate() {
        if index >= form.semesters().len() {
            form.add_semester_entry();
        }
        form.update_semester_entry(index, sgpa.as_str());
    }
    scale.apply(&mut form);
    form
}

fn aggregate_form(total: &str, semesters: &str, scale: &ScaleArgs) -> CgpaForm {
    let mut form = CgpaForm::new();
    form.set_method(InputMethod::Aggregate);
    form.set_aggregate_field(AggregateField::TotalSgpa, total);
    form.set_aggregate_field(AggregateField::SemesterCount, semesters);
    scale.apply(&mut form);
    form
}

fn read_form(input: &Path) -> Result<CgpaForm> {
    let json = if input.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read form from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))?
    };

    serde_json::from_str(&json).context("Invalid form JSON")
}

const INTERACTIVE_HELP: &str = "\
Commands:
  method 1|2            switch to individual SGPAs (1) or total SGPA & semesters (2)
  sgpa <n> <value>      set the SGPA for semester n
  add                   add a semester
  remove <n>            remove semester n (semesters 1 and 2 stay)
  total <value>         set the total SGPA
  count <value>         set the number of semesters
  scale four|ten|custom choose the grading scale
  custom <value>        set the custom scale
  show                  print the current form
  calc                  calculate CGPA and percentage
  reset                 clear the form
  help                  show this help
  quit                  leave";

/// Line-driven session over a single form. Returns whether the last
/// calculation succeeded.
fn interactive(input: &mut impl BufRead, format: OutputFormat) -> Result<bool> {
    println!("SGPA to CGPA & Percentage Calculator");
    println!("====================================");
    println!("Type 'help' for commands.");

    let mut form = CgpaForm::new();
    let mut last_ok = false;
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        line.clear();
        if input.read_line(&mut line).context("Failed to read input")? == 0 {
            break;
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => break,
            ["help"] => println!("{}", INTERACTIVE_HELP),
            ["show"] => show_form(&form),
            ["method", "1"] => form.set_method(InputMethod::PerSemester),
            ["method", "2"] => form.set_method(InputMethod::Aggregate),
            ["add"] => {
                form.add_semester_entry();
                println!("Semester {} added", form.semesters().len());
            }
            ["remove", n] => match semester_index(n) {
                Some(index) if form.remove_semester_entry(index) => {
                    println!("Semester {} removed", n)
                }
                _ => println!("Semester {} cannot be removed", n),
            },
            ["sgpa", n, value] => match semester_index(n) {
                Some(index) if form.update_semester_entry(index, *value) => {}
                _ => println!("No semester {}", n),
            },
            ["sgpa", n] => {
                if let Some(index) = semester_index(n) {
                    form.update_semester_entry(index, "");
                }
            }
            ["total", value] => form.set_aggregate_field(AggregateField::TotalSgpa, *value),
            ["count", value] => form.set_aggregate_field(AggregateField::SemesterCount, *value),
            ["scale", name] => match name.parse::<GradingScale>() {
                Ok(scale) => form.set_scale(scale),
                Err(e) => println!("{}", e),
            },
            ["custom", value] => form.set_custom_scale(*value),
            ["calc"] => {
                let mut reporter = Reporter::for_form(format, &form);
                last_ok = form.calculate_notify(&mut reporter).is_ok();
            }
            ["reset"] => {
                form.reset_notify(&mut Reporter::new(format));
                last_ok = false;
            }
            _ => println!("Unknown command. Type 'help' for commands."),
        }
    }

    Ok(last_ok)
}

/// 1-based semester number to 0-based index
fn semester_index(number: &str) -> Option<usize> {
    number.parse::<usize>().ok()?.checked_sub(1)
}

fn show_form(form: &CgpaForm) {
    println!("{}", form.method());
    match form.method() {
        InputMethod::PerSemester => {
            for (i, entry) in form.semesters().entries().iter().enumerate() {
                println!("  Semester {}: {}", i + 1, entry);
            }
        }
        InputMethod::Aggregate => {
            let aggregate = form.aggregate();
            println!("  {}: {}", AggregateField::TotalSgpa, aggregate.total_sgpa);
            println!("  {}: {}", AggregateField::SemesterCount, aggregate.semester_count);
        }
    }
    println!("Scale: {}", form.scale());
    if form.scale().is_custom() {
        println!("  Custom scale: {}", form.custom_scale());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale_args(scale: GradingScale, custom: Option<&str>) -> ScaleArgs {
        ScaleArgs {
            scale,
            custom_scale: custom.map(str::to_string),
        }
    }

    #[test]
    fn test_cli_parses_semesters() {
        let cli = Cli::try_parse_from(["cgpa_cli", "semesters", "8.5", "9.0", "--scale", "four"])
            .unwrap();
        match cli.command {
            Command::Semesters { sgpas, scale } => {
                assert_eq!(sgpas, vec!["8.5", "9.0"]);
                assert_eq!(scale.scale, GradingScale::FourPoint);
            }
            _ => panic!("expected semesters command"),
        }
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_cli_flags_after_sgpas() {
        let cli = Cli::try_parse_from([
            "cgpa_cli", "semesters", "8", "8", "--custom-scale", "5", "--scale", "custom",
            "--format", "json", "--verbose",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        match cli.command {
            Command::Semesters { sgpas, scale } => {
                assert_eq!(sgpas, vec!["8", "8"]);
                assert_eq!(scale.scale, GradingScale::Custom);
                assert_eq!(scale.custom_scale.as_deref(), Some("5"));
            }
            _ => panic!("expected semesters command"),
        }
    }

    #[test]
    fn test_cli_accepts_negative_numbers() {
        let cli = Cli::try_parse_from(["cgpa_cli", "semesters", "-1", "8", "--scale", "four"])
            .unwrap();
        match cli.command {
            Command::Semesters { sgpas, scale } => {
                assert_eq!(sgpas, vec!["-1", "8"]);
                assert_eq!(scale.scale, GradingScale::FourPoint);
            }
            _ => panic!("expected semesters command"),
        }

        let cli = Cli::try_parse_from([
            "cgpa_cli", "aggregate", "--total", "-5", "--semesters", "-2", "--scale", "four",
        ])
        .unwrap();
        match cli.command {
            Command::Aggregate { total, semesters, scale } => {
                assert_eq!(total, "-5");
                assert_eq!(semesters, "-2");
                assert_eq!(scale.scale, GradingScale::FourPoint);
            }
            _ => panic!("expected aggregate command"),
        }
    }

    #[test]
    fn test_rejections_go_to_stderr() {
        let err = FormEvent::CalculationFailed(cgpa_core::ValidationError::EmptyInput);
        for format in [OutputFormat::Text, OutputFormat::Json] {
            let (stream, _) = Reporter::new(format).render(&err);
            assert_eq!(stream, Stream::Stderr);
        }

        let (stream, json) = Reporter::new(OutputFormat::Json).render(&err);
        assert_eq!(stream, Stream::Stderr);
        assert!(json.contains("EmptyInput"));

        let sgpas = vec!["8.5".to_string(), "9.0".to_string()];
        let mut form = semesters_form(&sgpas, &scale_args(GradingScale::TenPoint, None));
        let result = form.calculate().unwrap();
        let reporter = Reporter::for_form(OutputFormat::Text, &form);
        let (stream, text) = reporter.render(&FormEvent::Calculated(result));
        assert_eq!(stream, Stream::Stdout);
        assert!(text.contains("CGPA:        8.75 / 10"));
        assert!(text.contains("Percentage:  83.13%"));
    }

    #[test]
    fn test_cli_rejects_unknown_scale() {
        let parsed = Cli::try_parse_from(["cgpa_cli", "semesters", "8", "--scale", "seven"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_semesters_form_grows_list() {
        let sgpas: Vec<String> = ["7", "8", "9"].iter().map(|s| s.to_string()).collect();
        let mut form = semesters_form(&sgpas, &scale_args(GradingScale::TenPoint, None));
        assert_eq!(form.semesters().len(), 3);
        assert_eq!(form.calculate().unwrap().cgpa.to_string(), "8.00");
    }

    #[test]
    fn test_single_semester_keeps_second_entry_empty() {
        let sgpas = vec!["8.5".to_string()];
        let form = semesters_form(&sgpas, &scale_args(GradingScale::TenPoint, None));
        assert_eq!(form.semesters().entries(), &["8.5", ""]);
    }

    #[test]
    fn test_aggregate_form() {
        let mut form = aggregate_form("27", "3", &scale_args(GradingScale::FourPoint, None));
        let result = form.calculate().unwrap();
        assert_eq!(result.percentage.to_string(), "225.00");
    }

    #[test]
    fn test_custom_scale_args() {
        let sgpas = vec!["4".to_string(), "4".to_string()];
        let mut form = semesters_form(&sgpas, &scale_args(GradingScale::Custom, Some("5")));
        assert_eq!(form.calculate().unwrap().percentage.to_string(), "80.00");
    }

    #[test]
    fn test_semester_index() {
        assert_eq!(semester_index("1"), Some(0));
        assert_eq!(semester_index("0"), None);
        assert_eq!(semester_index("x"), None);
    }

    #[test]
    fn test_interactive_session() {
        let script = "sgpa 1 8.5\nsgpa 2 9.0\ncalc\nquit\n";
        let ok = interactive(&mut script.as_bytes(), OutputFormat::Json).unwrap();
        assert!(ok);
    }

    #[test]
    fn test_interactive_reset_clears_success() {
        let script = "sgpa 1 8\ncalc\nreset\n";
        let ok = interactive(&mut script.as_bytes(), OutputFormat::Json).unwrap();
        assert!(!ok);
    }

    #[test]
    fn test_read_form_reports_bad_json() {
        let dir = std::env::temp_dir().join("cgpa_cli_bad_form.json");
        std::fs::write(&dir, "{ not json").unwrap();
        let err = read_form(&dir).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid form JSON"));
        let _ = std::fs::remove_file(&dir);
    }
}
