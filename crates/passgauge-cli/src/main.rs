//! CLI entry point for passgauge.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All business logic lives in the `passgauge-app` crate.

#![forbid(unsafe_code)]

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use passgauge_app::{
    format_explanation, format_not_found, parse_report_json, render_markdown, render_text,
    run_check, run_explain, serialize_report, to_renderable, verdict_exit_code, CheckInput,
    ExplainOutput,
};
use passgauge_settings::Overrides;
use std::io::Read;

#[derive(Parser, Debug)]
#[command(
    name = "passgauge",
    version,
    about = "Heuristic password strength evaluation with policy support"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a password against the active policy.
    Check {
        /// The password to evaluate (discouraged: shell history; omit to
        /// read it from stdin).
        #[arg(long)]
        password: Option<String>,

        /// Path to a policy.json file.
        #[arg(long)]
        policy: Option<Utf8PathBuf>,

        /// Common-password list (missing file = empty list).
        #[arg(long, default_value = "assets/common_passwords.txt")]
        wordlist: Utf8PathBuf,

        /// Override the recommended minimum length.
        #[arg(long)]
        min_length: Option<usize>,

        /// Override the "strong" length.
        #[arg(long)]
        strong_length: Option<usize>,

        /// Treat warnings as non-compliant.
        #[arg(long)]
        strict: bool,

        /// Emit the JSON report instead of tables.
        #[arg(long)]
        json: bool,

        /// Also write the JSON report to this path.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,
    },

    /// Render Markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (prints to stdout if absent).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a finding code with remediation guidance.
    Explain {
        /// The code to explain (e.g. "DICT_EXACT").
        identifier: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.cmd {
        Commands::Check {
            password,
            policy,
            wordlist,
            min_length,
            strong_length,
            strict,
            json,
            report_out,
        } => cmd_check(
            password,
            policy,
            wordlist,
            Overrides {
                min_length,
                strong_length,
                strict,
            },
            json,
            report_out,
        ),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    };

    if let Err(err) = result {
        eprintln!("passgauge error: {err:#}");
        std::process::exit(1);
    }
}

fn cmd_check(
    password: Option<String>,
    policy: Option<Utf8PathBuf>,
    wordlist: Utf8PathBuf,
    overrides: Overrides,
    json: bool,
    report_out: Option<Utf8PathBuf>,
) -> anyhow::Result<()> {
    let password = match password {
        Some(p) => p,
        None => read_password_from_stdin()?,
    };

    let policy_text = match &policy {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("read policy file: {path}"))?
        }
        None => String::new(),
    };

    let input = CheckInput {
        password: &password,
        policy_text: &policy_text,
        overrides,
        wordlist_path: Some(wordlist.as_path()),
    };
    let output = run_check(input)?;

    if json {
        print!("{}", serialize_report(&output.report)?);
    } else {
        print!("{}", render_text(&to_renderable(&output.report)));
    }

    if let Some(path) = &report_out {
        write_text_file(path, &serialize_report(&output.report)?).context("write report json")?;
    }

    let code = verdict_exit_code(output.report.verdict);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn read_password_from_stdin() -> anyhow::Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("read password from stdin")?;
    // Only strip the line terminator; leading/inner whitespace is part of
    // the password.
    let password = buf.strip_suffix('\n').unwrap_or(&buf);
    let password = password.strip_suffix('\r').unwrap_or(password);
    Ok(password.to_string())
}

fn write_text_file(path: &camino::Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {path}"))?;
    Ok(())
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{md}");
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_codes,
        } => {
            eprint!("{}", format_not_found(&identifier, available_codes));
            std::process::exit(1);
        }
    }
}
