use anyhow::Result;
use cargo_approx::{analyze, Config};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "cargo-approx")]
#[command(about = "Find approximate math constants and constant conditions in Rust code")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to analyze (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    path: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "console", global = true)]
    format: OutputFormat,

    /// Minimum severity to report
    #[arg(long, default_value = "info", global = true)]
    min_severity: cargo_approx::Severity,

    /// Fail if any diagnostic meets this severity
    #[arg(long, global = true)]
    fail_on: Option<cargo_approx::Severity>,

    /// Show timing information
    #[arg(long)]
    timing: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run analysis (default)
    Check {
        /// Path to analyze
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Show timing information
        #[arg(long)]
        timing: bool,
    },
    /// Initialize cargo-approx.toml config
    Init,
    /// List available rules
    Rules,
    /// Explain a specific rule in detail
    Explain {
        /// Rule ID to explain (e.g., "approx-constant")
        rule_id: String,
    },
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Console,
    Json,
    Sarif,
}

fn main() -> ExitCode {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Handle "cargo approx" invocation (first arg is "approx")
    let args: Vec<String> = std::env::args().collect();
    let cli = if args.get(1).map(|s| s.as_str()) == Some("approx") {
        // Re-parse skipping the "approx" argument
        Cli::parse_from(std::iter::once("cargo-approx".to_string()).chain(args.into_iter().skip(2)))
    } else {
        cli
    };

    let config = Config::load_or_default(&cli.path)?;

    match cli.command {
        Some(Commands::Check { path, timing }) => run_check(
            &path,
            &config,
            cli.format,
            cli.min_severity,
            cli.fail_on,
            timing || cli.timing,
        ),
        None => run_check(
            &cli.path,
            &config,
            cli.format,
            cli.min_severity,
            cli.fail_on,
            cli.timing,
        ),
        Some(Commands::Init) => run_init(&cli.path),
        Some(Commands::Rules) => run_list_rules(),
        Some(Commands::Explain { rule_id }) => run_explain(&rule_id),
    }
}

fn run_check(
    path: &Path,
    config: &Config,
    format: OutputFormat,
    min_severity: cargo_approx::Severity,
    fail_on: Option<cargo_approx::Severity>,
    show_timing: bool,
) -> Result<()> {
    let start = Instant::now();
    let diagnostics = analyze(path, config)?;
    let analysis_time = start.elapsed();

    let diagnostics: Vec<_> = diagnostics
        .into_iter()
        .filter(|d| d.severity >= min_severity)
        .collect();

    match format {
        OutputFormat::Console => {
            cargo_approx::reporter::console::report(&diagnostics);
        }
        OutputFormat::Json => {
            cargo_approx::reporter::json::report(&diagnostics)?;
        }
        OutputFormat::Sarif => {
            cargo_approx::reporter::sarif::report(&diagnostics)?;
        }
    }

    if show_timing {
        use colored::Colorize;
        eprintln!();
        eprintln!("{}", "Timing:".bold());
        eprintln!("  Analysis time: {:?}", analysis_time);
        eprintln!("  Diagnostics:   {}", diagnostics.len());
    }

    if let Some(fail_severity) = fail_on {
        let failing = diagnostics
            .iter()
            .filter(|d| d.severity >= fail_severity)
            .count();
        if failing > 0 {
            anyhow::bail!(
                "Found {} diagnostic(s) at or above {:?} severity",
                failing,
                fail_severity
            );
        }
    }

    Ok(())
}

fn run_init(path: &Path) -> Result<()> {
    let config_path = path.join(cargo_approx::config::CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", cargo_approx::config::CONFIG_FILE_NAME);
    }
    std::fs::write(&config_path, Config::default_toml())?;
    println!("Created {}", config_path.display());
    Ok(())
}

fn run_list_rules() -> Result<()> {
    use cargo_approx::rules::registry;

    println!("Available rules:\n");
    for rule in registry::all_rules() {
        println!(
            "  {:<22} [{:?}] {}",
            rule.id(),
            rule.default_severity(),
            rule.description()
        );
    }
    println!("\nUse `cargo approx explain <rule-id>` for detailed information.");
    Ok(())
}

fn run_explain(rule_id: &str) -> Result<()> {
    use cargo_approx::rules::registry;
    use colored::Colorize;

    let rule = match registry::get_rule(rule_id) {
        Some(r) => r,
        None => {
            eprintln!("{} Unknown rule: {}", "error:".red().bold(), rule_id);
            eprintln!("\nAvailable rules:");
            for r in registry::all_rules() {
                eprintln!("  {}", r.id());
            }
            anyhow::bail!("Unknown rule: {}", rule_id);
        }
    };

    println!("{}", rule.name().bold().underline());
    println!("Rule ID: {}", rule.id().cyan());
    println!("Severity: {:?}", rule.default_severity());
    println!();
    println!("{}", rule.description());
    println!();

    print_rule_explanation(rule.id());

    Ok(())
}

fn print_rule_explanation(rule_id: &str) {
    use colored::Colorize;

    match rule_id {
        "approx-constant" => {
            println!("{}", "Why it matters:".yellow().bold());
            println!("  Hand-typed approximations of pi, e, sqrt(2) and friends lose precision");
            println!("  and obscure intent. The standard library ships them at full f64/f32");
            println!("  precision under std::f64::consts and std::f32::consts.");
            println!();
            println!("{}", "Bad:".red().bold());
            println!("  let circumference = 2.0 * 3.14159 * radius;");
            println!("  let diagonal = side * 1.41421f32;");
            println!();
            println!("{}", "Good:".green().bold());
            println!("  let circumference = 2.0 * std::f64::consts::PI * radius;");
            println!("  let diagonal = side * std::f32::consts::SQRT_2;");
            println!();
            println!("{}", "Matching:".yellow().bold());
            println!("  A literal matches when it agrees with the constant to that constant's");
            println!("  required number of decimal digits (3 for PI, 4 for E, 5 for the rest).");
            println!("  Integer literals are never flagged.");
        }

        "constant-condition" => {
            println!("{}", "Why it matters:".yellow().bold());
            println!("  An `if` whose condition is a literal `true` or `false` always takes the");
            println!("  same branch. Usually it is a leftover from debugging or a refactor.");
            println!();
            println!("{}", "Bad:".red().bold());
            println!("  if true {{");
            println!("      run_migration();");
            println!("  }}");
            println!();
            println!("{}", "Good:".green().bold());
            println!("  run_migration();");
            println!();
            println!("  // Or, for intentional compile-time switching:");
            println!("  #[cfg(feature = \"migrations\")]");
            println!("  run_migration();");
        }

        _ => {
            println!("No detailed explanation available for this rule.");
            println!("Run `cargo approx rules` to see all available rules.");
        }
    }

    println!();
    println!("{}", "Suppression:".yellow().bold());
    println!("  // cargo-approx-ignore: {}", rule_id);
    println!("  #[allow(cargo_approx::{})]", rule_id.replace('-', "_"));
}
