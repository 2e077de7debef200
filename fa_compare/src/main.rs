use fa_compare::comparison::{self, ComparisonError, ComparisonReport};
use fa_compare::config::{build_info, ComparisonPreferences, OutputFormat, RuntimeConfig};
use fa_compare::logging::{self, codes};
use fa_compare::{log_error, log_success};
use std::env;
use std::io::{self, BufRead, Write};

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct CliOptions {
    config_path: Option<String>,
    json: bool,
    batch: bool,
    help: bool,
    text: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            logging::safe_log_error(codes::input::UNKNOWN_ARGUMENT, &message);
            eprintln!("Error: {}", message);
            eprintln!("Run 'fa-compare --help' for usage");
            std::process::exit(2);
        }
    };

    if options.help {
        print_usage();
        return Ok(());
    }

    let mut runtime = match &options.config_path {
        Some(path) => RuntimeConfig::load(path).inspect_err(|error| {
            logging::safe_log_error(error.error_code(), &error.to_string());
        })?,
        None => RuntimeConfig::default(),
    };
    if options.json {
        runtime.comparison.output_format = OutputFormat::Json;
    }

    // Initialize global logging system
    logging::config::init_runtime_preferences(runtime.logging.clone())?;
    logging::init_global_logging()?;

    if let Some(path) = &options.config_path {
        log_success!(codes::success::CONFIG_LOADED, "Runtime configuration loaded",
            "path" => path,
            "profile" => build_info::profile()
        );
    }

    if options.batch {
        run_batch_mode(&runtime)?;
    } else if !options.text.is_empty() {
        let text = options.text.join(" ");
        let report = comparison::compare_engines(&text, &runtime.scanner);
        print_report(&report, &runtime.comparison)?;
    } else {
        interactive_loop(&runtime)?;
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                let path = args
                    .get(i + 1)
                    .ok_or_else(|| "--config requires a file path".to_string())?;
                options.config_path = Some(path.clone());
                i += 1;
            }
            "--json" => options.json = true,
            "--batch" => options.batch = true,
            "--help" | "-h" => options.help = true,
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown option '{}'", flag));
            }
            word => options.text.push(word.to_string()),
        }
        i += 1;
    }

    if options.batch && !options.text.is_empty() {
        return Err("--batch does not take input text".to_string());
    }

    Ok(options)
}

fn print_usage() {
    println!("fa-compare v{}", build_info::version());
    println!("Compare plain (FA), auxiliary-variable (XFA) and lookahead (HFA) scanners");
    println!();
    println!("USAGE:");
    println!("    fa-compare [--config FILE] [--json] TEXT...    # Compare one input");
    println!("    fa-compare [--config FILE] [--json] --batch    # Run the built-in cases");
    println!("    fa-compare [--config FILE]                     # Read inputs from stdin");
    println!();
    println!("OPTIONS:");
    println!("    --config FILE    Load runtime preferences from a TOML file");
    println!("    --json           Print reports as JSON");
    println!("    --batch          Compare the {} built-in cases", comparison::BUILTIN_CASES.len());
    println!("    --help           Show this help message");
    println!();
    print!("{}", comparison::help_text());
}

fn print_report(
    report: &ComparisonReport,
    preferences: &ComparisonPreferences,
) -> Result<(), ComparisonError> {
    match preferences.output_format {
        OutputFormat::Text => println!("{}", report.render_text(preferences)),
        OutputFormat::Json => {
            let json = report.to_json().inspect_err(|error| {
                log_error!(error.error_code(), "Failed to render report", "error" => error);
            })?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn run_batch_mode(runtime: &RuntimeConfig) -> Result<(), ComparisonError> {
    let results = comparison::run_batch(&comparison::BUILTIN_CASES, &runtime.scanner);

    if runtime.comparison.output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&results.reports)?);
        return Ok(());
    }

    for (index, report) in results.reports.iter().enumerate() {
        println!("\nTest Case {}/{}", index + 1, results.case_count());
        print_report(report, &runtime.comparison)?;
    }

    println!("{}", results.summary());
    let differing = results.differing_cases();
    if !differing.is_empty() {
        let cases: Vec<String> = differing.iter().map(|i| (i + 1).to_string()).collect();
        println!("Pattern results differ in cases: {}", cases.join(", "));
    }

    Ok(())
}

fn interactive_loop(runtime: &RuntimeConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("FA / XFA / HFA scanner comparison");
    println!("Type 'help' for examples or 'quit' to exit.");

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("\nEnter text to analyze: ");
        io::stdout().flush()?;

        line.clear();
        let read = stdin.lock().read_line(&mut line).inspect_err(|error| {
            log_error!(codes::input::INPUT_READ_FAILURE, "Failed to read input line",
                "error" => error
            );
        })?;
        if read == 0 {
            break;
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") {
            println!("Goodbye!");
            break;
        }
        if input.eq_ignore_ascii_case("help") {
            print!("{}", comparison::help_text());
            continue;
        }
        if input.is_empty() {
            log_error!(codes::input::EMPTY_INPUT, "Empty input rejected");
            println!("Please enter some text to analyze!");
            continue;
        }

        let report = comparison::compare_engines(input, &runtime.scanner);
        print_report(&report, &runtime.comparison)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_text_words() {
        let options = parse_args(&args(&["if", "(ab", "==", "cd)"])).unwrap();
        assert_eq!(options.text.join(" "), "if (ab == cd)");
        assert!(!options.batch);
        assert!(!options.json);
    }

    #[test]
    fn test_parse_flags() {
        let options = parse_args(&args(&["--config", "fa.toml", "--json", "--batch"])).unwrap();
        assert_eq!(options.config_path.as_deref(), Some("fa.toml"));
        assert!(options.json);
        assert!(options.batch);
        assert!(options.text.is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["--config"])).is_err());
        assert!(parse_args(&args(&["--threads", "4"])).is_err());
        assert!(parse_args(&args(&["--batch", "ab cd"])).is_err());
    }

    #[test]
    fn test_no_arguments_means_interactive() {
        assert_eq!(parse_args(&[]).unwrap(), CliOptions::default());
    }
}
