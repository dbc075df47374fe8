use xyplot_nav::core::{DEFAULT_SIGNIFICANT_DIGITS, suggest_ticks};
use xyplot_nav::telemetry;

const USAGE: &str = "Usage: axis_lbl <x_min> <x_max> <n> [--precision <digits>] [--json]";

#[derive(Debug, PartialEq)]
enum Command {
    Run(CliArgs),
    Help,
}

#[derive(Debug, PartialEq)]
struct CliArgs {
    x_min: f64,
    x_max: f64,
    min_intervals: usize,
    precision: u8,
    json: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        eprintln!("{USAGE}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let _ = telemetry::init_tracing_with_fallback("warn");
    let args = match parse_args(std::env::args().skip(1))? {
        Command::Run(args) => args,
        Command::Help => {
            println!("{USAGE}");
            return Ok(());
        }
    };

    let plan = suggest_ticks(args.x_min, args.x_max, args.min_intervals, args.precision)
        .map_err(|e| e.to_string())?;

    if args.json {
        let labels = plan.labels.to_labels();
        let json = serde_json::to_string_pretty(&labels)
            .map_err(|e| format!("failed to serialize labels: {e}"))?;
        println!("{json}");
    } else {
        println!("{}", plan.labels.texts().join(" "));
    }
    Ok(())
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command, String> {
    let mut positionals = Vec::new();
    let mut precision = DEFAULT_SIGNIFICANT_DIGITS;
    let mut json = false;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--precision" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --precision".to_owned())?;
                precision = value
                    .parse()
                    .map_err(|_| format!("invalid precision `{value}`"))?;
            }
            "--json" => json = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ if arg.starts_with("--") => {
                return Err(format!("unknown argument `{arg}`"));
            }
            _ => positionals.push(arg),
        }
    }

    let [x_min, x_max, n] = positionals.as_slice() else {
        return Err(format!(
            "expected 3 positional arguments, got {}",
            positionals.len()
        ));
    };

    Ok(Command::Run(CliArgs {
        x_min: parse_bound("x_min", x_min)?,
        x_max: parse_bound("x_max", x_max)?,
        min_intervals: n
            .parse()
            .map_err(|_| format!("invalid interval count `{n}`"))?,
        precision,
        json,
    }))
}

fn parse_bound(name: &str, value: &str) -> Result<f64, String> {
    value
        .parse()
        .map_err(|_| format!("invalid {name} `{value}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, String> {
        parse_args(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn parses_positionals_and_flags() {
        let command = parse(&["-1.5", "2", "4", "--precision", "5", "--json"]).expect("args");
        assert_eq!(
            command,
            Command::Run(CliArgs {
                x_min: -1.5,
                x_max: 2.0,
                min_intervals: 4,
                precision: 5,
                json: true,
            })
        );

        let Command::Run(args) = parse(&["0", "1", "10"]).expect("args") else {
            panic!("expected run command");
        };
        assert_eq!(args.precision, DEFAULT_SIGNIFICANT_DIGITS);
        assert!(!args.json);
    }

    #[test]
    fn help_flag_short_circuits() {
        assert_eq!(parse(&["--help"]), Ok(Command::Help));
        assert_eq!(parse(&["0", "-h"]), Ok(Command::Help));
    }

    #[test]
    fn reports_argument_errors() {
        assert_eq!(
            parse(&["0", "1"]),
            Err("expected 3 positional arguments, got 2".to_owned())
        );
        assert_eq!(
            parse(&["0", "1", "2", "--verbose"]),
            Err("unknown argument `--verbose`".to_owned())
        );
        assert_eq!(
            parse(&["0", "1", "2", "--precision"]),
            Err("missing value for --precision".to_owned())
        );
        assert_eq!(
            parse(&["0", "1", "2", "--precision", "x"]),
            Err("invalid precision `x`".to_owned())
        );
        assert_eq!(
            parse(&["zero", "1", "2"]),
            Err("invalid x_min `zero`".to_owned())
        );
        assert_eq!(
            parse(&["0", "1", "-2"]),
            Err("invalid interval count `-2`".to_owned())
        );
    }
}
