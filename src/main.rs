use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;

use keycalc::{format_result, AngleUnit, Calculator, Evaluator, Settings};

#[derive(Parser, Debug)]
#[command(name = "keycalc", version, about = "Evaluate infix math expressions")]
struct Cli {
    /// Take and return angles in radians instead of degrees
    #[arg(long)]
    radians: bool,

    /// Read button labels (`7 x^y 2 =`) instead of expressions
    #[arg(long, conflicts_with = "expressions")]
    keypad: bool,

    /// Expressions to evaluate; starts an interactive prompt when omitted
    expressions: Vec<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = Settings {
        angle: if cli.radians {
            AngleUnit::Radians
        } else {
            AngleUnit::Degrees
        },
    };

    if !cli.expressions.is_empty() {
        let evaluator = Evaluator::new(settings);
        let mut failed = false;
        for expr in &cli.expressions {
            match evaluator.evaluate(expr) {
                Ok(value) => println!("{}", format_result(value)),
                Err(err) => {
                    println!("Error: {}", err);
                    failed = true;
                }
            }
        }
        return Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS });
    }

    if cli.keypad {
        keypad_loop(settings)?;
    } else {
        expression_loop(settings)?;
    }

    Ok(ExitCode::SUCCESS)
}

fn prompt(text: &str) -> io::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn expression_loop(settings: Settings) -> anyhow::Result<()> {
    let evaluator = Evaluator::new(settings);
    println!("Enter a math expression ({}):", settings.angle);

    while let Some(line) = prompt("> ")? {
        if line.trim().is_empty() {
            continue;
        }
        match evaluator.evaluate(&line) {
            Ok(value) => println!("\t{}", format_result(value)),
            Err(err) => println!("\tError: {}", err),
        }
    }

    Ok(())
}

fn keypad_loop(settings: Settings) -> anyhow::Result<()> {
    let mut calc = Calculator::<64>::new(settings);
    println!("Enter button labels separated by spaces ({}):", settings.angle);

    while let Some(line) = prompt("> ")? {
        for label in line.split_whitespace() {
            if let Err(err) = calc.press_label(label) {
                println!("\t{}: {}", label, err);
            }
        }
        println!("\t[{}] {}", calc.input(), calc.status());
    }

    Ok(())
}
