use clap::Parser;

use logic_equiv::checker::{CheckerConfig, EquivalenceChecker, Verdict};
use logic_equiv::{extract_variables, normalize, TruthTableGenerator, VariableOrder};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Expression to grade.
    #[arg(value_name = "EXPR")]
    user: String,

    /// Reference answer.
    #[arg(value_name = "EXPR")]
    canonical: String,

    /// Maximum number of distinct variables.
    #[clap(long, value_name = "INT", default_value = "10")]
    max_vars: usize,

    /// Print both truth tables.
    #[clap(long)]
    table: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    println!("args = {:?}", args);

    let config = CheckerConfig::default().try_with_max_vars(args.max_vars)?;
    let checker = EquivalenceChecker::with_config(config);

    let user = normalize(&args.user);
    let canonical = normalize(&args.canonical);
    println!("user      = {}", user);
    println!("canonical = {}", canonical);

    if args.table {
        let order = VariableOrder::union(&extract_variables(&user), &extract_variables(&canonical));
        let gen = TruthTableGenerator::new(args.max_vars);
        println!("user table:\n{}", gen.generate(&user, &order)?);
        println!("canonical table:\n{}", gen.generate(&canonical, &order)?);
    }

    match checker.check(&args.user, &args.canonical) {
        Verdict::Equivalent => println!("EQUIVALENT"),
        Verdict::NotEquivalent(report) => {
            println!(
                "NOT EQUIVALENT: {} of {} rows match ({:.1}%)",
                report.matches.len(),
                report.total(),
                report.accuracy()
            );
            for mismatch in &report.mismatches {
                println!("  {}", mismatch);
            }
        }
        Verdict::Invalid { side, error } => match side {
            Some(side) => println!("INVALID ({:?}): {}", side, error),
            None => println!("INVALID: {}", error),
        },
    }

    Ok(())
}
