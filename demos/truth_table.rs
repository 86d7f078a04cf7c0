use clap::Parser;

use logic_equiv::{extract_variables, parse, TruthTableGenerator, VariableOrder};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Boolean expression, in keyword or symbolic notation.
    #[arg(value_name = "EXPR")]
    expr: String,

    /// Print the table as CSV instead.
    #[clap(long)]
    csv: bool,
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

    let expr = parse(&args.expr)?;
    let order = VariableOrder::new(extract_variables(&args.expr));
    let table = TruthTableGenerator::default().generate_expr(&expr, &order)?;

    if args.csv {
        print!("{}", table.to_csv());
        return Ok(());
    }

    println!("expr = {}", expr);
    println!("simplified = {}", expr.simplify());
    println!("variables = {}", order);
    println!();
    println!("{}", table);
    println!("minterms = {:?}", table.minterms());
    println!("maxterms = {:?}", table.maxterms());
    println!("signature = {}", table.signature());
    println!("SOP = {}", table.sum_of_products());
    println!("POS = {}", table.product_of_sums());

    if let Some(kmap) = table.karnaugh_map() {
        println!();
        println!("{}", kmap);
    }

    Ok(())
}
