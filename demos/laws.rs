use clap::{Parser, ValueEnum};
use log::info;

use truth_table::equiv::find_counterexample;
use truth_table::expr::Expr;
use truth_table::table::{Alignment, TableConfig, TruthTable};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Law {
    /// (A ⇒ B) vs (¬A ∨ B)
    Implication,
    /// (A ↑ B) vs ¬(A ∧ B)
    DeMorganNand,
    /// (A ↓ B) vs (¬A ∧ ¬B)
    DeMorganNor,
    /// (A ⇒ B) vs (¬B ⇒ ¬A)
    Contraposition,
    /// (A ∧ (B ∨ C)) vs ((A ∧ B) ∨ (A ∧ C))
    Distributivity,
    /// (A + B) vs (A ⊖ B)
    XorSymmetricDifference,
    /// (A ∧ C) vs (A ∨ C), not a law
    Bogus,
}

impl Law {
    fn sides(self) -> (Expr, Expr) {
        match self {
            Law::Implication => (Expr::implies("A", "B"), Expr::or(Expr::not("A"), "B")),
            Law::DeMorganNand => (Expr::nand("A", "B"), Expr::not(Expr::and("A", "B"))),
            Law::DeMorganNor => (Expr::nor("A", "B"), Expr::and(Expr::not("A"), Expr::not("B"))),
            Law::Contraposition => (Expr::implies("A", "B"), Expr::implies(Expr::not("B"), Expr::not("A"))),
            Law::Distributivity => (
                Expr::and("A", Expr::or("B", "C")),
                Expr::or(Expr::and("A", "B"), Expr::and("A", "C")),
            ),
            Law::XorSymmetricDifference => (Expr::xor("A", "B"), Expr::symmetric_difference("A", "B")),
            Law::Bogus => (Expr::and("A", "C"), Expr::or("A", "C")),
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Law to check.
    #[arg(value_enum, default_value = "implication")]
    law: Law,

    /// Also show the normalized (AND/OR/NOT) form of both sides.
    #[clap(long)]
    normalize: bool,

    /// Render truth values as 1/0 instead of T/F.
    #[clap(long)]
    binary: bool,

    /// Enable debug logging.
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    info!("args = {:?}", args);

    let (lhs, rhs) = args.law.sides();
    let mut exprs = vec![lhs.clone(), rhs.clone()];
    if args.normalize {
        exprs.push(lhs.normalize());
        exprs.push(rhs.normalize());
    }

    let config = if args.binary {
        TableConfig {
            true_symbol: "1",
            false_symbol: "0",
            alignment: Alignment::Center,
        }
    } else {
        TableConfig::default()
    };

    let table = TruthTable::build(&exprs)?;
    println!("{}", table.render_with_config(&config));
    println!();

    match find_counterexample(&[lhs.clone(), rhs.clone()])? {
        None => println!("{} and {} are equivalent", lhs, rhs),
        Some(cex) => println!("{} and {} differ on {}", lhs, rhs, cex.env),
    }

    Ok(())
}
