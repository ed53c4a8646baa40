#[macro_use]
extern crate tracing;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use kmap_solver::{grid::gray_codes, utils, Grid, KMapResult, Problem, Solution, Solver, SolverOptions, TruthTable};
use rayon::prelude::*;
use serde::Deserialize;
use serde_json::json;
use std::{
    fmt::Write as _,
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::PathBuf,
    time::Instant,
};

#[derive(Debug, Parser)]
#[clap(version, about = "Minimal sum-of-products expressions from Karnaugh maps")]
struct Args {
    /// Variable names, most significant first
    #[clap(short, long, default_value = "ABCD")]
    variables: String,

    /// Cells that must evaluate to 1
    #[clap(short, long, value_parser, value_delimiter = ',')]
    minterms: Vec<usize>,

    /// Cells whose value does not matter
    #[clap(short, long, value_parser, value_delimiter = ',')]
    dont_cares: Vec<usize>,

    /// Input truth table (CSV)
    #[clap(short, long, value_parser, conflicts_with = "batch")]
    truth_table: Option<PathBuf>,

    /// Input batch of problems (JSON)
    #[clap(short, long, value_parser)]
    batch: Option<PathBuf>,

    /// Output file
    #[clap(short, long, value_parser)]
    output: Option<PathBuf>,

    /// Output format
    #[clap(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Number of threads
    #[clap(short, long)]
    num_threads: Option<usize>,

    /// Cover-search nodes visited before giving up
    #[clap(long)]
    max_combinations: Option<usize>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Deserialize)]
struct Batch {
    #[serde(default)]
    options: SolverOptions,
    problems: Vec<Problem>,
}

fn load_problems(args: &Args) -> Result<(SolverOptions, Vec<Problem>)> {
    if let Some(path) = &args.batch {
        info!("load batch from {}...", path.display());
        let f = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
        let batch: Batch = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("cannot parse {}", path.display()))?;
        return Ok((batch.options, batch.problems));
    }

    let problem = match &args.truth_table {
        Some(path) => TruthTable::load(path)?.to_problem()?,
        None => {
            let variables = utils::parse_variables(&args.variables)?;
            Problem::new(&variables, &args.minterms, &args.dont_cares)?
        }
    };
    Ok((SolverOptions::default(), vec![problem]))
}

/// The map in Gray-code order, rows labelled by the leading variables.
fn render_map(problem: &Problem) -> Result<String> {
    let variables = problem.variables();
    let codes = gray_codes(variables.len()).context("unsupported variable count")?;
    let grid = Grid::new(variables.len())?;
    let split = codes.rows[0].len();
    let row_vars: String = variables[..split].iter().collect();
    let col_vars: String = variables[split..].iter().collect();
    let width = split.max(row_vars.len());

    let mut s = String::new();
    write!(s, "{:width$} {}", "", col_vars)?;
    for col in codes.cols {
        write!(s, " {col:>2}")?;
    }
    writeln!(s)?;
    writeln!(s, "{row_vars:width$}")?;
    for (code, row) in codes.rows.iter().zip(grid.layout()) {
        write!(s, "{code:width$} {:width2$}", "", width2 = col_vars.len())?;
        for decimal in row {
            write!(s, " {:>2}", problem.value(decimal))?;
        }
        writeln!(s)?;
    }
    Ok(s)
}

fn write_text(out: &mut impl Write, problems: &[Problem], results: &[KMapResult<Solution>]) -> Result<()> {
    for (i, (problem, result)) in problems.iter().zip(results).enumerate() {
        if problems.len() > 1 {
            writeln!(out, "# problem {}", i)?;
        }
        write!(out, "{}", render_map(problem)?)?;
        match result {
            Ok(solution) => {
                for exp in &solution.solutions {
                    writeln!(out, "{exp}")?;
                }
            }
            Err(e) => writeln!(out, "error: {e}")?,
        }
    }
    Ok(())
}

fn write_json(out: &mut impl Write, problems: &[Problem], results: &[KMapResult<Solution>]) -> Result<()> {
    let entries: Vec<_> = problems
        .iter()
        .zip(results)
        .map(|(problem, result)| match result {
            Ok(solution) => json!({
                "problem": problem,
                "solutions": solution.solutions,
                "groups": solution.groups,
            }),
            Err(e) => json!({
                "problem": problem,
                "error": e.to_string(),
            }),
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &entries)?;
    writeln!(out)?;
    Ok(())
}

fn main() -> Result<()> {
    utils::init_tracing_subscriber("info")?;
    let args = Args::parse();
    info!("args: {:#?}", args);
    utils::setup_rayon(args.num_threads)?;

    let begin = Instant::now();
    let (mut options, problems) = load_problems(&args)?;
    if let Some(max_combinations) = args.max_combinations {
        options.max_combinations = max_combinations;
    }
    let solver = Solver::new(options);

    let results: Vec<KMapResult<Solution>> = problems.par_iter().map(|p| solver.solve(p)).collect();
    info!(
        "solved {} problem(s) in {:?}",
        problems.len(),
        Instant::now() - begin
    );

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    match args.format {
        Format::Text => write_text(&mut out, &problems, &results)?,
        Format::Json => write_json(&mut out, &problems, &results)?,
    }
    out.flush()?;

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        bail!("{} of {} problem(s) failed", failed, results.len());
    }
    Ok(())
}
