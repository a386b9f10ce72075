use anyhow::Result;
use clap::Parser;

use pig_voxels::config::SolverArgs;
use pig_voxels::solver::{self, PigRules};

fn main() -> Result<()> {
    env_logger::init();
    let args = SolverArgs::parse();

    let rules = PigRules::new(args.die, args.goal)?;
    println!("Calculating optimal play matrix...");
    let solution = solver::solve(rules, args.epsilon)?;

    match args.query.as_deref() {
        Some(&[i, j, k]) => {
            let q = solution.query(i, j, k);
            println!("My score = {i}");
            println!("Opponent's score = {j}");
            println!("Turn total = {k}");
            println!("Probability of winning = {:.4}%", 100.0 * q.p_win);
            println!("Optimal action = {}", q.action);
        }
        _ => {
            solution.save(&args.out)?;
            println!(
                "Saved {} states to {}",
                solution.state_count(),
                args.out.display()
            );
        }
    }
    Ok(())
}
