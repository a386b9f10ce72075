use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_PATH: &str = "savedsolution.csv";
pub const DEFAULT_GRID_SIZE: usize = 100;

/// Voxel viewer for Pig strategy tables.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct ViewerArgs {
    /// Source CSV: header row, then x,y,z,roll integer columns
    #[arg(long, default_value = DEFAULT_PATH)]
    pub path: PathBuf,

    /// Cells per side of the occupancy volume
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE, value_parser = parse_grid_size)]
    pub grid_size: usize,
}

/// Solve Pig for optimal play and save the strategy table.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct SolverArgs {
    /// Faces on the die
    #[arg(long, default_value_t = 6)]
    pub die: usize,

    /// Score needed to win; also the side of the resulting grid
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    pub goal: usize,

    /// Stop iterating a layer once no value moves by this much
    #[arg(long, default_value_t = crate::solver::DEFAULT_EPSILON)]
    pub epsilon: f64,

    /// Where to write the `i,j,k,roll,p` table
    #[arg(long, default_value = DEFAULT_PATH)]
    pub out: PathBuf,

    /// Print win probability and best action for a state instead of saving
    #[arg(long, num_args = 3, value_names = ["OWN", "OPPONENT", "TURN"])]
    pub query: Option<Vec<usize>>,
}

fn parse_grid_size(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("{e}"))?;
    if n == 0 {
        return Err("grid size must be at least 1".to_string());
    }
    if n.checked_pow(3).is_none() {
        return Err(format!("grid size {n} has too many cells"));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = ViewerArgs::try_parse_from(["pig-voxels"]).unwrap();
        assert_eq!(args.path, PathBuf::from(DEFAULT_PATH));
        assert_eq!(args.grid_size, 100);
    }

    #[test]
    fn explicit_path_and_size() {
        let args =
            ViewerArgs::try_parse_from(["pig-voxels", "--path", "data/run.csv", "--grid-size", "20"])
                .unwrap();
        assert_eq!(args.path, PathBuf::from("data/run.csv"));
        assert_eq!(args.grid_size, 20);
    }

    #[test]
    fn solver_query_takes_three_values() {
        let args =
            SolverArgs::try_parse_from(["pig-solver", "--goal", "20", "--query", "1", "2", "3"])
                .unwrap();
        assert_eq!(args.goal, 20);
        assert_eq!(args.die, 6);
        assert_eq!(args.query, Some(vec![1, 2, 3]));
        assert!(SolverArgs::try_parse_from(["pig-solver", "--query", "1", "2"]).is_err());
    }

    #[test]
    fn zero_grid_is_rejected() {
        assert!(ViewerArgs::try_parse_from(["pig-voxels", "--grid-size", "0"]).is_err());
    }

    #[test]
    fn overflowing_grid_is_rejected() {
        let huge = (1usize << 22).to_string();
        assert!(ViewerArgs::try_parse_from(["pig-voxels", "--grid-size", huge.as_str()]).is_err());
    }
}
