use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crossgen::puzzle::Crossword;
use crossgen::solve::Solver;

#[test]
fn test_puzzles() -> Result<()> {
    for dir in puzzle_dirs("res/test/puzzles/solvable")? {
        println!("Solving {}", dir.display());
        let crossword = load_puzzle(&dir)?;
        let result = Solver::new(&crossword).solve();
        let solution = result
            .solved()
            .unwrap_or_else(|| panic!("Could not solve {}", dir.display()));
        assert!(
            crossword.verify_solution(solution),
            "invalid solution for {}",
            dir.display()
        );
    }
    for dir in puzzle_dirs("res/test/puzzles/unsolvable")? {
        println!("Solving {}", dir.display());
        let crossword = load_puzzle(&dir)?;
        assert!(
            !Solver::new(&crossword).solve().is_solved(),
            "{} should be unsolvable",
            dir.display()
        );
    }
    Ok(())
}

fn puzzle_dirs(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let mut dirs: Vec<_> = fs::read_dir(project_path(path))?
        .map(|entry| entry.unwrap().path())
        .collect();
    dirs.sort_unstable();
    Ok(dirs)
}

fn load_puzzle(dir: &Path) -> Result<Crossword> {
    let crossword = Crossword::from_files(dir.join("structure.txt"), dir.join("words.txt"))?;
    Ok(crossword)
}

fn project_path(path: impl AsRef<Path>) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(path)
}
