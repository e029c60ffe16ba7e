#![warn(rust_2018_idioms)]

use anyhow::Result;
use crossgen::image::PuzzleImageBuilder;
use crossgen::puzzle::Crossword;
use crossgen::solve::{SolveResult, Solver};

use crate::options::Options;

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args();
    println!(
        "Reading puzzle from \"{}\" and \"{}\"",
        options.structure().display(),
        options.words().display()
    );
    let crossword = Crossword::from_files(options.structure(), options.words())?;
    match Solver::new(&crossword).solve() {
        SolveResult::Unsolvable => println!("No solution."),
        SolveResult::Solved(solution) => {
            print!("{}", crossword.display_solution(&solution));
            if let Some(path) = options.output_image() {
                let mut builder = PuzzleImageBuilder::new(&crossword);
                builder.solution(&solution);
                builder.build().save(path)?;
                println!("Saved image to {}", path.display());
            }
        }
    }
    Ok(())
}
