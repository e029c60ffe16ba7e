use std::path::{Path, PathBuf};

use clap::ArgMatches;

#[derive(Clone)]
pub(crate) struct Options {
    structure: PathBuf,
    words: PathBuf,
    output_image: Option<PathBuf>,
}

impl Options {
    pub fn from_args() -> Self {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Self {
        Self {
            structure: matches.value_of("structure").unwrap().into(),
            words: matches.value_of("words").unwrap().into(),
            output_image: matches.value_of("output_image").map(Into::into),
        }
    }

    pub fn structure(&self) -> &Path {
        &self.structure
    }

    pub fn words(&self) -> &Path {
        &self.words
    }

    pub fn output_image(&self) -> Option<&Path> {
        self.output_image.as_deref()
    }
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, Arg};

    App::new("Crossgen")
        .help_message("Generate filled crossword puzzles")
        .arg(
            Arg::with_name("structure")
                .value_name("STRUCTURE")
                .required(true)
                .help("file describing the grid layout ('_' marks open cells)"),
        )
        .arg(
            Arg::with_name("words")
                .value_name("WORDS")
                .required(true)
                .help("file listing one candidate word per line"),
        )
        .arg(
            Arg::with_name("output_image")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("PATH")
                .help("save an SVG image of the solved puzzle"),
        )
}
