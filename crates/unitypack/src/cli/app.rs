use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Clone, Debug, Parser)]
#[command(name = "unitypack", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct App {
    /// Package to extract
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Destination output folder. Defaults to the name of the input archive without suffix
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Does not write metadata files (.meta) alongside the asset files
    #[arg(long)]
    pub nometa: bool,

    /// Hide the progress display
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        App::command().debug_assert();
    }

    #[test]
    fn parses_all_flags() {
        let app =
            App::try_parse_from(["unitypack", "pack.unitypackage", "-o", "out", "--nometa", "-vv"])
                .unwrap();
        assert_eq!(app.archive, PathBuf::from("pack.unitypackage"));
        assert_eq!(app.output, Some(PathBuf::from("out")));
        assert!(app.nometa);
        assert!(!app.quiet);
        assert_eq!(app.verbose, 2);
    }

    #[test]
    fn long_output_flag() {
        let app = App::try_parse_from(["unitypack", "--output", "dest", "a.unitypackage"]).unwrap();
        assert_eq!(app.output, Some(PathBuf::from("dest")));
        assert!(!app.nometa);
    }

    #[test]
    fn archive_is_required() {
        let err = App::try_parse_from(["unitypack"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
