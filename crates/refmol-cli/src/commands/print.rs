use crate::cli::Cli;
use crate::config::Settings;
use crate::error::{CliError, Result};
use refmol::core::data::presets;
use refmol::core::io::coords::CoordFormat;
use refmol::core::models::molecule::Molecule;
use refmol::workflows::print::{self, ReportConfig};
use std::fs::File;
use std::io::{self, BufWriter};
use tracing::info;

/// Runs the coordinate report: resolves the molecule selection, opens the
/// output target, and hands off to the library workflow.
pub fn run(cli: &Cli, settings: &Settings) -> Result<()> {
    let molecules = select_molecules(&cli.molecules)?;
    let config = ReportConfig {
        format: CoordFormat {
            precision: settings.precision,
        },
    };

    match &settings.output {
        Some(path) => {
            info!("Writing coordinate report to '{}'.", path.display());
            let file = File::create(path)?;
            let mut writer = BufWriter::new(file);
            print::run(&molecules, &config, &mut writer)?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            print::run(&molecules, &config, &mut writer)?;
        }
    }
    Ok(())
}

/// Maps the `--molecule` selection to built-in geometries. An empty
/// selection means all of them; a non-empty one filters, keeping the
/// built-in order regardless of the order the names were given in.
fn select_molecules(names: &[String]) -> Result<Vec<Molecule>> {
    if names.is_empty() {
        return Ok(presets::builtin());
    }

    for name in names {
        if presets::by_name(name).is_none() {
            return Err(CliError::Argument(format!(
                "unknown molecule '{}' (available: water, formaldehyde)",
                name
            )));
        }
    }

    Ok(presets::builtin()
        .into_iter()
        .filter(|molecule| {
            names
                .iter()
                .any(|name| molecule.name().eq_ignore_ascii_case(name.trim()))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn names(molecules: &[Molecule]) -> Vec<&str> {
        molecules.iter().map(|molecule| molecule.name()).collect()
    }

    #[test]
    fn empty_selection_means_both_in_order() {
        let selected = select_molecules(&[]).unwrap();
        assert_eq!(names(&selected), vec!["Water", "Formaldehyde"]);
    }

    #[test]
    fn selection_keeps_builtin_order() {
        let requested = vec!["formaldehyde".to_string(), "water".to_string()];
        let selected = select_molecules(&requested).unwrap();
        assert_eq!(names(&selected), vec!["Water", "Formaldehyde"]);
    }

    #[test]
    fn single_selection_is_honored() {
        let requested = vec!["WATER".to_string()];
        let selected = select_molecules(&requested).unwrap();
        assert_eq!(names(&selected), vec!["Water"]);
    }

    #[test]
    fn unknown_selection_is_an_argument_error() {
        let requested = vec!["benzene".to_string()];
        assert!(matches!(
            select_molecules(&requested),
            Err(CliError::Argument(_))
        ));
    }

    #[test]
    fn report_written_to_file_matches_the_contract() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let cli = Cli::parse_from(["refmol", "--output", path.to_str().unwrap()]);
        let settings = crate::config::resolve(&cli).unwrap();

        run(&cli, &settings).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines[0], "Water coordinates");
        assert_eq!(lines[5], "Formaldehyde coordinates");
        assert!(text.ends_with("\n\n"));
    }

    #[test]
    fn unwritable_output_path_fails() {
        let cli = Cli::parse_from(["refmol", "--output", "/no/such/dir/report.txt"]);
        let settings = crate::config::resolve(&cli).unwrap();
        assert!(matches!(run(&cli, &settings), Err(CliError::Io(_))));
    }
}
