use crate::cli::RunArgs;
use crate::config;
use crate::error::{CliError, Result};
use aimlj::core::io::ligand::LigandFile;
use aimlj::core::io::nonbonded_csv;
use aimlj::core::models::ligand::Ligand;
use aimlj::engine::config::LjConfig;
use aimlj::engine::error::EngineError;
use aimlj::workflows::parametrize::{self, AtomStatus, ParametrizationReport};
use rayon::prelude::*;
use std::path::Path;
use tracing::{info, warn};

pub fn run(args: RunArgs) -> Result<()> {
    let config = config::resolve(&args)?;

    info!(
        "Parametrising {} ligand file(s) on up to {} thread(s).",
        args.inputs.len(),
        rayon::current_num_threads()
    );

    let results: Vec<(Ligand, ParametrizationReport)> = args
        .inputs
        .par_iter()
        .map(|path| parametrise_file(path, &config))
        .collect::<Result<_>>()?;

    for (ligand, report) in &results {
        summarize(ligand, report);
    }

    let ligands = results.iter().map(|(ligand, _)| ligand);
    match &args.output {
        Some(path) => {
            nonbonded_csv::write_to_path(ligands, path).map_err(EngineError::from)?;
            println!(
                "Parameters for {} ligand(s) written to: {}",
                results.len(),
                path.display()
            );
        }
        None => {
            nonbonded_csv::write_to(ligands, std::io::stdout().lock(), "<stdout>")
                .map_err(EngineError::from)?;
        }
    }

    Ok(())
}

fn parametrise_file(path: &Path, config: &LjConfig) -> Result<(Ligand, ParametrizationReport)> {
    let mut ligand = LigandFile::read_from_path(path).map_err(|e| CliError::Ligand {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    info!(
        "Loaded ligand '{}' ({} atoms) from {:?}",
        ligand.name,
        ligand.atom_count(),
        path
    );
    let report = parametrize::run(&mut ligand, config);
    Ok((ligand, report))
}

fn summarize(ligand: &Ligand, report: &ParametrizationReport) {
    for atom in report.unparametrised() {
        warn!(
            "Ligand '{}': no reference data for atom {} ({}); sigma and epsilon set to zero.",
            ligand.name, atom.atom_index, atom.lookup_symbol
        );
    }
    eprintln!(
        "{}: {} parametrised, {} polar hydrogen(s) absorbed, {} unparametrised",
        ligand.name,
        report.count(AtomStatus::Parametrised),
        report.count(AtomStatus::AbsorbedPolarHydrogen),
        report.count(AtomStatus::Unparametrised)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    const WATER: &str = r#"
name = "water"

[[atoms]]
element = "O"
aim-volume = 24.0
charge = -0.8

[[atoms]]
element = "H"
aim-volume = 2.9
charge = 0.4

[[atoms]]
element = "H"
aim-volume = 3.1
charge = 0.4

[[bonds]]
atoms = [0, 1]

[[bonds]]
atoms = [0, 2]
"#;

    fn run_args(argv: Vec<String>) -> RunArgs {
        match Cli::parse_from(argv).command {
            Commands::Run(args) => args,
            _ => panic!("Expected 'run' subcommand"),
        }
    }

    #[test]
    fn run_writes_csv_for_every_input() {
        let dir = tempdir().unwrap();
        let water = dir.path().join("water.toml");
        let methane = dir.path().join("methane.toml");
        let output = dir.path().join("params.csv");
        fs::write(&water, WATER).unwrap();
        fs::write(&methane, "[[atoms]]\nelement = \"C\"\naim-volume = 30.0\n").unwrap();

        let args = run_args(vec![
            "aimlj".into(),
            "run".into(),
            water.to_string_lossy().into_owned(),
            methane.to_string_lossy().into_owned(),
            "--no-optimise-output".into(),
            "-o".into(),
            output.to_string_lossy().into_owned(),
        ]);
        run(args).unwrap();

        let mut reader = csv::Reader::from_path(&output).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[0][0], "water");
        assert_eq!(&rows[0][4], "-0.8");
        assert_eq!(&rows[1][5], "0.0");
        assert_eq!(&rows[3][0], "methane");
        assert!(rows[3][5].parse::<f64>().unwrap() > 0.0);
    }

    #[test]
    fn run_fails_with_path_of_broken_ligand() {
        let dir = tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "[[atoms]]\nelement = \"C\"\n").unwrap();

        let args = run_args(vec![
            "aimlj".into(),
            "run".into(),
            broken.to_string_lossy().into_owned(),
            "--no-optimise-output".into(),
        ]);
        let result = run(args);

        match result {
            Err(CliError::Ligand { path, .. }) => assert_eq!(path, broken),
            other => panic!("Expected a ligand error, got {:?}", other),
        }
    }
}
