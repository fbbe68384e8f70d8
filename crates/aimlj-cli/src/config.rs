use crate::cli::RunArgs;
use crate::error::Result;
use aimlj::core::forcefield::optimise::optimise_output_path;
use aimlj::core::forcefield::reference::ReferenceFile;
use aimlj::core::forcefield::units::UnitConversion;
use aimlj::engine::config::{LjConfig, LjConfigBuilder, OverrideOutcome, OverrideSkipReason};
use aimlj::engine::error::EngineError;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Where the optimiser output for a run comes from.
#[derive(Debug, Clone, PartialEq)]
enum OptimiseSource {
    Disabled,
    /// Conventional location; a missing file is expected and only logged at debug level.
    Discovered(PathBuf),
    /// Named on the command line; a missing or unusable file is worth a warning.
    Explicit(PathBuf),
}

/// Builds the run configuration from the command line.
///
/// Layers are applied in order, each on top of the previous one: built-in defaults,
/// the `--reference` file, the optimiser output, then `--alpha`/`--beta`.
pub fn resolve(args: &RunArgs) -> Result<LjConfig> {
    let mut config = base_config(args.identity_units)?;

    if let Some(path) = &args.reference {
        info!("Loading reference table overrides from {:?}", path);
        let file = ReferenceFile::load(path).map_err(EngineError::from)?;
        config = config.with_reference_file(&file);
    }

    match optimise_source(args)? {
        OptimiseSource::Disabled => debug!("Optimiser output disabled."),
        OptimiseSource::Discovered(path) => {
            config = apply_optimise_output(config, &path, false);
        }
        OptimiseSource::Explicit(path) => {
            config = apply_optimise_output(config, &path, true);
        }
    }

    let mut builder = LjConfigBuilder::new()
        .reference(config.reference)
        .exponents(config.exponents)
        .units(config.units);
    if let Some(alpha) = args.alpha {
        builder = builder.alpha(alpha);
    }
    if let Some(beta) = args.beta {
        builder = builder.beta(beta);
    }
    let config = builder.build().map_err(EngineError::from)?;

    debug!(
        alpha = config.exponents.alpha,
        beta = config.exponents.beta,
        rows = config.reference.len(),
        "Resolved Lennard-Jones configuration."
    );
    Ok(config)
}

fn base_config(identity_units: bool) -> Result<LjConfig> {
    let units = if identity_units {
        UnitConversion::identity()
    } else {
        UnitConversion::default()
    };
    Ok(LjConfigBuilder::new()
        .units(units)
        .build()
        .map_err(EngineError::from)?)
}

fn optimise_source(args: &RunArgs) -> Result<OptimiseSource> {
    if args.no_optimise_output {
        return Ok(OptimiseSource::Disabled);
    }
    if let Some(path) = &args.optimise_output {
        return Ok(OptimiseSource::Explicit(path.clone()));
    }
    let work_dir = match &args.work_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    Ok(OptimiseSource::Discovered(optimise_output_path(&work_dir)))
}

fn apply_optimise_output(config: LjConfig, path: &Path, explicit: bool) -> LjConfig {
    match config.apply_optimise_file(path) {
        OverrideOutcome::Applied {
            config: updated,
            exponents_updated,
        } => {
            info!(
                "Applied optimised radii from {:?} (alpha/beta {}).",
                path,
                if exponents_updated {
                    "updated"
                } else {
                    "unchanged"
                }
            );
            updated
        }
        OverrideOutcome::Skipped(OverrideSkipReason::ArtifactMissing(_)) if !explicit => {
            debug!("No optimiser output at {:?}; using reference radii.", path);
            config
        }
        OverrideOutcome::Skipped(reason) => {
            warn!("Ignoring optimiser output: {}", reason);
            config
        }
    }
}
