//! Build command handler

use std::path::Path;

use anyhow::{Context, Result};

use plasma_compose::presentation::{create_build_use_case, output};
use plasma_compose::{BuildOptions, PackageSelection, StalePolicy};

use super::ProjectContext;

pub fn cmd_build(
    project_root: Option<&Path>,
    packages: Vec<PackageSelection>,
    no_clean: bool,
    json: bool,
) -> Result<()> {
    let ctx = ProjectContext::load(project_root, packages)?;

    let mut options = BuildOptions::from_config(&ctx.config, &ctx.root);
    if no_clean {
        options = options.with_stale_policy(StalePolicy::MergeOnly);
    }

    let use_case = create_build_use_case(options, json);
    let result = use_case
        .build(&ctx.selections)
        .context("Compose build failed")?;

    if !json {
        print!("{}", output::render_summary(&result));
    }
    Ok(())
}
