//! Inspect command handler

use std::path::Path;

use anyhow::{Context, Result};

use plasma_compose::presentation::output;
use plasma_compose::{BuildOptions, BuildUseCase, PackageSelection};

use super::ProjectContext;

pub fn cmd_inspect(
    project_root: Option<&Path>,
    packages: Vec<PackageSelection>,
    json: bool,
) -> Result<()> {
    let ctx = ProjectContext::load(project_root, packages)?;
    let options = BuildOptions::from_config(&ctx.config, &ctx.root);
    let packages_root = options.packages_root.clone();

    let decisions = BuildUseCase::new(options)
        .inspect(&ctx.selections)
        .context("Failed to resolve packages")?;

    if json {
        let packages: Vec<serde_json::Value> = decisions
            .iter()
            .map(|d| {
                serde_json::json!({
                    "package": d.name,
                    "target": d.target,
                    "layout": d.layout,
                    "content_root": d.content_root.display().to_string(),
                })
            })
            .collect();
        let out = serde_json::json!({
            "event": "data",
            "command": "inspect",
            "packages": packages,
        });
        println!("{}", out);
        return Ok(());
    }

    print!("{}", output::render_decisions(&decisions, &packages_root));
    Ok(())
}
