//! Text rendering for command output

use std::fmt::Write;
use std::path::Path;

use crate::application::build::{BuildResult, PackageDecision};
use crate::domain::value_objects::LayerName;

/// One line per layer, in catalog order
pub fn render_layers() -> String {
    LayerName::ALL
        .iter()
        .map(|layer| format!("{layer}\n"))
        .collect()
}

/// One line per package: name, target, layout, content root relative to
/// `packages_root` where possible
pub fn render_decisions(decisions: &[PackageDecision], packages_root: &Path) -> String {
    if decisions.is_empty() {
        return "no packages selected\n".to_string();
    }

    let width = decisions.iter().map(|d| d.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for decision in decisions {
        let shown = decision
            .content_root
            .strip_prefix(packages_root)
            .unwrap_or(&decision.content_root);
        let _ = writeln!(
            out,
            "{:<width$}  {:<10} {:<7} {}",
            decision.name,
            decision.target,
            decision.layout,
            shown.display(),
            width = width
        );
    }
    out
}

pub fn render_summary(result: &BuildResult) -> String {
    let layers: Vec<&str> = result.report.layers.iter().map(|l| l.as_str()).collect();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "composed {} package(s) into {}",
        result.packages.len(),
        result.output_dir.display()
    );
    let _ = writeln!(
        out,
        "  layers: {}",
        if layers.is_empty() {
            "(none)".to_string()
        } else {
            layers.join(", ")
        }
    );
    let _ = writeln!(
        out,
        "  files: {} ({} overridden)",
        result.file_count(),
        result.report.overrides.len()
    );
    let _ = writeln!(out, "  digest: {}", result.digest);
    out
}
