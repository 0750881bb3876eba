//! Layers command handler

use anyhow::Result;

use plasma_compose::presentation::output;
use plasma_compose::LayerName;

pub fn cmd_layers(json: bool) -> Result<()> {
    if json {
        let out = serde_json::json!({
            "event": "data",
            "command": "layers",
            "layers": LayerName::ALL,
        });
        println!("{}", out);
        return Ok(());
    }

    print!("{}", output::render_layers());
    Ok(())
}
