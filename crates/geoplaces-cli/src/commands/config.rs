use crate::output::OutputWriter;
use crate::output_types::ConfigEntry;
use anyhow::Result;
use geoplaces_core::config::LayeredConfig;

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let mut entries: Vec<ConfigEntry> = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| ConfigEntry {
            key,
            value,
            source: format!("{:?}", source),
        })
        .collect();
    entries.sort_by(|a, b| a.key.cmp(&b.key));

    if output.is_json() {
        output.result(entries)?;
    } else {
        output.section("Configuration");
        output.table(entries);
    }

    Ok(())
}
