use crate::suite::v2_suite;
use crate::types::{OutputArgs, OutputFormat};

/// Handle `checkup list`: print the declared probe table. Useful for
/// reviewing what a run will exercise before pointing it at a live host.
pub fn handle_list_command(output: &OutputArgs) -> anyhow::Result<()> {
    let suite = v2_suite();
    let text = match output.output {
        OutputFormat::Text => {
            let mut out = String::new();
            for group in &suite {
                out.push_str(&format!("[{}]\n", group.name));
                for probe in &group.probes {
                    out.push_str(&format!("  {:<6} {}\n", probe.verb.as_str(), probe.path));
                }
            }
            out
        }
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&suite)?),
        OutputFormat::Yaml => serde_yaml::to_string(&suite)?,
    };
    print!("{text}");
    Ok(())
}
