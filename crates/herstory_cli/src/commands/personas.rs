//! Personas command - List the available leaders.

use anyhow::Result;
use clap::Args;

use herstory_personas::PersonaRegistry;

#[derive(Args)]
pub struct PersonasArgs {
    /// Print names and avatar prompts as JSON
    #[arg(long)]
    json: bool,
}

pub async fn execute(args: PersonasArgs) -> Result<()> {
    let registry = PersonaRegistry::builtin();

    if args.json {
        let personas: Vec<_> = registry.iter().collect();
        println!("{}", serde_json::to_string_pretty(&personas)?);
        return Ok(());
    }

    println!("🌟 Leaders you can talk to:");
    for name in registry.all_names() {
        println!("   - {}", name);
    }
    Ok(())
}
