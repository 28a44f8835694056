use clap::Parser;

use flipswitch::gui;

#[derive(Parser)]
#[command(name = "flipswitch")]
#[command(about = "A single-window demo shell with one toggle button")]
struct Cli {
    /// Start with the light theme instead of the default dark theme
    #[arg(long)]
    light: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if args.verbose {
        println!(
            "Opening shell window ({} theme)",
            if args.light { "light" } else { "dark" }
        );
    }

    gui::run(gui::GuiOptions {
        light_theme: args.light,
    })?;

    Ok(())
}
