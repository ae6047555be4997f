//! Banner
//!
//! Startup banner and the post-setup next-steps panel.

use colored::Colorize;
use std::path::PathBuf;

use crate::platform::Platform;
use crate::types::SetupConfig;

/// Print the startup banner.
pub fn show_banner() {
    println!();
    println!(
        "{}",
        "  Data Analytics Workshop -- Environment Setup".cyan().bold()
    );
    println!("{}", format!("  {}", "\u{2500}".repeat(44)).cyan());
    println!();
}

/// Display the next-steps panel shown after a successful setup.
pub fn show_next_steps(platform: Platform, config: &SetupConfig) {
    let env_path = std::env::current_dir()
        .map(|d| d.join(&config.env_name))
        .unwrap_or_else(|_| PathBuf::from(&config.env_name));

    let w = 58;

    let pad = |s: &str| -> String {
        let padding = if s.len() < w { w - s.len() } else { 0 };
        format!("{}{}", s, " ".repeat(padding))
    };

    let line = |s: &str| -> String { format!("  \u{2502}{}\u{2502}", pad(s)) };

    let border_top = format!("  {}{}{}", "\u{256D}", "\u{2500}".repeat(w), "\u{256E}");
    let border_bot = format!("  {}{}{}", "\u{2570}", "\u{2500}".repeat(w), "\u{256F}");
    let empty_line = line("");

    println!("{}", border_top.cyan());
    println!("{}", line("  Next steps").cyan());
    println!("{}", empty_line.cyan());
    println!("{}", line("  1. Activate the environment:").cyan());
    println!(
        "{}",
        line(&format!("     {}", platform.activate_command(&config.env_name))).cyan()
    );
    println!("{}", empty_line.cyan());
    println!("{}", line("  2. Start Jupyter:").cyan());
    println!("{}", line("     jupyter notebook").cyan());
    println!("{}", empty_line.cyan());
    println!(
        "{}",
        line(&format!("  3. Open {}", config.notebook_file)).cyan()
    );
    println!("{}", empty_line.cyan());
    println!("{}", line("  4. Select the workshop kernel:").cyan());
    println!(
        "{}",
        line(&format!(
            "     Kernel > Change Kernel > {}",
            config.kernel_display_name
        ))
        .cyan()
    );
    println!("{}", empty_line.cyan());
    println!(
        "{}",
        line("  5. Run the first cell to verify the installation").cyan()
    );
    println!("{}", border_bot.cyan());
    println!();
    println!(
        "{}",
        format!("  Environment location: {}", env_path.display()).dimmed()
    );
    println!();
    println!("{}", "  You're ready to start the workshop!".white());
    println!();
}
