/// Colored console report of a recorded frame

use colored::*;
use crate::recording_context::{FrameCommand, RecordingContext};

/// Print the commands and counters of a RecordingContext
pub fn print_frame_report(ctx: &RecordingContext) {
    println!("\n{}", "=== Frame Command Report ===".bright_blue().bold());

    let mut depth = 0usize;
    for command in ctx.commands() {
        if let FrameCommand::EndSample(_) = command {
            depth = depth.saturating_sub(1);
        }

        let line = format!("{}{}", "  ".repeat(depth + 1), command);
        let line = match command {
            FrameCommand::GetTemporary { .. } | FrameCommand::ReleaseTemporary { .. } => line.cyan(),
            FrameCommand::DrawRenderers { .. } => line.green(),
            FrameCommand::Blit { .. } => line.magenta(),
            FrameCommand::BeginSample(_) | FrameCommand::EndSample(_) => line.bright_black(),
            _ => line.normal(),
        };
        println!("{}", line);

        if let FrameCommand::BeginSample(_) = command {
            depth += 1;
        }
    }

    let stats = ctx.stats();
    println!();
    println!("  {} {}", "Allocations:".white().bold(), stats.allocations);
    println!("  {} {}", "Releases:".white().bold(), stats.releases);
    println!("  {} {}", "Draws:".green().bold(), stats.draws);
    println!("  {} {}", "Blits:".magenta().bold(), stats.blits);

    let live = ctx.live_temporaries();
    if live.is_empty() {
        println!("  {}", "✓ All temporaries released".green());
    } else {
        let names: Vec<_> = live.iter().map(|id| id.name()).collect();
        println!("  {} {}", "Still allocated:".red().bold(), names.join(", "));
    }

    println!("{}\n", "============================".bright_blue().bold());
}
