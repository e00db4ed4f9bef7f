//! Display functions for the plain CLI mode

use super::formatters::{numeric_cell, status_cell, tag_chips};
use crate::core::{Entity, Verdict};
use crate::game::{GameSession, HintGrant, HintLevel, Status};
use colored::Colorize;

/// Print one scored guess as a labeled block
pub fn print_verdict_row(turn: usize, guess: &Entity, verdict: &Verdict) {
    println!("\n{}", "─".repeat(60).bright_black());
    println!(
        "#{turn} {} {}",
        guess.title().bright_white().bold(),
        format!("({})", guess.title_romaji()).bright_black()
    );
    println!("   工作室  {}", status_cell(guess.studio(), verdict.studio));
    println!("   類型    {}", tag_chips(&verdict.tags));
    println!("   年份    {}", numeric_cell(guess.year(), verdict.year));
    println!("   集數    {}", numeric_cell(guess.episodes(), verdict.episodes));
    println!(
        "   受眾    {}",
        status_cell(guess.demographic(), verdict.demographic)
    );
    println!("   來源    {}", status_cell(guess.source(), verdict.source));
}

/// Print the information granted by a hint purchase
pub fn print_hint_grant(grant: &HintGrant) {
    match grant {
        HintGrant::Tag { tag, .. } => {
            println!(
                "\n💡 {} {}",
                "目標類型包含:".bright_yellow(),
                format!("[{tag}]").bright_green().bold()
            );
        }
        HintGrant::Image { url } => {
            println!("\n💡 {} {}", "封面圖片:".bright_yellow(), url.bright_cyan());
        }
        HintGrant::Synopsis { text } => {
            println!("\n💡 {}", "劇情簡介:".bright_yellow());
            println!("   {text}");
        }
    }
}

/// Print the hint menu with costs and availability
pub fn print_hint_menu(session: &GameSession) {
    println!("\n{}", "提示選單".bright_cyan().bold());

    let levels = [
        (HintLevel::Tag, "hint1", "揭露一個類型標籤"),
        (HintLevel::Image, "hint2", "揭露封面圖片"),
        (HintLevel::Synopsis, "hint3", "揭露劇情簡介 (標題已遮蔽)"),
    ];

    for (level, command, description) in levels {
        let cost = format!("(+{})", level.cost());
        if session.hint_available(level) {
            println!("  {} {description} {}", command.bright_yellow(), cost.bright_black());
        } else {
            println!("  {} {description} {}", command.bright_black(), "不可用".bright_black());
        }
    }

    let revealed = session.revealed_tags();
    if !revealed.is_empty() {
        let chips: Vec<String> = revealed
            .iter()
            .map(|r| {
                if r.paid {
                    format!("[{}]💰", r.tag)
                } else {
                    format!("[{}]", r.tag)
                }
            })
            .collect();
        println!("  已知類型: {}", chips.join(" ").bright_green());
    }

    println!("  累積懲罰: {}", session.hints().penalty().to_string().bright_red());
}

/// Print the victory banner with the answer's details
pub fn print_win_banner(session: &GameSession) {
    let target = session.target();

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "  🎉 恭喜答對！  ".bright_green().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  正確答案: {} {}",
        target.title().bright_white().bold(),
        format!("({})", target.title_romaji()).bright_black()
    );
    println!("  工作室:   {}", target.studio());
    println!("  年份:     {}", target.year());
    println!("  類型:     {}", target.tags().join("、"));
    println!(
        "\n  總次數 {} (猜測 {} + 懲罰 {})",
        session.score().to_string().bright_yellow().bold(),
        session.history().len(),
        session.hints().penalty()
    );
    println!("\n{}", "═".repeat(60).bright_cyan());
}

/// Print the defeat banner, revealing the target
pub fn print_loss_banner(session: &GameSession) {
    let target = session.target();

    println!("\n{}", "═".repeat(60).bright_red());
    println!("{}", "  💀 遊戲結束，次數用盡了...  ".bright_red().bold());
    println!("{}", "═".repeat(60).bright_red());
    println!(
        "\n  正確答案是: {} {}",
        target.title().bright_white().bold(),
        format!("({})", target.title_romaji()).bright_black()
    );
    println!("\n{}", "═".repeat(60).bright_red());
}

/// Print the session status line shown before each prompt
pub fn print_status_line(session: &GameSession) {
    match session.status() {
        Status::InProgress => {
            let attempts = session.attempts_left().map_or_else(
                || "∞".to_string(),
                |n| n.to_string(),
            );
            println!(
                "\n剩餘次數: {}   目前計分: {}",
                attempts.bright_yellow(),
                session.score().to_string().bright_yellow()
            );
        }
        Status::Won | Status::Lost => {}
    }
}
