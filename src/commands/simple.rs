//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI.

use crate::catalog::{resolve, suggest, SUGGESTION_LIMIT};
use crate::core::Entity;
use crate::game::{GameError, GameSession, HintLevel, PickerType, Status};
use crate::output::{
    print_hint_grant, print_hint_menu, print_loss_banner, print_status_line, print_verdict_row,
    print_win_banner,
};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the pool is empty or reading user input fails.
pub fn run_simple(pool: &[Entity], picker: PickerType, budget: Option<u32>) -> Result<(), String> {
    let mut session = GameSession::new(pool, picker, budget).map_err(|e| e.to_string())?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Anidle - 猜猜今天的動漫                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("輸入動漫名稱進行猜測 (中文或羅馬字，需完全一致)。");
    println!("指令: 'hints' 顯示提示選單, 'hint1'/'hint2'/'hint3' 購買提示,");
    println!("      'new' 重新開始, 'quit' 離開\n");

    loop {
        print_status_line(&session);

        let input = get_user_input("輸入動漫名稱或指令")?;
        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 感謝遊玩！\n");
                return Ok(());
            }
            "new" | "n" => {
                session.restart();
                println!("\n🔄 新的一局開始了！\n");
                continue;
            }
            "hints" | "hint" => {
                print_hint_menu(&session);
                continue;
            }
            "hint1" => {
                buy_hint(&mut session, HintLevel::Tag);
                continue;
            }
            "hint2" => {
                buy_hint(&mut session, HintLevel::Image);
                continue;
            }
            "hint3" => {
                buy_hint(&mut session, HintLevel::Synopsis);
                continue;
            }
            _ => {}
        }

        let Some(entity) = resolve(pool, &input) else {
            println!("\n❌ 找不到動漫: {input}");
            show_suggestions(&session, pool, &input);
            continue;
        };

        match session.submit(entity) {
            Ok(verdict) => {
                print_verdict_row(session.history().len(), entity, &verdict);

                match session.status() {
                    Status::Won => {
                        print_win_banner(&session);
                        if !ask_play_again(&mut session)? {
                            return Ok(());
                        }
                    }
                    Status::Lost => {
                        print_loss_banner(&session);
                        if !ask_play_again(&mut session)? {
                            return Ok(());
                        }
                    }
                    Status::InProgress => {}
                }
            }
            Err(GameError::DuplicateGuess) => {
                println!("\n⚠️  您已經猜過 {} 了！", entity.title());
            }
            Err(e) => {
                println!("\n⚠️  {e}");
            }
        }
    }
}

fn buy_hint(session: &mut GameSession, level: HintLevel) {
    match session.buy_hint(level) {
        Ok(grant) => print_hint_grant(&grant),
        Err(GameError::HintUnavailable) => {
            println!("\n⚠️  這個等級目前沒有可用的提示。");
        }
        Err(e) => {
            println!("\n⚠️  {e}");
        }
    }
}

fn show_suggestions(session: &GameSession, pool: &[Entity], input: &str) {
    let guessed: Vec<u32> = session.history().iter().map(|e| e.id()).collect();
    let matches = suggest(pool, input, &guessed, SUGGESTION_LIMIT);

    if !matches.is_empty() {
        println!("您是不是要找:");
        for entity in matches {
            println!(
                "  • {} {}",
                entity.title(),
                format!("({})", entity.title_romaji()).bright_black()
            );
        }
    }
}

fn ask_play_again(session: &mut GameSession) -> Result<bool, String> {
    match get_user_input("再玩一次？ (yes/no)")?.to_lowercase().as_str() {
        "yes" | "y" => {
            session.restart();
            println!("\n🔄 新的一局開始了！\n");
            Ok(true)
        }
        _ => {
            println!("\n👋 感謝遊玩！\n");
            Ok(false)
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
