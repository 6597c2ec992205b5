use colored::Colorize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Steam API не ініціалізовано.")]
    Init,
    #[error("Користувач не авторизований у Steam.")]
    Auth,
    #[error("Неможливо завантажити статистику користувача.")]
    StatsLoad,
}

/// The slice of the Steamworks client surface this program touches.
/// `SteamSession` backs it with the real SDK; tests drive the runner
/// with a counting fake.
pub trait SessionClient {
    fn connect(&mut self) -> bool;
    fn logged_on(&self) -> bool;
    fn persona_name(&self) -> String;
    fn request_current_stats(&self) -> bool;
    fn achievement_unlocked(&self, id: &str) -> bool;
    fn unlock_achievement(&self, id: &str) -> bool;
    fn store_stats(&self) -> bool;
    fn shutdown(&mut self);
}

/// Runs one full session: init, greet, stats, achievement check-or-unlock.
/// The client connection is released exactly once, whichever way the run
/// ends.
pub fn run(client: &mut impl SessionClient, achievement_id: &str) -> Result<(), SessionError> {
    let result = drive(client, achievement_id);
    client.shutdown();
    println!("Steam API завершено.");
    result
}

fn drive(client: &mut impl SessionClient, achievement_id: &str) -> Result<(), SessionError> {
    initialize(client)?;
    greet(client);
    load_stats(client)?;

    if client.achievement_unlocked(achievement_id) {
        println!("Досягнення вже розблоковано. {}", "Молодець!".green());
    } else {
        println!("Досягнення ще не відкрито. Відкриваємо...");
        unlock(client, achievement_id);
    }

    Ok(())
}

fn initialize(client: &mut impl SessionClient) -> Result<(), SessionError> {
    if !client.connect() {
        return Err(SessionError::Init);
    }

    if !client.logged_on() {
        return Err(SessionError::Auth);
    }

    Ok(())
}

fn greet(client: &impl SessionClient) {
    println!("Привіт, {}!", client.persona_name().bright_blue());
}

fn load_stats(client: &impl SessionClient) -> Result<(), SessionError> {
    if client.request_current_stats() {
        Ok(())
    } else {
        Err(SessionError::StatsLoad)
    }
}

// Unlock failures are informational only; the run still counts as a success.
fn unlock(client: &impl SessionClient, achievement_id: &str) {
    if client.unlock_achievement(achievement_id) {
        let _ = client.store_stats();
        println!(
            "Досягнення '{}' розблоковано! 🎉",
            achievement_id.bright_blue()
        );
    } else {
        eprintln!("Не вдалося розблокувати '{}'.", achievement_id.bright_blue());
    }
}
