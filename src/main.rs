mod args;
mod session;
mod steam;

use colored::Colorize;

fn main() {
    let args = args::get();

    let mut client = steam::SteamSession::new(args.id);

    if let Err(e) = session::run(&mut client, &args.achievement) {
        eprintln!("{} {}", "[Помилка]".red(), e);
        std::process::exit(1);
    }
}
