use clap::Parser;

pub fn get() -> Args {
    Args::parse()
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// App ID (480 is Valve's Spacewar test app)
    #[arg(short, long, default_value = "480")]
    pub id: u32,

    /// Achievement API name to check and unlock
    #[arg(short, long, default_value = "ACH_WIN_ONE_GAME")]
    pub achievement: String,
}
