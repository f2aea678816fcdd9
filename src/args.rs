use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Camera index (overrides the configured device)
    #[arg(short, long)]
    pub cam_index: Option<u32>,

    /// Landmark detector to use (simulated, null)
    #[arg(long)]
    pub detector: Option<String>,

    /// UI language (id, en, tr)
    #[arg(long)]
    pub lang: Option<String>,

    /// Mirror the camera output
    #[arg(long)]
    pub mirror: Option<bool>,

    /// Start with the landmark overlay hidden
    #[arg(long, default_value_t = false)]
    pub no_landmarks: bool,

    /// List available cameras
    #[arg(long)]
    pub list: bool,
}
