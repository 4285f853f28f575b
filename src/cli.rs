use clap::Parser;

#[derive(Parser)]
#[command(name = "stacklint")]
#[command(version = crate::VERSION)]
#[command(about = "Validate Docker Stack files for Docker Swarm compatibility")]
#[command(
    long_about = "Checks the well-known Docker Stack files in the current directory (docker-stack.yml, docker-stack-internal.yml, docker-stack-nfs.yml.template) for Docker Swarm compatibility: YAML syntax, Swarm-incompatible service keys, and deployment configuration."
)]
pub struct Cli {
    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
