use clap::Parser;
use workers::cli::{self, Cli, Commands};
use workers::core::Config;

fn main() -> anyhow::Result<()> {
    // 兼容 -na / -bd 这类双字母短参数
    let args = cli::normalize_legacy_flags(std::env::args_os());
    let cli = Cli::parse_from(args);

    workers::init(cli.verbose)?;

    // 未给出子命令时什么也不做
    let Some(command) = cli.command else {
        return Ok(());
    };

    match command {
        Commands::Add(args) => {
            let config = Config::resolve(args.db.db.as_deref())?;
            cli::commands::add_worker(&config, args)
        }
        Commands::Display(args) => {
            let config = Config::resolve(args.db.db.as_deref())?;
            cli::commands::display(&config, args)
        }
        Commands::Find(args) => {
            let config = Config::resolve(args.db.db.as_deref())?;
            cli::commands::find(&config, args)
        }
    }
}
