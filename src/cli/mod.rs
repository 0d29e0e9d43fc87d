use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser, Subcommand};
use std::ffi::OsString;

pub mod commands;

#[derive(Parser, Debug)]
#[command(name = "workers")]
#[command(about = "Worker registry: names, birthdays and phone numbers")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new worker
    Add(AddArgs),

    /// Display all workers
    Display(DisplayArgs),

    /// Find workers by name
    Find(FindArgs),
}

/// 所有子命令共享的数据库参数
#[derive(Args, Debug, Clone, Default)]
pub struct DbArgs {
    /// The database file name (defaults to ./workers.db)
    #[arg(long, value_name = "PATH")]
    pub db: Option<std::path::PathBuf>,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[command(flatten)]
    pub db: DbArgs,

    /// The worker's name
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub name: String,

    /// The worker's phone number
    #[arg(short = 'n', long)]
    pub number: i64,

    /// The worker's birthday
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub birthday: String,
}

#[derive(Args, Debug)]
pub struct DisplayArgs {
    #[command(flatten)]
    pub db: DbArgs,

    /// Print records as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct FindArgs {
    #[command(flatten)]
    pub db: DbArgs,

    /// The name prefix to search for
    #[arg(short = 'n', long)]
    pub name: String,

    /// Print records as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// 双字母短参数到长参数的映射
const LEGACY_FLAGS: &[(&str, &str)] = &[("-na", "--name"), ("-bd", "--birthday")];

/// 把 `-na` / `-bd` 改写成 `--name` / `--birthday`
///
/// clap 的短参数只能是单个字符，旧的调用方式需要先改写再解析。
/// 同时支持 `-na=value` 形式。
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            let Some(text) = arg.to_str() else {
                return arg;
            };
            for (legacy, long) in LEGACY_FLAGS {
                if text == *legacy {
                    return OsString::from(*long);
                }
                if let Some(value) = text.strip_prefix(legacy).and_then(|rest| rest.strip_prefix('=')) {
                    return OsString::from(format!("{}={}", long, value));
                }
            }
            arg
        })
        .collect()
}
