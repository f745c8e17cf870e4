use clap::Parser;
use clap::error::ErrorKind;
use colored::Colorize;
use std::process;

use pixveil::{
    cli::{Cli, Commands},
    constants::{EXIT_ARGS, EXIT_IO, EXIT_SUCCESS},
    error::StegError,
    handler::{handle_embed, handle_extract},
};

/// 程序的主入口点
///
/// 负责解析命令行参数，并根据指定的子命令（`embed` 或 `extract`）
/// 将执行分派到相应的处理函数；操作失败时向标准错误流输出诊断信息，
/// 并以错误类别对应的退出码终止进程
fn main() {
    // 解析命令行参数；参数不合法时打印用法信息并以参数错误码退出
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
                _ => EXIT_ARGS,
            };
            let _ = err.print();
            process::exit(code);
        }
    };

    // 根据子命令调用相应的处理函数
    let result = match cli.command {
        Commands::Embed(args) => handle_embed(args),
        Commands::Extract(args) => handle_extract(args),
    };

    if let Err(err) = result {
        eprintln!("{} {err:#}", "Error:".red().bold());
        process::exit(exit_code(&err));
    }
}

/// 在错误链中查找 `StegError` 并返回其对应的退出码；
/// 链中没有 `StegError` 时视作 I/O 失败
fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<StegError>())
        .map(StegError::exit_code)
        .unwrap_or(EXIT_IO)
}
