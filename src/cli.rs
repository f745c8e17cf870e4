//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中嵌入或提取任意字节负载。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中嵌入或提取任意字节负载。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：embed (嵌入) 和 extract (提取)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 将负载文件嵌入到无损格式的载体图像 (如 PNG, BMP) 中。
    Embed(EmbedArgs),

    /// 从经过隐写的图像中提取隐藏的负载。
    Extract(ExtractArgs),
}

/// 'embed' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EmbedArgs {
    /// 用作载体的输入图像文件路径 (如 PNG, BMP)。
    pub cover: PathBuf,

    /// 要嵌入的负载文件路径。
    pub payload: PathBuf,

    /// 嵌入完成后，保存隐写图像的输出路径。
    pub output: PathBuf,

    /// 允许覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'extract' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// 已嵌入负载数据的图像文件路径。
    pub image: PathBuf,

    /// 提取负载后，保存内容的输出文件路径。
    pub output: PathBuf,

    /// 允许覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}
