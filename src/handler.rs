//! # 命令处理逻辑模块
//!
//! 包含处理 `embed` 和 `extract` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。
//! 所有承载过负载明文的缓冲区都包在 `Zeroizing` 里，
//! 无论成功还是失败，离开作用域时都会先清零再释放。

use crate::cli::{EmbedArgs, ExtractArgs};
use crate::error::StegError;
use crate::grid::PixelGrid;
use crate::steganography::{embed, extract};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;
use zeroize::Zeroizing;

/// 处理 'embed' 命令的执行逻辑。
///
/// 负责解码载体图像、读取负载文件、调用核心嵌入函数写入长度头部和
/// 负载数据，最后将结果图像无损地编码到输出路径。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `EmbedArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输出文件已存在且未指定 `--force`。
/// * 无法解码载体图像，或无法读取负载文件。
/// * 载体图像的容量不足以容纳负载。
/// * 无法将结果图像编码写入输出路径。
pub fn handle_embed(args: EmbedArgs) -> Result<()> {
    ensure_writable(&args.output, args.force)?;

    let cover = PixelGrid::decode(&args.cover).with_context(|| {
        format!(
            "Unable to decode cover image: {}",
            args.cover.to_string_lossy().red().bold()
        )
    })?;

    let payload = Zeroizing::new(
        fs::read(&args.payload)
            .map_err(StegError::from)
            .with_context(|| {
                format!(
                    "Unable to read payload file: {}",
                    args.payload.to_string_lossy().red().bold()
                )
            })?,
    );

    let steg = embed(&cover, &payload).with_context(|| {
        format!(
            "Failed to embed the payload into cover image {}",
            args.cover.to_string_lossy().red().bold()
        )
    })?;

    steg.finalize(&args.output).with_context(|| {
        format!(
            "Unable to write steg image to: {}",
            args.output.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The payload ({} bytes) has been successfully embedded and saved: {}",
        payload.len().to_string().green(),
        args.output.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'extract' 命令的执行逻辑。
///
/// 负责解码隐写图像、调用核心提取函数读取长度头部并重建负载字节，
/// 最后将负载内容写入输出文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `ExtractArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输出文件已存在且未指定 `--force`。
/// * 无法解码输入的图像文件。
/// * 图像头部声称的负载长度超出图像的物理容量。
/// * 无法写入到输出文件。
pub fn handle_extract(args: ExtractArgs) -> Result<()> {
    ensure_writable(&args.output, args.force)?;

    let steg = PixelGrid::decode(&args.image).with_context(|| {
        format!(
            "Unable to decode image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let payload = extract(&steg).with_context(|| {
        format!(
            "Failed to extract a payload from '{}'. \nThe image may not contain a hidden payload or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&args.output, payload.as_slice())
        .map_err(StegError::from)
        .with_context(|| {
            format!(
                "Unable to write to output file: {}",
                args.output.to_string_lossy().red().bold()
            )
        })?;

    println!(
        "The payload ({} bytes) has been successfully extracted and saved: {}",
        payload.len().to_string().green(),
        args.output.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 检查输出路径是否允许写入：目标已存在且未指定 `--force` 时拒绝覆盖。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );

    Ok(())
}
