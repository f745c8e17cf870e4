//! # 错误类型模块
//!
//! 定义隐写操作全流程的错误分类 (`StegError`)。
//! 每个类别对应一个独立的进程退出码，便于调用方按退出码判断失败原因。

use std::io;

use thiserror::Error;

use crate::constants::{EXIT_CAPACITY, EXIT_CODEC, EXIT_FORMAT, EXIT_IO};

/// 隐写操作可能产生的所有错误类别。
#[derive(Debug, Error)]
pub enum StegError {
    /// 输入文件无法解码为受支持的图像。
    #[error("unsupported or corrupt image: {0}")]
    Format(#[source] image::ImageError),

    /// 载体图像的容量不足以容纳长度头部和负载。
    #[error("cover image too small for payload: required {required} bits, available {available} bits")]
    Capacity { required: u64, available: u64 },

    /// 负载长度超出 32 位头部所能表示的范围。
    #[error("payload of {size} bytes cannot be described by the 32-bit size header")]
    PayloadTooLarge { size: usize },

    /// 比特偏移落在图像数据之外。
    #[error("bit offset {offset} lies outside the image data")]
    OutOfRange { offset: u64 },

    /// 提取出的头部声称的负载长度超过了图像的物理容量，
    /// 说明该图像不是隐写图像或其数据已损坏。
    #[error("invalid payload size detected: header claims {claimed} bytes, image can hold at most {capacity} bytes")]
    Corrupt { claimed: u32, capacity: u64 },

    /// 文件读写失败。
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 结果图像编码或写入失败。
    #[error("image encoding failed: {0}")]
    Codec(#[source] image::ImageError),
}

impl StegError {
    /// 返回与错误类别对应的进程退出码。
    pub fn exit_code(&self) -> i32 {
        match self {
            StegError::Format(_) | StegError::OutOfRange { .. } | StegError::Corrupt { .. } => {
                EXIT_FORMAT
            }
            StegError::Capacity { .. } | StegError::PayloadTooLarge { .. } => EXIT_CAPACITY,
            StegError::Io(_) => EXIT_IO,
            StegError::Codec(_) => EXIT_CODEC,
        }
    }
}
