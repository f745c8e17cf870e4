//! # 像素网格与编解码边界模块
//!
//! 负责把磁盘上的图像文件解码为内存中的像素网格 (`PixelGrid`)，
//! 以及把修改后的像素网格无损地编码回文件。
//! 解码时会把任意源像素格式归一化为 8 位深度的灰度 (1 通道)、
//! RGB (3 通道) 或 RGBA (4 通道) 布局，通道 0 始终为红色/灰度分量；
//! 编码路径只支持无损容器格式，有损压缩会破坏最低有效位中的数据。

use std::path::Path;

use image::{ColorType, DynamicImage, ExtendedColorType, ImageError};
use zeroize::{Zeroize, Zeroizing};

use crate::error::StegError;

/// 像素网格的几何信息：尺寸、通道数以及是否带 alpha 通道。
/// 位深固定为每通道 8 位；带 alpha 时，alpha 永远是最后一个通道。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub has_alpha: bool,
}

impl Geometry {
    /// 可用于嵌入的通道数 (排除 alpha 通道)。
    pub fn usable_channels(&self) -> u8 {
        self.channels - u8::from(self.has_alpha)
    }

    /// 每个像素占用的字节数。
    pub fn bytes_per_pixel(&self) -> usize {
        usize::from(self.channels)
    }

    /// 每行像素占用的字节数。
    pub fn row_bytes(&self) -> usize {
        self.width as usize * self.bytes_per_pixel()
    }

    fn color_type(&self) -> ExtendedColorType {
        match self.channels {
            1 => ExtendedColorType::L8,
            2 => ExtendedColorType::La8,
            3 => ExtendedColorType::Rgb8,
            _ => ExtendedColorType::Rgba8,
        }
    }
}

/// 一幅已解码图像的内存表示：几何信息加上按行索引的像素缓冲区。
/// 同一时刻只会被一条流水线独占持有；释放时所有行缓冲区会被清零。
#[derive(Debug)]
pub struct PixelGrid {
    geometry: Geometry,
    rows: Vec<Vec<u8>>,
}

impl PixelGrid {
    /// 解码给定路径的图像文件并归一化为受支持的通道布局。
    ///
    /// # Errors
    ///
    /// 文件无法读取时返回 `StegError::Io`；
    /// 文件不是受支持的图像格式时返回 `StegError::Format`。
    pub fn decode(path: &Path) -> Result<Self, StegError> {
        let img = image::open(path).map_err(|err| match err {
            ImageError::IoError(io) => StegError::Io(io),
            other => StegError::Format(other),
        })?;

        let (geometry, data) = match img {
            DynamicImage::ImageLuma8(buffer) => {
                let (width, height) = buffer.dimensions();
                let geometry = Geometry {
                    width,
                    height,
                    channels: 1,
                    has_alpha: false,
                };
                (geometry, buffer.into_raw())
            }
            DynamicImage::ImageRgb8(buffer) => {
                let (width, height) = buffer.dimensions();
                let geometry = Geometry {
                    width,
                    height,
                    channels: 3,
                    has_alpha: false,
                };
                (geometry, buffer.into_raw())
            }
            DynamicImage::ImageRgba8(buffer) => {
                let (width, height) = buffer.dimensions();
                let geometry = Geometry {
                    width,
                    height,
                    channels: 4,
                    has_alpha: true,
                };
                (geometry, buffer.into_raw())
            }
            other if other.color().has_alpha() => {
                let buffer = other.to_rgba8();
                let (width, height) = buffer.dimensions();
                let geometry = Geometry {
                    width,
                    height,
                    channels: 4,
                    has_alpha: true,
                };
                (geometry, buffer.into_raw())
            }
            other if matches!(other.color(), ColorType::L16) => {
                // 高位深灰度图先压扁成 8 位视图再参与嵌入
                let buffer = other.to_luma8();
                let (width, height) = buffer.dimensions();
                let geometry = Geometry {
                    width,
                    height,
                    channels: 1,
                    has_alpha: false,
                };
                (geometry, buffer.into_raw())
            }
            other => {
                let buffer = other.to_rgb8();
                let (width, height) = buffer.dimensions();
                let geometry = Geometry {
                    width,
                    height,
                    channels: 3,
                    has_alpha: false,
                };
                (geometry, buffer.into_raw())
            }
        };

        Ok(Self::from_raw(geometry, &data))
    }

    /// 按给定的几何信息分配一个全新的可写像素网格，所有行缓冲区清零。
    pub fn allocate(geometry: Geometry) -> Self {
        let rows = (0..geometry.height)
            .map(|_| vec![0u8; geometry.row_bytes()])
            .collect();

        Self { geometry, rows }
    }

    fn from_raw(geometry: Geometry, data: &[u8]) -> Self {
        let rows = data
            .chunks_exact(geometry.row_bytes())
            .map(<[u8]>::to_vec)
            .collect();

        Self { geometry, rows }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn row(&self, y: u32) -> &[u8] {
        &self.rows[y as usize]
    }

    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        &mut self.rows[y as usize]
    }

    /// 把像素网格无损地编码并提交到目标文件。
    /// 输出容器由扩展名决定，仅支持无损格式 (PNG, BMP, TIFF, WebP, QOI)。
    ///
    /// # Errors
    ///
    /// 目标文件无法写入时返回 `StegError::Io`；
    /// 编码失败或扩展名没有对应的无损编码器时返回 `StegError::Codec`。
    pub fn finalize(&self, path: &Path) -> Result<(), StegError> {
        let mut data = Zeroizing::new(Vec::with_capacity(
            self.geometry.row_bytes() * self.rows.len(),
        ));
        for row in &self.rows {
            data.extend_from_slice(row);
        }

        image::save_buffer(
            path,
            &data,
            self.geometry.width,
            self.geometry.height,
            self.geometry.color_type(),
        )
        .map_err(|err| match err {
            ImageError::IoError(io) => StegError::Io(io),
            other => StegError::Codec(other),
        })
    }
}

impl Drop for PixelGrid {
    fn drop(&mut self) {
        for row in &mut self.rows {
            row.zeroize();
        }
    }
}
