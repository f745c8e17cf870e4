//! # 隐写核心算法模块
//!
//! 嵌入格式：比特偏移 0..31 存放负载长度 (`u32`，小端序)，
//! 偏移 32 起存放负载数据，每个字节最低有效位在前。
//! 偏移到像素位置的映射按行优先遍历像素、像素内按通道顺序推进，
//! 且永远跳过 alpha 通道；嵌入与提取共用同一寻址函数。
//! 这一遍历顺序是数据格式的一部分，更改它会破坏与已生成图像的兼容性。

use zeroize::Zeroizing;

use crate::constants::{BITS_PER_BYTE, SIZE_HEADER_BITS};
use crate::error::StegError;
use crate::grid::{Geometry, PixelGrid};

/// 一个比特偏移解析出的像素位置：行、列以及像素内的通道下标。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitAddress {
    pub row: u32,
    pub column: u32,
    pub channel: u8,
}

/// 把线性比特偏移解析为像素位置；偏移超出图像数据时返回错误。
pub fn locate(offset: u64, geometry: &Geometry) -> Result<BitAddress, StegError> {
    let usable = u64::from(geometry.usable_channels());
    let width_channels = u64::from(geometry.width) * usable;
    if width_channels == 0 {
        return Err(StegError::OutOfRange { offset });
    }

    let row = offset / width_channels;
    let column = (offset % width_channels) / usable;
    let channel = (offset % usable) as u8;

    if row >= u64::from(geometry.height) || column >= u64::from(geometry.width) {
        return Err(StegError::OutOfRange { offset });
    }

    Ok(BitAddress {
        row: row as u32,
        column: column as u32,
        channel,
    })
}

/// 给定几何信息下可寻址的总比特数。
pub fn raw_bits(geometry: &Geometry) -> u64 {
    u64::from(geometry.width) * u64::from(geometry.height) * u64::from(geometry.usable_channels())
}

/// 扣除 32 位长度头部后，负载最多可占用的比特数。
pub fn payload_capacity_bits(geometry: &Geometry) -> u64 {
    raw_bits(geometry).saturating_sub(SIZE_HEADER_BITS)
}

pub fn write_bit(grid: &mut PixelGrid, bit: u8, offset: u64) -> Result<(), StegError> {
    let address = locate(offset, grid.geometry())?;
    let bytes_per_pixel = grid.geometry().bytes_per_pixel();

    let row = grid.row_mut(address.row);
    let index = address.column as usize * bytes_per_pixel + usize::from(address.channel);
    row[index] = (row[index] & 0xFE) | (bit & 0x01);

    Ok(())
}

pub fn read_bit(grid: &PixelGrid, offset: u64) -> Result<u8, StegError> {
    let address = locate(offset, grid.geometry())?;
    let index =
        address.column as usize * grid.geometry().bytes_per_pixel() + usize::from(address.channel);

    Ok(grid.row(address.row)[index] & 0x01)
}

/// 把负载嵌入载体图像，返回一幅几何信息相同的全新隐写网格。
/// 容量不足时立即失败，不会分配输出网格，也不会改动任何像素。
pub fn embed(cover: &PixelGrid, payload: &[u8]) -> Result<PixelGrid, StegError> {
    let payload_size = u32::try_from(payload.len()).map_err(|_| StegError::PayloadTooLarge {
        size: payload.len(),
    })?;

    let available = raw_bits(cover.geometry());
    let required = u64::from(payload_size) * BITS_PER_BYTE + SIZE_HEADER_BITS;
    if required > available {
        return Err(StegError::Capacity {
            required,
            available,
        });
    }

    let mut steg = PixelGrid::allocate(*cover.geometry());
    for y in 0..cover.geometry().height {
        steg.row_mut(y).copy_from_slice(cover.row(y));
    }

    for i in 0..SIZE_HEADER_BITS {
        write_bit(&mut steg, ((payload_size >> i) & 1) as u8, i)?;
    }

    let mut offset = SIZE_HEADER_BITS;
    for &byte in payload {
        for j in 0..BITS_PER_BYTE {
            write_bit(&mut steg, (byte >> j) & 1, offset)?;
            offset += 1;
        }
    }

    Ok(steg)
}

/// 从隐写图像中提取负载。头部声称的长度超出图像物理容量时，
/// 在分配或读取任何负载字节之前即以 `Corrupt` 失败。
pub fn extract(steg: &PixelGrid) -> Result<Zeroizing<Vec<u8>>, StegError> {
    let mut payload_size: u32 = 0;
    for i in 0..SIZE_HEADER_BITS {
        payload_size |= u32::from(read_bit(steg, i)?) << i;
    }

    let capacity = payload_capacity_bits(steg.geometry());
    if u64::from(payload_size) * BITS_PER_BYTE > capacity {
        return Err(StegError::Corrupt {
            claimed: payload_size,
            capacity: capacity / BITS_PER_BYTE,
        });
    }

    let mut payload = Zeroizing::new(vec![0u8; payload_size as usize]);
    let mut offset = SIZE_HEADER_BITS;
    for byte in payload.iter_mut() {
        for j in 0..BITS_PER_BYTE {
            *byte |= read_bit(steg, offset)? << j;
            offset += 1;
        }
    }

    Ok(payload)
}
