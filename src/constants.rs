/// 负载长度头部占用的比特数。
/// 负载长度以 `u32` (32 bits) 小端序嵌入：整数的第 `i` 位
/// 存放在比特偏移 `i` 处 (`i` 取 0..31)，负载数据紧随其后。
pub const SIZE_HEADER_BITS: u64 = 32;

/// 每个负载字节占用的比特数。
/// 负载的每个字节按最低有效位在前的顺序逐位嵌入。
pub const BITS_PER_BYTE: u64 = 8;

/// 操作成功完成的退出码。
pub const EXIT_SUCCESS: i32 = 0;

/// 命令行参数不合法的退出码。
pub const EXIT_ARGS: i32 = 1;

/// 图像不受支持或已损坏的退出码。
pub const EXIT_FORMAT: i32 = 2;

/// 载体图像容量不足的退出码。
pub const EXIT_CAPACITY: i32 = 3;

/// 文件 I/O 失败的退出码。
pub const EXIT_IO: i32 = 4;

/// 图像编码 (编解码器) 失败的退出码。
pub const EXIT_CODEC: i32 = 5;
