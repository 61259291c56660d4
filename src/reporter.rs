//! 结果输出
//! 按字节序升序排列，每行一个名称

use std::collections::HashSet;
use std::io::Write;

use crate::error::LibcallResult;

/// 排序后的输出序列（普通字符串比较，无区域化排序）
pub fn sorted_names(names: &HashSet<String>) -> Vec<&str> {
    let mut sorted: Vec<&str> = names.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted
}

/// 写出全部名称，返回写出的行数
pub fn write_report<W: Write>(names: &HashSet<String>, out: &mut W) -> LibcallResult<usize> {
    let sorted = sorted_names(names);
    for name in &sorted {
        writeln!(out, "{}", name)?;
    }
    out.flush()?;
    Ok(sorted.len())
}
