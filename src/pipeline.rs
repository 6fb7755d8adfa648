//! 文件到文件的着色流程
//!
//! 读取边列表 → 构建干涉图 → 贪心着色 → 写出结果

use crate::algorithm::{ColouringStats, GreedyColourer};
use crate::error::Result;
use crate::export::write_assignment;
use crate::import::EdgeListImporter;
use std::path::Path;

/// 使用默认导入配置着色
pub fn colour_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<ColouringStats> {
    colour_file_with(&EdgeListImporter::new(), input, output)
}

/// 使用指定导入器着色
///
/// 任一步失败都不会写出结果文件。
pub fn colour_file_with<P: AsRef<Path>, Q: AsRef<Path>>(
    importer: &EdgeListImporter,
    input: P,
    output: Q,
) -> Result<ColouringStats> {
    let graph = importer.load_graph(input)?;
    let (assignment, stats) = GreedyColourer::new(&graph).colour_with_stats();
    write_assignment(output, &assignment)?;
    Ok(stats)
}
