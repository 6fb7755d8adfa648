//! 结果导出模块
//!
//! 每个节点一行：`node_id,colour_letter`，按节点 ID 升序

use crate::algorithm::ColourAssignment;
use crate::error::{Error, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// 将着色结果渲染为文本
pub fn render(assignment: &ColourAssignment) -> String {
    let mut out = String::with_capacity(assignment.len() * 6);
    for (node, colour) in assignment.iter() {
        out.push_str(&format!("{},{}\n", node, colour));
    }
    out
}

/// 写入任意 writer
pub fn write_to<W: Write>(mut writer: W, assignment: &ColourAssignment) -> Result<()> {
    writer.write_all(render(assignment).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// 写入文件
///
/// 先写入同目录下的临时文件再替换目标，失败时目标文件保持原样。
pub fn write_assignment<P: AsRef<Path>>(path: P, assignment: &ColourAssignment) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io_at(path, e))?;
    write_to(tmp.as_file_mut(), assignment).map_err(|e| match e {
        Error::IoError(source) => Error::io_at(path, source),
        other => other,
    })?;
    tmp.persist(path).map_err(|e| Error::io_at(path, e.error))?;

    info!(path = %path.display(), nodes = assignment.len(), "colour assignment written");
    Ok(())
}
