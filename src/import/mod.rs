//! 数据导入模块
//!
//! 从逗号分隔的文本文件读取边声明：
//! 每行 `node_id,neighbour_id_1,neighbour_id_2,...`，邻居列表可为空。

use crate::error::{Error, Result};
use crate::graph::{EdgeDeclaration, InterferenceGraph, NodeId};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// 旧版工具允许的最大节点 ID
pub const LEGACY_MAX_NODE_ID: u64 = 50;

/// 导入配置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportConfig {
    /// 节点 ID 上限（含），None 表示不限制
    pub max_node_id: Option<u64>,
}

impl ImportConfig {
    /// 旧版工具的限制：ID 必须在 1..=50
    pub fn legacy() -> Self {
        Self {
            max_node_id: Some(LEGACY_MAX_NODE_ID),
        }
    }
}

/// 导入统计
#[derive(Debug, Default, Clone)]
pub struct ImportStats {
    pub lines_read: usize,
    pub declarations: usize,
    pub blank_lines: usize,
}

/// 边列表导入器
#[derive(Debug, Clone, Default)]
pub struct EdgeListImporter {
    config: ImportConfig,
}

impl EdgeListImporter {
    /// 创建导入器
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置配置
    pub fn with_config(mut self, config: ImportConfig) -> Self {
        self.config = config;
        self
    }

    /// 设置节点 ID 上限
    pub fn with_max_node_id(mut self, max: u64) -> Self {
        self.config.max_node_id = Some(max);
        self
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// 从文件读取边声明
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<EdgeDeclaration>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io_at(path, e))?;
        let (declarations, stats) = self.read(file).map_err(|e| match e {
            Error::IoError(source) => Error::io_at(path, source),
            other => other,
        })?;
        info!(
            path = %path.display(),
            lines = stats.lines_read,
            declarations = stats.declarations,
            "edge list loaded"
        );
        Ok(declarations)
    }

    /// 从文件读取并构建干涉图
    pub fn load_graph<P: AsRef<Path>>(&self, path: P) -> Result<InterferenceGraph> {
        InterferenceGraph::from_declarations(self.read_file(path)?)
    }

    /// 从任意 reader 读取边声明
    ///
    /// 空行被跳过；没有任何声明时返回 `EmptyInput`。
    /// 错误和声明中的行号都是输入中的物理行号（1 起），空行也计入。
    pub fn read<R: Read>(&self, mut reader: R) -> Result<(Vec<EdgeDeclaration>, ImportStats)> {
        let mut input = Vec::new();
        reader.read_to_end(&mut input)?;
        let lines = LineTable::new(&input);

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::All)
            .from_reader(input.as_slice());

        let mut stats = ImportStats {
            lines_read: lines.count(),
            ..ImportStats::default()
        };
        let mut declarations = Vec::new();

        for record in csv_reader.records() {
            let record = record.map_err(|e| map_csv_error(e, &lines))?;
            let line = record
                .position()
                .map(|p| lines.line_of(p.record()))
                .unwrap_or(0);

            let fields: Vec<&str> = record.iter().collect();
            if let Some(decl) = self.parse_fields(line, &fields)? {
                debug!(line, node = %decl.node(), degree = decl.neighbours().len(), "declaration parsed");
                declarations.push(decl);
                stats.declarations += 1;
            }
        }
        stats.blank_lines = stats.lines_read.saturating_sub(stats.declarations);

        if declarations.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok((declarations, stats))
    }

    fn parse_fields(&self, line: usize, fields: &[&str]) -> Result<Option<EdgeDeclaration>> {
        if fields.iter().all(|f| f.is_empty()) {
            return Ok(None);
        }

        let (head, rest) = match fields.split_first() {
            Some(split) => split,
            None => return Ok(None),
        };
        let node = self.parse_id(line, head)?;

        // 空的邻居字段忽略，`1,` 表示没有邻居
        let neighbours = rest
            .iter()
            .filter(|f| !f.is_empty())
            .map(|f| self.parse_id(line, f))
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(EdgeDeclaration::new(node, neighbours).at_line(line)))
    }

    fn parse_id(&self, line: usize, token: &str) -> Result<NodeId> {
        let node: NodeId = token.parse().map_err(|e| Error::MalformedInput {
            line,
            reason: format!("{}", e),
        })?;
        if let Some(max) = self.config.max_node_id {
            if node.as_u64() > max {
                return Err(Error::NodeOutOfRange { line, node, max });
            }
        }
        Ok(node)
    }
}

fn map_csv_error(err: csv::Error, lines: &LineTable) -> Error {
    let line = err.position().map(|p| lines.line_of(p.record())).unwrap_or(0);
    match err.into_kind() {
        csv::ErrorKind::Io(e) => Error::IoError(e),
        csv::ErrorKind::Utf8 { .. } => Error::MalformedInput {
            line,
            reason: "不是合法的 UTF-8 文本".to_string(),
        },
        other => Error::MalformedInput {
            line,
            reason: format!("{:?}", other),
        },
    }
}

/// csv 记录序号 -> 物理行号
///
/// 关闭引号后每个非空物理行恰好是一条记录，csv 只跳过完全为空的行。
/// 行结束符与 csv 一致：`\n`、`\r\n` 或单独的 `\r`。
struct LineTable {
    /// 第 k 条记录所在的行号（1 起）
    record_lines: Vec<usize>,
    /// 物理行数（末尾换行不产生新行）
    count: usize,
}

impl LineTable {
    fn new(input: &[u8]) -> Self {
        let mut record_lines = Vec::new();
        let mut count = 0;
        let mut line_len = 0;
        let mut i = 0;
        while i < input.len() {
            match input[i] {
                b'\r' | b'\n' => {
                    if input[i] == b'\r' && input.get(i + 1) == Some(&b'\n') {
                        i += 1;
                    }
                    count += 1;
                    if line_len > 0 {
                        record_lines.push(count);
                    }
                    line_len = 0;
                }
                _ => line_len += 1,
            }
            i += 1;
        }
        if line_len > 0 {
            count += 1;
            record_lines.push(count);
        }
        Self {
            record_lines,
            count,
        }
    }

    fn count(&self) -> usize {
        self.count
    }

    fn line_of(&self, record: u64) -> usize {
        self.record_lines
            .get(record as usize)
            .copied()
            .unwrap_or(self.count)
    }
}

/// 使用默认配置从文件读取干涉图
pub fn read_interference_graph<P: AsRef<Path>>(path: P) -> Result<InterferenceGraph> {
    EdgeListImporter::new().load_graph(path)
}
