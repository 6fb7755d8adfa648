//! GraphColor 命令行工具
//!
//! 读取边列表文件，写出每个节点的颜色

use anyhow::Context;
use clap::Parser;
use graphcolor::pipeline::colour_file;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graphcolor")]
#[command(about = "干涉图贪心着色工具")]
#[command(version)]
struct Args {
    /// 输入文件路径（每行 node_id,neighbour_id,...）
    input: PathBuf,

    /// 输出文件路径（每行 node_id,colour）
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let stats = colour_file(&args.input, &args.output).with_context(|| {
        format!(
            "着色失败: {} -> {}",
            args.input.display(),
            args.output.display()
        )
    })?;

    info!(
        nodes = stats.node_count,
        edges = stats.edge_count,
        max_degree = stats.max_degree,
        colours = stats.colour_count,
        duration_us = stats.duration_us,
        "done"
    );

    Ok(())
}
