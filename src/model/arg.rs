use clap::Parser;

/// HoYoLAB 每日签到服务
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<String>,

    /// 只执行一次签到并输出 JSON 结果，不启动 HTTP 服务
    #[arg(long)]
    pub once: bool,
}
