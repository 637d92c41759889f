//! 服务器区域归一化

use serde::Serialize;

/// 逻辑区域
///
/// 平台返回的区服代码种类繁多，展示时只需要区分这几个大区
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Region {
    #[serde(rename = "TW")]
    Tw,
    #[serde(rename = "SEA")]
    Sea,
    #[serde(rename = "EU")]
    Eu,
    #[serde(rename = "NA")]
    Na,
    #[serde(rename = "KR")]
    Kr,
    /// 未收录的区服代码，不视为错误
    Unknown,
}

impl Region {
    /// 将平台区服代码映射到逻辑区域，未知代码返回 `Region::Unknown`
    pub fn from_code(code: &str) -> Self {
        match code {
            "os_cht" | "prod_gf_sg" | "prod_official_cht" => Region::Tw,
            "os_asia" | "prod_gf_jp" | "prod_official_asia" => Region::Sea,
            "eur01" | "os_euro" | "prod_gf_eu" | "prod_official_eur" => Region::Eu,
            "usa01" | "os_usa" | "prod_gf_us" | "prod_official_usa" => Region::Na,
            "os_kr" | "prod_gf_kr" => Region::Kr,
            _ => Region::Unknown,
        }
    }
}
