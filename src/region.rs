use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::{EnumIter, IntoEnumIterator};

/// Administrative region encoded by the first two characters of a mainland identity number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Region {
    Beijing,
    Tianjin,
    Hebei,
    Shanxi,
    InnerMongolia,
    Liaoning,
    Jilin,
    Heilongjiang,
    Shanghai,
    Jiangsu,
    Zhejiang,
    Anhui,
    Fujian,
    Jiangxi,
    Shandong,
    Henan,
    Hubei,
    Hunan,
    Guangdong,
    Guangxi,
    Hainan,
    Chongqing,
    Sichuan,
    Guizhou,
    Yunnan,
    Tibet,
    Shaanxi,
    Gansu,
    Qinghai,
    Ningxia,
    Xinjiang,
    Taiwan,
    HongKong,
    Macau,
    Overseas,
}

impl Region {
    /// The 2-digit prefix identifying this region.
    pub fn code(&self) -> &'static str {
        match self {
            Region::Beijing => "11",
            Region::Tianjin => "12",
            Region::Hebei => "13",
            Region::Shanxi => "14",
            Region::InnerMongolia => "15",
            Region::Liaoning => "21",
            Region::Jilin => "22",
            Region::Heilongjiang => "23",
            Region::Shanghai => "31",
            Region::Jiangsu => "32",
            Region::Zhejiang => "33",
            Region::Anhui => "34",
            Region::Fujian => "35",
            Region::Jiangxi => "36",
            Region::Shandong => "37",
            Region::Henan => "41",
            Region::Hubei => "42",
            Region::Hunan => "43",
            Region::Guangdong => "44",
            Region::Guangxi => "45",
            Region::Hainan => "46",
            Region::Chongqing => "50",
            Region::Sichuan => "51",
            Region::Guizhou => "52",
            Region::Yunnan => "53",
            Region::Tibet => "54",
            Region::Shaanxi => "61",
            Region::Gansu => "62",
            Region::Qinghai => "63",
            Region::Ningxia => "64",
            Region::Xinjiang => "65",
            Region::Taiwan => "71",
            Region::HongKong => "81",
            Region::Macau => "82",
            Region::Overseas => "91",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Region::Beijing => "Beijing",
            Region::Tianjin => "Tianjin",
            Region::Hebei => "Hebei",
            Region::Shanxi => "Shanxi",
            Region::InnerMongolia => "Inner Mongolia",
            Region::Liaoning => "Liaoning",
            Region::Jilin => "Jilin",
            Region::Heilongjiang => "Heilongjiang",
            Region::Shanghai => "Shanghai",
            Region::Jiangsu => "Jiangsu",
            Region::Zhejiang => "Zhejiang",
            Region::Anhui => "Anhui",
            Region::Fujian => "Fujian",
            Region::Jiangxi => "Jiangxi",
            Region::Shandong => "Shandong",
            Region::Henan => "Henan",
            Region::Hubei => "Hubei",
            Region::Hunan => "Hunan",
            Region::Guangdong => "Guangdong",
            Region::Guangxi => "Guangxi",
            Region::Hainan => "Hainan",
            Region::Chongqing => "Chongqing",
            Region::Sichuan => "Sichuan",
            Region::Guizhou => "Guizhou",
            Region::Yunnan => "Yunnan",
            Region::Tibet => "Tibet",
            Region::Shaanxi => "Shaanxi",
            Region::Gansu => "Gansu",
            Region::Qinghai => "Qinghai",
            Region::Ningxia => "Ningxia",
            Region::Xinjiang => "Xinjiang",
            Region::Taiwan => "Taiwan",
            Region::HongKong => "Hong Kong",
            Region::Macau => "Macau",
            Region::Overseas => "Overseas",
        }
    }

    /// Name as printed on the card.
    pub fn local_name(&self) -> &'static str {
        match self {
            Region::Beijing => "北京",
            Region::Tianjin => "天津",
            Region::Hebei => "河北",
            Region::Shanxi => "山西",
            Region::InnerMongolia => "内蒙古",
            Region::Liaoning => "辽宁",
            Region::Jilin => "吉林",
            Region::Heilongjiang => "黑龙江",
            Region::Shanghai => "上海",
            Region::Jiangsu => "江苏",
            Region::Zhejiang => "浙江",
            Region::Anhui => "安徽",
            Region::Fujian => "福建",
            Region::Jiangxi => "江西",
            Region::Shandong => "山东",
            Region::Henan => "河南",
            Region::Hubei => "湖北",
            Region::Hunan => "湖南",
            Region::Guangdong => "广东",
            Region::Guangxi => "广西",
            Region::Hainan => "海南",
            Region::Chongqing => "重庆",
            Region::Sichuan => "四川",
            Region::Guizhou => "贵州",
            Region::Yunnan => "云南",
            Region::Tibet => "西藏",
            Region::Shaanxi => "陕西",
            Region::Gansu => "甘肃",
            Region::Qinghai => "青海",
            Region::Ningxia => "宁夏",
            Region::Xinjiang => "新疆",
            Region::Taiwan => "台湾",
            Region::HongKong => "香港",
            Region::Macau => "澳门",
            Region::Overseas => "国外",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

lazy_static! {
    static ref REGION_CODES: HashMap<&'static str, Region> =
        Region::iter().map(|region| (region.code(), region)).collect();
}

/// Looks up the region for a 2-character prefix. Anything that is not exactly a known
/// 2-digit code (including longer strings) yields `None`.
pub fn lookup_region(prefix: &str) -> Option<Region> {
    REGION_CODES.get(prefix).copied()
}

/// Region of the first two characters of `id_number`.
pub(crate) fn region_of(id_number: &str) -> Option<Region> {
    id_number.get(..2).and_then(lookup_region)
}
