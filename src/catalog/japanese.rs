//! Built-in Japanese vocabulary

use super::{
    strings, Catalog, Cities, EmploymentRung, NamePool, Organizations, PerDepartment,
    PositionRung,
};
use crate::core::types::{EmploymentType, RankGroup};

pub(super) fn catalog() -> Catalog {
    Catalog {
        locale: "ja_JP".to_string(),
        organizations: Organizations {
            org_lv1: strings(&["株式会社hogehoge"]),
            org_lv2: strings(&["営業・マーケティング", "エンジニアリング", "人事", "財務"]),
            org_lv3: PerDepartment {
                sales: strings(&["グローバル営業", "国内営業", "営業管理", "事業開発"]),
                engineering: strings(&[
                    "ソフトウェア開発",
                    "クラウドインフラ",
                    "データエンジニアリング",
                    "製品開発",
                ]),
                hr: strings(&["採用", "人事オペレーション", "人材開発", "労務管理"]),
                finance: strings(&["経営企画", "経理", "財務", "内部監査"]),
            },
            org_lv4: strings(&["第一チーム", "第二チーム", "第三チーム", "第四チーム", "第五チーム"]),
        },
        positions: vec![
            PositionRung { title: "一般社員".to_string(), weight: 50, rank: RankGroup::Individual },
            PositionRung { title: "チームリーダー".to_string(), weight: 30, rank: RankGroup::Individual },
            PositionRung { title: "マネージャー".to_string(), weight: 10, rank: RankGroup::Manager },
            PositionRung { title: "部長".to_string(), weight: 5, rank: RankGroup::Director },
            PositionRung { title: "執行役員".to_string(), weight: 3, rank: RankGroup::Executive },
            PositionRung { title: "取締役".to_string(), weight: 2, rank: RankGroup::Executive },
        ],
        employment_types: vec![
            EmploymentRung { kind: EmploymentType::FullTime, label: "正社員".to_string(), weight: 70 },
            EmploymentRung { kind: EmploymentType::Contract, label: "契約社員".to_string(), weight: 20 },
            EmploymentRung { kind: EmploymentType::Temporary, label: "派遣社員".to_string(), weight: 10 },
        ],
        job_categories: PerDepartment {
            sales: strings(&["営業担当", "アカウントマネージャー", "営業管理", "事業開発"]),
            engineering: strings(&[
                "ソフトウェアエンジニア",
                "データエンジニア",
                "クラウドアーキテクト",
                "DevOpsエンジニア",
            ]),
            hr: strings(&["人事担当", "採用担当", "人事業務", "研修担当"]),
            finance: strings(&["財務アナリスト", "経理担当", "財務担当", "監査担当"]),
        },
        genders: strings(&["男性", "女性", "その他"]),
        cities: Cities {
            major: strings(&["東京", "横浜", "大阪", "名古屋", "福岡"]),
            other: strings(&["札幌", "仙台", "広島", "神戸", "京都"]),
        },
        names: NamePool {
            given: strings(&[
                "太郎", "花子", "翔太", "陽子", "健一", "美咲", "大輔", "結衣", "拓也",
                "さくら", "直樹", "愛", "誠", "真由美", "亮", "恵", "浩二", "舞", "隆",
                "七海", "和也", "香織", "学", "明美",
            ]),
            family: strings(&[
                "佐藤", "鈴木", "高橋", "田中", "伊藤", "渡辺", "山本", "中村", "小林",
                "加藤", "吉田", "山田", "佐々木", "山口", "松本", "井上", "木村", "林",
                "斎藤", "清水", "山崎", "森", "池田", "橋本",
            ]),
            family_first: true,
        },
    }
}
