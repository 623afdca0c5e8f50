//! 简体中文翻译 (zh-CN)

use super::keys::{CommonTexts, HintTexts, StatusTexts, StunTexts, Translations};

fn server_count(n: usize) -> String {
    format!("{n} 个 STUN 服务器")
}

fn row_edited(row: usize) -> String {
    format!("已编辑第 {row} 行")
}

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "STUN 管理",
        add: "添加",
        saving: "保存中...",
        saved: "已保存",
        error: "错误",
    },
    stun: StunTexts {
        title: "STUN 服务器",
        help: "STUN 服务器用于确定路由器后面的参与者的公网 IP 地址。",
        placeholder: "stunserver:port",
        input_label: "STUN 服务器地址",
        server_count,
    },
    hints: HintTexts {
        select: "选择",
        add: "添加",
        edit: "编辑",
        delete: "删除",
        clear: "清空",
        finish: "完成",
        revert: "撤销",
        quit: "退出",
    },
    status: StatusTexts {
        default_restored: "你删除了所有 STUN 服务器。由于几乎总是需要它，已添加默认 STUN 服务器。",
        delete_while_saving: "请等待保存完成后再删除",
        initial_state_failed: "无法加载已配置的 STUN 服务器",
        row_edited,
    },
};
