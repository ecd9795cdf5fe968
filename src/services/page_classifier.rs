//! 页面有效性判断 - 业务能力层
//!
//! 判断导航后的页面是真正的做题页，还是被重定向到登录 / 账户页，
//! 或者是需要升级账号的 VIP 题。

/// 登录页路径
pub const LOGIN_PATH: &str = "/dang-nhap";

/// 账户页路径（未授权时会被重定向到这里）
pub const ACCOUNT_PATH: &str = "/tai-khoan";

/// VIP 提示文案。站点以错误编码输出，这里按实际下发的字节序列匹配，不做纠正。
pub const GATING_PHRASES: [&str; 2] = [
    // "Đây là mã đề VIP"
    "\u{c4}\u{c3}\u{a2}y l\u{c3}\u{a0} m\u{c3}\u{a3} \u{c4}\u{2018}\u{e1}\u{bb} VIP",
    // "cần nâng cấp tài khoản"
    "c\u{e1}\u{ba}\u{a7}n n\u{c3}\u{a2}ng c\u{e1}\u{ba}\u{a5}p t\u{c3}\u{a0}i kho\u{e1}\u{ba}\u{a3}n",
];

/// 页面有效性判断
pub struct PageClassifier;

impl PageClassifier {
    /// 是否为可提取的做题页
    ///
    /// 任一条件不满足即返回 false：
    /// - URL 不包含登录 / 账户路径
    /// - 页面内容不包含 VIP 提示文案
    pub fn is_valid_page(current_url: &str, page_content: &str) -> bool {
        if Self::is_redirected(current_url) {
            return false;
        }
        !Self::is_gated(page_content)
    }

    /// URL 是否被重定向到登录 / 账户页
    pub fn is_redirected(current_url: &str) -> bool {
        current_url.contains(ACCOUNT_PATH) || current_url.contains(LOGIN_PATH)
    }

    /// 页面是否为 VIP 限制内容
    pub fn is_gated(page_content: &str) -> bool {
        GATING_PHRASES
            .iter()
            .any(|phrase| page_content.contains(phrase))
    }
}
