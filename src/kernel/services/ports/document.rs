/// 会话看到的文本控件：只读全文 + 整体替换
pub trait TextDocument {
    fn text(&self) -> String;

    /// 加载 / 新建时整体替换文本；不算一次编辑，同时清空撤销历史
    fn replace_text(&mut self, text: &str);
}
