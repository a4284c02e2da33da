/// 编辑器无法自己完成、需要宿主执行的副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SetClipboardText(String),
    RequestClipboardText,
}
