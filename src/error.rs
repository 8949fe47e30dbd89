use thiserror::Error;

/// Fenwick木の操作に失敗したときのエラー。
///
/// エラーを返す操作はどの累積値にも書き込む前に失敗するため、木の内容は変化しない。
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// 添字が許される範囲の外にある。
    #[error("index {index} out of range for Fenwick tree of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// 区間更新の始点が終点より後ろにある。
    #[error("range update starts at {lo} but ends at {hi}")]
    MalformedRange { lo: usize, hi: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
