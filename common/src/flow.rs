//! 解析フローの状態機械
//!
//! 1ユーザー操作（単一名前解析・CSV一括解析）のリクエスト/レスポンス
//! ライフサイクルを表す。フローごとに独立したインスタンスを持ち、
//! ローディングフラグやエラースロットを他フローと共有しない。
//!
//! 多重送信と順序逆転への備え:
//! - Submitting中のbegin()はNoneを返し、同一フローの同時リクエストは
//!   最大1件に抑える
//! - begin()は世代番号入りのTicketを発行し、settle系は現在の世代と
//!   一致する場合だけ状態を書き換える。古いレスポンスが新しい状態を
//!   上書きすることはない

use crate::error::Error;

/// フローの現在状態
///
/// SuccessとFailedは排他で、遷移のたびに前の状態を丸ごと置き換える。
/// 新しいエラーの横に古い成功結果が残ることはない。
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FlowState<T> {
    #[default]
    Idle,
    Submitting,
    Success(T),
    Failed(String),
}

/// begin()が発行する送信チケット
///
/// 発行時点の世代番号を持ち、対応するsettleで照合される。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// フロー1本分の状態スロット
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flow<T> {
    state: FlowState<T>,
    epoch: u64,
}

impl<T> Flow<T> {
    pub fn new() -> Self {
        Self {
            state: FlowState::Idle,
            epoch: 0,
        }
    }

    /// 現在状態
    pub fn state(&self) -> &FlowState<T> {
        &self.state
    }

    /// リクエスト送信中か
    pub fn is_submitting(&self) -> bool {
        matches!(self.state, FlowState::Submitting)
    }

    /// 直近の成功結果
    pub fn result(&self) -> Option<&T> {
        match &self.state {
            FlowState::Success(value) => Some(value),
            _ => None,
        }
    }

    /// 直近のエラーメッセージ
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FlowState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// 送信開始
    ///
    /// Submitting中の再入はNone（拒否）。それ以外は世代を進めて
    /// Submittingに遷移し、完了時に使うチケットを返す。
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.is_submitting() {
            return None;
        }
        self.epoch += 1;
        self.state = FlowState::Submitting;
        Some(Ticket(self.epoch))
    }

    /// 成功で完了する
    ///
    /// チケットの世代が現在と一致しない場合は何もしない（古い応答）。
    /// 反映された場合はtrueを返す。
    pub fn succeed(&mut self, ticket: Ticket, value: T) -> bool {
        if ticket.0 != self.epoch {
            return false;
        }
        self.state = FlowState::Success(value);
        true
    }

    /// 失敗で完了する
    ///
    /// 世代照合はsucceed()と同じ。エラーは表示用文字列に変換して保持する。
    pub fn fail(&mut self, ticket: Ticket, error: &Error) -> bool {
        if ticket.0 != self.epoch {
            return false;
        }
        self.state = FlowState::Failed(error.to_string());
        true
    }
}
