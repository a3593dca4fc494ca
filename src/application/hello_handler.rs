/// Helloハンドラー
///
/// 受信イベントをログに出力し、イベントをそのまま埋め込んだ
/// 固定形式のJSONレスポンスを返す。
use serde::Serialize;
use thiserror::Error;

use crate::domain::{GreetingBody, InvocationContext, ResponseEnvelope};
use crate::infrastructure::EventLogger;

/// Helloハンドラーのエラー型
#[derive(Debug, Error)]
pub enum HelloHandlerError {
    /// イベントまたはレスポンスボディのJSONシリアライズに失敗
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 受信イベントを処理するハンドラー
///
/// ロガーは起動時に構築して注入する。状態は持たない。
pub struct HelloHandler<L>
where
    L: EventLogger,
{
    /// イベントロガー
    logger: L,
}

impl<L> HelloHandler<L>
where
    L: EventLogger,
{
    /// 新しいHelloHandlerを作成
    pub fn new(logger: L) -> Self {
        Self { logger }
    }

    /// イベントを処理してレスポンスを生成
    ///
    /// # 処理フロー
    /// 1. イベントをJSONシリアライズ
    /// 2. `Received event: <json>`をINFOで1行出力
    /// 3. 固定メッセージと元のイベントからボディを構築
    /// 4. 200 + JSON/CORSヘッダーのエンベロープで返却
    ///
    /// # 引数
    /// * `event` - 受信イベント（検証・変更はしない）
    /// * `ctx` - 呼び出しコンテキスト
    ///
    /// # 戻り値
    /// * 成功時は`Ok(ResponseEnvelope)`（常にstatusCode 200）
    /// * シリアライズ不能なイベントの場合は`Err(HelloHandlerError::Serialization)`
    pub fn handle<E>(
        &self,
        event: &E,
        ctx: &InvocationContext,
    ) -> Result<ResponseEnvelope, HelloHandlerError>
    where
        E: Serialize,
    {
        // ログ出力前にシリアライズし、失敗時は何も出力しない
        let event_json = serde_json::to_string(event)?;
        self.logger.event_received(ctx, &event_json);

        // ボディにはログ用文字列ではなく元のイベントを埋め込む
        let body = serde_json::to_string(&GreetingBody::new(event))?;

        Ok(ResponseEnvelope::ok_json(body))
    }
}
