// HTTP形式のレスポンスエンベロープ
//
// プラットフォームのHTTP統合層が期待する
// { statusCode, headers, body } 形式のレスポンス構造を定義する。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// レスポンスボディの`message`フィールドに入る固定文言
pub const GREETING_MESSAGE: &str = "Hello from Serverless Framework!";

/// 常に返却するステータスコード
pub const STATUS_OK: u16 = 200;

/// レスポンスボディのContent-Type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// HTTPレスポンスエンベロープ
///
/// Lambdaランタイムがそのままシリアライズして返却する。
/// フィールド名はcamelCase（`statusCode`）で出力される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// HTTPステータスコード
    pub status_code: u16,

    /// レスポンスヘッダー（ヘッダー名 -> 値）
    pub headers: BTreeMap<String, String>,

    /// JSONエンコード済みのレスポンスボディ
    pub body: String,
}

impl ResponseEnvelope {
    /// JSONボディを持つ200レスポンスを作成
    ///
    /// ヘッダーは以下の2つに固定される:
    /// - Content-Type: application/json
    /// - Access-Control-Allow-Origin: *
    ///
    /// # Arguments
    /// * `body` - JSONエンコード済みのボディ文字列
    pub fn ok_json(body: String) -> Self {
        Self {
            status_code: STATUS_OK,
            headers: Self::build_json_cors_headers(),
            body,
        }
    }

    /// JSON + CORSヘッダーを生成
    pub fn build_json_cors_headers() -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();

        headers.insert("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string());
        headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());

        headers
    }
}

/// レスポンスボディ
///
/// 固定メッセージと受信したイベントをそのまま埋め込む。
/// シリアライズ時のキー順は`message`、`input`の順。
#[derive(Debug, Serialize)]
pub struct GreetingBody<'a, E> {
    /// 固定メッセージ
    pub message: &'static str,

    /// 受信イベント（ログ出力用の文字列ではなく元の値）
    pub input: &'a E,
}

impl<'a, E> GreetingBody<'a, E>
where
    E: Serialize,
{
    /// 受信イベントを埋め込んだボディを作成
    pub fn new(input: &'a E) -> Self {
        Self {
            message: GREETING_MESSAGE,
            input,
        }
    }
}
