// 呼び出しコンテキスト
//
// プラットフォームが渡す呼び出しメタデータのうち、
// このハンドラーが実際に参照するものだけを型として切り出す。

use lambda_runtime::Context;

/// 1回の呼び出しに紐づくメタデータ
///
/// レスポンスの構築には使用しない。
/// `request_id`はログの相関付けにのみ使う。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationContext {
    /// Lambdaリクエスト ID
    pub request_id: String,
}

impl InvocationContext {
    /// 新しいコンテキストを作成
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }
}

impl From<&Context> for InvocationContext {
    fn from(ctx: &Context) -> Self {
        Self::new(ctx.request_id.clone())
    }
}
