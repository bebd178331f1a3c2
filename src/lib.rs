//! balance-server: GitOps ラボの残高 API サービス。
//!
//! 全レスポンスを success/data/error の統一エンベロープに整形し、
//! 失敗はハンドラ層の変換境界で HTTP ステータスへ写像する。
//! レート制限・TLS 終端は前段の API ゲートウェイ（Kong）の責務であり、
//! 本サービスは単一ポートで HTTP を返すことだけを契約とする。

pub mod adapter;
pub mod domain;
pub mod infrastructure;
pub mod usecase;
