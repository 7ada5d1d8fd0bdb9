//! オーバーレイのドラッグ位置決め。
//!
//! ジェスチャーは `Idle` / `Dragging` の 2 状態だけを持つ。
//!
//! - Idle → Dragging: オーバーレイ上で押下したとき。このときにシャツの境界を測り直す。
//! - Dragging 中: 開始位置 + ポインタ移動量 を境界でクランプしてそのまま書き込む
//!   （弾性もモーメンタムも無し）。
//! - Dragging → Idle: ポインタを離したとき。終了アニメーションは無い。

use eframe::egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

/// シャツ中心からのオフセット（論理ピクセル）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// シャツ中心を原点とした境界。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShirtBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl ShirtBounds {
    /// 描画中のシャツ矩形のサイズから求める。面積ゼロ（まだ描画されていない）なら `None`。
    pub fn from_size(size: Vec2) -> Option<Self> {
        if !(size.x > 0.0 && size.y > 0.0) {
            return None;
        }
        Some(Self {
            left: -size.x / 2.0,
            right: size.x / 2.0,
            top: -size.y / 2.0,
            bottom: size.y / 2.0,
        })
    }

    pub fn clamp(&self, position: Position) -> Position {
        Position {
            x: position.x.clamp(self.left, self.right),
            y: position.y.clamp(self.top, self.bottom),
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        (self.left..=self.right).contains(&position.x)
            && (self.top..=self.bottom).contains(&position.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// 押下時に測った境界。`None` ならこのジェスチャーは制約なし。
        bounds: Option<ShirtBounds>,
        pointer_origin: Pos2,
        position_origin: Position,
    },
}

/// 1 つのオーバーレイに対応するドラッグ操作ハンドル。
///
/// 画像とテキストはそれぞれ独立したハンドルを持ち、互いに干渉しない。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragHandle {
    position: Position,
    state: DragState,
}

impl DragHandle {
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// ジェスチャー開始。境界はここで毎回渡し直す（キャッシュしない）。
    pub fn begin(&mut self, pointer: Pos2, bounds: Option<ShirtBounds>) {
        if bounds.is_none() {
            log::debug!("Drag started without measurable shirt bounds; movement is unconstrained");
        }
        self.state = DragState::Dragging {
            bounds,
            pointer_origin: pointer,
            position_origin: self.position,
        };
    }

    /// 押下位置を基準にジェスチャーを始め、現在のポインタ位置まで一度に追従させる。
    ///
    /// egui の `drag_started` はドラッグ判定のしきい値を越えてから届くので、
    /// それまでに動いた分もここで反映する。
    pub fn start(
        &mut self,
        press_origin: Pos2,
        pointer: Pos2,
        bounds: Option<ShirtBounds>,
    ) -> Position {
        self.begin(press_origin, bounds);
        self.update(pointer)
    }

    /// ポインタ移動。Dragging 中でなければ何もしない。
    pub fn update(&mut self, pointer: Pos2) -> Position {
        if let DragState::Dragging {
            bounds,
            pointer_origin,
            position_origin,
        } = self.state
        {
            let delta = pointer - pointer_origin;
            let target = Position::new(position_origin.x + delta.x, position_origin.y + delta.y);
            self.position = match bounds {
                Some(b) => b.clamp(target),
                None => target,
            };
        }
        self.position
    }

    pub fn end(&mut self) {
        self.state = DragState::Idle;
    }
}
