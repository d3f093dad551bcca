use crate::canvas::Canvas;

/// `Color` は 24 ビットの RGB カラーを表す.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Color {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

/// 描き始めのキャンバスを塗り潰す色.
pub(crate) const WHITE: Color = Color {
    r: 255,
    g: 255,
    b: 255,
};

#[inline]
fn diff_u8(a: u8, b: u8) -> u8 {
    if a > b {
        a - b
    } else {
        b - a
    }
}

impl Color {
    /// 2 色間のチェビシェフ距離, つまり各チャンネルの差の絶対値のうち最大のものを求める.
    pub(crate) fn chebyshev_distance(self, other: Self) -> u8 {
        diff_u8(self.r, other.r)
            .max(diff_u8(self.g, other.g))
            .max(diff_u8(self.b, other.b))
    }
}

/// `Coord` はキャンバス上の座標を表す. 範囲チェックは作成時には行わず, 使用する側で行う.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Coord {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl std::ops::Add for Coord {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

/// `Dim` はキャンバスの幅と高さを表す. 実行中は一定で, ウィンドウの大きさと常に一致する.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Dim {
    pub(crate) w: i32,
    pub(crate) h: i32,
}

impl Dim {
    pub(crate) fn contains(self, coord: Coord) -> bool {
        0 <= coord.x && coord.x < self.w && 0 <= coord.y && coord.y < self.h
    }
}

/// `RunContext` は 1 回の実行中に変化しない情報をまとめる. 探索と描画の両方から参照される.
pub(crate) struct RunContext {
    pub(crate) dim: Dim,
    pub(crate) target: Canvas,
}
