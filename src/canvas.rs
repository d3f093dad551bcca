use crate::basis::{Color, Coord, Dim, WHITE};


/// `Canvas` は塗り重ねていく途中のピクセルを保持するコンテナを提供する.
///
/// ピクセルは行優先の 1 次元 `Vec` に格納し, `Coord` を介してアクセスする.
#[derive(Debug, Clone)]
pub(crate) struct Canvas {
    dim: Dim,
    pixels: Vec<Color>,
}

impl Canvas {
    /// 全ピクセルを白で初期化したキャンバスを作る.
    pub(crate) fn new(dim: Dim) -> Self {
        Self {
            dim,
            pixels: vec![WHITE; dim.w as usize * dim.h as usize],
        }
    }

    pub(crate) fn dim(&self) -> Dim {
        self.dim
    }

    /// `coord` の色を返す. 範囲外ではパニックするため, 呼び出し側が範囲内であることを保証する.
    pub(crate) fn get(&self, coord: Coord) -> Color {
        self.pixels[self.coord_as_index(coord)]
    }

    /// `coord` の色を上書きする. 範囲外の書き込みはエラーにせず黙って無視する.
    ///
    /// 円のマスクは中心±半径から計算した座標を含むため, はみ出した分はここで捨てる.
    pub(crate) fn set(&mut self, coord: Coord, color: Color) {
        if !self.dim.contains(coord) {
            return;
        }
        let index = self.coord_as_index(coord);
        self.pixels[index] = color;
    }

    /// 行優先の RGB24 バイト列に書き出す. ウィンドウへの転送に使う.
    pub(crate) fn rgb_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|x| [x.r, x.g, x.b])
            .collect()
    }

    fn coord_as_index(&self, coord: Coord) -> usize {
        coord.y as usize * self.dim.w as usize + coord.x as usize
    }
}
