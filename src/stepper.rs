use {
    crate::{
        basis::{Dim, RunContext},
        canvas::Canvas,
        search::{circle_mask, Selector},
    },
    rand::Rng,
};


/// `Stepper` はライブキャンバスと探索の状態を所有し, 1 回の `step` で円を 1 つ確定させる.
pub(crate) struct Stepper<R> {
    ctx: RunContext,
    canvas: Canvas,
    selector: Selector<R>,
}

impl<R: Rng> Stepper<R> {
    pub(crate) fn new(ctx: RunContext, rng: R) -> Self {
        let canvas = Canvas::new(ctx.dim);
        Self {
            ctx,
            canvas,
            selector: Selector::new(rng),
        }
    }

    pub(crate) fn dim(&self) -> Dim {
        self.ctx.dim
    }

    /// 改善する円が見つかるまで探索し, 勝った候補をキャンバスに塗って表示用に返す.
    ///
    /// 収束判定はなく, 呼ばれるたびに近似を 1 ステップだけ進める.
    pub(crate) fn step(&mut self) -> &Canvas {
        let winner = self.selector.find_candidate(&self.canvas, &self.ctx);
        for coord in circle_mask(winner.coord, self.selector.radius(), self.ctx.dim) {
            self.canvas.set(coord, winner.color);
        }
        &self.canvas
    }
}
