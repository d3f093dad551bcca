use {
    crate::{
        basis::{Color, Coord, Dim, RunContext},
        canvas::Canvas,
    },
    rand::Rng,
};


/// 最初のステップで試す円の半径.
pub(crate) const INITIAL_RADIUS: i32 = 100;

/// 縮小してもこれより小さくはしない半径の下限.
const RADIUS_FLOOR: i32 = 3;

/// 半径を 1 縮めるまでに許す連続失敗バッチ数.
const FAILURE_STREAK: u32 = 10;

/// 1 回の試行で生成する候補の数.
const CANDIDATES_PER_BATCH: usize = 3;

/// `Candidate` は貼り付けてみる円の提案を表す. 採用か棄却かの判断は `Selector` が行う.
///
/// 半径は候補ではなくステップごとの `Selector` の状態として持つ.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate {
    pub(crate) coord: Coord,
    pub(crate) color: Color,
}

/// 中心 `center`, 半径 `radius` の円に含まれ, かつキャンバス内に収まる座標の列を求める.
///
/// 列の順序はオフセットの行優先走査で, 同じ入力に対して常に同じになる.
pub(crate) fn circle_mask(center: Coord, radius: i32, dim: Dim) -> Vec<Coord> {
    let mut result = vec![];
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            let coord = center + Coord { x: dx, y: dy };
            if dim.contains(coord) {
                result.push(coord);
            }
        }
    }
    result
}

/// マスクに含まれる座標全体での最悪ピクセル距離を求める. 空のマスクでは 0 になる.
///
/// 評価は常に候補の足跡に限られるため, コストは画像全体ではなく円の面積に比例する.
pub(crate) fn region_diff(a: &Canvas, b: &Canvas, mask: &[Coord]) -> u8 {
    mask.iter()
        .map(|&coord| a.get(coord).chebyshev_distance(b.get(coord)))
        .max()
        .unwrap_or(0)
}

/// 候補を一括生成する. 中心はキャンバス内から一様に選び, 色は目標画像のその点から標本化する.
///
/// 一様ランダムな色を使う案もあったが, 目標からの標本化の方が収束が速い.
fn generate_candidates(rng: &mut impl Rng, ctx: &RunContext) -> Vec<Candidate> {
    (0..CANDIDATES_PER_BATCH)
        .map(|_| {
            let coord = Coord {
                x: rng.gen_range(0..ctx.dim.w),
                y: rng.gen_range(0..ctx.dim.h),
            };
            Candidate {
                coord,
                color: ctx.target.get(coord),
            }
        })
        .collect()
}

/// 候補のうち改善量が正で最大のものを返す. 同率なら先に見た候補を採る.
///
/// 改善量は候補のマスク上で測った (現在のキャンバスと目標の差分) − (候補を塗った後と目標の差分).
fn best_candidate(
    candidates: &[Candidate],
    canvas: &Canvas,
    radius: i32,
    ctx: &RunContext,
) -> Option<Candidate> {
    let mut result = None;
    let mut record = 0;

    for &candidate in candidates {
        let mask = circle_mask(candidate.coord, radius, ctx.dim);
        let current = region_diff(canvas, &ctx.target, &mask) as i32;
        // 塗った後のマスク上は全て候補の色になるので, 差分は直接求まる
        let painted = mask
            .iter()
            .map(|&coord| candidate.color.chebyshev_distance(ctx.target.get(coord)))
            .max()
            .unwrap_or(0) as i32;

        let improvement = current - painted;
        if improvement > record {
            record = improvement;
            result = Some(candidate);
        }
    }

    result
}

/// `Selector` は貪欲探索の状態機械を表す. 半径と連続失敗回数をステップをまたいで保持する.
pub(crate) struct Selector<R> {
    radius: i32,
    failures: u32,
    rng: R,
}

impl<R: Rng> Selector<R> {
    pub(crate) fn new(rng: R) -> Self {
        Self {
            radius: INITIAL_RADIUS,
            failures: 0,
            rng,
        }
    }

    pub(crate) fn radius(&self) -> i32 {
        self.radius
    }

    /// 候補を 1 バッチだけ試す. 改善する候補がなければ失敗として数え,
    /// 失敗が `FAILURE_STREAK` 回続いたら半径を 1 縮めて数え直す.
    ///
    /// 大きな円で改善できなくなっても, 筆を細くしていくことで停滞せずに収束を続けられる.
    pub(crate) fn try_attempt(&mut self, canvas: &Canvas, ctx: &RunContext) -> Option<Candidate> {
        let candidates = generate_candidates(&mut self.rng, ctx);
        match best_candidate(&candidates, canvas, self.radius, ctx) {
            Some(winner) => {
                self.failures = 0;
                Some(winner)
            }
            None => {
                self.failures += 1;
                if self.failures >= FAILURE_STREAK && self.radius > RADIUS_FLOOR {
                    self.radius -= 1;
                    self.failures = 0;
                }
                None
            }
        }
    }

    /// 改善する候補が見つかるまで `try_attempt` を繰り返す. 一度縮めた半径は戻さない.
    ///
    /// 下限の半径でも改善が見つからない場合は打ち切らず回り続ける.
    pub(crate) fn find_candidate(&mut self, canvas: &Canvas, ctx: &RunContext) -> Candidate {
        loop {
            if let Some(candidate) = self.try_attempt(canvas, ctx) {
                return candidate;
            }
        }
    }
}
