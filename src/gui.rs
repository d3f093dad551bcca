use std::time::Duration;

use sdl2::{
    event::Event, keyboard::Keycode, pixels::PixelFormatEnum, surface::Surface,
};

use crate::stepper::Stepper;
use rand::Rng;

/// ウィンドウを開き, 1 フレームごとに探索を 1 ステップ進めてキャンバス全体を描画する.
///
/// ウィンドウを閉じるか Escape / Q で終了する. それ以外の終了条件はなく, 近似は延々と続く.
pub(crate) fn begin(mut stepper: Stepper<impl Rng>) {
    let sdl = sdl2::init().expect("failed to initialize sdl");
    let video = sdl.video().expect("failed to initialize video subsystem");

    let dim = stepper.dim();

    let mut canvas = video
        .window("marufude", dim.w as u32, dim.h as u32)
        .position_centered()
        .opengl()
        .build()
        .expect("failed to build window")
        .into_canvas()
        .build()
        .expect("failed to build canvas");

    let texture_creator = canvas.texture_creator();

    let mut event_pump = sdl.event_pump().expect("failed to obtain event pump");

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape | Keycode::Q),
                    ..
                } => break 'running,

                _ => {}
            }
        }

        let frame = stepper.step().rgb_bytes();

        let mut surface = Surface::new(dim.w as u32, dim.h as u32, PixelFormatEnum::RGB24)
            .expect("failed to create surface");
        surface.with_lock_mut(|x| x.copy_from_slice(&frame));

        let texture = texture_creator
            .create_texture_from_surface(surface)
            .expect("failed to create texture");

        canvas.copy(&texture, None, None).expect("failed to copy texture");
        canvas.present();

        // 60fps
        std::thread::sleep(Duration::from_secs_f64(1.0 / 60.0));
    }
}
