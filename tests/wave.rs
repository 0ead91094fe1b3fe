use wave_canvas::uniforms::shade;
use wave_canvas::{FrameUniforms, MousePosition};

// Independent restatement of the fragment shader in f64.
fn expected(xy: (f64, f64), res: (f64, f64), mouse: (f64, f64), t: f64) -> [f64; 4] {
    let (x, y) = xy;
    let (w, h) = res;
    let st = (x / w, y / h);
    let m = (mouse.0 / w, mouse.1 / h);
    let dist = (st.0 - m.0).hypot(st.1 - m.1);
    let wave = (10.0 * dist - 2.0 * t).sin().abs();
    [wave, st.0 * wave, st.1, 1.0]
}

fn approx_eq4(a: [f32; 4], b: [f64; 4], eps: f64) -> bool {
    a.iter().zip(b.iter()).all(|(a, b)| (*a as f64 - b).abs() < eps)
}

#[test]
fn matches_shader_math_at_sampled_points() {
    let cases = [
        ((1920.0, 1080.0), (960.0, 540.0), 0.0),
        ((1920.0, 1080.0), (0.0, 0.0), 1.25),
        ((1080.0, 1920.0), (100.0, 1800.0), 42.0),
        ((640.0, 480.0), (640.0, 480.0), 7.5),
    ];
    let samples = [
        (0.0, 0.0),
        (0.5, 0.5),
        (0.2, 0.8),
        (0.8, 0.2),
        (0.99, 0.01),
    ];

    for &(res, mouse, t) in &cases {
        let uniforms = FrameUniforms::new(
            res.0 as u32,
            res.1 as u32,
            MousePosition {
                x: mouse.0 as f32,
                y: mouse.1 as f32,
            },
            t as f32,
        );
        for &(u, v) in &samples {
            let xy = (u * res.0, v * res.1);
            let got = shade(xy.0 as f32, xy.1 as f32, &uniforms);
            let want = expected(xy, res, mouse, t);
            assert!(
                approx_eq4(got, want, 1e-4),
                "res={res:?} mouse={mouse:?} t={t} xy={xy:?}: got {got:?} want {want:?}"
            );
        }
    }
}

#[test]
fn rings_move_outwards_over_time() {
    // A fixed pixel's phase advances by 2 radians per second.
    let mouse = MousePosition { x: 0.0, y: 0.0 };
    let at = |t: f32| shade(300.0, 400.0, &FrameUniforms::new(600, 800, mouse, t))[0];
    let period = std::f32::consts::PI / 2.0;
    assert!((at(0.3) - at(0.3 + period)).abs() < 1e-4);
}
