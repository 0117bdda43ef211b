use std::cell::Cell;
use std::rc::Rc;

use glam::DVec2;
use greeting_reveal::brush::{erase, make_radial_stamp};
use greeting_reveal::coverage::measure;
use greeting_reveal::orbit::{position, ring_tiles, seam_offset};
use greeting_reveal::reveal::RevealMachine;
use greeting_reveal::{
    OrbitConfig, PointerSource, RasterSurface, RevealState, ScratchConfig, ScratchSurface, SurfaceRect, TileRing,
};
use image::Rgba;

fn opaque(width: u32, height: u32) -> RasterSurface {
    let mut s = RasterSurface::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            s.put(x, y, Rgba([212, 175, 55, 255]));
        }
    }
    s
}

fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
    let fired = Rc::new(Cell::new(0));
    let seen = fired.clone();
    (fired, move || seen.set(seen.get() + 1))
}

#[test]
fn ring_starts_at_half_turn_symmetry() {
    let ring = TileRing::mount(OrbitConfig::default(), || {});
    let t0 = ring.visual(0).unwrap().position;
    let t4 = ring.visual(4).unwrap().position;
    assert!((t0 - DVec2::new(180.0, 0.0)).length() < 1e-9);
    assert!((t4 - DVec2::new(-180.0, 0.0)).length() < 1e-9);
}

#[test]
fn repeated_erase_at_one_point_is_near_idempotent() {
    let mut s = opaque(350, 200);
    let stamp = make_radial_stamp(30);
    erase(&mut s, 175.0, 100.0, &stamp);
    let first = measure(&s);
    erase(&mut s, 175.0, 100.0, &stamp);
    let second = measure(&s);
    assert!(second >= first);
    assert!(second - first < 0.05, "{first} -> {second}");
}

#[test]
fn preset_51_percent_reveals_once() {
    let mut s = opaque(100, 100);
    for i in 0..5100u32 {
        s.set_alpha(i % 100, i / 100, 0);
    }
    let coverage = measure(&s);
    assert_eq!(coverage, 51.0);

    let (fired, notify) = counter();
    let mut machine = RevealMachine::new(50.0, Box::new(notify));
    assert!(machine.observe(coverage));
    assert!(!machine.observe(coverage));
    assert!(!machine.observe(coverage + 10.0));
    assert_eq!(fired.get(), 1);
}

#[test]
fn single_dab_then_full_sweep_reveals_exactly_once() {
    let (fired, notify) = counter();
    let mut card = ScratchSurface::mount(ScratchConfig::gold_ticket(), notify);
    assert_eq!(measure(card.raster().unwrap()), 0.0);

    // card shown at 1:1 at the window origin
    let rect = SurfaceRect::new(0.0, 0.0, 350.0, 200.0);
    card.pointer_down(&PointerSource::mouse(175.0, 100.0), &rect);
    let one = card.coverage();
    assert!(one > 0.0 && one < 50.0);

    let mut steps = 0;
    'sweep: for _ in 0..10 {
        for y in (0..200).step_by(5) {
            for x in (0..350).step_by(5) {
                card.pointer_move(&PointerSource::touch(x as f32, y as f32), &rect);
                steps += 1;
                if card.is_revealed() {
                    break 'sweep;
                }
            }
        }
    }
    assert!(card.is_revealed(), "not revealed after {steps} samples");
    assert_eq!(card.state(), RevealState::Revealed);

    // keep dragging well past the threshold
    for x in 0..350 {
        card.pointer_move(&PointerSource::mouse(x as f32, 50.0), &rect);
    }
    card.pointer_up();
    assert_eq!(fired.get(), 1);
    assert_eq!(card.coverage(), 100.0);
}

#[test]
fn seam_and_scatter_hold_over_a_long_run() {
    let config = OrbitConfig::default();
    let tiles = ring_tiles(config.tile_count, config.orbit_radius);
    for i in 0..1000 {
        let progress = i as f64 * 0.011;
        let offset = seam_offset(&tiles[7], &tiles[0], progress);
        assert!((offset + tiles[7].position(progress) - tiles[0].position(progress)).length() < 1e-9);
        assert!((position(progress, 180.0) - position(progress + 1.0, 180.0)).length() < 1e-6);
    }

    let mut ring = TileRing::mount(config, || {});
    ring.advance(4.2);
    let orbit: Vec<f64> = (0..8).map(|i| ring.visual(i).unwrap().position.length()).collect();
    ring.set_transitioning(true);
    for (i, r) in orbit.iter().enumerate() {
        assert!(ring.visual(i).unwrap().position.length() > *r);
    }
}
