// What you SEE:
// • Eight shaded tiles orbit a white button, pausing briefly after each lap.
// • Click the button (or press SPACE): the tiles scatter outward and fade.
// • A scratch card appears. Hold Left Mouse and drag to scratch it off.
// • Past half scratched, the card clears itself and the prize shows. ESC quits.

mod cli;

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use clap::Parser;
use glam::DVec2;
use log::info;

use cli::Args;
use greeting_reveal::draw::{
    composite_raster, draw_crosshair, draw_text_5x7, draw_tile, fill_circle, fill_rect, Drawer, Quad,
};
use greeting_reveal::font::text_width;
use greeting_reveal::gamma::GammaLut;
use greeting_reveal::{Error, FrameBuffer, OrbitConfig, PointerSource, ScratchSurface, SurfaceRect, TileRing};

/// How long the scatter plays before the card screen takes over.
const SCATTER_SECONDS: f64 = 0.6;

const BACKGROUND: u32 = 0x00_7F_1D_1D;
const TILE_COLORS: [u32; 8] = [
    0x00_E6_39_46, 0x00_F4_A2_61, 0x00_E9_C4_6A, 0x00_2A_9D_8F,
    0x00_26_46_53, 0x00_8E_CA_E6, 0x00_B5_83_8D, 0x00_6D_59_7A,
];

enum Screen {
    Ring { ring: TileRing, advanced: Rc<Cell<bool>>, scatter_elapsed: Option<f64> },
    Card { card: ScratchSurface, pop_elapsed: Option<f64>, revealed: Rc<Cell<bool>> },
}

fn card_screen(args: &Args) -> Screen {
    let revealed = Rc::new(Cell::new(false));
    let flag = revealed.clone();
    let card = ScratchSurface::mount(args.scratch_config(), move || {
        info!("prize revealed");
        flag.set(true);
    });
    Screen::Card { card, pop_elapsed: None, revealed }
}

fn ring_screen() -> Screen {
    let advanced = Rc::new(Cell::new(false));
    let flag = advanced.clone();
    let ring = TileRing::mount(OrbitConfig::default(), move || flag.set(true));
    Screen::Ring { ring, advanced, scatter_elapsed: None }
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    env_logger::init();

    /* --- Window setup ---
       Visual: an empty window opens in the greeting's deep red. */
    let mut drawer = Drawer::new("Greeting - Scratch & Orbit", args.width, args.height)?;
    let mut screen = FrameBuffer::new(args.width, args.height);
    let lut = GammaLut::new();
    let center = DVec2::new(args.width as f64 / 2.0, args.height as f64 / 2.0);

    let mut current = if args.skip_orbit { card_screen(&args) } else { ring_screen() };

    /* --- HUD / FPS --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");
    let mut last_frame_time = Instant::now();
    let mut was_down = false;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();
        let dt = (now - last_frame_time).as_secs_f64();
        last_frame_time = now;

        /* 1) Inputs, edge-detected so a held button is one press. */
        let mouse = drawer.mouse_pos();
        let down = drawer.left_mouse_down();
        let pressed = down && !was_down;
        let released = !down && was_down;
        was_down = down;

        screen.clear(BACKGROUND);
        let mut next: Option<Screen> = None;

        match &mut current {
            /* 2a) Orbit ring: advance clocks, handle the button, draw tiles. */
            Screen::Ring { ring, advanced, scatter_elapsed } => {
                ring.advance(dt);
                if let (true, Some((mx, my))) = (pressed, mouse) {
                    ring.press(DVec2::new(mx as f64, my as f64) - center);
                }
                if drawer.space_pressed_once() {
                    ring.press(DVec2::ZERO);
                }
                if advanced.get() && scatter_elapsed.is_none() {
                    ring.set_transitioning(true);
                    *scatter_elapsed = Some(0.0);
                }
                if let Some(t) = scatter_elapsed {
                    *t += dt;
                    if *t >= SCATTER_SECONDS {
                        next = Some(card_screen(&args));
                    }
                }
                render_ring(&mut screen, &lut, ring, center);
            }

            /* 2b) Scratch card: feed pointer events, then composite. */
            Screen::Card { card, pop_elapsed, revealed } => {
                let (cw, ch) = (card.config().width as f32, card.config().height as f32);
                let rect = SurfaceRect::new(center.x as f32 - cw / 2.0, center.y as f32 - ch / 2.0, cw, ch);
                match mouse {
                    Some((mx, my)) if rect.contains(mx, my) => {
                        let src = PointerSource::mouse(mx, my);
                        if pressed {
                            card.pointer_down(&src, &rect);
                        } else if down {
                            card.pointer_move(&src, &rect);
                        } else if released {
                            card.pointer_up();
                        }
                    }
                    _ => card.pointer_leave(),
                }
                if revealed.get() {
                    *pop_elapsed = Some(pop_elapsed.unwrap_or(0.0) + dt);
                }
                render_card(&mut screen, &lut, card, &rect, *pop_elapsed);
                if let Some((mx, my)) = mouse {
                    draw_crosshair(&mut screen, mx as i32, my as i32, 12, 0x00_FF_CC_33);
                }
            }
        }

        if let Some(screen_next) = next {
            current = screen_next; // the ring and its phase drivers go with it
        }

        draw_text_5x7(&mut screen, 8, 8, 1, &hud_fps_text, 0x00_FF_FF_FF);

        /* 3) Present to the window. */
        drawer.present(&screen)?;

        /* 4) FPS counter, once per second. */
        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            info!("FPS: {:.1}", fps);
            hud_fps_text = format!("FPS: {:.1}", fps);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    if let (Some(path), Screen::Card { card, .. }) = (&args.dump_overlay, &current) {
        card.save_overlay(path)?;
        info!("overlay written to {}", path.display());
    }

    Ok(())
}

fn render_ring(fb: &mut FrameBuffer, lut: &GammaLut, ring: &TileRing, center: DVec2) {
    let half = ring.config().tile_size / 2.0;
    let color = |i: usize| TILE_COLORS[i % TILE_COLORS.len()];

    for tile in ring.tiles() {
        let Some(v) = ring.visual(tile.index) else { continue };
        let quad = Quad { center: center + v.position, half: half * v.scale, rotation_degrees: v.rotation_degrees };
        draw_tile(fb, lut, &quad, color(tile.index), v.opacity as f32, None);

        // The wrap tile also shows its linked tile, clipped to its own square.
        if let Some(copy) = ring.nested_copy(tile.index) {
            let inner = Quad { center: quad.center + copy.offset, ..quad };
            draw_tile(fb, lut, &inner, color(copy.linked), v.opacity as f32, Some(&quad));
        }
    }

    if !ring.is_transitioning() {
        let r = ring.config().advance_button_radius;
        fill_circle(fb, lut, center, r, 0x00_FF_FF_FF, 0.9);
        let w = text_width(">", 4);
        draw_text_5x7(fb, center.x as i32 - w / 2 + 2, center.y as i32 - 14, 4, ">", 0x00_DC_26_26);
    }
}

fn render_card(fb: &mut FrameBuffer, lut: &GammaLut, card: &ScratchSurface, rect: &SurfaceRect, pop: Option<f64>) {
    let (x, y, w, h) = (rect.left as i32, rect.top as i32, rect.width as i32, rect.height as i32);

    // Prize behind the overlay; it settles in size once revealed.
    fill_rect(fb, x, y, w, h, 0x00_10_B9_81);
    let scale = if pop.is_some_and(|t| t > 0.3) { 3 } else { 2 };
    for (i, line) in ["TU AS GAGNE !", "UN VOYAGE !"].iter().enumerate() {
        let tw = text_width(line, scale);
        let ty = y + h / 2 - 12 * scale + i as i32 * 12 * scale;
        draw_text_5x7(fb, x + (w - tw) / 2, ty, scale, line, 0x00_FE_F0_8A);
    }

    if let Some(raster) = card.raster() {
        composite_raster(fb, lut, raster, x, y, 1.0);
    }

    if let Some(label) = card.progress_label() {
        let tw = text_width(&label, 1);
        draw_text_5x7(fb, x + (w - tw) / 2, y + h + 8, 1, &label, 0x00_FF_FF_FF);
    }
}
