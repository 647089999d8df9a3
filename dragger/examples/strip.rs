//! Drag a long horizontal strip in the terminal.
//!
//! Left-drag scrolls, the wheel scrolls sideways, and resting the pointer near
//! either edge autoscrolls. `q` quits.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyCode};
use crossterm::{cursor, execute, queue, style, terminal};
use dragger::logging::{init_file_logger, LevelFilter};
use dragger::term::{dispatch_mouse, DEFAULT_LINE_DELTA};
use dragger::{Document, Dragger, DraggerOptions, Element, Rect};

const STRIP_ROW: u16 = 2;
const STRIP_HEIGHT: u16 = 3;
const CONTENT_WIDTH: u16 = 600;
const FRAME: Duration = Duration::from_millis(16);

fn main() -> io::Result<()> {
    if let Err(err) = init_file_logger("strip.log", LevelFilter::Debug) {
        eprintln!("logging disabled: {err}");
    }

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        event::EnableMouseCapture
    )?;

    let result = run(&mut stdout);

    execute!(
        stdout,
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut io::Stdout) -> io::Result<()> {
    let (width, _) = terminal::size()?;

    let document = Document::new();
    let strip = document.create_element("strip");
    strip.set_bounds(Rect::new(
        0.0,
        f64::from(STRIP_ROW),
        f64::from(width),
        f64::from(STRIP_HEIGHT),
    ));
    strip.set_content_size(f64::from(CONTENT_WIDTH), f64::from(STRIP_HEIGHT));
    document.body().append_child(&strip);

    // Cells are coarse, so slow the drag and tractor down.
    let options = DraggerOptions::default()
        .with_speed(1.0)
        .with_tractor(4.0, 60);
    let dragger = Dragger::new(options).map_err(io::Error::other)?;
    dragger.set_scrolled(|el| log::trace!("scrolled to {}", el.scroll_left()));
    dragger.init(Some(&strip));
    dragger.tractor().enable();

    let mut last = Instant::now();
    loop {
        draw(stdout, &strip, &dragger, width)?;

        if event::poll(FRAME)? {
            match event::read()? {
                CrosstermEvent::Key(key) if key.code == KeyCode::Char('q') => break,
                CrosstermEvent::Mouse(mouse) => {
                    dispatch_mouse(&strip, &mouse, DEFAULT_LINE_DELTA);
                }
                CrosstermEvent::Resize(w, _) => {
                    strip.set_bounds(Rect::new(
                        0.0,
                        f64::from(STRIP_ROW),
                        f64::from(w),
                        f64::from(STRIP_HEIGHT),
                    ));
                }
                _ => {}
            }
        }

        let now = Instant::now();
        document.advance(now - last);
        last = now;
    }

    dragger.destroy();
    Ok(())
}

fn draw(
    stdout: &mut io::Stdout,
    strip: &Element,
    dragger: &Dragger,
    width: u16,
) -> io::Result<()> {
    let offset = strip.scroll_left() as usize;
    let ruler: String = (offset..offset + usize::from(width))
        .map(|i| match i % 10 {
            0 => char::from_digit(((i / 10) % 10) as u32, 10).unwrap_or('|'),
            5 => '+',
            _ => '-',
        })
        .collect();

    queue!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
        style::Print(format!(
            "offset {:>4}/{:<4} state {:?}  (q quits)",
            offset,
            strip.max_scroll_left() as usize,
            dragger.state()
        )),
    )?;
    for row in 0..STRIP_HEIGHT {
        queue!(
            stdout,
            cursor::MoveTo(0, STRIP_ROW + row),
            style::Print(&ruler)
        )?;
    }
    stdout.flush()
}
