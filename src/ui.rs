use crate::clock::Clock;
use crate::input::{self, Event};
use crate::list;
use crate::session::{Scene, Session};
use crate::sort::Role;
use ncurses as nc;
use pp::*;
use tracing::debug;

const LABEL: &str =
    "R reset, SPACE start, A/D ascending/descending, B/I/M/Q bubble/insertion/merge/quick, ESC quit";

/// Rows taken by the title, status bar, label and a blank separator.
const TOP_PAD: usize = 4;
const SIDE_PAD: usize = 2;

/// What a cell means; the canvas decides how it looks.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Paint {
    Text,
    Title,
    Status,
    Bar(usize),
    Highlight(Role),
}

impl Paint {
    pub fn pair(self) -> i16 {
        match self {
            Paint::Text => 1,
            Paint::Title => 2,
            Paint::Status => 3,
            Paint::Bar(shade) => 4 + (shade % 3) as i16,
            Paint::Highlight(Role::Compared) => 7,
            Paint::Highlight(Role::Swapped) => 8,
            Paint::Highlight(Role::Placed) => 9,
        }
    }
}

/// Colors for every paint, as (foreground, background) or as a solid fill.
#[derive(Clone, Debug)]
pub struct Theme {
    pub text: (i16, i16),
    pub title: (i16, i16),
    pub status: (i16, i16),
    pub shades: [i16; 3],
    pub compared: i16,
    pub swapped: i16,
    pub placed: i16,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: (nc::COLOR_WHITE, nc::COLOR_BLACK),
            title: (nc::COLOR_CYAN, nc::COLOR_BLACK),
            status: (nc::COLOR_BLACK, nc::COLOR_WHITE),
            shades: [nc::COLOR_WHITE, nc::COLOR_CYAN, nc::COLOR_BLUE],
            compared: nc::COLOR_YELLOW,
            swapped: nc::COLOR_RED,
            placed: nc::COLOR_GREEN,
        }
    }
}

impl Theme {
    /// (pair, foreground, background) for every paint.
    pub fn color_pairs(&self) -> Vec<(i16, i16, i16)> {
        let mut pairs = vec![
            (Paint::Text.pair(), self.text.0, self.text.1),
            (Paint::Title.pair(), self.title.0, self.title.1),
            (Paint::Status.pair(), self.status.0, self.status.1),
        ];
        for (shade, &color) in self.shades.iter().enumerate() {
            pairs.push((Paint::Bar(shade).pair(), color, color));
        }
        for &(role, color) in &[
            (Role::Compared, self.compared),
            (Role::Swapped, self.swapped),
            (Role::Placed, self.placed),
        ] {
            pairs.push((Paint::Highlight(role).pair(), color, color));
        }
        pairs
    }
}

/// The drawing surface the interface renders onto.
pub trait Canvas {
    /// Rows and columns.
    fn dimensions(&self) -> (usize, usize);
    fn erase(&mut self);
    /// Forces a full repaint on the next refresh.
    fn repaint(&mut self);
    fn print(&mut self, row: usize, col: usize, text: &str, paint: Paint);
    fn refresh(&mut self);
}

pub struct UserInterface {
    pub session: Session,
    clock: Clock,
}

impl UserInterface {
    pub fn new(session: Session, fps: u32) -> Self {
        Self {
            session,
            clock: Clock::new(fps),
        }
    }

    pub fn mainloop<C: Canvas>(&mut self, canvas: &mut C) {
        while self.frame(canvas, input::poll()) {
            self.clock.tick();
        }
    }

    /// Handles pending input, advances the session once and redraws.
    /// Returns `false` when the user asked to quit.
    pub fn frame<C, I>(&mut self, canvas: &mut C, events: I) -> bool
    where
        C: Canvas,
        I: IntoIterator<Item = Event>,
    {
        for event in events {
            match event {
                Event::Quit => return false,
                Event::Resize => canvas.repaint(),
                Event::KeyPress(key) => match input::command(key) {
                    Some(command) => self.session.handle(command),
                    None => debug!(?key, "unbound key"),
                },
            }
        }
        self.session.tick();
        self.populate_screen(canvas);
        true
    }

    pub fn populate_screen<C: Canvas>(&self, canvas: &mut C) {
        let scene = self.session.scene();
        canvas.erase();
        self.paint_header(canvas, &scene);
        self.paint_list(canvas, &scene);
        canvas.refresh();
    }

    fn paint_header<C: Canvas>(&self, canvas: &mut C, scene: &Scene) {
        let (rows, cols) = canvas.dimensions();
        if rows < TOP_PAD || cols == 0 {
            return;
        }
        let (offset, title) = centered(TITLE, cols);
        canvas.print(0, offset, &title, Paint::Title);
        canvas.print(1, 0, &ljust(&status_bar(scene), cols), Paint::Status);
        canvas.print(2, 0, &fit(LABEL, cols), Paint::Text);
    }

    fn paint_list<C: Canvas>(&self, canvas: &mut C, scene: &Scene) {
        let (rows, cols) = canvas.dimensions();
        let (min, max) = match list::bounds(scene.list) {
            Some(bounds) => bounds,
            None => return,
        };
        let area = rows.saturating_sub(TOP_PAD);
        let (left, width) = bar_layout(scene.list.len(), cols);
        let block = " ".repeat(width);

        for (index, &value) in scene.list.iter().enumerate() {
            let col = left + index * width;
            if col + width > cols {
                break;
            }
            let paint = scene
                .highlight
                .and_then(|step| step.role_of(index))
                .map(Paint::Highlight)
                .unwrap_or(Paint::Bar(index % 3));
            let height = bar_height(value, min, max, area);
            for row in rows - height..rows {
                canvas.print(row, col, &block, paint);
            }
        }
    }
}

/// Left column and width of the bars, centered between the side paddings.
fn bar_layout(len: usize, cols: usize) -> (usize, usize) {
    let usable = cols.saturating_sub(2 * SIDE_PAD);
    let width = (usable / len.max(1)).max(1);
    (SIDE_PAD + usable.saturating_sub(width * len) / 2, width)
}

/// Scales `value` onto `1..=area` rows; the smallest value is one row tall.
fn bar_height(value: i64, min: i64, max: i64, area: usize) -> usize {
    if area == 0 {
        return 0;
    }
    if max == min {
        return area;
    }
    let span = max as i128 - min as i128;
    let offset = value as i128 - min as i128;
    1 + (offset * (area as i128 - 1) / span) as usize
}

pub mod curses {
    use super::{Canvas, Paint, Theme};
    use ncurses as nc;

    pub struct Curses;

    pub fn init(theme: &Theme) -> Curses {
        nc::setlocale(nc::LcCategory::all, "");
        nc::initscr();
        nc::raw();
        nc::noecho();
        nc::keypad(nc::stdscr(), true);
        nc::nodelay(nc::stdscr(), true);
        nc::curs_set(nc::CURSOR_VISIBILITY::CURSOR_INVISIBLE);
        init_color_pairs(theme);
        Curses
    }

    pub fn init_color_pairs(theme: &Theme) {
        nc::start_color();
        for (pair, foreground, background) in theme.color_pairs() {
            nc::init_pair(pair, foreground, background);
        }
    }

    pub fn teardown() {
        nc::clear();
        nc::refresh();
        nc::doupdate();
        nc::endwin();
    }

    impl Canvas for Curses {
        fn dimensions(&self) -> (usize, usize) {
            (nc::LINES().max(0) as usize, nc::COLS().max(0) as usize)
        }

        fn erase(&mut self) {
            nc::erase();
        }

        fn repaint(&mut self) {
            nc::clear();
        }

        fn print(&mut self, row: usize, col: usize, text: &str, paint: Paint) {
            let attributes = nc::COLOR_PAIR(paint.pair());
            nc::attron(attributes);
            nc::mvaddstr(row as i32, col as i32, text);
            nc::attroff(attributes);
        }

        fn refresh(&mut self) {
            nc::refresh();
        }
    }
}

mod pp {
    /* Pretty printer */
    use crate::session::{Scene, SessionState};
    use crate::sort::Direction;
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    pub const TITLE: &str = "Sorting Algorithm Visualizer";

    pub fn status_bar(scene: &Scene) -> String {
        format!(
            "- algorithm:{} - order:{} - state:{} - steps:{} - writes:{} -",
            scene.algorithm.name(),
            direction(scene.direction),
            state(scene.state),
            scene.steps,
            scene.writes,
        )
    }

    pub fn direction(value: Direction) -> &'static str {
        match value {
            Direction::Ascending => "ascending",
            Direction::Descending => "descending",
        }
    }

    pub fn state(value: SessionState) -> &'static str {
        match value {
            SessionState::Idle => "idle",
            SessionState::Running => "running",
        }
    }

    /// The longest prefix of `string` that fits in `cols` columns.
    pub fn fit(string: &str, cols: usize) -> String {
        let mut width = 0;
        string
            .chars()
            .take_while(|ch| {
                width += ch.width().unwrap_or(0);
                width <= cols
            })
            .collect()
    }

    pub fn ljust(string: &str, cols: usize) -> String {
        let fitted = fit(string, cols);
        let padding = cols - fitted.width();
        format!("{}{}", fitted, " ".repeat(padding))
    }

    pub fn centered(string: &str, cols: usize) -> (usize, String) {
        let fitted = fit(string, cols);
        ((cols - fitted.width()) / 2, fitted)
    }
}
