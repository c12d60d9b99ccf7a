//! TUI application state and event loop.
//!
//! Design: single-barn focus. Navigate the fleet list; the barn under the
//! cursor owns the heat-map panel and the concentration chart. Every
//! refresh tick wobbles each barn's mock reading a little and regenerates
//! the focused heat map, so the dashboard breathes without any real feed.

use std::collections::{HashMap, VecDeque};
use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::prelude::*;

use barnsense_core::{Barn, HeatMap, SafetyBand};

/// Maximum readings retained per barn for the chart.
pub const MAX_HISTORY: usize = 120;

/// Per-tick wobble range applied to each barn's mock base reading.
const WOBBLE_MIN: f64 = 0.9;
const WOBBLE_MAX: f64 = 1.1;

pub struct App {
    fleet: Vec<Barn>,
    cursor: usize,
    running: bool,
    paused: bool,
    refresh_rate: Duration,
    /// Vertical layer shown in the heat-map panel (0 = floor).
    layer: usize,
    rng: StdRng,
    /// Current simulated reading per barn, fleet order.
    live_ppm: Vec<f64>,
    /// Reading history per barn name.
    history: HashMap<String, VecDeque<f64>>,
    /// Heat map for the barn under the cursor.
    map: HeatMap,
    tick_count: u64,
}

impl App {
    pub fn new(fleet: Vec<Barn>, refresh_secs: f64) -> Self {
        assert!(!fleet.is_empty(), "dashboard needs at least one barn");

        let live_ppm: Vec<f64> = fleet.iter().map(|b| b.ammonia_ppm as f64).collect();
        let mut rng = StdRng::from_os_rng();
        let map = HeatMap::generate(live_ppm[0], &mut rng)
            .expect("mock readings are valid base readings");

        Self {
            fleet,
            cursor: 0,
            running: true,
            paused: false,
            refresh_rate: Duration::from_secs_f64(refresh_secs),
            layer: 0,
            rng,
            live_ppm,
            history: HashMap::new(),
            map,
            tick_count: 0,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook that restores terminal before printing the panic.
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
            original_hook(info);
        }));

        let result = self.run_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error.
        let _ = std::panic::take_hook();
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            crossterm::cursor::Show
        )?;

        result
    }

    fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        self.tick();
        let mut last_tick = Instant::now();

        while self.running {
            terminal.draw(|f| super::ui::draw(f, self))?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }

            if last_tick.elapsed() >= self.refresh_rate {
                if !self.paused {
                    self.tick();
                }
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Up | KeyCode::Char('k') => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.regenerate();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor < self.fleet.len().saturating_sub(1) {
                    self.cursor += 1;
                    self.regenerate();
                }
            }
            KeyCode::Char('g') => {
                self.layer = (self.layer + 1) % self.map.dims.y;
            }
            KeyCode::Char('r') | KeyCode::Char(' ') => self.regenerate(),
            KeyCode::Char('p') => self.paused = !self.paused,
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char(']') => {
                let secs = (self.refresh_rate.as_secs_f64() / 2.0).max(0.1);
                self.refresh_rate = Duration::from_secs_f64(secs);
            }
            KeyCode::Char('-') | KeyCode::Char('[') => {
                let secs = (self.refresh_rate.as_secs_f64() * 2.0).min(10.0);
                self.refresh_rate = Duration::from_secs_f64(secs);
            }
            _ => {}
        }
    }

    /// Advance the simulation one step: wobble readings, extend history,
    /// rebuild the focused heat map.
    fn tick(&mut self) {
        for (i, barn) in self.fleet.iter().enumerate() {
            let wobble = self.rng.random_range(WOBBLE_MIN..=WOBBLE_MAX);
            self.live_ppm[i] = barn.ammonia_ppm as f64 * wobble;

            let hist = self.history.entry(barn.name.clone()).or_default();
            hist.push_back(self.live_ppm[i]);
            if hist.len() > MAX_HISTORY {
                hist.pop_front();
            }
        }
        self.tick_count += 1;
        self.regenerate();
    }

    /// Rebuild the heat map for the barn under the cursor from its
    /// current simulated reading.
    fn regenerate(&mut self) {
        self.map = HeatMap::generate(self.live_ppm[self.cursor], &mut self.rng)
            .expect("simulated readings stay non-negative");
    }

    // --- Accessors for the UI ---

    pub fn fleet(&self) -> &[Barn] {
        &self.fleet
    }
    pub fn cursor(&self) -> usize {
        self.cursor
    }
    pub fn layer(&self) -> usize {
        self.layer
    }
    pub fn map(&self) -> &HeatMap {
        &self.map
    }
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
    pub fn is_paused(&self) -> bool {
        self.paused
    }
    pub fn refresh_rate_secs(&self) -> f64 {
        self.refresh_rate.as_secs_f64()
    }

    pub fn focused_barn(&self) -> &Barn {
        &self.fleet[self.cursor]
    }

    pub fn live_ppm(&self, index: usize) -> f64 {
        self.live_ppm[index]
    }

    pub fn live_band(&self, index: usize) -> SafetyBand {
        SafetyBand::from_ppm(self.live_ppm[index])
    }

    /// Reading history for the focused barn, oldest first.
    pub fn focused_history(&self) -> Vec<f64> {
        self.history
            .get(&self.fleet[self.cursor].name)
            .map(|d| d.iter().copied().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barnsense_core::sample_fleet;

    fn app() -> App {
        App::new(sample_fleet(), 1.0)
    }

    #[test]
    fn new_app_focuses_first_barn() {
        let a = app();
        assert_eq!(a.cursor(), 0);
        assert_eq!(a.focused_barn().name, "Barn 1");
        assert_eq!(a.map().zones.len(), 75);
    }

    #[test]
    fn tick_extends_history_for_every_barn() {
        let mut a = app();
        a.tick();
        a.tick();
        for barn in a.fleet.clone() {
            let hist = a.history.get(&barn.name).expect("history exists");
            assert_eq!(hist.len(), 2);
        }
        assert_eq!(a.tick_count(), 2);
    }

    #[test]
    fn history_is_capped() {
        let mut a = app();
        for _ in 0..(MAX_HISTORY + 20) {
            a.tick();
        }
        assert_eq!(a.focused_history().len(), MAX_HISTORY);
    }

    #[test]
    fn wobble_stays_near_the_mock_reading() {
        let mut a = app();
        for _ in 0..50 {
            a.tick();
            for (i, barn) in a.fleet.clone().iter().enumerate() {
                let base = barn.ammonia_ppm as f64;
                let live = a.live_ppm(i);
                assert!(
                    live >= base * WOBBLE_MIN - 1e-9 && live <= base * WOBBLE_MAX + 1e-9,
                    "{} wandered to {live} from base {base}",
                    barn.name
                );
            }
        }
    }

    #[test]
    fn navigation_clamps_and_regenerates() {
        let mut a = app();
        a.handle_key(KeyCode::Up); // already at the top
        assert_eq!(a.cursor(), 0);
        a.handle_key(KeyCode::Down);
        assert_eq!(a.cursor(), 1);
        assert_eq!(a.focused_barn().name, "Barn 2");
        for _ in 0..10 {
            a.handle_key(KeyCode::Down);
        }
        assert_eq!(a.cursor(), 4, "cursor should clamp at the last barn");
    }

    #[test]
    fn layer_cycles_through_three() {
        let mut a = app();
        assert_eq!(a.layer(), 0);
        a.handle_key(KeyCode::Char('g'));
        assert_eq!(a.layer(), 1);
        a.handle_key(KeyCode::Char('g'));
        assert_eq!(a.layer(), 2);
        a.handle_key(KeyCode::Char('g'));
        assert_eq!(a.layer(), 0);
    }

    #[test]
    fn pause_toggles() {
        let mut a = app();
        assert!(!a.is_paused());
        a.handle_key(KeyCode::Char('p'));
        assert!(a.is_paused());
        a.handle_key(KeyCode::Char('p'));
        assert!(!a.is_paused());
    }

    #[test]
    fn refresh_rate_bounds() {
        let mut a = app();
        for _ in 0..20 {
            a.handle_key(KeyCode::Char('+'));
        }
        assert!(a.refresh_rate_secs() >= 0.1);
        for _ in 0..20 {
            a.handle_key(KeyCode::Char('-'));
        }
        assert!(a.refresh_rate_secs() <= 10.0);
    }

    #[test]
    fn quit_key_stops_the_loop() {
        let mut a = app();
        a.handle_key(KeyCode::Char('q'));
        assert!(!a.running);
    }
}
