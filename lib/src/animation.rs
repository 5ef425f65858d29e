//! Progressive reveal of a finished grid
//!
//! Timing lives entirely here: the grid is computed first, then replayed as a
//! sequence of text chunks with pauses between them. Concatenating every chunk
//! always gives back [`AsciiGrid::to_text`].

use crate::ascii::AsciiGrid;
use crate::config::RenderSettings;
use std::io::{self, Write};
use std::ops::ControlFlow;
use std::time::Duration;

/// How a grid is revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    /// Everything at once
    Instant,
    /// One row per step, pausing `delay` after each
    Line,
    /// One character per step, pausing `delay / 10` after each
    Character,
}

impl RevealMode {
    /// Character animation wins over live line rendering
    pub fn from_settings(settings: &RenderSettings) -> Self {
        if settings.animation_enabled {
            RevealMode::Character
        } else if settings.live_render {
            RevealMode::Line
        } else {
            RevealMode::Instant
        }
    }
}

/// One emission: text to append, then how long to wait
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealStep {
    pub text: String,
    pub pause: Duration,
}

/// Iterator over the reveal steps of a grid
#[derive(Debug, Clone)]
pub struct Reveal<'a> {
    grid: &'a AsciiGrid,
    mode: RevealMode,
    delay: Duration,
    row: usize,
    // byte offset into the current row (character mode)
    offset: usize,
    done: bool,
}

impl<'a> Reveal<'a> {
    pub fn new(grid: &'a AsciiGrid, mode: RevealMode, delay: Duration) -> Self {
        Self {
            grid,
            mode,
            delay,
            row: 0,
            offset: 0,
            done: false,
        }
    }

    pub fn from_settings(grid: &'a AsciiGrid, settings: &RenderSettings) -> Self {
        Self::new(grid, RevealMode::from_settings(settings), settings.animation_delay())
    }

    pub fn mode(&self) -> RevealMode {
        self.mode
    }

    /// Total number of steps this reveal produces
    pub fn step_count(&self) -> usize {
        match self.mode {
            RevealMode::Instant => 1,
            RevealMode::Line => self.grid.rows().len(),
            RevealMode::Character => self
                .grid
                .rows()
                .iter()
                .map(|row| row.chars().count() + 1)
                .sum(),
        }
    }

    fn next_char_step(&mut self) -> Option<RevealStep> {
        let row = self.grid.rows().get(self.row)?;

        match row[self.offset..].chars().next() {
            Some(ch) => {
                self.offset += ch.len_utf8();
                Some(RevealStep {
                    text: ch.to_string(),
                    pause: self.delay / 10,
                })
            }
            None => {
                self.row += 1;
                self.offset = 0;
                Some(RevealStep {
                    text: "\n".to_string(),
                    pause: Duration::ZERO,
                })
            }
        }
    }
}

impl Iterator for Reveal<'_> {
    type Item = RevealStep;

    fn next(&mut self) -> Option<RevealStep> {
        if self.done {
            return None;
        }

        let step = match self.mode {
            RevealMode::Instant => {
                self.done = true;
                Some(RevealStep {
                    text: self.grid.to_text(),
                    pause: Duration::ZERO,
                })
            }
            RevealMode::Line => {
                let step = self.grid.rows().get(self.row).map(|row| RevealStep {
                    text: format!("{row}\n"),
                    pause: self.delay,
                });
                self.row += 1;
                step
            }
            RevealMode::Character => self.next_char_step(),
        };

        if step.is_none() {
            self.done = true;
        }
        step
    }
}

/// Write each step to `out`, flushing and then calling `pace` with its pause
///
/// `pace` decides how to wait (sleep, schedule a frame, nothing). Returning
/// `ControlFlow::Break` stops before the next chunk is written.
pub fn play<W, F>(reveal: Reveal<'_>, out: &mut W, mut pace: F) -> io::Result<()>
where
    W: Write,
    F: FnMut(Duration) -> ControlFlow<()>,
{
    for step in reveal {
        out.write_all(step.text.as_bytes())?;
        out.flush()?;

        if pace(step.pause).is_break() {
            log::debug!("reveal cancelled");
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> AsciiGrid {
        AsciiGrid::from_rows(3, vec!["ab$".into(), " .@".into()])
    }

    fn collect(reveal: Reveal<'_>) -> String {
        reveal.map(|step| step.text).collect()
    }

    #[test]
    fn test_mode_from_settings() {
        let mut settings = RenderSettings::default();
        assert_eq!(RevealMode::from_settings(&settings), RevealMode::Instant);

        settings.live_render = true;
        assert_eq!(RevealMode::from_settings(&settings), RevealMode::Line);

        settings.animation_enabled = true;
        assert_eq!(RevealMode::from_settings(&settings), RevealMode::Character);
    }

    #[test]
    fn test_every_mode_reproduces_text() {
        let grid = grid();
        for mode in [RevealMode::Instant, RevealMode::Line, RevealMode::Character] {
            let reveal = Reveal::new(&grid, mode, Duration::from_millis(10));
            assert_eq!(collect(reveal), grid.to_text());
        }
    }

    #[test]
    fn test_step_counts() {
        let grid = grid();
        for mode in [RevealMode::Instant, RevealMode::Line, RevealMode::Character] {
            let reveal = Reveal::new(&grid, mode, Duration::ZERO);
            let expected = reveal.step_count();
            assert_eq!(reveal.count(), expected);
        }
        assert_eq!(Reveal::new(&grid, RevealMode::Character, Duration::ZERO).step_count(), 8);
        assert_eq!(Reveal::new(&grid, RevealMode::Line, Duration::ZERO).step_count(), 2);
    }

    #[test]
    fn test_pauses() {
        let grid = grid();
        let delay = Duration::from_millis(20);

        let line: Vec<_> = Reveal::new(&grid, RevealMode::Line, delay).collect();
        assert!(line.iter().all(|step| step.pause == delay));

        let chars: Vec<_> = Reveal::new(&grid, RevealMode::Character, delay).collect();
        assert_eq!(chars[0].pause, Duration::from_millis(2));
        assert_eq!(chars[3], RevealStep { text: "\n".into(), pause: Duration::ZERO });

        let instant: Vec<_> = Reveal::new(&grid, RevealMode::Instant, delay).collect();
        assert_eq!(instant.len(), 1);
        assert_eq!(instant[0].pause, Duration::ZERO);
    }

    #[test]
    fn test_multibyte_ramp_chars() {
        let grid = AsciiGrid::from_rows(2, vec!["░█".into()]);
        let reveal = Reveal::new(&grid, RevealMode::Character, Duration::ZERO);
        let texts: Vec<_> = reveal.map(|step| step.text).collect();
        assert_eq!(texts, ["░", "█", "\n"]);
    }

    #[test]
    fn test_play_writes_everything() {
        let grid = grid();
        let mut out = Vec::new();
        let mut pauses = Vec::new();

        let reveal = Reveal::new(&grid, RevealMode::Line, Duration::from_millis(5));
        play(reveal, &mut out, |pause| {
            pauses.push(pause);
            ControlFlow::Continue(())
        })
        .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), grid.to_text());
        assert_eq!(pauses, [Duration::from_millis(5); 2]);
    }

    #[test]
    fn test_play_can_cancel() {
        let grid = grid();
        let mut out = Vec::new();

        let reveal = Reveal::new(&grid, RevealMode::Line, Duration::ZERO);
        play(reveal, &mut out, |_| ControlFlow::Break(())).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "ab$\n");
    }

    #[test]
    fn test_empty_grid() {
        let grid = AsciiGrid::from_rows(0, Vec::new());
        assert_eq!(Reveal::new(&grid, RevealMode::Line, Duration::ZERO).count(), 0);
        assert_eq!(Reveal::new(&grid, RevealMode::Character, Duration::ZERO).count(), 0);
        assert_eq!(collect(Reveal::new(&grid, RevealMode::Instant, Duration::ZERO)), "");
    }
}
