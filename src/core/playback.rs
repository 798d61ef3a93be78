//! Abspiel-Cursor entlang der Playback-Kurve.

/// Skalierung von `speed * dt` auf den normierten Kurvenparameter.
pub const PLAYBACK_RATE: f64 = 0.1;

/// Ergebnis eines Abspiel-Ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackTick {
    /// Cursor pausiert, nichts bewegt
    Paused,
    /// Cursor weitergelaufen
    Advanced,
    /// Grenze erreicht, Wiedergabe beendet
    Finished,
}

/// Position der Wiedergabe auf der Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackCursor {
    /// Normierter Kurvenparameter in [0, 1]
    pub t: f64,
    /// Rückwärts abspielen
    pub reversed: bool,
    /// Pausiert
    pub paused: bool,
}

impl PlaybackCursor {
    /// Startet am Anfang (vorwärts) bzw. am Ende (rückwärts).
    pub fn start(reversed: bool) -> Self {
        Self {
            t: if reversed { 1.0 } else { 0.0 },
            reversed,
            paused: false,
        }
    }

    /// +1 vorwärts, -1 rückwärts
    pub fn direction(&self) -> f64 {
        if self.reversed {
            -1.0
        } else {
            1.0
        }
    }

    /// Rückt den Cursor um `direction * speed * dt * PLAYBACK_RATE` vor.
    ///
    /// Beim Überschreiten von 0 oder 1 wird auf die Grenze geklemmt und
    /// `Finished` gemeldet.
    pub fn tick(&mut self, dt: f64, speed: f64) -> PlaybackTick {
        if self.paused {
            return PlaybackTick::Paused;
        }
        self.t += self.direction() * speed * dt * PLAYBACK_RATE;
        if self.t >= 1.0 || self.t <= 0.0 {
            self.t = self.t.clamp(0.0, 1.0);
            return PlaybackTick::Finished;
        }
        PlaybackTick::Advanced
    }
}
