//! Playback-Kurve: zentripetale Catmull-Rom-Spline durch alle Wegpunkte.
//!
//! Die Kurve läuft durch jeden Punkt in Pfadreihenfolge (C¹-stetig) und wird
//! über eine Bogenlängen-Tabelle umparametrisiert, damit `t` gleichmäßig
//! entlang der Strecke voranschreitet.

use glam::{DMat3, DQuat, DVec3};

/// Mindestanzahl an Stützstellen der Bogenlängen-Tabelle.
const ARC_LENGTH_DIVISIONS: usize = 200;
/// Stützstellen pro Segment bei langen Pfaden.
const DIVISIONS_PER_SEGMENT: usize = 8;
/// Unterhalb dieses Knotenabstands wird auf uniforme Parametrisierung ausgewichen.
const KNOT_EPSILON: f64 = 1e-4;

/// Welt-Oben für die Blickrichtung entlang der Tangente.
pub const WORLD_UP: DVec3 = DVec3::Y;
/// Ersatz-Oben, falls die Tangente parallel zu `WORLD_UP` verläuft.
pub const FALLBACK_UP: DVec3 = DVec3::Z;

/// Position und normierte Tangente an einer Kurvenstelle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample {
    pub position: DVec3,
    pub tangent: DVec3,
}

impl CurveSample {
    /// Orientierung, die entlang der Tangente blickt.
    pub fn look_rotation(&self) -> DQuat {
        look_rotation(self.tangent)
    }
}

/// Kubisches Polynom `c0 + c1·t + c2·t² + c3·t³` eines Segments.
#[derive(Debug, Clone, Copy)]
struct CubicSegment {
    c0: DVec3,
    c1: DVec3,
    c2: DVec3,
    c3: DVec3,
}

impl CubicSegment {
    /// Hermite-Form aus Endpunkten und Tangenten.
    fn hermite(x0: DVec3, x1: DVec3, t0: DVec3, t1: DVec3) -> Self {
        Self {
            c0: x0,
            c1: t0,
            c2: -3.0 * x0 + 3.0 * x1 - 2.0 * t0 - t1,
            c3: 2.0 * x0 - 2.0 * x1 + t0 + t1,
        }
    }

    /// Zentripetales Catmull-Rom-Segment von `p1` nach `p2`.
    fn centripetal(p0: DVec3, p1: DVec3, p2: DVec3, p3: DVec3) -> Self {
        let mut dt0 = p0.distance_squared(p1).powf(0.25);
        let mut dt1 = p1.distance_squared(p2).powf(0.25);
        let mut dt2 = p2.distance_squared(p3).powf(0.25);

        if dt1 < KNOT_EPSILON {
            dt1 = 1.0;
        }
        if dt0 < KNOT_EPSILON {
            dt0 = dt1;
        }
        if dt2 < KNOT_EPSILON {
            dt2 = dt1;
        }

        let mut t1 = (p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1;
        let mut t2 = (p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2;
        t1 *= dt1;
        t2 *= dt1;

        Self::hermite(p1, p2, t1, t2)
    }

    fn point(&self, t: f64) -> DVec3 {
        let t2 = t * t;
        self.c0 + self.c1 * t + self.c2 * t2 + self.c3 * (t2 * t)
    }

    fn derivative(&self, t: f64) -> DVec3 {
        self.c1 + 2.0 * self.c2 * t + 3.0 * self.c3 * (t * t)
    }
}

/// Glatte Kurve durch mindestens zwei Punkte.
#[derive(Debug, Clone)]
pub struct PlaybackCurve {
    points: Vec<DVec3>,
    segments: Vec<CubicSegment>,
    /// Kumulierte Bogenlängen an gleichmäßig verteilten Rohparametern
    arc_lengths: Vec<f64>,
}

impl PlaybackCurve {
    /// Baut die Kurve; weniger als zwei Punkte ergeben keine Kurve.
    pub fn build(points: &[DVec3]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }

        let n = points.len();
        // Phantom-Punkte an den Rändern gespiegelt
        let start_phantom = 2.0 * points[0] - points[1];
        let end_phantom = 2.0 * points[n - 1] - points[n - 2];

        let segments = (0..n - 1)
            .map(|seg| {
                let p0 = if seg == 0 {
                    start_phantom
                } else {
                    points[seg - 1]
                };
                let p3 = if seg + 2 < n {
                    points[seg + 2]
                } else {
                    end_phantom
                };
                CubicSegment::centripetal(p0, points[seg], points[seg + 1], p3)
            })
            .collect();

        let mut curve = Self {
            points: points.to_vec(),
            segments,
            arc_lengths: Vec::new(),
        };
        curve.arc_lengths = curve.compute_arc_lengths();
        Some(curve)
    }

    /// Kontrollpunkte der Kurve
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Angenäherte Gesamtlänge
    pub fn length(&self) -> f64 {
        self.arc_lengths.last().copied().unwrap_or(0.0)
    }

    /// Position und Tangente bei normiertem Bogenlängen-Parameter `t ∈ [0, 1]`.
    pub fn sample_at(&self, t: f64) -> CurveSample {
        let raw = self.raw_param_at(t);
        let (segment, local) = self.locate(raw);
        let position = self.segments[segment].point(local);

        let fallback = self.points[segment + 1] - self.points[segment];
        let tangent = self.segments[segment]
            .derivative(local)
            .try_normalize()
            .or_else(|| fallback.try_normalize())
            .unwrap_or(DVec3::Z);

        CurveSample { position, tangent }
    }

    /// Gleichmäßig verteilte Punkte entlang der Kurve (z.B. für Linien-Darstellung).
    pub fn sample_points(&self, count: usize) -> Vec<DVec3> {
        if count < 2 {
            return vec![self.sample_at(0.0).position];
        }
        (0..count)
            .map(|i| self.sample_at(i as f64 / (count - 1) as f64).position)
            .collect()
    }

    /// Rohparameter → (Segmentindex, lokaler Parameter)
    fn locate(&self, raw: f64) -> (usize, f64) {
        let last = self.segments.len() - 1;
        let scaled = raw.clamp(0.0, 1.0) * self.segments.len() as f64;
        let segment = scaled.floor() as usize;
        if segment > last {
            (last, 1.0)
        } else {
            (segment, scaled - segment as f64)
        }
    }

    fn point_raw(&self, raw: f64) -> DVec3 {
        let (segment, local) = self.locate(raw);
        self.segments[segment].point(local)
    }

    fn compute_arc_lengths(&self) -> Vec<f64> {
        let divisions = (self.segments.len() * DIVISIONS_PER_SEGMENT).max(ARC_LENGTH_DIVISIONS);
        let mut lengths = Vec::with_capacity(divisions + 1);
        let mut previous = self.point_raw(0.0);
        let mut sum = 0.0;
        lengths.push(0.0);
        for i in 1..=divisions {
            let current = self.point_raw(i as f64 / divisions as f64);
            sum += current.distance(previous);
            lengths.push(sum);
            previous = current;
        }
        lengths
    }

    /// Bogenlängen-Parameter → Rohparameter (binäre Suche in der Tabelle).
    fn raw_param_at(&self, t: f64) -> f64 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        if t >= 1.0 {
            return 1.0;
        }
        let total = self.length();
        if total <= f64::EPSILON {
            return t;
        }

        let target = t * total;
        let lengths = &self.arc_lengths;
        let upper = lengths.partition_point(|&l| l < target).max(1);
        let lower = upper - 1;
        let span = lengths[upper] - lengths[lower];
        let fraction = if span > 0.0 {
            (target - lengths[lower]) / span
        } else {
            0.0
        };
        (lower as f64 + fraction) / (lengths.len() - 1) as f64
    }
}

/// Rotation, deren lokale +Z-Achse entlang `forward` zeigt.
///
/// Oben ist `WORLD_UP`; liegt `forward` parallel dazu, wird `FALLBACK_UP`
/// verwendet, damit keine entartete Basis entsteht.
pub fn look_rotation(forward: DVec3) -> DQuat {
    let Some(z) = forward.try_normalize() else {
        return DQuat::IDENTITY;
    };
    let x = WORLD_UP
        .cross(z)
        .try_normalize()
        .or_else(|| FALLBACK_UP.cross(z).try_normalize())
        .unwrap_or(DVec3::X);
    let y = z.cross(x);
    DQuat::from_mat3(&DMat3::from_cols(x, y, z))
}
