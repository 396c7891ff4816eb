//! Keyframed curves with Hermite tangents.
//!
//! Each key carries an incoming and outgoing slope. Between two keys the curve
//! is the cubic Hermite spline through both values, using the left key's
//! outgoing tangent and the right key's incoming tangent. Outside the key range
//! the curve holds the first or last value.

/// A single control point on a [`KeyframeCurve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
    pub in_tangent: f32,
    pub out_tangent: f32,
}

impl Keyframe {
    pub const fn new(time: f32, value: f32, in_tangent: f32, out_tangent: f32) -> Self {
        Self {
            time,
            value,
            in_tangent,
            out_tangent,
        }
    }

    /// A key with flat tangents on both sides.
    pub const fn flat(time: f32, value: f32) -> Self {
        Self::new(time, value, 0.0, 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyframeCurve {
    keys: Vec<Keyframe>,
}

impl KeyframeCurve {
    /// Builds a curve from `keys`, ordered by time. Keys with a non-finite
    /// time are dropped.
    pub fn new(keys: impl IntoIterator<Item = Keyframe>) -> Self {
        let mut keys: Vec<Keyframe> = keys
            .into_iter()
            .filter(|k| {
                let keep = k.time.is_finite();
                if !keep {
                    log::warn!("KeyframeCurve: dropping key with non-finite time {:?}", k);
                }
                keep
            })
            .collect();
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { keys }
    }

    pub fn elastic_bounce() -> Self {
        Self::new([
            Keyframe::new(0.0, 0.0, 0.0, 1.5),
            Keyframe::flat(0.8, 1.05),
            Keyframe::flat(1.0, 1.0),
        ])
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Samples the curve at `time`.
    ///
    /// An empty curve is the identity.
    pub fn evaluate(&self, time: f32) -> f32 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return time,
        };
        if time <= first.time {
            return first.value;
        }
        if time >= last.time {
            return last.value;
        }

        // First key strictly after `time`; never 0 given the guards above.
        let right = self.keys.partition_point(|k| k.time <= time);
        let k0 = &self.keys[right - 1];
        let k1 = &self.keys[right];
        hermite(k0, k1, time)
    }
}

fn hermite(k0: &Keyframe, k1: &Keyframe, time: f32) -> f32 {
    let span = k1.time - k0.time;
    if span <= f32::EPSILON {
        return k1.value;
    }
    // Infinite tangents mark a stepped segment.
    if !k0.out_tangent.is_finite() || !k1.in_tangent.is_finite() {
        return k0.value;
    }

    let s = (time - k0.time) / span;
    let s2 = s * s;
    let s3 = s2 * s;

    let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
    let h10 = s3 - 2.0 * s2 + s;
    let h01 = -2.0 * s3 + 3.0 * s2;
    let h11 = s3 - s2;

    h00 * k0.value + h10 * span * k0.out_tangent + h01 * k1.value + h11 * span * k1.in_tangent
}
